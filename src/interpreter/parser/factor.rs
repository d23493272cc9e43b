use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_identifier,
        },
    },
};

/// Parses a factor: the smallest unit of an expression.
///
/// Grammar: `factor := "(" expr ")" | integer_literal | identifier`
///
/// # Errors
/// - `ExpectedClosingParen` if a group is not closed.
/// - `LiteralTooLarge` if a literal does not fit in 64 bits.
/// - `NestingTooDeep` if groups are nested past the cursor's limit.
/// - `UnexpectedCharacter` for anything that cannot begin a factor, including
///   the end of input.
pub fn parse_factor(cursor: &mut Cursor) -> ParseResult<Expr> {
    match cursor.peek_char() {
        Some('(') => parse_group(cursor),
        Some(c) if c.is_ascii_digit() => parse_integer_literal(cursor),
        Some(c) if c.is_ascii_alphabetic() => {
            let line = cursor.line();
            let name = parse_identifier(cursor)?;
            Ok(Expr::Variable { name, line })
        },
        found => Err(ParseError::UnexpectedCharacter { found,
                                                       line: cursor.line() }),
    }
}

/// Parses `( expr )` and returns the inner expression.
///
/// Each open group counts as one nesting level on the cursor.
fn parse_group(cursor: &mut Cursor) -> ParseResult<Expr> {
    cursor.advance(1);
    cursor.enter_nesting()?;
    let inner = parse_expression(cursor)?;

    if cursor.peek_char() != Some(')') {
        return Err(ParseError::ExpectedClosingParen { line: cursor.line() });
    }
    cursor.advance(1);
    cursor.leave_nesting(1);
    Ok(inner)
}

/// Parses a run of decimal digits.
///
/// Digits separated only by whitespace in the source form one literal, since
/// whitespace is gone before parsing starts.
fn parse_integer_literal(cursor: &mut Cursor) -> ParseResult<Expr> {
    let line = cursor.line();
    let mut digits = String::new();
    while let Some(c) = cursor.peek_char()
          && c.is_ascii_digit()
    {
        digits.push(c);
        cursor.advance(1);
    }

    match digits.parse::<i64>() {
        Ok(value) => Ok(Expr::Literal { value, line }),
        Err(_) => Err(ParseError::LiteralTooLarge { literal: digits,
                                                    line }),
    }
}
