use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_identifier,
        },
    },
};

/// Parses the statements between `begin` and `end`.
///
/// Grammar: `statements := statement*`
///
/// The list ends when the text starts with `end`. Running out of text first
/// means the terminating keyword is missing.
///
/// # Errors
/// `ExpectedKeyword("end")` at end of input, or any error from
/// [`parse_statement`].
pub fn parse_statements(cursor: &mut Cursor) -> ParseResult<Vec<Statement>> {
    let mut statements = Vec::new();
    while !cursor.matches_literal("end") {
        if cursor.at_end() {
            return Err(ParseError::ExpectedKeyword { keyword: "end",
                                                     line:    cursor.line(), });
        }
        statements.push(parse_statement(cursor)?);
    }
    Ok(statements)
}

/// Parses a single statement.
///
/// Grammar: `statement := print_stmt | assign_stmt`
///
/// `print` is recognized by prefix before anything else is tried, so a
/// statement whose text starts with `print` is always a print statement.
pub fn parse_statement(cursor: &mut Cursor) -> ParseResult<Statement> {
    if cursor.matches_literal("print") {
        return parse_print(cursor);
    }
    parse_assignment(cursor)
}

/// Parses `print expr ;`.
fn parse_print(cursor: &mut Cursor) -> ParseResult<Statement> {
    let line = cursor.line();
    cursor.advance("print".len());

    let expr = parse_expression(cursor)?;
    expect_semicolon(cursor, "print statement")?;

    Ok(Statement::Print { expr, line })
}

/// Parses `identifier = expr ;`.
///
/// # Errors
/// - `ExpectedIdentifier` if the statement does not start with a name.
/// - `ExpectedEquals` if the name is not followed by `=`.
/// - `ExpectedSemicolon` if the expression is not followed by `;`.
fn parse_assignment(cursor: &mut Cursor) -> ParseResult<Statement> {
    let line = cursor.line();
    let name = parse_identifier(cursor)?;

    if cursor.peek_char() != Some('=') {
        return Err(ParseError::ExpectedEquals { line: cursor.line() });
    }
    cursor.advance(1);

    let value = parse_expression(cursor)?;
    expect_semicolon(cursor, "assignment")?;

    Ok(Statement::Assign { name, value, line })
}

fn expect_semicolon(cursor: &mut Cursor, after: &'static str) -> ParseResult<()> {
    if cursor.peek_char() == Some(';') {
        cursor.advance(1);
        return Ok(());
    }
    Err(ParseError::ExpectedSemicolon { after,
                                        line: cursor.line() })
}
