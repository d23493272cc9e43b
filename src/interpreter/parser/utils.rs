use crate::{
    error::ParseError,
    interpreter::{cursor::Cursor, parser::core::ParseResult},
};

/// Parses an identifier and returns its name.
///
/// Grammar: `identifier := letter (letter | digit)*`, ASCII only. The scan is
/// greedy: after whitespace removal `int a1b` declares `a1b`.
///
/// # Errors
/// Returns `ParseError::ExpectedIdentifier` if the current character is not a
/// letter.
pub(in crate::interpreter::parser) fn parse_identifier(cursor: &mut Cursor) -> ParseResult<String> {
    match cursor.peek_char() {
        Some(c) if c.is_ascii_alphabetic() => {},
        found => {
            return Err(ParseError::ExpectedIdentifier { found,
                                                        line: cursor.line() });
        },
    }

    let mut name = String::new();
    while let Some(c) = cursor.peek_char()
          && c.is_ascii_alphanumeric()
    {
        name.push(c);
        cursor.advance(1);
    }
    Ok(name)
}

/// Consumes `keyword` or fails naming it.
///
/// # Errors
/// Returns `ParseError::ExpectedKeyword` if the text does not start with
/// `keyword`.
pub(in crate::interpreter::parser) fn parse_keyword(cursor: &mut Cursor,
                                                    keyword: &'static str)
                                                    -> ParseResult<()> {
    if cursor.eat_literal(keyword) {
        return Ok(());
    }
    Err(ParseError::ExpectedKeyword { keyword,
                                      line: cursor.line() })
}
