use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::{
            binary::parse_additive, declaration::parse_declarations, statement::parse_statements,
            utils::parse_keyword,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// Grammar: `program := "program" declarations "begin" statements "end"`
///
/// Characters after the terminal `end` are not part of the program and are
/// left unconsumed; the caller decides what to do with them.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the start of the program text.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns the first [`ParseError`] encountered. Parsing stops there.
pub fn parse_program(cursor: &mut Cursor) -> ParseResult<Program> {
    parse_keyword(cursor, "program")?;
    let declarations = parse_declarations(cursor)?;
    parse_keyword(cursor, "begin")?;
    let statements = parse_statements(cursor)?;
    parse_keyword(cursor, "end")?;

    Ok(Program { declarations,
                 statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expr := term (("+" | "-") term)*`
pub fn parse_expression(cursor: &mut Cursor) -> ParseResult<Expr> {
    parse_additive(cursor)
}
