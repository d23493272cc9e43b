use crate::{
    ast::{Declaration, VarKind},
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::{core::ParseResult, utils::parse_identifier},
    },
};

/// Parses the declarations that precede `begin`.
///
/// Grammar: `declarations := declaration*`
///
/// The list ends as soon as the text no longer starts with `int` or `double`.
/// An empty list is valid.
pub fn parse_declarations(cursor: &mut Cursor) -> ParseResult<Vec<Declaration>> {
    let mut declarations = Vec::new();
    while starts_declaration(cursor) {
        declarations.push(parse_declaration(cursor)?);
    }
    Ok(declarations)
}

/// Parses a single declaration.
///
/// Grammar: `declaration := type id_list ";"`
///
/// # Errors
/// - `ExpectedType` if no type keyword is present.
/// - `ExpectedIdentifier` if the list is empty or ends in `,`.
/// - `ExpectedListSeparator` if the list is followed by anything but `;`.
pub fn parse_declaration(cursor: &mut Cursor) -> ParseResult<Declaration> {
    let line = cursor.line();
    let kind = parse_type(cursor)?;
    let names = parse_id_list(cursor)?;

    if cursor.peek_char() == Some(';') {
        cursor.advance(1);
        return Ok(Declaration { kind, names, line });
    }
    Err(ParseError::ExpectedListSeparator { found: cursor.peek_char(),
                                            line:  cursor.line(), })
}

/// Parses a type keyword.
///
/// Grammar: `type := "int" | "double"`
pub fn parse_type(cursor: &mut Cursor) -> ParseResult<VarKind> {
    for kind in [VarKind::Int, VarKind::Double] {
        if cursor.eat_literal(kind.keyword()) {
            return Ok(kind);
        }
    }
    Err(ParseError::ExpectedType { line: cursor.line() })
}

/// Parses a comma-separated list of identifiers.
///
/// Grammar: `id_list := identifier ("," identifier)*`
fn parse_id_list(cursor: &mut Cursor) -> ParseResult<Vec<String>> {
    let mut names = vec![parse_identifier(cursor)?];
    while cursor.peek_char() == Some(',') {
        cursor.advance(1);
        names.push(parse_identifier(cursor)?);
    }
    Ok(names)
}

fn starts_declaration(cursor: &Cursor) -> bool {
    [VarKind::Int, VarKind::Double].iter()
                                   .any(|kind| cursor.matches_literal(kind.keyword()))
}
