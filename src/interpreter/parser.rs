/// Entry points of the parser.
///
/// Holds the result type shared by every grammar procedure, the top-level
/// `program` rule and the expression entry point.
pub mod core;

/// Declaration parsing.
///
/// Recognizes the `int`/`double` declarations that precede `begin`, together
/// with their comma-separated identifier lists.
pub mod declaration;

/// Statement parsing.
///
/// Recognizes the statement list between `begin` and `end`: print statements
/// and assignments.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the precedence levels of arithmetic expressions: additive,
/// multiplicative and right-associative exponentiation.
pub mod binary;

/// Factor parsing.
///
/// Recognizes the operands of arithmetic: integer literals, variable
/// references and parenthesized sub-expressions.
pub mod factor;

/// Utility functions for the parser.
///
/// Small recognizers shared across the grammar: identifiers and keywords.
pub(in crate::interpreter) mod utils;
