/// Core evaluation logic and context management.
///
/// Contains the evaluation context that owns the symbol table, and the
/// routines that execute a parsed program statement by statement.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies `+ - * / ^` to integer operands under the configured overflow
/// policy.
pub mod binary;
