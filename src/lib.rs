//! # minilang
//!
//! minilang is an interpreter for a minimal imperative language written in
//! Rust. A program declares integer variables, assigns arithmetic expressions
//! to them and prints results:
//!
//! ```text
//! program
//!     int a, b;
//! begin
//!     a = 2 ^ 3 ^ 2;
//!     b = (a - 12) / 100;
//!     print b * 2 + 1;
//! end
//! ```
//!
//! Whitespace is insignificant and removed before parsing. The program text is
//! parsed into a syntax tree by a recursive-descent parser and the tree is then
//! executed by a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::{debug, warn};

use crate::{
    ast::Program,
    config::Config,
    error::{Error, ParseError},
    interpreter::{cursor::Cursor, evaluator::core::Context, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Declaration`, `Statement` and `Expr`
/// types that represent a program as a tree. The tree is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Settings for a run.
///
/// Holds the overflow policy that governs integer arithmetic.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while recognizing or
/// evaluating a program, and the `Error` type that carries any of them back
/// to the caller.
///
/// # Responsibilities
/// - Defines error enums for both failure modes (syntax, runtime).
/// - Attaches line numbers and messages naming what went wrong.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together whitespace stripping, parsing, the symbol table
/// and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, cursor, parser, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric utilities.
///
/// Power computation in the wider integer domain and the wrapping and
/// saturating fallbacks used by the overflow policies.
pub mod util;

/// Line written to the output after a program has run to completion.
pub const SUCCESS_MESSAGE: &str = "'end' found, program executed successfully.";

/// Parses program text into a syntax tree without executing it.
///
/// Text after the terminal `end` is ignored.
///
/// # Errors
/// Returns the first syntax error in the program.
///
/// # Examples
/// ```
/// let program = minilang::parse("program int a, b; begin a = 1; print a + b; end").unwrap();
/// assert_eq!(program.declarations[0].names, ["a", "b"]);
/// assert_eq!(program.statements.len(), 2);
///
/// // The declaration is missing its ';'.
/// assert!(minilang::parse("program int a begin a = 1; end").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let mut cursor = Cursor::new(source)?;
    let program = parse_program(&mut cursor)?;

    if !cursor.at_end() {
        warn!(ignored = cursor.remaining(), "ignoring characters after 'end'");
    }
    debug!(declarations = program.declarations.len(),
           statements = program.statements.len(),
           "parsed program");

    Ok(program)
}

/// Parses and executes a program, writing its output to `out`.
///
/// Each print statement writes one line. When the whole program has run,
/// [`SUCCESS_MESSAGE`] is written as the last line. Every call starts from an
/// empty symbol table, so running the same source twice produces the same
/// output.
///
/// # Errors
/// Returns a syntax error before anything is written, or the first runtime
/// error. In the latter case output from earlier statements has already been
/// written to `out`.
///
/// # Examples
/// ```
/// use minilang::{SUCCESS_MESSAGE, config::Config, run};
///
/// let mut out = Vec::new();
/// run("program int a; begin a = 2 + 3 * 4; print a; end", &Config::default(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), format!("14\n{SUCCESS_MESSAGE}\n"));
///
/// // 'x' is never declared.
/// let mut out = Vec::new();
/// assert!(run("program begin print x; end", &Config::default(), &mut out).is_err());
/// assert!(out.is_empty());
/// ```
pub fn run(source: &str, config: &Config, out: &mut dyn Write) -> Result<(), Error> {
    let program = parse(source)?;

    let mut context = Context::new(*config);
    context.eval_program(&program, out)?;

    writeln!(out, "{SUCCESS_MESSAGE}")?;
    Ok(())
}
