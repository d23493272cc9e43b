/// The lexer module strips whitespace from program text.
///
/// Tokens in this language are recognized by exact literal and
/// character-class matching on text from which all whitespace has been
/// removed. The lexer performs that removal and tags every remaining
/// character with its source line for diagnostics.
pub mod lexer;
/// The cursor module provides the read position used by the parser.
///
/// # Responsibilities
/// - Owns the whitespace-stripped program text for one parse.
/// - Matches literals without consuming, consumes characters, reports the
///   current source line.
pub mod cursor;
/// The parser module builds the abstract syntax tree (AST) from program text.
///
/// The parser is a recursive descent with one procedure per nonterminal. Each
/// procedure consumes exactly the characters of its nonterminal through the
/// cursor and returns a tree node.
///
/// # Responsibilities
/// - Recognizes declarations, statements and arithmetic expressions.
/// - Encodes precedence and associativity in the shape of the tree.
/// - Reports the first syntax error with the terminal that was expected.
pub mod parser;
/// The evaluator module executes a parsed program.
///
/// The evaluator walks the AST, maintains variable state in the symbol table
/// and writes one line of output per print statement.
///
/// # Responsibilities
/// - Declares variables, evaluates expressions, performs assignments.
/// - Applies the configured overflow policy to integer arithmetic.
/// - Reports runtime errors such as undeclared variables or division by zero.
pub mod evaluator;
/// The symbol table module stores declared variables.
///
/// An append-only list searched linearly; the first entry with a matching
/// name wins for both reads and writes.
pub mod symbol_table;
