/// Parsing errors.
///
/// Defines every way the program text can fail to match the grammar: missing
/// keywords, missing punctuation, characters that cannot start a factor, and
/// literals that do not fit the value type. A parse error is always fatal.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed program, such as reads
/// of undeclared variables, division by zero and overflow under the `error`
/// policy.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete run.
///
/// Every stage returns its own error type; this enum lifts them into one so the
/// driver can decide how to report and exit in a single place.
#[derive(Debug)]
pub enum Error {
    /// The program text does not match the grammar.
    Parse(ParseError),
    /// Evaluation of a well-formed program failed.
    Runtime(RuntimeError),
    /// Writing program output failed.
    Io(std::io::Error),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
            Self::Io(e) => write!(f, "Error while writing output: {e}."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}
