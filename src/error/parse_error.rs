#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while recognizing program text.
///
/// Every variant names the terminal or construct that was expected, so the
/// rendered message tells the user what to insert.
pub enum ParseError {
    /// A keyword (`program`, `begin`, `end`) was expected but not found.
    ExpectedKeyword {
        /// The keyword that was expected.
        keyword: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A type keyword (`int` or `double`) was expected.
    ExpectedType {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was expected.
    ExpectedIdentifier {
        /// The character found instead, `None` at end of input.
        found: Option<char>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A declaration's identifier list was neither continued with `,` nor
    /// terminated with `;`.
    ExpectedListSeparator {
        /// The character found instead, `None` at end of input.
        found: Option<char>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A statement was not terminated with `;`.
    ExpectedSemicolon {
        /// The kind of statement that was being terminated.
        after: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An assignment was missing its `=`.
    ExpectedEquals {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A factor started with a character that cannot begin one.
    UnexpectedCharacter {
        /// The character found, `None` at end of input.
        found: Option<char>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The digits of the literal.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An expression nests groups, `^` chains or operator folds deeper than
    /// the parser allows.
    NestingTooDeep {
        /// The maximum number of levels.
        limit: usize,
        /// The source line where the limit was exceeded.
        line:  usize,
    },
    /// The lexer could not classify a piece of input.
    ///
    /// Not produced for `&str` input: every character is either whitespace or
    /// a single-character token.
    InvalidInput {
        /// The offending slice of source text.
        fragment: String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedKeyword { line, .. }
            | Self::ExpectedType { line }
            | Self::ExpectedIdentifier { line, .. }
            | Self::ExpectedListSeparator { line, .. }
            | Self::ExpectedSemicolon { line, .. }
            | Self::ExpectedEquals { line }
            | Self::ExpectedClosingParen { line }
            | Self::UnexpectedCharacter { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::InvalidInput { line, .. } => *line,
        }
    }
}

/// Renders the character a parser stopped at.
struct Found(Option<char>);

impl std::fmt::Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(c) => write!(f, "'{c}'"),
            None => write!(f, "end of input"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedKeyword { keyword, line } => {
                write!(f, "Error on line {line}: '{keyword}' expected.")
            },
            Self::ExpectedType { line } => {
                write!(f, "Error on line {line}: Type expected (int or double).")
            },
            Self::ExpectedIdentifier { found, line } => write!(f,
                                                               "Error on line {line}: Identifier expected, found {}.",
                                                               Found(*found)),
            Self::ExpectedListSeparator { found, line } => write!(f,
                                                                  "Error on line {line}: ';' expected after declaration (or ',' to continue it), found {}.",
                                                                  Found(*found)),
            Self::ExpectedSemicolon { after, line } => {
                write!(f, "Error on line {line}: ';' expected after {after}.")
            },
            Self::ExpectedEquals { line } => write!(f,
                                                    "Error on line {line}: '=' expected in assignment statement."),
            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),
            Self::UnexpectedCharacter { found, line } => write!(f,
                                                                "Error on line {line}: Unexpected {} in expression.",
                                                                Found(*found)),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Expression nested too deeply (more than {limit} levels)."),
            Self::InvalidInput { fragment, line } => {
                write!(f, "Error on line {line}: Invalid input: {fragment:?}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
