use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a unit of program text as seen by the lexer.
///
/// The grammar is matched character by character after whitespace has been
/// removed, so the only meaningful token is a single non-whitespace
/// character. Whitespace never reaches the parser; newlines are counted on the
/// way past so every character keeps its source line.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Any character that is not ASCII whitespace.
    #[regex(r"[^ \t\n\r\x0B\x0C]", first_char)]
    Char(char),
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\x0B\x0C]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A non-whitespace character together with the line it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceChar {
    /// The character itself.
    pub ch:   char,
    /// 1-based source line.
    pub line: usize,
}

/// Returns the single character matched by the current token slice.
fn first_char(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// Removes all whitespace from `source`.
///
/// # Returns
/// The remaining characters in order, each tagged with its line, and the
/// number of the last line of the source.
///
/// # Errors
/// Returns `ParseError::InvalidInput` if the lexer cannot classify a slice.
/// The token patterns cover every character, so this does not happen for
/// valid UTF-8 text.
///
/// # Example
/// ```
/// use minilang::interpreter::lexer::strip_whitespace;
///
/// let (chars, last_line) = strip_whitespace("a =\n 1 ;").unwrap();
/// let text: String = chars.iter().map(|c| c.ch).collect();
/// assert_eq!(text, "a=1;");
/// assert_eq!(chars[2].line, 2);
/// assert_eq!(last_line, 2);
/// ```
pub fn strip_whitespace(source: &str) -> ParseResult<(Vec<SourceChar>, usize)> {
    let mut chars = Vec::with_capacity(source.len());
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Char(ch)) => chars.push(SourceChar { ch,
                                                           line: lexer.extras.line }),
            Ok(Token::NewLine | Token::Ignored) => {},
            Err(()) => {
                return Err(ParseError::InvalidInput { fragment: lexer.slice().to_string(),
                                                      line:     lexer.extras.line, });
            },
        }
    }

    Ok((chars, lexer.extras.line))
}
