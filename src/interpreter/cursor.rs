use crate::{
    error::ParseError,
    interpreter::{
        lexer::{SourceChar, strip_whitespace},
        parser::core::ParseResult,
    },
};

/// How many levels of grouping, `^` chaining and operator folding one
/// expression may hold.
///
/// Parsing, evaluation and dropping of an expression all recurse once per
/// level, so this bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Read position over whitespace-stripped program text.
///
/// The cursor owns the text for the duration of one parse. Every parser
/// procedure receives it as `&mut Cursor`; nothing else can move the position.
/// The position only ever moves forward.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars:     Vec<SourceChar>,
    pos:       usize,
    last_line: usize,
    depth:     usize,
}

impl Cursor {
    /// Strips whitespace from `source` and positions the cursor at its first
    /// character.
    ///
    /// # Errors
    /// Propagates lexer failures.
    pub fn new(source: &str) -> ParseResult<Self> {
        let (chars, last_line) = strip_whitespace(source)?;
        Ok(Self { chars,
                  pos: 0,
                  last_line,
                  depth: 0 })
    }

    /// Checks whether the text at the current position starts with `literal`,
    /// without consuming anything.
    ///
    /// Fewer remaining characters than `literal` has is a non-match.
    ///
    /// # Example
    /// ```
    /// use minilang::interpreter::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("pr int x").unwrap();
    /// assert!(cursor.matches_literal("print"));
    /// assert!(!cursor.matches_literal("printxy"));
    /// ```
    #[must_use]
    pub fn matches_literal(&self, literal: &str) -> bool {
        let rest = self.chars.get(self.pos..).unwrap_or_default();
        let mut expected = literal.chars();
        let mut actual = rest.iter().map(|c| c.ch);

        loop {
            match (expected.next(), actual.next()) {
                (None, _) => return true,
                (Some(e), Some(a)) if e == a => {},
                _ => return false,
            }
        }
    }

    /// Moves the position forward by `n` characters, stopping at the end.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.chars.len());
    }

    /// Consumes `literal` if the text at the current position starts with it.
    ///
    /// # Returns
    /// `true` if the literal was present and consumed.
    pub fn eat_literal(&mut self, literal: &str) -> bool {
        if self.matches_literal(literal) {
            self.advance(literal.chars().count());
            return true;
        }
        false
    }

    /// Returns the character at the current position, or `None` at the end.
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos).map(|c| c.ch)
    }

    /// Returns the character at the current position and moves past it.
    pub fn consume_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += 1;
        Some(ch)
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Number of characters not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.chars.len().saturating_sub(self.pos)
    }

    /// Source line of the character at the current position.
    ///
    /// At the end of the text this is the last line of the source.
    #[must_use]
    pub fn line(&self) -> usize {
        self.chars.get(self.pos).map_or(self.last_line, |c| c.line)
    }

    /// Records that the parser went one level deeper into an expression.
    ///
    /// # Errors
    /// `NestingTooDeep` once more than [`MAX_NESTING_DEPTH`] levels are open.
    ///
    /// # Example
    /// ```
    /// use minilang::interpreter::cursor::{Cursor, MAX_NESTING_DEPTH};
    ///
    /// let mut cursor = Cursor::new("(1)").unwrap();
    /// for _ in 0..MAX_NESTING_DEPTH {
    ///     cursor.enter_nesting().unwrap();
    /// }
    /// assert!(cursor.enter_nesting().is_err());
    /// cursor.leave_nesting(MAX_NESTING_DEPTH + 1);
    /// assert_eq!(cursor.nesting(), 0);
    /// ```
    pub fn enter_nesting(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    line:  self.line(), });
        }
        Ok(())
    }

    /// Closes `levels` levels opened with [`Cursor::enter_nesting`].
    pub const fn leave_nesting(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Number of currently open nesting levels.
    #[must_use]
    pub const fn nesting(&self) -> usize {
        self.depth
    }
}
