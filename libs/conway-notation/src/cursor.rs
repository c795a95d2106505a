//! # Character Cursor
//!
//! Peekable character cursor for the opspec parser.
//! Tracks the byte offset as it advances.
//!
//! ## Example
//!
//! ```rust
//! use conway_notation::cursor::Cursor;
//!
//! let mut cursor = Cursor::new("kC");
//! assert_eq!(cursor.peek(), Some('k'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('C'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with byte position tracking.
///
/// Notation strings are single-line, so only the byte offset is tracked.
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use conway_notation::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("dT");
    /// assert!(!cursor.is_eof());
    /// ```
    pub fn new(source: &'a str) -> Self {
        Self { source, byte: 0 }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.byte
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    ///
    /// ## Returns
    ///
    /// Current character or None if at end of input
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at end of input
    ///
    /// ## Example
    ///
    /// ```rust
    /// use conway_notation::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.advance(), Some('a'));
    /// assert_eq!(cursor.advance(), Some('b'));
    /// assert_eq!(cursor.advance(), None);
    /// ```
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        Some(c)
    }

    /// Consume the current character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while predicate is true and return the consumed text.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use conway_notation::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("12.5C");
    /// let digits = cursor.advance_while(|c| c.is_ascii_digit() || c == '.');
    /// assert_eq!(digits, "12.5");
    /// assert_eq!(cursor.peek(), Some('C'));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.byte;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
