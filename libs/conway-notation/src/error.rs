//! # Parse Errors
//!
//! Error types for the notation parser. Every error fails the whole recipe
//! before any geometry is built.
//!
//! ## Example
//!
//! ```rust
//! use conway_notation::error::ParseError;
//! use conway_notation::Span;
//!
//! let error = ParseError::unexpected_character(' ', "operator letter", Span::at(2));
//! assert!(error.to_string().contains("byte 2"));
//! ```

use thiserror::Error;

use crate::span::Span;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A notation syntax error with location information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at byte {}", span.start())]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Location in the (macro-expanded) notation.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Error kind
    /// - `span`: Source location
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create an unexpected character error.
    ///
    /// ## Parameters
    ///
    /// - `found`: Character that was found
    /// - `expected`: Description of what was expected
    /// - `span`: Location of the character
    pub fn unexpected_character(found: char, expected: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedCharacter {
                found,
                expected: expected.to_string(),
            },
            span,
        )
    }

    /// Create an unexpected end of input error.
    pub fn unexpected_end(expected: &str, offset: usize) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEnd {
                expected: expected.to_string(),
            },
            Span::new(offset, offset),
        )
    }

    /// Create an invalid number error.
    pub fn invalid_number(text: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::InvalidNumber {
                text: text.to_string(),
            },
            span,
        )
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of notation syntax errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Found a character the grammar does not allow here.
    #[error("unexpected character '{found}', expected {expected}")]
    UnexpectedCharacter {
        /// Character that was found.
        found: char,
        /// Description of what was expected.
        expected: String,
    },

    /// Input ended in the middle of an opspec.
    #[error("unexpected end of notation, expected {expected}")]
    UnexpectedEnd {
        /// Description of what was expected.
        expected: String,
    },

    /// Numeric argument that does not parse as a real number.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Parenthesized argument list with no numbers in it.
    #[error("empty argument list")]
    EmptyArgumentList,

    /// Notation with no opspecs at all.
    #[error("empty notation")]
    EmptyNotation,
}

// =============================================================================
// TESTS
// =============================================================================
