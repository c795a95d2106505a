//! # Source Span
//!
//! Byte range inside a notation string, carried by every parsed opspec so
//! that compile errors can point back at the offending letter.
//!
//! ## Usage
//!
//! ```rust
//! use conway_notation::Span;
//!
//! let span = Span::new(0, 3);
//! assert_eq!(span.start(), 0);
//! assert_eq!(span.end(), 3);
//! assert_eq!(span.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// A range in the notation text, represented as byte offsets.
///
/// # Fields
///
/// - `start`: Starting byte offset (inclusive)
/// - `end`: Ending byte offset (exclusive)
///
/// # Example
///
/// ```rust
/// use conway_notation::Span;
///
/// // For notation "k3C" the span of "k3" would be:
/// let span = Span::new(0, 2);
/// assert_eq!(span.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Starting byte offset (inclusive)
    start: usize,
    /// Ending byte offset (exclusive)
    end: usize,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    ///
    /// # Arguments
    ///
    /// * `start` - Starting byte offset (inclusive)
    /// * `end` - Ending byte offset (exclusive)
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a single character at `offset`.
    #[inline]
    pub fn at(offset: usize) -> Self {
        Self::new(offset, offset + 1)
    }

    /// Returns the starting byte offset.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
