//! # Error Types
//!
//! Error types for polyhedron generation. Notation problems, unknown codes
//! and bad arguments fail a recipe before any geometry is built.
//! Malformed staged topology is an internal defect: it is logged where it is
//! found and never returned from an operator.

use conway_notation::{ParseError, Span};
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while compiling or evaluating a recipe.
///
/// ## Example
///
/// ```rust
/// use conway_mesh::{generate, ConwayError};
///
/// match generate("kQ") {
///     Ok(poly) => println!("{poly}"),
///     Err(ConwayError::UnknownSeed { code, .. }) => assert_eq!(code, 'Q'),
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConwayError {
    /// The notation text does not follow the grammar.
    #[error("Notation error: {0}")]
    Notation(#[from] ParseError),

    /// An operator letter has no entry in the operator table.
    #[error("Unknown operator code '{code}' at byte {}", span.start())]
    UnknownOperator {
        /// Offending letter.
        code: char,
        /// Location in the expanded notation.
        span: Span,
    },

    /// The seed letter has no entry in the seed table.
    #[error("Unknown seed code '{code}' at byte {}", span.start())]
    UnknownSeed {
        /// Offending letter.
        code: char,
        /// Location in the expanded notation.
        span: Span,
    },

    /// An argument is outside what the seed or operator accepts.
    #[error("Invalid argument for '{code}': {message}")]
    InvalidArgument {
        /// Seed or operator letter.
        code: char,
        /// What was wrong with the argument.
        message: String,
        /// Location in the expanded notation, when known.
        span: Option<Span>,
    },

    /// A staged face did not close into a single cycle.
    #[error("Malformed topology in face {face}: {message}")]
    MalformedTopology {
        /// Debug rendering of the staged face name.
        face: String,
        /// What went wrong during the walk.
        message: String,
    },

    /// Vertex or face data violates the polyhedron invariants.
    #[error("Invalid polyhedron: {message}")]
    InvalidPolyhedron {
        /// Description of the violated invariant.
        message: String,
    },
}

impl ConwayError {
    /// Creates an invalid argument error without a location.
    pub fn invalid_argument(code: char, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a malformed topology error.
    pub fn malformed(face: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedTopology {
            face: face.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid polyhedron error.
    pub fn invalid_polyhedron(message: impl Into<String>) -> Self {
        Self::InvalidPolyhedron {
            message: message.into(),
        }
    }

    /// Attaches a notation location to errors that can carry one.
    pub fn with_span(self, span: Span) -> Self {
        match self {
            Self::InvalidArgument {
                code,
                message,
                span: None,
            } => Self::InvalidArgument {
                code,
                message,
                span: Some(span),
            },
            other => other,
        }
    }
}

/// Result type for polyhedron generation.
pub type ConwayResult<T> = Result<T, ConwayError>;

// =============================================================================
// TESTS
// =============================================================================
