//! # Conway Notation
//!
//! Front end for Conway polyhedron recipes such as `dk3C` or `n(0,0.3)P5`.
//! This crate knows nothing about geometry: it expands shorthand macros,
//! parses opspecs and arranges them into an [`OpChain`] that the mesh crate
//! resolves against its seed and operator tables.
//!
//! ## Architecture
//!
//! ```text
//! Notation → Macro Rewrite → Parser → OpSpecs → OpChain (seed + operators)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use conway_notation::compile;
//!
//! let chain = compile("tC").expect("valid notation");
//! assert_eq!(chain.expanded, "dkdC");
//! assert_eq!(chain.seed.code, 'C');
//! let codes: Vec<char> = chain.operators.iter().map(|op| op.code).collect();
//! assert_eq!(codes, vec!['d', 'k', 'd']);
//! ```

pub mod chain;
pub mod cursor;
pub mod error;
pub mod macros;
pub mod parser;
pub mod recipes;
pub mod span;

pub use chain::{OpChain, OpSpec};
pub use error::{ParseError, ParseErrorKind};
pub use recipes::SAMPLE_RECIPES;
pub use span::Span;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compile a notation string into an operator chain.
///
/// Expands macros, parses the expanded text and orders the opspecs so the
/// seed comes first and operators follow nearest-seed first.
///
/// ## Parameters
///
/// - `notation`: Recipe text, e.g. `"dakD"`
///
/// ## Returns
///
/// The chain, or the first syntax error found. Error spans index into the
/// expanded notation, available as [`OpChain::expanded`] on success.
pub fn compile(notation: &str) -> Result<OpChain, ParseError> {
    let expanded = macros::expand(notation);
    if expanded != notation {
        tracing::debug!(notation, expanded = %expanded, "expanded notation macros");
    }
    let specs = parser::parse_opspecs(&expanded)?;
    OpChain::from_written(expanded, specs)
}

// =============================================================================
// TESTS
// =============================================================================
