//! # Conway Mesh
//!
//! Polyhedron generation from Conway notation: seed solids, flag-based
//! retiling operators, canonicalization and face triangulation.
//!
//! ## Architecture
//!
//! ```text
//! notation → conway-notation (OpChain) → from_chain (seed + operators) → Polyhedron
//! ```
//!
//! Operators build their output through the [`flag::FlagBuilder`], which
//! turns named vertices and directed face edges back into index faces.
//!
//! ## Usage
//!
//! ```rust
//! use conway_mesh::generate;
//!
//! let truncated = generate("tI").expect("valid recipe");
//! assert_eq!(truncated.face_count(), 32);
//! assert_eq!(truncated.euler_characteristic(), 2);
//! ```

pub mod canonical;
pub mod error;
pub mod flag;
pub mod from_chain;
pub mod math;
pub mod ops;
pub mod polyhedron;
pub mod seeds;
pub mod triangulate;

pub use config::engine::EngineConfig;
pub use error::{ConwayError, ConwayResult};
pub use polyhedron::Polyhedron;

/// Generates the polyhedron described by `notation` with default settings.
///
/// # Arguments
///
/// * `notation` - Recipe text, e.g. `"dakD"`
///
/// # Returns
///
/// The polyhedron, recentered and scaled to the unit sphere, or the first
/// notation, lookup or argument error.
pub fn generate(notation: &str) -> ConwayResult<Polyhedron> {
    generate_with(notation, &EngineConfig::default())
}

/// Same as [`generate`] with explicit engine settings.
pub fn generate_with(notation: &str, config: &EngineConfig) -> ConwayResult<Polyhedron> {
    let chain = conway_notation::compile(notation)?;
    let poly = from_chain::chain_to_polyhedron(&chain, config)?;
    tracing::debug!(notation, polyhedron = %poly, "generated");
    Ok(poly)
}
