//! # Canonicalization
//!
//! Two ways of moving vertices toward the canonical form of a polyhedron,
//! where every edge is tangent to the unit sphere, the edge tangent points
//! average to the origin, and every face is planar:
//!
//! - [`canonicalize`]: iterative relaxation, accurate but slow.
//! - [`canonical_xyz`] / [`adjust_xyz`]: alternate between the solid and its
//!   dual, recomputing each from reciprocals of the other's faces. Cheap,
//!   approximate, and used to tidy freshly built seeds.

pub mod reciprocal;
pub mod relax;

pub use reciprocal::{adjust_xyz, canonical_xyz, reciprocal_centers, reciprocal_normals, reciprocate, Reciprocal};
pub use relax::{canonicalize, planarize, recenter, rescale, tangentify, Relaxed, RelaxationReport};

#[cfg(test)]
mod tests;
