//! Reflect: mirror image through the origin.

use crate::ops::toggled_name;
use crate::polyhedron::Polyhedron;

/// Negates every coordinate and reverses every face so winding stays
/// outward. Applying it twice restores the input, name included.
pub fn reflect(poly: &Polyhedron) -> Polyhedron {
    tracing::debug!(polyhedron = poly.name(), "reflect");
    let xyz = poly.xyz().iter().map(|&v| -v).collect();
    let faces = poly
        .faces()
        .iter()
        .map(|face| face.iter().rev().copied().collect())
        .collect();
    Polyhedron::from_parts(xyz, faces, toggled_name('r', poly.name()))
}
