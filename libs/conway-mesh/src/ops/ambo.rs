//! Ambo: truncate every vertex down to the edge midpoints.

use config::engine::EngineConfig;

use crate::flag::FlagBuilder;
use crate::math::vec3::midpoint;
use crate::polyhedron::{face_corners, Polyhedron};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Face {
    Original(usize),
    Vertex(usize),
}

/// Undirected edge key shared by both faces on the edge.
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

/// Builds the ambo (rectified) polyhedron: one vertex per original edge,
/// one face per original face and one per original vertex.
pub fn ambo(poly: &Polyhedron, config: &EngineConfig) -> Polyhedron {
    tracing::debug!(polyhedron = poly.name(), "ambo");
    let xyz = poly.xyz();
    let mut flags = FlagBuilder::new(config.face_walk_limit);

    for (i, face) in poly.faces().iter().enumerate() {
        for (v1, v2, v3) in face_corners(face) {
            let incoming = edge_key(v1, v2);
            let outgoing = edge_key(v2, v3);
            flags.new_vertex(incoming, midpoint(xyz[v1], xyz[v2]));
            flags.new_flag(Face::Original(i), incoming, outgoing);
            flags.new_flag(Face::Vertex(v2), outgoing, incoming);
        }
    }

    flags.finalize(format!("a{}", poly.name()))
}
