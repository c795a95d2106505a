//! Stella: each face shrinks to an inner copy surrounded by corner and
//! edge triangles.

use config::engine::EngineConfig;

use crate::flag::FlagBuilder;
use crate::math::vec3::midpoint;
use crate::polyhedron::{face_corners, Polyhedron};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Vertex {
    Original(usize),
    /// Point between the midpoint of directed edge `from → to` and the
    /// centroid of the face that owns it.
    Inner(usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Face {
    Inner(usize),
    Corner { face: usize, vertex: usize },
    Edge { from: usize, to: usize },
}

/// Builds the stella polyhedron.
pub fn stella(poly: &Polyhedron, config: &EngineConfig) -> Polyhedron {
    tracing::debug!(polyhedron = poly.name(), "stella");
    let xyz = poly.xyz();
    let centers = poly.centers();
    let mut flags = FlagBuilder::new(config.face_walk_limit);

    for (i, &p) in xyz.iter().enumerate() {
        flags.new_vertex(Vertex::Original(i), p);
    }

    for (i, face) in poly.faces().iter().enumerate() {
        for (v1, v2, v3) in face_corners(face) {
            let v12 = Vertex::Inner(v1, v2);
            let v23 = Vertex::Inner(v2, v3);
            flags.new_vertex(v12, midpoint(midpoint(xyz[v1], xyz[v2]), centers[i]));

            flags.new_flag(Face::Inner(i), v12, v23);

            let corner = Face::Corner { face: i, vertex: v2 };
            flags.new_flag(corner, v23, v12);
            flags.new_flag(corner, v12, Vertex::Original(v2));
            flags.new_flag(corner, Vertex::Original(v2), v23);

            let edge = Face::Edge { from: v1, to: v2 };
            flags.new_flag(edge, Vertex::Original(v1), Vertex::Inner(v2, v1));
            flags.new_flag(edge, Vertex::Inner(v2, v1), v12);
            flags.new_flag(edge, v12, Vertex::Original(v1));
        }
    }

    flags.finalize(format!("l{}", poly.name()))
}
