//! Propellor: a twisted band of quads inside every face.

use config::engine::EngineConfig;

use crate::flag::FlagBuilder;
use crate::math::vec3::one_third;
use crate::polyhedron::{face_corners, Polyhedron};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Vertex {
    Original(usize),
    Third(usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Face {
    Original(usize),
    Blade { face: usize, corner: usize },
}

/// Builds the propellor polyhedron.
///
/// Like gyro, but the original face survives as a smaller rotated copy
/// bounded by the third points, and each corner gets a quad blade.
pub fn propellor(poly: &Polyhedron, config: &EngineConfig) -> Polyhedron {
    tracing::debug!(polyhedron = poly.name(), "propellor");
    let xyz = poly.xyz();
    let mut flags = FlagBuilder::new(config.face_walk_limit);

    for (i, p) in xyz.iter().enumerate() {
        flags.new_vertex(Vertex::Original(i), p.normalize_or_zero());
    }

    for (i, face) in poly.faces().iter().enumerate() {
        for (v1, v2, v3) in face_corners(face) {
            flags.new_vertex(Vertex::Third(v1, v2), one_third(xyz[v1], xyz[v2]));
            flags.new_flag(Face::Original(i), Vertex::Third(v1, v2), Vertex::Third(v2, v3));

            let blade = Face::Blade { face: i, corner: v2 };
            flags.new_flag(blade, Vertex::Third(v1, v2), Vertex::Third(v2, v1));
            flags.new_flag(blade, Vertex::Third(v2, v1), Vertex::Original(v2));
            flags.new_flag(blade, Vertex::Original(v2), Vertex::Third(v2, v3));
            flags.new_flag(blade, Vertex::Third(v2, v3), Vertex::Third(v1, v2));
        }
    }

    flags.finalize(format!("p{}", poly.name()))
}
