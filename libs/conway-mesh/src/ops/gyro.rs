//! Gyro: pentagons spiralling around each face center.

use config::engine::EngineConfig;

use crate::flag::FlagBuilder;
use crate::math::vec3::one_third;
use crate::polyhedron::{face_corners, Polyhedron};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Vertex {
    Original(usize),
    Center(usize),
    /// One third of the way along the directed edge `from → to`.
    Third(usize, usize),
}

/// Builds the gyro polyhedron.
///
/// Each face gets a center vertex and each directed edge a one-third point;
/// every face corner becomes a pentagon through the center, both third
/// points of the incoming edge, the corner and the next third point.
pub fn gyro(poly: &Polyhedron, config: &EngineConfig) -> Polyhedron {
    tracing::debug!(polyhedron = poly.name(), "gyro");
    let xyz = poly.xyz();
    let mut flags = FlagBuilder::new(config.face_walk_limit);

    for (i, p) in xyz.iter().enumerate() {
        flags.new_vertex(Vertex::Original(i), p.normalize_or_zero());
    }
    for (i, center) in poly.centers().into_iter().enumerate() {
        flags.new_vertex(Vertex::Center(i), center.normalize_or_zero());
    }

    for (i, face) in poly.faces().iter().enumerate() {
        for (v1, v2, v3) in face_corners(face) {
            flags.new_vertex(Vertex::Third(v1, v2), one_third(xyz[v1], xyz[v2]));
            let pentagon = (i, v1);
            flags.new_flag(pentagon, Vertex::Center(i), Vertex::Third(v1, v2));
            flags.new_flag(pentagon, Vertex::Third(v1, v2), Vertex::Third(v2, v1));
            flags.new_flag(pentagon, Vertex::Third(v2, v1), Vertex::Original(v2));
            flags.new_flag(pentagon, Vertex::Original(v2), Vertex::Third(v2, v3));
            flags.new_flag(pentagon, Vertex::Third(v2, v3), Vertex::Center(i));
        }
    }

    flags.finalize(format!("g{}", poly.name()))
}
