//! Kis: raise a pyramid on each selected face.

use config::engine::EngineConfig;

use crate::flag::FlagBuilder;
use crate::ops::{filter_matches, prefixed_name, selects, Operator};
use crate::polyhedron::{face_edges, Polyhedron};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Vertex {
    Original(usize),
    Apex(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Face {
    Original(usize),
    Cone { face: usize, from: usize },
}

/// Replaces each face of `degree` sides (every face when `None`) by a fan
/// of triangles meeting at an apex `apex_distance` above the face centroid.
pub fn kis(
    poly: &Polyhedron,
    degree: Option<usize>,
    apex_distance: f64,
    config: &EngineConfig,
) -> Polyhedron {
    tracing::debug!(polyhedron = poly.name(), ?degree, apex_distance, "kis");
    if !filter_matches(Operator::Kis, poly, degree) {
        return poly.clone();
    }

    let centers = poly.centers();
    let normals = poly.normals();
    let mut flags = FlagBuilder::new(config.face_walk_limit);
    for (i, &p) in poly.xyz().iter().enumerate() {
        flags.new_vertex(Vertex::Original(i), p);
    }

    for (i, face) in poly.faces().iter().enumerate() {
        if selects(degree, face) {
            let apex = Vertex::Apex(i);
            flags.new_vertex(apex, centers[i] + normals[i] * apex_distance);
            for (a, b) in face_edges(face) {
                let cone = Face::Cone { face: i, from: a };
                flags.new_flag(cone, Vertex::Original(a), Vertex::Original(b));
                flags.new_flag(cone, Vertex::Original(b), apex);
                flags.new_flag(cone, apex, Vertex::Original(a));
            }
        } else {
            for (a, b) in face_edges(face) {
                flags.new_flag(Face::Original(i), Vertex::Original(a), Vertex::Original(b));
            }
        }
    }

    flags.finalize(prefixed_name('k', degree, poly.name()))
}
