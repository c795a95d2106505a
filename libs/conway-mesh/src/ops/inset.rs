//! Inset and extrude: replace selected faces by a smaller copy joined to
//! the original outline with a ring of quads.

use config::engine::EngineConfig;

use crate::flag::FlagBuilder;
use crate::math::vec3::tween;
use crate::math::Vec3;
use crate::ops::{filter_matches, prefixed_name, selects, Operator};
use crate::polyhedron::{face_edges, Polyhedron};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Vertex {
    Original(usize),
    Inner { face: usize, vertex: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Face {
    Original(usize),
    Wall { face: usize, from: usize },
    Cap(usize),
}

/// Shrinks each selected face toward its centroid by `distance` (a
/// fraction of the way) and moves it `popout` along the face normal.
///
/// ## Example
///
/// ```rust
/// use config::engine::EngineConfig;
/// use conway_mesh::{ops::inset, seeds::SeedKind};
///
/// let config = EngineConfig::default();
/// let cube = SeedKind::Cube.build(&[], &config).expect("cube");
/// let framed = inset(&cube, None, 0.5, -0.2, &config);
/// assert_eq!(framed.face_count(), 6 + 6 * 4);
/// ```
pub fn inset(
    poly: &Polyhedron,
    degree: Option<usize>,
    distance: f64,
    popout: f64,
    config: &EngineConfig,
) -> Polyhedron {
    tracing::debug!(polyhedron = poly.name(), ?degree, distance, popout, "inset");
    if !filter_matches(Operator::Inset, poly, degree) {
        return poly.clone();
    }
    let centers = poly.centers();
    let normals = poly.normals();
    let xyz = poly.xyz();
    retile_with_walls(
        poly,
        degree,
        config,
        prefixed_name('n', degree, poly.name()),
        |face, vertex| tween(xyz[vertex], centers[face], distance) + normals[face] * popout,
    )
}

/// Moves each selected face `distance` along its normal and joins it to
/// the original outline with side walls.
pub fn extrude(
    poly: &Polyhedron,
    degree: Option<usize>,
    distance: f64,
    config: &EngineConfig,
) -> Polyhedron {
    tracing::debug!(polyhedron = poly.name(), ?degree, distance, "extrude");
    if !filter_matches(Operator::Extrude, poly, degree) {
        return poly.clone();
    }
    let normals = poly.normals();
    let xyz = poly.xyz();
    retile_with_walls(
        poly,
        degree,
        config,
        prefixed_name('x', degree, poly.name()),
        |face, vertex| xyz[vertex] + normals[face] * distance,
    )
}

fn retile_with_walls(
    poly: &Polyhedron,
    degree: Option<usize>,
    config: &EngineConfig,
    name: String,
    inner_point: impl Fn(usize, usize) -> Vec3,
) -> Polyhedron {
    let mut flags = FlagBuilder::new(config.face_walk_limit);
    for (i, &p) in poly.xyz().iter().enumerate() {
        flags.new_vertex(Vertex::Original(i), p);
    }
    for (i, face) in poly.faces().iter().enumerate() {
        if selects(degree, face) {
            for &v in face {
                flags.new_vertex(Vertex::Inner { face: i, vertex: v }, inner_point(i, v));
            }
        }
    }

    for (i, face) in poly.faces().iter().enumerate() {
        if !selects(degree, face) {
            for (a, b) in face_edges(face) {
                flags.new_flag(Face::Original(i), Vertex::Original(a), Vertex::Original(b));
            }
            continue;
        }
        for (a, b) in face_edges(face) {
            let inner_a = Vertex::Inner { face: i, vertex: a };
            let inner_b = Vertex::Inner { face: i, vertex: b };
            let wall = Face::Wall { face: i, from: a };
            flags.new_flag(wall, Vertex::Original(a), Vertex::Original(b));
            flags.new_flag(wall, Vertex::Original(b), inner_b);
            flags.new_flag(wall, inner_b, inner_a);
            flags.new_flag(wall, inner_a, Vertex::Original(a));
            flags.new_flag(Face::Cap(i), inner_a, inner_b);
        }
    }

    flags.finalize(name)
}
