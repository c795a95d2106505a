//! Dual: one vertex per original face, one face per original vertex.

use config::engine::EngineConfig;
use hashbrown::HashMap;

use crate::flag::FlagBuilder;
use crate::math::vec3::intersect;
use crate::ops::toggled_name;
use crate::polyhedron::{face_edges, Polyhedron};

/// Builds the dual polyhedron.
///
/// Dual vertex `i` sits at the centroid of face `i`, and dual face `k`
/// replaces original vertex `k`. Keeping that correspondence is what lets
/// the reciprocation passes alternate between a solid and its dual.
///
/// Each dual face is identified by intersecting three of the original faces
/// it walks through, which requires every vertex to have degree 3 or more.
/// When identification fails the face falls back to the vertex that
/// staged it.
pub fn dual(poly: &Polyhedron, config: &EngineConfig) -> Polyhedron {
    tracing::debug!(polyhedron = poly.name(), "dual");

    let mut face_of_edge: HashMap<(usize, usize), usize> = HashMap::new();
    for (i, face) in poly.faces().iter().enumerate() {
        for edge in face_edges(face) {
            face_of_edge.insert(edge, i);
        }
    }

    let mut flags: FlagBuilder<usize, usize> = FlagBuilder::new(config.face_walk_limit);
    for (i, center) in poly.centers().into_iter().enumerate() {
        flags.new_vertex(i, center);
    }
    for (i, face) in poly.faces().iter().enumerate() {
        for (a, b) in face_edges(face) {
            match face_of_edge.get(&(b, a)) {
                Some(&neighbor) => flags.new_flag(a, neighbor, i),
                None => tracing::warn!(
                    polyhedron = poly.name(),
                    from = a,
                    to = b,
                    "edge has no opposite half; surface is not closed"
                ),
            }
        }
    }

    let (xyz, staged) = flags.finalize_faces();
    let mut slots: Vec<Option<Vec<usize>>> = vec![None; poly.vertex_count()];
    for (vertex, boundary) in staged {
        let owner = identify_vertex(poly, &boundary).unwrap_or_else(|| {
            tracing::warn!(
                polyhedron = poly.name(),
                vertex,
                "could not identify dual face by intersection"
            );
            vertex
        });
        slots[owner] = Some(boundary);
    }
    let faces = slots.into_iter().flatten().collect();

    Polyhedron::from_parts(xyz, faces, toggled_name('d', poly.name()))
}

/// The original vertex shared by the first three faces around a dual face.
fn identify_vertex(poly: &Polyhedron, boundary: &[usize]) -> Option<usize> {
    match boundary {
        [f0, f1, f2, ..] => intersect(
            &poly.faces()[*f0],
            &poly.faces()[*f1],
            &poly.faces()[*f2],
        ),
        _ => None,
    }
}
