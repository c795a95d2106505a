//! # Triangulation
//!
//! Splits every face of degree four or more into triangles. Each face is
//! projected onto its own plane, cut along ear-clipping diagonals, and the
//! triangles are rebuilt from the diagonal set.

pub mod ear_clip;

pub use ear_clip::ear_clip_diagonals;

use std::collections::BTreeSet;

use crate::math::vec3::face_normal;
use crate::math::{Vec2, Vec3};
use crate::polyhedron::Polyhedron;

/// Replaces every face of degree greater than three with triangles.
///
/// Vertex positions and the name are kept; triangles keep the face's
/// winding.
///
/// ## Example
///
/// ```rust
/// use config::engine::EngineConfig;
/// use conway_mesh::{seeds::SeedKind, triangulate::triangulate};
///
/// let cube = SeedKind::Cube.build(&[], &EngineConfig::default()).expect("cube");
/// let tris = triangulate(&cube);
/// assert_eq!(tris.face_count(), 12);
/// assert_eq!(tris.name(), "C");
/// ```
pub fn triangulate(poly: &Polyhedron) -> Polyhedron {
    let mut faces = Vec::with_capacity(poly.face_count());
    for (i, face) in poly.faces().iter().enumerate() {
        if face.len() <= 3 {
            faces.push(face.clone());
            continue;
        }
        let flat = project_face(&poly.face_points(i));
        faces.extend(
            triangulate_polygon(&flat)
                .into_iter()
                .map(|[a, b, c]| vec![face[a], face[b], face[c]]),
        );
    }
    tracing::debug!(polyhedron = poly.name(), triangles = faces.len(), "triangulate");
    Polyhedron::from_parts(poly.xyz().to_vec(), faces, poly.name())
}

/// Projects a face onto an orthonormal basis of its plane, origin at the
/// first vertex. Faces wound counter-clockwise about their normal stay
/// counter-clockwise.
pub fn project_face(points: &[Vec3]) -> Vec<Vec2> {
    let Some(&origin) = points.first() else {
        return Vec::new();
    };
    let mut normal = face_normal(points);
    if normal == Vec3::ZERO {
        normal = Vec3::Z;
    }
    let u = points
        .iter()
        .map(|&p| p - origin)
        .map(|d| (d - normal * d.dot(normal)).normalize_or_zero())
        .find(|u| *u != Vec3::ZERO)
        .unwrap_or_else(|| normal.any_orthonormal_vector());
    let w = normal.cross(u);
    points
        .iter()
        .map(|&p| {
            let d = p - origin;
            Vec2::new(d.dot(u), d.dot(w))
        })
        .collect()
}

/// Triangulates a counter-clockwise simple polygon into `n - 2` index
/// triples.
pub fn triangulate_polygon(points: &[Vec2]) -> Vec<[usize; 3]> {
    match points.len() {
        0..=2 => Vec::new(),
        3 => vec![[0, 1, 2]],
        n => diagonals_to_triangles(n, &ear_clip_diagonals(points)),
    }
}

/// Rebuilds the triangles of an `n`-gon cut along `diagonals`.
///
/// Every triangle of a polygon triangulation is a 3-cycle in the graph of
/// boundary edges plus diagonals, and has at least one diagonal side when
/// `n > 3`. Indices come out ascending, which is the polygon's own winding.
pub fn diagonals_to_triangles(n: usize, diagonals: &[(usize, usize)]) -> Vec<[usize; 3]> {
    if n == 3 && diagonals.is_empty() {
        return vec![[0, 1, 2]];
    }
    let mut neighbours: Vec<BTreeSet<usize>> = (0..n)
        .map(|i| BTreeSet::from([(i + 1) % n, (i + n - 1) % n]))
        .collect();
    for &(a, b) in diagonals {
        neighbours[a].insert(b);
        neighbours[b].insert(a);
    }

    let mut triangles = BTreeSet::new();
    for &(a, b) in diagonals {
        for &c in neighbours[a].intersection(&neighbours[b]) {
            let mut tri = [a, b, c];
            tri.sort_unstable();
            triangles.insert(tri);
        }
    }
    if triangles.len() != n - 2 {
        tracing::warn!(
            vertices = n,
            triangles = triangles.len(),
            "diagonals do not form a polygon triangulation"
        );
    }
    triangles.into_iter().collect()
}
