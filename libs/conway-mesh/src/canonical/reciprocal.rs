//! Dual reciprocation: a cheap approximate canonical form.

use config::engine::EngineConfig;

use crate::math::vec3::{centroid, edge_distance, orthogonal, reciprocal};
use crate::math::Vec3;
use crate::ops::dual;
use crate::polyhedron::Polyhedron;

/// How a face is turned into a dual vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reciprocal {
    /// Reciprocal of the face centroid.
    Centroid,
    /// Reciprocal of the centroid projected on the face normal, scaled by
    /// how far the face's edges sit from the unit sphere.
    Tangent,
}

impl Reciprocal {
    fn points(self, poly: &Polyhedron) -> Vec<Vec3> {
        match self {
            Reciprocal::Centroid => reciprocal_centers(poly),
            Reciprocal::Tangent => reciprocal_normals(poly),
        }
    }
}

/// Reciprocal of every face centroid.
pub fn reciprocal_centers(poly: &Polyhedron) -> Vec<Vec3> {
    poly.centers().into_iter().map(reciprocal).collect()
}

/// Tangent-weighted reciprocal of every face.
pub fn reciprocal_normals(poly: &Polyhedron) -> Vec<Vec3> {
    poly.faces()
        .iter()
        .map(|face| {
            let points: Vec<Vec3> = face.iter().map(|&v| poly.xyz()[v]).collect();
            let n = points.len();
            if n < 3 {
                return centroid(&points);
            }
            let mut normal = Vec3::ZERO;
            let mut edge_sum = 0.0;
            let (mut v1, mut v2) = (points[n - 2], points[n - 1]);
            for &v3 in &points {
                normal += orthogonal(v1, v2, v3);
                edge_sum += edge_distance(v1, v2);
                v1 = v2;
                v2 = v3;
            }
            let normal = normal.normalize_or_zero();
            let mean_edge_distance = edge_sum / n as f64;
            let foot = reciprocal(normal * centroid(&points).dot(normal));
            foot * ((1.0 + mean_edge_distance) / 2.0)
        })
        .collect()
}

/// Alternately rebuilds the dual's vertices from `poly`'s faces and
/// `poly`'s vertices from the dual's faces, `iterations` times.
///
/// Relies on dual face `k` corresponding to vertex `k`, which
/// [`dual`](crate::ops::dual) guarantees for closed surfaces.
pub fn reciprocate(
    poly: &Polyhedron,
    iterations: usize,
    strategy: Reciprocal,
    config: &EngineConfig,
) -> Polyhedron {
    let mut dual_poly = dual(poly, config);
    let mut primal = poly.clone();
    if dual_poly.face_count() != primal.vertex_count() {
        tracing::warn!(
            polyhedron = poly.name(),
            "dual faces do not match vertices; skipping reciprocation"
        );
        return primal;
    }
    for _ in 0..iterations {
        dual_poly = dual_poly.with_xyz(strategy.points(&primal));
        primal = primal.with_xyz(strategy.points(&dual_poly));
    }
    tracing::debug!(polyhedron = poly.name(), iterations, ?strategy, "reciprocate");
    primal
}

/// Tangent-weighted reciprocation (the `K` operator).
pub fn canonical_xyz(poly: &Polyhedron, iterations: usize, config: &EngineConfig) -> Polyhedron {
    reciprocate(poly, iterations, Reciprocal::Tangent, config)
}

/// Centroid reciprocation (the `A` operator).
pub fn adjust_xyz(poly: &Polyhedron, iterations: usize, config: &EngineConfig) -> Polyhedron {
    reciprocate(poly, iterations, Reciprocal::Centroid, config)
}
