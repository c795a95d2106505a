//! Iterative relaxation toward the canonical form.

use config::constants::STABILITY_FACTOR;

use crate::math::vec3::{centroid, face_normal, tangent_point};
use crate::math::Vec3;
use crate::polyhedron::Polyhedron;

/// Convergence record of a relaxation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxationReport {
    /// Rounds actually run.
    pub iterations: usize,
    /// Largest vertex displacement in the last round.
    pub max_change: f64,
    /// Whether the displacement fell below the tolerance.
    pub converged: bool,
    /// Largest vertex displacement of every round, in order.
    pub history: Vec<f64>,
}

/// Result of [`canonicalize`].
#[derive(Debug, Clone)]
pub struct Relaxed {
    /// Relaxed polyhedron, same topology and name as the input.
    pub polyhedron: Polyhedron,
    /// How the run went.
    pub report: RelaxationReport,
}

/// Runs up to `max_iterations` rounds of tangentify, recenter and
/// planarize, stopping early once no vertex moves by `tolerance` or more.
///
/// Relaxation has no general convergence guarantee; the best positions
/// reached are returned either way.
///
/// ## Example
///
/// ```rust
/// use config::engine::EngineConfig;
/// use conway_mesh::{canonical::canonicalize, seeds::SeedKind};
///
/// let cube = SeedKind::Cube.build(&[], &EngineConfig::default()).expect("cube");
/// let relaxed = canonicalize(&cube, 200, 1e-8);
/// assert_eq!(relaxed.polyhedron.faces(), cube.faces());
/// assert!(relaxed.report.iterations <= 200);
/// ```
pub fn canonicalize(poly: &Polyhedron, max_iterations: usize, tolerance: f64) -> Relaxed {
    let edges = poly.edges();
    let mut xyz = poly.xyz().to_vec();
    let mut history = Vec::with_capacity(max_iterations.min(1024));
    let mut converged = false;

    for _ in 0..max_iterations {
        let previous = xyz.clone();
        xyz = tangentify(&xyz, &edges);
        xyz = recenter(&xyz, &edges);
        xyz = planarize(&xyz, poly.faces());

        let max_change = xyz
            .iter()
            .zip(&previous)
            .map(|(now, before)| (*now - *before).length())
            .fold(0.0, f64::max);
        history.push(max_change);
        if max_change < tolerance {
            converged = true;
            break;
        }
    }

    let report = RelaxationReport {
        iterations: history.len(),
        max_change: history.last().copied().unwrap_or(0.0),
        converged,
        history,
    };
    tracing::debug!(
        polyhedron = poly.name(),
        iterations = report.iterations,
        max_change = report.max_change,
        converged,
        "canonicalize"
    );

    Relaxed {
        polyhedron: poly.with_xyz(xyz),
        report,
    }
}

/// Nudges both endpoints of every edge so the edge's closest approach to
/// the origin moves toward unit distance.
///
/// Edges are processed in order and each sees the positions left by the
/// previous ones.
pub fn tangentify(xyz: &[Vec3], edges: &[(usize, usize)]) -> Vec<Vec3> {
    let mut out = xyz.to_vec();
    for &(a, b) in edges {
        let t = tangent_point(out[a], out[b]);
        let correction = t * (STABILITY_FACTOR * 0.5 * (1.0 - t.length()));
        out[a] += correction;
        out[b] += correction;
    }
    out
}

/// Translates so the mean of the edge tangent points is the origin.
pub fn recenter(xyz: &[Vec3], edges: &[(usize, usize)]) -> Vec<Vec3> {
    if edges.is_empty() {
        return xyz.to_vec();
    }
    let tangents: Vec<Vec3> = edges
        .iter()
        .map(|&(a, b)| tangent_point(xyz[a], xyz[b]))
        .collect();
    let shift = centroid(&tangents);
    xyz.iter().map(|&v| v - shift).collect()
}

/// Pulls every vertex part of the way toward the plane of each face it
/// belongs to. All faces read the input positions.
pub fn planarize(xyz: &[Vec3], faces: &[Vec<usize>]) -> Vec<Vec3> {
    let mut out = xyz.to_vec();
    for face in faces {
        let points: Vec<Vec3> = face.iter().map(|&v| xyz[v]).collect();
        let center = centroid(&points);
        let mut normal = face_normal(&points);
        if normal.dot(center) < 0.0 {
            normal = -normal;
        }
        for &v in face {
            out[v] += normal * (normal * STABILITY_FACTOR).dot(center - xyz[v]);
        }
    }
    out
}

/// Scales uniformly so the farthest vertex lies on the unit sphere.
pub fn rescale(xyz: &[Vec3]) -> Vec<Vec3> {
    let radius = xyz.iter().map(|v| v.length()).fold(0.0, f64::max);
    if radius == 0.0 {
        return xyz.to_vec();
    }
    xyz.iter().map(|&v| v / radius).collect()
}
