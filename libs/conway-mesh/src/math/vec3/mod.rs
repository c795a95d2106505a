//! Vector helpers shared by the operators and canonicalization passes.
//!
//! Plain algebra (add, sub, scale, dot, cross, length, normalize) comes
//! straight from `glam::DVec3`; this module adds the geometric building
//! blocks polyhedron construction needs.

use super::Vec3;

/// Midpoint of two points.
///
/// # Examples
/// ```
/// use conway_mesh::math::{vec3::midpoint, Vec3};
/// let m = midpoint(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0));
/// assert_eq!(m, Vec3::new(1.0, 2.0, 3.0));
/// ```
#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// Weighted interpolation: `t = 0` gives `a`, `t = 1` gives `b`.
#[inline]
pub fn tween(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Point one third of the way from `a` to `b`.
#[inline]
pub fn one_third(a: Vec3, b: Vec3) -> Vec3 {
    tween(a, b, 1.0 / 3.0)
}

/// Inversion through the unit sphere, `v / |v|²`.
///
/// # Examples
/// ```
/// use conway_mesh::math::{vec3::reciprocal, Vec3};
/// assert_eq!(reciprocal(Vec3::new(0.0, 0.0, 2.0)), Vec3::new(0.0, 0.0, 0.5));
/// ```
#[inline]
pub fn reciprocal(v: Vec3) -> Vec3 {
    v / v.length_squared()
}

/// Closest point to the origin on the line through `a` and `b`.
pub fn tangent_point(a: Vec3, b: Vec3) -> Vec3 {
    let d = b - a;
    a - d * (d.dot(a) / d.length_squared())
}

/// Distance from the origin to the line through `a` and `b`.
#[inline]
pub fn edge_distance(a: Vec3, b: Vec3) -> f64 {
    tangent_point(a, b).length()
}

/// Cross product of the two consecutive edges `a → b` and `b → c`.
#[inline]
pub fn orthogonal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - b)
}

/// Mean of a set of points; the origin for an empty set.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().copied().sum::<Vec3>() / points.len() as f64
}

/// Unit normal of a polygon by summing corner cross products around the
/// cycle (Newell style). Tolerates mildly non-planar faces.
///
/// Counter-clockwise polygons, seen from outside, get an outward normal.
/// Degenerate polygons return the zero vector.
///
/// # Examples
/// ```
/// use conway_mesh::math::{vec3::face_normal, Vec3};
/// let square = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(1.0, 1.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
/// ];
/// assert_eq!(face_normal(&square), Vec3::Z);
/// ```
pub fn face_normal(points: &[Vec3]) -> Vec3 {
    let n = points.len();
    if n < 3 {
        return Vec3::ZERO;
    }
    let mut sum = Vec3::ZERO;
    let (mut v1, mut v2) = (points[n - 2], points[n - 1]);
    for &v3 in points {
        sum += orthogonal(v1, v2, v3);
        v1 = v2;
        v2 = v3;
    }
    sum.normalize_or_zero()
}

/// First element of `a` that also appears in `b` and `c`.
///
/// # Examples
/// ```
/// use conway_mesh::math::vec3::intersect;
/// assert_eq!(intersect(&[0, 1, 2], &[2, 1, 5], &[7, 1]), Some(1));
/// assert_eq!(intersect(&[0, 1], &[2, 3], &[0, 2]), None);
/// ```
pub fn intersect(a: &[usize], b: &[usize], c: &[usize]) -> Option<usize> {
    a.iter()
        .copied()
        .find(|item| b.contains(item) && c.contains(item))
}
