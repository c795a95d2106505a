//! Rotation matrix builders.
//!
//! These never touch view state; a renderer composes them itself and hands
//! the result to [`crate::Polyhedron::rotated`].

use super::{Mat3, Vec3};

/// Euler composition: yaw `phi` about z, then tilt `theta` in the x-z
/// plane, then roll `psi` about x.
///
/// # Examples
/// ```
/// use conway_mesh::math::rotation::euler_rotation;
/// use conway_mesh::math::Mat3;
/// assert_eq!(euler_rotation(0.0, 0.0, 0.0), Mat3::IDENTITY);
/// ```
pub fn euler_rotation(phi: f64, theta: f64, psi: f64) -> Mat3 {
    Mat3::from_rotation_x(psi) * Mat3::from_rotation_y(-theta) * Mat3::from_rotation_z(phi)
}

/// Right-handed rotation by `angle` radians about `axis` (Rodrigues).
///
/// A zero axis rotates about z. Axis-aligned rotations skip the general
/// formula so that quarter turns stay exact.
///
/// # Examples
/// ```
/// use conway_mesh::math::rotation::axis_angle_rotation;
/// use conway_mesh::math::Vec3;
/// let m = axis_angle_rotation(std::f64::consts::FRAC_PI_2, Vec3::Z);
/// let v = m * Vec3::X;
/// assert!((v - Vec3::Y).length() < 1e-12);
/// ```
pub fn axis_angle_rotation(angle: f64, axis: Vec3) -> Mat3 {
    let axis = if axis.length_squared() == 0.0 {
        Vec3::Z
    } else {
        axis.normalize()
    };

    match (axis.x, axis.y, axis.z) {
        (x, y, z) if y == 0.0 && z == 0.0 => return Mat3::from_rotation_x(angle * x.signum()),
        (x, y, z) if x == 0.0 && z == 0.0 => return Mat3::from_rotation_y(angle * y.signum()),
        (x, y, z) if x == 0.0 && y == 0.0 => return Mat3::from_rotation_z(angle * z.signum()),
        _ => {}
    }

    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let Vec3 { x, y, z } = axis;
    Mat3::from_cols(
        Vec3::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y),
        Vec3::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x),
        Vec3::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c),
    )
}

/// Rotation carrying the direction of `from` onto the direction of `to`.
pub fn vector_rotation(from: Vec3, to: Vec3) -> Mat3 {
    let a = from.normalize_or_zero();
    let b = to.normalize_or_zero();
    let angle = a.dot(b).clamp(-1.0, 1.0).acos();
    let axis = a.cross(b);
    if axis.length_squared() < f64::EPSILON && angle > std::f64::consts::FRAC_PI_2 {
        // Opposite directions: any perpendicular axis works
        return axis_angle_rotation(angle, a.any_orthonormal_vector());
    }
    axis_angle_rotation(angle, axis)
}
