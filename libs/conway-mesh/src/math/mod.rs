//! # Math
//!
//! Vector helpers and rotation builders on top of `glam`'s f64 types.
//! All operations are total except [`vec3::reciprocal`] and unit
//! normalization, which require a nonzero input.

pub mod rotation;
pub mod vec3;

pub use glam::{DMat3 as Mat3, DVec2 as Vec2, DVec3 as Vec3};
