//! Prisms, antiprisms and pyramids over a regular n-gon.
//!
//! Raw coordinates put every vertex on a simple ring; a few reciprocation
//! rounds then flatten the faces.

use std::f64::consts::TAU;

use config::constants::{
    PRISM_RECIPROCATE_ITERATIONS, PYRAMID_APEX_HEIGHT, PYRAMID_BASE_HEIGHT,
    PYRAMID_RECIPROCATE_ITERATIONS,
};
use config::engine::EngineConfig;

use crate::canonical::{adjust_xyz, canonical_xyz};
use crate::math::Vec3;
use crate::polyhedron::Polyhedron;

/// Bottom face listed downward so it winds outward, then the top face.
fn ring_caps(n: usize) -> Vec<Vec<usize>> {
    vec![(0..n).rev().collect(), (n..2 * n).collect()]
}

/// `P n`. `n` must be at least 3.
pub fn prism(n: usize, config: &EngineConfig) -> Polyhedron {
    let theta = TAU / n as f64;
    let h = (theta / 2.0).sin();
    let ring = |z: f64| (0..n).map(move |i| Vec3::new(-(i as f64 * theta).cos(), -(i as f64 * theta).sin(), z));
    let xyz: Vec<Vec3> = ring(-h).chain(ring(h)).collect();

    let mut faces = ring_caps(n);
    faces.extend((0..n).map(|i| vec![i, (i + 1) % n, (i + 1) % n + n, i + n]));

    let raw = Polyhedron::from_parts(xyz, faces, format!("P{n}"));
    adjust_xyz(&raw, PRISM_RECIPROCATE_ITERATIONS, config)
}

/// `A n`. `n` must be at least 3.
pub fn antiprism(n: usize, config: &EngineConfig) -> Polyhedron {
    let theta = TAU / n as f64;
    let mut h = (1.0 - 4.0 / (4.0 + 2.0 * (theta / 2.0).cos() - 2.0 * theta.cos())).sqrt();
    let mut r = (1.0 - h * h).sqrt();
    let f = (h * h + (r * (theta / 2.0).cos()).powi(2)).sqrt();
    // Scale so the edges sit on the unit sphere, flipped to start below
    r = -r / f;
    h = -h / f;

    let xyz: Vec<Vec3> = (0..n)
        .map(|i| {
            let a = i as f64 * theta;
            Vec3::new(r * a.cos(), r * a.sin(), h)
        })
        .chain((0..n).map(|i| {
            let a = (i as f64 + 0.5) * theta;
            Vec3::new(r * a.cos(), r * a.sin(), -h)
        }))
        .collect();

    let mut faces = ring_caps(n);
    for i in 0..n {
        faces.push(vec![i, (i + 1) % n, i + n]);
        faces.push(vec![i, i + n, (n + i - 1) % n + n]);
    }

    let raw = Polyhedron::from_parts(xyz, faces, format!("A{n}"));
    adjust_xyz(&raw, PRISM_RECIPROCATE_ITERATIONS, config)
}

/// `Y n`. `n` must be at least 3.
pub fn pyramid(n: usize, config: &EngineConfig) -> Polyhedron {
    let theta = TAU / n as f64;
    let mut xyz: Vec<Vec3> = (0..n)
        .map(|i| {
            let a = i as f64 * theta;
            Vec3::new(-a.cos(), -a.sin(), PYRAMID_BASE_HEIGHT)
        })
        .collect();
    xyz.push(Vec3::new(0.0, 0.0, PYRAMID_APEX_HEIGHT));

    let mut faces = vec![(0..n).rev().collect::<Vec<_>>()];
    faces.extend((0..n).map(|i| vec![i, (i + 1) % n, n]));

    let raw = Polyhedron::from_parts(xyz, faces, format!("Y{n}"));
    canonical_xyz(&raw, PYRAMID_RECIPROCATE_ITERATIONS, config)
}
