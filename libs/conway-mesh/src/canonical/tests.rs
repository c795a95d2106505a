use super::*;
use crate::math::Vec3;
use crate::ops::kis;
use crate::seeds::SeedKind;
use crate::Polyhedron;
use approx::assert_relative_eq;
use config::engine::EngineConfig;

fn config() -> EngineConfig {
    EngineConfig::default()
}

fn max_planarity_error(poly: &Polyhedron) -> f64 {
    let normals = poly.normals();
    let centers = poly.centers();
    poly.faces()
        .iter()
        .enumerate()
        .flat_map(|(i, face)| {
            let (n, c) = (normals[i], centers[i]);
            face.iter().map(move |&v| (poly.xyz()[v] - c).dot(n).abs())
        })
        .fold(0.0, f64::max)
}

#[test]
fn tangentify_moves_short_edges_outward() {
    let xyz = vec![Vec3::new(0.5, -1.0, 0.0), Vec3::new(0.5, 1.0, 0.0)];
    let out = tangentify(&xyz, &[(0, 1)]);
    // Tangent point (0.5, 0, 0) is inside the unit sphere: push along +x
    let expected = 0.5 + 0.1 * 0.5 * 0.5 * 0.5;
    assert_relative_eq!(out[0].x, expected, epsilon = 1e-12);
    assert_relative_eq!(out[1].x, expected, epsilon = 1e-12);
    assert_relative_eq!(out[0].y, -1.0, epsilon = 1e-12);
}

#[test]
fn recenter_zeroes_mean_tangent_point() {
    let tetra = SeedKind::Tetrahedron.build(&[], &config()).unwrap();
    let shifted: Vec<Vec3> = tetra.xyz().iter().map(|&v| v + Vec3::new(0.3, -0.2, 0.1)).collect();
    let edges = tetra.edges();
    let centered = recenter(&shifted, &edges);
    let mean = edges
        .iter()
        .map(|&(a, b)| crate::math::vec3::tangent_point(centered[a], centered[b]))
        .sum::<Vec3>()
        / edges.len() as f64;
    assert!(mean.length() < 1e-12);
}

#[test]
fn planarize_flattens_warped_face() {
    let xyz = vec![
        Vec3::new(1.0, -1.0, 1.1),
        Vec3::new(1.0, 1.0, 0.9),
        Vec3::new(-1.0, 1.0, 1.1),
        Vec3::new(-1.0, -1.0, 0.9),
    ];
    let faces = vec![vec![0, 1, 2, 3]];
    let out = planarize(&xyz, &faces);
    // Each vertex moves a tenth of the way toward z = 1
    assert_relative_eq!(out[0].z, 1.09, epsilon = 1e-12);
    assert_relative_eq!(out[1].z, 0.91, epsilon = 1e-12);
}

#[test]
fn rescale_puts_farthest_vertex_on_unit_sphere() {
    let xyz = vec![Vec3::new(0.0, 0.0, 4.0), Vec3::new(1.0, 0.0, 0.0)];
    let out = rescale(&xyz);
    assert_relative_eq!(out[0].length(), 1.0);
    assert_relative_eq!(out[1].x, 0.25);
    assert_eq!(rescale(&[Vec3::ZERO]), vec![Vec3::ZERO]);
}

#[test]
fn relaxation_of_kis_tetrahedron_converges() {
    let tetra = SeedKind::Tetrahedron.build(&[], &config()).unwrap();
    let kt = kis(&tetra, None, 0.1, &config());
    let relaxed = canonicalize(&kt, 50_000, 1e-8);
    let report = &relaxed.report;

    assert!(report.converged, "stopped at {} after {} rounds", report.max_change, report.iterations);
    assert!(report.max_change < 1e-8);
    assert_eq!(report.history.len(), report.iterations);

    let half = report.history.len() / 2;
    let early = report.history[..half].iter().copied().fold(0.0, f64::max);
    let late = report.history[half..].iter().copied().fold(0.0, f64::max);
    assert!(late <= early, "late max {late} exceeds early max {early}");

    // Canonical form: every edge tangent to the unit sphere
    let poly = &relaxed.polyhedron;
    for (a, b) in poly.edges() {
        let d = crate::math::vec3::edge_distance(poly.xyz()[a], poly.xyz()[b]);
        assert_relative_eq!(d, 1.0, epsilon = 1e-4);
    }
    assert!(max_planarity_error(poly) < 1e-4);
    assert_eq!(poly.name(), kt.name());
}

#[test]
fn relaxation_respects_iteration_cap() {
    let tetra = SeedKind::Tetrahedron.build(&[], &config()).unwrap();
    let kt = kis(&tetra, None, 0.1, &config());
    let relaxed = canonicalize(&kt, 3, 1e-30);
    assert_eq!(relaxed.report.iterations, 3);
    assert!(!relaxed.report.converged);
    assert_eq!(relaxed.polyhedron.faces(), kt.faces());

    let untouched = canonicalize(&kt, 0, 1e-8);
    assert_eq!(untouched.polyhedron, kt);
    assert_eq!(untouched.report.max_change, 0.0);
}

#[test]
fn reciprocal_centers_invert_face_centroids() {
    let cube = SeedKind::Cube.build(&[], &config()).unwrap();
    let points = reciprocal_centers(&cube);
    for (p, c) in points.iter().zip(cube.centers()) {
        assert_relative_eq!(p.length() * c.length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn tangent_reciprocation_keeps_warped_pyramid_topology() {
    let mut xyz: Vec<Vec3> = (0..5)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 5.0;
            Vec3::new(-angle.cos(), -angle.sin(), -0.2 + 0.05 * (i % 2) as f64)
        })
        .collect();
    xyz.push(Vec3::new(0.0, 0.0, 1.0));
    let mut faces = vec![vec![4, 3, 2, 1, 0]];
    for i in 0..5 {
        faces.push(vec![i, (i + 1) % 5, 5]);
    }
    let warped = Polyhedron::new(xyz, faces, "Y5").unwrap();
    let tidy = canonical_xyz(&warped, 3, &config());
    assert_eq!(tidy.faces(), warped.faces());
    assert_eq!(tidy.name(), "Y5");
    assert!(tidy.xyz().iter().all(|v| v.is_finite()));
    assert_ne!(tidy.xyz(), warped.xyz());
}

#[test]
fn adjust_keeps_topology() {
    let prism = SeedKind::Prism.build(&[7.0], &config()).unwrap();
    let adjusted = adjust_xyz(&prism, 2, &config());
    assert_eq!(adjusted.faces(), prism.faces());
    assert!(adjusted.xyz().iter().all(|v| v.is_finite()));
}
