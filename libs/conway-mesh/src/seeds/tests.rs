use super::*;
use crate::error::ConwayError;

fn config() -> EngineConfig {
    EngineConfig::default()
}

fn assert_outward(poly: &Polyhedron) {
    let middle = crate::math::vec3::centroid(poly.xyz());
    for (i, (c, n)) in poly.centers().iter().zip(poly.normals()).enumerate() {
        assert!((*c - middle).dot(n) > 0.0, "face {i} of {} winds inward", poly.name());
    }
}

#[test]
fn seed_codes_roundtrip() {
    for seed in SeedKind::ALL {
        assert_eq!(SeedKind::from_code(seed.code()), Some(seed));
    }
    assert_eq!(SeedKind::from_code('Q'), None);
    assert_eq!(SeedKind::from_code('k'), None);
}

#[test]
fn platonic_counts() {
    let expected = [
        (SeedKind::Tetrahedron, 4, 6, 4),
        (SeedKind::Octahedron, 6, 12, 8),
        (SeedKind::Cube, 8, 12, 6),
        (SeedKind::Icosahedron, 12, 30, 20),
        (SeedKind::Dodecahedron, 20, 30, 12),
    ];
    for (seed, v, e, f) in expected {
        let poly = seed.build(&[], &config()).unwrap();
        assert_eq!(
            (poly.vertex_count(), poly.edge_count(), poly.face_count()),
            (v, e, f),
            "{}",
            seed.name()
        );
        assert_eq!(poly.name(), seed.code().to_string());
        assert_outward(&poly);
    }
}

#[test]
fn prism_family() {
    for n in [3, 4, 5, 8] {
        let prism = SeedKind::Prism.build(&[n as f64], &config()).unwrap();
        assert_eq!(prism.vertex_count(), 2 * n);
        assert_eq!(prism.face_count(), n + 2);
        assert_eq!(prism.face_degree_histogram().get(&n).copied(), Some(if n == 4 { n + 2 } else { 2 }));
        assert_eq!(prism.name(), format!("P{n}"));
        assert_eq!(prism.euler_characteristic(), 2);
        assert_outward(&prism);
    }
}

#[test]
fn antiprism_family() {
    for n in [3, 5, 6] {
        let anti = SeedKind::Antiprism.build(&[n as f64], &config()).unwrap();
        assert_eq!(anti.vertex_count(), 2 * n);
        assert_eq!(anti.face_count(), 2 * n + 2);
        assert_eq!(anti.edge_count(), 4 * n);
        assert_eq!(anti.name(), format!("A{n}"));
        assert_outward(&anti);
    }
}

#[test]
fn pyramid_family() {
    let pyramid = SeedKind::Pyramid.build(&[6.0], &config()).unwrap();
    assert_eq!(pyramid.vertex_count(), 7);
    assert_eq!(pyramid.face_count(), 7);
    assert_eq!(pyramid.face_degree_histogram().get(&3), Some(&6));
    assert_eq!(pyramid.name(), "Y6");
    assert!(pyramid.xyz().iter().all(|v| v.is_finite()));
    assert_outward(&pyramid);
}

#[test]
fn platonic_seeds_reject_arguments() {
    let err = SeedKind::Cube.build(&[3.0], &config()).unwrap_err();
    assert!(matches!(err, ConwayError::InvalidArgument { code: 'C', .. }));
}

#[test]
fn family_arguments_are_checked() {
    let cases: [&[f64]; 6] = [&[], &[2.0], &[4.5], &[-3.0], &[f64::NAN], &[4.0, 1.0]];
    for args in cases {
        let err = SeedKind::Prism.build(args, &config()).unwrap_err();
        assert!(matches!(err, ConwayError::InvalidArgument { code: 'P', .. }), "{args:?}");
    }
    let err = SeedKind::Pyramid.build(&[2.0], &config()).unwrap_err();
    assert!(err.to_string().contains("at least 3"));
}

#[test]
fn side_count_is_capped() {
    let largest = SeedKind::Prism.build(&[MAX_POLYGON_SIDES as f64], &config()).unwrap();
    assert_eq!(largest.face_count(), MAX_POLYGON_SIDES + 2);
    assert_eq!(largest.vertex_count(), 2 * MAX_POLYGON_SIDES);

    for seed in [SeedKind::Prism, SeedKind::Antiprism, SeedKind::Pyramid] {
        for n in [MAX_POLYGON_SIDES as f64 + 1.0, 1e23, f64::MAX] {
            let err = seed.build(&[n], &config()).unwrap_err();
            assert!(matches!(err, ConwayError::InvalidArgument { .. }), "{} {n}", seed.name());
            assert!(err.to_string().contains("at most"), "{err}");
        }
    }
}
