//! Operator tests on the seed solids.

use super::*;
use crate::seeds::SeedKind;
use approx::assert_relative_eq;

fn config() -> EngineConfig {
    EngineConfig::default()
}

fn seed(kind: SeedKind, args: &[f64]) -> Polyhedron {
    kind.build(args, &config()).unwrap()
}

fn assert_closed(poly: &Polyhedron) {
    assert_eq!(poly.euler_characteristic(), 2, "{}", poly.summary());
    assert!(poly.faces().iter().all(|f| f.len() >= 3), "{}", poly.name());
    // Every directed edge appears once and is matched by its reverse
    let mut directed = hashbrown::HashSet::new();
    for face in poly.faces() {
        for edge in crate::polyhedron::face_edges(face) {
            assert!(directed.insert(edge), "duplicate directed edge {edge:?}");
        }
    }
    for &(a, b) in &directed {
        assert!(directed.contains(&(b, a)), "unmatched edge {a}->{b}");
    }
}

#[test]
fn operator_codes_roundtrip() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_code(op.code()), Some(op));
    }
    assert_eq!(Operator::from_code('q'), None);
    assert_eq!(Operator::from_code('T'), None);
}

#[test]
fn dual_of_cube_is_octahedron() {
    let cube = seed(SeedKind::Cube, &[]);
    let octa = dual(&cube, &config());
    assert_eq!(octa.vertex_count(), 6);
    assert_eq!(octa.face_count(), 8);
    assert_eq!(octa.edge_count(), 12);
    assert_eq!(octa.name(), "dC");
    assert_closed(&octa);
}

#[test]
fn dual_faces_follow_original_vertices() {
    let cube = seed(SeedKind::Cube, &[]);
    let octa = dual(&cube, &config());
    // Dual face k surrounds original vertex k: its vertices are the faces
    // that contain vertex k.
    for (k, face) in octa.faces().iter().enumerate() {
        for &f in face {
            assert!(cube.faces()[f].contains(&k), "face {f} misses vertex {k}");
        }
    }
}

#[test]
fn dual_twice_cancels_name_and_counts() {
    let dodeca = seed(SeedKind::Dodecahedron, &[]);
    let back = dual(&dual(&dodeca, &config()), &config());
    assert_eq!(back.name(), "D");
    assert_eq!(back.vertex_count(), dodeca.vertex_count());
    assert_eq!(back.face_count(), dodeca.face_count());
    assert_eq!(back.face_degree_histogram(), dodeca.face_degree_histogram());
}

#[test]
fn kis_all_faces() {
    let cube = seed(SeedKind::Cube, &[]);
    let kis_cube = kis(&cube, None, 0.1, &config());
    assert_eq!(kis_cube.vertex_count(), 14);
    assert_eq!(kis_cube.face_count(), 24);
    assert_eq!(kis_cube.name(), "kC");
    assert_closed(&kis_cube);
}

#[test]
fn kis_apex_sits_above_face() {
    let cube = seed(SeedKind::Cube, &[]);
    let kis_cube = kis(&cube, None, 0.25, &config());
    let apex = kis_cube.xyz()[8];
    let expected = cube.centers()[0] + cube.normals()[0] * 0.25;
    assert_relative_eq!(apex.x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(apex.y, expected.y, epsilon = 1e-12);
    assert_relative_eq!(apex.z, expected.z, epsilon = 1e-12);
}

#[test]
fn kis_degree_filter() {
    let prism = seed(SeedKind::Prism, &[5.0]);
    let capped = kis(&prism, Some(5), 0.1, &config());
    // Two pentagons become ten triangles, five quads stay
    assert_eq!(capped.face_count(), 15);
    assert_eq!(capped.face_degree_histogram().get(&4), Some(&5));
    assert_eq!(capped.name(), "k5P5");
    assert_closed(&capped);
}

#[test]
fn kis_without_matching_faces_is_noop() {
    let cube = seed(SeedKind::Cube, &[]);
    let same = kis(&cube, Some(7), 0.1, &config());
    assert_eq!(same, cube);
}

#[test]
fn ambo_of_cube_is_cuboctahedron() {
    let cube = seed(SeedKind::Cube, &[]);
    let cubocta = ambo(&cube, &config());
    assert_eq!(cubocta.vertex_count(), 12);
    assert_eq!(cubocta.edge_count(), 24);
    let histogram = cubocta.face_degree_histogram();
    assert_eq!(histogram.get(&3), Some(&8));
    assert_eq!(histogram.get(&4), Some(&6));
    assert_closed(&cubocta);
}

#[test]
fn gyro_makes_pentagons() {
    let tetra = seed(SeedKind::Tetrahedron, &[]);
    let g = gyro(&tetra, &config());
    assert_eq!(g.face_count(), 12);
    assert!(g.faces().iter().all(|f| f.len() == 5));
    assert_eq!(g.vertex_count(), 4 + 4 + 12);
    assert_closed(&g);
}

#[test]
fn propellor_keeps_original_faces() {
    let cube = seed(SeedKind::Cube, &[]);
    let p = propellor(&cube, &config());
    assert_eq!(p.vertex_count(), 32);
    assert_eq!(p.face_count(), 30);
    assert_eq!(p.face_degree_histogram().get(&4), Some(&30));
    assert_closed(&p);
}

#[test]
fn reflect_is_involutive() {
    let prism = seed(SeedKind::Prism, &[5.0]);
    let mirrored = reflect(&prism);
    assert_eq!(mirrored.name(), "rP5");
    assert_relative_eq!(mirrored.xyz()[0].x, -prism.xyz()[0].x);
    assert_closed(&mirrored);
    let back = reflect(&mirrored);
    assert_eq!(back, prism);
}

#[test]
fn reflect_keeps_normals_outward() {
    let tetra = seed(SeedKind::Tetrahedron, &[]);
    let mirrored = reflect(&tetra);
    for (c, n) in mirrored.centers().iter().zip(mirrored.normals()) {
        assert!(c.dot(n) > 0.0);
    }
}

#[test]
fn inset_selected_faces_only() {
    let prism = seed(SeedKind::Prism, &[6.0]);
    let inset_prism = inset(&prism, Some(6), 0.5, -0.2, &config());
    // Two hexagons become a hexagon plus six wall quads each
    assert_eq!(inset_prism.face_count(), 6 + 2 * 7);
    assert_eq!(inset_prism.vertex_count(), 12 + 12);
    assert_eq!(inset_prism.name(), "n6P6");
    assert_closed(&inset_prism);
}

#[test]
fn extrude_moves_cap_along_normal() {
    let cube = seed(SeedKind::Cube, &[]);
    let normals = cube.normals();
    let pushed = extrude(&cube, None, 0.3, &config());
    assert_eq!(pushed.face_count(), 6 * 5);
    assert_eq!(pushed.vertex_count(), 8 + 24);
    let first_inner = pushed.xyz()[8];
    let moved = first_inner - cube.xyz()[cube.faces()[0][0]];
    assert_relative_eq!(moved.dot(normals[0]), 0.3, epsilon = 1e-12);
    assert_closed(&pushed);
}

#[test]
fn stella_counts() {
    let cube = seed(SeedKind::Cube, &[]);
    let star = stella(&cube, &config());
    assert_eq!(star.vertex_count(), 32);
    assert_eq!(star.face_count(), 54);
    assert_eq!(star.name(), "lC");
    assert_closed(&star);
}

#[test]
fn every_operator_keeps_surfaces_closed() {
    let seeds = [
        seed(SeedKind::Tetrahedron, &[]),
        seed(SeedKind::Octahedron, &[]),
        seed(SeedKind::Icosahedron, &[]),
        seed(SeedKind::Antiprism, &[4.0]),
        seed(SeedKind::Pyramid, &[4.0]),
    ];
    for poly in &seeds {
        for op in Operator::ALL {
            let result = op.apply(poly, &[], &config()).unwrap();
            assert_closed(&result);
            assert!(result.xyz().iter().all(|v| v.is_finite()), "{}", result.name());
        }
    }
}

#[test]
fn apply_parses_arguments() {
    let cube = seed(SeedKind::Cube, &[]);
    let n = Operator::Inset.apply(&cube, &[0.0, 0.3], &config()).unwrap();
    assert_eq!(n.name(), "nC");
    let x = Operator::Extrude.apply(&cube, &[4.0, 0.5], &config()).unwrap();
    assert_eq!(x.name(), "x4C");
    let c = Operator::Canonicalize.apply(&cube, &[0.0], &config()).unwrap();
    assert_eq!(c.name(), "C");
}

#[test]
fn apply_rejects_bad_arguments() {
    let cube = seed(SeedKind::Cube, &[]);
    let err = Operator::Dual.apply(&cube, &[1.0], &config()).unwrap_err();
    assert!(err.to_string().contains("at most 0"));
    let err = Operator::Kis.apply(&cube, &[-3.0], &config()).unwrap_err();
    assert!(err.to_string().contains("face degree"));
    let err = Operator::Canonicalize.apply(&cube, &[2.5], &config()).unwrap_err();
    assert!(err.to_string().contains("iteration count"));
}

#[test]
fn toggled_names() {
    assert_eq!(toggled_name('d', "dC"), "C");
    assert_eq!(toggled_name('d', "kC"), "dkC");
    assert_eq!(prefixed_name('k', Some(3), "C"), "k3C");
    assert_eq!(prefixed_name('k', None, "C"), "kC");
}
