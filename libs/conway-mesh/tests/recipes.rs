//! End-to-end generation of the sample recipes.

use conway_mesh::{generate, Polyhedron};
use conway_notation::SAMPLE_RECIPES;

fn max_radius(poly: &Polyhedron) -> f64 {
    poly.xyz().iter().map(|v| v.length()).fold(0.0, f64::max)
}

#[test]
fn every_sample_recipe_generates_a_closed_solid() {
    for recipe in SAMPLE_RECIPES {
        let poly = generate(recipe).unwrap_or_else(|e| panic!("{recipe}: {e}"));
        assert_eq!(poly.euler_characteristic(), 2, "{recipe} gave {poly}");
        assert!(poly.xyz().iter().all(|v| v.is_finite()), "{recipe}");
        assert!((max_radius(&poly) - 1.0).abs() < 1e-9, "{recipe}");
        assert!(poly.faces().iter().all(|f| f.len() >= 3), "{recipe}");
    }
}

#[test]
fn named_solids() {
    let cases = [
        ("tI", 60, 90, 32),
        ("aD", 30, 60, 32),
        ("kC", 14, 36, 24),
        ("gC", 38, 60, 24),
        ("pT", 16, 30, 16),
        ("eC", 24, 48, 26),
        ("sC", 24, 60, 38),
        ("lT", 16, 42, 28),
        ("x4C", 32, 60, 30),
    ];
    for (recipe, v, e, f) in cases {
        let poly = generate(recipe).unwrap();
        assert_eq!(
            (poly.vertex_count(), poly.edge_count(), poly.face_count()),
            (v, e, f),
            "{recipe}"
        );
    }
}

#[test]
fn triangulated_recipe_has_only_triangles() {
    let poly = generate("zD").unwrap();
    assert_eq!(poly.face_count(), 36);
    assert!(poly.faces().iter().all(|f| f.len() == 3));
    assert_eq!(poly.name(), "D");
}
