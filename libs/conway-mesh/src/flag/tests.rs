use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Key {
    Corner(usize),
    Mid(usize, usize),
}

#[test]
fn vertex_registration_is_idempotent() {
    let mut flags: FlagBuilder<Key, usize> = FlagBuilder::default();
    assert_eq!(flags.new_vertex(Key::Corner(0), Vec3::X), 0);
    assert_eq!(flags.new_vertex(Key::Mid(0, 1), Vec3::Y), 1);
    assert_eq!(flags.new_vertex(Key::Corner(0), Vec3::Z), 0);
    assert_eq!(flags.vertex_count(), 2);

    let (xyz, faces) = flags.finalize_faces();
    assert_eq!(xyz, vec![Vec3::X, Vec3::Y]);
    assert!(faces.is_empty());
}

#[test]
fn faces_follow_registration_order() {
    let mut flags: FlagBuilder<usize, &str> = FlagBuilder::default();
    for i in 0..4 {
        flags.new_vertex(i, Vec3::splat(i as f64));
    }
    // Links registered out of cycle order still walk as a cycle
    flags.new_flag("second", 3, 1);
    flags.new_flag("second", 1, 2);
    flags.new_flag("second", 2, 3);
    flags.new_flag("first", 0, 1);
    flags.new_flag("first", 2, 0);
    flags.new_flag("first", 1, 2);

    let (_, faces) = flags.finalize_faces();
    assert_eq!(faces[0], ("second", vec![3, 1, 2]));
    assert_eq!(faces[1], ("first", vec![0, 1, 2]));
}

#[test]
fn relinking_overwrites_previous_edge() {
    let mut flags: FlagBuilder<usize, u8> = FlagBuilder::default();
    for i in 0..4 {
        flags.new_vertex(i, Vec3::ZERO);
    }
    flags.new_flag(0, 0, 3);
    flags.new_flag(0, 0, 1);
    flags.new_flag(0, 1, 2);
    flags.new_flag(0, 2, 0);
    let poly = flags.finalize("x");
    assert_eq!(poly.faces(), &[vec![0, 1, 2]]);
}

#[test]
fn non_closing_face_stops_after_its_link_count() {
    let mut flags: FlagBuilder<usize, u8> = FlagBuilder::default();
    for i in 0..3 {
        flags.new_vertex(i, Vec3::ZERO);
    }
    // 0 -> 1 -> 2 -> 1 -> 2 ... never returns to 0
    flags.new_flag(0, 0, 1);
    flags.new_flag(0, 1, 2);
    flags.new_flag(0, 2, 1);
    let (_, faces) = flags.finalize_faces();
    assert_eq!(faces[0].1, vec![0, 1, 2]);
}

#[test]
fn walk_limit_caps_every_face() {
    let mut flags: FlagBuilder<usize, u8> = FlagBuilder::new(Some(4));
    for i in 0..6 {
        flags.new_vertex(i, Vec3::ZERO);
        flags.new_flag(0, i, (i + 1) % 6);
    }
    let (_, faces) = flags.finalize_faces();
    assert_eq!(faces[0].1, vec![0, 1, 2, 3]);
}

#[test]
fn long_faces_close_without_a_limit() {
    let n = 5000;
    let mut flags: FlagBuilder<usize, u8> = FlagBuilder::default();
    for i in 0..n {
        flags.new_vertex(i, Vec3::new(i as f64, 0.0, 0.0));
    }
    // Register the cycle backwards so the walk cannot follow insertion order
    for i in (0..n).rev() {
        flags.new_flag(0, i, (i + 1) % n);
    }
    let (_, faces) = flags.finalize_faces();
    assert_eq!(faces[0].1, (n - 1..n).chain(0..n - 1).collect::<Vec<_>>());
}

#[test]
fn dangling_link_is_truncated() {
    let mut flags: FlagBuilder<usize, u8> = FlagBuilder::default();
    for i in 0..3 {
        flags.new_vertex(i, Vec3::ZERO);
    }
    flags.new_flag(0, 0, 1);
    flags.new_flag(0, 1, 2);
    let (_, faces) = flags.finalize_faces();
    assert_eq!(faces[0].1, vec![0, 1]);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "fewer than 3 vertices")]
fn collapsed_face_fails_loudly_in_debug_builds() {
    let mut flags: FlagBuilder<usize, u8> = FlagBuilder::default();
    flags.new_vertex(0, Vec3::ZERO);
    flags.new_vertex(1, Vec3::X);
    flags.new_flag(0, 0, 1);
    let _ = flags.finalize("broken");
}

#[test]
fn unregistered_vertex_is_reported() {
    let mut flags: FlagBuilder<usize, u8> = FlagBuilder::default();
    flags.new_vertex(0, Vec3::ZERO);
    flags.new_vertex(1, Vec3::ZERO);
    flags.new_flag(0, 0, 1);
    flags.new_flag(0, 1, 9);
    flags.new_flag(0, 9, 0);
    let (_, faces) = flags.finalize_faces();
    assert_eq!(faces[0].1, vec![0, 1]);
}
