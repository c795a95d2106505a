//! Ear clipping over a simple polygon, after O'Rourke's *Computational
//! Geometry in C*, chapter 1.
//!
//! Orientation tests go through [`robust::orient2d`], so collinearity is
//! decided exactly rather than against a tolerance.

use robust::{orient2d, Coord};

use crate::math::Vec2;

/// Returns the `n - 3` diagonals that split a counter-clockwise simple
/// polygon into triangles, as pairs of polygon indices.
///
/// Polygons with fewer than four vertices need no diagonals.
pub fn ear_clip_diagonals(points: &[Vec2]) -> Vec<(usize, usize)> {
    let n = points.len();
    if n < 4 {
        return Vec::new();
    }

    let mut ring = Ring {
        points,
        order: (0..n).collect(),
    };
    let mut ear = vec![false; n];
    for i in 0..n {
        ear[ring.order[i]] = ring.diagonal(ring.prev(i), ring.next(i));
    }

    let mut diagonals = Vec::with_capacity(n - 3);
    let mut head = 0;
    // Each clip removes one vertex, so this runs exactly n - 3 times
    while ring.len() > 3 {
        let len = ring.len();
        let i = match (0..len).map(|k| (head + k) % len).find(|&i| ear[ring.order[i]]) {
            Some(i) => i,
            None => {
                let i = ring.most_convex();
                tracing::warn!(vertex = ring.order[i], remaining = len, "no valid ear; clipping most convex vertex");
                i
            }
        };

        diagonals.push((ring.order[ring.prev(i)], ring.order[ring.next(i)]));
        ring.order.remove(i);

        // The clipped vertex's neighbours are now adjacent
        let len = ring.len();
        let before = (i + len - 1) % len;
        let after = i % len;
        ear[ring.order[before]] = ring.diagonal(ring.prev(before), after);
        ear[ring.order[after]] = ring.diagonal(before, ring.next(after));
        head = after;
    }
    diagonals
}

/// Remaining polygon during clipping: positions index into `order`, which
/// holds original vertex indices.
struct Ring<'a> {
    points: &'a [Vec2],
    order: Vec<usize>,
}

impl Ring<'_> {
    fn len(&self) -> usize {
        self.order.len()
    }

    fn prev(&self, i: usize) -> usize {
        (i + self.len() - 1) % self.len()
    }

    fn next(&self, i: usize) -> usize {
        (i + 1) % self.len()
    }

    fn at(&self, i: usize) -> Vec2 {
        self.points[self.order[i]]
    }

    /// Whether `i` to `j` is a proper internal diagonal.
    fn diagonal(&self, i: usize, j: usize) -> bool {
        self.in_cone(i, j) && self.in_cone(j, i) && self.diagonalie(i, j)
    }

    /// Whether the segment `i`-`j` crosses no polygon edge that avoids both
    /// of its endpoints.
    fn diagonalie(&self, i: usize, j: usize) -> bool {
        let (a, b) = (self.order[i], self.order[j]);
        (0..self.len()).all(|c| {
            let c1 = self.next(c);
            let (u, v) = (self.order[c], self.order[c1]);
            u == a || v == a || u == b || v == b || !intersect(self.at(i), self.at(j), self.at(c), self.at(c1))
        })
    }

    /// Whether the segment toward `j` leaves `i` on the polygon's interior side.
    fn in_cone(&self, i: usize, j: usize) -> bool {
        let a = self.at(i);
        let b = self.at(j);
        let a0 = self.at(self.prev(i));
        let a1 = self.at(self.next(i));
        if left_on(a, a1, a0) {
            // Convex corner
            return left(a, b, a0) && left(b, a, a1);
        }
        !(left_on(a, b, a1) && left_on(b, a, a0))
    }

    fn most_convex(&self) -> usize {
        let turn = |i: usize| area2(self.at(self.prev(i)), self.at(i), self.at(self.next(i)));
        (0..self.len())
            .max_by(|&x, &y| turn(x).total_cmp(&turn(y)))
            .unwrap_or(0)
    }
}

#[inline]
fn coord(p: Vec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Twice the signed area of triangle `abc`; positive when counter-clockwise.
#[inline]
pub(crate) fn area2(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    orient2d(coord(a), coord(b), coord(c))
}

fn left(a: Vec2, b: Vec2, c: Vec2) -> bool {
    area2(a, b, c) > 0.0
}

fn left_on(a: Vec2, b: Vec2, c: Vec2) -> bool {
    area2(a, b, c) >= 0.0
}

fn collinear(a: Vec2, b: Vec2, c: Vec2) -> bool {
    area2(a, b, c) == 0.0
}

/// Whether `c` lies on the closed segment `ab`.
fn between(a: Vec2, b: Vec2, c: Vec2) -> bool {
    if !collinear(a, b, c) {
        return false;
    }
    if a.x != b.x {
        (a.x <= c.x && c.x <= b.x) || (a.x >= c.x && c.x >= b.x)
    } else {
        (a.y <= c.y && c.y <= b.y) || (a.y >= c.y && c.y >= b.y)
    }
}

/// Proper crossing: the segments share exactly one interior point.
fn intersect_prop(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    if collinear(a, b, c) || collinear(a, b, d) || collinear(c, d, a) || collinear(c, d, b) {
        return false;
    }
    (left(a, b, c) != left(a, b, d)) && (left(c, d, a) != left(c, d, b))
}

fn intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    intersect_prop(a, b, c, d) || between(a, b, c) || between(a, b, d) || between(c, d, a) || between(c, d, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn test_orientation_predicates() {
        assert!(left(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)));
        assert!(!left(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)));
        assert!(left_on(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)));
        assert!(collinear(v(0.0, 0.0), v(1.0, 1.0), v(3.0, 3.0)));
    }

    #[test]
    fn test_between_is_inclusive() {
        assert!(between(v(0.0, 0.0), v(2.0, 0.0), v(1.0, 0.0)));
        assert!(between(v(0.0, 0.0), v(2.0, 0.0), v(2.0, 0.0)));
        assert!(between(v(0.0, 0.0), v(0.0, 2.0), v(0.0, 1.5)));
        assert!(!between(v(0.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)));
        assert!(!between(v(0.0, 0.0), v(2.0, 0.0), v(1.0, 0.1)));
    }

    #[test]
    fn test_segment_intersection() {
        let (a, b) = (v(0.0, 0.0), v(2.0, 2.0));
        assert!(intersect_prop(a, b, v(0.0, 2.0), v(2.0, 0.0)));
        assert!(!intersect_prop(a, b, v(1.0, 1.0), v(2.0, 0.0)));
        assert!(intersect(a, b, v(1.0, 1.0), v(2.0, 0.0)));
        assert!(!intersect(a, b, v(3.0, 0.0), v(4.0, 0.0)));
    }

    #[test]
    fn test_square_needs_one_diagonal() {
        let square = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
        let diagonals = ear_clip_diagonals(&square);
        assert_eq!(diagonals.len(), 1);
        let (a, b) = diagonals[0];
        assert_eq!(a.abs_diff(b), 2);
    }

    #[test]
    fn test_reflex_vertex_is_not_an_ear() {
        // Arrowhead with a reflex vertex at index 2
        let arrow = [v(0.0, 0.0), v(2.0, 1.0), v(1.0, 1.0), v(2.0, 2.0), v(0.0, 2.0)];
        let ring = Ring {
            points: &arrow,
            order: (0..5).collect(),
        };
        assert!(!ring.diagonal(1, 3));
        assert!(ring.diagonal(0, 2));
        assert_eq!(ear_clip_diagonals(&arrow).len(), 2);
    }

    #[test]
    fn test_small_polygons_have_no_diagonals() {
        assert!(ear_clip_diagonals(&[v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)]).is_empty());
        assert!(ear_clip_diagonals(&[]).is_empty());
    }
}
