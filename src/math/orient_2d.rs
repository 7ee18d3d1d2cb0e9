use super::Point2;

/// Cross product of `ab` and `ac` in the XY plane.
///
/// Positive if `c` lies to the left of the directed line `a -> b`, negative if
/// to the right, zero if the three points are collinear.
#[must_use]
pub fn cross_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Returns `true` if `p` and `q` lie strictly on opposite sides of the line
/// through `a` and `b`.
///
/// A point on the line yields a zero cross product, so it is never on a side.
#[must_use]
pub fn on_opposite_sides_2d(p: &Point2, q: &Point2, a: &Point2, b: &Point2) -> bool {
    cross_2d(a, b, p) * cross_2d(a, b, q) < 0.0
}

/// Proper crossing test for segments `a0 -> a1` and `b0 -> b1`.
///
/// Only interior crossings count. Shared endpoints, an endpoint touching the
/// other segment, and collinear overlap all return `false`.
#[must_use]
pub fn segments_cross_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    on_opposite_sides_2d(a0, a1, b0, b1) && on_opposite_sides_2d(b0, b1, a0, a1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn cross_sign_follows_orientation() {
        assert!(cross_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0)) > 0.0);
        assert!(cross_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, -1.0)) < 0.0);
        assert!(cross_2d(&p(0.0, 0.0), &p(1.0, 1.0), &p(3.0, 3.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn opposite_sides_excludes_point_on_line() {
        let (a, b) = (p(0.0, 0.0), p(4.0, 0.0));
        assert!(on_opposite_sides_2d(&p(1.0, 1.0), &p(2.0, -1.0), &a, &b));
        assert!(!on_opposite_sides_2d(&p(1.0, 1.0), &p(2.0, 3.0), &a, &b));
        assert!(!on_opposite_sides_2d(&p(1.0, 0.0), &p(2.0, -1.0), &a, &b));
    }

    #[test]
    fn crossing_diagonals() {
        assert!(segments_cross_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0)
        ));
    }

    #[test]
    fn t_junction_is_not_a_crossing() {
        // b0 lies on the interior of segment a.
        assert!(!segments_cross_2d(
            &p(0.0, 0.0),
            &p(4.0, 0.0),
            &p(2.0, 0.0),
            &p(2.0, 3.0)
        ));
    }

    #[test]
    fn lines_cross_but_segments_do_not() {
        assert!(!segments_cross_2d(
            &p(0.0, 0.0),
            &p(1.0, 1.0),
            &p(3.0, 0.0),
            &p(2.0, 1.0)
        ));
    }
}
