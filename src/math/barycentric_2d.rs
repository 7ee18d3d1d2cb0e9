use super::Point2;

/// Barycentric coordinates `(a, b, c)` of `p` with respect to the triangle
/// `(v0, v1, v2)`, so that `p = a * v0 + b * v1 + c * v2` and `a + b + c = 1`.
///
/// Returns `None` if the triangle is degenerate (zero divisor) or the divisor
/// is not finite.
#[must_use]
pub fn barycentric_2d(p: &Point2, v0: &Point2, v1: &Point2, v2: &Point2) -> Option<(f64, f64, f64)> {
    let divisor = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);
    if divisor == 0.0 || !divisor.is_finite() {
        return None;
    }
    let a = ((v1.y - v2.y) * (p.x - v2.x) + (v2.x - v1.x) * (p.y - v2.y)) / divisor;
    let b = ((v2.y - v0.y) * (p.x - v2.x) + (v0.x - v2.x) * (p.y - v2.y)) / divisor;
    let c = 1.0 - a - b;
    Some((a, b, c))
}

/// Boundary-inclusive point-in-triangle test.
///
/// Points on an edge or a vertex count as inside. A degenerate triangle
/// contains nothing.
#[must_use]
pub fn point_in_triangle_2d(p: &Point2, v0: &Point2, v1: &Point2, v2: &Point2) -> bool {
    let unit = 0.0..=1.0;
    barycentric_2d(p, v0, v1, v2)
        .is_some_and(|(a, b, c)| unit.contains(&a) && unit.contains(&b) && unit.contains(&c))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn vertices_have_unit_weights() {
        let (v0, v1, v2) = (p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0));
        let (a, b, c) = barycentric_2d(&v0, &v0, &v1, &v2).unwrap();
        assert_relative_eq!(a, 1.0);
        assert_relative_eq!(b, 0.0);
        assert_relative_eq!(c, 0.0);
        let (a, b, c) = barycentric_2d(&v2, &v0, &v1, &v2).unwrap();
        assert_relative_eq!(a, 0.0);
        assert_relative_eq!(b, 0.0);
        assert_relative_eq!(c, 1.0);
    }

    #[test]
    fn centroid_weights_are_equal() {
        let (v0, v1, v2) = (p(0.0, 0.0), p(6.0, 0.0), p(0.0, 6.0));
        let (a, b, c) = barycentric_2d(&p(2.0, 2.0), &v0, &v1, &v2).unwrap();
        assert_relative_eq!(a, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(b, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(c, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn weights_reconstruct_point() {
        let (v0, v1, v2) = (p(1.0, 2.0), p(7.0, -3.0), p(4.0, 9.0));
        let q = p(3.5, 2.25);
        let (a, b, c) = barycentric_2d(&q, &v0, &v1, &v2).unwrap();
        let rebuilt = Point2::from(v0.coords * a + v1.coords * b + v2.coords * c);
        assert_relative_eq!(rebuilt, q, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_triangle_has_no_coordinates() {
        let (v0, v1, v2) = (p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0));
        assert!(barycentric_2d(&p(1.0, 1.0), &v0, &v1, &v2).is_none());
        assert!(!point_in_triangle_2d(&p(1.0, 1.0), &v0, &v1, &v2));
    }

    #[test]
    fn boundary_points_are_inside() {
        let (v0, v1, v2) = (p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0));
        assert!(point_in_triangle_2d(&p(0.0, 0.0), &v0, &v1, &v2));
        assert!(point_in_triangle_2d(&p(5.0, 0.0), &v0, &v1, &v2));
        assert!(point_in_triangle_2d(&p(5.0, 5.0), &v0, &v1, &v2));
        assert!(!point_in_triangle_2d(&p(10.0, 10.0), &v0, &v1, &v2));
    }

    #[test]
    fn nan_point_is_outside() {
        let (v0, v1, v2) = (p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0));
        assert!(!point_in_triangle_2d(&p(f64::NAN, 1.0), &v0, &v1, &v2));
    }
}
