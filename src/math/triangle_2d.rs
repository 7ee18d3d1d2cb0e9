use super::{is_finite_2d, Point2};

/// Side lengths `(|p0 p1|, |p1 p2|, |p2 p0|)`.
#[must_use]
pub fn side_lengths_2d(p0: &Point2, p1: &Point2, p2: &Point2) -> (f64, f64, f64) {
    (
        nalgebra::distance(p0, p1),
        nalgebra::distance(p1, p2),
        nalgebra::distance(p2, p0),
    )
}

/// Strict triangle inequality over the three side lengths.
///
/// Collinear and coincident points fail because one sum equals the remaining
/// side. Non-finite coordinates always fail.
#[must_use]
pub fn satisfies_triangle_inequality_2d(p0: &Point2, p1: &Point2, p2: &Point2) -> bool {
    if !(is_finite_2d(p0) && is_finite_2d(p1) && is_finite_2d(p2)) {
        return false;
    }
    let (a, b, c) = side_lengths_2d(p0, p1, p2);
    a + b > c && a + c > b && b + c > a
}
