pub mod barycentric_2d;
pub mod orient_2d;
pub mod triangle_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Returns `true` if both coordinates of `p` are finite.
#[must_use]
pub fn is_finite_2d(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
