use crate::geometry::ValidTriangle;
use crate::math::Point2;

/// Tests whether a point lies inside or on the boundary of a triangle.
///
/// Takes a [`ValidTriangle`], so the barycentric divisor is never zero.
pub struct PointInTriangle {
    point: Point2,
    triangle: ValidTriangle,
}

impl PointInTriangle {
    /// Creates a new `PointInTriangle` query.
    #[must_use]
    pub fn new(point: Point2, triangle: ValidTriangle) -> Self {
        Self { point, triangle }
    }

    /// Executes the test. Edges and vertices count as inside.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.triangle.contains_point(&self.point)
    }
}

/// Shorthand for [`PointInTriangle`].
#[must_use]
pub fn point_in_triangle(point: &Point2, triangle: &ValidTriangle) -> bool {
    PointInTriangle::new(*point, *triangle).execute()
}
