use crate::geometry::{LabeledPoint, Triangle};

/// Checks whether three points form a non-degenerate triangle.
pub struct IsValidTriangle {
    triangle: Triangle,
}

impl IsValidTriangle {
    /// Creates a new `IsValidTriangle` query.
    #[must_use]
    pub fn new(triangle: Triangle) -> Self {
        Self { triangle }
    }

    /// Executes the check using the strict triangle inequality.
    ///
    /// Collinear, coincident, or non-finite vertices give `false`.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.triangle.is_valid()
    }
}

/// Shorthand for [`IsValidTriangle`] over three loose points.
#[must_use]
pub fn is_valid_triangle(p0: &LabeledPoint, p1: &LabeledPoint, p2: &LabeledPoint) -> bool {
    IsValidTriangle::new(Triangle::new(*p0, *p1, *p2)).execute()
}
