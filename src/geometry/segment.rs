use crate::math::orient_2d::segments_cross_2d;
use crate::math::Point2;

/// A line segment between two points, derived from a triangle edge.
///
/// Endpoint order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns `true` if the two segments cross at a point interior to both.
    #[must_use]
    pub fn crosses(&self, other: &Segment) -> bool {
        segments_cross_2d(&self.start, &self.end, &other.start, &other.end)
    }
}
