use crate::geometry::Segment;
use crate::math::Point2;

/// Tests whether two segments properly cross.
///
/// Uses the orientation test in both directions with a strict sign check:
/// touching endpoints, a shared vertex, and collinear overlap are not
/// crossings.
pub struct SegmentsIntersect {
    first: Segment,
    second: Segment,
}

impl SegmentsIntersect {
    /// Creates a new `SegmentsIntersect` query.
    #[must_use]
    pub fn new(first: Segment, second: Segment) -> Self {
        Self { first, second }
    }

    /// Executes the test.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.first.crosses(&self.second)
    }
}

/// Shorthand for [`SegmentsIntersect`] over segments `ab` and `cd`.
#[must_use]
pub fn segments_intersect(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    SegmentsIntersect::new(Segment::new(*a, *b), Segment::new(*c, *d)).execute()
}
