use super::{LabeledPoint, Triangle};
use crate::error::{InputError, Result};

/// Number of points in a snapshot: two triangles of three points each.
pub const POINT_COUNT: usize = 6;

/// Labels given to the six points of a fresh snapshot.
pub const DEFAULT_LABELS: [char; POINT_COUNT] = ['a', 'b', 'c', 'd', 'e', 'f'];

/// Width of the plane input coordinates are usually drawn from.
pub const PLANE_WIDTH: f64 = 1300.0;

/// Height of the plane input coordinates are usually drawn from.
pub const PLANE_HEIGHT: f64 = 540.0;

/// A snapshot of two triangles, `A` and `B`.
///
/// The flat order is `A0, A1, A2, B0, B1, B2`. Updates produce a new
/// snapshot; labels stay attached to their slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrianglePair {
    a: Triangle,
    b: Triangle,
}

impl TrianglePair {
    /// Creates a pair from two triangles.
    #[must_use]
    pub fn new(a: Triangle, b: Triangle) -> Self {
        Self { a, b }
    }

    /// Builds a pair from a flat list of exactly six points.
    ///
    /// # Errors
    ///
    /// Returns `InputError::WrongPointCount` if `points` does not hold six
    /// points.
    pub fn from_points(points: &[LabeledPoint]) -> Result<Self> {
        let [a0, a1, a2, b0, b1, b2]: [LabeledPoint; POINT_COUNT] =
            points.try_into().map_err(|_| InputError::WrongPointCount {
                expected: POINT_COUNT,
                found: points.len(),
            })?;
        Ok(Self::new(
            Triangle::new(a0, a1, a2),
            Triangle::new(b0, b1, b2),
        ))
    }

    /// Six points labeled `a` through `f`, all at the origin.
    #[must_use]
    pub fn cleared() -> Self {
        let [a0, a1, a2, b0, b1, b2] = DEFAULT_LABELS.map(|label| LabeledPoint::new(label, 0.0, 0.0));
        Self::new(Triangle::new(a0, a1, a2), Triangle::new(b0, b1, b2))
    }

    /// Returns triangle `A`.
    #[must_use]
    pub fn a(&self) -> &Triangle {
        &self.a
    }

    /// Returns triangle `B`.
    #[must_use]
    pub fn b(&self) -> &Triangle {
        &self.b
    }

    /// Iterates over all six points in flat order.
    pub fn points(&self) -> impl Iterator<Item = &LabeledPoint> {
        self.a.vertices().iter().chain(self.b.vertices().iter())
    }

    /// Returns the point at flat index `index`.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&LabeledPoint> {
        self.points().nth(index)
    }

    /// Returns `true` if every point lies within `[0, PLANE_WIDTH] x [0, PLANE_HEIGHT]`.
    ///
    /// Classification does not depend on this.
    #[must_use]
    pub fn within_plane(&self) -> bool {
        self.points()
            .all(|p| (0.0..=PLANE_WIDTH).contains(&p.x()) && (0.0..=PLANE_HEIGHT).contains(&p.y()))
    }

    /// Returns a new snapshot with the point at `index` moved to `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::IndexOutOfRange` if `index >= 6`.
    pub fn with_point(&self, index: usize, x: f64, y: f64) -> Result<Self> {
        if index >= POINT_COUNT {
            return Err(InputError::IndexOutOfRange {
                index,
                len: POINT_COUNT,
            }
            .into());
        }
        let moved: Vec<LabeledPoint> = self
            .points()
            .enumerate()
            .map(|(i, p)| if i == index { p.with_position(x, y) } else { *p })
            .collect();
        Self::from_points(&moved)
    }
}

impl Default for TrianglePair {
    fn default() -> Self {
        Self::cleared()
    }
}
