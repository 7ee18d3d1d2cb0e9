use std::fmt;

use crate::math::Point2;

/// A named point in the plane.
///
/// Immutable: changing coordinates produces a new value via
/// [`LabeledPoint::with_position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    label: char,
    position: Point2,
}

impl LabeledPoint {
    /// Creates a new labeled point.
    #[must_use]
    pub fn new(label: char, x: f64, y: f64) -> Self {
        Self {
            label,
            position: Point2::new(x, y),
        }
    }

    /// Returns the identifying label.
    #[must_use]
    pub fn label(&self) -> char {
        self.label
    }

    /// Returns the position.
    #[must_use]
    pub fn position(&self) -> &Point2 {
        &self.position
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns a copy of this point moved to `(x, y)`, keeping the label.
    #[must_use]
    pub fn with_position(&self, x: f64, y: f64) -> Self {
        Self::new(self.label, x, y)
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        crate::math::is_finite_2d(&self.position)
    }
}

impl fmt::Display for LabeledPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.label, self.position.x, self.position.y)
    }
}
