use std::fmt;

use super::{LabeledPoint, Segment};
use crate::error::{GeometryError, Result};
use crate::math::barycentric_2d::point_in_triangle_2d;
use crate::math::triangle_2d::satisfies_triangle_inequality_2d;
use crate::math::Point2;

/// Three labeled points taken as a triangle.
///
/// Nothing is checked at construction; see [`Triangle::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [LabeledPoint; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    #[must_use]
    pub fn new(p0: LabeledPoint, p1: LabeledPoint, p2: LabeledPoint) -> Self {
        Self {
            vertices: [p0, p1, p2],
        }
    }

    /// Returns the three vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[LabeledPoint; 3] {
        &self.vertices
    }

    /// Returns `true` if the vertices form a non-degenerate triangle.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let [p0, p1, p2] = &self.vertices;
        satisfies_triangle_inequality_2d(p0.position(), p1.position(), p2.position())
    }

    /// Checks the triangle and wraps it in a [`ValidTriangle`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a vertex has a NaN or infinite
    /// coordinate, and `GeometryError::Degenerate` if the vertices are
    /// collinear or coincident.
    pub fn validate(&self) -> Result<ValidTriangle> {
        if let Some(bad) = self.vertices.iter().find(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite {
                label: bad.label(),
                x: bad.x(),
                y: bad.y(),
            }
            .into());
        }
        if !self.is_valid() {
            return Err(GeometryError::Degenerate(format!(
                "points {self} cannot form a triangle"
            ))
            .into());
        }
        Ok(ValidTriangle(*self))
    }

    /// Returns the edge opposite each vertex: index `i` drops vertex `i` and
    /// connects the remaining two in order.
    #[must_use]
    pub fn edges(&self) -> [Segment; 3] {
        let [p0, p1, p2] = self.vertices.map(|v| *v.position());
        [
            Segment::new(p1, p2),
            Segment::new(p0, p2),
            Segment::new(p0, p1),
        ]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p0, p1, p2] = &self.vertices;
        write!(f, "{p0}, {p1}, {p2}")
    }
}

/// A triangle known to be non-degenerate.
///
/// Only obtainable through [`Triangle::validate`], so containment queries
/// never divide by a zero area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidTriangle(Triangle);

impl ValidTriangle {
    /// Returns the underlying triangle.
    #[must_use]
    pub fn triangle(&self) -> &Triangle {
        &self.0
    }

    /// Boundary-inclusive containment of a point.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let [v0, v1, v2] = self.0.vertices();
        point_in_triangle_2d(p, v0.position(), v1.position(), v2.position())
    }

    /// Returns `true` if every vertex of `other` lies inside or on `self`.
    #[must_use]
    pub fn contains_triangle(&self, other: &ValidTriangle) -> bool {
        other
            .0
            .vertices()
            .iter()
            .all(|v| self.contains_point(v.position()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TriposError;

    fn tri(coords: [(f64, f64); 3]) -> Triangle {
        let [(x0, y0), (x1, y1), (x2, y2)] = coords;
        Triangle::new(
            LabeledPoint::new('a', x0, y0),
            LabeledPoint::new('b', x1, y1),
            LabeledPoint::new('c', x2, y2),
        )
    }

    #[test]
    fn edges_drop_one_vertex_each() {
        let t = tri([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let [e0, e1, e2] = t.edges();
        assert_eq!(*e0.start(), Point2::new(1.0, 0.0));
        assert_eq!(*e0.end(), Point2::new(0.0, 1.0));
        assert_eq!(*e1.start(), Point2::new(0.0, 0.0));
        assert_eq!(*e1.end(), Point2::new(0.0, 1.0));
        assert_eq!(*e2.start(), Point2::new(0.0, 0.0));
        assert_eq!(*e2.end(), Point2::new(1.0, 0.0));
    }

    #[test]
    fn validate_accepts_proper_triangle() {
        let t = tri([(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
        let valid = t.validate().unwrap();
        assert_eq!(*valid.triangle(), t);
    }

    #[test]
    fn validate_rejects_collinear() {
        let err = tri([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).validate().unwrap_err();
        assert!(matches!(
            err,
            TriposError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn validate_reports_non_finite_vertex() {
        let err = tri([(0.0, 0.0), (f64::NAN, 1.0), (2.0, 0.0)])
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            TriposError::Geometry(GeometryError::NonFinite { label: 'b', .. })
        ));
    }

    #[test]
    fn contains_triangle_is_boundary_inclusive() {
        let outer = tri([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]).validate().unwrap();
        let inner = tri([(0.0, 0.0), (5.0, 0.0), (0.0, 5.0)]).validate().unwrap();
        assert!(outer.contains_triangle(&inner));
        assert!(!inner.contains_triangle(&outer));
        assert!(outer.contains_triangle(&outer));
    }

    #[test]
    fn display_joins_vertices() {
        let t = tri([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(t.to_string(), "a (0, 0), b (1, 0), c (0, 1)");
    }
}
