use tracing::{debug, trace};

use super::{Classification, PairReport};
use crate::geometry::{TrianglePair, ValidTriangle};
use crate::operations::query::{IsValidTriangle, SegmentsIntersect};

/// Classifies the relative position of the two triangles of a snapshot.
///
/// Decision order:
/// 1. either triangle degenerate: [`Classification::Invalid`];
/// 2. all vertices of one triangle inside or on the other: [`Classification::Contains`];
/// 3. any of the 3 x 3 edge pairs properly crossing: [`Classification::Intersects`];
/// 4. otherwise [`Classification::Disjoint`].
///
/// Edge pairs that only touch (shared vertex, vertex on edge, collinear
/// overlap) are not crossings, so triangles meeting only along their
/// boundaries come out as `Disjoint`.
pub struct ClassifyRelativePosition {
    pair: TrianglePair,
}

impl ClassifyRelativePosition {
    /// Creates a new `ClassifyRelativePosition` operation.
    #[must_use]
    pub fn new(pair: TrianglePair) -> Self {
        Self { pair }
    }

    /// Executes the classification.
    #[must_use]
    pub fn execute(&self) -> Classification {
        let (Ok(a), Ok(b)) = (self.pair.a().validate(), self.pair.b().validate()) else {
            debug!(classification = %Classification::Invalid, "degenerate triangle in pair");
            return Classification::Invalid;
        };
        let classification = classify_valid(&a, &b);
        debug!(%classification, "classified triangle pair");
        classification
    }

    /// Executes the classification and the two per-triangle validity checks.
    #[must_use]
    pub fn report(&self) -> PairReport {
        PairReport {
            pair: self.pair,
            triangle_a_valid: IsValidTriangle::new(*self.pair.a()).execute(),
            triangle_b_valid: IsValidTriangle::new(*self.pair.b()).execute(),
            classification: self.execute(),
        }
    }
}

/// Shorthand for [`ClassifyRelativePosition`].
#[must_use]
pub fn classify(pair: &TrianglePair) -> Classification {
    ClassifyRelativePosition::new(*pair).execute()
}

fn classify_valid(a: &ValidTriangle, b: &ValidTriangle) -> Classification {
    let a_in_b = b.contains_triangle(a);
    let b_in_a = a.contains_triangle(b);
    trace!(a_in_b, b_in_a, "containment");
    if a_in_b || b_in_a {
        return Classification::Contains;
    }

    let edges_a = a.triangle().edges();
    let edges_b = b.triangle().edges();
    for (i, edge_a) in edges_a.iter().enumerate() {
        for (j, edge_b) in edges_b.iter().enumerate() {
            if SegmentsIntersect::new(*edge_a, *edge_b).execute() {
                trace!(edge_a = i, edge_b = j, "edges cross");
                return Classification::Intersects;
            }
        }
    }
    Classification::Disjoint
}
