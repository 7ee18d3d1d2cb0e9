use std::fmt;

use super::Classification;
use crate::geometry::TrianglePair;

/// Classification of a pair together with the validity of each triangle.
///
/// The validity flags are computed independently of the classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairReport {
    pub pair: TrianglePair,
    pub triangle_a_valid: bool,
    pub triangle_b_valid: bool,
    pub classification: Classification,
}

fn can_form(valid: bool) -> &'static str {
    if valid {
        "can"
    } else {
        "cannot"
    }
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "relative position: {}", self.classification)?;
        writeln!(
            f,
            "triangle A: {} {} form a triangle",
            self.pair.a(),
            can_form(self.triangle_a_valid)
        )?;
        write!(
            f,
            "triangle B: {} {} form a triangle",
            self.pair.b(),
            can_form(self.triangle_b_valid)
        )
    }
}
