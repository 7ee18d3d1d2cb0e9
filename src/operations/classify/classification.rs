use std::fmt;
use std::str::FromStr;

use crate::error::{InputError, TriposError};

/// Relative position of two triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// At least one triangle is degenerate.
    Invalid,
    /// One triangle lies inside or on the boundary of the other.
    Contains,
    /// Some pair of edges properly cross.
    Intersects,
    /// Neither containment nor a proper crossing.
    Disjoint,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::Invalid,
        Classification::Contains,
        Classification::Intersects,
        Classification::Disjoint,
    ];

    /// User-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Classification::Invalid => "data abnormal",
            Classification::Contains => "contains",
            Classification::Intersects => "intersects",
            Classification::Disjoint => "disjoint",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Classification {
    type Err = TriposError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| InputError::UnknownLabel(s.to_owned()).into())
    }
}
