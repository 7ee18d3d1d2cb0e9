pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, TriposError};
pub use geometry::{LabeledPoint, Triangle, TrianglePair, ValidTriangle};
pub use operations::classify::{classify, Classification, ClassifyRelativePosition, PairReport};
pub use operations::query::{is_valid_triangle, point_in_triangle, segments_intersect};
