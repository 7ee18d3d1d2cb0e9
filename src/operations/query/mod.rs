mod is_valid;
mod point_in_triangle;
mod segments_intersect;

pub use is_valid::{is_valid_triangle, IsValidTriangle};
pub use point_in_triangle::{point_in_triangle, PointInTriangle};
pub use segments_intersect::{segments_intersect, SegmentsIntersect};
