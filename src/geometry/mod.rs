pub mod pair;
pub mod point;
pub mod segment;
pub mod triangle;

pub use pair::{TrianglePair, DEFAULT_LABELS, PLANE_HEIGHT, PLANE_WIDTH, POINT_COUNT};
pub use point::LabeledPoint;
pub use segment::Segment;
pub use triangle::{Triangle, ValidTriangle};
