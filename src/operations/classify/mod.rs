mod classification;
mod relative_position;
mod report;

pub use classification::Classification;
pub use relative_position::{classify, ClassifyRelativePosition};
pub use report::PairReport;
