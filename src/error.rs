use thiserror::Error;

/// Top-level error type for the tripos crate.
#[derive(Debug, Error)]
pub enum TriposError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors related to geometric validity.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("point {label} has non-finite coordinates ({x}, {y})")]
    NonFinite { label: char, x: f64, y: f64 },
}

/// Errors related to building or updating an input snapshot.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected {expected} points, found {found}")]
    WrongPointCount { expected: usize, found: usize },

    #[error("point index {index} is out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("unknown classification label: {0}")]
    UnknownLabel(String),
}

/// Convenience type alias for results using [`TriposError`].
pub type Result<T> = std::result::Result<T, TriposError>;
