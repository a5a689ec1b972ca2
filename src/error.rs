use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the gesture engine.
///
/// Degenerate geometry (zero-length vectors) and "no hand detected" are
/// recoverable conditions handled inside classification, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A landmark set with the wrong number of points. The engine never
    /// truncates or pads; the caller contract is exactly 21 points.
    #[error("expected 21 hand landmarks, got {actual}")]
    InvalidLandmarkCount { actual: usize },

    /// A flat x,y,z buffer that does not decompose into 21 3-D points.
    #[error("flat landmark buffer of length {len} does not hold 21 3-D points")]
    InvalidFlatLength { len: usize },

    /// A gesture template built without any curl or direction criteria.
    #[error("gesture template \"{name}\" has no criteria")]
    EmptyTemplate { name: String },

    /// A second template registered under an already-taken name.
    #[error("gesture template \"{name}\" is already registered")]
    DuplicateTemplate { name: String },

    /// Opaque failure reported by an external landmark model implementation.
    #[error("landmark model failure: {0}")]
    Model(String),
}
