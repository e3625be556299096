use thiserror::Error;

/// The full set of failures a planning call can surface.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("unreachable vertices: {indices:?}")]
    UnreachableVertices { indices: Vec<usize> },

    #[error("internal invariant violation: {reason}")]
    InternalInvariantViolation { reason: String },
}

impl Error {
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Error::InvalidGeometry {
            reason: reason.into(),
        }
    }

    pub fn unreachable_vertices(indices: Vec<usize>) -> Self {
        Error::UnreachableVertices { indices }
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Error::InternalInvariantViolation {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
