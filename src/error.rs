//! Crate-wide error type.
//!
//! All failures in this crate are deterministic input-validation failures
//! raised at construction or decomposition boundaries; none are transient
//! and none leave a partially built `Segment` or `Path` behind.

use thiserror::Error;

/// Errors produced by path construction and transform operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A draw-command stream violated the segment grammar: missing leading
    /// `MoveTo`, more than two consecutive off-curve points, or drawing
    /// commands after a terminating `Close`.
    #[error("invalid command sequence: {reason}")]
    InvalidCommandSequence { reason: String },

    /// Inversion was requested for a matrix whose determinant is zero
    /// (within [`crate::matrix::MATRIX_EPSILON`]).
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// A shape builder received parameters that describe no drawable
    /// geometry, e.g. a zero or negative radius.
    #[error("degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },
}

impl Error {
    pub(crate) fn invalid_commands(reason: impl Into<String>) -> Self {
        Error::InvalidCommandSequence {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Error::DegenerateGeometry {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::invalid_commands("first command must be MoveTo");
        assert_eq!(
            e.to_string(),
            "invalid command sequence: first command must be MoveTo"
        );
        assert_eq!(
            Error::SingularMatrix.to_string(),
            "matrix is singular and cannot be inverted"
        );
    }
}
