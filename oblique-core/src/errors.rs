//! Error types for rotation algebra and parameter extraction.
//!
//! The extractor itself is infallible on proper rotation matrices. Errors only
//! arise from the validating entry point
//! ([`try_extract_parameters`](crate::params::try_extract_parameters)) and from
//! parsing textual rotation sequences.
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidRotation`](ObliqueError::InvalidRotation) | Matrix is not orthonormal or has determinant ≠ +1 |
//! | [`Parse`](ObliqueError::Parse) | Malformed rotation sequence text |

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObliqueError {
    /// Input matrix violates the proper-rotation precondition.
    #[error(
        "Invalid rotation matrix (determinant = {determinant}, orthogonality error = {orthogonality_error:e})"
    )]
    InvalidRotation {
        determinant: f64,
        orthogonality_error: f64,
    },

    /// Rotation sequence text could not be parsed.
    #[error("Cannot parse rotation sequence '{input}': {message}")]
    Parse { input: String, message: String },
}

/// Convenience alias for `Result<T, ObliqueError>`.
pub type ObliqueResult<T> = Result<T, ObliqueError>;

impl ObliqueError {
    /// Creates an [`InvalidRotation`](Self::InvalidRotation) error.
    pub fn invalid_rotation(determinant: f64, orthogonality_error: f64) -> Self {
        Self::InvalidRotation {
            determinant,
            orthogonality_error,
        }
    }

    /// Creates a [`Parse`](Self::Parse) error.
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }
}
