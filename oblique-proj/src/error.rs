use oblique_core::ObliqueError;
use thiserror::Error;

pub type ProjResult<T> = Result<T, ProjError>;

#[derive(Debug, Error)]
pub enum ProjError {
    #[error("Invalid oblique projection configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Singularity in transformation: {message}")]
    Singularity { message: String },

    #[error("Coordinate out of bounds: {message}")]
    OutOfBounds { message: String },

    #[error("Convergence failure: {message}")]
    ConvergenceFailure { message: String },

    #[error("Rotation error: {source}")]
    Rotation {
        #[from]
        source: ObliqueError,
    },
}

impl ProjError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn singularity(message: impl Into<String>) -> Self {
        Self::Singularity {
            message: message.into(),
        }
    }

    pub fn out_of_bounds(message: impl Into<String>) -> Self {
        Self::OutOfBounds {
            message: message.into(),
        }
    }

    pub fn convergence_failure(message: impl Into<String>) -> Self {
        Self::ConvergenceFailure {
            message: message.into(),
        }
    }

    /// True for errors that only mean "this point has no image".
    ///
    /// Line and ring walkers skip such points instead of failing.
    pub fn is_unprojectable(&self) -> bool {
        matches!(
            self,
            Self::Singularity { .. } | Self::OutOfBounds { .. } | Self::ConvergenceFailure { .. }
        )
    }
}
