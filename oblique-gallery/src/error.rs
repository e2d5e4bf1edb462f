use std::path::PathBuf;

use oblique_core::ObliqueError;
use oblique_proj::ProjError;
use thiserror::Error;

pub type GalleryResult<T> = Result<T, GalleryError>;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("scenario '{name}': {source}")]
    Scenario { name: String, source: ProjError },

    #[error("invalid scenario '{name}': {message}")]
    InvalidScenario { name: String, message: String },

    #[error("duplicate scenario name '{0}'")]
    DuplicateName(String),

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("failed to render '{name}': {message}")]
    Render { name: String, message: String },

    #[error("invalid feature file {path}: {message}")]
    Features { path: PathBuf, message: String },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Rotation(#[from] ObliqueError),
}

impl GalleryError {
    pub fn scenario(name: impl Into<String>, source: ProjError) -> Self {
        Self::Scenario {
            name: name.into(),
            source,
        }
    }

    pub fn invalid_scenario(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidScenario {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn render(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn features(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Features {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
