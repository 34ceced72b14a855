//! Error type shared by the library.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScalarError {
    #[error("unknown note name '{0}'")]
    UnknownNote(String),

    #[error("unknown scale type '{0}' (expected major, minor, pentatonic or blues)")]
    UnknownScale(String),

    #[error("unknown orientation '{0}' (expected horizontal or vertical)")]
    UnknownOrientation(String),

    #[error("settings must be a JSON object")]
    NotAnObject,

    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScalarError>;
