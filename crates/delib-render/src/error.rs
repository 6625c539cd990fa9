//! Rendering error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An output format name was not recognized.
    #[error("Unknown output format '{0}'")]
    UnknownFormat(String),
}
