//! Error types for rl-figures

use rl_frame::FrameError;
use thiserror::Error;

/// Figure stage errors
#[derive(Error, Debug)]
pub enum FigureError {
    /// G001: Dataset table error (missing file, unknown column, ...)
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// G002: Creation timestamp cannot be parsed
    #[error("[G002] Unparseable created_at timestamp: '{value}'")]
    Timestamp { value: String },

    /// G003: Chart backend failure
    #[error("[G003] Render failed: {0}")]
    Render(String),

    /// G004: IO error with file path context
    #[error("[G004] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for FigureError
pub type FigureResult<T> = Result<T, FigureError>;
