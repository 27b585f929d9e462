//! Error types for rl-frame

use thiserror::Error;

/// Frame construction and transformation errors
#[derive(Error, Debug)]
pub enum FrameError {
    /// F001: Duplicate row key during frame construction
    #[error("[F001] Duplicate row key: {key}")]
    DuplicateKey { key: String },

    /// F002: Column not present in the frame
    #[error("[F002] Unknown column: {name}")]
    UnknownColumn { name: String },

    /// F003: Column name already present in the frame
    #[error("[F003] Duplicate column: {name}")]
    DuplicateColumn { name: String },

    /// F004: Column length does not match the frame's row count
    #[error("[F004] Column '{name}' has {actual} values, frame has {expected} rows")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// F005: One-to-one join violated (a key exists on only one side)
    #[error("[F005] Join is not one-to-one: key '{key}' missing from {side} side")]
    JoinKeyMismatch { key: String, side: &'static str },

    /// F006: Both join sides carry a column with the same name
    #[error("[F006] Join column collision: {name}")]
    JoinColumnCollision { name: String },

    /// F007: CSV read/write error
    #[error("[F007] CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// F008: Malformed CSV row
    #[error("[F008] Malformed CSV row {row}: {message}")]
    CsvRow { row: usize, message: String },

    /// F009: IO error with file path context
    #[error("[F009] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for FrameError
pub type FrameResult<T> = Result<T, FrameError>;
