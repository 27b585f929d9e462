//! Error types for rl-pipeline
//!
//! Three failure classes, all fatal: schema drift (P0xx), join
//! cardinality (P0xx), and file shape (S0xx).

use rl_frame::FrameError;
use thiserror::Error;

/// Aggregation stage errors
#[derive(Error, Debug)]
pub enum PipelineError {
    /// P001: A source produced the wrong number of repositories
    #[error("[P001] {source_name}: expected {expected} repositories, found {actual}")]
    RowCount {
        source_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// P002: A component count that must be strictly positive is not
    #[error("[P002] Non-positive {column} for {url}")]
    NonPositiveCount { column: &'static str, url: String },

    /// P003: A known dataset maximum no longer holds (upstream drift)
    #[error("[P003] Unexpected maximum for {column}: expected {expected}, found {actual}")]
    UnexpectedMaximum {
        column: &'static str,
        expected: i64,
        actual: i64,
    },

    /// P004: Missing value in a fully populated source
    #[error("[P004] Missing value in column '{column}' for {url}")]
    MissingValue { column: String, url: String },

    /// P005: The joined table silently lost or gained rows
    #[error("[P005] Joined table has {actual} rows, expected {expected}")]
    PostJoinRowCount { expected: usize, actual: usize },

    /// P006: A retained language column never exceeds the 1% noise floor
    #[error("[P006] Language column '{column}' retained but never exceeds 1%")]
    NoiseFloorColumn { column: String },

    /// S001: Repository file name does not follow the owner---repo scheme
    #[error("[S001] File name does not encode a repository: {path}")]
    BadFileName { path: String },

    /// S002: A per-repository file is not a JSON mapping
    #[error("[S002] Expected a JSON mapping in {path}")]
    NotAMapping { path: String },

    /// S003: A detection record lacks a required field
    #[error("[S003] Entry '{entry}' in {path} has no usable '{field}' field")]
    MissingField {
        path: String,
        entry: String,
        field: &'static str,
    },

    /// S004: A containerization file lacks one of the three marker keys
    #[error("[S004] Missing containerization marker '{marker}' in {path}")]
    MissingMarker { path: String, marker: &'static str },

    /// Frame-level error (key collision, 1:1 join violation, ...)
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// CSV parse error from the component counts file
    #[error("[P007] CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse error with file path context
    #[error("[P008] Failed to parse JSON in '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    /// IO error with file path context
    #[error("[P009] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;
