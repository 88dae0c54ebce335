//! Common error types for the data generators

use thiserror::Error;

/// Common result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal generator errors
///
/// Per-record validation rejections are not represented here: the pipelines
/// count them in aggregate and never abort a run because of them.
#[derive(Error, Debug)]
pub enum Error {
    /// Network, transport, or file-access failure loading a source document
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// A source document was fetched or read but could not be decoded
    #[error("Source malformed: {0}")]
    SourceMalformed(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error while writing output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
