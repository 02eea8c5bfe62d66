//! Error types for ct-output.

use thiserror::Error;

use ct_core::SegmentId;

/// Errors that can occur when exporting a route.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// The circuit names a segment the city does not contain.
    #[error("segment {0} is not part of the city")]
    UnknownSegment(SegmentId),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
