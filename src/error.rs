//! Error types for the chat analysis pipeline.

use thiserror::Error;

/// Errors the analysis pipeline can surface to a caller.
///
/// Malformed lines are never errors: any line that does not carry a
/// recognizable timestamp or payload shape is silently skipped during
/// classification. The only failure the parser itself raises is a log with
/// zero parseable timestamps.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// No line in the input matched the timestamp prefix pattern.
    #[error("could not find valid chat data in the file")]
    NoTimestampFound,

    /// The chat export could not be read from disk.
    #[error("could not read the file: {0}")]
    UnreadableInput(#[from] std::io::Error),
}

/// Result type alias for the analysis pipeline.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
