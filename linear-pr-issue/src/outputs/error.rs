//! Output error types.

use thiserror::Error;

/// Errors that can occur while publishing step outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write the outputs file.
    #[error("Failed to write outputs to '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output names must be non-empty and single-line.
    #[error("Invalid output name '{name}'")]
    InvalidName { name: String },

    /// The value contains the heredoc delimiter.
    #[error("Output '{name}' contains the delimiter '{delimiter}'")]
    DelimiterCollision { name: String, delimiter: String },

    /// Failed to serialize an output value.
    #[error("Failed to serialize output '{name}': {source}")]
    SerializeError {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
