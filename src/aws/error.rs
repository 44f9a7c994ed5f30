//! Error types for AWS CLI interaction.

use thiserror::Error;

/// Error type for running the `aws` CLI and parsing its output.
#[derive(Debug, Error)]
pub enum AwsError {
    /// The command could not be spawned at all.
    #[error("failed to execute command: {source}")]
    Spawn {
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited non-zero.
    #[error("command failed: {stderr}")]
    CommandFailed {
        /// Captured stderr from the command
        stderr: String,
    },

    /// The command produced more output than the safety limit allows.
    #[error("response too large: {len} bytes")]
    ResponseTooLarge {
        /// Size of the stdout buffer
        len: usize,
    },

    /// The command produced non-UTF-8 output.
    #[error("invalid UTF-8 in command output: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The JSON payload did not match the expected shape.
    #[error("error parsing JSON at '{path}': {source}")]
    Json {
        /// Path into the JSON document where parsing failed
        path: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}
