//! Error types for notebook-client.

use thiserror::Error;

/// Main error type for all notebook operations.
///
/// There is no automatic recovery anywhere in the crate except the
/// variable/callable disambiguation in [`crate::resolve`], which converts
/// one specific [`Remote`](NotebookError::Remote) shape into a successful
/// callable result. Every other error propagates unchanged.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// Connection-level failure reported by the transport. Not recoverable
    /// locally; no status code is available.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with status >= 300. `detail` is the raw response
    /// body text, which is the server's diagnostic payload.
    #[error("server returned status {status}: {detail}")]
    Remote { status: u16, detail: String },

    /// A successful eval response did not contain the requested output name.
    #[error("response is missing requested output `{0}`")]
    MissingOutput(String),

    /// Malformed or incompatible wire payload.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The base URL and notebook identifier could not form a request URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias using NotebookError.
pub type Result<T> = std::result::Result<T, NotebookError>;
