//! Error types for Shelfside Core

use thiserror::Error;

/// Result type alias using ShelfsideError
pub type Result<T> = std::result::Result<T, ShelfsideError>;

/// Top-level error type for all Shelfside operations
#[derive(Debug, Error)]
pub enum ShelfsideError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Remote catalog error: {0}")]
    Remote(#[from] RemoteError),
}

/// Errors that occur while persisting a collection.
///
/// Reads are total (a missing or corrupt file yields the empty
/// collection), so only writes surface these.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode collection: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors from the remote bibliographic API.
///
/// These never cross the aggregator's public search/recommendation
/// surface: search absorbs them into an empty result with an out-of-band
/// flag, recommendations into the fixed fallback sequence.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("Server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}
