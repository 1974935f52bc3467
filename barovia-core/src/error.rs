//! Error types for save records and collaborator failures
//!
//! Every error here is recoverable: the session surfaces it as a log line
//! and leaves the player state untouched.

use thiserror::Error;

/// Save-record decoding failures
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Input was not valid JSON at all
    #[error("save record is not valid JSON")]
    Malformed,

    /// JSON parsed, but a required field is missing or has the wrong type
    #[error("save record has a missing or mismatched field")]
    InvalidRecord,
}

/// Storage collaborator failure (storage disabled, io fault)
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Clipboard collaborator failure
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
