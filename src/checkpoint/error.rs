//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while saving or restoring a session checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding the session as JSON or bincode failed
    #[error("Could not encode session checkpoint: {0}")]
    SerializationFailed(String),

    /// The bytes are not a session checkpoint in the expected format
    #[error("Could not decode session checkpoint: {0}")]
    DeserializationFailed(String),

    /// Written by a different checkpoint format
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Decoded fine but holds a state the calculator cannot reach
    #[error("Invalid calculator state in checkpoint: {0}")]
    ValidationFailed(String),

    /// Reading or writing the checkpoint file failed
    #[error("Checkpoint file I/O failed: {0}")]
    Io(String),
}
