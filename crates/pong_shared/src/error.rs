//! # Snapshot Error Types

use thiserror::Error;

/// Errors that can occur while decoding or encoding a snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The transport delivered something that is not a valid snapshot.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The message decoded but carried no game-state fields at all.
    #[error("snapshot carries no game state")]
    Empty,
}

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
