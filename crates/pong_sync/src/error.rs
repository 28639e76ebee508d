//! # Sync Error Types
//!
//! Only configuration loading can fail. The numeric paths never return
//! errors; they fall back to one of their inputs instead.

use thiserror::Error;

/// Errors that can occur while loading the sync configuration.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::SyncConfig`].
    #[error("invalid config syntax: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but a value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
