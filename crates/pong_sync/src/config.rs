//! # Sync Configuration
//!
//! Everything the smoothing layer needs is passed in explicitly through
//! [`SyncConfig`]. There are no ambient lookups.
//!
//! ```toml
//! lookahead_ratio = 0.2
//! playfield_height = 600.0
//! transition_steps = 30
//! transition_easing = "quad_in_out"
//! buffer_capacity = 32
//! ```

use std::path::Path;

use pong_shared::{PLAYFIELD_HEIGHT, PREDICTION_LOOKAHEAD};
use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::{SyncError, SyncResult};

/// Configuration for interpolation, prediction and reconnection playback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Fraction of one velocity step the interpolation target is nudged forward.
    pub lookahead_ratio: f64,
    /// Playfield height. Must match the backend physics.
    pub playfield_height: f64,
    /// Frames in a reconnection catch-up sequence.
    pub transition_steps: u32,
    /// Curve applied to the catch-up sequence.
    pub transition_easing: Easing,
    /// Snapshots kept by [`crate::SnapshotBuffer`].
    pub buffer_capacity: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            lookahead_ratio: PREDICTION_LOOKAHEAD,
            playfield_height: PLAYFIELD_HEIGHT,
            // Half a second at 60 fps
            transition_steps: 30,
            transition_easing: Easing::QuadInOut,
            buffer_capacity: 32,
        }
    }
}

impl SyncConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    /// [`SyncError::ConfigParse`] on bad syntax or unknown keys,
    /// [`SyncError::InvalidConfig`] if a value is out of range.
    pub fn from_toml_str(text: &str) -> SyncResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    /// [`SyncError::ConfigIo`] if the file cannot be read, otherwise as
    /// [`SyncConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> SyncResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SyncError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded sync config");
        Ok(config)
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    /// [`SyncError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> SyncResult<()> {
        if !(0.0..=1.0).contains(&self.lookahead_ratio) {
            return Err(SyncError::InvalidConfig(format!(
                "lookahead_ratio must be within [0, 1], got {}",
                self.lookahead_ratio
            )));
        }
        if !self.playfield_height.is_finite() || self.playfield_height <= 0.0 {
            return Err(SyncError::InvalidConfig(format!(
                "playfield_height must be positive, got {}",
                self.playfield_height
            )));
        }
        if self.transition_steps == 0 {
            return Err(SyncError::InvalidConfig(
                "transition_steps must be at least 1".to_string(),
            ));
        }
        if self.buffer_capacity < 2 {
            return Err(SyncError::InvalidConfig(format!(
                "buffer_capacity must be at least 2, got {}",
                self.buffer_capacity
            )));
        }
        Ok(())
    }
}
