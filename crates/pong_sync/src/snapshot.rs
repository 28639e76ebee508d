//! # Snapshot Buffer
//!
//! Keeps the most recent snapshots in arrival order and samples the state to
//! draw at a given render time.
//!
//! ```text
//! Arrivals:      [1] [2] [3] [4]
//!                          │   │
//!                   previous   latest
//!                          │   │
//! Render time:             ──▼──   factor from server_timestamp
//! ```
//!
//! The buffer does not reorder or deduplicate. The transport is responsible
//! for delivering snapshots in order.

use pong_shared::GameState;
use tracing::trace;

use crate::config::SyncConfig;
use crate::interpolation::Interpolator;

/// Ring buffer of received snapshots.
pub struct SnapshotBuffer {
    /// Ring buffer of snapshots.
    snapshots: Vec<GameState>,
    /// Write index.
    write_index: usize,
    /// Number of valid snapshots.
    count: usize,
}

impl SnapshotBuffer {
    /// Creates a buffer holding up to `capacity` snapshots (at least two).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: vec![GameState::empty(); capacity.max(2)],
            write_index: 0,
            count: 0,
        }
    }

    /// Creates a buffer sized by the sync configuration.
    #[must_use]
    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.buffer_capacity)
    }

    /// Adds a snapshot, evicting the oldest when full.
    pub fn push(&mut self, snapshot: GameState) {
        self.snapshots[self.write_index] = snapshot;
        self.write_index = (self.write_index + 1) % self.snapshots.len();
        self.count = (self.count + 1).min(self.snapshots.len());
    }

    /// Gets the snapshot `n` arrivals before the latest.
    #[must_use]
    pub fn nth_latest(&self, n: usize) -> Option<&GameState> {
        if n >= self.count {
            return None;
        }
        let len = self.snapshots.len();
        Some(&self.snapshots[(self.write_index + len - 1 - n) % len])
    }

    /// Gets the latest snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<&GameState> {
        self.nth_latest(0)
    }

    /// Gets the snapshot that arrived before the latest.
    #[must_use]
    pub fn previous(&self) -> Option<&GameState> {
        self.nth_latest(1)
    }

    /// True if the latest snapshot arrived after a connectivity gap.
    #[must_use]
    pub fn needs_transition(&self) -> bool {
        self.latest().is_some_and(GameState::is_reconnection_sync)
    }

    /// Blend factor for `render_time_ms` between `previous` and `latest`.
    ///
    /// `None` if there is no pair, a timestamp is missing, the timestamps do
    /// not advance, or either time is not finite. Otherwise clamped to `[0, 1]`.
    #[must_use]
    pub fn factor_at(&self, render_time_ms: f64) -> Option<f64> {
        let start = self.previous()?.server_timestamp?;
        let end = self.latest()?.server_timestamp?;
        let span = end - start;
        if !render_time_ms.is_finite() || !span.is_finite() || span <= 0.0 {
            return None;
        }
        Some(((render_time_ms - start) / span).clamp(0.0, 1.0))
    }

    /// Interpolated state to draw at `render_time_ms`.
    ///
    /// Without a usable pair this is the latest snapshot, or the empty state.
    #[must_use]
    pub fn sample(&self, interpolator: &Interpolator, render_time_ms: f64) -> GameState {
        match self.factor_at(render_time_ms) {
            Some(factor) => {
                trace!(factor, render_time_ms, "sampling snapshot pair");
                interpolator.interpolate(self.previous(), self.latest(), factor)
            }
            None => self.latest().cloned().unwrap_or_default(),
        }
    }

    /// Returns the number of buffered snapshots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// True if nothing has been buffered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.snapshots.len()
    }

    /// Clears all snapshots.
    pub fn clear(&mut self) {
        self.count = 0;
        self.write_index = 0;
    }
}
