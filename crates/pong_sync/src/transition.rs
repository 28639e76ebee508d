//! # Reconnection Transitions
//!
//! When a client comes back from a connectivity gap, the first fresh
//! snapshot can be far from the stale one on screen. Instead of a hard snap,
//! the caller plays an eased sequence of intermediate states over several
//! frames.
//!
//! ```text
//! stale ●──·──·──·────·────·──·──·──● fresh
//!       i=0            eased          i=steps
//! ```

use pong_shared::GameState;
use tracing::debug;

use crate::config::SyncConfig;
use crate::easing::Easing;
use crate::interpolation::Interpolator;
use crate::snapshot::SnapshotBuffer;

/// Builds eased interpolation sequences between two snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionSequencer {
    /// Blends each step.
    interpolator: Interpolator,
    /// Remaps linear step progress.
    easing: Easing,
}

impl TransitionSequencer {
    /// Creates a sequencer with an explicit interpolator and curve.
    #[must_use]
    pub const fn new(interpolator: Interpolator, easing: Easing) -> Self {
        Self {
            interpolator,
            easing,
        }
    }

    /// Creates a sequencer from the sync configuration.
    #[must_use]
    pub const fn from_config(config: &SyncConfig) -> Self {
        Self::new(Interpolator::from_config(config), config.transition_easing)
    }

    /// Returns `steps + 1` states, state `i` blended at `easing(i / steps)`.
    ///
    /// `steps == 0` yields the single state at factor 1.
    #[must_use]
    pub fn sequence(
        &self,
        earlier: Option<&GameState>,
        later: Option<&GameState>,
        steps: u32,
    ) -> Vec<GameState> {
        if steps == 0 {
            return vec![self.interpolator.interpolate(earlier, later, 1.0)];
        }

        let total = f64::from(steps);
        (0..=steps)
            .map(|i| {
                let factor = self.easing.apply(f64::from(i) / total);
                self.interpolator.interpolate(earlier, later, factor)
            })
            .collect()
    }
}

/// Eased catch-up sequence with the default interpolator.
///
/// See [`TransitionSequencer::sequence`].
#[must_use]
pub fn create_transition_sequence(
    earlier: Option<&GameState>,
    later: Option<&GameState>,
    steps: u32,
) -> Vec<GameState> {
    TransitionSequencer::default().sequence(earlier, later, steps)
}

/// Plays a transition sequence back one frame at a time.
#[derive(Clone, Debug, Default)]
pub struct TransitionPlayer {
    /// Frames in playback order.
    frames: Vec<GameState>,
    /// Index of the next frame.
    cursor: usize,
}

impl TransitionPlayer {
    /// Wraps a prepared sequence.
    #[must_use]
    pub const fn new(frames: Vec<GameState>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Bridges the buffer's previous (stale) and latest (fresh) snapshots.
    #[must_use]
    pub fn for_reconnection(buffer: &SnapshotBuffer, config: &SyncConfig) -> Self {
        let frames = TransitionSequencer::from_config(config).sequence(
            buffer.previous(),
            buffer.latest(),
            config.transition_steps,
        );
        debug!(frames = frames.len(), "starting reconnection transition");
        Self::new(frames)
    }

    /// Returns the next frame. Once finished, keeps returning the last frame.
    ///
    /// `None` only for an empty sequence.
    pub fn next_frame(&mut self) -> Option<&GameState> {
        let last = self.frames.len().checked_sub(1)?;
        let index = self.cursor.min(last);
        if self.cursor < self.frames.len() {
            self.cursor += 1;
        }
        self.frames.get(index)
    }

    /// True once every frame has been returned.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    /// Frames not yet returned.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len() - self.cursor
    }

    /// Rewinds to the first frame.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// The full sequence.
    #[must_use]
    pub fn frames(&self) -> &[GameState] {
        &self.frames
    }
}
