//! # Pong Sync - Render-Side State Smoothing
//!
//! Turns the backend's discrete game-state snapshots into the continuous
//! motion the client draws every animation frame.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      RENDER TICK                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
//! │  │ Snapshot     │  │ Interpolator │  │ Transition   │      │
//! │  │ Buffer       │─▶│ (+ Predictor)│◀─│ Sequencer    │      │
//! │  └──────────────┘  └──────────────┘  └──────────────┘      │
//! │                          │                                  │
//! │              ┌───────────▼───────────┐                     │
//! │              │  GameState to draw    │                     │
//! │              └───────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Every numeric operation is a pure function that falls back to one of its
//! inputs on bad data. The render loop never sees an error from this crate.
//! Only [`SyncConfig`] loading is fallible.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pong_sync::{SnapshotBuffer, SyncConfig, Interpolator, TransitionPlayer};
//!
//! let config = SyncConfig::from_file("config/sync.toml")?;
//! let interpolator = Interpolator::from_config(&config);
//! let mut buffer = SnapshotBuffer::from_config(&config);
//!
//! buffer.push(GameState::from_json(&message)?);
//! if buffer.needs_transition() {
//!     player = Some(TransitionPlayer::for_reconnection(&buffer, &config));
//! }
//! let frame = buffer.sample(&interpolator, render_time_ms);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod easing;
pub mod error;
pub mod interpolation;
pub mod prediction;
pub mod snapshot;
pub mod transition;

pub use config::SyncConfig;
pub use easing::{ease_in_out_quad, Easing};
pub use error::{SyncError, SyncResult};
pub use interpolation::{interpolate, Interpolator};
pub use prediction::{predict_ball_position, BallPredictor};
pub use snapshot::SnapshotBuffer;
pub use transition::{create_transition_sequence, TransitionPlayer, TransitionSequencer};
