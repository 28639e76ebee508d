//! # Pong Shared
//!
//! Snapshot types used by both the browser client and the backend physics.
//!
//! ## CRITICAL RULE
//!
//! The field names in [`state`] ARE the wire format. Renaming a field here
//! silently drops data on decode, because unknown fields are ignored.
//!
//! ```text
//! BACKEND                          CLIENT
//!   |                                 |
//!   |--- {"ball": {...}, ...} ------->|  GameState::from_json
//!   |                                 |  (interpolate / predict / render)
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod constants;
pub mod error;
pub mod state;

pub use constants::{PLAYFIELD_HEIGHT, PREDICTION_LOOKAHEAD};
pub use error::{SnapshotError, SnapshotResult};
pub use state::{Ball, GameState, MatchStatus, Paddle, Paddles, Side};
