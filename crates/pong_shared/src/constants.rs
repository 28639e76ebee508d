//! # Playfield Constants
//!
//! **CRITICAL:** These values mirror the backend physics simulation.
//! If they drift, client-side reflection diverges from server truth.

// =============================================================================
// PLAYFIELD
// =============================================================================

/// Playfield height in game units. The ball reflects at `0` and at this value.
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

// =============================================================================
// SMOOTHING
// =============================================================================

/// Fraction of one velocity step used to nudge the interpolation target forward.
pub const PREDICTION_LOOKAHEAD: f64 = 0.2;

/// Milliseconds per second, for converting frame deltas.
pub const MS_PER_SECOND: f64 = 1000.0;
