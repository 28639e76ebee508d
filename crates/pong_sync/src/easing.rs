//! Easing curves for paddle blending and reconnection playback.
//!
//! Linear blends make paddles visibly snap when a player reverses direction.
//! The quadratic ease-in-out is the default curve everywhere.

use serde::{Deserialize, Serialize};

/// Quadratic ease-in-out.
///
/// `t < 0.5: 2t²`, otherwise `1 - (-2t + 2)² / 2`. The input is not clamped.
#[inline]
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in-out (slow start, slow end).
    #[default]
    QuadInOut,
    /// Cubic ease-out (fast start, slow end).
    CubicOut,
    /// S-curve: 3t² - 2t³.
    SmoothStep,
}

impl Easing {
    /// Applies the easing function to a t value, clamped to 0-1 first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadInOut => ease_in_out_quad(t),
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}
