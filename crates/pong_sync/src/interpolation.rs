//! # Snapshot Interpolation
//!
//! Blends an earlier and a later snapshot into the state drawn this frame.
//!
//! ## Ball: velocity-predictive blend
//!
//! Plain lerp between two server positions makes the ball lag one snapshot
//! behind. The later endpoint is nudged forward along its velocity first:
//!
//! ```text
//! predicted = B.pos + B.velocity * lookahead      (lookahead = 0.2)
//! result    = A.pos + (predicted - A.pos) * factor
//!
//!   A ●───────────────● B ──► ◆ predicted
//!     └──── factor ─────────────┘
//! ```
//!
//! ## Paddles: eased while moving
//!
//! A paddle the later snapshot marks as moving is blended through
//! [`ease_in_out_quad`] so direction changes don't look like linear snaps.
//!
//! ## Fallback
//!
//! Missing endpoints or a factor outside `[0, 1]` return an endpoint
//! unmodified, later preferred. Nothing here returns an error.

use pong_shared::{Ball, GameState, Paddles, Side, PREDICTION_LOOKAHEAD};
use tracing::debug;

use crate::config::SyncConfig;
use crate::easing::ease_in_out_quad;

/// Velocity-predictive snapshot interpolator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolator {
    /// Fraction of one velocity step the later ball position is pushed ahead.
    lookahead_ratio: f64,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new(PREDICTION_LOOKAHEAD)
    }
}

impl Interpolator {
    /// Creates an interpolator with the given look-ahead ratio.
    #[must_use]
    pub const fn new(lookahead_ratio: f64) -> Self {
        Self { lookahead_ratio }
    }

    /// Creates an interpolator from the sync configuration.
    #[must_use]
    pub const fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.lookahead_ratio)
    }

    /// Returns the look-ahead ratio.
    #[must_use]
    pub const fn lookahead_ratio(&self) -> f64 {
        self.lookahead_ratio
    }

    /// Blends `earlier` towards `later` by `factor`.
    ///
    /// Everything that is not blended (status, scores, radius, velocity,
    /// metadata) comes from `later`.
    #[must_use]
    pub fn interpolate(
        &self,
        earlier: Option<&GameState>,
        later: Option<&GameState>,
        factor: f64,
    ) -> GameState {
        let (Some(earlier), Some(later)) = (earlier, later) else {
            debug!(
                has_earlier = earlier.is_some(),
                has_later = later.is_some(),
                "interpolation endpoint missing, returning endpoint"
            );
            return fallback(earlier, later);
        };

        if !(0.0..=1.0).contains(&factor) {
            debug!(factor, "interpolation factor out of range, returning later snapshot");
            return later.clone();
        }

        let mut result = later.clone();

        if let (Some(from), Some(ball)) = (earlier.ball.as_ref(), result.ball.as_mut()) {
            self.blend_ball(from, ball, factor);
        }

        if let (Some(from), Some(paddles)) = (earlier.paddles.as_ref(), result.paddles.as_mut()) {
            blend_paddles(from, paddles, factor);
        }

        result
    }

    /// Moves `ball` (a copy of the later ball) to the blended position.
    fn blend_ball(&self, from: &Ball, ball: &mut Ball, factor: f64) {
        let predicted_x = ball.x + ball.speed_x.unwrap_or(0.0) * self.lookahead_ratio;
        let predicted_y = ball.y + ball.speed_y.unwrap_or(0.0) * self.lookahead_ratio;

        ball.prev_x = Some(from.x);
        ball.prev_y = Some(from.y);
        ball.x = lerp(from.x, predicted_x, factor);
        ball.y = lerp(from.y, predicted_y, factor);
    }
}

/// Blends each side present in both snapshots. `paddles` is a copy of the later set.
fn blend_paddles(from: &Paddles, paddles: &mut Paddles, factor: f64) {
    for side in Side::ALL {
        let (Some(start), Some(paddle)) = (from.get(side), paddles.get_mut(side)) else {
            continue;
        };

        let t = if paddle.moving {
            ease_in_out_quad(factor)
        } else {
            factor
        };

        paddle.y = lerp(start.y, paddle.y, t);
        paddle.score = Some(paddle.score.unwrap_or(0));
    }
}

/// Later endpoint if present, else earlier, else the empty state.
fn fallback(earlier: Option<&GameState>, later: Option<&GameState>) -> GameState {
    later.or(earlier).cloned().unwrap_or_default()
}

/// Linear interpolation.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Blends two snapshots with the default look-ahead.
///
/// See [`Interpolator::interpolate`].
#[must_use]
pub fn interpolate(
    earlier: Option<&GameState>,
    later: Option<&GameState>,
    factor: f64,
) -> GameState {
    Interpolator::default().interpolate(earlier, later, factor)
}
