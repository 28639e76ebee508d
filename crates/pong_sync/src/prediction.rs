//! # Ball Prediction
//!
//! Extrapolates the ball between server snapshots so the frames between two
//! updates don't freeze it.
//!
//! Only the top and bottom walls reflect. Paddle hits and scoring are decided
//! by the backend; this only smooths inter-frame gaps.

use pong_shared::constants::MS_PER_SECOND;
use pong_shared::{Ball, GameState, PLAYFIELD_HEIGHT};
use tracing::{debug, trace};

use crate::config::SyncConfig;

/// Inter-frame ball extrapolator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallPredictor {
    /// Height at which the lower wall sits.
    playfield_height: f64,
}

impl Default for BallPredictor {
    fn default() -> Self {
        Self::new(PLAYFIELD_HEIGHT)
    }
}

impl BallPredictor {
    /// Creates a predictor for a playfield of the given height.
    #[must_use]
    pub const fn new(playfield_height: f64) -> Self {
        Self { playfield_height }
    }

    /// Creates a predictor from the sync configuration.
    #[must_use]
    pub const fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.playfield_height)
    }

    /// Returns a copy of `state` with the ball advanced by `elapsed_ms`.
    ///
    /// The input is never mutated. If the ball or either velocity component
    /// is missing, or `elapsed_ms` is not finite, the copy is unchanged.
    #[must_use]
    pub fn predict(&self, state: &GameState, elapsed_ms: f64) -> GameState {
        let Some((speed_x, speed_y)) = state.ball.as_ref().and_then(Ball::velocity) else {
            debug!("no ball velocity, skipping prediction");
            return state.clone();
        };
        if !elapsed_ms.is_finite() {
            debug!(elapsed_ms, "non-finite elapsed time, skipping prediction");
            return state.clone();
        }

        let mut predicted = state.clone();
        if let Some(ball) = predicted.ball.as_mut() {
            self.advance(ball, speed_x, speed_y, elapsed_ms / MS_PER_SECOND);
        }
        predicted
    }

    /// Moves the ball and reflects it off the top and bottom walls.
    fn advance(&self, ball: &mut Ball, speed_x: f64, speed_y: f64, elapsed_secs: f64) {
        ball.prev_x = Some(ball.x);
        ball.prev_y = Some(ball.y);
        ball.x += speed_x * elapsed_secs;
        ball.y += speed_y * elapsed_secs;

        if ball.y - ball.radius < 0.0 && speed_y < 0.0 {
            ball.y = ball.radius;
            ball.speed_y = Some(-speed_y);
            trace!(y = ball.y, "ball reflected off top wall");
        } else if ball.y + ball.radius > self.playfield_height && speed_y > 0.0 {
            ball.y = self.playfield_height - ball.radius;
            ball.speed_y = Some(-speed_y);
            trace!(y = ball.y, "ball reflected off bottom wall");
        }
    }
}

/// Advances the ball of `state` by `elapsed_ms` on the standard playfield.
///
/// See [`BallPredictor::predict`].
#[must_use]
pub fn predict_ball_position(state: &GameState, elapsed_ms: f64) -> GameState {
    BallPredictor::default().predict(state, elapsed_ms)
}
