//! # Game-State Snapshots
//!
//! One immutable capture of a match as the backend sees it: match status,
//! the ball, both paddles and some provenance metadata.
//!
//! Every field is optional on the wire. A snapshot the backend sends mid-match
//! may omit paddles, a lobby snapshot may omit the ball. Consumers degrade to
//! whatever is present instead of rejecting the snapshot.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SnapshotError, SnapshotResult};

/// Match status as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Waiting for both players.
    Waiting,
    /// Ball in play.
    Playing,
    /// Paused, usually while a player reconnects.
    Paused,
    /// Match over.
    Finished,
    /// Any status this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Paddle side. Identity of a paddle never changes during a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Left paddle.
    Left,
    /// Right paddle.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];
}

/// The ball.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ball {
    /// Horizontal position.
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    /// Vertical position. `0` is the top wall.
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    /// Radius. Never changes between snapshots of one match.
    #[serde(deserialize_with = "null_as_default")]
    pub radius: f64,
    /// Horizontal velocity in units per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_x: Option<f64>,
    /// Vertical velocity in units per second. Negative moves up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_y: Option<f64>,
    /// Backend timestamp of the last physics update (milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<f64>,
    /// Position before the last client-side advance, for motion trails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_x: Option<f64>,
    /// See [`Ball::prev_x`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_y: Option<f64>,
}

impl Ball {
    /// Creates a ball at rest with no velocity information.
    #[must_use]
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            radius,
            speed_x: None,
            speed_y: None,
            last_update: None,
            prev_x: None,
            prev_y: None,
        }
    }

    /// Sets both velocity components.
    #[must_use]
    pub const fn with_velocity(mut self, speed_x: f64, speed_y: f64) -> Self {
        self.speed_x = Some(speed_x);
        self.speed_y = Some(speed_y);
        self
    }

    /// Returns the velocity if both components are known.
    #[must_use]
    pub fn velocity(&self) -> Option<(f64, f64)> {
        Some((self.speed_x?, self.speed_y?))
    }
}

/// One paddle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paddle {
    /// Vertical position.
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    /// True while the owning player holds a direction key.
    #[serde(deserialize_with = "null_as_default")]
    pub moving: bool,
    /// Points scored by this side.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_score")]
    pub score: Option<u32>,
    /// Last position the backend confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_position: Option<f64>,
}

impl Paddle {
    /// Creates a resting paddle.
    #[must_use]
    pub const fn new(y: f64) -> Self {
        Self {
            y,
            moving: false,
            score: None,
            last_position: None,
        }
    }
}

/// Both paddles, keyed by side. A side may be absent on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paddles {
    /// Left paddle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Paddle>,
    /// Right paddle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Paddle>,
}

impl Paddles {
    /// Returns the paddle on `side`, if present.
    #[must_use]
    pub const fn get(&self, side: Side) -> Option<&Paddle> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// Returns the paddle on `side` mutably, if present.
    pub fn get_mut(&mut self, side: Side) -> Option<&mut Paddle> {
        match side {
            Side::Left => self.left.as_mut(),
            Side::Right => self.right.as_mut(),
        }
    }

    /// Iterates over the sides that carry a paddle.
    pub fn sides(&self) -> impl Iterator<Item = Side> + '_ {
        Side::ALL.into_iter().filter(|side| self.get(*side).is_some())
    }
}

/// A game-state snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    /// Match status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
    /// The ball.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball: Option<Ball>,
    /// The paddles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paddles: Option<Paddles>,
    /// Backend clock when this snapshot was produced (milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_timestamp: Option<f64>,
    /// Set when the snapshot arrived after a connectivity gap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconnection_sync: Option<bool>,
}

impl GameState {
    /// The all-absent state. Last resort of every fallback path.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            status: None,
            ball: None,
            paddles: None,
            server_timestamp: None,
            reconnection_sync: None,
        }
    }

    /// True if no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// True if this snapshot was flagged as a post-reconnection sync.
    #[must_use]
    pub fn is_reconnection_sync(&self) -> bool {
        self.reconnection_sync.unwrap_or(false)
    }

    /// Decodes a snapshot from a transport message.
    ///
    /// Unknown fields are ignored.
    ///
    /// # Errors
    /// [`SnapshotError::Malformed`] if `json` is not a snapshot object,
    /// [`SnapshotError::Empty`] if it decodes to a state with no fields.
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        let state: Self = serde_json::from_str(json)?;
        if state.is_empty() {
            return Err(SnapshotError::Empty);
        }
        Ok(state)
    }

    /// Encodes the snapshot in the wire shape.
    ///
    /// # Errors
    /// [`SnapshotError::Malformed`] if the serializer fails.
    pub fn to_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decodes `null` as the field's default instead of rejecting the snapshot.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a score written as any JSON number.
///
/// Integral values (`2`, `2.0`) are kept. `null`, negative, fractional or
/// out-of-range values decode as absent.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let score = Option::<f64>::deserialize(deserializer)?;
    Ok(score
        .filter(|value| value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(value))
        .map(|value| value as u32))
}
