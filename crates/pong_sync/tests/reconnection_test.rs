//! # Reconnection Integration Test
//!
//! Drives the full client path: JSON snapshots from the transport, buffered,
//! sampled per frame, and bridged with a transition after a connectivity gap.

use pong_shared::{GameState, MatchStatus, Side};
use pong_sync::{
    ease_in_out_quad, interpolate, predict_ball_position, Interpolator, SnapshotBuffer,
    SyncConfig, TransitionPlayer,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STALE: &str = r#"{
    "status": "playing",
    "ball": {
        "x": 100, "y": 100, "radius": 10,
        "speed_x": 300, "speed_y": 120, "last_update": 5000
    },
    "paddles": {
        "left": {"y": 250, "moving": false, "score": 2},
        "right": {"y": 250, "moving": false, "score": 1}
    },
    "server_timestamp": 5000
}"#;

const FRESH: &str = r#"{
    "status": "playing",
    "ball": {
        "x": 600, "y": 400, "radius": 10,
        "speed_x": -300, "speed_y": 120, "last_update": 9000
    },
    "paddles": {
        "left": {"y": 100, "moving": true, "score": 3},
        "right": {"y": 400, "moving": false, "score": 1}
    },
    "server_timestamp": 9000,
    "reconnection_sync": true
}"#;

fn random_state(rng: &mut StdRng) -> GameState {
    let json = format!(
        r#"{{
            "status": "playing",
            "ball": {{"x": {}, "y": {}, "radius": 10, "speed_x": {}, "speed_y": {}}},
            "paddles": {{
                "left": {{"y": {}, "moving": {}, "score": {}}},
                "right": {{"y": {}, "moving": {}}}
            }}
        }}"#,
        rng.gen_range(0.0..800.0),
        rng.gen_range(0.0..600.0),
        rng.gen_range(-500.0..500.0),
        rng.gen_range(-500.0..500.0),
        rng.gen_range(0.0..600.0),
        rng.gen_bool(0.5),
        rng.gen_range(0..11),
        rng.gen_range(0.0..600.0),
        rng.gen_bool(0.5),
    );
    GameState::from_json(&json).unwrap()
}

#[test]
fn test_reconnection_bridge() {
    let config = SyncConfig::default();
    let mut buffer = SnapshotBuffer::from_config(&config);

    buffer.push(GameState::from_json(STALE).unwrap());
    assert!(!buffer.needs_transition());

    buffer.push(GameState::from_json(FRESH).unwrap());
    assert!(buffer.needs_transition());

    let mut player = TransitionPlayer::for_reconnection(&buffer, &config);
    assert_eq!(player.remaining(), config.transition_steps as usize + 1);

    let first = player.next_frame().unwrap().clone();
    let first_ball = first.ball.as_ref().unwrap();
    assert_eq!((first_ball.x, first_ball.y), (100.0, 100.0));

    let mut last = first;
    while !player.is_finished() {
        last = player.next_frame().unwrap().clone();
    }

    // Final frame: fresh position nudged by 20% of its velocity
    let ball = last.ball.as_ref().unwrap();
    assert!((ball.x - 540.0).abs() < 1e-9);
    assert!((ball.y - 424.0).abs() < 1e-9);

    let paddles = last.paddles.as_ref().unwrap();
    assert_eq!(paddles.get(Side::Left).unwrap().y, 100.0);
    assert_eq!(paddles.get(Side::Left).unwrap().score, Some(3));
    assert_eq!(last.status, Some(MatchStatus::Playing));
}

#[test]
fn test_frame_loop_with_prediction() {
    let config = SyncConfig::default();
    let interpolator = Interpolator::from_config(&config);
    let mut buffer = SnapshotBuffer::from_config(&config);

    buffer.push(GameState::from_json(STALE).unwrap());
    buffer.push(GameState::from_json(FRESH).unwrap());

    let mut previous_x = f64::NEG_INFINITY;
    for frame in 0..=10 {
        let render_time = 5000.0 + f64::from(frame) * 400.0;
        let state = buffer.sample(&interpolator, render_time);
        let x = state.ball.as_ref().unwrap().x;
        assert!(x >= previous_x, "ball moved backwards at frame {frame}");
        previous_x = x;

        // Extrapolating a frame ahead never leaves the playfield vertically
        let ahead = predict_ball_position(&state, 16.0);
        let ball = ahead.ball.as_ref().unwrap();
        assert!(ball.y >= ball.radius && ball.y <= config.playfield_height - ball.radius);
    }
}

#[test]
fn test_fallback_properties_hold_for_random_states() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let a = random_state(&mut rng);
        let b = random_state(&mut rng);
        let factor: f64 = rng.gen_range(0.0..=1.0);

        assert_eq!(interpolate(Some(&a), None, factor), a);
        assert_eq!(interpolate(None, Some(&b), factor), b);
        assert_eq!(interpolate(Some(&a), Some(&b), 1.0 + factor + 1e-6), b);
        assert_eq!(interpolate(Some(&a), Some(&b), -factor - 1e-6), b);

        let blended = interpolate(Some(&a), Some(&b), factor);
        let (ball, later_ball) = (blended.ball.unwrap(), b.ball.as_ref().unwrap());
        assert_eq!(ball.radius, later_ball.radius);
        assert_eq!(ball.velocity(), later_ball.velocity());

        let paddles = blended.paddles.unwrap();
        let later_paddles = b.paddles.as_ref().unwrap();
        assert_eq!(
            paddles.get(Side::Left).unwrap().score,
            Some(later_paddles.get(Side::Left).unwrap().score.unwrap_or(0))
        );
        assert_eq!(paddles.get(Side::Right).unwrap().score, Some(0));
    }
}

#[test]
fn test_easing_monotonic_on_random_pairs() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1000 {
        let x: f64 = rng.gen_range(0.0..=1.0);
        let y: f64 = rng.gen_range(0.0..=1.0);
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        assert!(ease_in_out_quad(lo) <= ease_in_out_quad(hi));
    }
}

#[test]
fn test_config_drives_transition_length() {
    let config = SyncConfig::from_toml_str("transition_steps = 4").unwrap();
    let mut buffer = SnapshotBuffer::from_config(&config);
    buffer.push(GameState::from_json(STALE).unwrap());
    buffer.push(GameState::from_json(FRESH).unwrap());

    let player = TransitionPlayer::for_reconnection(&buffer, &config);
    assert_eq!(player.frames().len(), 5);
}
