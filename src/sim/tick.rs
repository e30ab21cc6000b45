//! Per-tick update loop
//!
//! One tick applies, in order: held-key paddle movement, the opponent AI,
//! paddle collisions, wall bounces, scoring, and finally position
//! integration scaled by measured elapsed time. Every step is a total
//! function over in-memory state; nothing here can fail.

use super::{ai, collision};
use super::state::GameState;
use crate::consts::{MS_PER_TIME_UNIT, PADDLE_STEP};

/// Held movement keys for a single tick.
///
/// Two independent control schemes: one per paddle. The opponent flags are
/// manual overrides layered on top of the AI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub player_left: bool,
    pub player_right: bool,
    pub opponent_left: bool,
    pub opponent_right: bool,
}

/// Advance the game by one tick.
///
/// `elapsed_ms` is the wall-clock time since the previous tick, measured
/// fresh each tick by the scheduler. It only scales the final position
/// integration, so simulation speed stays tied to real time rather than
/// frame rate.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f32) {
    apply_held_keys(state, input);
    ai::track_ball(&mut state.opponent, &state.ball, state.arena.x);

    // Independent checks; both paddles may resolve in the same tick
    collision::resolve_paddle_hit(&mut state.ball, &state.player);
    collision::resolve_paddle_hit(&mut state.ball, &state.opponent);

    bounce_off_walls(state);
    check_scoring(state);

    let scale = elapsed_ms / MS_PER_TIME_UNIT;
    state.ball.pos += state.ball.heading.unit * state.ball.speed * scale;
}

fn apply_held_keys(state: &mut GameState, input: &TickInput) {
    let arena_w = state.arena.x;
    if input.player_left {
        state.player.move_x(-PADDLE_STEP, arena_w);
    }
    if input.player_right {
        state.player.move_x(PADDLE_STEP, arena_w);
    }
    if input.opponent_left {
        state.opponent.move_x(-PADDLE_STEP, arena_w);
    }
    if input.opponent_right {
        state.opponent.move_x(PADDLE_STEP, arena_w);
    }
}

/// Mirror the heading at the side walls and clamp the ball back in-bounds
fn bounce_off_walls(state: &mut GameState) {
    let ball = &mut state.ball;
    if ball.pos.x + ball.width > state.arena.x {
        ball.heading = ball.heading.mirrored_x();
        ball.pos.x = state.arena.x - ball.width;
    }
    if ball.pos.x < 0.0 {
        ball.heading = ball.heading.mirrored_x();
        ball.pos.x = 0.0;
    }
}

/// Award a point and reset the ball when it crosses a goal line
fn check_scoring(state: &mut GameState) {
    if state.ball.pos.y > state.arena.y - state.ball.height {
        state.opponent.score += 1;
        state.reset_ball();
        log::debug!(
            "opponent scores: {} - {}",
            state.player.score,
            state.opponent.score
        );
    }
    if state.ball.pos.y < 0.0 {
        state.player.score += 1;
        state.reset_ball();
        log::debug!(
            "player scores: {} - {}",
            state.player.score,
            state.opponent.score
        );
    }
}
