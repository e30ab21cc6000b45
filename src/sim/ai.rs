//! Reactive opponent controller
//!
//! Chases the ball horizontally at a fixed top speed and snaps by the exact
//! remaining offset once it gets close, so it never overshoots and jitters
//! around the target.

use super::state::{Ball, Paddle};
use crate::consts::PADDLE_STEP;

/// Move the opponent paddle one step toward the ball.
///
/// The tracked offset is measured from the paddle center to the ball's left
/// edge. A paddle already resting on the relevant wall stays put.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, arena_width: f32) {
    let diff = ball.pos.x - paddle.center_x();

    if diff < 0.0 && !paddle.at_left_bound() {
        if diff < -PADDLE_STEP {
            paddle.move_x(-PADDLE_STEP, arena_width);
        } else {
            paddle.move_x(diff, arena_width);
        }
    } else if diff > 0.0 && !paddle.at_right_bound(arena_width) {
        if diff > PADDLE_STEP {
            paddle.move_x(PADDLE_STEP, arena_width);
        } else {
            paddle.move_x(diff, arena_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::GameState;

    #[test]
    fn test_steps_toward_distant_ball() {
        let mut state = GameState::new();
        state.ball.pos.x = 0.0;
        let start = state.opponent.pos.x;

        track_ball(&mut state.opponent, &state.ball, ARENA_WIDTH);
        assert_eq!(state.opponent.pos.x, start - PADDLE_STEP);

        state.ball.pos.x = ARENA_WIDTH - BALL_SIZE;
        track_ball(&mut state.opponent, &state.ball, ARENA_WIDTH);
        track_ball(&mut state.opponent, &state.ball, ARENA_WIDTH);
        assert_eq!(state.opponent.pos.x, start + PADDLE_STEP);
    }

    #[test]
    fn test_snaps_by_exact_offset_near_target() {
        let mut state = GameState::new();
        // Ball's left edge 4 units right of the paddle center
        state.ball.pos.x = state.opponent.center_x() + 4.0;
        let start = state.opponent.pos.x;

        track_ball(&mut state.opponent, &state.ball, ARENA_WIDTH);
        assert_eq!(state.opponent.pos.x, start + 4.0);

        // Now centered exactly: no further movement
        track_ball(&mut state.opponent, &state.ball, ARENA_WIDTH);
        assert_eq!(state.opponent.pos.x, start + 4.0);
    }

    #[test]
    fn test_never_leaves_arena() {
        let mut state = GameState::new();
        state.ball.pos.x = 0.0;
        for _ in 0..200 {
            track_ball(&mut state.opponent, &state.ball, ARENA_WIDTH);
            assert!(state.opponent.pos.x >= 0.0);
        }
        assert_eq!(state.opponent.pos.x, 0.0);

        state.ball.pos.x = ARENA_WIDTH;
        for _ in 0..200 {
            track_ball(&mut state.opponent, &state.ball, ARENA_WIDTH);
            assert!(state.opponent.pos.x + state.opponent.width <= ARENA_WIDTH);
        }
        assert_eq!(state.opponent.pos.x, ARENA_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn test_no_movement_at_bound() {
        let mut state = GameState::new();
        state.opponent.pos.x = 0.0;
        state.ball.pos.x = 0.0;

        track_ball(&mut state.opponent, &state.ball, ARENA_WIDTH);
        assert_eq!(state.opponent.pos.x, 0.0);
    }
}
