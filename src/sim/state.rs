//! Game state and core simulation types
//!
//! The whole simulation is one `GameState` owned by the update loop; the
//! renderer only ever sees an immutable borrow.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A travel direction: an angle plus its derived unit components.
///
/// The angle is kept alongside the unit vector because wall bounces are
/// expressed as the angle mirror `π - angle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Direction angle in radians
    pub angle: f32,
    /// Unit components (cos angle, sin angle)
    pub unit: Vec2,
}

impl Heading {
    pub fn new(angle: f32) -> Self {
        Self {
            angle,
            unit: Vec2::new(angle.cos(), angle.sin()),
        }
    }

    /// Horizontal mirror, used for side-wall bounces
    #[inline]
    pub fn mirrored_x(self) -> Self {
        Self::new(std::f32::consts::PI - self.angle)
    }
}

/// A player or opponent paddle. Lives for the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            score: 0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Move horizontally by `dx`, clamped so the paddle stays inside the arena
    pub fn move_x(&mut self, dx: f32, arena_width: f32) {
        self.set_x(self.pos.x + dx, arena_width);
    }

    /// Place the paddle's left edge at `x`, clamped in-bounds
    pub fn set_x(&mut self, x: f32, arena_width: f32) {
        self.pos.x = x.clamp(0.0, arena_width - self.width);
    }

    /// True once the paddle's left edge rests on the left wall
    #[inline]
    pub fn at_left_bound(&self) -> bool {
        self.pos.x <= 0.0
    }

    /// True once the paddle's right edge rests on the right wall
    #[inline]
    pub fn at_right_bound(&self, arena_width: f32) -> bool {
        self.pos.x + self.width >= arena_width
    }
}

/// The ball. Owned exclusively by the simulation; reset on score events.
///
/// Collision detection treats it as its square bounding box even though it
/// is drawn as a circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Scalar speed, distance units per time unit
    pub speed: f32,
    pub heading: Heading,
}

impl Ball {
    fn new(arena: Vec2) -> Self {
        Self {
            pos: Self::start_pos(arena),
            width: BALL_SIZE,
            height: BALL_SIZE,
            speed: BALL_START_SPEED,
            heading: Heading::new(BALL_START_ANGLE),
        }
    }

    /// Top-left position that centers the ball in the arena
    fn start_pos(arena: Vec2) -> Vec2 {
        arena / 2.0 - Vec2::splat(BALL_SIZE / 2.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    /// Full state replace: back to arena center, start speed, start angle
    pub fn reset(&mut self, arena: Vec2) {
        self.pos = Self::start_pos(arena);
        self.speed = BALL_START_SPEED;
        self.heading = Heading::new(BALL_START_ANGLE);
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena width/height, fixed for the session
    pub arena: Vec2,
    /// Bottom paddle, driven by keys or pointer
    pub player: Paddle,
    /// Top paddle, driven by the reactive AI (or override keys)
    pub opponent: Paddle,
    pub ball: Ball,
}

impl GameState {
    pub fn new() -> Self {
        let arena = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT);
        Self {
            arena,
            player: Paddle::new(Vec2::new(
                Self::paddle_start_x(arena),
                arena.y - PADDLE_INSET - PADDLE_HEIGHT,
            )),
            opponent: Paddle::new(Vec2::new(Self::paddle_start_x(arena), PADDLE_INSET)),
            ball: Ball::new(arena),
        }
    }

    fn paddle_start_x(arena: Vec2) -> f32 {
        arena.x / 2.0 - PADDLE_WIDTH / 2.0
    }

    /// Reset only the ball, used after each scoring event
    pub fn reset_ball(&mut self) {
        self.ball.reset(self.arena);
    }

    /// Full session reset: scores to zero, paddles re-centered, ball reset
    pub fn reset(&mut self) {
        self.reset_ball();
        self.player.score = 0;
        self.opponent.score = 0;
        let x = Self::paddle_start_x(self.arena);
        self.player.pos.x = x;
        self.opponent.pos.x = x;
        log::info!("session reset");
    }

    /// Debug speed adjustment. No floor or ceiling: the ball may be driven
    /// backwards (negative speed) or arbitrarily fast.
    pub fn nudge_speed(&mut self, delta: f32) {
        self.ball.speed += delta;
        log::debug!("ball speed nudged to {}", self.ball.speed);
    }

    /// Pointer-driven player placement: center the paddle on `x`, clamped
    pub fn set_player_x(&mut self, x: f32) {
        let arena_w = self.arena.x;
        self.player.set_x(x - self.player.width / 2.0, arena_w);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_3;

    proptest! {
        #[test]
        fn test_heading_is_unit_length(angle in -100.0f32..100.0) {
            let h = Heading::new(angle);
            let len_sq = h.unit.x * h.unit.x + h.unit.y * h.unit.y;
            prop_assert!((len_sq - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_heading_mirror() {
        let h = Heading::new(FRAC_PI_3).mirrored_x();
        assert!((h.angle - (std::f32::consts::PI - FRAC_PI_3)).abs() < 1e-6);
        assert!((h.unit.x - (-FRAC_PI_3.cos())).abs() < 1e-6);
        assert!((h.unit.y - FRAC_PI_3.sin()).abs() < 1e-6);
    }

    #[test]
    fn test_ball_reset() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(5.0, 5.0);
        state.ball.speed = 23.5;
        state.ball.heading = Heading::new(1.1);

        state.reset_ball();
        assert_eq!(
            state.ball.pos,
            Vec2::new(ARENA_WIDTH / 2.0 - 10.0, ARENA_HEIGHT / 2.0 - 10.0)
        );
        assert_eq!(state.ball.speed, BALL_START_SPEED);
        assert_eq!(state.ball.heading.angle, BALL_START_ANGLE);
    }

    #[test]
    fn test_full_reset_clears_scores_and_recenters() {
        let mut state = GameState::new();
        state.player.score = 3;
        state.opponent.score = 7;
        state.player.pos.x = 0.0;
        state.opponent.pos.x = ARENA_WIDTH - PADDLE_WIDTH;

        state.reset();
        assert_eq!(state.player.score, 0);
        assert_eq!(state.opponent.score, 0);
        let center_x = ARENA_WIDTH / 2.0 - PADDLE_WIDTH / 2.0;
        assert_eq!(state.player.pos.x, center_x);
        assert_eq!(state.opponent.pos.x, center_x);
    }

    #[test]
    fn test_nudge_speed_is_unclamped() {
        let mut state = GameState::new();
        for _ in 0..12 {
            state.nudge_speed(-SPEED_NUDGE);
        }
        assert_eq!(state.ball.speed, BALL_START_SPEED - 12.0);
        assert!(state.ball.speed < 0.0);
    }

    #[test]
    fn test_pointer_placement_is_clamped() {
        let mut state = GameState::new();
        state.set_player_x(5.0);
        assert_eq!(state.player.pos.x, 0.0);
        state.set_player_x(ARENA_WIDTH - 1.0);
        assert_eq!(state.player.pos.x, ARENA_WIDTH - PADDLE_WIDTH);
        state.set_player_x(300.0);
        assert_eq!(state.player.pos.x, 300.0 - PADDLE_WIDTH / 2.0);
    }
}
