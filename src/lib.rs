//! Duo Pong - a two-paddle canvas arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Canvas-2D rendering (wasm only)

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (fixed for a session)
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance of each paddle's near edge from its end of the arena
    pub const PADDLE_INSET: f32 = 20.0;
    /// Horizontal movement per tick, for held keys and the opponent AI alike
    pub const PADDLE_STEP: f32 = 10.0;

    /// Ball defaults (square bounding box, drawn as a circle)
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_START_SPEED: f32 = 10.0;
    /// Initial and post-reset travel direction
    pub const BALL_START_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Speed gained on each paddle hit - the only automatic speed growth
    pub const PADDLE_SPEEDUP: f32 = 0.5;
    /// Manual speed adjustment per debug keypress, deliberately unclamped
    pub const SPEED_NUDGE: f32 = 1.0;

    /// One speed unit covers one distance unit per this many milliseconds,
    /// so effective velocity tracks the wall clock rather than frame rate
    pub const MS_PER_TIME_UNIT: f32 = 20.0;
    /// Nominal scheduler interval (60 ticks per second)
    pub const TICK_INTERVAL_MS: f64 = 1000.0 / 60.0;
}
