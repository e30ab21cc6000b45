//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - State transitions driven only by `TickInput` and measured elapsed time
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::track_ball;
pub use collision::resolve_paddle_hit;
pub use state::{Ball, GameState, Heading, Paddle};
pub use tick::{TickInput, tick};
