//! Paddle/ball collision detection and response
//!
//! The ball is treated as its axis-aligned bounding box. The bounce angle is
//! `atan2` of the vector between the two centers: not a physically exact
//! reflection, but it is what gives the game its feel, so it stays.

use glam::Vec2;

use super::state::{Ball, Heading, Paddle};
use crate::consts::PADDLE_SPEEDUP;

/// Check the ball against one paddle and resolve the hit in place.
///
/// Returns false (and leaves the ball untouched) when the bounding boxes do
/// not overlap on both axes. On a hit:
/// - the heading is replaced with the center-to-center angle,
/// - the ball is pushed out along the axis with the smaller overlap, away
///   from the paddle center (ties resolve along the y axis),
/// - the speed grows by a fixed increment.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle) -> bool {
    let hit = ball.center() - paddle.center();

    // Half-extent sums: the boxes overlap iff both components are exceeded.
    // Strict comparison, so exactly-touching edges do not collide.
    let half = Vec2::new(ball.width + paddle.width, ball.height + paddle.height) / 2.0;
    if !(hit.x.abs() < half.x && hit.y.abs() < half.y) {
        return false;
    }

    ball.heading = Heading::new(hit.y.atan2(hit.x));

    let overlap = half - hit.abs();
    if overlap.x > 0.0 && overlap.y > 0.0 {
        if overlap.x < overlap.y {
            if hit.x < 0.0 {
                ball.pos.x -= overlap.x;
            } else {
                ball.pos.x += overlap.x;
            }
        } else {
            if hit.y < 0.0 {
                ball.pos.y -= overlap.y;
            } else {
                ball.pos.y += overlap.y;
            }
        }
    }

    ball.speed += PADDLE_SPEEDUP;
    true
}
