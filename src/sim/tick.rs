//! Per-frame simulation tick
//!
//! Advances every free ball by one frame, handles wall bounces and boundary
//! exits, applies score deltas, then runs the opponent policy.

use glam::Vec2;

use super::opponent::steer_opponent;
use super::state::{GameState, Owner};
use crate::consts::*;

/// Advance the game state by one display frame.
///
/// Caught balls are frozen in the player's hand and skipped entirely. A ball
/// that leaves through the top or bottom is removed and scores for its owner
/// only when it crossed the boundary far from that owner's own court:
/// opponent balls score out the bottom, player balls score out the top. Any
/// other exit is silent.
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    let mut score = state.score;
    state.balls.retain_mut(|ball| {
        if ball.caught {
            return true;
        }

        let candidate = ball.pos + ball.vel;

        // Side walls reflect vx for the next frame; this frame's displacement
        // keeps the un-reflected velocity and only the reported x is clamped.
        let hit_wall = candidate.x - ball.radius < 0.0
            || candidate.x + ball.radius > COURT_WIDTH;

        // Boundary exits are judged on the unclamped candidate y.
        if candidate.y - ball.radius > COURT_HEIGHT {
            if ball.owner == Some(Owner::Opponent) {
                score.opponent += 1;
            }
            return false;
        }
        if candidate.y + ball.radius < 0.0 {
            if ball.owner == Some(Owner::Player) {
                score.player += 1;
            }
            return false;
        }

        ball.pos = Vec2::new(
            candidate.x.clamp(ball.radius, COURT_WIDTH - ball.radius),
            candidate.y,
        );
        if hit_wall {
            ball.vel.x = -ball.vel.x;
        }
        true
    });
    state.score = score;

    steer_opponent(state);
}
