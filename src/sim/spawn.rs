//! Opponent ball spawner
//!
//! Driven by a wall-clock timer (2000 ms) that runs independently of the
//! frame loop; each firing adds exactly one falling ball at the top edge.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, GameState, Owner};
use crate::consts::*;

/// Spawn one opponent ball at the top edge.
///
/// x is uniform across the court (inset by the radius), vx uniform in
/// [-1, 1), vy is the currently configured ball speed. There is no cap on
/// active balls; boundary exits keep the population bounded in practice.
pub fn spawn_opponent_ball(state: &mut GameState) {
    let id = state.next_entity_id();
    let x = state
        .rng
        .random_range(BALL_RADIUS..COURT_WIDTH - BALL_RADIUS);
    let vx = state.rng.random_range(-1.0..1.0);
    let vy = state.ball_speed;
    state
        .balls
        .push(Ball::new(id, Vec2::new(x, BALL_RADIUS), Vec2::new(vx, vy), Owner::Opponent));
}
