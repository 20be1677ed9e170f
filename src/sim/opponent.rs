//! Scripted opponent movement
//!
//! A locally greedy interceptor: each frame it steps toward the most
//! imminent player throw, and fidgets a little when nothing is incoming.
//! The opponent only moves; it never catches.

use rand::Rng;

use super::state::{GameState, Owner};
use crate::clamp_figure_x;
use crate::consts::*;

/// Move the opponent figure for one frame.
///
/// Among player-owned balls in the opponent's half (y < divider), the one
/// with the smallest y is the most imminent; the opponent steps toward its x
/// by at most `OPPONENT_STEP` px without overshooting. With no incoming ball
/// there is a 2% chance per frame of a random 5 px step.
pub fn steer_opponent(state: &mut GameState) {
    let target = state
        .balls
        .iter()
        .filter(|b| b.owner == Some(Owner::Player) && b.pos.y < COURT_DIVIDER)
        .min_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|b| b.pos.x);

    match target {
        Some(tx) => {
            let delta = (tx - state.opponent_x).clamp(-OPPONENT_STEP, OPPONENT_STEP);
            state.opponent_x = clamp_figure_x(state.opponent_x + delta);
        }
        None => {
            if state.rng.random_bool(OPPONENT_FIDGET_CHANCE) {
                let step = if state.rng.random_bool(0.5) {
                    OPPONENT_FIDGET_STEP
                } else {
                    -OPPONENT_FIDGET_STEP
                };
                state.opponent_x = clamp_figure_x(state.opponent_x + step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;
    use glam::Vec2;

    fn player_ball(state: &mut GameState, pos: Vec2) {
        let id = state.next_entity_id();
        state.balls.push(Ball::new(id, pos, Vec2::ZERO, Owner::Player));
    }

    #[test]
    fn test_tracks_incoming_ball() {
        let mut state = GameState::new(11);
        state.opponent_x = 200.0;
        player_ball(&mut state, Vec2::new(50.0, 10.0));

        steer_opponent(&mut state);
        assert_eq!(state.opponent_x, 197.0);

        // 150 px at 3 px/frame: at the target after 50 frames, stable after
        for _ in 0..49 {
            steer_opponent(&mut state);
        }
        assert_eq!(state.opponent_x, 50.0);
        steer_opponent(&mut state);
        assert_eq!(state.opponent_x, 50.0);
    }

    #[test]
    fn test_prefers_most_imminent_ball() {
        let mut state = GameState::new(11);
        state.opponent_x = 200.0;
        player_ball(&mut state, Vec2::new(300.0, 250.0));
        player_ball(&mut state, Vec2::new(100.0, 40.0));

        steer_opponent(&mut state);
        // Moves toward the ball closest to the back line (smallest y)
        assert_eq!(state.opponent_x, 197.0);
    }

    #[test]
    fn test_ignores_balls_in_player_half() {
        let mut state = GameState::new(11);
        state.opponent_x = 200.0;
        player_ball(&mut state, Vec2::new(50.0, COURT_DIVIDER + 10.0));

        // No tracking target; movement is at most the rare fidget step
        steer_opponent(&mut state);
        assert!((state.opponent_x - 200.0).abs() <= OPPONENT_FIDGET_STEP);
    }

    #[test]
    fn test_fidget_rate_is_low() {
        let mut state = GameState::new(42);
        state.opponent_x = 200.0;
        let mut moves = 0;
        for _ in 0..1000 {
            let before = state.opponent_x;
            steer_opponent(&mut state);
            if state.opponent_x != before {
                moves += 1;
                state.opponent_x = 200.0;
            }
        }
        // ~2% of 1000 frames; generous bounds to stay seed-stable
        assert!(moves > 0, "expected at least one fidget in 1000 frames");
        assert!(moves < 100, "fidgeted {moves} times in 1000 frames");
    }

    #[test]
    fn test_clamped_to_court_bounds() {
        let mut state = GameState::new(11);
        state.opponent_x = FIGURE_WIDTH / 2.0;
        player_ball(&mut state, Vec2::new(0.0, 10.0));
        steer_opponent(&mut state);
        assert_eq!(state.opponent_x, FIGURE_WIDTH / 2.0);
    }
}
