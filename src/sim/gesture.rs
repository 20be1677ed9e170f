//! Pointer/touch gesture handling
//!
//! Press records a gesture origin and may catch a ball; release turns a
//! sufficiently long drag into a throw. Handlers mutate shared state between
//! frames, so the next tick simply sees the most recent gesture outcome.

use glam::Vec2;

use super::state::{GameState, Owner};
use crate::clamp_figure_x;
use crate::consts::*;

/// Press (mousedown / touchstart) at a canvas-relative point.
///
/// Moves the player figure to the press x and scans for a catchable ball:
/// uncaught, opponent-owned, strictly inside the player's half, and with the
/// press point strictly inside its radius. The first match (spawn order) is
/// caught. The press point becomes the pending drag origin either way.
pub fn press(state: &mut GameState, point: Vec2) {
    state.player_x = clamp_figure_x(point.x);

    let catchable = state.balls.iter_mut().find(|ball| {
        !ball.caught
            && ball.pos.y > COURT_DIVIDER
            && ball.owner == Some(Owner::Opponent)
            && ball.pos.distance(point) < ball.radius
    });
    if let Some(ball) = catchable {
        ball.catch();
        state.gesture.held_ball = Some(ball.id);
    }

    state.gesture.origin = Some(point);
}

/// Release (mouseup / touchend) at a canvas-relative point.
///
/// With a held ball and a recorded origin, a drag longer than the throw
/// threshold releases the ball toward the drag direction at
/// `min(length / 10, 10)` px/frame, with the horizontal component damped to
/// half scale. Shorter drags abandon the gesture but keep the ball caught so
/// the player can try again. The origin is forgotten in both cases.
pub fn release(state: &mut GameState, point: Vec2) {
    let (Some(held), Some(origin)) = (state.gesture.held_ball, state.gesture.origin) else {
        return;
    };

    let drag = point - origin;
    let length = drag.length();
    if length > THROW_THRESHOLD {
        if let Some(ball) = state.ball_mut(held) {
            let speed = (length / THROW_SPEED_DIVISOR).min(THROW_MAX_SPEED);
            let dir = drag / length;
            ball.vel = Vec2::new(dir.x * speed * THROW_VX_DAMP, dir.y * speed);
            ball.caught = false;
            ball.owner = Some(Owner::Player);
        }
        state.gesture.held_ball = None;
    }

    state.gesture.origin = None;
}

/// Pointer move: re-center the player figure, never touching balls
pub fn pointer_move(state: &mut GameState, x: f32) {
    state.player_x = clamp_figure_x(x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;

    fn opponent_ball(state: &mut GameState, pos: Vec2, vel: Vec2) -> u32 {
        let id = state.next_entity_id();
        state.balls.push(Ball::new(id, pos, vel, Owner::Opponent));
        id
    }

    #[test]
    fn test_press_catches_ball_in_player_half() {
        let mut state = GameState::new(3);
        let id = opponent_ball(
            &mut state,
            Vec2::new(200.0, COURT_DIVIDER + 1.0),
            Vec2::new(0.3, 5.0),
        );
        press(&mut state, Vec2::new(200.0, COURT_DIVIDER + 1.0));
        let ball = &state.balls[0];
        assert!(ball.caught);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.owner, Some(Owner::Opponent));
        assert_eq!(state.gesture.held_ball, Some(id));
        assert_eq!(state.gesture.origin, Some(Vec2::new(200.0, COURT_DIVIDER + 1.0)));
    }

    #[test]
    fn test_press_at_exact_radius_misses() {
        // Strict inequality: distance == radius is not a catch
        let mut state = GameState::new(3);
        opponent_ball(&mut state, Vec2::new(200.0, 400.0), Vec2::new(0.0, 5.0));
        press(&mut state, Vec2::new(200.0 + BALL_RADIUS, 400.0));
        assert!(!state.balls[0].caught);
        assert_eq!(state.gesture.held_ball, None);
        // Origin is still recorded
        assert!(state.gesture.origin.is_some());
    }

    #[test]
    fn test_press_ignores_opponent_half() {
        let mut state = GameState::new(3);
        opponent_ball(&mut state, Vec2::new(200.0, COURT_DIVIDER - 1.0), Vec2::new(0.0, 5.0));
        press(&mut state, Vec2::new(200.0, COURT_DIVIDER - 1.0));
        assert!(!state.balls[0].caught);
    }

    #[test]
    fn test_press_catches_first_in_spawn_order() {
        let mut state = GameState::new(3);
        let first = opponent_ball(&mut state, Vec2::new(200.0, 400.0), Vec2::ZERO);
        let _second = opponent_ball(&mut state, Vec2::new(205.0, 400.0), Vec2::ZERO);
        press(&mut state, Vec2::new(202.0, 400.0));
        assert_eq!(state.gesture.held_ball, Some(first));
        assert!(!state.balls[1].caught);
    }

    #[test]
    fn test_release_throws_along_drag() {
        let mut state = GameState::new(3);
        let id = opponent_ball(&mut state, Vec2::new(100.0, 500.0), Vec2::new(0.0, 5.0));
        press(&mut state, Vec2::new(100.0, 500.0));
        assert_eq!(state.gesture.held_ball, Some(id));

        // Straight up, length 30 -> speed 3, vx damped to 0
        release(&mut state, Vec2::new(100.0, 470.0));
        let ball = &state.balls[0];
        assert!(!ball.caught);
        assert_eq!(ball.owner, Some(Owner::Player));
        assert!((ball.vel.y - (-3.0)).abs() < 1e-5);
        assert!(ball.vel.x.abs() < 1e-5);
        assert_eq!(state.gesture.held_ball, None);
        assert_eq!(state.gesture.origin, None);
    }

    #[test]
    fn test_release_caps_throw_speed() {
        let mut state = GameState::new(3);
        opponent_ball(&mut state, Vec2::new(200.0, 500.0), Vec2::new(0.0, 5.0));
        press(&mut state, Vec2::new(200.0, 500.0));
        // Drag length 200 -> speed capped at 10
        release(&mut state, Vec2::new(200.0, 300.0));
        let ball = &state.balls[0];
        assert!((ball.vel.y - (-10.0)).abs() < 1e-5);
    }

    #[test]
    fn test_short_drag_keeps_ball_held() {
        let mut state = GameState::new(3);
        let id = opponent_ball(&mut state, Vec2::new(100.0, 500.0), Vec2::new(0.0, 5.0));
        press(&mut state, Vec2::new(100.0, 500.0));

        // Length ~9.4, under the threshold
        release(&mut state, Vec2::new(105.0, 508.0));
        let ball = &state.balls[0];
        assert!(ball.caught);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.owner, Some(Owner::Opponent));
        // Ball stays held, origin is forgotten
        assert_eq!(state.gesture.held_ball, Some(id));
        assert_eq!(state.gesture.origin, None);
    }

    #[test]
    fn test_release_without_gesture_is_noop() {
        let mut state = GameState::new(3);
        opponent_ball(&mut state, Vec2::new(100.0, 500.0), Vec2::new(0.0, 5.0));
        release(&mut state, Vec2::new(100.0, 470.0));
        assert!(!state.balls[0].caught);
        assert_eq!(state.balls[0].vel, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_pointer_move_clamps_to_court() {
        let mut state = GameState::new(3);
        pointer_move(&mut state, -50.0);
        assert_eq!(state.player_x, FIGURE_WIDTH / 2.0);
        pointer_move(&mut state, 5000.0);
        assert_eq!(state.player_x, COURT_WIDTH - FIGURE_WIDTH / 2.0);
        pointer_move(&mut state, 123.0);
        assert_eq!(state.player_x, 123.0);
    }
}
