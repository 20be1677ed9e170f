//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod gesture;
pub mod opponent;
pub mod spawn;
pub mod state;
pub mod tick;

pub use gesture::{pointer_move, press, release};
pub use opponent::steer_opponent;
pub use spawn::spawn_opponent_ball;
pub use state::{Ball, GameState, Gesture, Owner, Score};
pub use tick::tick;
