//! Dodgeball Court - a single-screen catch-and-throw arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, gestures, opponent policy)
//! - `renderer`: Canvas 2D rendering
//! - `platform`: Browser/native time and seed source
//! - `settings`: Player preferences (ball speed)

pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Court dimensions in logical pixels
    pub const COURT_WIDTH: f32 = 400.0;
    pub const COURT_HEIGHT: f32 = 600.0;
    /// Horizontal divider between the opponent's half (above) and the
    /// player's half (below)
    pub const COURT_DIVIDER: f32 = COURT_HEIGHT / 2.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Default vertical speed for spawned balls (px/frame), overridable via
    /// the speed setting
    pub const DEFAULT_BALL_SPEED: f32 = 5.0;

    /// Stick figure dimensions
    pub const FIGURE_WIDTH: f32 = 40.0;
    pub const FIGURE_HEIGHT: f32 = 50.0;

    /// Spawner period (wall-clock milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 2000.0;

    /// Minimum drag length for a release to count as a throw
    pub const THROW_THRESHOLD: f32 = 20.0;
    /// Throw speed = drag length / THROW_SPEED_DIVISOR, capped
    pub const THROW_SPEED_DIVISOR: f32 = 10.0;
    pub const THROW_MAX_SPEED: f32 = 10.0;
    /// Horizontal throw component is damped to keep throws flatter than fast
    pub const THROW_VX_DAMP: f32 = 0.5;

    /// Opponent tracking step per frame (px)
    pub const OPPONENT_STEP: f32 = 3.0;
    /// Per-frame probability of an idle fidget when nothing is incoming
    pub const OPPONENT_FIDGET_CHANCE: f64 = 0.02;
    /// Fidget step size (px)
    pub const OPPONENT_FIDGET_STEP: f32 = 5.0;
}

/// Clamp a figure's center x so the whole figure stays on the court
#[inline]
pub fn clamp_figure_x(x: f32) -> f32 {
    let half = consts::FIGURE_WIDTH / 2.0;
    x.clamp(half, consts::COURT_WIDTH - half)
}
