//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Which side a ball belongs to (None only transiently, pre-assignment)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Player,
    Opponent,
}

/// A ball in flight (or held)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub id: u32,
    /// Position in court pixels
    pub pos: Vec2,
    /// Velocity in px per frame
    pub vel: Vec2,
    pub radius: f32,
    /// Caught balls have zero velocity and are skipped by integration
    pub caught: bool,
    pub owner: Option<Owner>,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, owner: Owner) -> Self {
        Self {
            id,
            pos,
            vel,
            radius: BALL_RADIUS,
            caught: false,
            owner: Some(owner),
        }
    }

    /// Freeze the ball in the player's hand
    pub fn catch(&mut self) {
        self.caught = true;
        self.vel = Vec2::ZERO;
    }
}

/// Match score. Counters only go up and reset with the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

/// At most one in-flight drag gesture
#[derive(Debug, Clone, Copy, Default)]
pub struct Gesture {
    /// Id of the caught ball being held, if any
    pub held_ball: Option<u32>,
    /// Press coordinate the drag started from
    pub origin: Option<Vec2>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG (spawner x/vx, opponent fidget)
    pub rng: Pcg32,
    /// Active balls, in spawn order
    pub balls: Vec<Ball>,
    pub score: Score,
    pub gesture: Gesture,
    /// Player figure center x (bottom of the court)
    pub player_x: f32,
    /// Opponent figure center x (top of the court)
    pub opponent_x: f32,
    /// Vertical speed assigned to newly spawned balls (px/frame)
    pub ball_speed: f32,
    /// Frame counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            balls: Vec::new(),
            score: Score::default(),
            gesture: Gesture::default(),
            player_x: COURT_WIDTH / 2.0,
            opponent_x: COURT_WIDTH / 2.0,
            ball_speed: DEFAULT_BALL_SPEED,
            time_ticks: 0,
            next_id: 0,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Retarget the spawner's vertical speed (live control, [1, 10]).
    /// Balls already in flight keep their velocity.
    pub fn set_ball_speed(&mut self, speed: f32) {
        self.ball_speed = speed.clamp(1.0, 10.0);
    }

    /// Look up a ball by id
    pub fn ball_mut(&mut self, id: u32) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }
}
