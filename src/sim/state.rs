//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first flap
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended by a collision; physics frozen, rendering continues
    GameOver,
}

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Position (x never changes after spawn)
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity (positive = falling)
    pub vel_y: f32,
}

impl Bird {
    /// New bird at the vertical center of the playfield, at rest
    pub fn new(playfield: &Playfield) -> Self {
        Self {
            pos: Vec2::new(BIRD_X, playfield.height / 2.0),
            radius: BIRD_RADIUS,
            vel_y: 0.0,
        }
    }

    /// Top edge of the bounding circle
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Bottom edge of the bounding circle
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A gated pipe pair: solid from the ceiling down to `top_height` and from
/// `bottom_y` down to the floor, with the gate in between
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge, decreases as the pipe scrolls
    pub x: f32,
    pub top_height: f32,
    pub bottom_y: f32,
    /// Set once the bird has cleared this pipe (scoring dedup)
    pub passed: bool,
}

impl Pipe {
    /// `bottom_y` is always `top_height + PIPE_GAP`
    pub fn new(x: f32, top_height: f32) -> Self {
        Self {
            x,
            top_height,
            bottom_y: top_height + PIPE_GAP,
            passed: false,
        }
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }
}

/// Background cloud. Cosmetic only, never collides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: f32,
    /// Individual drift speed per frame
    pub speed: f32,
}

/// Playfield dimensions, fixed at startup from the host viewport
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

/// Complete game state, owned by the driver and mutated only on its thread
#[derive(Debug, Clone)]
pub struct GameState {
    pub playfield: Playfield,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Pipes in spawn order (oldest/leftmost first)
    pub pipes: Vec<Pipe>,
    pub clouds: Vec<Cloud>,
    /// Pipes cleared this run
    pub score: u32,
    /// Mirror of the persisted best, kept current for the HUD
    pub high_score: u32,
    /// HUD message, `None` while playing
    pub message: Option<&'static str>,
}

impl GameState {
    pub const START_MESSAGE: &'static str = "Click to Start";
    pub const GAME_OVER_MESSAGE: &'static str = "Game Over! Click to Restart";

    pub fn new(playfield: Playfield, high_score: u32) -> Self {
        Self {
            playfield,
            phase: GamePhase::Ready,
            bird: Bird::new(&playfield),
            pipes: Vec::new(),
            clouds: Vec::new(),
            score: 0,
            high_score,
            message: Some(Self::START_MESSAGE),
        }
    }

    /// Append a freshly spawned pipe. Dropped outside active play so the
    /// title and game-over screens stay clear of stacked columns.
    pub fn push_pipe(&mut self, pipe: Pipe) {
        if self.phase == GamePhase::Playing {
            self.pipes.push(pipe);
        }
    }

    /// Append a background cloud (any phase)
    pub fn push_cloud(&mut self, cloud: Cloud) {
        self.clouds.push(cloud);
    }

    /// Reset for a fresh run after a crash. The best score and the cloud
    /// layer survive; everything else starts over.
    pub fn reset_run(&mut self) {
        self.bird = Bird::new(&self.playfield);
        self.pipes.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.message = None;
    }
}
