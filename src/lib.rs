//! Cloud Hopper - a one-button gravity glider
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, collisions, scoring, spawning)
//! - `renderer`: WebGPU rendering pipeline
//! - `highscores`: Persisted best score (LocalStorage on web)

pub mod highscores;
pub mod renderer;
pub mod sim;

pub use highscores::HighScore;

/// Game configuration constants
pub mod consts {
    /// Horizontal bird position (fixed for the whole run)
    pub const BIRD_X: f32 = 150.0;
    /// Bird bounding-circle radius
    pub const BIRD_RADIUS: f32 = 20.0;

    /// Downward acceleration per frame step
    pub const GRAVITY: f32 = 0.6;
    /// Velocity applied by a flap (negative = up)
    pub const JUMP_IMPULSE: f32 = -11.0;

    /// Pipe column width
    pub const PIPE_WIDTH: f32 = 80.0;
    /// Vertical opening between a pipe's top and bottom segments
    pub const PIPE_GAP: f32 = 200.0;
    /// Horizontal scroll per frame step
    pub const PIPE_SPEED: f32 = 4.0;
    /// Minimum clearance between the gate and the playfield edges
    pub const SPAWN_MARGIN: f32 = 100.0;

    /// Wall-clock period between pipe spawns (ms)
    pub const PIPE_INTERVAL_MS: i32 = 1_800;
    /// Wall-clock period between cloud spawns (ms)
    pub const CLOUD_INTERVAL_MS: i32 = 2_500;
}
