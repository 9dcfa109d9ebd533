//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per rendered frame, no wall-clock reads
//! - Seeded RNG only (the spawners own their streams)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod step;

pub use collision::{bird_hits_pipe, bird_out_of_bounds};
pub use spawn::{CloudSpawner, PipeSpawner};
pub use state::{Bird, Cloud, GamePhase, GameState, Pipe, Playfield};
pub use step::{drift_clouds, flap, step};
