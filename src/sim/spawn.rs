//! Periodic entity generators
//!
//! The driver invokes these on their wall-clock intervals; each returns a
//! fresh entity for the core to append, so the timers never touch shared
//! state directly. Each spawner owns a seeded `Pcg32` stream, keeping spawn
//! sequences reproducible for a given seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Cloud, Pipe, Playfield};
use crate::consts::{PIPE_GAP, SPAWN_MARGIN};

/// Produces gated pipes at the right edge with a randomized gate position
pub struct PipeSpawner {
    rng: Pcg32,
}

impl PipeSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// New pipe at the right edge of the playfield. The gate always fits
    /// strictly inside the playfield with `SPAWN_MARGIN` clearance on both
    /// sides; the playfield must be taller than `PIPE_GAP + 2 * SPAWN_MARGIN`.
    pub fn spawn(&mut self, playfield: &Playfield) -> Pipe {
        let max_top = playfield.height - PIPE_GAP - SPAWN_MARGIN;
        debug_assert!(max_top > SPAWN_MARGIN, "playfield too short for the gate");

        let top_height = self.rng.random_range(SPAWN_MARGIN..max_top);
        Pipe::new(playfield.width, top_height)
    }
}

/// Produces background clouds in the upper half of the sky
pub struct CloudSpawner {
    rng: Pcg32,
}

impl CloudSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// New cloud at the right edge with randomized height, size and drift
    /// speed. Never interacts with collision logic.
    pub fn spawn(&mut self, playfield: &Playfield) -> Cloud {
        Cloud {
            pos: Vec2::new(
                playfield.width,
                self.rng.random_range(0.0..playfield.height / 2.0),
            ),
            size: self.rng.random_range(40.0..80.0),
            speed: self.rng.random_range(1.0..2.0),
        }
    }
}
