//! Collision predicates for the bird against pipes and playfield bounds
//!
//! The bird collides as its bounding square against pipe rectangles: the
//! horizontal test uses the circle's extent, the vertical test compares the
//! circle's top and bottom edges against the gate.

use super::state::{Bird, Pipe, Playfield};
use crate::consts::PIPE_WIDTH;

/// True if the bird overlaps either segment of a pipe.
///
/// Horizontal extents must overlap AND the bird must poke above the gate top
/// or below the gate bottom.
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps_x =
        bird.pos.x + bird.radius > pipe.x && bird.pos.x - bird.radius < pipe.x + PIPE_WIDTH;

    overlaps_x && (bird.top() < pipe.top_height || bird.bottom() > pipe.bottom_y)
}

/// True if the bird has left the playfield vertically.
///
/// Exact contact with either edge does not count; only strict overshoot
/// ends the run.
pub fn bird_out_of_bounds(bird: &Bird, playfield: &Playfield) -> bool {
    bird.bottom() > playfield.height || bird.top() < 0.0
}
