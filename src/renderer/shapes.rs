//! Shape generation for 2D primitives and frame assembly
//!
//! Everything works in playfield coordinates (origin top-left, y down);
//! the pipeline maps to NDC at upload time.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::PIPE_WIDTH;
use crate::sim::GameState;

/// Generate vertices for an axis-aligned rectangle (two triangles)
pub fn rect(origin: Vec2, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + width, origin.y + height);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a cumulus cloud: four overlapping puffs around the
/// anchor point, widest in the middle
pub fn cloud_puffs(center: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    vertices.extend(circle(center, size * 0.6, color, 20));
    vertices.extend(circle(
        center + Vec2::new(size * 0.6, 10.0),
        size * 0.5,
        color,
        20,
    ));
    vertices.extend(circle(
        center + Vec2::new(-size * 0.6, 10.0),
        size * 0.5,
        color,
        20,
    ));
    vertices.extend(circle(center + Vec2::new(0.0, 20.0), size * 0.55, color, 20));
    vertices
}

/// Build the full frame from a read-only state snapshot: clouds behind,
/// then pipes, then the bird on top
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for cloud in &state.clouds {
        vertices.extend(cloud_puffs(cloud.pos, cloud.size, colors::CLOUD));
    }

    for pipe in &state.pipes {
        // Top segment hangs from the ceiling, bottom segment rises from
        // the floor; the gate is the unpainted band between them
        vertices.extend(rect(
            Vec2::new(pipe.x, 0.0),
            PIPE_WIDTH,
            pipe.top_height,
            colors::PIPE,
        ));
        vertices.extend(rect(
            Vec2::new(pipe.x, pipe.bottom_y),
            PIPE_WIDTH,
            state.playfield.height - pipe.bottom_y,
            colors::PIPE,
        ));
    }

    vertices.extend(circle(
        state.bird.pos,
        state.bird.radius,
        colors::BIRD,
        32,
    ));

    vertices
}
