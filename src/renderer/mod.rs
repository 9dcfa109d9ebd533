//! WebGPU rendering
//!
//! Consumes read-only snapshots of the game state; never mutates it.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
