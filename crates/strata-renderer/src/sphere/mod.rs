//! Terrain sphere: mesh generation, MVP math, and wgpu pipeline.

pub mod matrix;
mod mesh;
mod pipeline;
mod types;

pub use mesh::*;
pub use pipeline::*;
pub use types::*;
