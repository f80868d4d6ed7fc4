//! Rendering system for the voxel engine.
//!
//! This module contains everything between chunk voxel data and a graphics
//! backend: the vertex format, the texture atlas UV scheme, the chunk mesher and
//! the renderer contract the engine draws through.

pub mod meshing;
pub mod renderer;
pub mod texture_atlas;
mod vertex;

// Re-export commonly used types
pub use meshing::{ChunkMesh, ChunkMesher};
pub use renderer::{HeadlessRenderer, Renderer};
pub use texture_atlas::UvOffsetScheme;
pub use vertex::Vertex;
