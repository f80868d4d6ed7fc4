//! Mesh generation primitives for voxel rendering.
//!
//! # Architecture
//! - [`ChunkMesh`]: The vertex and index buffers of one chunk
//! - [`Face`]: The four corners of a single voxel face

mod face;
mod mesh;

pub use face::Face;
pub use mesh::*;
