//! # Voxel World Core
//!
//! This module contains the data side of the engine: what a voxel is, how
//! voxels are grouped into chunks, how chunks are addressed and owned, and how
//! terrain fills them.
//!
//! ## Architecture
//!
//! * **Voxel**: Voxel types and the six cube faces
//! * **Chunk**: Fixed-size dense 3D grids of voxels
//! * **Position**: World-space and chunk-space coordinates
//! * **World**: Owns chunks and answers cross-chunk neighbour queries
//! * **Terrain**: Fills chunks from a Perlin heightmap
//!
//! ## Data Flow
//!
//! 1. Terrain generation populates each chunk
//! 2. Chunks are registered in the world
//! 3. Meshers borrow a chunk and its neighbours from the world

pub mod chunk;
pub mod position;
pub mod terrain;
pub mod voxel;
pub mod world;
