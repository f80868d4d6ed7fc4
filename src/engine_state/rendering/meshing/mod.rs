//! Mesh generation for voxel rendering.
//!
//! This module handles the conversion of chunk voxel data into triangle meshes
//! that contain only externally visible faces, culled against neighbouring
//! chunks as well as against the chunk itself.
//!
//! # Architecture
//! - `ChunkMesher`: Walks a chunk and emits visible faces
//! - `NeighborLookup`: Strategy for finding the voxel across a face
//! - `mesh/`: Output buffers and the per-face corner table
//!
//! # Performance Considerations
//! - Neighbour chunks are resolved once per mesher, never per voxel
//! - Buffers are reserved up front and trimmed after generation

/// Output buffers and face geometry.
mod mesh;
mod mesher;

pub use mesh::*;
pub use mesher::*;
