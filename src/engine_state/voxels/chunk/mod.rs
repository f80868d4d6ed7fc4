//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a fixed 16x256x16 dense grid of
//! voxels plus the chunk's position in chunk space.
//!
//! ## Storage
//!
//! Voxels are stored in one heap allocation laid out `[x][y][z]`, so `z` is the
//! fastest-moving index. A chunk is never resized; every cell always holds a
//! valid voxel, `NONE` until something writes to it.
//!
//! ### Performance Characteristics
//! - **Voxel Lookup**: O(1) - direct index arithmetic
//! - **Memory Usage**: one byte per voxel (64 KiB per chunk)

use cgmath::Point3;

use super::position::ChunkPosition;
use super::voxel::{Voxel, VoxelType};

pub mod chunk_iteration;

/// Horizontal extent of a chunk (X and Z) in voxels.
pub const CHUNK_WIDTH: usize = Chunk::WIDTH as usize;
/// Vertical extent of a chunk (Y) in voxels.
pub const CHUNK_HEIGHT: usize = Chunk::HEIGHT as usize;
/// The number of voxels in one vertical slice (Y by Z) of a chunk.
pub const CHUNK_SLICE_SIZE: usize = CHUNK_HEIGHT * CHUNK_WIDTH;
/// The total number of voxels in a chunk.
pub const CHUNK_SIZE: usize = CHUNK_WIDTH * CHUNK_SLICE_SIZE;

/// Represents a 16x256x16 collection of voxels in the world.
///
/// Chunks are the unit of world storage and of meshing. Once registered in the
/// world, a chunk is owned by it; everything else borrows.
#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not voxel coordinates).
    pub position: ChunkPosition,

    /// The voxel grid, `CHUNK_SIZE` cells laid out `[x][y][z]`.
    voxels: Box<[Voxel]>,
}

impl Chunk {
    /// Horizontal extent in voxels.
    pub const WIDTH: i32 = 16;
    /// Vertical extent in voxels.
    pub const HEIGHT: i32 = 256;

    /// Creates a new, completely empty chunk (all voxels are `NONE`).
    pub fn new(position: ChunkPosition) -> Self {
        Chunk {
            position,
            voxels: vec![Voxel::EMPTY; CHUNK_SIZE].into_boxed_slice(),
        }
    }

    /// Creates a new chunk filled entirely with `voxel_type`.
    pub fn filled(position: ChunkPosition, voxel_type: VoxelType) -> Self {
        let mut chunk = Chunk::new(position);
        chunk.fill(voxel_type);
        chunk
    }

    /// Populates this chunk to consist entirely of `voxel_type`.
    pub fn fill(&mut self, voxel_type: VoxelType) {
        self.voxels.fill(Voxel::new(voxel_type));
    }

    #[inline]
    fn index(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < CHUNK_WIDTH && y < CHUNK_HEIGHT && z < CHUNK_WIDTH);
        x * CHUNK_SLICE_SIZE + y * CHUNK_WIDTH + z
    }

    /// Gets the voxel at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Voxel {
        self.voxels[Self::index(x, y, z)]
    }

    /// Gets the type of the voxel at the specified chunk-relative coordinates.
    #[inline]
    pub fn voxel_type(&self, x: usize, y: usize, z: usize) -> VoxelType {
        self.get(x, y, z).voxel_type
    }

    /// Type of the voxel at a local point.
    #[inline]
    pub fn voxel_type_at(&self, local: Point3<usize>) -> VoxelType {
        self.voxel_type(local.x, local.y, local.z)
    }

    /// Overwrites the voxel at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, voxel_type: VoxelType) {
        self.voxels[Self::index(x, y, z)] = Voxel::new(voxel_type);
    }

    /// Whether every voxel is `NONE`.
    pub fn is_empty(&self) -> bool {
        self.voxels.iter().all(|voxel| !voxel.is_solid())
    }

    /// Number of non-`NONE` voxels.
    pub fn solid_count(&self) -> usize {
        self.voxels.iter().filter(|voxel| voxel.is_solid()).count()
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("position", &self.position)
            .field("solid_voxels", &self.solid_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chunk_is_empty() {
        let chunk = Chunk::new(ChunkPosition::ORIGIN);
        assert!(chunk.is_empty());
        assert_eq!(chunk.voxel_type(15, 255, 15), VoxelType::NONE);
    }

    #[test]
    fn fill_sets_every_cell() {
        let mut chunk = Chunk::new(ChunkPosition::ORIGIN);
        chunk.fill(VoxelType::STONE);
        assert_eq!(chunk.solid_count(), CHUNK_SIZE);
        chunk.fill(VoxelType::NONE);
        assert!(chunk.is_empty());
    }

    #[test]
    fn set_only_touches_one_cell() {
        let mut chunk = Chunk::new(ChunkPosition::new(1, 0, 2));
        chunk.set(3, 200, 9, VoxelType::CRATE);
        assert_eq!(chunk.voxel_type(3, 200, 9), VoxelType::CRATE);
        assert_eq!(chunk.voxel_type(9, 200, 3), VoxelType::NONE);
        assert_eq!(chunk.voxel_type(3, 201, 9), VoxelType::NONE);
        assert_eq!(chunk.solid_count(), 1);
    }

    #[test]
    fn point_and_component_lookups_agree() {
        let mut chunk = Chunk::new(ChunkPosition::new(-1, 0, 2));
        chunk.set(15, 4, 0, VoxelType::GLASS);
        assert_eq!(chunk.voxel_type_at(Point3::new(15, 4, 0)), VoxelType::GLASS);
        assert_eq!(chunk.voxel_type_at(Point3::new(0, 4, 15)), VoxelType::NONE);
    }
}
