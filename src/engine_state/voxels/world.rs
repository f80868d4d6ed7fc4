//! # World Module
//!
//! This module provides the `World` struct which owns every loaded chunk of the
//! voxel world and answers neighbour queries across chunk boundaries.
//!
//! ## Architecture
//!
//! Chunks live in a hash map keyed directly by `ChunkPosition`. The world has a
//! configured extent (`WorldSize`, in chunks) and owns one immutable all-`NONE`
//! sentinel chunk, which is handed out wherever a neighbour is missing so the
//! mesher never needs to special-case absent data.
//!
//! ## Missing Data
//!
//! Nothing in this module fails on missing data:
//! - an unloaded chunk resolves to `None` (or the sentinel for neighbour queries)
//! - a voxel outside the world extent or in an unloaded chunk resolves to `NONE`
//!
//! ## Performance Considerations
//!
//! - Chunk lookup is O(1) using a hash map
//! - Neighbour sets are resolved once per mesher, not once per voxel

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::chunk::Chunk;
use super::position::{ChunkPosition, Position};
use super::voxel::{Voxel, VoxelFace};

/// Extent of the world in chunks along each axis.
///
/// Chunk positions are valid when `-size <= c < size` on every axis; the
/// populated region is `[0, size)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldSize {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WorldSize {
    /// Creates a world size, rejecting zero or negative extents.
    ///
    /// # Errors
    /// `EngineError::InvalidWorldSize` if any extent is not positive.
    pub fn new(x: i32, y: i32, z: i32) -> EngineResult<Self> {
        let size = WorldSize { x, y, z };
        size.validate()?;
        Ok(size)
    }

    /// Checks an already built size, e.g. one read from a config file.
    pub fn validate(&self) -> EngineResult<()> {
        if self.x <= 0 || self.y <= 0 || self.z <= 0 {
            return Err(EngineError::InvalidWorldSize {
                x: self.x,
                y: self.y,
                z: self.z,
            });
        }
        Ok(())
    }

    /// Whether `position` lies inside the symmetric world bounds.
    pub fn contains(&self, position: ChunkPosition) -> bool {
        (-self.x..self.x).contains(&position.x)
            && (-self.y..self.y).contains(&position.y)
            && (-self.z..self.z).contains(&position.z)
    }

    /// Number of chunks in the populated region.
    pub fn chunk_count(&self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }

    /// Iterates the populated region `[0, x) x [0, y) x [0, z)` in ascending order.
    pub fn populated_positions(&self) -> impl Iterator<Item = ChunkPosition> {
        let WorldSize { x, y, z } = *self;
        (0..x).flat_map(move |cx| {
            (0..y).flat_map(move |cy| (0..z).map(move |cz| ChunkPosition::new(cx, cy, cz)))
        })
    }
}

impl Default for WorldSize {
    fn default() -> Self {
        WorldSize {
            x: 128,
            y: 1,
            z: 128,
        }
    }
}

/// The six face-adjacent chunks of one chunk, indexed by `VoxelFace`.
///
/// Missing neighbours are the world's sentinel chunk, so every slot is always
/// a valid chunk to read from.
#[derive(Copy, Clone, Debug)]
pub struct ChunkNeighbors<'a> {
    chunks: [&'a Chunk; 6],
}

impl<'a> ChunkNeighbors<'a> {
    /// The neighbour across `face`.
    #[inline]
    pub fn across(&self, face: VoxelFace) -> &'a Chunk {
        self.chunks[face as usize]
    }
}

/// Represents a voxel world composed of multiple chunks.
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<ChunkPosition, Chunk>,

    /// Configured extent in chunks.
    size: WorldSize,

    /// The all-`NONE` chunk handed out for missing neighbours.
    empty_chunk: Chunk,
}

impl World {
    /// Creates a new world with no chunks loaded.
    pub fn new(size: WorldSize) -> Self {
        World {
            chunks: HashMap::with_capacity(size.chunk_count()),
            size,
            empty_chunk: Chunk::new(ChunkPosition::ORIGIN),
        }
    }

    /// The configured world extent.
    pub fn size(&self) -> WorldSize {
        self.size
    }

    /// Inserts `chunk` at its own position.
    ///
    /// # Returns
    /// The chunk previously registered at that position, if any.
    pub fn register(&mut self, chunk: Chunk) -> Option<Chunk> {
        let position = chunk.position;
        let displaced = self.chunks.insert(position, chunk);
        if displaced.is_some() {
            warn!("Chunk at {:?} was registered twice; replacing the old one", position);
        }
        displaced
    }

    /// Retrieves the chunk at the specified chunk coordinates, if loaded.
    pub fn get_chunk_at(&self, position: ChunkPosition) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    /// Mutable access to a loaded chunk.
    pub fn get_chunk_at_mut(&mut self, position: ChunkPosition) -> Option<&mut Chunk> {
        self.chunks.get_mut(&position)
    }

    /// Looks up the voxel at a world position.
    ///
    /// Positions outside the world extent or inside an unloaded chunk
    /// resolve to an empty voxel.
    pub fn get_voxel_at(&self, world_pos: Position) -> Voxel {
        let chunk_pos = ChunkPosition::from_world_pos(world_pos);
        if !self.size.contains(chunk_pos) {
            return Voxel::EMPTY;
        }

        match self.chunks.get(&chunk_pos) {
            Some(chunk) => {
                let local = world_pos.local_in_chunk();
                chunk.get(local.x, local.y, local.z)
            }
            None => Voxel::EMPTY,
        }
    }

    /// Resolves the six face-adjacent chunks of `position`.
    pub fn neighbors_of(&self, position: ChunkPosition) -> ChunkNeighbors<'_> {
        let chunks = VoxelFace::all().map(|face| {
            self.get_chunk_at(position.offset_by(face.offset()))
                .unwrap_or(&self.empty_chunk)
        });
        ChunkNeighbors { chunks }
    }

    /// The shared all-`NONE` sentinel chunk.
    pub fn empty_chunk(&self) -> &Chunk {
        &self.empty_chunk
    }

    /// Number of loaded chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Positions of every loaded chunk, in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = ChunkPosition> + '_ {
        self.chunks.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::voxel::VoxelType;

    fn small_world() -> World {
        World::new(WorldSize::new(2, 1, 2).unwrap())
    }

    #[test]
    fn world_size_rejects_non_positive_extents() {
        assert!(WorldSize::new(1, 1, 1).is_ok());
        for (x, y, z) in [(0, 1, 1), (1, -1, 1), (1, 1, 0)] {
            let err = WorldSize::new(x, y, z).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn populated_positions_cover_the_positive_region() {
        let size = WorldSize::new(2, 1, 3).unwrap();
        let positions: Vec<_> = size.populated_positions().collect();
        assert_eq!(positions.len(), size.chunk_count());
        assert_eq!(positions[0], ChunkPosition::ORIGIN);
        assert_eq!(positions[5], ChunkPosition::new(1, 0, 2));
    }

    #[test]
    fn register_returns_displaced_chunk() {
        let mut world = small_world();
        assert!(world.register(Chunk::new(ChunkPosition::ORIGIN)).is_none());
        let displaced = world.register(Chunk::filled(ChunkPosition::ORIGIN, VoxelType::DIRT));
        assert!(displaced.is_some_and(|chunk| chunk.is_empty()));
        assert_eq!(world.len(), 1);
        assert_eq!(
            world.get_voxel_at(Position::new(3, 3, 3)).voxel_type,
            VoxelType::DIRT
        );
    }

    #[test]
    fn missing_chunk_is_none_not_an_error() {
        let world = small_world();
        assert!(world.get_chunk_at(ChunkPosition::new(1, 0, 1)).is_none());
        assert!(world.is_empty());
    }

    #[test]
    fn voxel_lookup_handles_negative_coordinates() {
        let mut world = small_world();
        let mut chunk = Chunk::new(ChunkPosition::new(-1, 0, -1));
        chunk.set(15, 10, 15, VoxelType::SAND);
        world.register(chunk);

        assert_eq!(
            world.get_voxel_at(Position::new(-1, 10, -1)).voxel_type,
            VoxelType::SAND
        );
        assert_eq!(
            world.get_voxel_at(Position::new(-16, 10, -16)).voxel_type,
            VoxelType::NONE
        );
    }

    #[test]
    fn voxel_lookup_outside_the_world_is_empty() {
        let mut world = small_world();
        let position = ChunkPosition::new(2, 0, 0);
        world.register(Chunk::filled(position, VoxelType::STONE));

        // Loaded, but outside `-2 <= x < 2`.
        assert_eq!(world.get_voxel_at(Position::new(32, 0, 0)), Voxel::EMPTY);
        assert_eq!(world.get_voxel_at(Position::new(0, 256, 0)), Voxel::EMPTY);
    }

    #[test]
    fn neighbors_fall_back_to_the_sentinel() {
        let mut world = small_world();
        world.register(Chunk::filled(ChunkPosition::ORIGIN, VoxelType::STONE));
        world.register(Chunk::filled(ChunkPosition::new(1, 0, 0), VoxelType::GRASS));

        let neighbors = world.neighbors_of(ChunkPosition::ORIGIN);
        assert_eq!(
            neighbors.across(VoxelFace::RIGHT).position,
            ChunkPosition::new(1, 0, 0)
        );
        for face in [VoxelFace::LEFT, VoxelFace::TOP, VoxelFace::BOTTOM, VoxelFace::FRONT, VoxelFace::BACK] {
            assert!(std::ptr::eq(neighbors.across(face), world.empty_chunk()));
        }
        assert!(world.empty_chunk().is_empty());
    }
}
