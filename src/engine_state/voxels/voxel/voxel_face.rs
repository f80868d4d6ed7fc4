//! # Voxel Face Module
//!
//! This module defines the six faces of a voxel cube and how stepping across a
//! face moves between neighbouring cells, both inside one chunk and across a
//! chunk boundary.

use cgmath::{Point3, Vector3};

use crate::engine_state::voxels::chunk::{CHUNK_HEIGHT, CHUNK_WIDTH};

/// Represents the six possible faces of a voxel.
///
/// Each variant is assigned a unique integer value so faces can index
/// per-face tables directly.
///
/// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum VoxelFace {
    /// The front face (facing positive Z)
    FRONT = 0,

    /// The back face (facing negative Z)
    BACK = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl VoxelFace {
    /// Returns an array containing all six faces in a consistent order.
    ///
    /// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
    pub const fn all() -> [VoxelFace; 6] {
        [
            VoxelFace::FRONT,
            VoxelFace::BACK,
            VoxelFace::BOTTOM,
            VoxelFace::TOP,
            VoxelFace::LEFT,
            VoxelFace::RIGHT,
        ]
    }

    /// The unit step that crosses this face.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            VoxelFace::FRONT => Vector3::new(0, 0, 1),
            VoxelFace::BACK => Vector3::new(0, 0, -1),
            VoxelFace::BOTTOM => Vector3::new(0, -1, 0),
            VoxelFace::TOP => Vector3::new(0, 1, 0),
            VoxelFace::LEFT => Vector3::new(-1, 0, 0),
            VoxelFace::RIGHT => Vector3::new(1, 0, 0),
        }
    }

    /// Steps from `local` across this face, staying inside the chunk.
    ///
    /// # Returns
    /// `None` if the neighbouring cell lies in the adjacent chunk.
    #[inline]
    pub fn step_within_chunk(self, local: Point3<usize>) -> Option<Point3<usize>> {
        let Point3 { x, y, z } = local;
        match self {
            VoxelFace::FRONT => (z + 1 < CHUNK_WIDTH).then(|| Point3::new(x, y, z + 1)),
            VoxelFace::BACK => z.checked_sub(1).map(|z| Point3::new(x, y, z)),
            VoxelFace::BOTTOM => y.checked_sub(1).map(|y| Point3::new(x, y, z)),
            VoxelFace::TOP => (y + 1 < CHUNK_HEIGHT).then(|| Point3::new(x, y + 1, z)),
            VoxelFace::LEFT => x.checked_sub(1).map(|x| Point3::new(x, y, z)),
            VoxelFace::RIGHT => (x + 1 < CHUNK_WIDTH).then(|| Point3::new(x + 1, y, z)),
        }
    }

    /// Maps a cell on this face's side of the chunk shell to the touching cell
    /// of the adjacent chunk.
    ///
    /// Stepping past `x = CHUNK_WIDTH - 1` across `RIGHT` lands on `x = 0` of the
    /// right neighbour; the other axes keep their coordinate.
    #[inline]
    pub fn mirror_into_neighbor(self, local: Point3<usize>) -> Point3<usize> {
        let Point3 { x, y, z } = local;
        match self {
            VoxelFace::FRONT => Point3::new(x, y, 0),
            VoxelFace::BACK => Point3::new(x, y, CHUNK_WIDTH - 1),
            VoxelFace::BOTTOM => Point3::new(x, CHUNK_HEIGHT - 1, z),
            VoxelFace::TOP => Point3::new(x, 0, z),
            VoxelFace::LEFT => Point3::new(CHUNK_WIDTH - 1, y, z),
            VoxelFace::RIGHT => Point3::new(0, y, z),
        }
    }
}
