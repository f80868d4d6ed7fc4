//! # Position Module
//!
//! World-space and chunk-space integer coordinates.
//!
//! World space addresses single voxels; chunk space addresses whole chunks,
//! one unit being one chunk extent (`Chunk::WIDTH` horizontally,
//! `Chunk::HEIGHT` vertically). Conversion from world to chunk space uses
//! floor division so negative coordinates land in the chunk that contains them.

use std::ops::{Add, Mul, Sub};

use cgmath::{Matrix4, Point3, Vector3};

use crate::error::{EngineError, EngineResult};

use super::chunk::Chunk;

/// An integer world-space coordinate, one unit per voxel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Position { x, y, z }
    }

    /// Offset of this position inside the chunk that contains it.
    ///
    /// Uses the Euclidean remainder, so every component is non-negative even
    /// for negative world coordinates.
    pub fn local_in_chunk(&self) -> Point3<usize> {
        Point3::new(
            self.x.rem_euclid(Chunk::WIDTH) as usize,
            self.y.rem_euclid(Chunk::HEIGHT) as usize,
            self.z.rem_euclid(Chunk::WIDTH) as usize,
        )
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl From<[i32; 3]> for Position {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Position::new(x, y, z)
    }
}

impl TryFrom<&[i32]> for Position {
    type Error = EngineError;

    /// Builds a position from a component list, which must hold exactly three values.
    fn try_from(components: &[i32]) -> EngineResult<Self> {
        match *components {
            [x, y, z] => Ok(Position::new(x, y, z)),
            _ => Err(EngineError::MalformedCoordinate(components.len())),
        }
    }
}

impl From<Position> for Point3<i32> {
    fn from(position: Position) -> Self {
        Point3::new(position.x, position.y, position.z)
    }
}

/// The location of a chunk in the chunk coordinate system.
///
/// Used directly as the key of the world's chunk map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPosition {
    pub const ORIGIN: ChunkPosition = ChunkPosition::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        ChunkPosition { x, y, z }
    }

    /// Retrieves the chunk containing a world position.
    pub fn from_world_pos(position: Position) -> Self {
        ChunkPosition::new(
            position.x.div_euclid(Chunk::WIDTH),
            position.y.div_euclid(Chunk::HEIGHT),
            position.z.div_euclid(Chunk::WIDTH),
        )
    }

    /// World position of the voxel at a local offset inside this chunk.
    pub fn to_world_pos(&self, local_x: i32, local_y: i32, local_z: i32) -> Position {
        Position::new(
            self.x * Chunk::WIDTH + local_x,
            self.y * Chunk::HEIGHT + local_y,
            self.z * Chunk::WIDTH + local_z,
        )
    }

    /// Divides every component by `scalar`, truncating toward zero.
    ///
    /// # Errors
    /// `EngineError::DivisionByZero` if `scalar` is zero,
    /// `EngineError::CoordinateOverflow` if a quotient does not fit in `i32`
    /// (`i32::MIN / -1`).
    pub fn checked_div(self, scalar: i32) -> EngineResult<Self> {
        if scalar == 0 {
            return Err(EngineError::DivisionByZero(self));
        }
        let divide = |component: i32| {
            component
                .checked_div(scalar)
                .ok_or_else(|| EngineError::CoordinateOverflow(self, scalar))
        };
        Ok(ChunkPosition::new(
            divide(self.x)?,
            divide(self.y)?,
            divide(self.z)?,
        ))
    }

    /// The chunk one step away along `offset`.
    pub fn offset_by(self, offset: Vector3<i32>) -> Self {
        ChunkPosition::new(self.x + offset.x, self.y + offset.y, self.z + offset.z)
    }

    /// Model transform placing this chunk's mesh in world space.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(
            (Chunk::WIDTH * self.x) as f32,
            (Chunk::HEIGHT * self.y) as f32,
            (Chunk::WIDTH * self.z) as f32,
        ))
    }
}

impl Add for ChunkPosition {
    type Output = ChunkPosition;

    fn add(self, other: ChunkPosition) -> ChunkPosition {
        ChunkPosition::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for ChunkPosition {
    type Output = ChunkPosition;

    fn sub(self, other: ChunkPosition) -> ChunkPosition {
        ChunkPosition::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<i32> for ChunkPosition {
    type Output = ChunkPosition;

    fn mul(self, scalar: i32) -> ChunkPosition {
        ChunkPosition::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl From<ChunkPosition> for Point3<i32> {
    fn from(position: ChunkPosition) -> Self {
        Point3::new(position.x, position.y, position.z)
    }
}
