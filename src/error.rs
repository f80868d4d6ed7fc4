//! # Engine Error Types
//!
//! All errors that can surface from the voxel world core and its setup code.
//!
//! Missing data is not an error: an unloaded chunk or a position outside the
//! world resolves to an empty voxel.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine_state::voxels::position::ChunkPosition;

/// Errors that can occur while building or querying the voxel world.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A chunk position was divided by a zero scalar.
    #[error("invalid argument: cannot divide chunk position {0:?} by zero")]
    DivisionByZero(ChunkPosition),

    /// A component of a chunk position divided into a value outside `i32`.
    #[error("invalid argument: dividing chunk position {0:?} by {1} overflows")]
    CoordinateOverflow(ChunkPosition, i32),

    /// A coordinate was built from a list that does not hold exactly three components.
    #[error("invalid argument: coordinate needs exactly 3 components, got {0}")]
    MalformedCoordinate(usize),

    /// The texture atlas geometry cannot produce a UV scheme.
    #[error("invalid argument: atlas image width {image_width} cannot hold textures of width {texture_width}")]
    InvalidAtlas {
        /// Width of the atlas image in pixels.
        image_width: u32,
        /// Width of a single texture cell in pixels.
        texture_width: u32,
    },

    /// The world extent must be at least one chunk on every axis.
    #[error("invalid argument: world size must be positive on every axis, got ({x}, {y}, {z})")]
    InvalidWorldSize {
        /// Extent along X in chunks.
        x: i32,
        /// Extent along Y in chunks.
        y: i32,
        /// Extent along Z in chunks.
        z: i32,
    },

    /// The atlas image could not be opened or decoded.
    #[error("failed to read atlas image: {0}")]
    AtlasImage(#[from] image::ImageError),

    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for the expected layout.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl EngineError {
    /// Returns `true` for errors caused by a bad argument rather than the environment.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            EngineError::DivisionByZero(_)
                | EngineError::CoordinateOverflow(..)
                | EngineError::MalformedCoordinate(_)
                | EngineError::InvalidAtlas { .. }
                | EngineError::InvalidWorldSize { .. }
        )
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
