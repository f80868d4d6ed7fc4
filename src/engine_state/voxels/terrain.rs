//! # Terrain Module
//!
//! Heightmap terrain generation from multi-octave Perlin noise.
//!
//! Every `(x, z)` column gets a surface height from a 2D fractal noise field.
//! The column is then layered in world space:
//!
//! | World Y               | Voxel   |
//! |-----------------------|---------|
//! | `< h - 3`             | `STONE` |
//! | `h - 3`, `h - 2`      | `DIRT`  |
//! | `h - 1`               | `GRASS` |
//! | `>= h`                | `NONE`  |
//!
//! Columns whose height is below 3 become beach: `SAND` from `y = 0` up to and
//! including `h`.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use super::chunk::{Chunk, CHUNK_HEIGHT, CHUNK_WIDTH};
use super::position::ChunkPosition;
use super::voxel::VoxelType;

/// Columns lower than this are turned into beach.
const BEACH_HEIGHT: i32 = 3;

/// Number of dirt voxels between the grass cover and the stone below.
const SUBSURFACE_DEPTH: i32 = 2;

/// Parameters of the terrain noise field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Noise seed; equal seeds produce identical terrain.
    pub seed: u32,
    /// World units to noise units.
    pub scale: f64,
    /// Height added to every column before the noise contribution.
    pub min_height: i32,
    pub octaves: usize,
    pub persistence: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            seed: 123456,
            scale: 0.0007,
            min_height: 100,
            octaves: 8,
            persistence: 0.5,
        }
    }
}

/// Populates chunks with layered heightmap terrain.
pub struct TerrainGenerator {
    noise: Fbm<Perlin>,
    config: TerrainConfig,
}

impl TerrainGenerator {
    /// Builds the noise field described by `config`.
    pub fn new(config: TerrainConfig) -> Self {
        let noise = Fbm::<Perlin>::new(config.seed)
            .set_octaves(config.octaves)
            .set_persistence(config.persistence);
        TerrainGenerator { noise, config }
    }

    /// Surface height of the column at local `(x, z)` of the chunk at `position`.
    ///
    /// # Returns
    /// `min(min_height + |trunc(noise * CHUNK_HEIGHT)|, CHUNK_HEIGHT)`
    pub fn surface_height(&self, position: ChunkPosition, x: usize, z: usize) -> i32 {
        let world_x = x as i32 + position.x * Chunk::WIDTH;
        let world_z = z as i32 + position.z * Chunk::WIDTH;
        let sample = self.noise.get([
            world_x as f64 * self.config.scale,
            world_z as f64 * self.config.scale,
        ]);
        let relief = ((sample * Chunk::HEIGHT as f64) as i32).abs();
        (self.config.min_height + relief).min(Chunk::HEIGHT)
    }

    /// Overwrites every voxel of `chunk` with generated terrain.
    pub fn populate(&self, chunk: &mut Chunk) {
        chunk.fill(VoxelType::NONE);
        let position = chunk.position;
        let base_y = position.y * Chunk::HEIGHT;

        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_WIDTH {
                let height = self.surface_height(position, x, z);
                for y in 0..CHUNK_HEIGHT {
                    let voxel_type = Self::layer_at(base_y + y as i32, height);
                    if voxel_type != VoxelType::NONE {
                        chunk.set(x, y, z, voxel_type);
                    }
                }
            }
        }
    }

    /// Creates and populates the chunk at `position`.
    pub fn generate(&self, position: ChunkPosition) -> Chunk {
        let mut chunk = Chunk::new(position);
        self.populate(&mut chunk);
        chunk
    }

    /// Voxel type at world height `world_y` of a column with surface height `height`.
    fn layer_at(world_y: i32, height: i32) -> VoxelType {
        if height < BEACH_HEIGHT {
            return match world_y {
                y if y < 0 => VoxelType::STONE,
                y if y <= height => VoxelType::SAND,
                _ => VoxelType::NONE,
            };
        }

        let cover = height - 1;
        let subsurface = cover - SUBSURFACE_DEPTH;
        match world_y {
            y if y < subsurface => VoxelType::STONE,
            y if y < cover => VoxelType::DIRT,
            y if y == cover => VoxelType::GRASS,
            _ => VoxelType::NONE,
        }
    }
}
