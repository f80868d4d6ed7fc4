//! # Engine State Module
//!
//! The core engine module that ties the voxel world to a renderer.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the engine
//! * `camera_state` - Camera position, orientation and projection
//! * `rendering` - Meshing, texture atlas and the renderer contract
//! * `voxels` - Voxel data, chunks, the world and terrain generation
//!
//! ## Lifecycle
//!
//! 1. `populate_world` generates and registers every chunk of the world
//! 2. `set_voxel_at` edits loaded chunks
//! 3. `mesh_world` meshes every chunk against its neighbours and uploads it
//! 4. `render_frame` draws every uploaded mesh through a camera
//!
//! After upload only the renderer handle, the chunk position and the index
//! count of each mesh are kept; the CPU buffers are dropped.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use camera_state::ViewProjection;
use rendering::{ChunkMesher, Renderer, UvOffsetScheme};
use voxels::{
    position::{ChunkPosition, Position},
    terrain::{TerrainConfig, TerrainGenerator},
    voxel::VoxelType,
    world::{World, WorldSize},
};

use crate::error::EngineResult;

pub mod camera_state;
pub mod rendering;
pub mod voxels;

/// World and terrain settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub world_size: WorldSize,
    pub terrain: TerrainConfig,
}

/// A chunk mesh that lives in the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMesh<H> {
    /// Renderer handle returned by `Renderer::upload`
    pub handle: H,
    /// Chunk the mesh belongs to
    pub position: ChunkPosition,
    /// Number of indices to draw
    pub index_count: u32,
}

/// Totals of one `mesh_world` pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshingStats {
    /// Chunks meshed
    pub chunks: usize,
    /// Chunks whose mesh was uploaded (non-empty)
    pub uploaded: usize,
    pub vertices: usize,
    pub indices: usize,
}

/// The main state container for the voxel engine.
///
/// Generic over the renderer so the handles of uploaded meshes keep their
/// concrete type.
pub struct EngineState<R: Renderer> {
    /// The voxel world containing all chunk data
    world: World,
    /// Fills chunks during population
    terrain: TerrainGenerator,
    /// Texture coordinates of every voxel type
    uv_scheme: UvOffsetScheme,
    /// Meshes uploaded by the last `mesh_world`
    meshes: Vec<UploadedMesh<R::Handle>>,
}

impl<R: Renderer> EngineState<R> {
    /// Creates a new engine state with an empty world.
    ///
    /// # Errors
    /// `EngineError::InvalidWorldSize` if the configured world size is not positive.
    pub fn new(config: EngineConfig, uv_scheme: UvOffsetScheme) -> EngineResult<Self> {
        config.world_size.validate()?;
        Ok(EngineState {
            world: World::new(config.world_size),
            terrain: TerrainGenerator::new(config.terrain),
            uv_scheme,
            meshes: Vec::new(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Meshes currently uploaded, in ascending chunk position order.
    pub fn meshes(&self) -> &[UploadedMesh<R::Handle>] {
        &self.meshes
    }

    /// Generates and registers every chunk in `[0, size)` on each axis.
    ///
    /// # Returns
    /// The number of chunks generated.
    pub fn populate_world(&mut self) -> usize {
        let size = self.world.size();
        let start = Instant::now();
        info!(
            "Generating {} chunks ({} x {} x {})",
            size.chunk_count(),
            size.x,
            size.y,
            size.z
        );

        let mut generated = 0;
        for position in size.populated_positions() {
            let chunk = self.terrain.generate(position);
            self.world.register(chunk);
            generated += 1;

            let layer = (size.y * size.z) as usize;
            if generated % layer == 0 {
                debug!("Generated {generated} chunks");
            }
        }

        info!(
            "Generated {} chunks in {}ms",
            generated,
            start.elapsed().as_millis()
        );
        generated
    }

    /// Overwrites one voxel of a loaded chunk.
    ///
    /// Meshes are not rebuilt; call `mesh_world` afterwards.
    ///
    /// # Returns
    /// `false` if `position` is outside the world or in an unloaded chunk.
    pub fn set_voxel_at(&mut self, position: Position, voxel_type: VoxelType) -> bool {
        let chunk_pos = ChunkPosition::from_world_pos(position);
        if !self.world.size().contains(chunk_pos) {
            warn!("Ignoring write of {voxel_type:?} outside the world at {position:?}");
            return false;
        }

        match self.world.get_chunk_at_mut(chunk_pos) {
            Some(chunk) => {
                let local = position.local_in_chunk();
                chunk.set(local.x, local.y, local.z, voxel_type);
                true
            }
            None => {
                warn!("Ignoring write of {voxel_type:?} into unloaded chunk {chunk_pos:?}");
                false
            }
        }
    }

    /// Meshes every loaded chunk and uploads the non-empty meshes.
    ///
    /// Previously uploaded meshes are forgotten.
    pub fn mesh_world(&mut self, renderer: &mut R) -> MeshingStats {
        let start = Instant::now();
        self.uv_scheme.warn_missing();
        self.meshes.clear();

        let mut positions: Vec<ChunkPosition> = self.world.positions().collect();
        positions.sort_unstable();
        info!("Generating {} meshes", positions.len());

        let mut stats = MeshingStats::default();
        for position in positions {
            let Some(chunk) = self.world.get_chunk_at(position) else {
                continue;
            };

            let mesh = ChunkMesher::new(chunk)
                .with_world(&self.world)
                .with_uv_scheme(&self.uv_scheme)
                .generate_mesh();
            stats.chunks += 1;
            debug!(
                "Chunk {:?}: {} faces",
                position,
                mesh.face_count()
            );

            if mesh.is_empty() {
                continue;
            }

            stats.uploaded += 1;
            stats.vertices += mesh.vertices.len();
            stats.indices += mesh.indices.len();
            let handle = renderer.upload(&mesh);
            self.meshes.push(UploadedMesh {
                handle,
                position,
                index_count: mesh.index_count(),
            });
        }

        info!(
            "Uploaded {} of {} meshes ({} vertices, {} indices) in {}ms",
            stats.uploaded,
            stats.chunks,
            stats.vertices,
            stats.indices,
            start.elapsed().as_millis()
        );
        stats
    }

    /// Draws every uploaded mesh through `camera`.
    ///
    /// # Returns
    /// The number of draw calls issued.
    pub fn render_frame(&self, renderer: &mut R, camera: &impl ViewProjection) -> usize {
        renderer.begin_frame(camera.view_projection());
        for mesh in &self.meshes {
            renderer.draw(&mesh.handle, mesh.index_count, mesh.position.model_matrix());
        }
        renderer.end_frame();
        self.meshes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::camera_state::CameraState;
    use crate::engine_state::rendering::HeadlessRenderer;

    fn engine(x: i32, z: i32) -> EngineState<HeadlessRenderer> {
        let config = EngineConfig {
            world_size: WorldSize::new(x, 1, z).unwrap(),
            terrain: TerrainConfig::default(),
        };
        EngineState::new(config, UvOffsetScheme::with_width(64, 16).unwrap()).unwrap()
    }

    #[test]
    fn populate_registers_every_chunk() {
        let mut engine = engine(2, 3);
        assert_eq!(engine.populate_world(), 6);
        assert_eq!(engine.world().len(), 6);
        assert!(engine.world().get_chunk_at(ChunkPosition::new(1, 0, 2)).is_some());
    }

    #[test]
    fn writes_only_land_in_loaded_chunks() {
        let mut engine = engine(1, 1);
        assert!(!engine.set_voxel_at(Position::new(0, 0, 0), VoxelType::CRATE));

        engine.populate_world();
        assert!(engine.set_voxel_at(Position::new(0, 0, 0), VoxelType::CRATE));
        assert_eq!(
            engine.world().get_voxel_at(Position::new(0, 0, 0)).voxel_type,
            VoxelType::CRATE
        );
        assert!(!engine.set_voxel_at(Position::new(-1, 0, 0), VoxelType::CRATE));
        assert!(!engine.set_voxel_at(Position::new(100, 0, 0), VoxelType::CRATE));
    }

    #[test]
    fn frames_draw_every_uploaded_mesh() {
        let mut engine = engine(2, 2);
        engine.populate_world();
        let mut renderer = HeadlessRenderer::new();
        let stats = engine.mesh_world(&mut renderer);

        assert_eq!(stats.chunks, 4);
        assert_eq!(stats.uploaded, 4);
        assert_eq!(renderer.uploads(), 4);
        assert_eq!(renderer.vertex_bytes(), stats.vertices * 20);

        let draws = engine.render_frame(&mut renderer, &CameraState::default());
        assert_eq!(draws, 4);
        let frame = renderer.last_frame().unwrap();
        assert_eq!(frame.draw_calls, 4);
        assert_eq!(frame.indices, stats.indices as u64);
    }

    #[test]
    fn invalid_world_size_is_rejected() {
        let config = EngineConfig {
            world_size: WorldSize { x: 0, y: 1, z: 1 },
            terrain: TerrainConfig::default(),
        };
        let scheme = UvOffsetScheme::with_width(64, 16).unwrap();
        assert!(EngineState::<HeadlessRenderer>::new(config, scheme).is_err());
    }
}
