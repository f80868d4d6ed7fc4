//! # Application State Management
//!
//! This module handles the command line application around the engine:
//! - Command line parsing
//! - Configuration loading and overrides
//! - The headless populate, mesh and render run

pub mod config;

use std::path::PathBuf;

use clap::Parser;
use log::info;
use web_time::Instant;

use config::AppConfig;

use crate::engine_state::camera_state::CameraState;
use crate::engine_state::rendering::renderer::FrameStats;
use crate::engine_state::rendering::{HeadlessRenderer, UvOffsetScheme};
use crate::engine_state::voxels::position::Position;
use crate::engine_state::voxels::voxel::VoxelType;
use crate::engine_state::voxels::world::WorldSize;
use crate::engine_state::{EngineState, MeshingStats};
use crate::error::EngineResult;

/// Generate a voxel world, mesh it and render it headlessly.
#[derive(Parser, Debug, Default)]
#[command(name = "voxel-world", version, about)]
pub struct Args {
    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// World extent in chunks, as X,Y,Z
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_world_size)]
    pub world_size: Option<WorldSize>,

    /// Terrain noise seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of frames to render
    #[arg(long)]
    pub frames: Option<usize>,

    /// Texture atlas image; only its width is read
    #[arg(long, value_name = "PATH")]
    pub atlas: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Loads the configuration file, if any, and applies the flags on top.
    pub fn resolve_config(&self) -> EngineResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(size) = self.world_size {
            config.world.size = size;
        }
        if let Some(seed) = self.seed {
            config.terrain.seed = seed;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(atlas) = &self.atlas {
            config.atlas.image_path = Some(atlas.clone());
        }

        config.world.size.validate()?;
        Ok(config)
    }
}

fn parse_world_size(text: &str) -> Result<WorldSize, String> {
    let components = text
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| err.to_string())?;
    let Position { x, y, z } =
        Position::try_from(components.as_slice()).map_err(|err| err.to_string())?;
    WorldSize::new(x, y, z).map_err(|err| err.to_string())
}

/// What a headless run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub chunks: usize,
    pub meshing: MeshingStats,
    pub frames: usize,
    pub last_frame: Option<FrameStats>,
}

/// Builds the UV scheme described by the atlas section.
pub fn build_uv_scheme(config: &AppConfig) -> EngineResult<UvOffsetScheme> {
    match &config.atlas.image_path {
        Some(path) => {
            info!("Reading atlas dimensions from {}", path.display());
            UvOffsetScheme::from_atlas_image(path, config.atlas.texture_width)
        }
        None => UvOffsetScheme::with_width(config.atlas.image_width, config.atlas.texture_width),
    }
}

/// Populates, meshes and renders the configured world without a window.
pub fn run_headless(config: &AppConfig) -> EngineResult<RunSummary> {
    let start = Instant::now();
    let uv_scheme = build_uv_scheme(config)?;
    let mut engine = EngineState::<HeadlessRenderer>::new(config.engine_config(), uv_scheme)?;

    let chunks = engine.populate_world();
    engine.set_voxel_at(Position::new(0, 0, 0), VoxelType::CRATE);

    let mut renderer = HeadlessRenderer::new();
    let meshing = engine.mesh_world(&mut renderer);

    let camera = CameraState::new(&config.camera);
    for _ in 0..config.frames {
        engine.render_frame(&mut renderer, &camera);
    }

    let summary = RunSummary {
        chunks,
        meshing,
        frames: renderer.frames(),
        last_frame: renderer.last_frame(),
    };
    info!(
        "Rendered {} frames ({:?}); {} vertex bytes and {} index bytes uploaded; total {}ms",
        summary.frames,
        summary.last_frame,
        renderer.vertex_bytes(),
        renderer.index_bytes(),
        start.elapsed().as_millis()
    );
    Ok(summary)
}
