//! # Voxel World
//!
//! A minimal voxel world renderer core: procedural chunk generation,
//! neighbour-aware chunk meshing and a small renderer contract.
//!
//! ## Key Modules
//!
//! * `engine_state` - Voxels, chunks, the world, terrain, meshing and rendering
//! * `application_state` - Command line, configuration and the headless run
//! * `error` - Errors shared by every module
//!
//! ## Architecture
//!
//! Terrain generation fills each chunk, the world owns the chunks, and the
//! chunk mesher turns each chunk into a buffer of visible faces, reading the six
//! neighbouring chunks so faces between two solid chunks are culled. Meshes are
//! handed to a [`Renderer`](engine_state::rendering::Renderer), which draws them
//! with a camera's view and projection.
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     if let Err(err) = voxel_world::run() {
//!         log::error!("{err}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

use clap::Parser;
use log::info;

use application_state::Args;

pub mod application_state;
pub mod engine_state;
pub mod error;

pub use error::{EngineError, EngineResult};

/// Initializes logging, parses the command line and runs the engine headlessly.
pub fn run() -> EngineResult<()> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();
    info!("Logger initialized");

    let args = Args::parse();
    let config = args.resolve_config()?;
    if args.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    application_state::run_headless(&config)?;
    Ok(())
}
