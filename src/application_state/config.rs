//! Application configuration.
//!
//! Settings are read from an optional JSON file in which every field may be
//! omitted; command line flags are applied on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine_state::camera_state::CameraConfig;
use crate::engine_state::voxels::terrain::TerrainConfig;
use crate::engine_state::voxels::world::WorldSize;
use crate::engine_state::EngineConfig;
use crate::error::{EngineError, EngineResult};

/// World extent section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub size: WorldSize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            size: WorldSize { x: 8, y: 1, z: 8 },
        }
    }
}

/// Texture atlas section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Atlas width in pixels, used when no image is given
    pub image_width: u32,
    /// Width of one texture cell in pixels
    pub texture_width: u32,
    /// Atlas image whose width replaces `image_width`
    pub image_path: Option<PathBuf>,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        AtlasConfig {
            image_width: 64,
            texture_width: 16,
            image_path: None,
        }
    }
}

/// Everything the application can be configured with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub terrain: TerrainConfig,
    pub atlas: AtlasConfig,
    pub camera: CameraConfig,
    /// Headless frames to render after meshing
    pub frames: usize,
}

impl AppConfig {
    /// Reads a configuration file.
    ///
    /// # Errors
    /// `ConfigIo` if the file cannot be read, `ConfigParse` if it is not valid.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The engine part of the configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            world_size: self.world.size,
            terrain: self.terrain.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.terrain.seed, 123456);
        assert_eq!(config.atlas.texture_width, 16);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_json(
            r#"{ "world": { "size": { "x": 2, "y": 1, "z": 3 } },
                 "terrain": { "seed": 7 },
                 "frames": 5 }"#,
        )
        .unwrap();
        assert_eq!(config.world.size, WorldSize { x: 2, y: 1, z: 3 });
        assert_eq!(config.terrain.seed, 7);
        assert_eq!(config.terrain.min_height, 100);
        assert_eq!(config.frames, 5);
        assert_eq!(config.camera.position, [50.0, 50.0, 50.0]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = AppConfig::from_json("{ \"frames\": \"many\" }").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/voxel-world.json")).unwrap_err();
        assert!(matches!(err, EngineError::ConfigIo { .. }));
    }

    #[test]
    fn printed_config_parses_back() {
        let config = AppConfig::default();
        let text = config.to_json_pretty().unwrap();
        assert_eq!(AppConfig::from_json(&text).unwrap(), config);
    }
}
