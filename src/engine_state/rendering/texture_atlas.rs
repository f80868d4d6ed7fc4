//! # Texture Atlas Module
//!
//! Maps voxel types to texture coordinates inside a square texture atlas.
//!
//! The atlas is a grid of equally sized cells. A `UvOffsetScheme` is built once
//! from the atlas geometry and assigns every voxel face a `UvQuad`: the unit
//! base quad shifted to the face's cell and scaled down by the number of cells
//! per row.

use std::ops::{Add, Div};
use std::path::Path;

use log::warn;

use crate::engine_state::voxels::voxel::{VoxelFace, VoxelType};
use crate::error::{EngineError, EngineResult};

/// A texture coordinate, `(0, 0)` being the bottom-left of the atlas.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Uv {
    pub u: f32,
    pub v: f32,
}

impl Uv {
    pub const fn new(u: f32, v: f32) -> Self {
        Uv { u, v }
    }
}

impl Add for Uv {
    type Output = Uv;

    fn add(self, other: Uv) -> Uv {
        Uv::new(self.u + other.u, self.v + other.v)
    }
}

impl Div<f32> for Uv {
    type Output = Uv;

    fn div(self, scalar: f32) -> Uv {
        Uv::new(self.u / scalar, self.v / scalar)
    }
}

/// The four texture coordinates of one face, in the same corner order the
/// mesher emits vertices: top-right, bottom-right, bottom-left, top-left.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UvQuad {
    pub top_right: Uv,
    pub bottom_right: Uv,
    pub bottom_left: Uv,
    pub top_left: Uv,
}

impl UvQuad {
    /// The whole texture, `TR(1,1) BR(1,0) BL(0,0) TL(0,1)`.
    pub const BASE: UvQuad = UvQuad {
        top_right: Uv::new(1.0, 1.0),
        bottom_right: Uv::new(1.0, 0.0),
        bottom_left: Uv::new(0.0, 0.0),
        top_left: Uv::new(0.0, 1.0),
    };

    /// Corners in emission order.
    pub fn corners(&self) -> [Uv; 4] {
        [
            self.top_right,
            self.bottom_right,
            self.bottom_left,
            self.top_left,
        ]
    }

    /// The base quad moved to atlas cell `(column, row)` of a grid with
    /// `cells` cells per row.
    pub fn cell(column: u32, row: u32, cells: f32) -> UvQuad {
        (UvQuad::BASE + Uv::new(column as f32, row as f32)) / cells
    }
}

impl Default for UvQuad {
    fn default() -> Self {
        UvQuad::BASE
    }
}

impl Add<Uv> for UvQuad {
    type Output = UvQuad;

    fn add(self, offset: Uv) -> UvQuad {
        UvQuad {
            top_right: self.top_right + offset,
            bottom_right: self.bottom_right + offset,
            bottom_left: self.bottom_left + offset,
            top_left: self.top_left + offset,
        }
    }
}

impl Div<f32> for UvQuad {
    type Output = UvQuad;

    fn div(self, scalar: f32) -> UvQuad {
        UvQuad {
            top_right: self.top_right / scalar,
            bottom_right: self.bottom_right / scalar,
            bottom_left: self.bottom_left / scalar,
            top_left: self.top_left / scalar,
        }
    }
}

/// One quad per voxel face.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VoxelUv {
    pub front: UvQuad,
    pub back: UvQuad,
    pub right: UvQuad,
    pub left: UvQuad,
    pub top: UvQuad,
    pub bottom: UvQuad,
}

impl VoxelUv {
    /// The same quad on all six faces.
    pub fn uniform(quad: UvQuad) -> Self {
        VoxelUv {
            front: quad,
            back: quad,
            right: quad,
            left: quad,
            top: quad,
            bottom: quad,
        }
    }

    /// One quad for the four sides, one for the top and one for the bottom.
    pub fn sided(sides: UvQuad, top: UvQuad, bottom: UvQuad) -> Self {
        VoxelUv {
            top,
            bottom,
            ..VoxelUv::uniform(sides)
        }
    }

    /// The quad of `face`.
    #[inline]
    pub fn face(&self, face: VoxelFace) -> &UvQuad {
        match face {
            VoxelFace::FRONT => &self.front,
            VoxelFace::BACK => &self.back,
            VoxelFace::BOTTOM => &self.bottom,
            VoxelFace::TOP => &self.top,
            VoxelFace::LEFT => &self.left,
            VoxelFace::RIGHT => &self.right,
        }
    }
}

/// Per-type texture coordinates for one atlas.
#[derive(Clone, Debug, PartialEq)]
pub struct UvOffsetScheme {
    image_width: u32,
    texture_width: u32,
    uvs: [Option<VoxelUv>; VoxelType::COUNT],
    missing: VoxelUv,
}

impl UvOffsetScheme {
    /// A scheme with no registered types.
    ///
    /// # Errors
    /// `EngineError::InvalidAtlas` if `texture_width` is zero or wider than the image.
    pub fn empty(image_width: u32, texture_width: u32) -> EngineResult<Self> {
        if texture_width == 0 || image_width < texture_width {
            return Err(EngineError::InvalidAtlas {
                image_width,
                texture_width,
            });
        }

        Ok(UvOffsetScheme {
            image_width,
            texture_width,
            uvs: [None; VoxelType::COUNT],
            missing: VoxelUv::default(),
        })
    }

    /// Builds the scheme for the standard block atlas.
    ///
    /// # Arguments
    /// * `image_width` - Width of the atlas image in pixels
    /// * `texture_width` - Width of one texture cell in pixels
    pub fn with_width(image_width: u32, texture_width: u32) -> EngineResult<Self> {
        let mut scheme = Self::empty(image_width, texture_width)?;
        let cells = scheme.cells_per_row();
        let cell = |column, row| UvQuad::cell(column, row, cells);

        scheme.insert(VoxelType::STONE, VoxelUv::uniform(cell(0, 3)));
        scheme.insert(
            VoxelType::GRASS,
            VoxelUv::sided(cell(2, 3), cell(1, 3), cell(3, 3)),
        );
        scheme.insert(VoxelType::DIRT, VoxelUv::uniform(cell(3, 3)));
        scheme.insert(VoxelType::SAND, VoxelUv::uniform(cell(3, 1)));
        scheme.insert(
            VoxelType::CRATE,
            VoxelUv::sided(cell(0, 2), cell(1, 2), cell(1, 2)),
        );
        scheme.insert(VoxelType::ROCKS, VoxelUv::uniform(cell(2, 2)));
        scheme.insert(VoxelType::STONE_BRICK, VoxelUv::uniform(cell(3, 2)));
        scheme.insert(VoxelType::ORE_IRON, VoxelUv::uniform(cell(0, 1)));
        scheme.insert(VoxelType::ORE_GOLD, VoxelUv::uniform(cell(1, 1)));
        scheme.insert(VoxelType::ORE_COAL, VoxelUv::uniform(cell(2, 1)));
        scheme.insert(VoxelType::FRAMEWORK, VoxelUv::uniform(cell(0, 0)));
        scheme.insert(VoxelType::GLASS, VoxelUv::uniform(cell(1, 0)));

        Ok(scheme)
    }

    /// Builds the standard scheme from the dimensions of an atlas image on disk.
    ///
    /// Only the image header is read.
    pub fn from_atlas_image(path: impl AsRef<Path>, texture_width: u32) -> EngineResult<Self> {
        let (image_width, _) = image::image_dimensions(path)?;
        Self::with_width(image_width, texture_width)
    }

    /// Registers or replaces the quads of `voxel_type`.
    pub fn insert(&mut self, voxel_type: VoxelType, uv: VoxelUv) -> Option<VoxelUv> {
        self.uvs[voxel_type as usize].replace(uv)
    }

    /// Replaces the quads used for unregistered types.
    pub fn set_missing(&mut self, uv: VoxelUv) {
        self.missing = uv;
    }

    /// The quads of `voxel_type`, or the missing-texture quads if it has none.
    #[inline]
    pub fn get(&self, voxel_type: VoxelType) -> &VoxelUv {
        self.uvs[voxel_type as usize]
            .as_ref()
            .unwrap_or(&self.missing)
    }

    pub fn contains(&self, voxel_type: VoxelType) -> bool {
        self.uvs[voxel_type as usize].is_some()
    }

    /// Renderable types with no registered quads.
    pub fn missing_types(&self) -> Vec<VoxelType> {
        VoxelType::renderable()
            .filter(|voxel_type| !self.contains(*voxel_type))
            .collect()
    }

    /// Logs one warning naming every renderable type that falls back to the
    /// missing texture.
    pub fn warn_missing(&self) {
        let missing = self.missing_types();
        if !missing.is_empty() {
            warn!("No atlas texture for {:?}; using the missing texture", missing);
        }
    }

    /// Number of texture cells along one row of the atlas.
    pub fn cells_per_row(&self) -> f32 {
        self.image_width as f32 / self.texture_width as f32
    }
}
