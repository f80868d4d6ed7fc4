//! # Voxel Type Module
//!
//! This module defines the closed set of materials a voxel can be made of.
//! It provides conversion from raw ids and iteration over the renderable types.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::VoxelTypeSize;

/// Enumerates all possible voxel types in the world.
///
/// `NONE` is the reserved empty value: it never produces geometry. Every other
/// variant is a renderable material whose appearance is fully determined by the
/// type. The `FromPrimitive` derive allows conversion from raw ids.
#[allow(non_camel_case_types)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive)]
pub enum VoxelType {
    /// Empty space.
    #[default]
    NONE,

    /// Bedrock filling everything below the subsurface layers.
    STONE,

    /// Ground cover. Grass on top, dirt on the bottom, grassy dirt on the sides.
    GRASS,

    /// Subsurface soil directly below the ground cover.
    DIRT,

    /// Loose rocks.
    ROCKS,

    /// Beach cover used for very low terrain.
    SAND,

    /// A wooden crate with a distinct lid.
    CRATE,

    /// Cut stone bricks.
    STONE_BRICK,

    /// Stone with iron ore.
    ORE_IRON,

    /// Stone with gold ore.
    ORE_GOLD,

    /// Stone with coal.
    ORE_COAL,

    /// A wooden framework.
    FRAMEWORK,

    /// Clear glass.
    GLASS,
}

impl VoxelType {
    /// Number of variants, including `NONE`.
    pub const COUNT: usize = VoxelType::GLASS as usize + 1;

    /// Converts a raw id to a `VoxelType`.
    ///
    /// # Returns
    /// `None` if the id does not name a voxel type.
    pub fn from_id(id: VoxelTypeSize) -> Option<Self> {
        VoxelType::from_u8(id)
    }

    /// Returns the raw id of this type.
    pub fn id(self) -> VoxelTypeSize {
        self as VoxelTypeSize
    }

    /// Whether this type produces geometry.
    #[inline]
    pub fn is_solid(self) -> bool {
        self != VoxelType::NONE
    }

    /// Iterates every renderable type (everything except `NONE`) in id order.
    pub fn renderable() -> impl Iterator<Item = VoxelType> {
        (1..VoxelType::COUNT as VoxelTypeSize).filter_map(VoxelType::from_id)
    }
}
