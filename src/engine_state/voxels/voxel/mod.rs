//! # Voxel Module
//!
//! This module provides the primitive voxel data used in chunk grids.
//! It includes voxel type definitions, voxel face handling, and the voxel cell itself.

pub mod voxel_face;
pub mod voxel_type;

pub use voxel_face::VoxelFace;
pub use voxel_type::VoxelType;

/// The underlying integer type used to represent voxel types.
pub type VoxelTypeSize = u8;

/// Represents a single voxel cell in the world.
///
/// A voxel carries nothing but its type; its appearance is looked up from
/// the type. Voxels have no lifecycle of their own and always live inside
/// exactly one chunk grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Voxel {
    /// The material of this voxel.
    pub voxel_type: VoxelType,
}

impl Voxel {
    /// The empty voxel returned for every position without data.
    pub const EMPTY: Voxel = Voxel {
        voxel_type: VoxelType::NONE,
    };

    /// Creates a new voxel of the specified type.
    pub fn new(voxel_type: VoxelType) -> Self {
        Voxel { voxel_type }
    }

    /// Whether this voxel produces geometry.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.voxel_type.is_solid()
    }
}
