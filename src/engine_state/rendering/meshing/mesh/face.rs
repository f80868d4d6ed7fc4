use cgmath::Point3;

use crate::engine_state::voxels::voxel::VoxelFace;

/// Represents a single quad face of a voxel in the mesh.
///
/// A face is defined by four corner points in emission order: top-right,
/// bottom-right, bottom-left, top-left. Seen from outside the voxel the corners
/// run clockwise, so the two triangles `(0, 1, 3)` and `(1, 2, 3)` are wound
/// clockwise too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Corners in chunk space, `[top_right, bottom_right, bottom_left, top_left]`
    pub corners: [Point3<usize>; 4],
    /// Which side of the voxel this face represents
    pub voxel_face: VoxelFace,
}

impl Face {
    /// Creates the face on `voxel_face` of the voxel occupying
    /// `[x, x+1] x [y, y+1] x [z, z+1]`.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - The coordinates of the voxel in chunk space
    /// * `voxel_face` - Which side of the voxel this face represents
    pub fn new(x: usize, y: usize, z: usize, voxel_face: VoxelFace) -> Self {
        let at = |dx, dy, dz| Point3::new(x + dx, y + dy, z + dz);
        let corners = match voxel_face {
            VoxelFace::FRONT => [at(1, 1, 1), at(1, 0, 1), at(0, 0, 1), at(0, 1, 1)],
            VoxelFace::BACK => [at(0, 1, 0), at(0, 0, 0), at(1, 0, 0), at(1, 1, 0)],
            VoxelFace::RIGHT => [at(1, 1, 0), at(1, 0, 0), at(1, 0, 1), at(1, 1, 1)],
            VoxelFace::LEFT => [at(0, 1, 1), at(0, 0, 1), at(0, 0, 0), at(0, 1, 0)],
            VoxelFace::TOP => [at(1, 1, 0), at(1, 1, 1), at(0, 1, 1), at(0, 1, 0)],
            VoxelFace::BOTTOM => [at(0, 0, 0), at(0, 0, 1), at(1, 0, 1), at(1, 0, 0)],
        };

        Face {
            corners,
            voxel_face,
        }
    }
}
