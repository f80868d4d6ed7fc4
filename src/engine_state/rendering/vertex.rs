//! Vertex data structures for voxel rendering.
//!
//! This module defines the interleaved vertex format handed to renderers.

use cgmath::Point3;

use super::texture_atlas::Uv;

/// A vertex in the voxel rendering pipeline.
///
/// Represents a single point in chunk space with its atlas texture coordinate.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 20 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// X, Y and Z in chunk space
    pub position: [f32; 3],
    /// UV texture coordinates (normalized 0.0-1.0)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Number of `f32` components per vertex.
    pub const COMPONENTS: usize = 5;

    /// Creates a new vertex from a chunk-space corner and its texture coordinate.
    ///
    /// # Arguments
    /// * `pos` - The corner of the face in chunk space
    /// * `uv` - Atlas coordinate for that corner
    pub fn new(pos: Point3<usize>, uv: Uv) -> Self {
        Vertex {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            tex_coords: [uv.u, uv.v],
        }
    }
}
