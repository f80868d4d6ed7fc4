//! Mesh data structures for voxel rendering.
//!
//! This module provides the CPU-side vertex and index buffers produced for one
//! chunk, and their flat byte views for renderers.

use crate::engine_state::rendering::texture_atlas::UvQuad;
use crate::engine_state::rendering::Vertex;

use super::face::Face;

/// Vertices emitted per face.
pub const VERTICES_PER_FACE: usize = 4;
/// Indices emitted per face (two triangles).
pub const INDICES_PER_FACE: usize = 6;

/// The triangle list of one chunk.
///
/// Every face owns its four vertices; faces never share vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// Interleaved position and texture coordinate per vertex
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    pub fn new() -> Self {
        ChunkMesh::default()
    }

    /// Creates an empty mesh with room for `faces` faces.
    pub fn with_face_capacity(faces: usize) -> Self {
        ChunkMesh {
            vertices: Vec::with_capacity(faces * VERTICES_PER_FACE),
            indices: Vec::with_capacity(faces * INDICES_PER_FACE),
        }
    }

    /// Appends one face and its two triangles.
    ///
    /// # Arguments
    /// * `face` - Corner positions in emission order
    /// * `uvs` - Texture coordinates for the same corners
    pub fn push_face(&mut self, face: &Face, uvs: &UvQuad) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(
            face.corners
                .iter()
                .zip(uvs.corners())
                .map(|(corner, uv)| Vertex::new(*corner, uv)),
        );
        self.indices.extend(Self::generate_face_indices(base));
    }

    /// Generates the index data for a face whose first vertex is `base`.
    ///
    /// # Returns
    /// Two triangles, `(0, 1, 3)` and `(1, 2, 3)` relative to `base`.
    pub fn generate_face_indices(base: u32) -> [u32; INDICES_PER_FACE] {
        [base, base + 1, base + 3, base + 1, base + 2, base + 3]
    }

    pub fn face_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_FACE
    }

    /// Number of indices, as passed to an indexed draw call.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The vertex buffer as raw bytes (`[x, y, z, u, v]` `f32`s per vertex).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Releases any capacity beyond what the mesh holds.
    pub fn shrink_to_fit(&mut self) {
        self.vertices.shrink_to_fit();
        self.indices.shrink_to_fit();
    }
}
