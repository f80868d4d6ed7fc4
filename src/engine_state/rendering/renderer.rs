//! Renderer contract for chunk meshes.
//!
//! The engine never talks to a graphics API directly. It uploads each chunk
//! mesh once through a [`Renderer`], keeps the returned handle, and every
//! frame asks the renderer to draw the handles with their model transforms.
//!
//! [`HeadlessRenderer`] implements the contract without a GPU and records what
//! it was asked to do, which is what the command line application and the
//! tests use.
//!
//! # Winding
//!
//! Meshes are wound clockwise when seen from outside. A GPU renderer should set
//! its front face to clockwise (or cull the counter-clockwise faces).

use cgmath::Matrix4;
use log::debug;

use super::meshing::ChunkMesh;

/// A backend that can store chunk meshes and draw them.
pub trait Renderer {
    /// Identifies an uploaded mesh.
    type Handle;

    /// Copies the vertex and index buffers of `mesh` to the backend.
    fn upload(&mut self, mesh: &ChunkMesh) -> Self::Handle;

    /// Starts a frame seen through `view_projection`.
    fn begin_frame(&mut self, view_projection: Matrix4<f32>);

    /// Draws the first `index_count` indices of an uploaded mesh placed by `model`.
    fn draw(&mut self, handle: &Self::Handle, index_count: u32, model: Matrix4<f32>);

    /// Finishes the frame started by `begin_frame`.
    fn end_frame(&mut self);
}

/// Handle of a mesh uploaded to a [`HeadlessRenderer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HeadlessHandle(pub usize);

/// What one frame submitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_calls: usize,
    pub indices: u64,
}

/// Renderer that keeps statistics instead of talking to a GPU.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    uploads: usize,
    vertex_bytes: usize,
    index_bytes: usize,
    frames: usize,
    current: FrameStats,
    last_frame: Option<FrameStats>,
    in_frame: bool,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        HeadlessRenderer::default()
    }

    /// Number of meshes uploaded so far.
    pub fn uploads(&self) -> usize {
        self.uploads
    }

    /// Total size of uploaded vertex buffers in bytes.
    pub fn vertex_bytes(&self) -> usize {
        self.vertex_bytes
    }

    /// Total size of uploaded index buffers in bytes.
    pub fn index_bytes(&self) -> usize {
        self.index_bytes
    }

    /// Number of completed frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Statistics of the most recently completed frame.
    pub fn last_frame(&self) -> Option<FrameStats> {
        self.last_frame
    }
}

impl Renderer for HeadlessRenderer {
    type Handle = HeadlessHandle;

    fn upload(&mut self, mesh: &ChunkMesh) -> HeadlessHandle {
        let handle = HeadlessHandle(self.uploads);
        self.uploads += 1;
        self.vertex_bytes += mesh.vertex_bytes().len();
        self.index_bytes += mesh.index_bytes().len();
        debug!(
            "Uploaded mesh {:?}: {} vertices, {} indices",
            handle,
            mesh.vertices.len(),
            mesh.indices.len()
        );
        handle
    }

    fn begin_frame(&mut self, _view_projection: Matrix4<f32>) {
        self.current = FrameStats::default();
        self.in_frame = true;
    }

    fn draw(&mut self, handle: &HeadlessHandle, index_count: u32, _model: Matrix4<f32>) {
        debug_assert!(self.in_frame, "draw outside of a frame");
        debug_assert!(handle.0 < self.uploads, "unknown handle {handle:?}");
        self.current.draw_calls += 1;
        self.current.indices += u64::from(index_count);
    }

    fn end_frame(&mut self) {
        self.in_frame = false;
        self.frames += 1;
        self.last_frame = Some(self.current);
    }
}

#[cfg(test)]
mod tests {
    use cgmath::SquareMatrix;

    use super::*;
    use crate::engine_state::rendering::meshing::Face;
    use crate::engine_state::rendering::texture_atlas::UvQuad;
    use crate::engine_state::voxels::voxel::VoxelFace;

    #[test]
    fn uploads_and_frames_are_counted() {
        let mut mesh = ChunkMesh::new();
        mesh.push_face(&Face::new(0, 0, 0, VoxelFace::TOP), &UvQuad::BASE);

        let mut renderer = HeadlessRenderer::new();
        let first = renderer.upload(&mesh);
        let second = renderer.upload(&mesh);
        assert_ne!(first, second);
        assert_eq!(renderer.uploads(), 2);
        assert_eq!(renderer.vertex_bytes(), 2 * 4 * 20);
        assert_eq!(renderer.index_bytes(), 2 * 6 * 4);
        assert_eq!(renderer.last_frame(), None);

        renderer.begin_frame(Matrix4::identity());
        renderer.draw(&first, mesh.index_count(), Matrix4::identity());
        renderer.draw(&second, mesh.index_count(), Matrix4::identity());
        renderer.end_frame();

        assert_eq!(renderer.frames(), 1);
        assert_eq!(
            renderer.last_frame(),
            Some(FrameStats {
                draw_calls: 2,
                indices: 12
            })
        );
    }
}
