//! # Chunk Mesher
//!
//! Converts one chunk into a triangle mesh containing only the faces that can
//! be seen: a face is emitted when its voxel is solid and the voxel across the
//! face is `NONE`.
//!
//! ## Passes
//!
//! 1. **Interior**: cells whose six neighbours are all inside the chunk.
//! 2. **Boundary**: the outer shell, whose neighbours across the chunk border
//!    are read from the adjacent chunks of the world.
//!
//! Both passes share one face emission routine and differ only in the
//! [`NeighborLookup`] used to find the voxel across a face.
//!
//! ## Missing Neighbours
//!
//! A mesher created without a world treats everything outside the chunk as
//! `NONE`. With a world, missing chunks resolve to the world's empty sentinel,
//! which gives the same result.

use cgmath::Point3;

use crate::engine_state::rendering::texture_atlas::{UvOffsetScheme, UvQuad};
use crate::engine_state::voxels::chunk::chunk_iteration::{interior_positions, shell_positions};
use crate::engine_state::voxels::chunk::{Chunk, CHUNK_HEIGHT, CHUNK_WIDTH};
use crate::engine_state::voxels::voxel::{VoxelFace, VoxelType};
use crate::engine_state::voxels::world::{ChunkNeighbors, World};

use super::mesh::{ChunkMesh, Face};

/// Upper bound guess of emitted faces: half the chunk's cells showing every face.
const RESERVED_FACES: usize = CHUNK_WIDTH * CHUNK_WIDTH * CHUNK_HEIGHT * 6 / 2;

/// Resolves the type of the voxel across a face.
pub trait NeighborLookup {
    /// Type of the voxel adjacent to `local` across `face`.
    fn neighbor_type(&self, local: Point3<usize>, face: VoxelFace) -> VoxelType;
}

/// Neighbour lookup for cells whose neighbours never leave the chunk.
pub struct InteriorNeighbors<'a> {
    chunk: &'a Chunk,
}

impl NeighborLookup for InteriorNeighbors<'_> {
    #[inline]
    fn neighbor_type(&self, local: Point3<usize>, face: VoxelFace) -> VoxelType {
        match face.step_within_chunk(local) {
            Some(neighbor) => self.chunk.voxel_type_at(neighbor),
            None => {
                debug_assert!(false, "interior cell {local:?} stepped out across {face:?}");
                VoxelType::NONE
            }
        }
    }
}

/// Neighbour lookup for the chunk shell.
///
/// Steps inside the chunk read the chunk itself; steps across the border read
/// the touching cell of the adjacent chunk, or `NONE` when there is no world.
pub struct BoundaryNeighbors<'a> {
    chunk: &'a Chunk,
    neighbors: Option<ChunkNeighbors<'a>>,
}

impl NeighborLookup for BoundaryNeighbors<'_> {
    #[inline]
    fn neighbor_type(&self, local: Point3<usize>, face: VoxelFace) -> VoxelType {
        if let Some(neighbor) = face.step_within_chunk(local) {
            return self.chunk.voxel_type_at(neighbor);
        }

        match &self.neighbors {
            Some(neighbors) => neighbors
                .across(face)
                .voxel_type_at(face.mirror_into_neighbor(local)),
            None => VoxelType::NONE,
        }
    }
}

/// Builds the mesh of a single chunk.
///
/// The mesher only borrows: the chunk, the neighbour chunks and the UV scheme
/// must outlive it, and nothing is modified.
pub struct ChunkMesher<'a> {
    chunk: &'a Chunk,
    neighbors: Option<ChunkNeighbors<'a>>,
    uv_scheme: Option<&'a UvOffsetScheme>,
}

impl<'a> ChunkMesher<'a> {
    /// A mesher for `chunk` alone: everything outside it counts as empty.
    pub fn new(chunk: &'a Chunk) -> Self {
        ChunkMesher {
            chunk,
            neighbors: None,
            uv_scheme: None,
        }
    }

    /// Resolves and caches the six neighbours of the chunk from `world`.
    pub fn with_world(self, world: &'a World) -> Self {
        let neighbors = world.neighbors_of(self.chunk.position);
        self.with_neighbors(neighbors)
    }

    /// Uses an already resolved neighbour set.
    pub fn with_neighbors(mut self, neighbors: ChunkNeighbors<'a>) -> Self {
        self.neighbors = Some(neighbors);
        self
    }

    /// Texture coordinates come from `scheme` instead of the unit base quad.
    pub fn with_uv_scheme(mut self, scheme: &'a UvOffsetScheme) -> Self {
        self.uv_scheme = Some(scheme);
        self
    }

    /// Generates the mesh of the chunk.
    ///
    /// Repeated calls return identical buffers.
    pub fn generate_mesh(&self) -> ChunkMesh {
        let mut mesh = ChunkMesh::with_face_capacity(RESERVED_FACES);

        let interior = InteriorNeighbors { chunk: self.chunk };
        self.mesh_cells(&mut mesh, interior_positions(), &interior);

        let boundary = BoundaryNeighbors {
            chunk: self.chunk,
            neighbors: self.neighbors,
        };
        self.mesh_cells(&mut mesh, shell_positions(), &boundary);

        mesh.shrink_to_fit();
        mesh
    }

    fn mesh_cells(
        &self,
        mesh: &mut ChunkMesh,
        cells: impl Iterator<Item = Point3<usize>>,
        lookup: &impl NeighborLookup,
    ) {
        for local in cells {
            let voxel_type = self.chunk.voxel_type_at(local);
            if voxel_type == VoxelType::NONE {
                continue;
            }
            self.emit_visible_faces(mesh, local, voxel_type, lookup);
        }
    }

    /// Appends every face of the voxel at `local` whose neighbour is empty.
    fn emit_visible_faces(
        &self,
        mesh: &mut ChunkMesh,
        local: Point3<usize>,
        voxel_type: VoxelType,
        lookup: &impl NeighborLookup,
    ) {
        for face in VoxelFace::all() {
            if lookup.neighbor_type(local, face) != VoxelType::NONE {
                continue;
            }

            let uvs = match self.uv_scheme {
                Some(scheme) => scheme.get(voxel_type).face(face),
                None => &UvQuad::BASE,
            };
            mesh.push_face(&Face::new(local.x, local.y, local.z, face), uvs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::position::ChunkPosition;
    use crate::engine_state::voxels::world::WorldSize;

    const FULL_CHUNK_FACES: usize =
        2 * (CHUNK_WIDTH * CHUNK_HEIGHT * 2) + 2 * (CHUNK_WIDTH * CHUNK_WIDTH);

    #[test]
    fn solid_chunk_only_shows_its_hull() {
        let chunk = Chunk::filled(ChunkPosition::ORIGIN, VoxelType::STONE);
        let mesh = ChunkMesher::new(&chunk).generate_mesh();

        assert_eq!(FULL_CHUNK_FACES, 16896);
        assert_eq!(mesh.face_count(), FULL_CHUNK_FACES);
        assert_eq!(mesh.vertices.len(), 67584);
        assert_eq!(mesh.indices.len(), 101376);
    }

    #[test]
    fn empty_chunk_has_no_geometry() {
        let chunk = Chunk::new(ChunkPosition::ORIGIN);
        let mesh = ChunkMesher::new(&chunk).generate_mesh();
        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
    }

    #[test]
    fn single_voxel_shows_six_faces() {
        for (x, y, z) in [(0, 0, 0), (7, 100, 7), (15, 255, 15)] {
            let mut chunk = Chunk::new(ChunkPosition::ORIGIN);
            chunk.set(x, y, z, VoxelType::CRATE);
            let mesh = ChunkMesher::new(&chunk).generate_mesh();
            assert_eq!(mesh.face_count(), 6);
        }
    }

    #[test]
    fn touching_voxels_hide_their_shared_faces() {
        let mut chunk = Chunk::new(ChunkPosition::ORIGIN);
        chunk.set(4, 4, 4, VoxelType::DIRT);
        chunk.set(5, 4, 4, VoxelType::DIRT);
        chunk.set(15, 0, 0, VoxelType::DIRT);
        chunk.set(15, 1, 0, VoxelType::DIRT);
        let mesh = ChunkMesher::new(&chunk).generate_mesh();
        assert_eq!(mesh.face_count(), 2 * 10);
    }

    #[test]
    fn boundary_reads_the_adjacent_chunk() {
        let mut world = World::new(WorldSize::new(2, 1, 2).unwrap());
        let chunk = Chunk::filled(ChunkPosition::ORIGIN, VoxelType::STONE);
        let mut right = Chunk::new(ChunkPosition::new(1, 0, 0));
        right.set(0, 10, 3, VoxelType::STONE);
        world.register(right);

        let mesh = ChunkMesher::new(&chunk).with_world(&world).generate_mesh();
        assert_eq!(mesh.face_count(), FULL_CHUNK_FACES - 1);
    }

    #[test]
    fn scheme_uvs_are_applied_per_face() {
        let scheme = UvOffsetScheme::with_width(64, 16).unwrap();
        let mut chunk = Chunk::new(ChunkPosition::ORIGIN);
        chunk.set(3, 3, 3, VoxelType::GRASS);
        let mesh = ChunkMesher::new(&chunk)
            .with_uv_scheme(&scheme)
            .generate_mesh();

        let grass = scheme.get(VoxelType::GRASS);
        // Faces come out in `VoxelFace::all()` order: FRONT, BACK, BOTTOM, TOP, ...
        let top = &mesh.vertices[3 * 4..4 * 4];
        let expected = grass.top.corners();
        for (vertex, uv) in top.iter().zip(expected) {
            assert_eq!(vertex.tex_coords, [uv.u, uv.v]);
        }
        assert_eq!(top[0].position, [4.0, 4.0, 3.0]);
    }
}
