use voxel_world::engine_state::voxels::chunk::{Chunk, CHUNK_HEIGHT, CHUNK_WIDTH};
use voxel_world::engine_state::voxels::position::ChunkPosition;
use voxel_world::engine_state::voxels::terrain::{TerrainConfig, TerrainGenerator};
use voxel_world::engine_state::voxels::voxel::VoxelType;

fn generator(seed: u32) -> TerrainGenerator {
    TerrainGenerator::new(TerrainConfig {
        seed,
        ..TerrainConfig::default()
    })
}

#[test]
fn same_seed_and_position_give_identical_chunks() {
    let position = ChunkPosition::new(5, 0, -3);
    let a = generator(123456).generate(position);
    let b = generator(123456).generate(position);
    assert_eq!(a, b);
}

#[test]
fn populate_overwrites_previous_contents() {
    let generator = generator(123456);
    let mut chunk = Chunk::filled(ChunkPosition::new(1, 0, 1), VoxelType::GLASS);
    generator.populate(&mut chunk);
    assert_eq!(chunk, generator.generate(ChunkPosition::new(1, 0, 1)));
}

#[test]
fn columns_are_layered_from_their_surface_height() {
    let generator = generator(99);
    let position = ChunkPosition::new(2, 0, 7);
    let chunk = generator.generate(position);

    for x in 0..CHUNK_WIDTH {
        for z in 0..CHUNK_WIDTH {
            let height = generator.surface_height(position, x, z) as usize;
            assert!(height >= 3, "default min height leaves no beach");

            assert_eq!(chunk.voxel_type(x, height - 1, z), VoxelType::GRASS);
            assert_eq!(chunk.voxel_type(x, height - 2, z), VoxelType::DIRT);
            assert_eq!(chunk.voxel_type(x, height - 3, z), VoxelType::DIRT);
            if height > 3 {
                assert_eq!(chunk.voxel_type(x, 0, z), VoxelType::STONE);
            }
            for y in height..CHUNK_HEIGHT {
                assert_eq!(chunk.voxel_type(x, y, z), VoxelType::NONE);
            }
        }
    }
}

#[test]
fn zero_min_height_makes_the_origin_column_beach() {
    let generator = TerrainGenerator::new(TerrainConfig {
        min_height: 0,
        scale: 0.0,
        ..TerrainConfig::default()
    });
    // A zero scale samples noise at the origin for every column, where
    // Perlin noise is zero.
    let height = generator.surface_height(ChunkPosition::ORIGIN, 0, 0);
    assert!(height < 3, "origin column should be beach, got height {height}");

    let chunk = generator.generate(ChunkPosition::ORIGIN);
    for y in 0..=height as usize {
        assert_eq!(chunk.voxel_type(0, y, 0), VoxelType::SAND);
    }
    assert_eq!(chunk.voxel_type(0, height as usize + 1, 0), VoxelType::NONE);
}
