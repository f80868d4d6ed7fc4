use proptest::prelude::*;
use voxel_world::engine_state::voxels::chunk::{Chunk, CHUNK_HEIGHT, CHUNK_WIDTH};
use voxel_world::engine_state::voxels::position::{ChunkPosition, Position};

fn coord() -> impl Strategy<Value = i32> {
    -1_000_000i32..=1_000_000
}

// full range, with the extremes drawn often
fn any_coord() -> impl Strategy<Value = i32> {
    prop_oneof![
        Just(i32::MIN),
        Just(i32::MAX),
        Just(-1),
        Just(0),
        any::<i32>(),
    ]
}

fn divisor() -> impl Strategy<Value = i32> {
    prop_oneof![Just(-1), Just(0), -64i32..=64]
}

proptest! {
    // world -> (chunk, local) -> world is the identity, negatives included
    #[test]
    fn world_chunk_round_trip(x in coord(), y in coord(), z in coord()) {
        let position = Position::new(x, y, z);
        let chunk = ChunkPosition::from_world_pos(position);
        let local = position.local_in_chunk();

        prop_assert!(local.x < CHUNK_WIDTH && local.y < CHUNK_HEIGHT && local.z < CHUNK_WIDTH);
        prop_assert_eq!(
            chunk.to_world_pos(local.x as i32, local.y as i32, local.z as i32),
            position
        );
    }

    // the chunk of a position is the floor of the division, so its origin is never past it
    #[test]
    fn chunk_origin_is_at_or_below_position(x in coord(), y in coord(), z in coord()) {
        let position = Position::new(x, y, z);
        let origin = ChunkPosition::from_world_pos(position).to_world_pos(0, 0, 0);
        prop_assert!(origin.x <= x && x - origin.x < Chunk::WIDTH);
        prop_assert!(origin.y <= y && y - origin.y < Chunk::HEIGHT);
        prop_assert!(origin.z <= z && z - origin.z < Chunk::WIDTH);
    }

    // division truncates toward zero; a zero divisor or an overflowing
    // quotient is an invalid argument, never a panic
    #[test]
    fn checked_div_truncates(x in any_coord(), y in any_coord(), z in any_coord(), d in divisor()) {
        let result = ChunkPosition::new(x, y, z).checked_div(d);
        match (x.checked_div(d), y.checked_div(d), z.checked_div(d)) {
            (Some(qx), Some(qy), Some(qz)) => {
                prop_assert_eq!(result.unwrap(), ChunkPosition::new(qx, qy, qz));
            }
            _ => prop_assert!(result.unwrap_err().is_invalid_argument()),
        }
    }
}

#[test]
fn checked_div_of_min_by_minus_one_is_an_error() {
    for position in [
        ChunkPosition::new(i32::MIN, 0, 0),
        ChunkPosition::new(3, i32::MIN, 7),
        ChunkPosition::new(0, 0, i32::MIN),
    ] {
        let err = position.checked_div(-1).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
