//! # Chunk Iteration Module
//!
//! This module splits a chunk's cells into the two sets the mesher walks:
//!
//! 1. the **interior**, every cell whose six neighbours are inside the same chunk;
//! 2. the **shell**, the one-voxel outer layer whose neighbours may live in an
//!    adjacent chunk.
//!
//! Both iterators yield positions in ascending `(x, y, z)` order. Together they
//! visit every cell of the chunk exactly once.

use cgmath::Point3;

use super::{CHUNK_HEIGHT, CHUNK_WIDTH};

/// Number of cells in the interior of a chunk.
pub const INTERIOR_SIZE: usize = (CHUNK_WIDTH - 2) * (CHUNK_HEIGHT - 2) * (CHUNK_WIDTH - 2);

/// Number of cells on the shell of a chunk.
pub const SHELL_SIZE: usize = CHUNK_WIDTH * CHUNK_HEIGHT * CHUNK_WIDTH - INTERIOR_SIZE;

/// Iterates the cells in `[1, W-2] x [1, H-2] x [1, W-2]`.
pub fn interior_positions() -> impl Iterator<Item = Point3<usize>> {
    (1..CHUNK_WIDTH - 1).flat_map(|x| {
        (1..CHUNK_HEIGHT - 1)
            .flat_map(move |y| (1..CHUNK_WIDTH - 1).map(move |z| Point3::new(x, y, z)))
    })
}

/// Iterates the cells with `x`, `y` or `z` on the chunk border.
///
/// A `(x, y)` column lying on the X or Y border is walked over its whole Z
/// range; any other column contributes only its two Z end cells.
pub fn shell_positions() -> impl Iterator<Item = Point3<usize>> {
    (0..CHUNK_WIDTH).flat_map(|x| {
        (0..CHUNK_HEIGHT).flat_map(move |y| {
            let whole_column =
                x == 0 || x == CHUNK_WIDTH - 1 || y == 0 || y == CHUNK_HEIGHT - 1;
            let step = if whole_column { 1 } else { CHUNK_WIDTH - 1 };
            (0..CHUNK_WIDTH)
                .step_by(step)
                .map(move |z| Point3::new(x, y, z))
        })
    })
}

/// Whether a local position lies on the chunk shell.
#[inline]
pub fn is_shell(local: Point3<usize>) -> bool {
    local.x == 0
        || local.x == CHUNK_WIDTH - 1
        || local.y == 0
        || local.y == CHUNK_HEIGHT - 1
        || local.z == 0
        || local.z == CHUNK_WIDTH - 1
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::engine_state::voxels::chunk::CHUNK_SIZE;

    #[test]
    fn interior_and_shell_partition_the_chunk() {
        let interior: Vec<_> = interior_positions().collect();
        let shell: Vec<_> = shell_positions().collect();
        assert_eq!(interior.len(), INTERIOR_SIZE);
        assert_eq!(shell.len(), SHELL_SIZE);

        let mut seen = HashSet::with_capacity(CHUNK_SIZE);
        for position in interior.iter().chain(shell.iter()) {
            assert!(seen.insert((position.x, position.y, position.z)));
        }
        assert_eq!(seen.len(), CHUNK_SIZE);
    }

    #[test]
    fn shell_iterator_only_yields_shell_cells() {
        assert!(shell_positions().all(is_shell));
        assert!(interior_positions().all(|p| !is_shell(p)));
    }

    #[test]
    fn iteration_is_ascending() {
        let key = |p: &Point3<usize>| (p.x, p.y, p.z);
        let shell: Vec<_> = shell_positions().map(|p| key(&p)).collect();
        assert!(shell.windows(2).all(|w| w[0] < w[1]));
        let interior: Vec<_> = interior_positions().map(|p| key(&p)).collect();
        assert!(interior.windows(2).all(|w| w[0] < w[1]));
    }
}
