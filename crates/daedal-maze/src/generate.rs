//! Randomized depth-first maze carving ("recursive backtracker").
//!
//! [`generate`] carves a perfect maze into a fresh [`Grid`]:
//!
//! 1. Every cell starts with all four walls present, unvisited.
//! 2. The center cell `(cols / 2, rows / 2)` is marked visited and pushed
//!    onto an explicit stack.
//! 3. Each iteration pops the top cell and scans its unvisited orthogonal
//!    neighbors in up/right/down/left order. With no candidates the pop
//!    stands (backtrack). Otherwise the cell is pushed back, one candidate
//!    is chosen uniformly at random, the shared wall is knocked down on both
//!    sides, and the chosen cell is marked visited and pushed.
//! 4. When the stack empties, the carved passages form a spanning tree over
//!    the grid: exactly one path between any two cells, `cols * rows - 1`
//!    carved edges, no cycles.
//! 5. Post-pass: the center cell's OWN top and bottom flags are force-
//!    cleared so the start region always has an open passage. The adjacent
//!    cells' mirror flags are left untouched, so those two edges may end up
//!    asymmetric.
//!
//! Determinism: the output is fully determined by `(cols, rows)` and the RNG
//! stream. [`generate_seeded`] layers a [`Pcg64Mcg`] on top for reproducible
//! mazes; [`generate_random`] draws from thread-local entropy.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::grid::{Grid, WallSide};

/// Carve a perfect maze with the supplied random source.
///
/// # Panics
///
/// Panics if either dimension is zero (see [`Grid::new`]). The generator
/// does not self-validate beyond that precondition.
pub fn generate<R: Rng + ?Sized>(cols: usize, rows: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::new(cols, rows);
    let (cx, cy) = grid.center();
    grid.mark_visited(cx, cy);
    let mut stack = vec![(cx, cy)];

    while let Some((x, y)) = stack.pop() {
        let mut candidates: Vec<(WallSide, usize, usize)> = Vec::with_capacity(4);
        for side in WallSide::ALL {
            if let Some((nx, ny)) = grid.neighbor(x, y, side) {
                if !grid.cell(nx, ny).visited {
                    candidates.push((side, nx, ny));
                }
            }
        }

        if candidates.is_empty() {
            // Dead end: leave the cell popped and backtrack.
            continue;
        }

        stack.push((x, y));
        let (side, nx, ny) = candidates[rng.gen_range(0..candidates.len())];
        grid.mark_visited(nx, ny);
        grid.carve(x, y, side);
        stack.push((nx, ny));
    }

    // Guarantee an open passage through the start region regardless of how
    // the carve went. Only the center cell's own flags are cleared.
    grid.open_wall(cx, cy, WallSide::Top);
    grid.open_wall(cx, cy, WallSide::Bottom);

    grid
}

/// Carve a reproducible maze from a 64-bit seed.
pub fn generate_seeded(cols: usize, rows: usize, seed: u64) -> Grid {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    generate(cols, rows, &mut rng)
}

/// Carve a maze from thread-local entropy: a different perfect maze each call.
pub fn generate_random(cols: usize, rows: usize) -> Grid {
    generate(cols, rows, &mut rand::thread_rng())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_terminates_immediately() {
        let grid = generate_seeded(1, 1, 7);
        let cell = grid.cell(0, 0);
        // No neighbors to carve toward; the post-pass opens top and bottom.
        assert!(!cell.wall(WallSide::Top));
        assert!(!cell.wall(WallSide::Bottom));
        assert!(cell.wall(WallSide::Left));
        assert!(cell.wall(WallSide::Right));
        assert!(cell.visited);
    }

    #[test]
    fn every_cell_visited() {
        let grid = generate_seeded(5, 7, 42);
        assert!(grid.cells().all(|c| c.visited));
    }

    #[test]
    fn perfect_maze_edge_count() {
        let grid = generate_seeded(6, 6, 3);
        assert_eq!(grid.carved_edge_count(), 6 * 6 - 1);
    }

    #[test]
    fn center_post_pass_clears_own_flags_only() {
        let grid = generate_seeded(4, 4, 99);
        let (cx, cy) = grid.center();
        let center = grid.cell(cx, cy);
        assert!(!center.wall(WallSide::Top));
        assert!(!center.wall(WallSide::Bottom));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate_seeded(8, 8, 1234);
        let b = generate_seeded(8, 8, 1234);
        assert_eq!(a, b, "seeded generation must be reproducible");
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_seeded(8, 8, 1);
        let b = generate_seeded(8, 8, 2);
        assert_ne!(a, b, "distinct seeds should carve distinct mazes");
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be >= 1")]
    fn zero_dimension_panics() {
        let _grid = generate_seeded(0, 3, 0);
    }
}
