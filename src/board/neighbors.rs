//! Single-queen-move neighborhoods.

use rand::Rng;

use super::{Board, N};

/// Size of the full neighborhood: every queen to every other row.
pub const NEIGHBORHOOD_SIZE: usize = N * (N - 1);

/// Every board reachable by moving one queen within its column.
///
/// Ordered by column, then by target row, both ascending. The queen's
/// current row is skipped, so the result has exactly
/// [`NEIGHBORHOOD_SIZE`] distinct boards.
pub fn neighbors(board: &Board) -> Vec<Board> {
    let mut out = Vec::with_capacity(NEIGHBORHOOD_SIZE);
    for col in 0..N {
        let current = board.row(col);
        for row in (0..N).filter(|&r| r != current) {
            out.push(board.with_queen(col, row));
        }
    }
    out
}

/// Moves the queen of a uniformly random column to a uniformly random row.
///
/// The row may equal the current one, in which case the returned board
/// equals the input.
pub fn random_neighbor<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let col = rng.random_range(0..N);
    let row = rng.random_range(0..N);
    board.with_queen(col, row)
}
