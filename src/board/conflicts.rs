//! Attacking-pair counting.
//!
//! Two queens attack when they share a row, a column or a diagonal
//! (`|Δrow| == |Δcol|`). Each unordered pair is counted once.

use super::{Board, ConflictCount, Grid, N};

/// Counts attacking pairs on a board.
///
/// Columns are distinct by construction, so only rows and diagonals are
/// checked. O(N²).
pub fn count_attacking_pairs(board: &Board) -> ConflictCount {
    let rows = board.rows();
    let mut pairs = 0;
    for i in 0..N {
        for j in (i + 1)..N {
            let (a, b) = (rows[i] as usize, rows[j] as usize);
            if a == b || a.abs_diff(b) == j - i {
                pairs += 1;
            }
        }
    }
    pairs
}

/// Counts attacking pairs on an arbitrary 0/1 grid.
///
/// Unlike [`count_attacking_pairs`] this makes no assumption about the
/// number of queens per column, so column sharing is checked too. Any
/// non-zero cell is a queen.
pub fn count_grid_attacking_pairs(grid: &Grid) -> ConflictCount {
    let queens: Vec<(usize, usize)> = (0..N)
        .flat_map(|row| (0..N).map(move |col| (row, col)))
        .filter(|&(row, col)| grid[row][col] != 0)
        .collect();

    let mut pairs = 0;
    for (i, &(r1, c1)) in queens.iter().enumerate() {
        for &(r2, c2) in &queens[i + 1..] {
            if r1 == r2 || c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2) {
                pairs += 1;
            }
        }
    }
    pairs
}

/// Selection weight derived from a conflict count: `1 / (1 + conflicts)`.
#[inline]
pub fn fitness_from_conflicts(conflicts: ConflictCount) -> f64 {
    1.0 / (1.0 + conflicts as f64)
}

/// `1 / (1 + count_attacking_pairs(board))`, in `(0, 1]`.
#[inline]
pub fn fitness(board: &Board) -> f64 {
    fitness_from_conflicts(count_attacking_pairs(board))
}
