//! Board representation.
//!
//! A [`Board`] stores one row index per column, so "exactly one queen per
//! column" holds by construction. Rows are range-checked when a board is
//! built from untrusted input; every operation that derives a new board
//! ([`with_queen`](Board::with_queen), [`splice`](Board::splice)) returns a
//! fresh value and leaves the receiver untouched.
//!
//! # Submodules
//!
//! - [`conflicts`]: Attacking-pair counting and fitness
//! - [`neighbors`]: Single-queen-move neighborhoods

pub mod conflicts;
pub mod neighbors;

use std::fmt;

use rand::Rng;

use crate::error::{QueensError, Result};

pub use conflicts::{count_attacking_pairs, count_grid_attacking_pairs, fitness, fitness_from_conflicts};
pub use neighbors::{neighbors, random_neighbor};

/// Board side length (number of queens).
pub const N: usize = 8;

/// Number of distinct attacking queen pairs on a board.
pub type ConflictCount = u32;

/// Row-major 0/1 grid, `grid[row][col] == 1` marks a queen.
pub type Grid = [[u8; N]; N];

/// A placement of N queens, one per column.
///
/// `rows[col]` is the row of the queen in column `col`, always in `0..N`.
///
/// # Examples
///
/// ```
/// use u_nqueens::Board;
///
/// let board = Board::new([0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
/// assert_eq!(board.conflicts(), 0);
/// assert!(board.is_solution());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[u8; N]", into = "[u8; N]")
)]
pub struct Board {
    rows: [u8; N],
}

impl Board {
    /// Creates a board from a column → row mapping.
    ///
    /// Returns [`QueensError::InvalidBoard`] if any row is `>= N`.
    pub fn new(rows: [u8; N]) -> Result<Self> {
        if let Some((col, &row)) = rows.iter().enumerate().find(|(_, &r)| r as usize >= N) {
            return Err(QueensError::InvalidBoard(format!(
                "row {row} in column {col} is outside 0..{N}"
            )));
        }
        Ok(Self { rows })
    }

    /// Places one queen per column at a uniformly random row.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut rows = [0u8; N];
        for row in rows.iter_mut() {
            *row = rng.random_range(0..N as u8);
        }
        Self { rows }
    }

    /// Builds a board from a 0/1 grid.
    ///
    /// Fails unless every column holds exactly one queen.
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let mut rows = [0u8; N];
        for (col, slot) in rows.iter_mut().enumerate() {
            let mut occupied = (0..N).filter(|&row| grid[row][col] != 0);
            match (occupied.next(), occupied.next()) {
                (Some(row), None) => *slot = row as u8,
                (None, _) => {
                    return Err(QueensError::InvalidBoard(format!(
                        "column {col} has no queen"
                    )))
                }
                (Some(_), Some(_)) => {
                    return Err(QueensError::InvalidBoard(format!(
                        "column {col} has more than one queen"
                    )))
                }
            }
        }
        Ok(Self { rows })
    }

    /// Row of the queen in column `col`.
    ///
    /// # Panics
    /// Panics if `col >= N`.
    #[inline]
    pub fn row(&self, col: usize) -> usize {
        self.rows[col] as usize
    }

    /// The column → row mapping.
    #[inline]
    pub fn rows(&self) -> [u8; N] {
        self.rows
    }

    /// Returns a copy with the queen in `col` moved to `row`.
    ///
    /// Moving a queen to the row it already occupies yields an equal board.
    ///
    /// # Panics
    /// Panics if `col >= N` or `row >= N`.
    pub fn with_queen(&self, col: usize, row: usize) -> Self {
        assert!(col < N, "column {col} out of range");
        assert!(row < N, "row {row} out of range");
        let mut rows = self.rows;
        rows[col] = row as u8;
        Self { rows }
    }

    /// Single-point splice: columns `0..=point` from `self`, the rest from
    /// `other`.
    ///
    /// With `point == N - 1` the result equals `self`.
    ///
    /// # Panics
    /// Panics if `point >= N`.
    pub fn splice(&self, other: &Board, point: usize) -> Self {
        assert!(point < N, "crossover point {point} out of range");
        let mut rows = self.rows;
        rows[point + 1..].copy_from_slice(&other.rows[point + 1..]);
        Self { rows }
    }

    /// Number of attacking pairs on this board.
    #[inline]
    pub fn conflicts(&self) -> ConflictCount {
        count_attacking_pairs(self)
    }

    /// `1 / (1 + conflicts)`.
    #[inline]
    pub fn fitness(&self) -> f64 {
        fitness(self)
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// Expands the board into a row-major 0/1 grid.
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[0u8; N]; N];
        for (col, &row) in self.rows.iter().enumerate() {
            grid[row as usize][col] = 1;
        }
        grid
    }
}

impl TryFrom<[u8; N]> for Board {
    type Error = QueensError;

    fn try_from(rows: [u8; N]) -> Result<Self> {
        Board::new(rows)
    }
}

impl From<Board> for [u8; N] {
    fn from(board: Board) -> Self {
        board.rows
    }
}

/// Renders N lines of space-separated `0`/`1` cells followed by a blank line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_grid() {
            let cells: Vec<String> = line.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    const SOLUTION: [u8; N] = [0, 4, 7, 5, 2, 6, 1, 3];

    #[test]
    fn test_new_rejects_out_of_range_row() {
        let err = Board::new([0, 1, 2, 3, 4, 5, 6, 8]).unwrap_err();
        assert!(matches!(err, QueensError::InvalidBoard(_)));
    }

    #[test]
    fn test_known_solution() {
        let board = Board::new(SOLUTION).unwrap();
        assert_eq!(board.conflicts(), 0);
        assert!(board.is_solution());
        assert!((board.fitness() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_random_rows_in_range() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let board = Board::random(&mut rng);
            assert!(board.rows().iter().all(|&r| (r as usize) < N));
        }
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = Board::random(&mut create_rng(9));
        let b = Board::random(&mut create_rng(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_queen_leaves_original() {
        let board = Board::new(SOLUTION).unwrap();
        let moved = board.with_queen(2, 0);
        assert_eq!(board.row(2), 7);
        assert_eq!(moved.row(2), 0);
        for col in (0..N).filter(|&c| c != 2) {
            assert_eq!(moved.row(col), board.row(col));
        }
    }

    #[test]
    fn test_with_queen_same_row_is_noop() {
        let board = Board::new(SOLUTION).unwrap();
        assert_eq!(board.with_queen(3, 5), board);
    }

    #[test]
    #[should_panic(expected = "row 8 out of range")]
    fn test_with_queen_bad_row_panics() {
        Board::new(SOLUTION).unwrap().with_queen(0, 8);
    }

    #[test]
    fn test_splice_last_point_is_first_parent() {
        let a = Board::new(SOLUTION).unwrap();
        let b = Board::new([7; N]).unwrap();
        assert_eq!(a.splice(&b, N - 1), a);
    }

    #[test]
    fn test_grid_roundtrip() {
        let board = Board::new(SOLUTION).unwrap();
        let grid = board.to_grid();
        assert_eq!(grid.iter().flatten().filter(|&&c| c == 1).count(), N);
        assert_eq!(Board::from_grid(&grid).unwrap(), board);
    }

    #[test]
    fn test_from_grid_empty_column() {
        let mut grid = Board::new(SOLUTION).unwrap().to_grid();
        grid[0][0] = 0;
        let err = Board::from_grid(&grid).unwrap_err();
        assert_eq!(err, QueensError::InvalidBoard("column 0 has no queen".into()));
    }

    #[test]
    fn test_from_grid_double_column() {
        let mut grid = Board::new(SOLUTION).unwrap().to_grid();
        grid[5][0] = 1;
        let err = Board::from_grid(&grid).unwrap_err();
        assert_eq!(
            err,
            QueensError::InvalidBoard("column 0 has more than one queen".into())
        );
    }

    #[test]
    fn test_display_format() {
        let board = Board::new(SOLUTION).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        // N rows, the blank line, and the empty tail after the final newline
        assert_eq!(lines.len(), N + 2);
        assert_eq!(lines[0], "1 0 0 0 0 0 0 0");
        assert_eq!(lines[1], "0 0 0 0 0 0 1 0");
        assert_eq!(lines[N], "");
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_try_from_array() {
        let board: Board = SOLUTION.try_into().unwrap();
        let rows: [u8; N] = board.into();
        assert_eq!(rows, SOLUTION);
        assert!(Board::try_from([9u8; N]).is_err());
    }

    proptest! {
        #[test]
        fn prop_splice_splits_columns(
            a in proptest::array::uniform8(0u8..8),
            b in proptest::array::uniform8(0u8..8),
            point in 0usize..N,
        ) {
            let p1 = Board::new(a).unwrap();
            let p2 = Board::new(b).unwrap();
            let child = p1.splice(&p2, point);
            for col in 0..N {
                let expected = if col <= point { p1.row(col) } else { p2.row(col) };
                prop_assert_eq!(child.row(col), expected);
            }
            prop_assert!(Board::from_grid(&child.to_grid()).is_ok());
        }
    }
}
