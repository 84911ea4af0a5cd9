//! Crossover and mutation for column → row boards.
//!
//! Both operators return new boards. Since a board stores exactly one row
//! per column, any splice of two valid parents and any single-column reset
//! is again a valid board.

use rand::Rng;

use crate::board::{random_neighbor, Board, N};

/// Single-point column crossover.
///
/// Draws a crossover point `c` uniformly from `0..N`; the child takes
/// columns `0..=c` from `parent1` and `c+1..N` from `parent2`. With
/// `c == N - 1` the child is a copy of `parent1`.
pub fn single_point_crossover<R: Rng>(parent1: &Board, parent2: &Board, rng: &mut R) -> Board {
    let point = rng.random_range(0..N);
    parent1.splice(parent2, point)
}

/// Reset mutation: a uniformly random column gets its queen placed at a
/// uniformly random row.
///
/// The drawn row may equal the current one, leaving the board unchanged.
pub fn reset_mutation<R: Rng>(board: &Board, rng: &mut R) -> Board {
    random_neighbor(board, rng)
}
