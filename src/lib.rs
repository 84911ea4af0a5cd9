//! Local and population search for the 8-queens problem.
//!
//! Three interchangeable strategies share one board representation and one
//! conflict-counting objective:
//!
//! - **Genetic Algorithm (GA)**: Population search with elitism,
//!   fitness-proportionate selection, single-point crossover and reset
//!   mutation. Fitness evaluation can run on a bounded rayon pool.
//! - **Hill Climbing**: Steepest-descent over every single-queen move.
//! - **Simulated Annealing (SA)**: One random neighbor per step with a
//!   geometric temperature schedule.
//!
//! The [`harness`] module repeats a strategy over fresh random boards and
//! reports elapsed time and success rate.
//!
//! # Randomness
//!
//! No solver touches process-wide random state. Every entry point takes an
//! explicit `&mut impl Rng`, so a seeded [`random::create_rng`] makes runs
//! reproducible.
//!
//! # Example
//!
//! ```
//! use u_nqueens::ga::{GaConfig, GaRunner};
//! use u_nqueens::random::create_rng;
//!
//! let mut rng = create_rng(7);
//! let config = GaConfig::default().with_max_generations(50);
//! let result = GaRunner::run(&config, &mut rng).unwrap();
//! assert!(result.generations <= 50);
//! ```

pub mod board;
pub mod error;
pub mod ga;
pub mod harness;
pub mod hill;
pub mod pool;
pub mod random;
pub mod sa;

pub use board::{Board, ConflictCount, Grid, N};
pub use error::{QueensError, Result};
