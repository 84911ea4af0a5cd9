//! Genetic Algorithm for 8-queens.
//!
//! A generational GA over column → row boards:
//!
//! 1. **Initialization**: `population_size` random boards
//! 2. **Evaluation**: conflict counts on the [`EvaluationPool`](crate::pool::EvaluationPool)
//! 3. **Goal check**: stop when the best board has zero conflicts
//! 4. **Breeding**: the top [`ELITE_COUNT`] boards survive unchanged; the
//!    rest are children of two roulette-selected parents, produced by
//!    single-point crossover and, with probability `mutation_rate`, reset
//!    mutation
//! 5. **Replacement**: the new generation replaces the old one wholesale
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, mutation rate, generation budget, parallelism
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best board of the last generation with run statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Russell & Norvig (2020), *Artificial Intelligence: A Modern Approach*, §4.1.4

mod config;
pub mod operators;
mod runner;

pub use config::{GaConfig, DEFAULT_MUTATION_RATE, ELITE_COUNT};
pub use runner::{GaResult, GaRunner, GenerationSnapshot, ScoredBoard};
