//! Simulated Annealing (SA).
//!
//! A single-board trajectory search. Each step draws one random
//! single-queen move; improving moves are always taken, worsening moves
//! with the Metropolis probability `exp(-delta / T)`. The temperature `T`
//! cools geometrically after every step.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{acceptance_probability, SaResult, SaRunner};
