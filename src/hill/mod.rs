//! Steepest-ascent hill climbing.
//!
//! From the current board, every single-queen move is evaluated and the
//! strictly best improving one is taken. The search stops at the first
//! board none of whose neighbors is strictly better: either a solution or
//! a local optimum. There are no sideways moves and no restarts.
//!
//! # References
//!
//! - Russell & Norvig (2020), *Artificial Intelligence: A Modern Approach*, §4.1.1

mod runner;

pub use runner::{HcResult, HillClimbRunner};
