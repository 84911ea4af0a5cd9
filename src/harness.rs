//! Batch harness: repeat a strategy and measure it.
//!
//! Each run starts from fresh randomness (a new random board for hill
//! climbing and annealing, a new random population for the GA). The report
//! carries wall-clock time and the fraction of runs that ended with zero
//! conflicts.

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::board::{Board, ConflictCount};
use crate::error::{QueensError, Result};
use crate::ga::{GaConfig, GaRunner};
use crate::hill::HillClimbRunner;
use crate::sa::{SaConfig, SaRunner};

/// A search strategy with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Genetic Algorithm over a random population.
    Evolutionary(GaConfig),
    /// Steepest-ascent hill climbing from a random board.
    HillClimbing,
    /// Simulated annealing from a random board.
    Annealing(SaConfig),
}

/// Outcome of a single strategy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Starting board, for strategies that walk from one.
    pub initial: Option<Board>,
    /// Board returned by the solver.
    pub board: Board,
    /// Conflicts of `board`.
    pub conflicts: ConflictCount,
}

impl RunOutcome {
    /// Whether the run found a solution.
    pub fn solved(&self) -> bool {
        self.conflicts == 0
    }
}

impl Strategy {
    /// Human-readable strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Evolutionary(_) => "Genetic Algorithm",
            Strategy::HillClimbing => "Hill-Climbing",
            Strategy::Annealing(_) => "Simulated Annealing",
        }
    }

    /// Checks the strategy's parameters without running it.
    pub fn validate(&self) -> Result<()> {
        match self {
            Strategy::Evolutionary(config) => config.validate(),
            Strategy::HillClimbing => Ok(()),
            Strategy::Annealing(config) => config.validate(),
        }
    }

    /// Runs the strategy once with fresh randomness from `rng`.
    pub fn solve<R: Rng>(&self, rng: &mut R) -> Result<RunOutcome> {
        match self {
            Strategy::Evolutionary(config) => {
                let result = GaRunner::run(config, rng)?;
                Ok(RunOutcome {
                    initial: None,
                    board: result.best,
                    conflicts: result.best_conflicts,
                })
            }
            Strategy::HillClimbing => {
                let initial = Board::random(rng);
                let result = HillClimbRunner::run(initial);
                Ok(RunOutcome {
                    initial: Some(initial),
                    board: result.board,
                    conflicts: result.conflicts,
                })
            }
            Strategy::Annealing(config) => {
                let initial = Board::random(rng);
                let result = SaRunner::run(initial, config, rng)?;
                Ok(RunOutcome {
                    initial: Some(initial),
                    board: result.board,
                    conflicts: result.conflicts,
                })
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate statistics of a batch.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Name of the strategy measured.
    pub strategy: &'static str,
    /// Number of runs executed.
    pub runs: usize,
    /// Runs that ended with zero conflicts.
    pub successes: usize,
    /// Wall-clock time of the whole batch.
    pub elapsed: Duration,
    /// Sum of final conflict counts over all runs.
    pub total_conflicts: u64,
}

impl BatchReport {
    /// `successes / runs`.
    pub fn success_rate(&self) -> f64 {
        self.successes as f64 / self.runs as f64
    }

    /// Mean conflicts of the returned boards.
    pub fn mean_conflicts(&self) -> f64 {
        self.total_conflicts as f64 / self.runs as f64
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Performance: Time = {:.2}s, Success Rate = {:.2}%",
            self.strategy,
            self.elapsed.as_secs_f64(),
            self.success_rate() * 100.0
        )
    }
}

/// Runs `strategy` `runs` times and reports elapsed time and success rate.
///
/// Returns [`QueensError::InvalidConfiguration`] for zero runs or invalid
/// strategy parameters; both are checked before the clock starts.
///
/// # Examples
///
/// ```
/// use u_nqueens::harness::{run_batch, Strategy};
/// use u_nqueens::random::create_rng;
///
/// let report = run_batch(&Strategy::HillClimbing, 20, &mut create_rng(1)).unwrap();
/// assert_eq!(report.runs, 20);
/// assert!(report.success_rate() <= 1.0);
/// ```
pub fn run_batch<R: Rng>(strategy: &Strategy, runs: usize, rng: &mut R) -> Result<BatchReport> {
    if runs == 0 {
        return Err(QueensError::InvalidConfiguration(
            "runs must be at least 1".into(),
        ));
    }
    strategy.validate()?;

    let start = Instant::now();
    let mut successes = 0usize;
    let mut total_conflicts = 0u64;
    for _ in 0..runs {
        let outcome = strategy.solve(rng)?;
        if outcome.solved() {
            successes += 1;
        }
        total_conflicts += u64::from(outcome.conflicts);
    }

    let report = BatchReport {
        strategy: strategy.name(),
        runs,
        successes,
        elapsed: start.elapsed(),
        total_conflicts,
    };
    info!(
        strategy = report.strategy,
        runs,
        successes,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "batch finished"
    );
    Ok(report)
}
