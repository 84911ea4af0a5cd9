//! SA execution loop.

use rand::Rng;
use tracing::{debug, trace};

use super::config::SaConfig;
use crate::board::{random_neighbor, Board, ConflictCount};
use crate::error::Result;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The returned board: the final state, or the best seen when
    /// [`SaConfig::return_best`] is set.
    pub board: Board,

    /// Conflicts of `board`.
    pub conflicts: ConflictCount,

    /// Conflicts of the board the walk ended on.
    pub final_conflicts: ConflictCount,

    /// Lowest conflict count visited during the run.
    pub best_conflicts: ConflictCount,

    /// Steps executed (neighbor evaluations).
    pub steps: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,
}

impl SaResult {
    /// Whether the returned board is a solution.
    pub fn solved(&self) -> bool {
        self.conflicts == 0
    }
}

/// Metropolis acceptance probability for a non-improving move.
///
/// `exp(-delta / temperature)`. A sideways move (`delta == 0`) is always
/// accepted; a worsening move at non-positive temperature never is.
pub fn acceptance_probability(delta: ConflictCount, temperature: f64) -> f64 {
    if delta == 0 {
        1.0
    } else if temperature > 0.0 {
        (-(delta as f64) / temperature).exp()
    } else {
        0.0
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Anneals from `initial` for at most `config.max_steps` steps.
    ///
    /// Stops early once the current board has zero conflicts.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::random::create_rng;
    /// use u_nqueens::sa::{SaConfig, SaRunner};
    /// use u_nqueens::Board;
    ///
    /// let mut rng = create_rng(42);
    /// let start = Board::random(&mut rng);
    /// let result = SaRunner::run(start, &SaConfig::default(), &mut rng).unwrap();
    /// assert!(result.steps <= 1000);
    /// ```
    pub fn run<R: Rng>(initial: Board, config: &SaConfig, rng: &mut R) -> Result<SaResult> {
        config.validate()?;

        let mut current = initial;
        let mut current_conflicts = initial.conflicts();
        let mut best = current;
        let mut best_conflicts = current_conflicts;

        let mut temperature = config.initial_temperature;
        let mut steps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while steps < config.max_steps && current_conflicts > 0 {
            let neighbor = random_neighbor(&current, rng);
            let neighbor_conflicts = neighbor.conflicts();

            // Metropolis acceptance criterion
            let accept = if neighbor_conflicts < current_conflicts {
                improving_moves += 1;
                true
            } else {
                let delta = neighbor_conflicts - current_conflicts;
                rng.random_range(0.0..1.0) < acceptance_probability(delta, temperature)
            };

            if accept {
                current = neighbor;
                current_conflicts = neighbor_conflicts;
                accepted_moves += 1;

                if current_conflicts < best_conflicts {
                    best = current;
                    best_conflicts = current_conflicts;
                    trace!(step = steps, conflicts = best_conflicts, temperature, "new best");
                }
            }

            // Cool down
            temperature *= config.cooling_rate;
            steps += 1;
        }

        debug!(
            steps,
            accepted_moves,
            improving_moves,
            final_conflicts = current_conflicts,
            best_conflicts,
            final_temperature = temperature,
            "annealing stopped"
        );

        let (board, conflicts) = if config.return_best {
            (best, best_conflicts)
        } else {
            (current, current_conflicts)
        };

        Ok(SaResult {
            board,
            conflicts,
            final_conflicts: current_conflicts,
            best_conflicts,
            steps,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        })
    }
}
