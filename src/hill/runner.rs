//! Hill climbing execution loop.

use tracing::{debug, trace};

use crate::board::{neighbors, Board, ConflictCount};

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HcResult {
    /// Board the search stopped on.
    pub board: Board,

    /// Conflicts of `board`. Zero means a solution, anything else a local
    /// optimum.
    pub conflicts: ConflictCount,

    /// Number of accepted moves.
    pub steps: usize,

    /// Number of neighbor boards evaluated.
    pub evaluations: usize,

    /// Conflicts of the initial board followed by each accepted board.
    /// Strictly decreasing.
    pub conflict_history: Vec<ConflictCount>,
}

impl HcResult {
    /// Whether the search ended on a solution.
    pub fn solved(&self) -> bool {
        self.conflicts == 0
    }
}

/// Executes steepest-ascent hill climbing.
///
/// The run is fully determined by the initial board: ties between equally
/// good neighbors go to the first one in [`neighbors`] order.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Climbs from `initial` until no neighbor strictly improves.
    ///
    /// Each step costs N × (N − 1) evaluations and lowers the conflict count
    /// by at least one, so the run takes at most `initial.conflicts()` steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::hill::HillClimbRunner;
    /// use u_nqueens::Board;
    ///
    /// let start = Board::new([0; 8]).unwrap();
    /// let result = HillClimbRunner::run(start);
    /// assert!(result.conflicts < start.conflicts());
    /// ```
    pub fn run(initial: Board) -> HcResult {
        let mut current = initial;
        let mut current_conflicts = initial.conflicts();
        let mut conflict_history = vec![current_conflicts];
        let mut steps = 0usize;
        let mut evaluations = 0usize;

        while current_conflicts > 0 {
            // Find the strictly best improving move
            let mut best_move: Option<(Board, ConflictCount)> = None;
            for neighbor in neighbors(&current) {
                evaluations += 1;
                let conflicts = neighbor.conflicts();
                let threshold = best_move.map_or(current_conflicts, |(_, c)| c);
                if conflicts < threshold {
                    best_move = Some((neighbor, conflicts));
                }
            }

            let Some((next, next_conflicts)) = best_move else {
                break;
            };

            current = next;
            current_conflicts = next_conflicts;
            conflict_history.push(current_conflicts);
            steps += 1;
            trace!(step = steps, conflicts = current_conflicts, "hill climbing step");
        }

        debug!(
            steps,
            evaluations,
            conflicts = current_conflicts,
            "hill climbing stopped"
        );

        HcResult {
            board: current,
            conflicts: current_conflicts,
            steps,
            evaluations,
            conflict_history,
        }
    }
}
