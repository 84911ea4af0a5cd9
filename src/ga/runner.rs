//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives one run through its states:
//! initialization → evaluation → goal check → selection/breeding →
//! replacement → evaluation → ...
//!
//! A run ends as soon as a generation contains a zero-conflict board, or
//! after `max_generations` evaluated generations. Either way the best board
//! of the last evaluated generation is returned.

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::{GaConfig, ELITE_COUNT};
use super::operators::{reset_mutation, single_point_crossover};
use crate::board::{fitness_from_conflicts, Board, ConflictCount};
use crate::error::{QueensError, Result};
use crate::pool::EvaluationPool;
use crate::random::RouletteWheel;

/// A board paired with the scores computed for it in one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredBoard {
    /// The individual.
    pub board: Board,
    /// Attacking pairs on `board`.
    pub conflicts: ConflictCount,
    /// `1 / (1 + conflicts)`, used as the roulette weight.
    pub fitness: f64,
}

/// View of one evaluated generation, sorted best first.
#[derive(Debug, Clone, Copy)]
pub struct GenerationSnapshot<'a> {
    /// Zero-based generation index.
    pub generation: usize,
    /// The population in descending fitness order.
    pub population: &'a [ScoredBoard],
}

impl GenerationSnapshot<'_> {
    /// The fittest board of this generation.
    pub fn best(&self) -> &ScoredBoard {
        &self.population[0]
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best board of the final evaluated generation.
    pub best: Board,

    /// Conflicts of `best` (0 on success).
    pub best_conflicts: ConflictCount,

    /// Number of generations evaluated, including the initial one.
    pub generations: usize,

    /// Whether a zero-conflict board was found.
    pub solved: bool,

    /// Best conflict count of each evaluated generation.
    pub conflict_history: Vec<ConflictCount>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_nqueens::ga::{GaConfig, GaRunner};
/// use u_nqueens::random::create_rng;
///
/// let config = GaConfig::default().with_parallel(false);
/// let result = GaRunner::run(&config, &mut create_rng(42)).unwrap();
/// println!("{}attacking pairs: {}", result.best, result.best_conflicts);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA.
    ///
    /// Returns [`QueensError::InvalidConfiguration`] if `config` does not
    /// validate. Failing to find a solution is not an error; check
    /// [`GaResult::solved`].
    pub fn run<R: Rng>(config: &GaConfig, rng: &mut R) -> Result<GaResult> {
        Self::run_with_observer(config, rng, |_| {})
    }

    /// Runs the GA, calling `observer` once per evaluated generation.
    ///
    /// The snapshot is taken after sorting and before breeding, so it shows
    /// exactly the population parents are drawn from.
    pub fn run_with_observer<R, F>(
        config: &GaConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<GaResult>
    where
        R: Rng,
        F: FnMut(&GenerationSnapshot<'_>),
    {
        config.validate()?;
        let pool = EvaluationPool::from_options(config.parallel, config.worker_threads)?;
        let elite_count = ELITE_COUNT.min(config.population_size);

        debug!(
            population_size = config.population_size,
            mutation_rate = config.mutation_rate,
            max_generations = config.max_generations,
            threads = pool.threads(),
            "starting GA"
        );

        // 1. Initialize population
        let mut population: Vec<Board> = (0..config.population_size)
            .map(|_| Board::random(rng))
            .collect();

        let mut conflict_history: Vec<ConflictCount> = Vec::with_capacity(config.max_generations);
        let mut generation = 0;

        loop {
            // 2. Evaluate and sort
            let scored = score_population(&pool, population);
            let best = scored[0];
            if conflict_history.last().is_none_or(|&prev| best.conflicts < prev) {
                debug!(generation, conflicts = best.conflicts, "new best");
            }
            conflict_history.push(best.conflicts);
            trace!(generation, conflicts = best.conflicts, "generation evaluated");

            observer(&GenerationSnapshot {
                generation,
                population: &scored,
            });

            // 3. Goal / budget check
            let solved = best.conflicts == 0;
            if solved || generation + 1 == config.max_generations {
                info!(
                    generations = generation + 1,
                    conflicts = best.conflicts,
                    solved,
                    "GA finished"
                );
                return Ok(GaResult {
                    best: best.board,
                    best_conflicts: best.conflicts,
                    generations: generation + 1,
                    solved,
                    conflict_history,
                });
            }

            // 4. Breed and replace
            population = breed(&scored, config, elite_count, rng)?;
            generation += 1;
        }
    }
}

/// Scores every board and sorts by descending fitness.
///
/// The sort is stable, so equally fit boards keep population order.
fn score_population(pool: &EvaluationPool, population: Vec<Board>) -> Vec<ScoredBoard> {
    let conflicts = pool.evaluate(&population);
    let mut scored: Vec<ScoredBoard> = population
        .into_iter()
        .zip(conflicts)
        .map(|(board, conflicts)| ScoredBoard {
            board,
            conflicts,
            fitness: fitness_from_conflicts(conflicts),
        })
        .collect();
    scored.sort_by_key(|s| s.conflicts);
    scored
}

/// Builds the next generation: elites first, then bred children.
fn breed<R: Rng>(
    scored: &[ScoredBoard],
    config: &GaConfig,
    elite_count: usize,
    rng: &mut R,
) -> Result<Vec<Board>> {
    let mut next_gen: Vec<Board> = Vec::with_capacity(config.population_size);
    next_gen.extend(scored[..elite_count].iter().map(|s| s.board));

    if next_gen.len() >= config.population_size {
        return Ok(next_gen);
    }

    let weights: Vec<f64> = scored.iter().map(|s| s.fitness).collect();
    let wheel = RouletteWheel::new(&weights).ok_or_else(|| {
        QueensError::InvalidConfiguration("population has no selectable individuals".into())
    })?;

    while next_gen.len() < config.population_size {
        let parent1 = &scored[wheel.sample(rng)].board;
        let parent2 = &scored[wheel.sample(rng)].board;

        let mut child = single_point_crossover(parent1, parent2, rng);
        if rng.random_range(0.0..1.0) < config.mutation_rate {
            child = reset_mutation(&child, rng);
        }
        next_gen.push(child);
    }

    Ok(next_gen)
}

// ============================================================================
// Tests
// ============================================================================
