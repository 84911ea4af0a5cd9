//! Bounded worker pool for population evaluation.
//!
//! Fitness evaluation is embarrassingly parallel: each board's conflict
//! count depends only on that board. [`EvaluationPool`] runs one task per
//! item on a dedicated rayon pool and returns results in input order, so
//! the subsequent sort and weighted sampling stay deterministic for a
//! fixed random source.
//!
//! Without the `parallel` feature every pool runs inline on the caller's
//! thread.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::board::{count_attacking_pairs, Board, ConflictCount};
use crate::error::{QueensError, Result};

/// Order-preserving map over a slice, sequential or on a bounded pool.
#[derive(Debug)]
pub struct EvaluationPool {
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl EvaluationPool {
    /// A pool that evaluates on the calling thread.
    pub fn sequential() -> Self {
        Self {
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// A pool with exactly `threads` workers.
    ///
    /// Returns [`QueensError::InvalidConfiguration`] for zero threads.
    pub fn bounded(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(QueensError::InvalidConfiguration(
                "worker_threads must be at least 1".into(),
            ));
        }
        Self::build(threads)
    }

    /// A pool sized by rayon's default (one worker per logical CPU, or
    /// `RAYON_NUM_THREADS`).
    pub fn with_default_threads() -> Result<Self> {
        Self::build(0)
    }

    /// Builds the pool described by a solver's parallelism settings.
    pub fn from_options(parallel: bool, worker_threads: Option<usize>) -> Result<Self> {
        match (parallel, worker_threads) {
            (false, _) => Ok(Self::sequential()),
            (true, Some(threads)) => Self::bounded(threads),
            (true, None) => Self::with_default_threads(),
        }
    }

    #[cfg(feature = "parallel")]
    fn build(threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("nqueens-eval-{i}"))
            .build()
            .map_err(|e| QueensError::WorkerPool(e.to_string()))?;
        Ok(Self { pool: Some(pool) })
    }

    #[cfg(not(feature = "parallel"))]
    fn build(_threads: usize) -> Result<Self> {
        tracing::warn!("built without the `parallel` feature, evaluating sequentially");
        Ok(Self::sequential())
    }

    /// Whether work is dispatched to worker threads.
    pub fn is_parallel(&self) -> bool {
        #[cfg(feature = "parallel")]
        {
            self.pool.is_some()
        }
        #[cfg(not(feature = "parallel"))]
        {
            false
        }
    }

    /// Number of threads doing the work (1 when sequential).
    pub fn threads(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.pool.as_ref().map_or(1, |p| p.current_num_threads())
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }

    /// Applies `f` to every item; `out[i] == f(&items[i])`.
    pub fn map<T, U, F>(&self, items: &[T], f: F) -> Vec<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        {
            if let Some(pool) = &self.pool {
                return pool.install(|| items.par_iter().map(&f).collect());
            }
        }
        items.iter().map(f).collect()
    }

    /// Conflict count of every board, in population order.
    pub fn evaluate(&self, boards: &[Board]) -> Vec<ConflictCount> {
        self.map(boards, count_attacking_pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn population(n: usize, seed: u64) -> Vec<Board> {
        let mut rng = create_rng(seed);
        (0..n).map(|_| Board::random(&mut rng)).collect()
    }

    #[test]
    fn test_sequential_matches_direct() {
        let boards = population(50, 1);
        let pool = EvaluationPool::sequential();
        let expected: Vec<ConflictCount> = boards.iter().map(|b| b.conflicts()).collect();
        assert_eq!(pool.evaluate(&boards), expected);
        assert!(!pool.is_parallel());
        assert_eq!(pool.threads(), 1);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_preserves_order() {
        let boards = population(500, 2);
        let pool = EvaluationPool::bounded(4).unwrap();
        assert!(pool.is_parallel());
        assert_eq!(pool.threads(), 4);
        assert_eq!(pool.evaluate(&boards), EvaluationPool::sequential().evaluate(&boards));
    }

    #[test]
    fn test_map_keeps_index_pairing() {
        let items: Vec<usize> = (0..1000).collect();
        let pool = EvaluationPool::from_options(true, Some(3)).unwrap();
        let out = pool.map(&items, |&x| x * 2);
        for (i, v) in out.iter().enumerate() {
            assert_eq!(*v, i * 2);
        }
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = EvaluationPool::bounded(0).unwrap_err();
        assert!(matches!(err, QueensError::InvalidConfiguration(_)));
        assert!(EvaluationPool::from_options(true, Some(0)).is_err());
    }

    #[test]
    fn test_from_options_sequential_ignores_threads() {
        let pool = EvaluationPool::from_options(false, Some(0)).unwrap();
        assert!(!pool.is_parallel());
    }

    #[test]
    fn test_empty_input() {
        let pool = EvaluationPool::with_default_threads().unwrap();
        assert!(pool.evaluate(&[]).is_empty());
    }
}
