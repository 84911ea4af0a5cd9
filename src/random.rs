//! Random source construction and weighted sampling.
//!
//! The library never draws from thread-local or global generators inside a
//! solver. Callers build one generator (seeded for reproducibility) and pass
//! it down.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh seed when
/// `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Fitness-proportionate (roulette wheel) sampler with replacement.
///
/// Built once per generation from the weights of the current population;
/// each [`sample`](Self::sample) is an O(log n) binary search over the
/// cumulative weights. Higher weight means higher probability.
///
/// # Examples
///
/// ```
/// use u_nqueens::random::{create_rng, RouletteWheel};
///
/// let wheel = RouletteWheel::new(&[1.0, 0.0, 3.0]).unwrap();
/// let mut rng = create_rng(1);
/// let idx = wheel.sample(&mut rng);
/// assert!(idx == 0 || idx == 2);
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    cumulative: Vec<f64>,
}

impl RouletteWheel {
    /// Builds a wheel from non-negative weights.
    ///
    /// Returns `None` if `weights` is empty, any weight is negative or not
    /// finite, or all weights are zero.
    pub fn new(weights: &[f64]) -> Option<Self> {
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return None;
        }
        let cumulative: Vec<f64> = weights
            .iter()
            .scan(0.0, |acc, &w| {
                *acc += w;
                Some(*acc)
            })
            .collect();
        match cumulative.last() {
            Some(&total) if total > 0.0 => Some(Self { cumulative }),
            _ => None,
        }
    }

    /// Number of slots on the wheel.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Whether the wheel has no slots. Always `false` for a built wheel.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Draws one index with probability proportional to its weight.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let last = self.cumulative.len() - 1;
        let total = self.cumulative[last];
        let threshold = rng.random_range(0.0..total);
        // first slot whose cumulative weight passes the threshold
        self.cumulative
            .partition_point(|&c| c <= threshold)
            .min(last) // floating-point fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_repeats() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        let xs: Vec<u32> = (0..16).map(|_| a.random()).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_rng_from_seed_some() {
        let mut a = rng_from_seed(Some(5));
        let mut b = create_rng(5);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_rejects_bad_weights() {
        assert!(RouletteWheel::new(&[]).is_none());
        assert!(RouletteWheel::new(&[0.0, 0.0]).is_none());
        assert!(RouletteWheel::new(&[1.0, -0.5]).is_none());
        assert!(RouletteWheel::new(&[1.0, f64::NAN]).is_none());
    }

    #[test]
    fn test_zero_weight_never_drawn() {
        let wheel = RouletteWheel::new(&[0.0, 1.0, 0.0, 1.0]).unwrap();
        let mut rng = create_rng(7);
        for _ in 0..5000 {
            let idx = wheel.sample(&mut rng);
            assert!(idx == 1 || idx == 3, "drew zero-weight slot {idx}");
        }
    }

    #[test]
    fn test_proportional_frequencies() {
        // Weights 1 : 0.5 : 0.25 as produced by 0, 1 and 3 conflicts.
        let wheel = RouletteWheel::new(&[1.0, 0.5, 0.25]).unwrap();
        let mut rng = create_rng(42);
        let mut counts = [0u32; 3];
        let n = 70_000;
        for _ in 0..n {
            counts[wheel.sample(&mut rng)] += 1;
        }
        let expected = [40_000.0, 20_000.0, 10_000.0];
        for (c, e) in counts.iter().zip(expected) {
            let rel = (*c as f64 - e).abs() / e;
            assert!(rel < 0.05, "counts {counts:?} too far from {expected:?}");
        }
    }

    #[test]
    fn test_single_slot() {
        let wheel = RouletteWheel::new(&[0.3]).unwrap();
        let mut rng = create_rng(1);
        assert_eq!(wheel.len(), 1);
        assert!(!wheel.is_empty());
        assert_eq!(wheel.sample(&mut rng), 0);
    }
}
