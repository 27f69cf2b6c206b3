//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! A simulation owns exactly one `SimRng`, seeded from
//! [`SimConfig::seed`](crate::SimConfig::seed).  Every stochastic decision
//! (initial congestion, spawn sampling, arrivals, churn, congestion flips,
//! random turns) draws from it in the fixed order of the step loop, so the
//! same seed always replays the same run.
//!
//! The generator is `SmallRng`: fast, but its output is not guaranteed to be
//! stable across `rand` releases.  Pin the `rand` version if recorded runs
//! must replay bit-for-bit years later.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only in the single-threaded step loop.  Never share one between two
/// simulations; build a fresh one from the seed instead.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Pick an index with probability proportional to `weights[i]`.
    ///
    /// Returns `None` if the weights are empty or all zero.
    pub fn weighted_index(&mut self, weights: &[u32]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(&mut self.0))
    }
}
