//! Explicit, seedable randomness.
//!
//! Nothing in this crate touches a global generator. Every randomized
//! operation takes a `&mut impl RandomSource`, so replaying the same seed
//! replays the same draws in the same order.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// The minimal capability set randomized operations draw from.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    fn range_usize(&mut self, low: usize, high: usize) -> usize;

    /// Permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Uniform float in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Uniform float in `[-1, 1)`.
    fn signed_unit(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }
}

/// Default [`RandomSource`] backed by `rand`'s `StdRng`, derived from one `u64` seed.
#[derive(Clone, Debug)]
pub struct SeededRng {
    seed: u64,
    inner: StdRng,
}

impl SeededRng {
    /// Create a generator; equal seeds produce equal streams.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.inner.random_range(low..high)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
