//! Deterministic random number generation for sessions.
//!
//! Each session owns one `GameRng`, seeded at creation. The same seed
//! reproduces the same deals, shuffles, and seat orders, which is what the
//! tests lean on.
//!
//! The central primitive is [`GameRng::draw`]: remove a uniformly random
//! element from a shrinking bucket. Dealing, shuffling, and seat
//! randomization are all expressed through it.

use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing all session randomness.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Remove and return a uniformly random element from `bucket`.
    ///
    /// Returns `None` on an empty bucket. This is sampling without
    /// replacement: repeated calls never yield the same element twice.
    pub fn draw<T>(&mut self, bucket: &mut Vec<T>) -> Option<T> {
        if bucket.is_empty() {
            return None;
        }
        let index = self.inner.gen_range(0..bucket.len());
        Some(bucket.swap_remove(index))
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random alphanumeric token, used for player ids.
    pub fn token(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(self.inner.sample(Alphanumeric)))
            .collect()
    }
}
