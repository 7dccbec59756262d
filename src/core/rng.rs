//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Substitutable**: [`RandomSource`] is the seam a test double plugs into
//! - **Unbiased**: draws use rejection sampling, never a modulo shortcut
//!
//! ## Usage
//!
//! ```
//! use concentration::core::{shuffle, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut items = vec![1, 2, 3, 4, 5];
//! shuffle(&mut items, &mut rng);
//!
//! // Same seed, same permutation
//! let mut rng2 = GameRng::new(42);
//! let mut items2 = vec![1, 2, 3, 4, 5];
//! shuffle(&mut items2, &mut rng2);
//! assert_eq!(items, items2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random integers below an exclusive bound.
///
/// This is the only randomness seam in the crate: shuffling draws every
/// swap index through it. Implement it over a scripted sequence to force
/// an exact deck order in tests.
pub trait RandomSource {
    /// Return a uniform integer in `[0, bound)`.
    ///
    /// `bound` must be at least 1.
    fn next_below(&mut self, bound: usize) -> usize;
}

/// Seeded RNG backing real games.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. The seed stays on the struct so a game can be reproduced.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an OS-seeded RNG for real play.
    ///
    /// The drawn seed is observable via [`seed`](Self::seed), so even an
    /// entropy-seeded game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        shuffle(items, self);
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, bound: usize) -> usize {
        assert!(bound >= 1, "Bound must be at least 1");
        // gen_range rejects out-of-range samples rather than folding them
        // with a modulo, so the draw is uniform over the whole range.
        self.inner.gen_range(0..bound)
    }
}

/// Unbiased in-place Fisher-Yates shuffle over any mutable slice.
///
/// Walks from the last index down to 1; step `i` picks a swap partner
/// uniformly from the inclusive range `[0, i]` by drawing below `i + 1`.
/// Slices of length 0 or 1 are left untouched.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    if items.len() <= 1 {
        return;
    }

    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, asserting each stays in bounds.
    struct Scripted(std::collections::VecDeque<usize>);

    impl Scripted {
        fn new(draws: &[usize]) -> Self {
            Self(draws.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn next_below(&mut self, bound: usize) -> usize {
            let draw = self.0.pop_front().expect("script exhausted");
            assert!(draw < bound, "scripted draw out of range");
            draw
        }
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_below(1000), rng2.next_below(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_below(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_below(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_seed_is_retained() {
        let rng = GameRng::new(7);
        assert_eq!(rng.seed(), 7);
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = GameRng::new(42);

        for bound in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_next_below_one_is_zero() {
        let mut rng = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(rng.next_below(1), 0);
        }
    }

    #[test]
    #[should_panic(expected = "Bound must be at least 1")]
    fn test_next_below_zero_panics() {
        let mut rng = GameRng::new(42);
        rng.next_below(0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Should be same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_single_element_is_noop() {
        let mut rng = GameRng::new(42);
        let mut data = vec![9];

        shuffle(&mut data, &mut rng);
        assert_eq!(data, vec![9]);

        let mut empty: Vec<i32> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let mut b = a.clone();

        shuffle(&mut a, &mut GameRng::new(99));
        shuffle(&mut b, &mut GameRng::new(99));

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_walks_top_down() {
        // Two elements: one draw below 2, swapping indices 1 and j.
        let mut data = vec!['a', 'b'];
        shuffle(&mut data, &mut Scripted::new(&[0]));
        assert_eq!(data, vec!['b', 'a']);

        // Drawing j == i at every step leaves the slice unchanged.
        let mut fixed = vec![0, 1, 2, 3];
        shuffle(&mut fixed, &mut Scripted::new(&[3, 2, 1]));
        assert_eq!(fixed, vec![0, 1, 2, 3]);

        // Always drawing 0 rotates each prefix through the front slot.
        let mut zeros = vec![0, 1, 2];
        shuffle(&mut zeros, &mut Scripted::new(&[0, 0]));
        assert_eq!(zeros, vec![1, 2, 0]);
    }

    #[test]
    fn test_shuffle_through_trait_object() {
        let mut rng = GameRng::new(42);
        let dynamic: &mut dyn RandomSource = &mut rng;

        let mut data = vec![1, 2, 3, 4, 5];
        shuffle(&mut data, dynamic);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }
}
