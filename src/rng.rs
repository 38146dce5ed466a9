use rand::{Rng, SeedableRng, rngs::StdRng};

/// The single source of randomness for every generator.
///
/// Every random choice (start cell, direction, frontier pick) goes through
/// [`RandomSource::uniform`], so a seeded or scripted source makes generation
/// fully deterministic.
pub trait RandomSource {
    /// Returns an integer in `[0, bound)`. `bound` must be positive.
    fn uniform(&mut self, bound: usize) -> usize;

    /// Picks an element of `items` uniformly, or `None` if it is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.uniform(items.len()))
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "uniform bound must be positive");
        self.random_range(0..bound)
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
