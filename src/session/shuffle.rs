//! Random ordering for question pools and option lists.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Owns the random source used by a quiz session.
///
/// Seeded randomizers produce the same sequence of permutations every run.
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Return a uniformly shuffled copy of `items` (Fisher-Yates).
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled
    }

    /// Shuffle `items` and keep the first `size` of them.
    pub fn pick<T: Clone>(&mut self, items: &[T], size: usize) -> Vec<T> {
        let mut picked = self.shuffle(items);
        picked.truncate(size);
        picked
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
