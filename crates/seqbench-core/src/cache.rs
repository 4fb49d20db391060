//! Randomized index cache.
//!
//! Trials that start from a shuffled container must all see the same
//! shuffled dataset for a given size, otherwise repeats of one trial would
//! measure different inputs. The cache keeps one permutation per container
//! kind and reshuffles only when a different size is requested.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::container::ContainerKind;

/// Per-kind cache of shuffled `[0, size)` permutations.
///
/// # Example
///
/// ```
/// use seqbench_core::{ContainerKind, IndexCache};
///
/// let mut cache = IndexCache::default();
/// let first = cache.permutation(ContainerKind::Vector, 100).to_vec();
/// let again = cache.permutation(ContainerKind::Vector, 100).to_vec();
/// assert_eq!(first, again);
/// assert_eq!(cache.regenerations(), 1);
///
/// let mut sorted = first.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (0..100).collect::<Vec<_>>());
/// ```
#[derive(Debug)]
pub struct IndexCache {
    seed: u64,
    slots: HashMap<ContainerKind, Vec<usize>>,
    regenerations: u64,
}

impl IndexCache {
    /// Seed used when none is configured.
    pub const DEFAULT_SEED: u64 = 5489;

    /// Creates an empty cache that shuffles with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            slots: HashMap::new(),
            regenerations: 0,
        }
    }

    /// Returns the shuffle seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the cached permutation of `[0, size)` for `kind`.
    ///
    /// A different `size` than the cached one discards the old permutation and
    /// shuffles a fresh one with a newly seeded generator.
    pub fn permutation(&mut self, kind: ContainerKind, size: usize) -> &[usize] {
        let slot = self.slots.entry(kind).or_default();
        if slot.len() != size {
            slot.clear();
            slot.extend(0..size);
            slot.shuffle(&mut StdRng::seed_from_u64(self.seed));
            self.regenerations += 1;
            debug!(event = "index_cache_regenerated", kind = %kind, size);
        }
        slot.as_slice()
    }

    /// Returns how many permutations have been generated so far.
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}
