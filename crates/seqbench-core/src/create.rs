//! Creation policies.
//!
//! A creation policy builds the subject of one trial before the timer starts.

use crate::cache::IndexCache;
use crate::container::SequenceContainer;
use crate::element::Element;

/// Produces a fresh trial subject for a target size.
///
/// `Subject` is usually the container itself; [`SmartFilled`] returns an
/// owning handle instead so that releasing it can be timed.
pub trait CreatePolicy<C: SequenceContainer> {
    /// Value handed to the operation policies.
    type Subject;

    /// Builds the subject for `size`.
    fn make(&self, size: usize, cache: &mut IndexCache) -> Self::Subject;
}

/// Zero-length container.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl<C: SequenceContainer> CreatePolicy<C> for Empty {
    type Subject = C;

    #[inline]
    fn make(&self, _size: usize, _cache: &mut IndexCache) -> C {
        C::default()
    }
}

/// `size` default-initialized elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filled;

impl<C: SequenceContainer> CreatePolicy<C> for Filled {
    type Subject = C;

    #[inline]
    fn make(&self, size: usize, _cache: &mut IndexCache) -> C {
        C::with_default(size)
    }
}

/// Keys `0..size` in the cached shuffled order for this container kind.
///
/// # Example
///
/// ```
/// use seqbench_core::{CreatePolicy, Element, FilledRandom, IndexCache, SequenceContainer, Small};
///
/// let mut cache = IndexCache::default();
/// let v = CreatePolicy::<Vec<Small>>::make(&FilledRandom, 10, &mut cache);
/// let mut keys: Vec<usize> = v.iter().map(|e| e.key()).collect();
/// keys.sort_unstable();
/// assert_eq!(keys, (0..10).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FilledRandom;

impl<C: SequenceContainer> CreatePolicy<C> for FilledRandom {
    type Subject = C;

    fn make(&self, size: usize, cache: &mut IndexCache) -> C {
        let mut container = C::default();
        for &key in cache.permutation(C::KIND, size) {
            container.push_back(C::Item::from_key(key));
        }
        container
    }
}

/// Like [`Filled`], behind an owning handle that [`SmartDelete`] releases.
///
/// [`SmartDelete`]: crate::operation::SmartDelete
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartFilled;

impl<C: SequenceContainer> CreatePolicy<C> for SmartFilled {
    type Subject = Option<Box<C>>;

    fn make(&self, size: usize, _cache: &mut IndexCache) -> Option<Box<C>> {
        Some(Box::new(C::with_default(size)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use super::*;
    use crate::element::{Large, NonTrivialArray32, Small};
    use crate::test_utils::{is_permutation, keys_of};

    fn assert_random_fill<C: SequenceContainer>(cache: &mut IndexCache, size: usize) -> Vec<usize> {
        let c = CreatePolicy::<C>::make(&FilledRandom, size, cache);
        let keys = keys_of(&c);
        assert!(is_permutation(&keys, size));
        keys
    }

    #[test]
    fn test_empty_and_filled() {
        let mut cache = IndexCache::default();
        let empty = CreatePolicy::<LinkedList<Large>>::make(&Empty, 100, &mut cache);
        assert!(empty.is_empty());

        let filled = CreatePolicy::<VecDeque<Large>>::make(&Filled, 100, &mut cache);
        assert_eq!(filled.len(), 100);
        assert!(keys_of(&filled).iter().all(|&k| k == 0));
    }

    #[test]
    fn test_filled_random_is_permutation_for_every_kind() {
        let mut cache = IndexCache::default();
        assert_random_fill::<Vec<Small>>(&mut cache, 1000);
        assert_random_fill::<LinkedList<Small>>(&mut cache, 1000);
        assert_random_fill::<VecDeque<NonTrivialArray32>>(&mut cache, 1000);
    }

    #[test]
    fn test_filled_random_repeats_same_order() {
        let mut cache = IndexCache::default();
        let first = assert_random_fill::<LinkedList<Small>>(&mut cache, 300);
        let second = assert_random_fill::<LinkedList<Small>>(&mut cache, 300);
        assert_eq!(first, second);

        let grown = assert_random_fill::<LinkedList<Small>>(&mut cache, 600);
        assert_eq!(grown.len(), 600);
        assert_ne!(&grown[..300], first.as_slice());
    }

    #[test]
    fn test_smart_filled_owns_container() {
        let mut cache = IndexCache::default();
        let handle = CreatePolicy::<Vec<Small>>::make(&SmartFilled, 50, &mut cache);
        assert_eq!(handle.map(|c| c.len()), Some(50));
    }
}
