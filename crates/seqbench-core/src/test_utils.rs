//! Test utilities shared by seqbench crates.
//!
//! Small helpers for inspecting the key sequence of a container.

use crate::container::SequenceContainer;
use crate::element::{Element, Small};

/// Returns the keys of `container` front to back.
pub fn keys_of<C: SequenceContainer>(container: &C) -> Vec<usize> {
    container.iter().map(|e| e.key()).collect()
}

/// Builds any collection of [`Small`] elements carrying `keys` in order.
pub fn small_from_keys<C: FromIterator<Small>>(keys: &[usize]) -> C {
    keys.iter().map(|&k| Small::from_key(k)).collect()
}

/// Returns true when `keys` holds every value of `0..n` exactly once.
pub fn is_permutation(keys: &[usize], n: usize) -> bool {
    if keys.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &k in keys {
        match seen.get_mut(k) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Returns true when `keys` never decreases.
pub fn is_non_decreasing(keys: &[usize]) -> bool {
    keys.windows(2).all(|w| w[0] <= w[1])
}
