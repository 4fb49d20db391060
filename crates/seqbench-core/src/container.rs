//! Container kinds and their capability tables.
//!
//! Each storage discipline implements [`SequenceContainer`] once. The
//! operations whose cost profile differs between kinds (front insertion,
//! native sort, reserve, filtering) live in those impls; every policy is then
//! written a single time against the uniform capability set.

use std::collections::{LinkedList, VecDeque};
use std::fmt;
use std::mem;

use crate::element::Element;

/// Storage discipline of a benchmarked container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerKind {
    /// Contiguous growable array (`Vec`).
    Vector,
    /// Doubly-linked node list (`LinkedList`).
    List,
    /// Double-ended ring buffer (`VecDeque`).
    Deque,
}

impl ContainerKind {
    /// Returns the series label used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::List => "list",
            Self::Deque => "deque",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform sequence-container capability set.
///
/// Positions are zero-based indices; `len()` is the end position.
///
/// # Example
///
/// ```
/// use seqbench_core::{ContainerKind, Element, SequenceContainer, Small};
/// use std::collections::LinkedList;
///
/// let mut list: LinkedList<Small> = LinkedList::with_default(2);
/// list.insert_at(1, Small::from_key(9));
/// assert_eq!(<LinkedList<Small> as SequenceContainer>::KIND, ContainerKind::List);
/// assert_eq!(list.position(|e| e.key() == 9), Some(1));
/// ```
pub trait SequenceContainer: Default {
    /// Stored element type.
    type Item: Element;

    /// Storage discipline of this container.
    const KIND: ContainerKind;

    /// Builds a container of `size` default-initialized elements.
    fn with_default(size: usize) -> Self;

    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns true when the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the elements front to back.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// Pre-allocates room for `additional` elements where the kind supports it.
    fn reserve(&mut self, _additional: usize) {}

    /// Appends an element.
    fn push_back(&mut self, value: Self::Item);

    /// Prepends an element using the kind's front-insertion path.
    fn push_front(&mut self, value: Self::Item);

    /// Inserts `value` before position `index` (`index == len()` appends).
    fn insert_at(&mut self, index: usize, value: Self::Item);

    /// Erases the element at `index`.
    fn remove_at(&mut self, index: usize);

    /// Keeps only the elements for which `keep` returns true, in one sweep.
    fn retain_where(&mut self, keep: impl FnMut(&Self::Item) -> bool);

    /// Orders the elements ascending by key with the kind's native algorithm.
    fn sort_by_element_key(&mut self);

    /// Returns the position of the first element matching `pred`.
    #[inline]
    fn position(&self, mut pred: impl FnMut(&Self::Item) -> bool) -> Option<usize> {
        self.iter().position(|e| pred(e))
    }
}

impl<T: Element> SequenceContainer for Vec<T> {
    type Item = T;
    const KIND: ContainerKind = ContainerKind::Vector;

    fn with_default(size: usize) -> Self {
        std::iter::repeat_with(T::default).take(size).collect()
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    // No native front push: shift the whole buffer, the worst case we want.
    #[inline]
    fn push_front(&mut self, value: T) {
        Vec::insert(self, 0, value);
    }

    #[inline]
    fn insert_at(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }

    #[inline]
    fn remove_at(&mut self, index: usize) {
        Vec::remove(self, index);
    }

    fn retain_where(&mut self, keep: impl FnMut(&T) -> bool) {
        Vec::retain(self, keep);
    }

    fn sort_by_element_key(&mut self) {
        self.sort_unstable_by(|x, y| x.key().cmp(&y.key()));
    }
}

impl<T: Element> SequenceContainer for VecDeque<T> {
    type Item = T;
    const KIND: ContainerKind = ContainerKind::Deque;

    fn with_default(size: usize) -> Self {
        std::iter::repeat_with(T::default).take(size).collect()
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    #[inline]
    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }

    #[inline]
    fn insert_at(&mut self, index: usize, value: T) {
        VecDeque::insert(self, index, value);
    }

    #[inline]
    fn remove_at(&mut self, index: usize) {
        VecDeque::remove(self, index);
    }

    fn retain_where(&mut self, keep: impl FnMut(&T) -> bool) {
        VecDeque::retain(self, keep);
    }

    // The ring buffer may wrap; straighten it once, then sort in place.
    fn sort_by_element_key(&mut self) {
        self.make_contiguous()
            .sort_unstable_by(|x, y| x.key().cmp(&y.key()));
    }
}

impl<T: Element> SequenceContainer for LinkedList<T> {
    type Item = T;
    const KIND: ContainerKind = ContainerKind::List;

    fn with_default(size: usize) -> Self {
        std::iter::repeat_with(T::default).take(size).collect()
    }

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &T> {
        LinkedList::iter(self)
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    #[inline]
    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }

    fn insert_at(&mut self, index: usize, value: T) {
        let mut tail = self.split_off(index);
        LinkedList::push_back(self, value);
        self.append(&mut tail);
    }

    fn remove_at(&mut self, index: usize) {
        let mut tail = self.split_off(index);
        tail.pop_front();
        self.append(&mut tail);
    }

    fn retain_where(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let mut rest = mem::take(self);
        while !rest.is_empty() {
            let mut node = detach_front(&mut rest);
            if node.front().is_some_and(&mut keep) {
                self.append(&mut node);
            }
        }
    }

    fn sort_by_element_key(&mut self) {
        merge_sort(self);
    }
}

/// Unlinks the first node of a non-empty list and returns it as its own list.
///
/// Runs in constant time and never moves the element out of its node.
fn detach_front<T>(list: &mut LinkedList<T>) -> LinkedList<T> {
    let rest = list.split_off(1);
    mem::replace(list, rest)
}

/// Stable top-down merge sort that only relinks nodes.
fn merge_sort<T: Element>(list: &mut LinkedList<T>) {
    let len = list.len();
    if len < 2 {
        return;
    }

    let mut right = list.split_off(len / 2);
    merge_sort(list);
    merge_sort(&mut right);

    let mut left = mem::take(list);
    loop {
        let take_right = match (left.front(), right.front()) {
            (Some(l), Some(r)) => r.key() < l.key(),
            _ => break,
        };
        let mut node = if take_right {
            detach_front(&mut right)
        } else {
            detach_front(&mut left)
        };
        list.append(&mut node);
    }
    list.append(&mut left);
    list.append(&mut right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Small;
    use crate::test_utils::{keys_of, small_from_keys};

    fn exercise_positional<C: SequenceContainer<Item = Small> + FromIterator<Small>>() {
        let mut c: C = small_from_keys(&[1, 2, 3]);
        c.insert_at(0, Small::from_key(0));
        c.insert_at(c.len(), Small::from_key(4));
        c.insert_at(2, Small::from_key(9));
        assert_eq!(keys_of(&c), vec![0, 1, 9, 2, 3, 4]);

        c.remove_at(2);
        c.remove_at(0);
        c.remove_at(c.len() - 1);
        assert_eq!(keys_of(&c), vec![1, 2, 3]);

        c.push_front(Small::from_key(7));
        c.push_back(Small::from_key(8));
        assert_eq!(keys_of(&c), vec![7, 1, 2, 3, 8]);
    }

    #[test]
    fn test_positional_insert_and_erase() {
        exercise_positional::<Vec<Small>>();
        exercise_positional::<VecDeque<Small>>();
        exercise_positional::<LinkedList<Small>>();
    }

    fn exercise_retain<C: SequenceContainer<Item = Small> + FromIterator<Small>>() {
        let mut c: C = small_from_keys(&[3, 1, 3, 2, 3]);
        c.retain_where(|e| e.key() != 3);
        assert_eq!(keys_of(&c), vec![1, 2]);

        c.retain_where(|_| false);
        assert!(c.is_empty());
    }

    #[test]
    fn test_retain_removes_every_match() {
        exercise_retain::<Vec<Small>>();
        exercise_retain::<VecDeque<Small>>();
        exercise_retain::<LinkedList<Small>>();
    }

    #[test]
    fn test_list_merge_sort_orders_keys() {
        let mut list: LinkedList<Small> = small_from_keys(&[5, 2, 9, 2, 0, 7, 1]);
        list.sort_by_element_key();
        assert_eq!(keys_of(&list), vec![0, 1, 2, 2, 5, 7, 9]);

        list.sort_by_element_key();
        assert_eq!(keys_of(&list), vec![0, 1, 2, 2, 5, 7, 9]);
    }

    #[test]
    fn test_deque_sort_after_wrap() {
        let mut deque: VecDeque<Small> = VecDeque::with_capacity(4);
        deque.push_back(Small::from_key(5));
        deque.push_back(Small::from_key(3));
        deque.push_front(Small::from_key(4));
        deque.push_front(Small::from_key(1));
        deque.sort_by_element_key();
        assert_eq!(keys_of(&deque), vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_with_default_len() {
        assert_eq!(Vec::<Small>::with_default(5).len(), 5);
        assert_eq!(VecDeque::<Small>::with_default(0).len(), 0);
        assert_eq!(LinkedList::<Small>::with_default(3).len(), 3);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ContainerKind::Vector.to_string(), "vector");
        assert_eq!(ContainerKind::List.name(), "list");
        assert_eq!(ContainerKind::Deque.name(), "deque");
    }
}
