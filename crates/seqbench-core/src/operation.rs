//! Operation policies.
//!
//! An operation policy is the measured work of a trial. Policies are unit
//! structs; a sequence of them is expressed as a tuple, which runs its members
//! in declared order against the same subject.
//!
//! Every scan compares the key field of the stored elements directly, so no
//! temporary element is ever built just to be compared against.

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::Rng;

use crate::container::SequenceContainer;
use crate::element::Element;

/// Number of scan-then-mutate passes performed by [`Insert`], [`Erase`] and
/// [`RemoveErase`].
pub const SCAN_COUNT: usize = 1000;

/// Per-trial inputs available to operation policies.
///
/// The sample value is built once per size by the runner, outside the timed
/// region. The generator belongs to the container kind and keeps its state
/// across trials.
pub struct TrialEnv<'a, T> {
    sample: &'a T,
    rng: &'a mut StdRng,
}

impl<'a, T> TrialEnv<'a, T> {
    /// Creates the environment for one trial.
    pub fn new(sample: &'a T, rng: &'a mut StdRng) -> Self {
        Self { sample, rng }
    }

    /// Returns the value cloned by the fill policies.
    #[inline]
    pub fn sample(&self) -> &T {
        self.sample
    }

    /// Returns the kind's random generator.
    #[inline]
    pub fn rng(&mut self) -> &mut StdRng {
        self.rng
    }
}

/// One measured operation applied to a trial subject.
///
/// `C` is the container type under test and `S` the subject produced by the
/// creation policy, which is `C` itself except for owning handles.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use seqbench_core::{Element, FillBack, Operation, ReserveSize, SequenceContainer, Small, TrialEnv};
///
/// let sample = Small::default();
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut env = TrialEnv::new(&sample, &mut rng);
///
/// let mut v: Vec<Small> = Vec::new();
/// Operation::<Vec<Small>>::run(&(ReserveSize, FillBack), &mut v, 64, &mut env);
/// assert_eq!(v.len(), 64);
/// assert!(v.capacity() >= 64);
/// ```
pub trait Operation<C: SequenceContainer, S = C> {
    /// Performs the operation for target `size`.
    fn run(&self, subject: &mut S, size: usize, env: &mut TrialEnv<'_, C::Item>);
}

/// Measures nothing but the creation policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOp;

impl<C: SequenceContainer, S> Operation<C, S> for NoOp {
    #[inline]
    fn run(&self, _subject: &mut S, _size: usize, _env: &mut TrialEnv<'_, C::Item>) {}
}

/// Reserves capacity for `size` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReserveSize;

impl<C: SequenceContainer> Operation<C> for ReserveSize {
    #[inline]
    fn run(&self, c: &mut C, size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        c.reserve(size);
    }
}

/// Appends `size` clones of the sample value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillBack;

impl<C: SequenceContainer> Operation<C> for FillBack {
    fn run(&self, c: &mut C, size: usize, env: &mut TrialEnv<'_, C::Item>) {
        for _ in 0..size {
            c.push_back(env.sample().clone());
        }
    }
}

/// Appends `size` freshly constructed elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmplaceBack;

impl<C: SequenceContainer> Operation<C> for EmplaceBack {
    fn run(&self, c: &mut C, size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        for _ in 0..size {
            c.push_back(C::Item::default());
        }
    }
}

/// Prepends `size` clones of the sample value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillFront;

impl<C: SequenceContainer> Operation<C> for FillFront {
    fn run(&self, c: &mut C, size: usize, env: &mut TrialEnv<'_, C::Item>) {
        for _ in 0..size {
            c.push_front(env.sample().clone());
        }
    }
}

/// Prepends `size` freshly constructed elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmplaceFront;

impl<C: SequenceContainer> Operation<C> for EmplaceFront {
    fn run(&self, c: &mut C, size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        for _ in 0..size {
            c.push_front(C::Item::default());
        }
    }
}

/// `size` independent linear scans, one per key in `0..size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Find;

impl<C: SequenceContainer> Operation<C> for Find {
    fn run(&self, c: &mut C, size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        for i in 0..size {
            black_box(c.position(|e| e.key() == i));
        }
    }
}

/// Inserts key `size + i` before the first element keyed `i`, for each
/// `i` in `0..SCAN_COUNT`. A missing key inserts at the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insert;

impl<C: SequenceContainer> Operation<C> for Insert {
    fn run(&self, c: &mut C, size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        for i in 0..SCAN_COUNT {
            let at = c.position(|e| e.key() == i).unwrap_or(c.len());
            c.insert_at(at, C::Item::from_key(size + i));
        }
    }
}

/// Erases the first element keyed `i`, for each `i` in `0..SCAN_COUNT`.
/// A missing key leaves the container untouched for that pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Erase;

impl<C: SequenceContainer> Operation<C> for Erase {
    fn run(&self, c: &mut C, _size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        for i in 0..SCAN_COUNT {
            if let Some(at) = c.position(|e| e.key() == i) {
                c.remove_at(at);
            }
        }
    }
}

/// One compacting sweep per `i` in `0..SCAN_COUNT`, dropping every element
/// keyed `i`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveErase;

impl<C: SequenceContainer> Operation<C> for RemoveErase {
    fn run(&self, c: &mut C, _size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        for i in 0..SCAN_COUNT {
            c.retain_where(|e| e.key() != i);
        }
    }
}

/// Ascending sort by key using the kind's native algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sort;

impl<C: SequenceContainer> Operation<C> for Sort {
    #[inline]
    fn run(&self, c: &mut C, _size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        c.sort_by_element_key();
    }
}

/// Releases an owning handle, destroying every element it holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartDelete;

impl<C: SequenceContainer> Operation<C, Option<Box<C>>> for SmartDelete {
    #[inline]
    fn run(&self, handle: &mut Option<Box<C>>, _size: usize, _env: &mut TrialEnv<'_, C::Item>) {
        drop(handle.take());
    }
}

/// `size` sorted insertions of uniformly random keys.
///
/// Each drawn key goes before the first element whose key is not smaller,
/// keeping the container in ascending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSortedInsert;

impl<C: SequenceContainer> Operation<C> for RandomSortedInsert {
    fn run(&self, c: &mut C, size: usize, env: &mut TrialEnv<'_, C::Item>) {
        for _ in 0..size {
            let key = env.rng().random_range(0..usize::MAX);
            let at = c.position(|e| e.key() >= key).unwrap_or(c.len());
            c.insert_at(at, C::Item::from_key(key));
        }
    }
}

// Operation sequences: a tuple runs its members in declared order.
macro_rules! impl_operation_for_tuple {
    ($($idx:tt: $T:ident),+) => {
        impl<C, S, $($T),+> Operation<C, S> for ($($T,)+)
        where
            C: SequenceContainer,
            $($T: Operation<C, S>,)+
        {
            #[inline]
            fn run(&self, subject: &mut S, size: usize, env: &mut TrialEnv<'_, C::Item>) {
                $(Operation::<C, S>::run(&self.$idx, subject, size, env);)+
            }
        }
    };
}

impl_operation_for_tuple!(0: O0);
impl_operation_for_tuple!(0: O0, 1: O1);
impl_operation_for_tuple!(0: O0, 1: O1, 2: O2);
impl_operation_for_tuple!(0: O0, 1: O1, 2: O2, 3: O3);
