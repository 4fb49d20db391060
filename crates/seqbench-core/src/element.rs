//! Element type catalog.
//!
//! Every benchmarked element carries a `usize` key field `a`. Search, insert
//! and sort policies look only at that key, so the rest of the type exists
//! purely to vary the cost of copying, moving and dropping an element.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::mem::size_of;

/// A value type that can be stored in a benchmarked container.
///
/// # Example
///
/// ```
/// use seqbench_core::{Element, Small};
///
/// let e = Small::from_key(42);
/// assert_eq!(e.key(), 42);
/// assert_eq!(Small::default().key(), 0);
/// assert_eq!(Small::NAME, "Small");
/// ```
pub trait Element: Default + Clone + Debug + 'static {
    /// Display name used in graph titles.
    const NAME: &'static str;

    /// Builds an element carrying the given key.
    fn from_key(key: usize) -> Self;

    /// Returns the key field.
    fn key(&self) -> usize;
}

/// Trivially copyable record: a key followed by `PAD` bytes of padding.
///
/// The total size is `8 + PAD` bytes on 64-bit targets.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Trivial<const PAD: usize> {
    pub a: usize,
    pub pad: [u8; PAD],
}

impl<const PAD: usize> Default for Trivial<PAD> {
    fn default() -> Self {
        Self { a: 0, pad: [0; PAD] }
    }
}

const fn trivial_name(pad: usize) -> &'static str {
    match pad {
        0 => "Small",
        24 => "Medium",
        120 => "Large",
        1016 => "Huge",
        4088 => "Monster",
        _ => "Trivial",
    }
}

impl<const PAD: usize> Element for Trivial<PAD> {
    const NAME: &'static str = trivial_name(PAD);

    #[inline]
    fn from_key(key: usize) -> Self {
        Self { a: key, pad: [0; PAD] }
    }

    #[inline]
    fn key(&self) -> usize {
        self.a
    }
}

/// 8-byte record.
pub type Small = Trivial<0>;
/// 32-byte record.
pub type Medium = Trivial<24>;
/// 128-byte record.
pub type Large = Trivial<120>;
/// 1 KiB record.
pub type Huge = Trivial<1016>;
/// 4 KiB record.
pub type Monster = Trivial<4088>;

const _: () = assert!(size_of::<Small>() == 8);
const _: () = assert!(size_of::<Medium>() == 32);
const _: () = assert!(size_of::<Large>() == 128);
const _: () = assert!(size_of::<Huge>() == 1024);
const _: () = assert!(size_of::<Monster>() == 4 * 1024);

/// Relocation flavour of a [`NonTrivialString`].
///
/// Rust relocates every value with a bitwise move, so the flavours do not
/// change container behaviour; they keep one series per flavour in the report.
pub trait Relocation: Clone + Debug + Default + 'static {
    /// Display name of the element type using this flavour.
    const ELEMENT_NAME: &'static str;
}

/// Cheap, infallible moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct MovableNoExcept;

/// Cheap moves without a no-throw guarantee.
#[derive(Clone, Copy, Debug, Default)]
pub struct Movable;

/// Copy-only relocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonMovable;

impl Relocation for MovableNoExcept {
    const ELEMENT_NAME: &'static str = "NonTrivialString<MovableNoExcept>";
}

impl Relocation for Movable {
    const ELEMENT_NAME: &'static str = "NonTrivialString<Movable>";
}

impl Relocation for NonMovable {
    const ELEMENT_NAME: &'static str = "NonTrivialString<NonMovable>";
}

const PAYLOAD: &str = "some pretty long string to make sure it is not optimized with SSO";

/// Expensive to clone, cheap to move: owns a heap-allocated string payload.
#[derive(Clone, Debug)]
pub struct NonTrivialString<R: Relocation = MovableNoExcept> {
    data: String,
    pub a: usize,
    _relocation: PhantomData<R>,
}

impl<R: Relocation> NonTrivialString<R> {
    /// Returns the owned payload.
    pub fn payload(&self) -> &str {
        &self.data
    }
}

impl<R: Relocation> Default for NonTrivialString<R> {
    fn default() -> Self {
        Self::from_key(0)
    }
}

impl<R: Relocation> Element for NonTrivialString<R> {
    const NAME: &'static str = R::ELEMENT_NAME;

    fn from_key(key: usize) -> Self {
        Self {
            data: PAYLOAD.to_string(),
            a: key,
            _relocation: PhantomData,
        }
    }

    #[inline]
    fn key(&self) -> usize {
        self.a
    }
}

/// Expensive to clone and to move: a key plus `PAD` inline bytes, not `Copy`.
#[derive(Clone, Debug)]
pub struct NonTrivialArray<const PAD: usize> {
    pub a: usize,
    b: [u8; PAD],
}

impl<const PAD: usize> Default for NonTrivialArray<PAD> {
    fn default() -> Self {
        Self::from_key(0)
    }
}

impl<const PAD: usize> Element for NonTrivialArray<PAD> {
    const NAME: &'static str = if PAD == 24 {
        "NonTrivialArray<32>"
    } else {
        "NonTrivialArray"
    };

    #[inline]
    fn from_key(key: usize) -> Self {
        Self { a: key, b: [0; PAD] }
    }

    #[inline]
    fn key(&self) -> usize {
        self.a
    }
}

/// 32-byte non-trivial record.
pub type NonTrivialArray32 = NonTrivialArray<24>;

const _: () = assert!(size_of::<NonTrivialArray32>() == 32);
