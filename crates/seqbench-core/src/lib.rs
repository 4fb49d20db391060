//! seqbench Core - Element types, containers and policies for sequence benchmarks
//!
//! This crate provides the building blocks that the trial runner composes:
//! - Element catalog spanning a size and copy-cost spectrum
//! - Per-kind container capabilities (vector, list, deque)
//! - Randomized index cache shared across repeated trials
//! - Creation policies producing a fresh container for a trial
//! - Operation policies performing the measured work
//!
//! # Static Composition
//!
//! Policies are unit structs implementing generic traits. A benchmark is the
//! monomorphized combination of a container type, a creation policy and a
//! tuple of operation policies; nothing is boxed or dispatched dynamically
//! inside the timed region.

pub mod cache;
pub mod container;
pub mod create;
pub mod element;
pub mod error;
pub mod operation;
pub mod test_utils;


pub use cache::IndexCache;
pub use container::{ContainerKind, SequenceContainer};
pub use create::{CreatePolicy, Empty, Filled, FilledRandom, SmartFilled};
pub use element::{
    Element, Huge, Large, Medium, Monster, Movable, MovableNoExcept, NonMovable, NonTrivialArray,
    NonTrivialArray32, NonTrivialString, Relocation, Small, Trivial,
};
pub use error::{BenchError, Result};
pub use operation::{
    EmplaceBack, EmplaceFront, Erase, FillBack, FillFront, Find, Insert, NoOp, Operation,
    RandomSortedInsert, RemoveErase, ReserveSize, SmartDelete, Sort, TrialEnv, SCAN_COUNT,
};
