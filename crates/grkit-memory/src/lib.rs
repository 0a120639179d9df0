//! # grkit-memory
//!
//! Low-level memory primitives for the `grkit` workspace.
//!
//! Provides a fixed-capacity bump [`Arena`] for batch-scoped byte allocations
//! and a growable [`DynArray`] with an exact doubling schedule. Both are
//! single-owner and single-threaded; every fallible operation returns a
//! [`MemError`] and has no effect when it fails.
#![warn(missing_docs)]

pub mod arena;
pub mod dynarray;
pub mod error;
pub mod stats;
pub mod units;

pub use arena::Arena;
pub use dynarray::{DynArray, GROWTH_FACTOR, INITIAL_CAPACITY};
pub use error::{ErrorKind, MemError};
pub use stats::ArenaStats;
