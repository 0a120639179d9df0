//! Fixed-capacity bump arena.
//!
//! Backed by a single bumpalo chunk acquired up front. Allocations only move
//! the offset forward; memory comes back all at once through [`Arena::reset`]
//! (release the block) or [`Arena::rewind`] (keep the block, start over).
//!
//! Slices handed out by [`Arena::alloc`] borrow the arena, and both `reset`
//! and `rewind` take `&mut self`, so a slice can never outlive the memory it
//! points into.

use std::cell::Cell;

use bumpalo::Bump;
use tracing::{debug, trace, warn};

use crate::error::MemError;
use crate::stats::{AllocCounters, ArenaStats};

/// Bump allocator over one fixed-size block of bytes.
///
/// Allocations are byte-granular with no alignment padding: callers that
/// need typed storage must request enough slack themselves.
pub struct Arena {
    bump: Bump,
    capacity: usize,
    offset: Cell<usize>,
    counters: AllocCounters,
}

impl Arena {
    /// Acquire a block of `bytes` bytes.
    ///
    /// If the block cannot be acquired the returned arena has capacity 0 and
    /// every non-empty allocation from it fails. Use
    /// [`Arena::try_with_capacity`] to observe the failure directly.
    #[must_use]
    pub fn create(bytes: usize) -> Self {
        match Self::try_with_capacity(bytes) {
            Ok(arena) => arena,
            Err(err) => {
                warn!(bytes, %err, "arena creation failed, returning empty arena");
                Self::empty()
            }
        }
    }

    /// Acquire a block of `bytes` bytes, reporting failure.
    pub fn try_with_capacity(bytes: usize) -> Result<Self, MemError> {
        let bump =
            Bump::try_with_capacity(bytes).map_err(|_| MemError::AllocationFailed { bytes })?;
        debug!(bytes, "arena created");
        Ok(Self {
            bump,
            capacity: bytes,
            offset: Cell::new(0),
            counters: AllocCounters::new(),
        })
    }

    /// An arena that owns no memory.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bump: Bump::new(),
            capacity: 0,
            offset: Cell::new(0),
            counters: AllocCounters::new(),
        }
    }

    /// Hand out the next `bytes` bytes, zero-filled.
    ///
    /// Fails with [`MemError::ArenaExhausted`] when `bytes` exceeds
    /// [`Arena::avail`]; the offset is left unchanged in that case.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc(&self, bytes: usize) -> Result<&mut [u8], MemError> {
        self.reserve(bytes)?;
        Ok(self.bump.alloc_slice_fill_copy(bytes, 0u8))
    }

    /// Copy `src` into the arena and return the arena-owned copy.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_copy(&self, src: &[u8]) -> Result<&mut [u8], MemError> {
        self.reserve(src.len())?;
        Ok(self.bump.alloc_slice_copy(src))
    }

    /// Copy a string into the arena.
    pub fn alloc_str(&self, s: &str) -> Result<&str, MemError> {
        self.reserve(s.len())?;
        Ok(self.bump.alloc_str(s))
    }

    fn reserve(&self, bytes: usize) -> Result<(), MemError> {
        let available = self.avail();
        if bytes > available {
            self.counters.record_failure();
            trace!(requested = bytes, available, "arena allocation rejected");
            return Err(MemError::ArenaExhausted {
                requested: bytes,
                available,
            });
        }
        let start = self.offset.get();
        self.offset.set(start + bytes);
        self.counters.record_alloc();
        trace!(offset = start, bytes, "arena allocation");
        Ok(())
    }

    /// Bytes handed out so far.
    #[must_use]
    pub fn used(&self) -> usize {
        self.offset.get()
    }

    /// Bytes still available.
    #[must_use]
    pub fn avail(&self) -> usize {
        self.capacity - self.offset.get()
    }

    /// Total bytes owned by the arena.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the arena owns no memory (failed creation or after reset).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Release the whole block; capacity and offset drop to zero.
    ///
    /// No destructors run for values placed in the arena.
    pub fn reset(&mut self) {
        debug!(capacity = self.capacity, used = self.used(), "arena reset");
        self.bump = Bump::new();
        self.capacity = 0;
        self.offset.set(0);
        self.counters.reset();
    }

    /// Start handing out the block from the beginning again.
    pub fn rewind(&mut self) {
        self.bump.reset();
        self.offset.set(0);
        self.counters.reset();
    }

    /// Snapshot of the arena's accounting.
    #[must_use]
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            capacity: self.capacity,
            used: self.used(),
            available: self.avail(),
            allocations: self.counters.allocations(),
            failed: self.counters.failed(),
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .field("used", &self.used())
            .finish_non_exhaustive()
    }
}
