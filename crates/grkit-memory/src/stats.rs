//! Allocation counters and snapshots.

use std::cell::Cell;

use serde::Serialize;

/// Point-in-time view of an arena's accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArenaStats {
    /// Bytes owned by the arena.
    pub capacity: usize,
    /// Bytes handed out so far.
    pub used: usize,
    /// Bytes still available.
    pub available: usize,
    /// Number of successful allocations since the last reset or rewind.
    pub allocations: u64,
    /// Number of rejected allocations since the last reset or rewind.
    pub failed: u64,
}

/// Single-threaded allocation counters.
#[derive(Debug, Default)]
pub struct AllocCounters {
    allocations: Cell<u64>,
    failed: Cell<u64>,
}

impl AllocCounters {
    /// Create new zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the success counter.
    pub fn record_alloc(&self) {
        self.allocations.set(self.allocations.get() + 1);
    }

    /// Increment the failure counter.
    pub fn record_failure(&self) {
        self.failed.set(self.failed.get() + 1);
    }

    /// Successful allocations recorded.
    pub fn allocations(&self) -> u64 {
        self.allocations.get()
    }

    /// Failed allocations recorded.
    pub fn failed(&self) -> u64 {
        self.failed.get()
    }

    /// Reset all counters.
    pub fn reset(&self) {
        self.allocations.set(0);
        self.failed.set(0);
    }
}
