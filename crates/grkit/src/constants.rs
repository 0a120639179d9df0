//! Process-level constants.

/// Process exit codes.
pub mod exit_codes {
    /// The memory provider refused an allocation.
    pub const ERROR_ALLOCATION: i32 = 2;
    /// A bad index or an oversized arena request was rejected.
    pub const ERROR_PRECONDITION: i32 = 3;
}
