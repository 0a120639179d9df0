//! Error handling and exit codes.

use grkit_memory::{ErrorKind, MemError};

use crate::constants::exit_codes;

/// Handle a memory error and return the appropriate exit code.
#[must_use]
pub fn handle_error(err: &MemError) -> i32 {
    match err.kind() {
        ErrorKind::AllocationFailure => exit_codes::ERROR_ALLOCATION,
        ErrorKind::PreconditionViolation => exit_codes::ERROR_PRECONDITION,
    }
}
