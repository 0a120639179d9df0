//! Byte-size helpers.

use crate::error::MemError;

const fn scale(n: usize, factor: usize) -> usize {
    match n.checked_mul(factor) {
        Some(bytes) => bytes,
        None => panic!("byte size overflows usize"),
    }
}

/// `n` kibibytes in bytes.
///
/// # Panics
///
/// Panics if the result does not fit in `usize`; use [`parse_size`] for
/// untrusted input.
#[must_use]
pub const fn kilobytes(n: usize) -> usize {
    scale(n, 1024)
}

/// `n` mebibytes in bytes.
///
/// # Panics
///
/// Panics if the result does not fit in `usize`.
#[must_use]
pub const fn megabytes(n: usize) -> usize {
    scale(n, 1024 * 1024)
}

/// `n` gibibytes in bytes.
///
/// # Panics
///
/// Panics if the result does not fit in `usize`.
#[must_use]
pub const fn gigabytes(n: usize) -> usize {
    scale(n, 1024 * 1024 * 1024)
}

/// Parse a size string (e.g., "1K", "64M", "2G", "512B", "4096").
///
/// Suffixes are binary multiples and case-insensitive.
pub fn parse_size(s: &str) -> Result<usize, MemError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MemError::InvalidSize("empty size".into()));
    }

    let upper = s.to_ascii_uppercase();
    let (num_str, multiplier) = if let Some(n) = upper.strip_suffix('G') {
        (n, gigabytes(1))
    } else if let Some(n) = upper.strip_suffix('M') {
        (n, megabytes(1))
    } else if let Some(n) = upper.strip_suffix('K') {
        (n, kilobytes(1))
    } else if let Some(n) = upper.strip_suffix('B') {
        (n, 1)
    } else {
        (upper.as_str(), 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| MemError::InvalidSize(format!("{s:?}: {e}")))?;
    value
        .checked_mul(multiplier)
        .ok_or(MemError::CapacityOverflow)
}
