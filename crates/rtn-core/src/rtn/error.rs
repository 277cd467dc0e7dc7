//! Error type for RTN validation and repair.

use thiserror::Error;

/// Why a candidate string was rejected.
///
/// Every malformed input maps to exactly one of these; the engine never
/// panics on bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RtnError {
    /// Candidate is not exactly 9 characters long.
    #[error("incorrect length")]
    IncorrectLength,
    /// A character is not a decimal digit (or the placeholder, when repairing).
    #[error("invalid character")]
    InvalidCharacter,
    /// Weighted digit sum is not a multiple of 10.
    #[error("checksum mismatch")]
    ChecksumMismatch,
    /// More than one placeholder in a repair candidate.
    #[error("too many missing digits")]
    TooManyMissingDigits,
    /// Repair candidate has no placeholder.
    #[error("no missing digits")]
    NoMissingDigits,
    /// Placeholder chosen by the caller is itself a decimal digit.
    #[error("invalid placeholder")]
    InvalidPlaceholder,
}
