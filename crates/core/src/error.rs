//! Centralized error types for the numeral workspace.

use thiserror::Error;

/// A radix outside {8, 10, 16}.
///
/// Kept separate from [`NumeralError`] because it is the only failure the
/// try-family still reports as an error: it signals a caller bug, not bad data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported radix: {0} (expected 8, 10 or 16)")]
pub struct RadixError(pub u32);

/// Every way a conversion can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumeralError {
    #[error("Empty input")]
    EmptyInput,

    #[error(transparent)]
    InvalidRadix(#[from] RadixError),

    #[error("Invalid character {ch:?} at position {position} in {input:?}")]
    InvalidCharacter {
        input: String,
        ch: char,
        position: usize,
    },

    #[error("Overflow: {input:?} does not fit in a signed 32-bit integer")]
    Overflow { input: String },

    #[error("Non-positive result: {input:?} parsed to {value}")]
    NonPositiveResult { input: String, value: i32 },
}

impl NumeralError {
    /// `true` for failures caused by the input text rather than by the caller.
    ///
    /// The try-family folds exactly these into `None`.
    pub fn is_data_error(&self) -> bool {
        !matches!(self, NumeralError::InvalidRadix(_))
    }
}

pub type NumeralResult<T> = Result<T, NumeralError>;
