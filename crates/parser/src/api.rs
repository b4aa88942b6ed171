//! Public conversion entry points.
//!
//! Two families share one pipeline (validate -> map -> accumulate ->
//! sign-adjust -> range-check):
//!
//! - **strict** functions return `Err(NumeralError)` on any failure;
//! - **try** functions fold data errors into `None`. An unsupported radix is
//!   still an `Err(RadixError)` there, since it is a caller bug.
//!
//! The `positive` variants additionally require the result to be `> 0`.

use crate::accumulator;
use crate::validator::{self, Validated};
use numeral_core::error::{NumeralError, NumeralResult, RadixError};
use numeral_core::{Radix, SignPolicy};

// ---------------------------------------------------------------------------
// Core pipeline
// ---------------------------------------------------------------------------

/// Parses `source` in `radix` under `policy`. Every entry point lands here.
pub fn parse_with(source: &str, radix: Radix, policy: SignPolicy) -> NumeralResult<i32> {
    let result = run_pipeline(source, radix, policy);
    match &result {
        Ok(value) => {
            tracing::trace!(input = source, radix = %radix, ?policy, value, "parsed");
        }
        Err(e) => {
            tracing::debug!(input = source, radix = %radix, ?policy, error = %e, "rejected");
        }
    }
    result
}

fn run_pipeline(source: &str, radix: Radix, policy: SignPolicy) -> NumeralResult<i32> {
    let Validated { negative, digits } = validator::validate(source, radix, policy)?;

    let overflow = || NumeralError::Overflow {
        input: source.to_owned(),
    };

    let magnitude = accumulator::accumulate(&digits, radix, accumulator::limit_for(negative))
        .ok_or_else(overflow)?;

    accumulator::apply_sign(magnitude, negative).ok_or_else(overflow)
}

fn require_positive(source: &str, value: i32) -> NumeralResult<i32> {
    if value > 0 {
        Ok(value)
    } else {
        Err(NumeralError::NonPositiveResult {
            input: source.to_owned(),
            value,
        })
    }
}

// ---------------------------------------------------------------------------
// Typed entry points (radix already validated)
// ---------------------------------------------------------------------------

/// Unsigned parse with the `> 0` postcondition.
pub fn parse_positive(source: &str, radix: Radix) -> NumeralResult<i32> {
    let value = parse_with(source, radix, SignPolicy::Unsigned)?;
    require_positive(source, value)
}

/// Signed parse. A leading `-` is accepted for decimal only.
pub fn parse_signed(source: &str, radix: Radix) -> NumeralResult<i32> {
    parse_with(source, radix, SignPolicy::Signed)
}

pub fn try_parse_positive(source: &str, radix: Radix) -> Option<i32> {
    parse_positive(source, radix).ok()
}

pub fn try_parse_signed(source: &str, radix: Radix) -> Option<i32> {
    parse_signed(source, radix).ok()
}

// ---------------------------------------------------------------------------
// Strict family
// ---------------------------------------------------------------------------

pub fn parse_positive_from_octal(source: &str) -> NumeralResult<i32> {
    parse_positive(source, Radix::Octal)
}

pub fn parse_positive_from_decimal(source: &str) -> NumeralResult<i32> {
    parse_positive(source, Radix::Decimal)
}

pub fn parse_positive_from_hex(source: &str) -> NumeralResult<i32> {
    parse_positive(source, Radix::Hex)
}

/// Positive parse with a raw radix. The radix is checked before the input.
pub fn parse_positive_by_radix(source: &str, radix: u32) -> NumeralResult<i32> {
    parse_positive(source, Radix::try_from(radix)?)
}

/// Signed parse with a raw radix. The radix is checked before the input.
pub fn parse_by_radix(source: &str, radix: u32) -> NumeralResult<i32> {
    parse_signed(source, Radix::try_from(radix)?)
}

/// Unsigned conversion without the positivity requirement: `"0"` is `Ok(0)`.
pub fn from_base_to_decimal(source: &str, radix: u32) -> NumeralResult<i32> {
    parse_with(source, Radix::try_from(radix)?, SignPolicy::Unsigned)
}

/// Signed conversion; same contract as [`parse_by_radix`].
pub fn to_decimal(source: &str, radix: u32) -> NumeralResult<i32> {
    parse_by_radix(source, radix)
}

// ---------------------------------------------------------------------------
// Try family
// ---------------------------------------------------------------------------

pub fn try_parse_positive_from_octal(source: &str) -> Option<i32> {
    try_parse_positive(source, Radix::Octal)
}

pub fn try_parse_positive_from_decimal(source: &str) -> Option<i32> {
    try_parse_positive(source, Radix::Decimal)
}

pub fn try_parse_positive_from_hex(source: &str) -> Option<i32> {
    try_parse_positive(source, Radix::Hex)
}

/// `Err` only for an unsupported radix; bad input is `Ok(None)`.
pub fn try_parse_positive_by_radix(source: &str, radix: u32) -> Result<Option<i32>, RadixError> {
    Ok(try_parse_positive(source, Radix::try_from(radix)?))
}

/// `Err` only for an unsupported radix; bad input is `Ok(None)`.
pub fn try_parse_by_radix(source: &str, radix: u32) -> Result<Option<i32>, RadixError> {
    Ok(try_parse_signed(source, Radix::try_from(radix)?))
}
