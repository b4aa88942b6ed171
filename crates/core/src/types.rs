//! Domain types for the numeral parser.

use crate::error::RadixError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Radix
// ---------------------------------------------------------------------------

/// A supported numeral base.
///
/// Serialized as its numeric base; deserialization goes through
/// [`TryFrom<u32>`] so an unsupported base is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u32", into = "u32")
)]
#[repr(u8)]
pub enum Radix {
    Octal = 8,
    Decimal = 10,
    Hex = 16,
}

impl Radix {
    pub const ALL: [Radix; 3] = [Radix::Octal, Radix::Decimal, Radix::Hex];

    #[inline]
    pub const fn base(self) -> u32 {
        self as u32
    }

    /// Only decimal text may carry a leading `-`.
    #[inline]
    pub const fn allows_sign(self) -> bool {
        matches!(self, Radix::Decimal)
    }
}

impl TryFrom<u32> for Radix {
    type Error = RadixError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        match base {
            8 => Ok(Radix::Octal),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hex),
            other => Err(RadixError(other)),
        }
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.base()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base())
    }
}

// ---------------------------------------------------------------------------
// Sign policy
// ---------------------------------------------------------------------------

/// Whether a leading `-` is legal, and which range the result must land in.
///
/// `Unsigned` accepts `[0, i32::MAX]`; `Signed` accepts the full `i32` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SignPolicy {
    #[default]
    Unsigned,
    Signed,
}

impl SignPolicy {
    /// `true` when `radix` text under this policy may start with `-`.
    #[inline]
    pub const fn permits_minus(self, radix: Radix) -> bool {
        matches!(self, SignPolicy::Signed) && radix.allows_sign()
    }
}

// Discriminants double as bases.
const _: () = assert!(Radix::Octal as u32 == 8);
const _: () = assert!(Radix::Hex as u32 == 16);
