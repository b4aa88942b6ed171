//! Radix and sign-policy types plus error definitions.
//!
//! Foundation crate -- no parsing logic and no I/O.

pub mod error;
pub mod types;

pub use error::{NumeralError, NumeralResult, RadixError};
pub use types::{Radix, SignPolicy};
