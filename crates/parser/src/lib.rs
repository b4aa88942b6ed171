//! Octal, decimal and hexadecimal text to `i32`, in strict and try flavors.
//!
//! Pipeline: [`validator`] (alphabet + sign policy, mapping through
//! [`digit`]) -> [`accumulator`] (positional fold, sign, range check) ->
//! [`api`] (strict `Result` or try `Option`).

pub mod accumulator;
pub mod api;
pub mod digit;
pub mod ext;
pub mod validator;

pub use api::{
    from_base_to_decimal, parse_by_radix, parse_positive, parse_positive_by_radix,
    parse_positive_from_decimal, parse_positive_from_hex, parse_positive_from_octal,
    parse_signed, parse_with, to_decimal, try_parse_by_radix, try_parse_positive,
    try_parse_positive_by_radix, try_parse_positive_from_decimal, try_parse_positive_from_hex,
    try_parse_positive_from_octal, try_parse_signed,
};
pub use ext::NumeralExt;
pub use numeral_core::{NumeralError, NumeralResult, Radix, RadixError, SignPolicy};
