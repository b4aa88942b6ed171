//! Input validation against the per-radix alphabet and sign policy.
//!
//! Mapping happens in the same pass: every accepted character is turned into
//! its digit value, so the accumulator never sees raw text.

use crate::digit;
use numeral_core::error::{NumeralError, NumeralResult};
use numeral_core::{Radix, SignPolicy};
use smallvec::SmallVec;

/// Digit values of a validated input, most significant first.
///
/// `SmallVec<[u8; 32]>` keeps every in-range input on the stack; only
/// long runs of leading zeros spill to the heap.
pub type Digits = SmallVec<[u8; 32]>;

/// Input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub negative: bool,
    pub digits: Digits,
}

/// Checks `source` against the alphabet of `radix` and `policy`.
///
/// A `-` is legal only as the first character, and only when
/// `policy.permits_minus(radix)`. It must be followed by at least one digit.
/// The first offending character (left to right) is reported.
pub fn validate(source: &str, radix: Radix, policy: SignPolicy) -> NumeralResult<Validated> {
    if source.is_empty() {
        return Err(NumeralError::EmptyInput);
    }

    let invalid = |ch: char, position: usize| NumeralError::InvalidCharacter {
        input: source.to_owned(),
        ch,
        position,
    };

    let (negative, body, offset) = match source.strip_prefix('-') {
        Some(rest) if policy.permits_minus(radix) => (true, rest, 1),
        Some(_) => return Err(invalid('-', 0)),
        None => (false, source, 0),
    };

    if body.is_empty() {
        return Err(invalid('-', 0));
    }

    let mut digits = Digits::new();
    for (i, ch) in body.chars().enumerate() {
        match digit::digit_value(ch, radix) {
            Some(value) => digits.push(value),
            None => return Err(invalid(ch, i + offset)),
        }
    }

    Ok(Validated { negative, digits })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_at(source: &str, radix: Radix, policy: SignPolicy) -> (char, usize) {
        match validate(source, radix, policy) {
            Err(NumeralError::InvalidCharacter { ch, position, input }) => {
                assert_eq!(input, source);
                (ch, position)
            }
            other => panic!("expected InvalidCharacter for {source:?}, got {other:?}"),
        }
    }

    #[test]
    fn empty_is_rejected_before_characters() {
        for radix in Radix::ALL {
            assert_eq!(
                validate("", radix, SignPolicy::Signed),
                Err(NumeralError::EmptyInput)
            );
        }
    }

    #[test]
    fn maps_digits_in_order() {
        let v = validate("7f0A", Radix::Hex, SignPolicy::Unsigned).unwrap();
        assert!(!v.negative);
        assert_eq!(v.digits.as_slice(), &[7, 15, 0, 10]);
    }

    #[test]
    fn octal_rejects_eight_and_nine() {
        assert_eq!(invalid_at("1238", Radix::Octal, SignPolicy::Unsigned), ('8', 3));
        assert_eq!(invalid_at("91", Radix::Octal, SignPolicy::Signed), ('9', 0));
    }

    #[test]
    fn minus_accepted_for_signed_decimal() {
        let v = validate("-42", Radix::Decimal, SignPolicy::Signed).unwrap();
        assert!(v.negative);
        assert_eq!(v.digits.as_slice(), &[4, 2]);
    }

    #[test]
    fn minus_rejected_everywhere_else() {
        assert_eq!(invalid_at("-42", Radix::Decimal, SignPolicy::Unsigned), ('-', 0));
        assert_eq!(invalid_at("-ff", Radix::Hex, SignPolicy::Signed), ('-', 0));
        assert_eq!(invalid_at("-17", Radix::Octal, SignPolicy::Signed), ('-', 0));
    }

    #[test]
    fn minus_only_in_leading_position() {
        assert_eq!(invalid_at("4-2", Radix::Decimal, SignPolicy::Signed), ('-', 1));
        assert_eq!(invalid_at("--2", Radix::Decimal, SignPolicy::Signed), ('-', 1));
        assert_eq!(invalid_at("-", Radix::Decimal, SignPolicy::Signed), ('-', 0));
    }

    #[test]
    fn punctuation_and_whitespace_rejected() {
        for (source, ch) in [("+5", '+'), (" 5", ' '), ("5 ", ' '), ("$5", '$'), ("0x1f", 'x')] {
            let (found, _) = invalid_at(source, Radix::Hex, SignPolicy::Signed);
            assert_eq!(found, ch, "{source:?}");
        }
    }

    #[test]
    fn position_counts_characters_not_bytes() {
        assert_eq!(invalid_at("1é2z", Radix::Decimal, SignPolicy::Signed), ('é', 1));
        assert_eq!(invalid_at("-1€", Radix::Decimal, SignPolicy::Signed), ('€', 2));
    }

    #[test]
    fn letter_o_is_not_zero() {
        assert_eq!(invalid_at("1O", Radix::Octal, SignPolicy::Unsigned), ('O', 1));
    }
}
