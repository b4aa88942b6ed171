//! Method-call surface: `"ff".parse_positive_from_hex()`.

use crate::api;
use numeral_core::error::{NumeralResult, RadixError};

/// Conversions callable directly on string slices.
///
/// Each method delegates to the free function of the same name in
/// [`api`](crate::api).
pub trait NumeralExt {
    fn parse_positive_from_octal(&self) -> NumeralResult<i32>;
    fn parse_positive_from_decimal(&self) -> NumeralResult<i32>;
    fn parse_positive_from_hex(&self) -> NumeralResult<i32>;
    fn parse_positive_by_radix(&self, radix: u32) -> NumeralResult<i32>;
    fn parse_by_radix(&self, radix: u32) -> NumeralResult<i32>;

    fn try_parse_positive_from_octal(&self) -> Option<i32>;
    fn try_parse_positive_from_decimal(&self) -> Option<i32>;
    fn try_parse_positive_from_hex(&self) -> Option<i32>;
    fn try_parse_positive_by_radix(&self, radix: u32) -> Result<Option<i32>, RadixError>;
    fn try_parse_by_radix(&self, radix: u32) -> Result<Option<i32>, RadixError>;
}

impl NumeralExt for str {
    #[inline]
    fn parse_positive_from_octal(&self) -> NumeralResult<i32> {
        api::parse_positive_from_octal(self)
    }

    #[inline]
    fn parse_positive_from_decimal(&self) -> NumeralResult<i32> {
        api::parse_positive_from_decimal(self)
    }

    #[inline]
    fn parse_positive_from_hex(&self) -> NumeralResult<i32> {
        api::parse_positive_from_hex(self)
    }

    #[inline]
    fn parse_positive_by_radix(&self, radix: u32) -> NumeralResult<i32> {
        api::parse_positive_by_radix(self, radix)
    }

    #[inline]
    fn parse_by_radix(&self, radix: u32) -> NumeralResult<i32> {
        api::parse_by_radix(self, radix)
    }

    #[inline]
    fn try_parse_positive_from_octal(&self) -> Option<i32> {
        api::try_parse_positive_from_octal(self)
    }

    #[inline]
    fn try_parse_positive_from_decimal(&self) -> Option<i32> {
        api::try_parse_positive_from_decimal(self)
    }

    #[inline]
    fn try_parse_positive_from_hex(&self) -> Option<i32> {
        api::try_parse_positive_from_hex(self)
    }

    #[inline]
    fn try_parse_positive_by_radix(&self, radix: u32) -> Result<Option<i32>, RadixError> {
        api::try_parse_positive_by_radix(self, radix)
    }

    #[inline]
    fn try_parse_by_radix(&self, radix: u32) -> Result<Option<i32>, RadixError> {
        api::try_parse_by_radix(self, radix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeral_core::NumeralError;

    #[test]
    fn methods_on_literals() {
        assert_eq!("777".parse_positive_from_octal(), Ok(511));
        assert_eq!("1024".parse_positive_from_decimal(), Ok(1024));
        assert_eq!("Ff".parse_positive_from_hex(), Ok(255));
        assert_eq!("-64".parse_by_radix(10), Ok(-64));
        assert_eq!("100".parse_positive_by_radix(8), Ok(64));
    }

    #[test]
    fn methods_on_owned_strings() {
        let owned = String::from("7fffffff");
        assert_eq!(owned.parse_positive_from_hex(), Ok(i32::MAX));
        assert_eq!(owned.try_parse_positive_from_decimal(), None);
    }

    #[test]
    fn try_methods() {
        assert_eq!("12".try_parse_positive_from_octal(), Some(10));
        assert_eq!("".try_parse_positive_from_hex(), None);
        assert_eq!("0".try_parse_positive_by_radix(10), Ok(None));
        assert_eq!("abc".try_parse_by_radix(7), Err(RadixError(7)));
    }

    #[test]
    fn strict_methods_surface_radix_error() {
        assert_eq!(
            "1".parse_positive_by_radix(12),
            Err(NumeralError::InvalidRadix(RadixError(12)))
        );
    }
}
