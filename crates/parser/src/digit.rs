//! Character to digit-value mapping.
//!
//! One fixed ASCII table serves every radix: an entry is a digit of `radix`
//! iff its value is below the base. That makes the table the single
//! allow-list the [`validator`](crate::validator) checks against.

use numeral_core::Radix;

const NOT_A_DIGIT: u8 = u8::MAX;

static DIGIT_TABLE: [u8; 128] = build_table();

const fn build_table() -> [u8; 128] {
    let mut table = [NOT_A_DIGIT; 128];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
}

/// Value of `ch` as a digit of `radix`, or `None` if `ch` is outside the
/// radix alphabet. Hex letters are case-insensitive.
#[inline]
pub fn digit_value(ch: char, radix: Radix) -> Option<u8> {
    let index = ch as usize;
    if index >= DIGIT_TABLE.len() {
        return None;
    }
    let value = DIGIT_TABLE[index];
    (u32::from(value) < radix.base()).then_some(value)
}

#[inline]
pub fn is_digit(ch: char, radix: Radix) -> bool {
    digit_value(ch, radix).is_some()
}
