//! Decimal text codec: formatting and range-checked parsing.

use core::fmt;
use core::str::FromStr;

use crate::IntError;
use crate::UInt128;

/// Maximum number of decimal digits in a [`UInt128`] (2^128 - 1 has 39).
pub const MAX_DIGITS: usize = 39;

/// `10^0` through `10^38`, the largest power of ten below 2^128.
pub static POW10: [UInt128; MAX_DIGITS] = {
    let ten = UInt128::from_u64(10);
    let mut table = [UInt128::ONE; MAX_DIGITS];
    let mut i = 1;
    while i < MAX_DIGITS {
        table[i] = table[i - 1].wrapping_mul(ten);
        i += 1;
    }
    table
};

/// floor((2^128 - 1) / 10): the largest accumulator that can take another
/// digit without overflowing.
const PARSE_LIMIT: UInt128 = UInt128::from_limbs(11068046444225730969, 1844674407370955161);

/// Digits that always fit the 64-bit multiply-accumulate fast path.
const FAST_PARSE_DIGITS: usize = 19;

/// Largest power whose 8x multiple still fits in a single limb.
const NARROW_MAX_POWER: usize = 18;

// ============================================================================
// Formatting
// ============================================================================

impl UInt128 {
    /// Writes the canonical decimal form into `buf` and returns it.
    ///
    /// Digits are extracted most significant first: each power of ten from the
    /// top down is subtracted at weights 8, 4, 2 and 1, which covers every
    /// digit 0-9 exactly. Once the remainder fits in one limb the loop drops
    /// to native 64-bit arithmetic.
    pub fn encode_decimal<'a>(&self, buf: &'a mut [u8; MAX_DIGITS]) -> &'a str {
        if self.is_zero() {
            buf[0] = b'0';
            return "0";
        }

        // number of powers <= value, at least one since value >= 1
        let mut power = POW10.partition_point(|p| p <= self);
        let mut rem = *self;
        let mut len = 0;

        while power > 0 && (power - 1 > NARROW_MAX_POWER || rem.hi() != 0) {
            power -= 1;
            let (digit, next) = wide_digit(rem, power);
            rem = next;
            buf[len] = b'0' + digit;
            len += 1;
        }

        let mut narrow = rem.lo();
        while power > 0 {
            power -= 1;
            let (digit, next) = narrow_digit(narrow, POW10[power].lo());
            narrow = next;
            buf[len] = b'0' + digit;
            len += 1;
        }

        core::str::from_utf8(&buf[..len]).unwrap_or("0")
    }
}

/// One digit at `10^power` by bit-trial subtraction over the full width.
#[inline]
fn wide_digit(mut rem: UInt128, power: usize) -> (u8, UInt128) {
    let unit = POW10[power];
    // 4 * 10^38 does not fit in 128 bits; the top digit is at most 3
    let top_weight = if power + 1 < MAX_DIGITS { 3 } else { 1 };

    let mut digit = 0u8;
    let mut weight = top_weight + 1;
    while weight > 0 {
        weight -= 1;
        let (diff, borrow) = rem.borrowing_sub(unit.shift_left(weight), false);
        if !borrow {
            rem = diff;
            digit += 1 << weight;
        }
    }
    (digit, rem)
}

/// Single-limb variant of [`wide_digit`].
#[inline]
fn narrow_digit(mut rem: u64, unit: u64) -> (u8, u64) {
    let mut digit = 0u8;
    for weight in [3, 2, 1, 0] {
        let scaled = unit << weight;
        if rem >= scaled {
            rem -= scaled;
            digit += 1 << weight;
        }
    }
    (digit, rem)
}

impl fmt::Display for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_DIGITS];
        f.pad_integral(true, "", self.encode_decimal(&mut buf))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl UInt128 {
    /// Parses an unsigned decimal string.
    ///
    /// Accepts one or more ASCII digits and nothing else: no sign, no
    /// separators, no surrounding whitespace. Leading zeros are allowed.
    /// Values above 2^128 - 1 fail with [`IntError::OutOfRange`]; anything
    /// else malformed fails with [`IntError::InvalidSyntax`].
    pub fn parse_decimal(s: &str) -> crate::Result<Self> {
        Self::from_utf8_bytes(s.as_bytes())
    }

    /// Parses an unsigned decimal number from raw bytes.
    pub fn from_utf8_bytes(bytes: &[u8]) -> crate::Result<Self> {
        if bytes.is_empty() {
            return Err(IntError::InvalidSyntax);
        }

        let head = bytes.len().min(FAST_PARSE_DIGITS);
        let mut acc = 0u64;
        for &byte in &bytes[..head] {
            let digit = byte.wrapping_sub(b'0');
            if digit > 9 {
                return Err(IntError::InvalidSyntax);
            }
            acc = acc * 10 + digit as u64;
        }

        let mut value = Self::from_u64(acc);
        for &byte in &bytes[head..] {
            let digit = byte.wrapping_sub(b'0');
            if digit > 9 {
                return Err(IntError::InvalidSyntax);
            }
            if value > PARSE_LIMIT {
                return Err(IntError::OutOfRange);
            }

            // value * 10 = value * 8 + value * 2
            let times_ten = value.shift_left(3).wrapping_add(value.shift_left(1));
            let (next, carry) = times_ten.carrying_add(Self::from_u64(digit as u64), false);
            if carry {
                return Err(IntError::OutOfRange);
            }
            value = next;
        }

        Ok(value)
    }

    /// Parses a numeral that may be wrapped in double or single quotes, as
    /// found in JSON-bearing payloads: `123`, `"123"` or `'123'`.
    pub fn from_quoted_str(s: &str) -> crate::Result<Self> {
        let inner = match s.as_bytes() {
            [b'"', inner @ .., b'"'] | [b'\'', inner @ .., b'\''] => inner,
            bytes => bytes,
        };
        Self::from_utf8_bytes(inner)
    }
}

impl FromStr for UInt128 {
    type Err = IntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_decimal(s)
    }
}



#[cfg(test)]
mod property_tests {
    use std::string::ToString;

    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_format_matches_native(a: u128) {
            prop_assert_eq!(UInt128::from(a).to_string(), a.to_string());
        }

        #[test]
        fn prop_parse_format_roundtrip(a: u128) {
            let value = UInt128::from(a);
            let mut buf = [0u8; MAX_DIGITS];
            let text = value.encode_decimal(&mut buf);
            prop_assert_eq!(UInt128::parse_decimal(text), Ok(value));
        }

        #[test]
        fn prop_parse_matches_native(s in "[0-9]{1,45}") {
            let expected = s.parse::<u128>().map_err(|_| IntError::OutOfRange);
            prop_assert_eq!(UInt128::parse_decimal(&s).map(UInt128::to_u128), expected);
        }

        #[test]
        fn prop_small_values_stay_narrow(a: u64) {
            prop_assert_eq!(UInt128::from_u64(a).to_string(), a.to_string());
        }
    }
}
