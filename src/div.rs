//! Division engine: 128-by-64 and 256-by-128 long division.

use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::IntError;
use crate::UInt128;
use crate::limb::{div_full128_by_64, sub_with_borrow};

// ============================================================================
// Arithmetic Operations - Division
// ============================================================================

impl UInt128 {
    /// Divides by a 64-bit divisor, returning `(quotient, remainder)`.
    ///
    /// When `hi < divisor` the quotient fits in one limb and the native
    /// 128/64 primitive does the work. Otherwise the divisor is aligned with
    /// the leading bit of `hi` and a restoring shift-subtract loop produces
    /// the full 128-bit quotient.
    pub const fn div64(self, divisor: u64) -> crate::Result<(Self, u64)> {
        if divisor == 0 {
            return Err(IntError::DivisionByZero);
        }

        if self.hi() < divisor {
            return match div_full128_by_64(self.hi(), self.lo(), divisor) {
                Ok((quotient, remainder)) => Ok((Self::from_u64(quotient), remainder)),
                Err(err) => Err(err),
            };
        }

        // divisor <= hi, so the shift is never negative
        let shift = divisor.leading_zeros() - self.hi().leading_zeros();

        // scaled divisor, starting at divisor << (64 + shift)
        let mut div_hi = divisor << shift;
        let mut div_lo = 0u64;

        let mut rem_lo = self.lo();
        let mut rem_hi = self.hi();
        let mut quotient = Self::ZERO;

        let mut i = 0;
        while i < 65 + shift {
            let (lo, borrow) = sub_with_borrow(rem_lo, div_lo, false);
            let (hi, borrow) = sub_with_borrow(rem_hi, div_hi, borrow);

            quotient = quotient.shift_left(1);
            if !borrow {
                rem_lo = lo;
                rem_hi = hi;
                quotient = Self::from_limbs(quotient.lo() | 1, quotient.hi());
            }

            div_lo = (div_lo >> 1) | (div_hi << 63);
            div_hi >>= 1;
            i += 1;
        }

        Ok((quotient, rem_lo))
    }

    /// Divides the 256-bit value `high * 2^128 + low` by `divisor`, returning
    /// a 128-bit `(quotient, remainder)`.
    ///
    /// Fails with [`IntError::DivisionByZero`] for a zero divisor and with
    /// [`IntError::Overflow`] when the quotient needs more than 128 bits,
    /// i.e. when `high >= divisor`.
    pub const fn div_full(high: Self, low: Self, divisor: Self) -> crate::Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(IntError::DivisionByZero);
        }

        if divisor.hi() == 0 && high.is_zero() {
            return match low.div64(divisor.lo()) {
                Ok((quotient, remainder)) => Ok((quotient, Self::from_u64(remainder))),
                Err(err) => Err(err),
            };
        }

        // leading zeros of the top word only; an empty top word counts as 128
        let lz_dividend = high.leading_zeros();
        let lz_divisor = divisor.leading_zeros();

        if lz_dividend < lz_divisor {
            return Err(IntError::Overflow);
        }
        if lz_dividend == lz_divisor && !high.borrowing_sub(divisor, false).1 {
            return Err(IntError::Overflow);
        }

        // align the dividend's leading bit with the divisor's
        let shift = lz_dividend - lz_divisor;
        let mut work_hi = high
            .shift_left(shift)
            .bitor_const(low.shift_right(Self::BITS - shift));
        let mut work_lo = low.shift_left(shift);

        let mut quotient = Self::ZERO;
        // bit pushed out of `work_hi` by the previous step
        let mut carry = false;

        let mut pos = Self::BITS - shift;
        loop {
            let (diff, borrow) = work_hi.borrowing_sub(divisor, false);

            quotient = quotient.shift_left(1);
            if carry || !borrow {
                work_hi = diff;
                quotient = Self::from_limbs(quotient.lo() | 1, quotient.hi());
            }

            if pos == 0 {
                break;
            }
            pos -= 1;

            carry = work_hi.hi() >> 63 != 0;
            work_hi = work_hi
                .shift_left(1)
                .bitor_const(work_lo.shift_right(Self::BITS - 1));
            work_lo = work_lo.shift_left(1);
        }

        Ok((quotient, work_hi))
    }

    /// 128-by-128 division, returning `(quotient, remainder)`.
    #[inline(always)]
    pub const fn div_rem(self, divisor: Self) -> crate::Result<(Self, Self)> {
        Self::div_full(Self::ZERO, self, divisor)
    }

    /// Checked division. Returns `None` if `rhs` is zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => Some(quotient),
            Err(_) => None,
        }
    }

    /// Checked remainder. Returns `None` if `rhs` is zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => Some(remainder),
            Err(_) => None,
        }
    }

    #[inline(always)]
    const fn bitor_const(self, rhs: Self) -> Self {
        Self::from_limbs(self.lo() | rhs.lo(), self.hi() | rhs.hi())
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

impl Div for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl Rem for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs)
            .expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl DivAssign for UInt128 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for UInt128 {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}



#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_div64_identity(a: u128, d in 1u64..) {
            let (quotient, remainder) = UInt128::from(a).div64(d).unwrap();
            prop_assert!(remainder < d);
            prop_assert_eq!(quotient.to_u128(), a / d as u128);
            prop_assert_eq!(remainder as u128, a % d as u128);
        }

        #[test]
        fn prop_div_rem_matches_native(a: u128, d in 1u128..) {
            let (quotient, remainder) = UInt128::from(a).div_rem(UInt128::from(d)).unwrap();
            prop_assert_eq!(quotient.to_u128(), a / d);
            prop_assert_eq!(remainder.to_u128(), a % d);
        }

        #[test]
        fn prop_div_full_identity(q: u128, d in 1u128.., r_seed: u128) {
            // build a dividend from a known quotient and remainder
            let (q, d) = (UInt128::from(q), UInt128::from(d));
            let r = UInt128::from(r_seed % d.to_u128());
            let (high, low) = q.mul_full(d);
            let (low, carry) = low.carrying_add(r, false);
            let high = high.add_u64(carry as u64);

            let (quotient, remainder) = UInt128::div_full(high, low, d).unwrap();
            prop_assert_eq!(quotient, q);
            prop_assert_eq!(remainder, r);
        }

        #[test]
        fn prop_div_full_overflow(high: u128, low: u128, d in 1u128..) {
            prop_assume!(high >= d);
            let (high, low, d) = (UInt128::from(high), UInt128::from(low), UInt128::from(d));
            prop_assert_eq!(UInt128::div_full(high, low, d), Err(IntError::Overflow));
        }
    }
}
