//! 64-bit limb primitives.
//!
//! Every multi-limb routine in the crate is built from these four
//! operations. Carries and borrows are always 0 or 1 and are modelled as
//! `bool`.

use crate::IntError;

/// Adds `x + y + carry`, returning the low 64 bits and the carry out.
#[inline(always)]
pub const fn add_with_carry(x: u64, y: u64, carry: bool) -> (u64, bool) {
    let (sum, c1) = x.overflowing_add(y);
    let (sum, c2) = sum.overflowing_add(carry as u64);
    (sum, c1 | c2)
}

/// Computes `x - y - borrow`, returning the wrapped difference and the borrow
/// out. The borrow out is set iff `x < y + borrow`.
#[inline(always)]
pub const fn sub_with_borrow(x: u64, y: u64, borrow: bool) -> (u64, bool) {
    let (diff, b1) = x.overflowing_sub(y);
    let (diff, b2) = diff.overflowing_sub(borrow as u64);
    (diff, b1 | b2)
}

/// Exact 128-bit product of two limbs, returned as `(hi, lo)`.
#[inline(always)]
pub const fn mul_full64(x: u64, y: u64) -> (u64, u64) {
    let product = x as u128 * y as u128;
    ((product >> 64) as u64, product as u64)
}

/// Divides the 128-bit value `hi:lo` by `divisor`, returning
/// `(quotient, remainder)`.
///
/// The quotient must fit in 64 bits, so `divisor <= hi` fails with
/// [`IntError::Overflow`]. A zero divisor fails with
/// [`IntError::DivisionByZero`].
#[inline(always)]
pub const fn div_full128_by_64(hi: u64, lo: u64, divisor: u64) -> crate::Result<(u64, u64)> {
    if divisor == 0 {
        return Err(IntError::DivisionByZero);
    }
    if divisor <= hi {
        return Err(IntError::Overflow);
    }

    let dividend = ((hi as u128) << 64) | lo as u128;
    let divisor = divisor as u128;
    Ok(((dividend / divisor) as u64, (dividend % divisor) as u64))
}
