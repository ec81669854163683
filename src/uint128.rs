use core::cmp::Ordering;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Mul, MulAssign, Not, Shl, ShlAssign, Shr, ShrAssign,
    Sub, SubAssign,
};

use crate::IntError;
use crate::limb::{add_with_carry, mul_full64, sub_with_borrow};

/// 128-bit unsigned integer stored as two 64-bit limbs.
///
/// Value = `lo + hi * 2^64`. Every operation takes its operands by value and
/// returns a new value; nothing mutates an operand in place.
/// Range: 0 ..= 340,282,366,920,938,463,463,374,607,431,768,211,455
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct UInt128 {
    lo: u64,
    hi: u64,
}

// ============================================================================
// Constants
// ============================================================================

impl UInt128 {
    /// Zero
    pub const ZERO: Self = Self { lo: 0, hi: 0 };

    /// One
    pub const ONE: Self = Self { lo: 1, hi: 0 };

    /// Largest representable value: 2^128 - 1
    pub const MAX: Self = Self {
        lo: u64::MAX,
        hi: u64::MAX,
    };

    /// Width in bits.
    pub const BITS: u32 = 128;

    /// The size of the binary layout in bytes.
    pub const BYTES: usize = 16;
}

// ============================================================================
// Constructors and Raw Access
// ============================================================================

impl Default for UInt128 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl UInt128 {
    /// Builds a value from its low and high limbs.
    #[inline(always)]
    pub const fn from_limbs(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    /// Widens a native 64-bit value.
    #[inline(always)]
    pub const fn from_u64(value: u64) -> Self {
        Self { lo: value, hi: 0 }
    }

    #[inline(always)]
    pub const fn from_u128(value: u128) -> Self {
        Self {
            lo: value as u64,
            hi: (value >> 64) as u64,
        }
    }

    #[inline(always)]
    pub const fn to_u128(self) -> u128 {
        ((self.hi as u128) << 64) | self.lo as u128
    }

    /// Bits 0-63.
    #[inline(always)]
    pub const fn lo(self) -> u64 {
        self.lo
    }

    /// Bits 64-127.
    #[inline(always)]
    pub const fn hi(self) -> u64 {
        self.hi
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.lo == 0 && self.hi == 0
    }

    /// Number of leading zero bits, 128 for zero.
    #[inline(always)]
    pub const fn leading_zeros(self) -> u32 {
        if self.hi != 0 {
            self.hi.leading_zeros()
        } else {
            64 + self.lo.leading_zeros()
        }
    }
}

// ============================================================================
// Arithmetic Operations - Addition
// ============================================================================

impl UInt128 {
    /// Wrapping addition modulo 2^128.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        self.carrying_add(rhs, false).0
    }

    /// Adds `rhs` and an incoming carry, returning the sum and the carry out
    /// of bit 127. Chain it to build wider additions.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (lo, carry) = add_with_carry(self.lo, rhs.lo, carry);
        let (hi, carry) = add_with_carry(self.hi, rhs.hi, carry);
        (Self { lo, hi }, carry)
    }

    /// Wrapping addition of a native 64-bit value.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn add_u64(self, rhs: u64) -> Self {
        let (lo, carry) = add_with_carry(self.lo, rhs, false);
        let (hi, _) = add_with_carry(self.hi, 0, carry);
        Self { lo, hi }
    }

    /// Checked addition. Returns `None` if the sum exceeds 2^128 - 1.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.carrying_add(rhs, false) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Saturating addition. Clamps at [`UInt128::MAX`].
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Some(sum) => sum,
            None => Self::MAX,
        }
    }

    /// Checked addition. Returns an error if the sum exceeds 2^128 - 1.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_add(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_add(rhs) {
            Some(sum) => Ok(sum),
            None => Err(IntError::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Subtraction
// ============================================================================

impl UInt128 {
    /// Wrapping subtraction modulo 2^128.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        self.borrowing_sub(rhs, false).0
    }

    /// Subtracts `rhs` and an incoming borrow, returning the difference and
    /// whether the subtraction borrowed past bit 127.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (lo, borrow) = sub_with_borrow(self.lo, rhs.lo, borrow);
        let (hi, borrow) = sub_with_borrow(self.hi, rhs.hi, borrow);
        (Self { lo, hi }, borrow)
    }

    /// Wrapping subtraction of a native 64-bit value.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn sub_u64(self, rhs: u64) -> Self {
        let (lo, borrow) = sub_with_borrow(self.lo, rhs, false);
        let (hi, _) = sub_with_borrow(self.hi, 0, borrow);
        Self { lo, hi }
    }

    /// Checked subtraction. Returns `None` if `rhs > self`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.borrowing_sub(rhs, false) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Saturating subtraction. Clamps at zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        match self.checked_sub(rhs) {
            Some(diff) => diff,
            None => Self::ZERO,
        }
    }

    /// Checked subtraction. Returns an error if `rhs > self`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_sub(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_sub(rhs) {
            Some(diff) => Ok(diff),
            None => Err(IntError::Overflow),
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl UInt128 {
    /// Unsigned comparison, high limb first.
    #[inline(always)]
    pub const fn compare(self, other: Self) -> Ordering {
        if self.hi < other.hi {
            Ordering::Less
        } else if self.hi > other.hi {
            Ordering::Greater
        } else if self.lo < other.lo {
            Ordering::Less
        } else if self.lo > other.lo {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline(always)]
    pub const fn min(self, other: Self) -> Self {
        match self.compare(other) {
            Ordering::Greater => other,
            _ => self,
        }
    }

    #[inline(always)]
    pub const fn max(self, other: Self) -> Self {
        match self.compare(other) {
            Ordering::Less => other,
            _ => self,
        }
    }
}

impl Ord for UInt128 {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl PartialOrd for UInt128 {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Shifts
// ============================================================================

impl UInt128 {
    /// Logical left shift. Bits shifted past bit 127 are dropped; shifting by
    /// 128 or more yields zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn shift_left(self, n: u32) -> Self {
        if n == 0 {
            self
        } else if n >= 128 {
            Self::ZERO
        } else if n >= 64 {
            Self {
                lo: 0,
                hi: self.lo << (n - 64),
            }
        } else {
            Self {
                lo: self.lo << n,
                hi: (self.hi << n) | (self.lo >> (64 - n)),
            }
        }
    }

    /// Logical right shift. Shifting by 128 or more yields zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn shift_right(self, n: u32) -> Self {
        if n == 0 {
            self
        } else if n >= 128 {
            Self::ZERO
        } else if n >= 64 {
            Self {
                lo: self.hi >> (n - 64),
                hi: 0,
            }
        } else {
            Self {
                lo: (self.lo >> n) | (self.hi << (64 - n)),
                hi: self.hi >> n,
            }
        }
    }
}

// ============================================================================
// Arithmetic Operations - Multiplication
// ============================================================================

impl UInt128 {
    /// Truncating multiplication: the low 128 bits of the full product.
    ///
    /// The cross terms `hi * lo` only reach the high limb, so their own
    /// overflow is dropped along with everything above bit 127.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        let (hi, lo) = mul_full64(self.lo, rhs.lo);
        let cross = self
            .hi
            .wrapping_mul(rhs.lo)
            .wrapping_add(self.lo.wrapping_mul(rhs.hi));
        Self {
            lo,
            hi: hi.wrapping_add(cross),
        }
    }

    /// Exact 256-bit product, returned as `(high, low)` halves.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn mul_full(self, rhs: Self) -> (Self, Self) {
        let (p0_hi, p0_lo) = mul_full64(self.lo, rhs.lo);
        let (p1_hi, p1_lo) = mul_full64(self.hi, rhs.lo);
        let (p2_hi, p2_lo) = mul_full64(self.lo, rhs.hi);
        let (p3_hi, p3_lo) = mul_full64(self.hi, rhs.hi);

        // limbs of the result, least significant first
        let w0 = p0_lo;

        let (w1, carry) = add_with_carry(p0_hi, p1_lo, false);
        let (w2, carry) = add_with_carry(p3_lo, p1_hi, carry);
        let (w3, _) = add_with_carry(p3_hi, 0, carry);

        let (w1, carry) = add_with_carry(w1, p2_lo, false);
        let (w2, carry) = add_with_carry(w2, p2_hi, carry);
        let (w3, _) = add_with_carry(w3, 0, carry);

        (Self { lo: w2, hi: w3 }, Self { lo: w0, hi: w1 })
    }

    /// Checked multiplication. Returns `None` if the product exceeds
    /// 2^128 - 1.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        let (high, low) = self.mul_full(rhs);
        if high.is_zero() { Some(low) } else { None }
    }

    /// Saturating multiplication. Clamps at [`UInt128::MAX`].
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        match self.checked_mul(rhs) {
            Some(product) => product,
            None => Self::MAX,
        }
    }

    /// Checked multiplication. Returns an error if the product exceeds
    /// 2^128 - 1.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_mul(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_mul(rhs) {
            Some(product) => Ok(product),
            None => Err(IntError::Overflow),
        }
    }
}

// ============================================================================
// Float Conversions
// ============================================================================

/// 2^64 as an f64 (exact).
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// 2^128 as an f64 (exact).
const TWO_POW_128: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

impl UInt128 {
    /// Converts to f64.
    ///
    /// Note: values above 2^53 lose precision to ordinary float rounding.
    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        self.lo as f64 + self.hi as f64 * TWO_POW_64
    }

    /// Creates a UInt128 from an f64, truncating any fractional part.
    ///
    /// Fails with [`IntError::OutOfRange`] for NaN, negative values and
    /// values of 2^128 or more (infinity included).
    pub fn from_f64(value: f64) -> crate::Result<Self> {
        if value.is_nan() || !(0.0..TWO_POW_128).contains(&value) {
            return Err(IntError::OutOfRange);
        }
        if value < 1.0 {
            return Ok(Self::ZERO);
        }

        // value = 0.1mmmm * 2^exp, with the implicit bit made explicit
        let bits = value.to_bits();
        let exp = ((bits >> 52) & 0x7ff) as u32 - 1022;
        if exp <= 64 {
            return Ok(Self::from_u64(value as u64));
        }

        let mantissa = ((bits & ((1 << 52) - 1)) | (1 << 52)) << 11;
        Ok(Self::from_u64(mantissa).shift_left(exp - 64))
    }

    /// Creates a UInt128 from an f64, returning `None` if out of range.
    #[inline(always)]
    pub fn from_f64_checked(value: f64) -> Option<Self> {
        Self::from_f64(value).ok()
    }
}

// ============================================================================
// Bytes Operations
// ============================================================================

impl UInt128 {
    /// Little-endian layout: `lo` in bytes 0-7, `hi` in bytes 8-15.
    #[inline(always)]
    pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
        let lo = self.lo.to_le_bytes();
        let hi = self.hi.to_le_bytes();
        let mut out = [0u8; Self::BYTES];
        let mut i = 0;
        while i < 8 {
            out[i] = lo[i];
            out[i + 8] = hi[i];
            i += 1;
        }
        out
    }

    /// Read UInt128 from its little-endian layout
    #[inline(always)]
    pub const fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            lo[i] = bytes[i];
            hi[i] = bytes[i + 8];
            i += 1;
        }
        Self {
            lo: u64::from_le_bytes(lo),
            hi: u64::from_le_bytes(hi),
        }
    }

    /// Reads the first 16 bytes of `bytes`; trailing bytes are ignored.
    #[inline(always)]
    pub const fn try_read_le_bytes(bytes: &[u8]) -> crate::Result<Self> {
        if bytes.len() < Self::BYTES {
            return Err(IntError::TruncatedData);
        }

        let mut array = [0u8; Self::BYTES];
        let mut i = 0;
        while i < Self::BYTES {
            array[i] = bytes[i];
            i += 1;
        }

        Ok(Self::from_le_bytes(array))
    }

    /// Writes the value as bytes in little-endian order.
    ///
    /// Panics if `buf` is shorter than 16 bytes.
    #[inline(always)]
    pub fn write_le_bytes(&self, buf: &mut [u8]) {
        buf[..Self::BYTES].copy_from_slice(&self.to_le_bytes());
    }

    /// Tries to write the value as bytes in little-endian order.
    #[inline(always)]
    pub fn try_write_le_bytes(&self, buf: &mut [u8]) -> crate::Result<()> {
        if buf.len() < Self::BYTES {
            return Err(IntError::TruncatedData);
        }
        buf[..Self::BYTES].copy_from_slice(&self.to_le_bytes());
        Ok(())
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

// `+`, `-` and `*` wrap modulo 2^128.

impl Add for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl Sub for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl Mul for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl Shl<u32> for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn shl(self, rhs: u32) -> Self::Output {
        self.shift_left(rhs)
    }
}

impl Shr<u32> for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: u32) -> Self::Output {
        self.shift_right(rhs)
    }
}

impl AddAssign for UInt128 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for UInt128 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for UInt128 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ShlAssign<u32> for UInt128 {
    #[inline(always)]
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl ShrAssign<u32> for UInt128 {
    #[inline(always)]
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}

impl BitAnd for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            lo: self.lo & rhs.lo,
            hi: self.hi & rhs.hi,
        }
    }
}

impl BitOr for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            lo: self.lo | rhs.lo,
            hi: self.hi | rhs.hi,
        }
    }
}

impl BitXor for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self {
            lo: self.lo ^ rhs.lo,
            hi: self.hi ^ rhs.hi,
        }
    }
}

impl Not for UInt128 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self {
            lo: !self.lo,
            hi: !self.hi,
        }
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

impl From<u128> for UInt128 {
    #[inline(always)]
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<UInt128> for u128 {
    #[inline(always)]
    fn from(value: UInt128) -> Self {
        value.to_u128()
    }
}

impl From<u64> for UInt128 {
    #[inline(always)]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for UInt128 {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<u16> for UInt128 {
    #[inline(always)]
    fn from(value: u16) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<u8> for UInt128 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        Self::from_u64(value as u64)
    }
}

impl TryFrom<f64> for UInt128 {
    type Error = IntError;

    #[inline(always)]
    fn try_from(value: f64) -> crate::Result<Self> {
        Self::from_f64(value)
    }
}

impl TryFrom<&[u8]> for UInt128 {
    type Error = IntError;

    #[inline(always)]
    fn try_from(bytes: &[u8]) -> crate::Result<Self> {
        Self::try_read_le_bytes(bytes)
    }
}

impl fmt::Debug for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("UInt128")
                .field("lo", &self.lo)
                .field("hi", &self.hi)
                .finish()
        } else {
            write!(f, "UInt128({})", self)
        }
    }
}

// ============================================================================
// Iterator Trait Implementations
// ============================================================================

impl Sum for UInt128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a UInt128> for UInt128 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + *x)
    }
}

impl Product for UInt128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a UInt128> for UInt128 {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * *x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn u(lo: u64, hi: u64) -> UInt128 {
        UInt128::from_limbs(lo, hi)
    }

    #[test]
    fn test_constants() {
        assert_eq!(UInt128::ZERO.to_u128(), 0);
        assert_eq!(UInt128::ONE.to_u128(), 1);
        assert_eq!(UInt128::MAX.to_u128(), u128::MAX);
        assert_eq!(UInt128::default(), UInt128::ZERO);
    }

    #[test]
    fn test_limbs() {
        let a = u(0x1122, 0x3344);
        assert_eq!(a.lo(), 0x1122);
        assert_eq!(a.hi(), 0x3344);
        assert_eq!(a.to_u128(), 0x3344_0000_0000_0000_1122);
        assert_eq!(UInt128::from_u128(a.to_u128()), a);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(UInt128::ZERO.leading_zeros(), 128);
        assert_eq!(UInt128::ONE.leading_zeros(), 127);
        assert_eq!(u(0, 1).leading_zeros(), 63);
        assert_eq!(UInt128::MAX.leading_zeros(), 0);
    }

    #[test]
    fn test_addition() {
        assert_eq!(u(2454, 3421).wrapping_add(u(78731, 831)), u(81185, 4252));
        assert_eq!(
            u(0xffffffffffff1001, 0x2442).wrapping_add(u(0xf003, 0xa8bc)),
            u(0x4, 0xccff)
        );
    }

    #[test]
    fn test_addition_wraps() {
        assert_eq!(UInt128::MAX.wrapping_add(UInt128::ONE), UInt128::ZERO);
        assert_eq!(UInt128::MAX + u(2, 0), UInt128::ONE);
    }

    #[test]
    fn test_add_u64() {
        assert_eq!(u(3454, 3421).add_u64(78731), u(82185, 3421));
        assert_eq!(
            u(0xffffffffffff1001, 0x2446).add_u64(0xf003),
            u(0x4, 0x2447)
        );
    }

    #[test]
    fn test_carrying_add() {
        let cases = [
            (u(8481, 7754), u(1121, 5531), false, u(9602, 13285), false),
            (u(8481, 7754), u(1121, 5531), true, u(9603, 13285), false),
            (
                u(0xfffffffffffffffe, 7754),
                u(1, 5531),
                true,
                u(0, 13286),
                false,
            ),
            (
                u(0xfffffffffffffffd, 7754),
                u(1, 5531),
                true,
                u(0xffffffffffffffff, 13285),
                false,
            ),
            (
                u(0xffffffffffffff22, 0xfffffffffffffffe),
                u(0xde, 1),
                false,
                u(0, 0),
                true,
            ),
            (
                u(0xffffffffffffff25, 0xfffffffffffffffe),
                u(0xde, 2),
                false,
                u(3, 1),
                true,
            ),
            (
                u(0xffffffffffffff25, 0xfffffffffffffffe),
                u(0xd1, 3),
                false,
                u(0xfffffffffffffff6, 1),
                true,
            ),
        ];
        for (a, b, carry, expected, expected_carry) in cases {
            assert_eq!(a.carrying_add(b, carry), (expected, expected_carry));
        }
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(u(1, 0).checked_add(u(2, 0)), Some(u(3, 0)));
        assert_eq!(UInt128::MAX.checked_add(UInt128::ONE), None);
        assert_eq!(UInt128::MAX.saturating_add(UInt128::ONE), UInt128::MAX);
        assert_eq!(UInt128::MAX.try_add(UInt128::ONE), Err(IntError::Overflow));
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(u(81185, 4252).wrapping_sub(u(2454, 3421)), u(78731, 831));
        assert_eq!(
            u(0x4, 0xccff).wrapping_sub(u(0xffffffffffff1001, 0x2442)),
            u(0xf003, 0xa8bc)
        );
        assert_eq!(UInt128::ZERO - UInt128::ONE, UInt128::MAX);
    }

    #[test]
    fn test_sub_u64() {
        assert_eq!(u(81185, 9165).sub_u64(2454), u(78731, 9165));
        assert_eq!(
            u(0x5, 0xccff).sub_u64(0xffffffffffff2001),
            u(0xe004, 0xccfe)
        );
    }

    #[test]
    fn test_borrowing_sub() {
        let cases = [
            (u(81183, 4252), u(2454, 3421), false, u(78729, 831), false),
            (u(81185, 4252), u(2454, 3421), true, u(78730, 831), false),
            (
                u(0x4, 0xccff),
                u(0xffffffffffff1001, 0x2442),
                true,
                u(0xf002, 0xa8bc),
                false,
            ),
            (
                u(81185, 4252),
                u(81183, 4253),
                false,
                u(2, 0xffffffffffffffff),
                true,
            ),
            (
                u(81185, 4252),
                u(81187, 4253),
                false,
                u(0xfffffffffffffffe, 0xfffffffffffffffe),
                true,
            ),
        ];
        for (a, b, borrow, expected, expected_borrow) in cases {
            assert_eq!(a.borrowing_sub(b, borrow), (expected, expected_borrow));
        }
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(u(3, 0).checked_sub(u(1, 0)), Some(u(2, 0)));
        assert_eq!(u(0, 0).checked_sub(u(1, 0)), None);
        assert_eq!(u(0, 0).saturating_sub(u(1, 0)), UInt128::ZERO);
        assert_eq!(u(0, 0).try_sub(u(1, 0)), Err(IntError::Overflow));
    }

    #[test]
    fn test_compare() {
        let cases = [
            (u(3421, 2454), u(831, 78731), Ordering::Less),
            (u(6743, 6841), u(7731121, 1212), Ordering::Greater),
            (u(1821, 33411), u(589759892, 33411), Ordering::Less),
            (u(5788219381, 33411), u(954891, 33411), Ordering::Greater),
            (u(1231, 33411), u(1231, 33411), Ordering::Equal),
        ];
        for (a, b, expected) in cases {
            assert_eq!(a.compare(b), expected);
            assert_eq!(a.cmp(&b), expected);
        }
    }

    #[test]
    fn test_min_max() {
        let a = u(5, 1);
        let b = u(7, 0);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
    }
}


#[cfg(test)]
mod mul_tests {
    use super::*;

    const fn u(lo: u64, hi: u64) -> UInt128 {
        UInt128::from_limbs(lo, hi)
    }

    #[test]
    fn test_wrapping_mul() {
        assert_eq!(
            u(0xc9baa109a40baa11, 0x384b9a928941ac3)
                .wrapping_mul(u(0x1839b9af9dc021, 0x49310ace3a1a15)),
            u(0x6ac740f8d07aac31, 0x2fe36adfd8d92a0e)
        );
        assert_eq!(
            UInt128::MAX.wrapping_mul(u(0xfffffffffffffffd, 0xffffffffffffffff)),
            u(3, 0)
        );
    }

    #[test]
    fn test_mul_full() {
        let (high, low) = u(0xa0a59e0cd5640249, 0x5ff18c5e354dd456)
            .mul_full(u(0x4ddec0edfcc8c414, 0xadf9e6b9046f6ea3));
        assert_eq!(low, u(0xf5a23257e29811b4, 0x89c07fdabef4588c));
        assert_eq!(high, u(0xd8d0c5c68299cf33, 0x4133e4458cfc0e8e));

        let (high, low) = UInt128::MAX.mul_full(u(0xfffffffffffffffd, 0xffffffffffffffff));
        assert_eq!(low, u(3, 0));
        assert_eq!(high, u(0xfffffffffffffffc, 0xffffffffffffffff));
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(u(0, 1).checked_mul(u(0, 1)), None);
        assert_eq!(u(0, 1).checked_mul(u(2, 0)), Some(u(0, 2)));
        assert_eq!(u(0, 1).saturating_mul(u(0, 1)), UInt128::MAX);
        assert_eq!(u(0, 1).try_mul(u(0, 1)), Err(IntError::Overflow));
    }

    #[test]
    fn test_sum_and_product() {
        let values = [u(1, 0), u(2, 0), u(3, 0), u(4, 0)];
        assert_eq!(values.iter().sum::<UInt128>(), u(10, 0));
        assert_eq!(values.iter().product::<UInt128>(), u(24, 0));
        assert_eq!(values.into_iter().sum::<UInt128>(), u(10, 0));
    }
}
