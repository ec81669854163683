//! Fixed-width 128-bit unsigned integers built from two 64-bit limbs
//!
//! This library provides [`UInt128`], a plain value type for callers that need
//! more than 64 bits of precision without pulling in an arbitrary-precision
//! bignum:
//!
//! - **Arithmetic**: wrapping add/sub/mul, carry and borrow chaining, full
//!   128×128→256 multiplication, logical shifts
//! - **Division**: 128-by-64 and 256-by-128 long division with explicit
//!   overflow and division-by-zero errors
//! - **Decimal text**: allocation-free formatting and range-checked parsing
//! - **Interop**: `f64` conversion and a fixed 16-byte little-endian layout
//!
//! ## Features
//!
//! - **no_std compatible**: only `core` is required
//! - **`alloc`**: locale-aware formatting and parsing ([`Locale`])
//! - **`serde`**: JSON emits a bare number when the value fits in 64 bits and
//!   a decimal string otherwise; binary formats get the 16-byte layout
//!
//! ## Example
//!
//! ```rust
//! use fixint::UInt128;
//!
//! let total = UInt128::from_u64(u64::MAX).wrapping_add(UInt128::ONE);
//! assert_eq!(total, UInt128::from_limbs(0, 1));
//!
//! let (q, r) = total.div64(7).unwrap();
//! assert_eq!(q.to_string(), "2635249153387078802");
//! assert_eq!(r, 2);
//!
//! let parsed: UInt128 = "340282366920938463463374607431768211455".parse().unwrap();
//! assert_eq!(parsed, UInt128::MAX);
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod decimal;
mod div;
pub mod limb;
#[cfg(feature = "alloc")]
mod locale;
#[cfg(feature = "serde")]
mod serde_impl;
mod uint128;

pub use decimal::{MAX_DIGITS, POW10};
#[cfg(feature = "alloc")]
pub use locale::Locale;
pub use uint128::UInt128;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("overflow: quotient does not fit in the result width")]
    Overflow,

    #[error("value out of range for a 128-bit unsigned integer")]
    OutOfRange,

    #[error("invalid syntax: expected unsigned decimal digits")]
    InvalidSyntax,

    #[error("data too small: expected at least 16 bytes")]
    TruncatedData,
}

pub type Result<T> = core::result::Result<T, IntError>;
