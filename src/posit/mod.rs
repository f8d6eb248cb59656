//! This module and its submodules contain the posit codec: the bit-level decoder and encoder, the
//! arithmetic and conversion kernels built on them, and the quire.
//!
//! Every nontrivial operation has the same shape:
//!
//!   1. Short-circuit the special values, 0 and NaR.
//!   2. Decode each operand into a [`Decoded`] (sign, exponent, fraction).
//!   3. Run a *kernel* on the decoded operands, exactly or with a `sticky` bit standing in for any
//!      nonzero bits that were discarded.
//!   4. Round once and re-encode, with [`Decoded::encode_regular_round`].
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.

/// A Posit floating point number with `N` bits and `ES` exponent bits, using `Int` as its
/// underlying type.
///
/// Only the four standard formats are accepted: `N` must be the width of `Int`, one of 8, 16, 32
/// or 64, and `ES` must be `log2(N) - 3`. Use the aliases [`p8`](crate::p8),
/// [`p16`](crate::p16), [`p32`](crate::p32) and [`p64`](crate::p64).
///
/// Equality and ordering are numeric: two posits compare as their bit patterns do as signed
/// integers, *except* that NaR is unordered and unequal to everything, itself included (like a
/// float NaN). See [`Posit::total_cmp`] for a total order.
pub struct Posit<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> (Int);

/// A posit decoded into sign-magnitude form, for posits that are not 0 or NaR.
///
/// The value represented is `(-1)^sign × frac / 2^FRAC_WIDTH × 2^exp`.
///
/// `frac` is always positive, with its most significant set bit (the hidden bit) at
/// [`Decoded::FRAC_WIDTH`] `= Int::BITS - 2`: that is, it always starts with `0b01` and lies in
/// `[1, 2)` as a fixed-point number. `exp` is the combined exponent `k × 2^ES + exponent`, where
/// `k` is the regime.
///
/// Example (`p8`, `ES = 0`), the bit pattern `0b0_11110_01`:
///
/// ```text
///   sign  = false
///   exp   = 3 (regime 1111 -> k = 3)
///   frac  = 0b01_010000 (1.25)
///   value = 1.25 × 2^3 = 10
/// ```
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
pub struct Decoded<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> {
  pub sign: bool,
  pub exp: Int,
  pub frac: Int,
}

/// Basics: bit access, compile-time checks on the type parameters.
mod basics;

/// Constants (zero, min, min_positive, etc).
mod consts;

/// Decoding a posit into a [`Decoded`].
mod decode;

/// Encoding a [`Decoded`] into a posit, with rounding.
mod encode;

/// Basic arithmetic: add, sub, mul, div, rem.
mod ops;

/// Mathematical functions (square root).
mod math;

/// Rounding to integral values.
mod round_int;

/// Unary operations: negation, abs, signum, copysign, next, prior.
mod unary;

/// Comparison traits and other standard trait impls.
mod traits;

/// `Debug` and `Display`.
mod fmt;

/// Diagnostic access to the individual posit fields.
pub mod fields;

/// Conversions to and from integers, floats, and other posits.
pub mod convert;

/// The quire, an exact accumulator.
pub mod quire;

#[cfg(feature = "serde_support")]
mod serde;

/// Exact rational oracle for the tests.
#[cfg(test)]
mod rational;
