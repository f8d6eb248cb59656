#![cfg_attr(not(test), no_std)]
//! This crate provides a bit-exact software implementation of
//! [Posit arithmetic](https://posithub.org/docs/posit_standard-2.pdf) for the four standard
//! widths, 8, 16, 32 and 64 bits, together with their quires.
//!
//! # Introduction
//!
//! A posit packs a sign, a variable-length *regime*, a fixed-width *exponent* and a *fraction*
//! into a single machine integer. Every operation in this crate works directly on that packed
//! pattern: it decodes its operands, computes in an extended-precision intermediate, rounds
//! exactly once (to nearest, ties to even) and re-encodes.
//!
//! | type    | bits | exponent bits | quire   | quire bits |
//! |---------|------|---------------|---------|------------|
//! | [`p8`]  | 8    | 0             | [`q8`]  | 32         |
//! | [`p16`] | 16   | 1             | [`q16`] | 128        |
//! | [`p32`] | 32   | 2             | [`q32`] | 512        |
//! | [`p64`] | 64   | 3             | [`q64`] | 2048       |
//!
//! There are exactly two special values: zero (all bits 0) and Not-a-Real, `NaR` (only the sign
//! bit set), which stands for every undefined or infinite result.
//!
//! # Usage
//!
//! ```
//! use posit_codec::{p8, p16, p32, q32, RoundFrom, RoundInto};
//!
//! // Create posits from ints, IEEE floats, constants, or a raw bit representation.
//! let a = p32::round_from(2.71_f64);
//! let b = p32::round_from(42_i32);
//! let c = p32::from_bits(0x7f001337);
//! let d = p32::MIN_POSITIVE;
//!
//! // Perform basic arithmetic and comparisons with the usual operators.
//! assert!(p16::round_from(2.0_f32) + p16::ONE == 3.0_f32.round_into());
//! assert!(p8::round_from(10_i32) == p8::from_bits(0b0111_1001));
//!
//! // Accumulate exactly in a quire, rounding only once at the end.
//! let mut quire = q32::ZERO;
//! quire.add_prod(a, b);
//! quire.sub_prod(a, b);
//! quire += c;
//! assert_eq!(quire.to_posit(), c);
//!
//! // Convert posits back to ints, IEEE floats, or a raw bit representation.
//! let e: f64 = d.round_into();
//! assert!(e > 0.0);
//! assert_eq!(p8::ONE.to_bits(), 0b01000000)
//! ```
//!
//! # Features
//!
//!   - `log_support`: emit `log` trace events (target `posit_codec`) on saturating conversions,
//!     quire overflow, and `NaR` results from non-`NaR` operands.
//!   - `serde_support`: (de)serialise posits as their raw bits.
//!   - `bench`: expose kernel entry points, used by the criterion benches (`cargo bench -F bench`).

#[macro_use]
mod trace;

mod posit;
mod underlying;

pub use posit::Posit;
pub use posit::fields::{Fields, BitString};
pub use posit::quire::Quire;
pub use underlying::Int;

/// Standard-defined 8-bit posit (with 0-bit exponent).
#[allow(non_camel_case_types)]
pub type p8 = Posit<8, 0, i8>;

/// Standard-defined 16-bit posit (with 1-bit exponent).
#[allow(non_camel_case_types)]
pub type p16 = Posit<16, 1, i16>;

/// Standard-defined 32-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p32 = Posit<32, 2, i32>;

/// Standard-defined 64-bit posit (with 3-bit exponent).
#[allow(non_camel_case_types)]
pub type p64 = Posit<64, 3, i64>;

/// Quire for [`p8`] (32 bits).
#[allow(non_camel_case_types)]
pub type q8 = Quire<8, 0, 4>;

/// Quire for [`p16`] (128 bits).
#[allow(non_camel_case_types)]
pub type q16 = Quire<16, 1, 16>;

/// Quire for [`p32`] (512 bits).
#[allow(non_camel_case_types)]
pub type q32 = Quire<32, 2, 64>;

/// Quire for [`p64`] (2048 bits).
#[allow(non_camel_case_types)]
pub type q64 = Quire<64, 3, 256>;

pub use posit::convert::{RoundFrom, RoundInto};

/// Number of cases for the property tests of each operation.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x4000 } else { 0x40000 };

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
