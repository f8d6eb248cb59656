use super::*;

/// A *quire*, the exact accumulator for a posit type with `N` bits and `ES` exponent bits, which
/// is `SIZE` bytes long.
///
/// A quire is a fixed-point register that enables sums and dot products of posits to be
/// calculated with **no** intermediate rounding whatsoever: products are accumulated exactly, and
/// the result is rounded only once, when converted back to a posit.
///
/// It holds `N + 4 × MAX_EXP` bits: enough for the product of any two posits, plus `N - 1` carry
/// bits, so that 2^(N-1) - 1 products of [`Posit::MAX`] with itself can be accumulated without
/// overflowing. If it does overflow, it becomes [NaR](Self::NAR). The only `SIZE` accepted is
/// exactly that size in bytes (other `SIZE`s are a compile-time error); use the aliases
/// [`q8`](crate::q8), [`q16`](crate::q16), [`q32`](crate::q32) and [`q64`](crate::q64).
///
/// # Examples
///
/// ```
/// # use posit_codec::*;
/// // With posits, the 1 is lost to rounding
/// let big = p32::MAX;
/// let small = p32::ONE;
/// assert_eq!(big + small - big, p32::ZERO);
///
/// // With a quire, it isn't
/// let mut quire = q32::ZERO;
/// quire += big;
/// quire += small;
/// quire -= big;
/// assert_eq!(quire.to_posit(), small);
///
/// // Dot products are accumulated exactly, and rounded only at the end
/// let mut dot = q16::ZERO;
/// for (x, y) in [(3, 5), (-2, 7), (1, 1)] {
///   dot.add_prod(p16::round_from(x), p16::round_from(y));
/// }
/// assert_eq!(dot.to_posit(), p16::round_from(2));
/// ```
//
// The quire is a two's complement number, stored as an array of bytes in little-endian order.
// Bit `WIDTH` is the units bit, so the bits below it are the fractional part. The pattern with
// only the msb set, which would otherwise be the most negative number, is NaR.
#[derive(Clone)]
pub struct Quire<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> (pub(crate) [u8; SIZE]);

/// Basic constants and functions, such as the position of the fixed point, compile-time checks
/// that `SIZE` is correct, etc.
mod basics;

/// Adding exact products into the quire.
mod accumulate;

/// Operator impls (`+=`, `-=`).
mod ops;

/// Conversions between quires and posits.
mod convert;
