use super::*;
use crate::underlying::const_as;

/// Used to do value-to-value conversions that may *round* the input, following the rounding rule
/// of the [posit standard]. It is the reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but unlike the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_.
///
/// What each conversion does with values that have no counterpart in the target type (NaR, NaN,
/// infinities, out of range values) is described in the documentation of the specific
/// implementation.
///
/// As with [`From`], implementing [`RoundFrom`] provides [`RoundInto`] for free, and there is a
/// blanket implementation of `RoundFrom<T> for T`.
///
/// # Rounding
///
/// "Rounding" always means the same thing:
///
///   - If the value is greater in absolute value than the biggest posit, round to it (i.e., never
///     overflow).
///   - If the value is smaller in absolute value than the smallest positive posit, round to it
///     (i.e., never underflow).
///   - Otherwise, round to the nearest bit pattern, or in case of a tie, to the even bit pattern.
///
/// # Examples
///
/// Rounding from ints, floats:
/// ```
/// # use posit_codec::*;
/// assert!(p16::round_from(1) == p16::round_from(1.00000001));
/// assert!(p32::round_from(1) <  p32::round_from(1.00000001));
///
/// assert!(p32::round_from(f64::NAN).is_nar());
/// ```
///
/// Rounding to ints, floats:
/// ```
/// # use posit_codec::*;
/// assert_eq!(f32::round_from(p16::MIN_POSITIVE), 3.7252903e-9);
/// assert_eq!(i64::round_from(p8::MAX), 64);
///
/// assert!(f64::round_from(p32::NAR).is_nan());
/// ```
///
/// [posit standard]: https://posithub.org/docs/posit_standard-2.pdf#section.4
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  ///
  /// If you're looking for the usual Rust-y conversions ([`From`] if exact, [`TryFrom`] if
  /// fallible), use those traits instead.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`], and should not be implemented directly.
///
/// # Examples
///
/// ```
/// # use posit_codec::*;
/// assert_eq!(p16::ONE.next(), 1.000244140625_f64.round_into());
/// assert_eq!(p32::ONE.next(), 1.0000000074505806_f64.round_into());
///
/// assert_eq!(0.015625, p8::MIN_POSITIVE.round_into());
/// assert_eq!(1_i64 << 28, p16::MAX.round_into());
///
/// assert!(f64::is_nan(p32::NAR.round_into()));
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Round the number `(-1)^sign × bits / 2^127 × 2^exp` to a posit, where `bits` has its msb
  /// set (i.e. is left-justified, so that `bits / 2^127` is in `[1, 2)`) and `sticky` is `true`
  /// iff some nonzero bits below `bits` were already lost.
  ///
  /// This is the common tail of every conversion *into* a posit (from ints, floats, other posits,
  /// and the quire): the source puts its magnitude into a `u128` and this does the rest.
  pub(crate) fn round_from_left_justified(sign: bool, bits: u128, exp: i64, sticky: bool) -> Self {
    debug_assert!(bits >> 127 == 1, "{bits:#x} is not left-justified");

    // The hidden bit goes from bit 127 to bit `FRAC_WIDTH`; everything below that is sticky.
    let shift = 127 - Decoded::<N, ES, Int>::FRAC_WIDTH;
    let frac = Int::of_u128(bits >> shift);
    let sticky = sticky || bits & ((1 << shift) - 1) != 0;

    // Clamp the exponent to just outside the range of the posit, where `encode_regular_round`
    // saturates anyway, so that it fits in an `Int`.
    let max_exp = Self::MAX_EXP_I128 as i64;
    let exp = if exp > max_exp {
      trace!("conversion of 2^{exp} saturated to MAX");
      max_exp
    } else if exp < -max_exp {
      trace!("conversion of 2^{exp} saturated to MIN_POSITIVE");
      -max_exp - 1
    } else {
      exp
    };

    let decoded = Decoded { sign, exp: const_as::<i64, Int>(exp), frac };
    // SAFETY: `frac` has its hidden bit, and only it, at `FRAC_WIDTH`
    unsafe { decoded.encode_regular_round(sticky) }
  }

  /// Round the number `(-1)^sign × mag × 2^exp` to a posit, where `sticky` is as in
  /// [`Self::round_from_left_justified`].
  pub(crate) fn round_from_magnitude(sign: bool, mag: u128, exp: i64, sticky: bool) -> Self {
    if mag == 0 {
      return Self::ZERO
    }
    let lz = mag.leading_zeros();
    Self::round_from_left_justified(sign, mag << lz, exp + 127 - i64::from(lz), sticky)
  }
}

/// Conversions to and from floats.
mod float;

/// Conversions to and from ints.
mod int;

/// Conversions between posit formats.
mod posit;
