use super::*;

/// Which way [`Posit::round_int`] rounds a value with a fractional part.
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
enum Direction {
  /// To the nearest integer, ties to even.
  Nearest,
  /// Towards zero.
  Trunc,
  /// Towards negative infinity.
  Floor,
  /// Towards positive infinity.
  Ceil,
}

impl Direction {
  /// Whether a magnitude should be rounded *away from zero*, given its `sign`, whether its
  /// integral part is `odd`, how its fractional part compares to 1/2, and whether the fractional
  /// part is `nonzero`.
  fn away_from_zero(self, sign: bool, odd: bool, half: core::cmp::Ordering, nonzero: bool) -> bool {
    use core::cmp::Ordering;
    match self {
      Direction::Nearest => half == Ordering::Greater || half == Ordering::Equal && odd,
      Direction::Trunc => false,
      Direction::Floor => sign && nonzero,
      Direction::Ceil => !sign && nonzero,
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Shared implementation of [`Posit::nearest_int`], [`Posit::trunc`], [`Posit::floor`] and
  /// [`Posit::ceil`].
  fn round_int(self, direction: Direction) -> Self {
    if self.is_special() { return self }

    // Short-circuit the smallest magnitudes, where the result is 0, ±1 or ±2.
    let sign = self.is_sign_negative();
    let signed = |p: Self| if sign { -p } else { p };
    let abs = self.0.wrapping_abs();
    if abs < Self::ONE.0 {
      // |self| < 1: there is no integral part at all
      let away = direction.away_from_zero(sign, false, abs.cmp(&Self::HALF.0), true);
      return if away { signed(Self::ONE) } else { Self::ZERO }
    }
    if direction == Direction::Nearest {
      if abs < Self::ONE_AND_HALF.0 {
        return signed(Self::ONE)
      } else if abs <= Self::TWO.0 {
        return signed(Self::TWO)
      }
    }

    // SAFETY: `self` is not 0 or NaR
    let decoded = unsafe { self.decode_regular() };

    // Split `decoded.frac` into an `integral` (left of the binary point) and `fractional` (right
    // of the binary point) part. For an `exp` of 0, the binary point is `FRAC_WIDTH` places from
    // the right. If the `exp` is bigger, the point moves right. `exp` ≥ 0 here, since |self| ≥ 1.
    //
    // Example:
    //
    //         frac: 0b01_1101
    //          exp: +2
    //     integral: 0b0111
    //   fractional: 0b01
    let width = Decoded::<N, ES, Int>::FRAC_WIDTH;
    let exp = decoded.exp.as_u32();
    if exp >= width {
      // No bits in the fractional part: `self` is already an integer.
      return self
    }
    let fractional_bits = width - exp;
    let integral = decoded.frac.lshr(fractional_bits);
    let fractional = decoded.frac.mask_lsb(fractional_bits);
    let half = Int::ONE << (fractional_bits - 1);

    let away = direction.away_from_zero(
      sign,
      integral.get_lsb(),
      fractional.cmp(&half),
      fractional != Int::ZERO,
    );
    let integral = integral + Int::from(away);

    // Re-normalise: rounding up may have carried into a new bit (e.g. from 0b11 to 0b100), so
    // find the hidden bit again. `integral` is the exact (integer) value, so its hidden bit at
    // position `i` means an `exp` of `i`.
    // SAFETY: `integral` ≥ 1
    let lz = unsafe { integral.leading_zeros_nonzero() };
    let frac = integral << (lz - 1);
    let exp = Int::of_u32(Int::BITS - 1 - lz);
    // SAFETY: `frac` is normalised by construction
    unsafe { Decoded { sign, exp, frac }.encode_regular() }
  }

  /// Returns the integer-valued posit nearest to `self`, and the nearest even integer-valued posit
  /// if two integers are equally near.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p32::round_from(3.1).nearest_int(), p32::round_from(3));
  /// assert_eq!(p32::round_from(3.5).nearest_int(), p32::round_from(4));
  /// assert_eq!(p32::round_from(2.5).nearest_int(), p32::round_from(2));
  /// assert_eq!(p32::round_from(-0.5).nearest_int(), p32::ZERO);
  /// ```
  pub fn nearest_int(self) -> Self {
    self.round_int(Direction::Nearest)
  }

  /// Returns the integer part of `self`, i.e. rounds towards zero.
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p32::round_from(3.9).trunc(), p32::round_from(3));
  /// assert_eq!(p32::round_from(-3.9).trunc(), p32::round_from(-3));
  /// ```
  pub fn trunc(self) -> Self {
    self.round_int(Direction::Trunc)
  }

  /// Returns the largest integer-valued posit less than or equal to `self`.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p32::round_from(3.9).floor(), p32::round_from(3));
  /// assert_eq!(p32::round_from(-3.1).floor(), p32::round_from(-4));
  /// ```
  pub fn floor(self) -> Self {
    self.round_int(Direction::Floor)
  }

  /// Returns the smallest integer-valued posit greater than or equal to `self`.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p32::round_from(3.1).ceil(), p32::round_from(4));
  /// assert_eq!(p32::round_from(-3.9).ceil(), p32::round_from(-3));
  /// ```
  pub fn ceil(self) -> Self {
    self.round_int(Direction::Ceil)
  }
}
