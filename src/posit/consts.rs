use super::*;
use crate::underlying::const_as;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The `0b1000...` bit pattern (NaR), as an i128.
  const NAR_I128: i128 = i128::MIN >> (128 - Self::BITS);

  /// The `0b0100...` bit pattern (one), as an i128.
  const ONE_I128: i128 = 1 << (Self::BITS - 2);

  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self::from_bits(Int::ZERO);

  /// Not-a-real (`NaR`).
  //
  // Represented by the bit pattern `0b1000...0`.
  pub const NAR: Self = Self::from_bits(const_as(Self::NAR_I128));

  /// Largest representable value, equal to `-MIN`.
  //
  // Represented by the bit pattern `0b0111...1`.
  pub const MAX: Self = Self::from_bits(const_as(!Self::NAR_I128));

  /// Smallest representable value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  //
  // Represented by the bit pattern `0b100...01`.
  pub const MIN: Self = Self::from_bits(const_as(Self::NAR_I128 + 1));

  /// Smallest *positive* value, equal to `-MAX_NEGATIVE`.
  //
  // Represented by the bit pattern `0b000...01`.
  pub const MIN_POSITIVE: Self = Self::from_bits(Int::ONE);

  /// Largest *negative* value, equal to `-MIN_POSITIVE`.
  //
  // Represented by the bit pattern `0b1111...1`.
  pub const MAX_NEGATIVE: Self = Self::from_bits(const_as(-1i128));

  /// The minimum exponent; [`Self::MIN_POSITIVE`] = 2 <sup>[`Self::MIN_EXP`]</sup>.
  pub const MIN_EXP: Int = const_as(-Self::MAX_EXP_I128);

  /// The maximum exponent; [`Self::MAX`] = 2 <sup>[`Self::MAX_EXP`]</sup>.
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p8::MAX_EXP, 6);
  /// assert_eq!(p16::MAX_EXP, 28);
  /// assert_eq!(p32::MAX_EXP, 120);
  /// assert_eq!(p64::MAX_EXP, 496);
  /// ```
  pub const MAX_EXP: Int = const_as(Self::MAX_EXP_I128);

  pub(crate) const MAX_EXP_I128: i128 = (Self::BITS as i128 - 2) << Self::ES;

  /// One (`1`), the multiplicative identity element.
  //
  // Represented by the bit pattern `0b0100...0`.
  pub const ONE: Self = Self::from_bits(const_as(Self::ONE_I128));

  /// Negative one (`-1`).
  //
  // Represented by the bit pattern `0b1100...0`.
  pub const MINUS_ONE: Self = Self::from_bits(const_as(-Self::ONE_I128));

  /// Two (`2`).
  //
  // Regime `10` and exponent 1, or regime `110` if there are no exponent bits: in both cases this
  // is the bit just right of ONE's.
  pub const TWO: Self = Self::from_bits(const_as(Self::ONE_I128 + (Self::ONE_I128 >> (Self::ES + 1))));

  /// One half (`0.5`).
  //
  // Regime `01` followed by all-ones exponent: the bit pattern just below ONE's, at the same
  // distance as TWO is above it.
  pub const HALF: Self = Self::from_bits(const_as(Self::ONE_I128 - (Self::ONE_I128 >> (Self::ES + 1))));

  /// One and a half (`1.5`): the first fraction bit after ONE.
  pub(crate) const ONE_AND_HALF: Self = Self::from_bits(const_as(Self::ONE_I128 + (Self::ONE_I128 >> (Self::ES + 2))));
}
