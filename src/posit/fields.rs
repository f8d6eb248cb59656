//! Read-only access to the individual fields of a posit: sign, regime, exponent and fraction.
//!
//! These are not needed for arithmetic (which goes through the faster internal decoder), but are
//! handy when inspecting or debugging bit patterns.

use super::*;

/// The fields of a posit that is not 0 or NaR, as obtained with [`Posit::fields`].
///
/// The fields of a negative posit are those of its absolute value (its two's complement), with
/// `sign` set. The value represented is
///
/// ```text
///   (-1)^sign × 2^(regime × 2^ES + exponent) × significand / 2^fraction_len
/// ```
///
/// Example, the `p8` bit pattern `0b0_11110_01`:
///
/// ```
/// # use posit_codec::*;
/// let fields = p8::from_bits(0b0_11110_01).fields().unwrap();
/// assert_eq!(fields.sign, false);
/// assert_eq!(fields.regime, 3);
/// assert_eq!(fields.exponent, 0);
/// assert_eq!((fields.fraction, fields.fraction_len), (0b01, 2));
/// assert_eq!(fields.significand(), 0b101);  // 1.01 = 1.25, and 1.25 × 2^3 = 10
/// ```
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
pub struct Fields {
  /// Whether the posit is negative.
  pub sign: bool,
  /// The regime value `k`.
  pub regime: i32,
  /// The exponent bits. If some were cut off by a long regime, they are taken as 0s.
  pub exponent: u32,
  /// The explicit fraction bits (without the hidden bit), right-aligned.
  pub fraction: u64,
  /// How many explicit fraction bits there are.
  pub fraction_len: u32,
}

impl Fields {
  /// The fraction, as a number in `[0, 1)`, is `fraction_numerator() / fraction_denominator()`.
  pub fn fraction_numerator(&self) -> u64 {
    self.fraction
  }

  /// See [`Fields::fraction_numerator`].
  pub fn fraction_denominator(&self) -> u64 {
    1 << self.fraction_len
  }

  /// The fraction with its hidden bit: `1.fraction` as a fixed-point number with
  /// [`Fields::fraction_len`] bits after the point.
  pub fn significand(&self) -> u64 {
    self.fraction_denominator() | self.fraction
  }

  /// The number of bits taken by the regime, including its terminating bit (if it fits in the
  /// `n_bits - 1` bits after the sign).
  fn regime_len(&self, n_bits: u32) -> u32 {
    let len = if self.regime >= 0 { self.regime + 2 } else { -self.regime + 1 };
    (len as u32).min(n_bits - 1)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The fields of `self`, or `None` if `self` is 0 or NaR (which have no fields). See
  /// [`Fields`].
  pub fn fields(self) -> Option<Fields> {
    if self.is_special() {
      return None
    }
    // SAFETY: `self` is not 0 or NaR
    let Decoded { sign, exp, frac } = unsafe { self.decode_regular() };
    let exp: i64 = exp.into();
    let frac: i128 = frac.into();

    let regime = (exp >> ES) as i32;
    let exponent = (exp & ((1 << ES) - 1)) as u32;
    let mut fields = Fields { sign, regime, exponent, fraction: 0, fraction_len: 0 };

    let regime_len = fields.regime_len(Self::BITS);
    let exponent_len = Self::ES.min(Self::BITS - 1 - regime_len);
    let fraction_len = Self::BITS - 1 - regime_len - exponent_len;
    let frac_width = Decoded::<N, ES, Int>::FRAC_WIDTH;
    fields.fraction = ((frac - (1 << frac_width)) >> (frac_width - fraction_len)) as u64;
    fields.fraction_len = fraction_len;
    Some(fields)
  }

  /// A [`Display`](core::fmt::Display)able rendering of the bits of `self`, with `_` between the
  /// sign, regime, exponent and fraction fields. Empty fields are omitted, as are the separators
  /// of 0 and NaR (which are shown as the sign and one block of bits).
  ///
  /// For negative posits, the bits after the sign are those of the absolute value, since that is
  /// what the fields are read from.
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p8::from_bits(0b0_11110_01).bit_string().to_string(), "0_11110_01");
  /// assert_eq!((-p8::from_bits(0b0_11110_01)).bit_string().to_string(), "1_11110_01");
  /// assert_eq!(p16::ONE.bit_string().to_string(), "0_10_0_000000000000");
  /// assert_eq!(p8::NAR.bit_string().to_string(), "1_0000000");
  /// ```
  pub fn bit_string(self) -> BitString<N, ES, Int> {
    BitString(self)
  }
}

/// Renders the bits of a posit, grouped by field. See [`Posit::bit_string`].
#[derive(Clone, Copy)]
pub struct BitString<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> (Posit<N, ES, Int>);

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> core::fmt::Display for BitString<N, ES, Int> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let body_len = Posit::<N, ES, Int>::BITS - 1;
    let raw: i128 = self.0.to_bits().into();
    let abs = raw.unsigned_abs();

    // Field boundaries, as bit offsets counted from just after the sign bit.
    let (regime_len, exponent_len) = match self.0.fields() {
      Some(fields) => {
        let regime_len = fields.regime_len(Posit::<N, ES, Int>::BITS);
        (regime_len, Posit::<N, ES, Int>::ES.min(body_len - regime_len))
      }
      None => (body_len, 0),
    };
    let boundaries = [0, regime_len, regime_len + exponent_len];

    f.write_str(if raw < 0 { "1" } else { "0" })?;
    for i in 0 .. body_len {
      if boundaries.contains(&i) {
        f.write_str("_")?;
      }
      let bit = abs >> (body_len - 1 - i) & 1;
      f.write_str(if bit == 1 { "1" } else { "0" })?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{p8, p16, p32, p64};

  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::PowerOf2;
  use proptest::prelude::*;

  #[test]
  fn special() {
    assert_eq!(p8::ZERO.fields(), None);
    assert_eq!(p64::NAR.fields(), None);
    assert_eq!(p8::ZERO.bit_string().to_string(), "0_0000000");
  }

  #[test]
  #[allow(overflowing_literals)]
  fn p16_manual() {
    assert_eq!(p16::from_bits(0b0_001_1_01000000000).fields(), Some(Fields {
      sign: false, regime: -2, exponent: 1, fraction: 0b01000000000, fraction_len: 11,
    }));
    assert_eq!(p16::MAX.fields(), Some(Fields {
      sign: false, regime: 14, exponent: 0, fraction: 0, fraction_len: 0,
    }));
    assert_eq!(p16::MIN_POSITIVE.fields(), Some(Fields {
      sign: false, regime: -14, exponent: 0, fraction: 0, fraction_len: 0,
    }));
    assert_eq!(p16::MAX.bit_string().to_string(), "0_111111111111111");
    assert_eq!(p16::from_bits(0b0_111111111111110).bit_string().to_string(), "0_111111111111110");
    assert_eq!(p16::from_bits(0b0_11111111111110_1).bit_string().to_string(), "0_11111111111110_1");
    assert_eq!(p16::from_bits(0b0_001_1_01000000000).bit_string().to_string(), "0_001_1_01000000000");
  }

  #[test]
  fn p64_truncated_exponent() {
    // Only 1 of the 3 exponent bits fits after the regime
    let p = p64::from_bits(0x7fff_ffff_ffff_fffd);
    assert_eq!(p.fields(), Some(Fields {
      sign: false, regime: 60, exponent: 0b100, fraction: 0, fraction_len: 0,
    }));
  }

  fn assert_fields<const N: u32, const ES: u32, Int: crate::Int>(p: Posit<N, ES, Int>) {
    let fields = p.fields().unwrap();
    assert_eq!(fields.sign, p.is_sign_negative());
    assert!(fields.fraction < fields.fraction_denominator());
    let scale = Rational::power_of_2((fields.regime as i64 * (1 << ES)) + fields.exponent as i64);
    let significand = Rational::from_integers(
      fields.significand().into(),
      fields.fraction_denominator().into(),
    );
    let value = significand * scale;
    let value = if fields.sign { -value } else { value };
    assert_eq!(Rational::try_from(p), Ok(value), "{p:?}");

    let rendered = p.bit_string().to_string();
    assert_eq!(rendered.chars().filter(|&c| c != '_').count(), N as usize);
  }

  #[test]
  fn p8_exhaustive() {
    for p in p8::cases_exhaustive() {
      assert_fields(p)
    }
  }

  #[test]
  fn p16_exhaustive() {
    for p in p16::cases_exhaustive() {
      assert_fields(p)
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn p32_proptest(p in p32::cases_proptest()) {
      assert_fields(p)
    }

    #[test]
    fn p64_proptest(p in p64::cases_proptest()) {
      assert_fields(p)
    }
  }
}
