use super::*;

use crate::Quire;

use malachite::{Integer, rational::Rational};
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs, Reciprocal};

/// The error type returned when a [Posit] cannot be converted to a [Rational] because it is
/// [NaR](Posit::NAR).
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNaR;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Convert a posit **which is not 0 or NaR** into a [Rational] value. Panics if `self` is 0 or
  /// NaR.
  ///
  /// This is a deliberately naïve rendition of the posit format, reading the fields one bit at a
  /// time, since this is what the optimised codec is checked against!
  fn into_rational_regular(self) -> Rational {
    let bits: i128 = self.0.into();
    assert!(bits != 0 && bits != i128::MIN >> (128 - N), "Should not pass {bits:b} to into_rational_regular");

    // Sign, and the two's complement absolute value, whose bits we then walk msb to lsb.
    let sign = bits < 0;
    let abs = bits.unsigned_abs();
    let mut bits = (0 .. N - 1).rev().map(|i| abs >> i & 1 == 1).peekable();

    // Regime: the run of identical bits, then its terminating bit (if any bits remain).
    let first = bits.next().unwrap();
    let mut run = 1;
    while bits.next_if_eq(&first).is_some() {
      run += 1;
    }
    bits.next();
    let k: i64 = if first { run - 1 } else { -run };

    // Exponent: the next ES bits, padded with 0s if they run out.
    let mut exponent = 0i64;
    for _ in 0 .. ES {
      exponent = 2 * exponent + bits.next().unwrap_or(false) as i64;
    }

    // Fraction: all the remaining bits, after an implicit "1.".
    let mut fraction = Rational::from(1);
    let mut weight = Rational::from(1);
    for bit in bits {
      weight /= Rational::from(2);
      if bit { fraction += &weight }
    }

    let scale = Rational::power_of_2(k * (1 << ES) + exponent);
    let value = fraction * scale;
    if sign { -value } else { value }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> TryFrom<Posit<N, ES, Int>> for Rational {
  type Error = IsNaR;

  fn try_from(value: Posit<N, ES, Int>) -> Result<Self, Self::Error> {
    if value.to_bits() == Int::ZERO {
      Ok(Rational::from(0))
    } else if value.to_bits() == Posit::<N, ES, Int>::NAR.to_bits() {
      Err(IsNaR)
    } else {
      Ok(value.into_rational_regular())
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> From<Decoded<N, ES, Int>> for Rational {
  fn from(decoded: Decoded<N, ES, Int>) -> Self {
    let frac: i128 = decoded.frac.into();
    let exp: i64 = decoded.exp.into();
    let frac = Rational::from_integers(
      Integer::from(frac),
      Integer::power_of_2(Decoded::<N, ES, Int>::FRAC_WIDTH as u64),
    );
    let value = frac * Rational::power_of_2(exp);
    if decoded.sign { -value } else { value }
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> TryFrom<&Quire<N, ES, SIZE>> for Rational {
  type Error = IsNaR;

  fn try_from(value: &Quire<N, ES, SIZE>) -> Result<Self, Self::Error> {
    if value.is_nar() {
      Err(IsNaR)
    } else {
      // The quire is just a big fixed-point number with denominator 2 ^ WIDTH. Read it from the
      // most significant byte (the only signed one) down.
      let bytes = value.to_le_bytes();
      let mut bytes = bytes.iter().rev();
      let first = bytes.next().unwrap();
      let mut numerator = Integer::from(*first as i8);
      for rest in bytes {
        numerator *= Integer::from(1 << 8);
        numerator += Integer::from(*rest);
      }
      let denominator = Integer::power_of_2(Quire::<N, ES, SIZE>::WIDTH as u64);
      Ok(Rational::from_integers(numerator, denominator))
    }
  }
}

/// Check whether the rational number `exact` should be rounded to `posit`.
///
///   - Over- or under-flow (`exact` beyond [Posit::MAX] or between 0 and [Posit::MIN_POSITIVE]):
///     round to [Posit::MAX] or [Posit::MIN_POSITIVE] respectively (conversely for negatives).
///   - Geometric case (at the ends of the dynamic range, where exponent bits are cut): round to
///     nearest posit in terms of absolute **ratio**, ties to even.
///   - Normal case (remaining domain): round to nearest posit in terms of absolute **difference**,
///     ties to even.
pub fn is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Rational,
  posit: Posit<N, ES, Int>,
) -> bool {
  let value = |p: Posit<N, ES, Int>| Rational::try_from(p).unwrap();
  let zero = Rational::from(0);

  // Only the exact number 0 is rounded to posit 0.
  if posit.to_bits() == Int::ZERO { return exact == zero }
  // No number is rounded to posit NaR.
  if posit.is_nar() { return false }

  // Saturation
  if exact > zero {
    if exact >= value(Posit::<N, ES, Int>::MAX) {
      return posit.to_bits() == Posit::<N, ES, Int>::MAX.to_bits()
    } else if exact <= value(Posit::<N, ES, Int>::MIN_POSITIVE) {
      return posit.to_bits() == Posit::<N, ES, Int>::MIN_POSITIVE.to_bits()
    }
  } else if exact < zero {
    if exact <= value(Posit::<N, ES, Int>::MIN) {
      return posit.to_bits() == Posit::<N, ES, Int>::MIN.to_bits()
    } else if exact >= value(Posit::<N, ES, Int>::MAX_NEGATIVE) {
      return posit.to_bits() == Posit::<N, ES, Int>::MAX_NEGATIVE.to_bits()
    }
  } else {
    return false
  }

  // Remaining cases: round to nearest (arithmetic nearest, or geometric nearest *only if* exponent
  // bits are cut). `distance` uses arithmetic or geometric distance accordingly.
  //
  // Exponent bits are cut when `1 + regime_len + ES > N`, which happens beyond
  // 2 ^ ((N - 2 - ES) × 2^ES) and below its reciprocal.
  let distance = {
    let geometric_cutoff = Rational::power_of_2(((N - 2 - ES) as i64) << ES);
    let arithmetic_range = (&geometric_cutoff).reciprocal() ..= geometric_cutoff;
    let is_arithmetic_rounding = arithmetic_range.contains(&(&exact).abs());

    move |x: &Rational, y: &Rational| {
      if is_arithmetic_rounding {
        x - y
      } else if x.abs() >= y.abs() {
        x / y
      } else {
        y / x
      }
    }
  };

  // `posit` represents exactly the number `curr`, while the immediately previous and next posits
  // represent exactly the numbers `prev` and `next`, respectively.
  let prev = Rational::try_from(posit.prior());
  let curr = value(posit);
  let next = Rational::try_from(posit.next());
  let posit_is_even = !posit.to_bits().get_lsb();

  if exact == curr {
    true
  } else if let Ok(prev) = prev && prev < exact && exact < curr {
    let distance_curr = distance(&curr, &exact);
    let distance_prev = distance(&exact, &prev);
    distance_curr < distance_prev || distance_curr == distance_prev && posit_is_even
  } else if let Ok(next) = next && curr < exact && exact < next {
    let distance_curr = distance(&exact, &curr);
    let distance_next = distance(&next, &exact);
    distance_curr < distance_next || distance_curr == distance_next && posit_is_even
  } else {
    false
  }
}

/// As [`is_correct_rounded`], where an `exact` value of NaR must be rounded to NaR.
pub fn try_is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
  exact: Result<Rational, IsNaR>,
  posit: Posit<N, ES, Int>,
) -> bool {
  match exact {
    Ok(exact) => is_correct_rounded(exact, posit),
    Err(IsNaR) => posit.is_nar(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn p8_manual() {
    type P = crate::p8;

    assert_eq!(Rational::try_from(P::from_bits(0)), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(P::NAR), Err(IsNaR));

    for (bits, (num, den)) in [
      (0b0_0000001, (1, 64)),
      (0b0_0000010, (1, 32)),
      (0b0_0000011, (3, 64)),
      (0b0_0001000, (1, 8)),
      (0b0_0011000, (3, 8)),
      (0b0_0100000, (1, 2)),
      (0b0_0110000, (3, 4)),
      (0b0_1000000, (1, 1)),
      (0b0_1000001, (33, 32)),
      (0b0_1010000, (3, 2)),
      (0b0_1100000, (2, 1)),
      (0b0_1110000, (4, 1)),
      (0b0_1111001, (10, 1)),
      (0b0_1111010, (12, 1)),
      (0b0_1111101, (24, 1)),
      (0b0_1111110, (32, 1)),
      (0b0_1111111, (64, 1)),
    ] {
      assert_eq!(P::from_bits(bits).try_into(), Ok(Rational::from_signeds(num, den)));
      assert_eq!(P::from_bits(-bits).try_into(), Ok(Rational::from_signeds(-num, den)));
    }
  }

  #[test]
  #[allow(overflowing_literals)]
  fn p16_manual() {
    type P = crate::p16;
    // useed = 4
    assert_eq!(P::from_bits(0b0_10_0_000000000000).try_into(), Ok(Rational::from(1)));
    assert_eq!(P::from_bits(0b0_10_1_000000000000).try_into(), Ok(Rational::from(2)));
    assert_eq!(P::from_bits(0b0_110_0_10000000000).try_into(), Ok(Rational::from(6)));
    assert_eq!(P::from_bits(0b0_001_1_01000000000).try_into(), Ok(Rational::from_signeds(5, 32)));
    assert_eq!(P::from_bits(-0b0_1110_0_0000000000).try_into(), Ok(Rational::from(-16)));
    assert_eq!(P::MAX.try_into(), Ok(Rational::from(1i64 << 28)));
    assert_eq!(P::MIN_POSITIVE.try_into(), Ok(Rational::from_signeds(1, 1i64 << 28)));
  }

  #[test]
  fn p64_extremes() {
    type P = crate::p64;
    assert_eq!(P::MAX.try_into(), Ok(Rational::power_of_2(496i64)));
    assert_eq!(P::MAX_NEGATIVE.try_into(), Ok(-Rational::power_of_2(-496i64)));
    assert_eq!(P::ONE.try_into(), Ok(Rational::from(1)));
  }

  #[test]
  fn quire() {
    // The binary point of q8 is 12 bits from the right
    assert_eq!(Rational::try_from(&crate::q8::from_le_bytes([0, 0x10, 0, 0])), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(&crate::q8::from_le_bytes([0, 0, 1, 0])), Ok(Rational::from(16)));
    assert_eq!(Rational::try_from(&crate::q8::from_le_bytes([0, 0, 0, 1])), Ok(Rational::from(4096)));
    assert_eq!(Rational::try_from(&crate::q8::from_le_bytes([0x80, 0, 0, 0])), Ok(Rational::from_signeds(1, 32)));
    assert_eq!(Rational::try_from(&crate::q8::from_le_bytes([0, 0xf0, 0xff, 0xff])), Ok(Rational::from(-1)));
    assert_eq!(Rational::try_from(&crate::q8::from_le_bytes([0xff, 0xff, 0xff, 0xff])), Ok(Rational::from_signeds(-1, 1 << 12)));
    assert_eq!(Rational::try_from(&crate::q8::NAR), Err(IsNaR));
  }
}
