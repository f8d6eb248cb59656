use super::*;

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Quire<N, ES, SIZE> {
  /// Add `value × 2^shift` to the quire (or subtract it, if `negative`), wrapping around on
  /// overflow.
  ///
  /// `value × 2^shift` must fit in the quire.
  fn add_shifted(&mut self, negative: bool, value: u64, shift: u32) {
    if value == 0 {
      return
    }
    let start = (shift / 8) as usize;
    debug_assert!(start < SIZE, "{value:#x} << {shift} does not fit in the quire");

    // Add `pending` a byte at a time, propagating the carry (or borrow) until there's nothing more
    // to add. A `u64` shifted by less than 8 bits always fits in a `u128`.
    let mut pending = u128::from(value) << (shift % 8);
    let mut carry = false;
    for byte in &mut self.0[start..] {
      if pending == 0 && !carry {
        break
      }
      let chunk = pending as u8;
      pending >>= 8;
      let (result, c1) = if negative { byte.overflowing_sub(chunk) } else { byte.overflowing_add(chunk) };
      let carry_in = u8::from(carry);
      let (result, c2) = if negative { result.overflowing_sub(carry_in) } else { result.overflowing_add(carry_in) };
      *byte = result;
      carry = c1 || c2;
    }
  }

  /// Add `(-1)^negative × mag × 2^(shift - WIDTH)` to the quire. If this overflows, the quire
  /// becomes NaR.
  ///
  /// The caller must ensure that `self` is not NaR, and that `mag` is nonzero and fits in the quire
  /// once shifted. If `shift` is negative, the `-shift` lowest bits of `mag` must be 0.
  pub(crate) fn accumulate(&mut self, negative: bool, mag: u128, shift: i64) {
    debug_assert!(!self.is_nar());
    debug_assert!(mag != 0);
    let (mag, shift) = if shift < 0 {
      debug_assert!(i64::from(mag.trailing_zeros()) >= -shift, "{mag:#x} × 2^{shift} is inexact");
      (mag >> (-shift) as u32, 0)
    } else {
      (mag, shift as u32)
    };

    let was_negative = self.sign_bit();
    self.add_shifted(negative, mag as u64, shift);
    self.add_shifted(negative, (mag >> 64) as u64, shift + 64);

    // Two's complement overflow: adding a number of the same sign as `self` flipped the sign. A
    // result of exactly the NaR bit pattern is also out of range, but is already NaR.
    if was_negative == negative && self.sign_bit() != negative {
      trace!("quire overflowed to NaR");
      *self = Self::NAR
    }
  }

  /// Add or subtract the exact product `a × b`, depending on `negative`.
  pub(crate) fn accumulate_prod<Int: crate::Int>(
    &mut self,
    negative: bool,
    a: Posit<N, ES, Int>,
    b: Posit<N, ES, Int>,
  ) {
    if self.is_nar() || a.is_nar() || b.is_nar() {
      *self = Self::NAR
    } else if a.is_zero() || b.is_zero() {
      // Nothing to add
    } else {
      // SAFETY: neither `a` nor `b` are 0 or NaR
      let x = unsafe { a.decode_regular() };
      let y = unsafe { b.decode_regular() };
      // As in `mul_kernel`, the product is `(x.frac * y.frac) / FRAC_DENOM² × 2^(x.exp + y.exp)`,
      // but here it's not rounded: the whole double-width product goes into the quire, with its
      // units bit at `WIDTH`.
      let mag = Into::<i128>::into(x.frac.doubling_mul(y.frac)) as u128;
      let exp = Into::<i64>::into(x.exp) + Into::<i64>::into(y.exp);
      let shift = i64::from(Self::WIDTH) + exp - 2 * i64::from(Decoded::<N, ES, Int>::FRAC_WIDTH);
      self.accumulate(negative != (x.sign != y.sign), mag, shift)
    }
  }

  /// Add the product `a × b` to the quire, **exactly** (i.e. with no rounding whatsoever).
  ///
  /// If either `a` or `b` is NaR, or the quire overflows, the quire becomes NaR. Once NaR, it
  /// stays NaR until [cleared](Self::clear).
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// let mut quire = q8::ZERO;
  /// quire.add_prod(p8::MIN_POSITIVE, p8::MIN_POSITIVE);
  /// // 2^-12 is far below `p8::MIN_POSITIVE`, but the quire holds it exactly.
  /// assert_eq!(quire.to_le_bytes(), [1, 0, 0, 0]);
  /// ```
  pub fn add_prod<Int: crate::Int>(&mut self, a: Posit<N, ES, Int>, b: Posit<N, ES, Int>) {
    self.accumulate_prod(false, a, b)
  }

  /// Subtract the product `a × b` from the quire, **exactly** (i.e. with no rounding
  /// whatsoever).
  ///
  /// If either `a` or `b` is NaR, or the quire overflows, the quire becomes NaR.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// let (a, b) = (p32::round_from(1.1), p32::round_from(-3.7));
  /// let mut quire = q32::ZERO;
  /// quire.add_prod(a, b);
  /// quire.sub_prod(a, b);
  /// assert!(quire.is_zero());
  /// ```
  pub fn sub_prod<Int: crate::Int>(&mut self, a: Posit<N, ES, Int>, b: Posit<N, ES, Int>) {
    self.accumulate_prod(true, a, b)
  }

  /// Add another quire to this one, exactly. If either is NaR, or the sum overflows, the result
  /// is NaR.
  pub(crate) fn add_quire(&mut self, other: &Self) {
    if self.is_nar() || other.is_nar() {
      *self = Self::NAR;
      return
    }
    let (self_negative, other_negative) = (self.sign_bit(), other.sign_bit());
    let mut carry = false;
    for (byte, &other) in self.0.iter_mut().zip(&other.0) {
      let (result, c1) = byte.overflowing_add(other);
      let (result, c2) = result.overflowing_add(u8::from(carry));
      *byte = result;
      carry = c1 || c2;
    }
    if self_negative == other_negative && self.sign_bit() != self_negative {
      trace!("quire overflowed to NaR");
      *self = Self::NAR
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::{p8, p16, p32, p64, q8, q16, q32, q64, RoundFrom};
  use malachite::rational::Rational;
  use proptest::prelude::*;

  #[test]
  fn add_shifted() {
    let mut quire = q16::ZERO;
    quire.add_shifted(false, 0xff, 4);
    assert_eq!(quire.to_le_bytes()[..3], [0xf0, 0x0f, 0]);
    quire.add_shifted(false, 0x1, 4);
    assert_eq!(quire.to_le_bytes()[..3], [0x00, 0x10, 0]);
    quire.add_shifted(true, 0x1, 13);
    assert_eq!(quire.to_le_bytes()[..3], [0x00, 0xf0, 0xff]);
    assert_eq!(quire.to_le_bytes()[15], 0xff);
    quire.add_shifted(false, u64::MAX, 60);
    assert_eq!(quire.to_le_bytes()[7..], [0xef, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x0f]);
  }

  #[test]
  fn p8_manual() {
    let mut quire = q8::ZERO;
    quire.add_prod(p8::ONE, p8::ONE);
    assert_eq!(quire.to_le_bytes(), [0, 0x10, 0, 0]);
    quire.sub_prod(p8::TWO, p8::ONE);
    assert_eq!(quire.to_le_bytes(), [0, 0xf0, 0xff, 0xff]);
    quire.add_prod(p8::MAX, p8::MAX);
    assert_eq!(quire.to_le_bytes(), [0, 0xf0, 0xff, 0x00]);  // 2^12 - 1
    quire.add_prod(p8::MIN_POSITIVE, p8::MAX_NEGATIVE);
    assert_eq!(quire.to_le_bytes(), [0xff, 0xef, 0xff, 0x00]);  // 2^12 - 1 - 2^-12
  }

  #[test]
  fn nar() {
    let mut quire = q16::ZERO;
    quire.add_prod(p16::ONE, p16::NAR);
    assert!(quire.is_nar());
    quire.add_prod(p16::ONE, p16::ONE);
    assert!(quire.is_nar());
    quire.sub_prod(p16::NAR, p16::ZERO);
    assert!(quire.is_nar());
    quire.clear();
    quire.sub_prod(p16::ZERO, p16::NAR);
    assert!(quire.is_nar());
  }

  #[test]
  fn zero_operand() {
    let mut quire = q32::from(p32::round_from(1.5));
    let before = quire.to_le_bytes();
    quire.add_prod(p32::ZERO, p32::MAX);
    quire.sub_prod(p32::MIN, p32::ZERO);
    assert_eq!(quire.to_le_bytes(), before);
  }

  #[test]
  fn overflow_p8() {
    // q8 has 12 fractional bits and 20 integer bits (sign included), and MAX² = 2^12.
    let mut quire = q8::ZERO;
    for _ in 0 .. 127 {
      quire.add_prod(p8::MAX, p8::MAX);
    }
    assert_eq!(Rational::try_from(&quire), Ok(Rational::from(127 << 12)));
    quire.add_prod(p8::MAX, p8::MAX);
    assert!(quire.is_nar());
    quire.sub_prod(p8::MAX, p8::MAX);
    assert!(quire.is_nar());
  }

  #[test]
  fn overflow_negative_p8() {
    let mut quire = q8::ZERO;
    for _ in 0 .. 127 {
      quire.sub_prod(p8::MAX, p8::MAX);
    }
    quire.sub_prod(p8::MAX, p8::MIN_POSITIVE);
    assert!(!quire.is_nar());
    quire.add_prod(p8::MAX, p8::MIN);
    assert!(quire.is_nar());
  }

  #[test]
  fn overflow_p16() {
    // 2^15 - 1 maximal products fit, one more overflows
    let mut quire = q16::ZERO;
    for _ in 0 .. (1 << 15) - 1 {
      quire.add_prod(p16::MIN, p16::MIN);
    }
    assert!(!quire.is_nar());
    quire.add_prod(p16::MIN, p16::MIN);
    assert!(quire.is_nar());
  }

  #[test]
  fn add_quire() {
    let mut a = q8::from(p8::ONE);
    let b = q8::from(p8::MINUS_ONE);
    a.add_quire(&b);
    assert!(a.is_zero());

    let mut a = q8::NAR;
    a.add_quire(&q8::ZERO);
    assert!(a.is_nar());
    let mut a = q8::ZERO;
    a.add_quire(&q8::NAR);
    assert!(a.is_nar());

    // 2^18 + 2^18 overflows q8
    let big = q8::from_le_bytes([0, 0, 0, 0x40]);
    let mut a = big.clone();
    a.add_quire(&big);
    assert!(a.is_nar());
    let mut a = big.clone();
    a.add_quire(&q8::from_le_bytes([0, 0, 0, 0xc0]));
    assert!(a.is_zero());
  }

  /// The quire holds the exact value of any sum of products that doesn't overflow.
  macro_rules! test_exact {
    ($name:ident, $posit:ty, $quire:ty) => {
      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES / 4))]
        #[test]
        fn $name(
          terms in proptest::collection::vec(
            (<$posit>::cases_proptest(), <$posit>::cases_proptest(), any::<bool>()),
            1 .. 8,
          ),
        ) {
          let mut quire = <$quire>::ZERO;
          let mut exact = Rational::from(0);
          for (a, b, negative) in terms {
            let prod = Rational::try_from(a).unwrap() * Rational::try_from(b).unwrap();
            if negative {
              quire.sub_prod(a, b);
              exact -= prod;
            } else {
              quire.add_prod(a, b);
              exact += prod;
            }
          }
          assert_eq!(Rational::try_from(&quire), Ok(exact))
        }
      }
    };
  }

  test_exact!{exact_p8, p8, q8}
  test_exact!{exact_p16, p16, q16}
  test_exact!{exact_p32, p32, q32}
  test_exact!{exact_p64, p64, q64}

  #[test]
  fn exact_p8_exhaustive() {
    for a in p8::cases_exhaustive() {
      for b in p8::cases_exhaustive() {
        let mut quire = q8::from(p8::ONE);
        quire.add_prod(a, b);
        let exact = Rational::from(1) + Rational::try_from(a).unwrap() * Rational::try_from(b).unwrap();
        assert_eq!(Rational::try_from(&quire), Ok(exact), "{a:?} {b:?}")
      }
    }
  }
}
