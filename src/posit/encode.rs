use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  /// Encode a posit, rounding if necessary. The rounding rule is always the same: "round to
  /// nearest, round ties to even bit pattern, never round to 0 or NaR (i.e. never over- or
  /// under-flow)".
  ///
  /// `sticky` is the sticky bit: it is `false` **if and only if** all the bits that were lost
  /// before calling this function (e.g. shifted out during an addition, or left as remainder in a
  /// division) were 0. In other words, OR any lost bits into `sticky`, then pass it to
  /// `encode_regular_round` to get a correctly rounded Posit.
  ///
  /// # Safety
  ///
  /// [`self.is_normalised()`](Self::is_normalised) has to hold, or calling this function
  /// is *undefined behaviour*.
  pub(crate) unsafe fn encode_regular_round(self, mut sticky: bool) -> Posit<N, ES, Int> {
    debug_assert!(
      self.is_normalised(),
      "Safety precondition violated: {self:?} does not have a normalised frac",
    );
    let Decoded { sign, exp, frac } = self;

    // Out of range exponents saturate: anything ≥ MAX goes to MAX, anything < MIN_POSITIVE goes to
    // MIN_POSITIVE. Since `frac` ≥ 1, `exp` ≥ MAX_EXP already means ≥ MAX.
    let abs = if exp >= Posit::<N, ES, Int>::MAX_EXP {
      Posit::<N, ES, Int>::MAX.0
    } else if exp < Posit::<N, ES, Int>::MIN_EXP {
      Int::ONE
    } else {
      // Split the exponent into regime `k` (floor division by 2^ES) and exponent bits `e`.
      let k = exp >> ES;
      let e = exp.mask_lsb(ES);

      // The regime is a run of k+1 1s and a 0 if k ≥ 0, or a run of -k 0s and a 1 if k < 0. Put
      // it right after the sign bit, and note its length `regime_len` including the terminating
      // bit. Since MIN_EXP ≤ exp < MAX_EXP, k is in -(N-2) ..= N-3 and the regime (with its
      // terminating bit) always fits in the N-1 bits after the sign.
      //
      // Example (8 bits):
      //   k = 2:  0b0_1110_000  (MAX - MAX >> 3)
      //   k = -2: 0b0_001_0000  (1 << 4)
      let (regime, regime_len) = if k.is_positive() {
        let k = k.as_u32();
        let max = Posit::<N, ES, Int>::MAX.0;
        (max - (max >> (k + 1)), k + 2)
      } else {
        let k = (-k).as_u32();
        (Int::ONE << (Self::BITS - 2 - k), k + 1)
      };

      // Assemble the exponent bits followed by the fraction bits (sans hidden bit), left-justified.
      let fraction = frac << 2;
      let tail = if const { Self::ES == 0 } {
        fraction
      } else {
        sticky |= fraction.mask_lsb(Self::ES) != Int::ZERO;
        (e << (Int::BITS - Self::ES)) | fraction.lshr(Self::ES)
      };

      // Then place them right after the regime. Of the bits that do not fit, the first one is the
      // guard bit, and the rest go to sticky.
      let bits = regime | tail.lshr(regime_len).lshr(1);
      let lost = tail << (Int::BITS - 1 - regime_len);
      let guard = !lost.is_positive();
      sticky |= lost << 1 != Int::ZERO;

      // Round to nearest, ties to even. Can never carry into the sign bit: the largest `bits`
      // can be here is MAX - 1 (k = N-3 and no room left for anything else).
      let round_up = guard && (sticky || bits.get_lsb());
      bits + Int::from(round_up)
    };

    Posit(if sign { -abs } else { abs })
  }

  /// Encode a posit, **ignoring rounding**. Suitable for a [`Decoded`] that came out of
  /// [`Posit::decode_regular`], or that is otherwise known to be exactly representable.
  ///
  /// # Safety
  ///
  /// As [`Self::encode_regular_round`].
  #[inline]
  pub(crate) unsafe fn encode_regular(self) -> Posit<N, ES, Int> {
    unsafe { self.encode_regular_round(false) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::rational::IsNaR;
  use crate::{p8, p16, p32, p64};

  use malachite::rational::Rational;
  use proptest::prelude::*;

  mod roundtrip {
    use super::*;

    fn assert_roundtrip<const N: u32, const ES: u32, Int: crate::Int>(p: Posit<N, ES, Int>) {
      let encoded = unsafe { p.decode_regular().encode_regular() };
      assert_eq!(encoded.to_bits(), p.to_bits())
    }

    #[test]
    fn p8_exhaustive() {
      for p in p8::cases_exhaustive() {
        assert_roundtrip(p)
      }
    }

    #[test]
    fn p16_exhaustive() {
      for p in p16::cases_exhaustive() {
        assert_roundtrip(p)
      }
    }

    proptest!{
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

      #[test]
      fn p32_proptest(p in p32::cases_proptest()) {
        assert_roundtrip(p)
      }

      #[test]
      fn p64_proptest(p in p64::cases_proptest()) {
        assert_roundtrip(p)
      }
    }
  }

  mod rounding {
    use super::*;

    /// Aux function: assert that `decoded` is indeed `rational`, and that it is encoded
    /// (after rounding) into `posit`.
    fn assert_encode_rounded<const N: u32, const ES: u32, Int: crate::Int>(
      rational: &str,
      decoded: Decoded<N, ES, Int>,
      posit: Int,
    ) {
      use core::str::FromStr;
      assert_eq!(Rational::from(decoded), Rational::from_str(rational).unwrap());
      assert_eq!(unsafe { decoded.encode_regular() }.to_bits(), posit);
    }

    #[test]
    fn p8_manual_pos() {
      type D = Decoded<8, 0, i8>;
      // Between 8 and 16, p8 has 2 fraction bits: 8, 10, 12, 14, 16.
      assert_encode_rounded("9", D { sign: false, frac: 0b01_001000, exp: 3 }, 0b0_11110_00);  // → 8
      assert_encode_rounded("37/4", D { sign: false, frac: 0b01_001010, exp: 3 }, 0b0_11110_01);  // 9.25 → 10
      assert_encode_rounded("10", D { sign: false, frac: 0b01_010000, exp: 3 }, 0b0_11110_01);  // → 10
      assert_encode_rounded("11", D { sign: false, frac: 0b01_011000, exp: 3 }, 0b0_11110_10);  // → 12
      assert_encode_rounded("13", D { sign: false, frac: 0b01_101000, exp: 3 }, 0b0_11110_10);  // → 12
      assert_encode_rounded("15", D { sign: false, frac: 0b01_111000, exp: 3 }, 0b0_111110_0);  // → 16
      assert_encode_rounded("31/2", D { sign: false, frac: 0b01_111100, exp: 3 }, 0b0_111110_0);  // → 16
    }

    #[test]
    fn p8_manual_neg() {
      type D = Decoded<8, 0, i8>;
      assert_encode_rounded("-9", D { sign: true, frac: 0b01_001000, exp: 3 }, -0b0_11110_00);
      assert_encode_rounded("-11", D { sign: true, frac: 0b01_011000, exp: 3 }, -0b0_11110_10);
      assert_encode_rounded("-13", D { sign: true, frac: 0b01_101000, exp: 3 }, -0b0_11110_10);
    }

    #[test]
    fn p8_saturate() {
      type D = Decoded<8, 0, i8>;
      let one = 0b01_000000;
      assert_eq!(unsafe { D { sign: false, frac: one, exp: 6 }.encode_regular() }.to_bits(), p8::MAX.to_bits());
      assert_eq!(unsafe { D { sign: false, frac: 0b01_111111, exp: 6 }.encode_regular() }.to_bits(), p8::MAX.to_bits());
      assert_eq!(unsafe { D { sign: false, frac: one, exp: 40 }.encode_regular() }.to_bits(), p8::MAX.to_bits());
      assert_eq!(unsafe { D { sign: true, frac: one, exp: 7 }.encode_regular() }.to_bits(), p8::MIN.to_bits());
      assert_eq!(unsafe { D { sign: false, frac: one, exp: -7 }.encode_regular() }.to_bits(), p8::MIN_POSITIVE.to_bits());
      assert_eq!(unsafe { D { sign: false, frac: 0b01_111111, exp: -7 }.encode_regular() }.to_bits(), p8::MIN_POSITIVE.to_bits());
      assert_eq!(unsafe { D { sign: true, frac: one, exp: -40 }.encode_regular() }.to_bits(), p8::MAX_NEGATIVE.to_bits());
      // Between 32 and 64 there are no fraction bits: 48 is a tie, rounds to even (32)
      assert_eq!(unsafe { D { sign: false, frac: 0b01_100000, exp: 5 }.encode_regular() }.to_bits(), 0b0_1111110);
      assert_eq!(unsafe { D { sign: false, frac: 0b01_100000, exp: 5 }.encode_regular_round(true) }.to_bits(), p8::MAX.to_bits());
    }

    #[test]
    #[allow(overflowing_literals)]
    fn p16_truncated_exponent() {
      type D = Decoded<16, 1, i16>;
      let one = 0b01 << 14;
      // Near MAX (2^28) the exponent bit is cut: 2^26 → 0x7ffe, 2^27 is a tie → 0x7ffe (even),
      // anything above 2^27 → MAX.
      assert_eq!(unsafe { D { sign: false, frac: one, exp: 26 }.encode_regular() }.to_bits(), 0x7ffe);
      assert_eq!(unsafe { D { sign: false, frac: one, exp: 27 }.encode_regular() }.to_bits(), 0x7ffe);
      assert_eq!(unsafe { D { sign: false, frac: one, exp: 27 }.encode_regular_round(true) }.to_bits(), 0x7fff);
      assert_eq!(unsafe { D { sign: false, frac: one | 1, exp: 27 }.encode_regular() }.to_bits(), 0x7fff);
    }

    /// Aux function: check that `decoded` is rounded correctly. The sticky bit is modelled as a
    /// tiny nonzero amount added to the magnitude.
    fn is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
      decoded: Decoded<N, ES, Int>,
      sticky: bool,
    ) -> bool
    where
      Rational: TryFrom<Posit<N, ES, Int>, Error = IsNaR>,
    {
      use malachite::base::num::arithmetic::traits::Pow;
      let epsilon = Rational::try_from(Posit::<N, ES, Int>::MIN_POSITIVE).unwrap().pow(32i64);
      let posit = unsafe { decoded.encode_regular_round(sticky) };
      let exact = Rational::from(decoded);
      let exact = match (sticky, decoded.sign) {
        (false, _) => exact,
        (true, false) => exact + epsilon,
        (true, true) => exact - epsilon,
      };
      super::rational::is_correct_rounded(exact, posit)
    }

    #[test]
    fn p8_exhaustive() {
      for d in Decoded::<8, 0, i8>::cases_exhaustive() {
        for s in [false, true] {
          assert!(is_correct_rounded(d, s), "decoded={d:?} sticky={s:?}")
        }
      }
    }

    proptest!{
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

      #[test]
      fn p16_proptest(d in Decoded::<16, 1, i16>::cases_proptest(), s: bool) {
        assert!(is_correct_rounded(d, s), "decoded={d:?} sticky={s:?}")
      }

      #[test]
      fn p32_proptest(d in Decoded::<32, 2, i32>::cases_proptest(), s: bool) {
        assert!(is_correct_rounded(d, s), "decoded={d:?} sticky={s:?}")
      }

      #[test]
      fn p64_proptest(d in Decoded::<64, 3, i64>::cases_proptest(), s: bool) {
        assert!(is_correct_rounded(d, s), "decoded={d:?} sticky={s:?}")
      }
    }
  }
}
