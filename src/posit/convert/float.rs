use super::*;

macro_rules! make_impl {
  ($float:ty, $bits:ty) => {
    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<$float> for Posit<N, ES, Int> {
      #[doc = concat!("Convert an `", stringify!($float), "` into a `Posit`, rounding if necessary:")]
      ///
      /// - Any infinity or NaN converts to [NaR](Posit::NAR).
      /// - Both zeroes convert to [0](Posit::ZERO).
      /// - Otherwise, the float value is rounded (if necessary), subnormals included.
      fn round_from(value: $float) -> Self {
        use core::num::FpCategory;
        const EXPLICIT: u32 = <$float>::MANTISSA_DIGITS - 1;
        const BIAS: i64 = <$float>::MAX_EXP as i64 - 1;

        match value.classify() {
          FpCategory::Nan | FpCategory::Infinite => Self::NAR,
          FpCategory::Zero => Self::ZERO,
          category => {
            // Split into the sign, biased exponent, and mantissa fields. Normals have a hidden bit
            // and their exponent is biased; subnormals have neither, and the exponent of their lsb
            // is fixed.
            //
            //   normal:    (1 << EXPLICIT | mantissa) × 2^(field - BIAS - EXPLICIT)
            //   subnormal: mantissa × 2^(1 - BIAS - EXPLICIT)
            let bits = value.to_bits();
            let sign = bits >> (<$bits>::BITS - 1) != 0;
            let field = (bits << 1 >> (EXPLICIT + 1)) as i64;
            let mantissa = bits & ((1 << EXPLICIT) - 1);
            let (mag, exp) = if category == FpCategory::Normal {
              (mantissa | 1 << EXPLICIT, field - BIAS - EXPLICIT as i64)
            } else {
              (mantissa, 1 - BIAS - EXPLICIT as i64)
            };
            Self::round_from_magnitude(sign, mag.into(), exp, false)
          },
        }
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<Posit<N, ES, Int>> for $float {
      #[doc = concat!("Convert a `Posit` into an `", stringify!($float), "`, rounding to nearest (ties to even):")]
      ///
      /// - [NaR](Posit::NAR) converts to NaN, and [0](Posit::ZERO) to `0.0`.
      #[doc = concat!("- Values beyond the range of `", stringify!($float), "` convert to ±∞, or to ±0 if too small.")]
      fn round_from(value: Posit<N, ES, Int>) -> Self {
        const PRECISION: u32 = <$float>::MANTISSA_DIGITS;
        const EXPLICIT: u32 = PRECISION - 1;
        const BIAS: i64 = <$float>::MAX_EXP as i64 - 1;
        /// Exponent of the smallest subnormal.
        const MIN_QUANTUM: i64 = <$float>::MIN_EXP as i64 - PRECISION as i64;

        /// `2^exp`, constructed exactly from its bits. `exp` must be within the float's range,
        /// subnormals included.
        fn pow2(exp: i64) -> $float {
          if exp > -BIAS {
            <$float>::from_bits(((exp + BIAS) as $bits) << EXPLICIT)
          } else {
            <$float>::from_bits(1 << (exp - MIN_QUANTUM))
          }
        }

        if value.is_nar() {
          return <$float>::NAN
        }
        if value.is_zero() {
          return 0.0
        }
        // SAFETY: `value` is not 0 or NaR
        let Decoded { sign, exp, frac } = unsafe { value.decode_regular() };
        let exp: i64 = exp.into();
        let frac = Into::<i128>::into(frac) as u128;
        let width = Decoded::<N, ES, Int>::FRAC_WIDTH as i64;

        let abs = if exp >= <$float>::MAX_EXP as i64 {
          trace!("conversion of {value:?} overflowed to infinity");
          <$float>::INFINITY
        } else {
          // `value` is `frac × 2^(exp - width)`. The result has `PRECISION` significant bits, or
          // fewer if it is subnormal, so its lsb has exponent `quantum`; drop the `shift` bits of
          // `frac` below that, rounding to nearest even.
          let quantum = (exp - EXPLICIT as i64).max(MIN_QUANTUM);
          let shift = quantum - (exp - width);
          let (mantissa, scale) = if shift <= 0 {
            (frac, exp - width)
          } else if shift >= 128 {
            (0, quantum)
          } else {
            let shift = shift as u32;
            let kept = frac >> shift;
            let lost = frac & ((1 << shift) - 1);
            let half = 1 << (shift - 1);
            let round_up = lost > half || lost == half && kept & 1 == 1;
            (kept + u128::from(round_up), quantum)
          };
          if mantissa == 0 {
            trace!("conversion of {value:?} underflowed to zero");
          }
          // `mantissa` has at most `PRECISION + 1` bits (if rounding carried), so it is exact as a
          // float, and so is `pow2(scale)`; their product only rounds if it overflows.
          mantissa as $float * pow2(scale)
        };
        if sign { -abs } else { abs }
      }
    }
  };
}

make_impl!{f32, u32}
make_impl!{f64, u64}
