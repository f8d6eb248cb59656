use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Decode a posit **which is not 0 or NaR** into its sign, combined exponent, and significand
  /// (see [`Decoded`]).
  ///
  /// # Safety
  ///
  /// `self` cannot be 0 or NaR, or calling this function is *undefined behaviour*.
  #[inline]
  pub(crate) unsafe fn decode_regular(self) -> Decoded<N, ES, Int> {
    debug_assert!(
      !self.is_special(),
      "Safety precondition violated: {self:?} cannot be 0 or NaR",
    );

    // The fields of a negative posit are those of its two's complement. NaR is excluded, so the
    // absolute value always has a 0 sign bit.
    let sign = !self.0.is_positive();
    let abs = self.0.wrapping_abs();

    // Shift out the sign bit, so that the regime run starts at the msb, and measure the run.
    //
    //   run of r 1s: k = r - 1 (the run may extend to the very last bit, e.g. in MAX)
    //   run of r 0s: k = -r    (always terminated by a 1, since `abs` is not 0)
    //
    // Example (8 bits):
    //   abs   = 0b0_1110_101
    //   body  = 0b1110_1010
    //   run   = 3, k = 2
    //   rest  = 0b1010_0000
    let body = abs << 1;
    let (run, k) = if body.is_positive() {
      let run = unsafe { body.leading_zeros_nonzero() };
      (run, -Int::of_u32(run))
    } else {
      let run = (!body).leading_zeros();
      (run, Int::of_u32(run) - Int::ONE)
    };
    debug_assert!(run <= Self::BITS - 1);

    // Shift out the regime and its terminating bit (if any). Done in two steps, since the run can
    // be as long as `BITS - 1`.
    let rest = (body << run) << 1;

    // The leftmost ES bits are the exponent. If fewer than ES bits were left after the regime,
    // the missing ones have been filled with 0s by the shifts, which is exactly right.
    let exponent = if const { Self::ES == 0 } {
      Int::ZERO
    } else {
      rest.lshr(Int::BITS - Self::ES)
    };

    // And the remaining bits are the fraction, whose first bit goes right under the hidden bit.
    // Since there are at most `BITS - 3 - ES` fraction bits, the 2 bits dropped here are always 0.
    let fraction = (rest << Self::ES).lshr(2);
    let frac = Decoded::<N, ES, Int>::FRAC_DENOM | fraction;

    let exp = (k << Self::ES) + exponent;
    Decoded { sign, exp, frac }
  }
}
