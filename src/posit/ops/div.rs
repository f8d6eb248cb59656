use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of dividing `x` by
  /// `y`, plus the sticky bit.
  ///
  /// # Safety
  ///
  /// `x` and `y` have to be [normalised](Decoded::is_normalised), or calling this function
  /// is *undefined behaviour*.
  #[inline]
  pub(crate) unsafe fn div_kernel(x: Decoded<N, ES, Int>, y: Decoded<N, ES, Int>) -> (Decoded<N, ES, Int>, bool) {
    // To divide two numbers in the form `frac × 2^exp`, we have:
    //
    //   (x.frac / FRAC_DENOM * 2^x.exp) / (y.frac / FRAC_DENOM * 2^y.exp)
    //   = (x.frac / y.frac) * 2^(x.exp - y.exp)
    //
    // The quotient of the `frac`s is in ]1/2, 2[. Compute it in double width with `FRAC_WIDTH + 1`
    // bits after the point, so that it has one bit more than `frac` needs whichever side of 1 it
    // falls on:
    //
    //   quo = (x.frac << (FRAC_WIDTH + 1)) / y.frac,  in [2^FRAC_WIDTH, 2^(FRAC_WIDTH + 2)[
    //
    // If `quo` ≥ 2^(FRAC_WIDTH + 1), the quotient is ≥ 1: shift right by one more place (into
    // sticky). Otherwise the quotient is < 1 and `quo` is already the `frac`, with `exp` one less.
    // Either way, a nonzero remainder goes to sticky.
    use crate::underlying::Double;
    let width = Decoded::<N, ES, Int>::FRAC_WIDTH;
    let dividend = x.frac.widen() << (width + 1);
    let divisor = y.frac.widen();
    let quo = dividend / divisor;
    let sticky = dividend % divisor != <Int::Double as Double>::ZERO;

    let (_, quo) = quo.components_hi_lo();
    let exp = x.exp - y.exp;
    let (frac, exp, sticky) = if quo.lshr(width + 1) != Int::ZERO {
      (quo.lshr(1), exp, sticky || quo.get_lsb())
    } else {
      (quo, exp - Int::ONE, sticky)
    };

    (Decoded { sign: x.sign != y.sign, exp, frac }, sticky)
  }

  pub(crate) fn div(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() {
      Self::NAR
    } else if other.is_zero() {
      trace!("division of {self:?} by zero");
      Self::NAR
    } else if self.is_zero() {
      Self::ZERO
    } else {
      // SAFETY: neither `self` nor `other` are 0 or NaR
      let a = unsafe { self.decode_regular() };
      let b = unsafe { other.decode_regular() };
      let (result, sticky) = unsafe { Self::div_kernel(a, b) };
      // SAFETY: `result.is_normalised()` holds
      unsafe { result.encode_regular_round(sticky) }
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
