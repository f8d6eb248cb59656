use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of multiplying `x`
  /// and `y`, plus the sticky bit.
  ///
  /// # Safety
  ///
  /// `x` and `y` have to be [normalised](Decoded::is_normalised), or calling this function
  /// is *undefined behaviour*.
  #[inline]
  pub(crate) unsafe fn mul_kernel(x: Decoded<N, ES, Int>, y: Decoded<N, ES, Int>) -> (Decoded<N, ES, Int>, bool) {
    // Multiplying two numbers in the form `frac × 2^exp` is much easier than adding them. We have
    //
    //   (x.frac / FRAC_DENOM * 2^x.exp) * (y.frac / FRAC_DENOM * 2^y.exp)
    //   = (x.frac * y.frac) / FRAC_DENOM² * 2^(x.exp + y.exp)
    //
    // The product of the `frac`s, in double width, has its hidden bit at `2 × FRAC_WIDTH` =
    // `2 × BITS - 4` if it's in [1, 2), or one place higher if it's in [2, 4) (e.g. 1.5 × 1.5 =
    // 2.25). Shift it left so that the hidden bit lands at `2 × BITS - 2`, i.e. at bit
    // `FRAC_WIDTH` of the high half. Then the high half is the `frac`, and the low half is all
    // sticky.
    //
    //   frac = hi((x.frac * y.frac) << shift)
    //    exp = x.exp + y.exp + 2 - shift
    //
    // where `shift` is 2 for a product in [1, 2), and 1 for a product in [2, 4).
    use crate::underlying::Double;
    let mul = x.frac.doubling_mul(y.frac);
    let shift = mul.leading_zeros() - 1;
    debug_assert!(shift == 1 || shift == 2, "Invalid product {mul:?}");
    let (frac, lo) = (mul << shift).components_hi_lo();
    let exp = x.exp + y.exp + Int::ONE + Int::ONE - Int::of_u32(shift);

    (Decoded { sign: x.sign != y.sign, exp, frac }, lo != Int::ZERO)
  }

  pub(crate) fn mul(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() {
      Self::NAR
    } else if self.is_zero() || other.is_zero() {
      Self::ZERO
    } else {
      // SAFETY: neither `self` nor `other` are 0 or NaR
      let a = unsafe { self.decode_regular() };
      let b = unsafe { other.decode_regular() };
      let (result, sticky) = unsafe { Self::mul_kernel(a, b) };
      // SAFETY: `result.is_normalised()` holds
      unsafe { result.encode_regular_round(sticky) }
    }
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
