use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return the remainder of `|x| / |y|`, truncating, with the sign of `x`. The result is exact
  /// (before rounding), so there is no sticky bit; `None` means the remainder is 0.
  ///
  /// # Safety
  ///
  /// `x` and `y` have to be [normalised](Decoded::is_normalised), and `|x| > |y|`, or calling this
  /// function is *undefined behaviour*.
  pub(crate) unsafe fn rem_kernel(x: Decoded<N, ES, Int>, y: Decoded<N, ES, Int>) -> Option<Decoded<N, ES, Int>> {
    // Both `frac`s share the same denominator, so the remainder of
    //
    //   (x.frac × 2^x.exp) / (y.frac × 2^y.exp)
    //
    // is `((x.frac × 2^(x.exp - y.exp)) mod y.frac) × 2^y.exp`. Since `|x| > |y|`, the shift is
    // not negative. Compute the `mod` by long division, one bit of the shift at a time: each step
    // doubles the partial remainder and subtracts `y.frac` if it fits. The partial remainder is
    // always < `y.frac` < 2^(BITS - 1), so doubling it never overflows the unsigned type.
    let divisor = y.frac.as_unsigned();
    let mut rem = x.frac.as_unsigned();
    if rem >= divisor {
      rem = Int::of_unsigned(rem).wrapping_sub(y.frac).as_unsigned();
    }
    for _ in 0 .. (x.exp - y.exp).as_u32() {
      rem = rem << 1;
      if rem >= divisor {
        rem = Int::of_unsigned(rem).wrapping_sub(y.frac).as_unsigned();
      }
    }

    // Normalise: move the highest set bit up to the hidden bit position.
    let rem = Int::of_unsigned(rem);
    if rem == Int::ZERO {
      return None
    }
    // SAFETY: `rem` is not 0
    let shift = unsafe { rem.leading_zeros_nonzero() } - 1;
    let frac = rem << shift;
    let exp = y.exp - Int::of_u32(shift);
    Some(Decoded { sign: x.sign, exp, frac })
  }

  pub(crate) fn rem(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() {
      Self::NAR
    } else if other.is_zero() {
      trace!("remainder of {self:?} by zero");
      Self::NAR
    } else if self.is_zero() {
      Self::ZERO
    } else {
      let abs_x = self.0.wrapping_abs();
      let abs_y = other.0.wrapping_abs();
      if abs_x < abs_y {
        self
      } else if abs_x == abs_y {
        Self::ZERO
      } else {
        // SAFETY: neither `self` nor `other` are 0 or NaR, and `|self| > |other|`
        match unsafe { Self::rem_kernel(self.decode_regular(), other.decode_regular()) } {
          // SAFETY: `result.is_normalised()` holds
          Some(result) => unsafe { result.encode_regular() },
          None => Self::ZERO,
        }
      }
    }
  }
}

use core::ops::{Rem, RemAssign};
super::mk_ops!{Rem, RemAssign, rem, rem_assign}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{p8, p32};
  use crate::RoundFrom;

  #[test]
  fn p8_manual() {
    let p = |x: f64| p8::round_from(x);
    assert_eq!((p(10.) % p(3.)).to_bits(), p8::ONE.to_bits());
    assert_eq!((p(-10.) % p(3.)).to_bits(), p8::MINUS_ONE.to_bits());
    assert_eq!((p(10.) % p(-3.)).to_bits(), p8::ONE.to_bits());
    assert_eq!((p(1.5) % p(0.5)).to_bits(), 0);
    assert_eq!((p(0.75) % p(2.)).to_bits(), p(0.75).to_bits());
    assert_eq!((p(-2.) % p(2.)).to_bits(), 0);
    assert!((p8::ONE % p8::ZERO).is_nar());
    assert!((p8::ZERO % p8::ONE).is_zero());
  }

  #[test]
  fn p32_large_quotient() {
    // 2^100 / 2^-20 = 2^120 exactly, while 2^100 / (3 × 2^-20) leaves 2^-20 × (2^120 mod 3) = 2^-20
    let big = p32::round_from(2f64.powi(100));
    let small = p32::round_from(2f64.powi(-20));
    assert!((big % small).is_zero());
    let three = p32::round_from(3. * 2f64.powi(-20));
    assert_eq!((big % three).to_bits(), small.to_bits());
  }

  mod rem {
    use malachite::base::num::arithmetic::traits::Floor;

    /// Remainder of truncating division.
    fn exact_rem(a: Rational, b: Rational) -> Option<Rational> {
      if b == Rational::from(0) {
        return None
      }
      let quo = &a / &b;
      let quo = if quo >= Rational::from(0) {
        quo.floor()
      } else {
        -(-quo).floor()
      };
      Some(a - Rational::from(quo) * b)
    }

    super::super::mk_tests!{%, %=, exact_rem}
  }
}
