use super::*;

use crate::underlying::Double;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that's the result of adding `x` and
  /// `y`, plus the sticky bit.
  ///
  /// # Safety
  ///
  /// `x` and `y` have to be [normalised](Decoded::is_normalised), `|x| >= |y|`, and `x + y` can't
  /// be exactly 0, or calling this function is *undefined behaviour*.
  #[inline]
  pub(crate) unsafe fn add_kernel(x: Decoded<N, ES, Int>, y: Decoded<N, ES, Int>) -> (Decoded<N, ES, Int>, bool) {
    // The sum is computed in `Int::Double`, with `x.frac` shifted left by `BITS - 1`. This puts
    // the hidden bit of `x` at bit `2 × BITS - 3`, leaving one bit of headroom under the sign for
    // a carry, and `BITS - 1` bits of room at the bottom for `y` to be shifted into.
    //
    // Example (8 bits, 16 bit double):
    //
    //   x.frac      = 0b01_101000 (1.625)
    //   y.frac      = 0b01_100000 (1.5), 3 places to the right
    //   X           = 0b0_01_101000_0000000
    //   Y           = 0b0_00_001100_0000000
    let shift = (x.exp - y.exp).as_u32();
    let offset = Int::BITS - 1;
    let big_x = x.frac.widen() << offset;
    let big_y = y.frac.widen() << offset;

    // Align `y` to `x`. Anything that falls off the right goes to `sticky`. If the shift is so
    // long that nothing of `y` is left, `y` is all sticky.
    let zero = <Int::Double as Double>::ZERO;
    let (big_y, sticky) = if shift < <Int::Double as Double>::BITS - 1 {
      (big_y >> shift, big_y.mask_lsb(shift) != zero)
    } else {
      (zero, true)
    };

    // Same signs add the magnitudes, opposite signs subtract them. In the latter case, if there
    // were any bits lost of `y`, then the true difference is a bit smaller than `X - Y`: borrow
    // one unit from the bottom so that, with `sticky` standing for the rest, rounding sees a
    // value in the right interval.
    let sum = if x.sign == y.sign {
      big_x + big_y
    } else {
      big_x - big_y - <Int::Double as From<bool>>::from(sticky)
    };

    // Normalise. The sum may have carried into the headroom bit (leading zeros = 1), or, after
    // cancellation, may have any number of leading zeros. The hidden bit goes back to bit
    // `BITS - 2` of the single-width `frac`, and everything under it is sticky.
    //
    // Cancellation of more than 1 place can only happen for `shift` ≤ 1, where no bits of `y`
    // were lost, so the hidden bit is never below bit `BITS - 2` of `sum`.
    let lz = sum.leading_zeros();
    debug_assert!(lz >= 1 && lz <= Int::BITS + 1, "Invalid sum {sum:?}");
    let right = Int::BITS + 1 - lz;
    let (_, frac) = (sum >> right).components_hi_lo();
    let sticky = sticky || sum.mask_lsb(right) != zero;
    let exp = x.exp + Int::ONE + Int::ONE - Int::of_u32(lz);

    (Decoded { sign: x.sign, exp, frac }, sticky)
  }

  pub(crate) fn add(self, other: Self) -> Self {
    let sum = self.0.wrapping_add(other.0);
    if self.is_nar() || other.is_nar() {
      Self::NAR
    } else if self.is_zero() {
      other
    } else if other.is_zero() {
      self
    } else if sum == Int::ZERO {
      Self::ZERO
    } else {
      // Put the operand with the larger magnitude first (for posits, larger magnitude = larger
      // absolute value of the bit pattern).
      let (x, y) = if self.0.wrapping_abs() >= other.0.wrapping_abs() {
        (self, other)
      } else {
        (other, self)
      };
      // SAFETY: neither `x` nor `y` are 0 or NaR, `|x| >= |y|`, and `x + y` is not 0
      unsafe {
        let (result, sticky) = Self::add_kernel(x.decode_regular(), y.decode_regular());
        result.encode_regular_round(sticky)
      }
    }
  }

  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    self.add(-other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{p8, p16};

  #[test]
  fn p8_manual() {
    assert_eq!((p8::TWO + p8::TWO).to_bits(), 0b0_1110_000);  // 4
    assert_eq!((p8::ONE + p8::HALF).to_bits(), p8::ONE_AND_HALF.to_bits());
    assert_eq!((p8::ONE - p8::TWO).to_bits(), p8::MINUS_ONE.to_bits());
    assert_eq!((p8::MAX + p8::MAX).to_bits(), p8::MAX.to_bits());
    assert_eq!((p8::MIN_POSITIVE - p8::MAX).to_bits(), p8::MIN.to_bits());
    // 10 + 1 = 11, a tie between 10 and 12: even is 12 (0b..._10)
    assert_eq!((p8::from_bits(0b0_11110_01) + p8::ONE).to_bits(), 0b0_11110_10);
  }

  #[test]
  fn identities() {
    for p in p16::cases_exhaustive_all() {
      if p.is_nar() { continue }
      assert_eq!((p + p16::ZERO).to_bits(), p.to_bits());
      assert_eq!((p16::ZERO + p).to_bits(), p.to_bits());
      assert!((p - p).is_zero());
      assert_eq!((p - p16::ZERO).to_bits(), p.to_bits());
    }
  }

  #[test]
  fn tiny_difference() {
    // Just under 1 the spacing of p16 is 2^-13: 1 - 2^-14 is a tie, anything more is not
    let tie = p16::from_bits(0b0_00000001_0_000000);
    assert_eq!((p16::ONE - tie).to_bits(), p16::ONE.to_bits());
    assert_eq!((p16::ONE - tie.next()).to_bits(), p16::ONE.prior().to_bits());
    assert_eq!((p16::ONE - p16::MIN_POSITIVE).to_bits(), p16::ONE.to_bits());
    assert_eq!((p16::ONE + p16::MIN_POSITIVE).to_bits(), p16::ONE.to_bits());
    assert_eq!((p16::MAX - p16::ONE).to_bits(), p16::MAX.to_bits());
  }

  mod add {
    super::super::mk_tests!{+, +=, |a, b| Some(a + b)}
  }

  mod sub {
    super::super::mk_tests!{-, -=, |a, b| Some(a - b)}
  }
}
