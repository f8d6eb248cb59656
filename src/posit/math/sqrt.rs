use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Return a [normalised](Decoded::is_normalised) `Decoded` that is the result of √x, plus the
  /// sticky bit.
  ///
  /// # Safety
  ///
  /// `x` must to be [normalised](Decoded::is_normalised) and positive, or calling this function
  /// is *undefined behaviour*.
  #[inline]
  pub(crate) unsafe fn sqrt_kernel(x: Decoded<N, ES, Int>) -> (Decoded<N, ES, Int>, bool) {
    // Taking the square root of a number in the form `frac × 2^exp` has two steps.
    //
    // First, ensure that `exp` is an even number. If it's odd, subtract 1 from exp and compensate
    // `frac` accordingly. That is:
    //
    //   frac', exp' = frac     , exp        if exp is even
    //               = frac << 1, exp - 1    if exp is odd
    //
    // Then, the square root is easy.
    //
    //   √(frac' / FRAC_DENOM * 2^exp')
    //   = √(frac') / √(FRAC_DENOM) * 2^(exp' / 2)
    //   = √(frac' * FRAC_DENOM) / FRAC_DENOM * 2^(exp' / 2)
    //
    // In other words: the resulting `exp` is `exp' / 2`, and the `frac` is the integer square root
    // of `frac' << FRAC_WIDTH`, computed in double width. Since `frac'` is in [1, 4[, the root is
    // in [1, 2[, already normalised. A nonzero remainder goes to sticky.
    use crate::underlying::Double;
    debug_assert!(!x.sign, "Safety precondition violated: {x:?} is negative");
    let odd = x.exp.get_lsb();
    let frac = x.frac.widen() << (Decoded::<N, ES, Int>::FRAC_WIDTH + u32::from(odd));
    let exp = x.exp - Int::from(odd);

    let (root, sticky) = frac.sqrt_rem();
    let (_, frac) = root.components_hi_lo();
    let exp = exp >> 1;

    (Decoded { sign: false, exp, frac }, sticky)
  }

  /// Returns the square root of `self`, rounded. If `self` is negative or [NaR](Self::NAR),
  /// returns NaR.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p16::round_from(6.25_f64).sqrt(), p16::round_from(2.5_f64));
  /// assert!(p16::MINUS_ONE.sqrt().is_nar());
  /// assert!(p16::ZERO.sqrt().is_zero());
  /// ```
  pub fn sqrt(self) -> Self {
    if self.is_special() {
      self
    } else if self.is_sign_negative() {
      trace!("square root of negative {self:?}");
      Self::NAR
    } else {
      // SAFETY: `self` is not 0 or NaR
      let x = unsafe { self.decode_regular() };
      // SAFETY: `self` is positive
      let (result, sticky) = unsafe { Self::sqrt_kernel(x) };
      // SAFETY: `result.is_normalised()` holds
      unsafe { result.encode_regular_round(sticky) }
    }
  }
}
