use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Returns the posit value of the lexicographic successor of `self`'s representation.
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce a
  /// [NaR](Posit::NAR) output on a [NaR](Posit::NAR) input: the successor of NaR is
  /// [`Posit::MIN`], and the successor of [`Posit::MAX`] is NaR.
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p8::ONE.next().to_bits(), 0b0100_0001);
  /// assert!(p8::MAX.next().is_nar());
  /// ```
  #[inline]
  pub fn next(self) -> Self {
    Self::from_bits(self.0.wrapping_add(Int::ONE))
  }

  /// Returns the posit value of the lexicographic predecessor of `self`'s representation.
  ///
  /// As with [`Posit::next`], this wraps around through NaR.
  #[inline]
  pub fn prior(self) -> Self {
    Self::from_bits(self.0.wrapping_sub(Int::ONE))
  }

  /// Return the absolute value of `self`. Exact; the absolute value of NaR is NaR.
  #[inline]
  pub fn abs(self) -> Self {
    Self::from_bits(self.0.wrapping_abs())
  }

  /// Returns [`Posit::ONE`] if `self` is positive, [`Posit::MINUS_ONE`] if negative, and `self` if
  /// it is 0 or NaR.
  #[inline]
  pub fn signum(self) -> Self {
    if self.is_special() {
      self
    } else if self.0.is_positive() {
      Self::ONE
    } else {
      Self::MINUS_ONE
    }
  }

  /// Returns a posit with the magnitude of `self` and the sign of `sign`. If either is NaR, the
  /// result is NaR. Since there is no negative zero, a zero `sign` counts as positive.
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p16::TWO.copysign(p16::MINUS_ONE), -p16::TWO);
  /// assert_eq!((-p16::TWO).copysign(p16::ZERO), p16::TWO);
  /// assert!(p16::TWO.copysign(p16::NAR).is_nar());
  /// ```
  #[inline]
  pub fn copysign(self, sign: Self) -> Self {
    if self.is_nar() || sign.is_nar() {
      Self::NAR
    } else if sign.0.is_positive() {
      self.abs()
    } else {
      -self.abs()
    }
  }

  /// Whether `self` is [NaR](Self::NAR).
  #[inline]
  pub fn is_nar(self) -> bool {
    self.0 == Self::NAR.0
  }

  /// Whether `self` is 0.
  #[inline]
  pub fn is_zero(self) -> bool {
    self.0 == Int::ZERO
  }

  /// Whether `self` is strictly negative. False for 0 and for NaR.
  #[inline]
  pub fn is_sign_negative(self) -> bool {
    !self.0.is_positive() && !self.is_nar()
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
core::ops::Neg for Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  /// Exact. The negation of 0 is 0 and the negation of NaR is NaR.
  #[inline]
  fn neg(self) -> Self::Output {
    Posit::from_bits(self.0.wrapping_neg())
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
core::ops::Neg for &Posit<N, ES, Int> {
  type Output = Posit<N, ES, Int>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
