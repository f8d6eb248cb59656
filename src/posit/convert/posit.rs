use super::*;

// `RoundFrom<Posit<N1, ES1, Int1>> for Posit<N2, ES2, Int2>` would overlap with the blanket
// `RoundFrom<T> for T`, hence a method.
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// Convert a posit into one of a different format, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  ///
  /// Converting to a wider format is always exact, so `p.convert::<..>().convert::<..>()` back to
  /// the original format gives back `p`. This makes mixed-precision arithmetic easy.
  ///
  /// # Examples
  ///
  /// ```
  /// # use posit_codec::{p8, p16, p64, RoundFrom, RoundInto};
  /// let pi: p64 = core::f64::consts::PI.round_into();
  /// let two: p8 = 2.round_into();
  /// let tau: p64 = pi * two.convert();
  /// assert_eq!(tau, core::f64::consts::TAU.round_into());
  ///
  /// let narrow: p16 = pi.convert();
  /// assert_eq!(narrow, p16::round_from(core::f64::consts::PI));
  /// ```
  pub fn convert<
    const N2: u32,
    const ES2: u32,
    Int2: crate::Int,
  >(self) -> Posit<N2, ES2, Int2> {
    if self.is_zero() {
      Posit::ZERO
    } else if self.is_nar() {
      Posit::NAR
    } else {
      // SAFETY: `self` is not 0 or NaR
      let Decoded { sign, exp, frac } = unsafe { self.decode_regular() };
      // The value is `frac × 2^(exp - FRAC_WIDTH)`, with `frac` positive.
      let exp: i64 = exp.into();
      let mag = Into::<i128>::into(frac) as u128;
      let exp = exp - i64::from(Decoded::<N, ES, Int>::FRAC_WIDTH);
      Posit::round_from_magnitude(sign, mag, exp, false)
    }
  }
}
