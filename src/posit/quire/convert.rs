use super::*;
use crate::RoundFrom;

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
  Int: crate::Int,
> From<Posit<N, ES, Int>> for Quire<N, ES, SIZE> {
  /// Create a quire holding the value of `value`, exactly.
  ///
  /// Standard: "[**pToQ**](https://posithub.org/docs/posit_standard-2.pdf)".
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// let quire = q16::from(p16::round_from(-2.5));
  /// assert_eq!(p16::round_from(&quire), p16::round_from(-2.5));
  /// ```
  fn from(value: Posit<N, ES, Int>) -> Self {
    let mut quire = Self::ZERO;
    quire += value;
    quire
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
  Int: crate::Int,
> RoundFrom<&Quire<N, ES, SIZE>> for Posit<N, ES, Int> {
  /// Round the contents of a quire to a posit, to nearest with ties to even, like every other
  /// rounding operation. NaR converts to NaR.
  ///
  /// Standard: "[**qToP**](https://posithub.org/docs/posit_standard-2.pdf)".
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// let mut quire = q32::ZERO;
  /// quire += p32::ONE;
  /// quire += p32::round_from(1e-30);
  /// // The sum was exact, and is only rounded here
  /// assert_eq!(p32::round_from(&quire), p32::ONE);
  /// ```
  fn round_from(value: &Quire<N, ES, SIZE>) -> Self {
    if value.is_nar() {
      return Self::NAR
    }
    let sign = value.sign_bit();
    let mut mag = value.0;
    if sign {
      // Two's complement negation: invert, add one. The most negative value is NaR, so the
      // magnitude always fits.
      let mut carry = true;
      for byte in &mut mag {
        let (result, c) = (!*byte).overflowing_add(u8::from(carry));
        *byte = result;
        carry = c;
      }
    }
    let Some(top) = mag.iter().rposition(|&byte| byte != 0) else {
      return Self::ZERO
    };

    // Gather the 128 bits starting at the most significant 1, left-justified, into `bits`. Any
    // other nonzero bit is sticky.
    let byte_at = |k: usize| top.checked_sub(k).map_or(0, |i| mag[i]);
    let lz = mag[top].leading_zeros();
    let mut bits = 0u128;
    for k in 0 .. 16 {
      bits = bits << 8 | u128::from(byte_at(k));
    }
    let next = byte_at(16);
    if lz != 0 {
      bits = bits << lz | u128::from(next >> (8 - lz));
    }
    let sticky = next << lz != 0
      || top.checked_sub(16).is_some_and(|end| mag[.. end].iter().any(|&byte| byte != 0));

    // The msb is bit `8 × top + 7 - lz` of the quire, and bit `WIDTH` has weight 1.
    let msb = 8 * top as i64 + 7 - i64::from(lz);
    Self::round_from_left_justified(sign, bits, msb - i64::from(Quire::<N, ES, SIZE>::WIDTH), sticky)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Quire<N, ES, SIZE> {
  /// Round the contents of the quire to a posit. Same as [`Posit::round_from`]`(&self)`.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// let mut quire = q8::ZERO;
  /// quire.add_prod(p8::round_from(3), p8::round_from(0.5));
  /// assert_eq!(quire.to_posit(), p8::round_from(1.5));
  /// ```
  pub fn to_posit<Int: crate::Int>(&self) -> Posit<N, ES, Int> {
    Posit::round_from(self)
  }
}
