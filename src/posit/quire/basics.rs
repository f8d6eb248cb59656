use super::*;

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Quire<N, ES, SIZE> {
  /// The maximum (positive) exponent of a `Posit<N, ES, _>`. The size of the quire is directly
  /// related to this (see [`Self::SIZE`] and [`Self::WIDTH`] below).
  const MAX_EXP: u32 = {
    assert!(
      N == 8 || N == 16 || N == 32 || N == 64,
      "Only the standard posit widths (8, 16, 32, 64 bits) are supported",
    );
    assert!(
      ES + 3 == N.ilog2(),
      "The standard number of exponent bits is log2(N) - 3: 0, 1, 2, 3 for 8, 16, 32, 64 bits",
    );
    (N - 2) << ES
  };

  /// The quire size in bytes: `(N + 4 × MAX_EXP) / 8`.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(q8::SIZE, 4);
  /// assert_eq!(q64::SIZE, 256);
  /// ```
  pub const SIZE: usize = {
    assert!(
      SIZE * 8 == (N + 4 * Self::MAX_EXP) as usize,
      "The quire for N-bit posits is (N + 4 × MAX_EXP) bits long",
    );
    SIZE
  };

  /// The quire size in bits.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(q16::BITS, 128);
  /// assert_eq!(q32::BITS, 512);
  /// ```
  pub const BITS: u32 = Self::SIZE as u32 * 8;

  /// The position of the fixed point, that is: "1.0" is represented in the quire as `1 << WIDTH`.
  pub(crate) const WIDTH: u32 = {
    let _ = Self::SIZE;
    2 * Self::MAX_EXP
  };

  /// A quire that represents the posit number 0.
  pub const ZERO: Self = {
    let _ = Self::SIZE;
    Self([0; SIZE])
  };

  /// A quire that represents the posit value `NaR`.
  pub const NAR: Self = {
    let mut nar = Self::ZERO;
    nar.0[SIZE - 1] = 0x80;
    nar
  };

  /// Construct a quire from its raw bit representation, as a byte array in little-endian order.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// let quire = q8::from_le_bytes([0, 0x10, 0, 0]);
  /// assert_eq!(p8::round_from(&quire), p8::ONE);
  /// ```
  pub const fn from_le_bytes(bytes: [u8; SIZE]) -> Self {
    let _ = Self::SIZE;
    Self(bytes)
  }

  /// Construct a quire from its raw bit representation, as a byte array in big-endian order.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// let quire = q8::from_be_bytes([0, 0, 0x10, 0]);
  /// assert_eq!(p8::round_from(&quire), p8::ONE);
  /// ```
  pub fn from_be_bytes(mut bytes: [u8; SIZE]) -> Self {
    bytes.reverse();
    Self::from_le_bytes(bytes)
  }

  /// The raw bit representation of `self`, as a byte array in little-endian order.
  pub const fn to_le_bytes(&self) -> [u8; SIZE] {
    self.0
  }

  /// The raw bit representation of `self`, as a byte array in big-endian order.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(q8::from(p8::ONE).to_be_bytes(), [0, 0, 0x10, 0]);
  /// ```
  pub fn to_be_bytes(&self) -> [u8; SIZE] {
    let mut bytes = self.0;
    bytes.reverse();
    bytes
  }

  /// Checks whether `self` represents a NaR value.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert!(q32::NAR.is_nar());
  /// assert!(!q32::ZERO.is_nar());
  /// ```
  pub fn is_nar(&self) -> bool {
    // Nearly every non-NaR quire already differs in the most significant byte.
    self.0[SIZE - 1] == 0x80 && self.0[..SIZE - 1].iter().all(|&byte| byte == 0)
  }

  /// Checks whether `self` represents the number 0.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_codec::*;
  /// let mut quire = q16::from(p16::ONE);
  /// assert!(!quire.is_zero());
  /// quire -= p16::ONE;
  /// assert!(quire.is_zero());
  /// ```
  pub fn is_zero(&self) -> bool {
    self.0.iter().all(|&byte| byte == 0)
  }

  /// Reset `self` to 0.
  pub fn clear(&mut self) {
    *self = Self::ZERO
  }

  /// Whether the two's complement sign bit of `self` is set (i.e. `self` is negative or NaR).
  pub(crate) fn sign_bit(&self) -> bool {
    self.0[SIZE - 1] & 0x80 != 0
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Default for Quire<N, ES, SIZE> {
  fn default() -> Self {
    Self::ZERO
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> core::fmt::Debug for Quire<N, ES, SIZE> {
  /// The raw bits in hex, most significant byte first.
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(format!("{:?}", q8::from(-p8::ONE)), "Quire(0xfffff000)");
  /// ```
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("Quire(0x")?;
    for byte in self.0.iter().rev() {
      write!(f, "{byte:02x}")?;
    }
    f.write_str(")")
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use posit_codec::Quire;
  /// let mut q: Quire<8, 0, /*4*/ 2> = Quire::ZERO;
  /// q += posit_codec::p8::ONE;
  /// ```
  #[allow(dead_code)]
  fn quire_size_too_small_8() {}

  /// ```compile_fail
  /// use posit_codec::Quire;
  /// let mut q: Quire<16, 1, /*16*/ 32> = Quire::ZERO;
  /// q += posit_codec::p16::ONE;
  /// ```
  #[allow(dead_code)]
  fn quire_size_too_big_16() {}

  /// ```compile_fail
  /// use posit_codec::Quire;
  /// let mut q: Quire<32, 2, /*64*/ 60> = Quire::ZERO;
  /// q += posit_codec::p32::ONE;
  /// ```
  #[allow(dead_code)]
  fn quire_size_too_small_32() {}

  /// ```compile_fail
  /// use posit_codec::Quire;
  /// let q: Quire<64, 2, 256> = Quire::ZERO;
  /// ```
  #[allow(dead_code)]
  fn quire_nonstandard_es() {}
}
