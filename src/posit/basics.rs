use super::*;
use crate::underlying::const_as;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The size of this Posit type in bits (i.e. parameter `N`).
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p16::BITS, 16);
  /// ```
  pub const BITS: u32 = {
    assert!(
      N == 8 || N == 16 || N == 32 || N == 64,
      "Only the standard posit widths (8, 16, 32, 64 bits) are supported",
    );
    assert!(
      N == Int::BITS,
      "A posit must be backed by a machine int of exactly its own width",
    );
    N
  };

  /// The number of exponent bits (i.e. parameter `ES`).
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p64::ES, 3);
  /// ```
  pub const ES: u32 = {
    assert!(
      ES + 3 == Self::BITS.ilog2(),
      "The standard number of exponent bits is log2(N) - 3: 0, 1, 2, 3 for 8, 16, 32, 64 bits",
    );
    ES
  };

  /// Construct a posit from its raw bit representation.
  ///
  /// Every bit pattern is a valid posit.
  #[inline]
  pub const fn from_bits(bits: Int) -> Self {
    let _ = Self::ES;
    Self(bits)
  }

  /// Return the underlying bit representation of `self` as a machine int.
  #[inline]
  pub const fn to_bits(self) -> Int {
    self.0
  }

  /// The raw bits, as a byte array in little-endian order.
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert_eq!(p16::ONE.to_le_bytes(), [0x00, 0x40]);
  /// ```
  #[inline]
  pub fn to_le_bytes(self) -> Int::Bytes {
    self.0.to_le_bytes()
  }

  /// Construct a posit from its raw bits, as a byte array in little-endian order.
  #[inline]
  pub fn from_le_bytes(bytes: Int::Bytes) -> Self {
    Self::from_bits(Int::from_le_bytes(bytes))
  }

  /// The raw bits, as a byte array in big-endian order.
  #[inline]
  pub fn to_be_bytes(self) -> Int::Bytes {
    self.0.to_be_bytes()
  }

  /// Construct a posit from its raw bits, as a byte array in big-endian order.
  #[inline]
  pub fn from_be_bytes(bytes: Int::Bytes) -> Self {
    Self::from_bits(Int::from_be_bytes(bytes))
  }

  /// Construct a posit from a little-endian byte slice, which must be exactly `N / 8` bytes long.
  ///
  /// ```
  /// # use posit_codec::*;
  /// assert!(p16::from_le_slice(&[0x00, 0x40]).is_ok_and(|p| p == p16::ONE));
  /// assert!(p16::from_le_slice(&[0x00, 0x40, 0x00]).is_err());
  /// ```
  pub fn from_le_slice(bytes: &[u8]) -> Result<Self, core::array::TryFromSliceError> {
    let bytes = Int::Bytes::try_from(bytes)?;
    Ok(Self::from_le_bytes(bytes))
  }

  /// Checks whether `self` is an exception ([0](Self::ZERO) or [NaR](Self::NAR)), that is, the
  /// same as `self == Self::ZERO || self.is_nar()`, but faster.
  #[inline]
  pub(crate) fn is_special(&self) -> bool {
    self.0 << 1 == Int::ZERO
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  /// The [`Decoded::frac`] field has the binary point [`Decoded::FRAC_WIDTH`] bits from the
  /// right.
  pub(crate) const FRAC_WIDTH: u32 = Int::BITS - 2;

  /// The [`Decoded::frac`] field represents the significand of a posit as a fixed-point number.
  /// [`Decoded::FRAC_DENOM`] is the denominator of that fixed-point number, i.e. the value of the
  /// hidden bit.
  pub(crate) const FRAC_DENOM: Int = const_as(1i128 << Self::FRAC_WIDTH);

  /// As [`Posit::BITS`].
  pub const BITS: u32 = Posit::<N, ES, Int>::BITS;

  /// As [`Posit::ES`].
  pub const ES: u32 = Posit::<N, ES, Int>::ES;

  /// Checks whether `self` is normalised, i.e. whether `self.frac` is in `[1, 2)` as a fixed-point
  /// number (starts with `0b01`).
  pub(crate) fn is_normalised(self) -> bool {
    self.frac.lshr(Self::FRAC_WIDTH) == Int::ONE
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> u32 { Posit::<6, 0, i8>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_nonstandard() {}

  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> u32 { Posit::<128, 4, i128>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_128() {}

  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> u32 { Posit::<16, 1, i32>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_wider_int() {}

  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> u32 { Posit::<32, 2, i16>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_narrower_int() {}

  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> u32 { Posit::<8, 2, i8>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_8() {}

  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> u32 { Posit::<16, 2, i16>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_16() {}

  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> u32 { Posit::<32, 3, i32>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_32() {}

  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> u32 { Posit::<64, 2, i64>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_64() {}

  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> bool { Posit::<8, 2, i8>::ZERO == Posit::<8, 2, i8>::ZERO }
  /// ```
  #[allow(dead_code)]
  fn zero_fail_es() {}

  /// ```compile_fail
  /// use posit_codec::Posit;
  /// pub fn foo() -> bool { Posit::<16, 0, i16>::NAR.is_nar() }
  /// ```
  #[allow(dead_code)]
  fn nar_fail_es() {}
}
