use super::{Int, Prim, Sealed};

/// Implementation of all functions, which are the same for every width modulo the types.
macro_rules! impl_int {
  ($int:ty, $uint:ty, $double:ty, $nonzero:ident) => {
    impl Prim for $int {
      const BITS: u32 = <$int>::BITS;
    }

    impl Int for $int {}

    impl Sealed for $int {
      type Unsigned = $uint;
      type Double = $double;
      type Bytes = [u8; <$int>::BITS as usize / 8];

      const ZERO: Self = 0;
      const ONE: Self = 1;

      #[inline]
      fn as_unsigned(self) -> $uint { self as $uint }

      #[inline]
      fn of_unsigned(x: $uint) -> Self { x as $int }

      #[inline]
      fn as_u32(self) -> u32 {
        debug_assert!(u32::try_from(self).is_ok());
        self as u32
      }

      #[inline]
      fn of_u32(x: u32) -> Self {
        debug_assert!(Self::try_from(x).is_ok());
        x as $int
      }

      #[inline]
      fn of_u128(x: u128) -> Self { x as $int }

      #[inline]
      fn to_le_bytes(self) -> Self::Bytes { <$int>::to_le_bytes(self) }

      #[inline]
      fn from_le_bytes(bytes: Self::Bytes) -> Self { <$int>::from_le_bytes(bytes) }

      #[inline]
      fn to_be_bytes(self) -> Self::Bytes { <$int>::to_be_bytes(self) }

      #[inline]
      fn from_be_bytes(bytes: Self::Bytes) -> Self { <$int>::from_be_bytes(bytes) }

      #[inline]
      fn is_positive(self) -> bool {
        self >= 0
      }

      #[inline]
      fn lshr(self, n: u32) -> Self { ((self as $uint) >> n) as $int }

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        let mask = (1 as $int << n).wrapping_sub(1);
        self & mask
      }

      #[inline]
      fn get_lsb(self) -> bool {
        self & 1 == 1
      }

      #[inline]
      fn leading_zeros(self) -> u32 {
        <$int>::leading_zeros(self)
      }

      #[inline]
      unsafe fn leading_zeros_nonzero(self) -> u32 {
        debug_assert!(self != 0);
        unsafe { core::num::$nonzero::new_unchecked(self) }.leading_zeros()
      }

      #[inline]
      fn wrapping_add(self, other: Self) -> Self { <$int>::wrapping_add(self, other) }

      #[inline]
      fn wrapping_sub(self, other: Self) -> Self { <$int>::wrapping_sub(self, other) }

      #[inline]
      fn wrapping_neg(self) -> Self { <$int>::wrapping_neg(self) }

      #[inline]
      fn wrapping_abs(self) -> Self { <$int>::wrapping_abs(self) }

      #[inline]
      fn widen(self) -> $double { self as $double }

      #[inline]
      fn doubling_mul(self, other: Self) -> $double {
        self as $double * other as $double
      }
    }
  }
}

impl_int!{i8, u8, i16, NonZeroI8}
impl_int!{i16, u16, i32, NonZeroI16}
impl_int!{i32, u32, i64, NonZeroI32}
impl_int!{i64, u64, i128, NonZeroI64}

impl Prim for i128 {
  const BITS: u32 = i128::BITS;
}
