use super::Double;

macro_rules! impl_double {
  ($double:ty, $single:ty) => {
    impl Double for $double {
      type Single = $single;

      const ZERO: Self = 0;
      const BITS: u32 = <$double>::BITS;

      #[inline]
      fn components_hi_lo(self) -> ($single, $single) {
        let hi = (self >> <$single>::BITS) as $single;
        let lo = self as $single;
        (hi, lo)
      }

      #[inline]
      fn leading_zeros(self) -> u32 {
        <$double>::leading_zeros(self)
      }

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        let mask = (1 as $double << n).wrapping_sub(1);
        self & mask
      }

      #[inline]
      fn sqrt_rem(self) -> (Self, bool) {
        debug_assert!(self >= 0);
        let root = self.isqrt();
        (root, root * root != self)
      }
    }
  };
}

impl_double!{i16, i8}
impl_double!{i32, i16}
impl_double!{i64, i32}
impl_double!{i128, i64}
