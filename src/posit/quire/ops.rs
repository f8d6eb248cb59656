use super::*;
use core::ops::{AddAssign, SubAssign};

macro_rules! mk_ops {
  ($trait:ident, $fn:ident, $negative:literal) => {
    impl<
      const N: u32,
      const ES: u32,
      const SIZE: usize,
      Int: crate::Int,
    > $trait<Posit<N, ES, Int>> for Quire<N, ES, SIZE> {
      /// Standard: "[**qAddP**](https://posithub.org/docs/posit_standard-2.pdf)" and
      /// "**qSubP**", exact.
      #[inline]
      fn $fn(&mut self, rhs: Posit<N, ES, Int>) {
        self.accumulate_prod($negative, rhs, Posit::ONE)
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      const SIZE: usize,
      Int: crate::Int,
    > $trait<&Posit<N, ES, Int>> for Quire<N, ES, SIZE> {
      #[inline]
      fn $fn(&mut self, rhs: &Posit<N, ES, Int>) {
        self.accumulate_prod($negative, *rhs, Posit::ONE)
      }
    }
  };
}

mk_ops!{AddAssign, add_assign, false}
mk_ops!{SubAssign, sub_assign, true}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> AddAssign<&Quire<N, ES, SIZE>> for Quire<N, ES, SIZE> {
  /// Standard: "[**qAddQ**](https://posithub.org/docs/posit_standard-2.pdf)", exact.
  #[inline]
  fn add_assign(&mut self, rhs: &Quire<N, ES, SIZE>) {
    self.add_quire(rhs)
  }
}
