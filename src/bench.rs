//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::posit::{Posit, Decoded};
use crate::posit::quire::Quire;
use crate::{p8, p16, p32, p64, q8, q16, q32, q64};

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// # Safety
  ///
  /// `self` must not be 0 or NaR.
  pub unsafe fn bench_decode_regular(self) -> Decoded<N, ES, Int> {
    unsafe { self.decode_regular() }
  }

  /// # Safety
  ///
  /// `a` and `b` must be normalised.
  pub unsafe fn bench_add_kernel(a: Decoded<N, ES, Int>, b: Decoded<N, ES, Int>) -> (Decoded<N, ES, Int>, bool) {
    unsafe { Self::add_kernel(a, b) }
  }

  /// # Safety
  ///
  /// `a` and `b` must be normalised.
  pub unsafe fn bench_mul_kernel(a: Decoded<N, ES, Int>, b: Decoded<N, ES, Int>) -> (Decoded<N, ES, Int>, bool) {
    unsafe { Self::mul_kernel(a, b) }
  }

  /// # Safety
  ///
  /// `a` and `b` must be normalised.
  pub unsafe fn bench_div_kernel(a: Decoded<N, ES, Int>, b: Decoded<N, ES, Int>) -> (Decoded<N, ES, Int>, bool) {
    unsafe { Self::div_kernel(a, b) }
  }

  /// # Safety
  ///
  /// `a` must be normalised and positive.
  pub unsafe fn bench_sqrt_kernel(a: Decoded<N, ES, Int>) -> (Decoded<N, ES, Int>, bool) {
    unsafe { Self::sqrt_kernel(a) }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Decoded<N, ES, Int> {
  /// # Safety
  ///
  /// `self` must be normalised.
  pub unsafe fn bench_encode_regular_round(self, sticky: bool) -> Posit<N, ES, Int> {
    unsafe { self.encode_regular_round(sticky) }
  }
}

impl<
  const N: u32,
  const ES: u32,
  const SIZE: usize,
> Quire<N, ES, SIZE> {
  pub fn bench_accumulate(&mut self, negative: bool, mag: u128, shift: i64) {
    self.accumulate(negative, mag, shift)
  }
}

// Export these for inspection with `cargo asm`.

macro_rules! mk_exports {
  (
    $posit:ty, $quire:ty, $n:literal, $es:literal, $int:ty,
    $decode:ident, $encode:ident, $add_kernel:ident, $mul_kernel:ident,
    $add:ident, $mul:ident, $div:ident, $add_prod:ident, $to_posit:ident $(,)?
  ) => {
    #[unsafe(no_mangle)]
    pub fn $decode(arg: $posit) -> Decoded<$n, $es, $int> {
      unsafe { arg.decode_regular() }
    }

    #[unsafe(no_mangle)]
    pub fn $encode(arg: Decoded<$n, $es, $int>, sticky: bool) -> $posit {
      unsafe { arg.encode_regular_round(sticky) }
    }

    #[unsafe(no_mangle)]
    pub fn $add_kernel(
      x: Decoded<$n, $es, $int>,
      y: Decoded<$n, $es, $int>,
    ) -> (Decoded<$n, $es, $int>, bool) {
      unsafe { <$posit>::add_kernel(x, y) }
    }

    #[unsafe(no_mangle)]
    pub fn $mul_kernel(
      x: Decoded<$n, $es, $int>,
      y: Decoded<$n, $es, $int>,
    ) -> (Decoded<$n, $es, $int>, bool) {
      unsafe { <$posit>::mul_kernel(x, y) }
    }

    #[unsafe(no_mangle)]
    pub fn $add(x: $posit, y: $posit) -> $posit {
      x.add(y)
    }

    #[unsafe(no_mangle)]
    pub fn $mul(x: $posit, y: $posit) -> $posit {
      x.mul(y)
    }

    #[unsafe(no_mangle)]
    pub fn $div(x: $posit, y: $posit) -> $posit {
      x.div(y)
    }

    #[unsafe(no_mangle)]
    pub fn $add_prod(quire: &mut $quire, x: $posit, y: $posit) {
      quire.add_prod(x, y)
    }

    #[unsafe(no_mangle)]
    pub fn $to_posit(quire: &$quire) -> $posit {
      quire.to_posit()
    }
  };
}

mk_exports!{p8, q8, 8, 0, i8, decode_8, encode_8, add_kernel_8, mul_kernel_8, add_8, mul_8, div_8, quire_add_prod_8, quire_to_posit_8}
mk_exports!{p16, q16, 16, 1, i16, decode_16, encode_16, add_kernel_16, mul_kernel_16, add_16, mul_16, div_16, quire_add_prod_16, quire_to_posit_16}
mk_exports!{p32, q32, 32, 2, i32, decode_32, encode_32, add_kernel_32, mul_kernel_32, add_32, mul_32, div_32, quire_add_prod_32, quire_to_posit_32}
mk_exports!{p64, q64, 64, 3, i64, decode_64, encode_64, add_kernel_64, mul_kernel_64, add_64, mul_64, div_64, quire_add_prod_64, quire_to_posit_64}
