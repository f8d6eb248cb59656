use super::*;

use core::fmt::{Debug, Display};
use crate::RoundFrom;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Debug for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    f.debug_tuple("Posit")
      .field(&format_args!("0b{bits:0w$b}", w=Int::BITS as usize))
      .finish()
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Display for Posit<N, ES, Int> {
  /// The value of `self` as an [`f64`] (rounded, for `p64`), or `NaR`.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if self.is_nar() {
      f.write_str("NaR")
    } else {
      Display::fmt(&f64::round_from(*self), f)
    }
  }
}
