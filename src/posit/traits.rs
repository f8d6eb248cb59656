use super::*;

use core::cmp::Ordering;

// The `Int` trait has bounds indirectly, via `Sealed`, so the derive macro would add a redundant
// `Int: Clone` (etc.) bound to each impl. Implement them by hand instead.
//
// Note also what is *missing*: since NaR is unequal to itself, a posit is neither `Eq`, `Ord` nor
// `Hash`. Code that needs those can key on `to_bits()`, or sort with `total_cmp`.

impl<const N: u32, const ES: u32, Int: crate::Int>
Clone for Posit<N, ES, Int> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
Copy for Posit<N, ES, Int> {}

impl<const N: u32, const ES: u32, Int: crate::Int>
PartialEq for Posit<N, ES, Int> {
  /// Numeric equality: posits have a unique representation for each value, so this is bitwise
  /// equality, except that NaR is not equal to anything.
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0 && !self.is_nar()
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
PartialOrd for Posit<N, ES, Int> {
  /// Numeric order, which is the order of the bit patterns as signed integers. If either side is
  /// NaR, the posits are unordered.
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    if self.is_nar() || other.is_nar() {
      None
    } else {
      Some(self.0.cmp(&other.0))
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// A total order on all posits: the order of the bit patterns as signed integers. It agrees
  /// with [`PartialOrd`] everywhere it's defined, and places NaR below every other posit.
  ///
  /// ```
  /// # use posit_codec::*;
  /// # use core::cmp::Ordering;
  /// assert_eq!(p32::NAR.total_cmp(&p32::MIN), Ordering::Less);
  /// assert_eq!(p32::NAR.total_cmp(&p32::NAR), Ordering::Equal);
  /// ```
  #[inline]
  pub fn total_cmp(&self, other: &Self) -> Ordering {
    self.0.cmp(&other.0)
  }
}

impl<const N: u32, const ES: u32, Int: crate::Int>
Default for Posit<N, ES, Int> {
  /// [`Posit::ZERO`].
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}
