use super::*;

/// Addition and subtraction (both use the same addition algorithm, and `a - b` is simply
/// `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Remainder of truncating division.
mod rem;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const N: u32, const ES: u32, Int: crate::Int>
    $trait<Posit<N, ES, Int>> for Posit<N, ES, Int> {
      type Output = Posit<N, ES, Int>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $trait<&Posit<N, ES, Int>> for Posit<N, ES, Int> {
      type Output = Posit<N, ES, Int>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $trait<Posit<N, ES, Int>> for &Posit<N, ES, Int> {
      type Output = Posit<N, ES, Int>;

      #[inline]
      fn $name(self, rhs: Posit<N, ES, Int>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $trait<&Posit<N, ES, Int>> for &Posit<N, ES, Int> {
      type Output = Posit<N, ES, Int>;

      #[inline]
      fn $name(self, rhs: &Posit<N, ES, Int>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $trait_assign<Posit<N, ES, Int>> for Posit<N, ES, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: Posit<N, ES, Int>) { *self = self.$name(rhs) }
    }

    impl<const N: u32, const ES: u32, Int: crate::Int>
    $trait_assign<&Posit<N, ES, Int>> for Posit<N, ES, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Posit<N, ES, Int>) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator of posits. `$exact` computes
/// the exact result of the operation on two rationals, or `None` if it should be NaR.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $exact:expr) => {
    use crate::Posit;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::p32::ONE;
      let mut b = crate::p32::MINUS_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is rounded correctly.
    fn is_correct_rounded<const N: u32, const ES: u32, Int: crate::Int>(
      a: Posit<N, ES, Int>,
      b: Posit<N, ES, Int>,
    ) -> bool
    where
      Rational: TryFrom<Posit<N, ES, Int>, Error = super::rational::IsNaR>,
    {
      let exact: fn(Rational, Rational) -> Option<Rational> = $exact;
      let posit = a $op b;
      match (Rational::try_from(a), Rational::try_from(b)) {
        (Ok(a), Ok(b)) => match exact(a, b) {
          Some(exact) => super::rational::is_correct_rounded(exact, posit),
          None => posit.is_nar(),
        },
        _ => posit.is_nar(),
      }
    }

    macro_rules! test_exhaustive {
      ($name:ident, $posit:ty) => {
        #[test]
        fn $name() {
          for a in <$posit>::cases_exhaustive_all() {
            for b in <$posit>::cases_exhaustive_all() {
              assert!(is_correct_rounded(a, b), "{:?} ⋅ {:?}", a, b)
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $posit:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$posit>::cases_proptest_all(),
            b in <$posit>::cases_proptest_all(),
          ) {
            assert!(is_correct_rounded(a, b), "{:?} ⋅ {:?}", a, b)
          }
        }
      };
    }

    // All pairs of p8 is 2^16 operations; beyond that, sample.
    test_exhaustive!{p8_exhaustive, crate::p8}
    test_proptest!{p16_proptest, crate::p16}
    test_proptest!{p32_proptest, crate::p32}
    test_proptest!{p64_proptest, crate::p64}

    #[test]
    fn nar_absorbs() {
      for p in crate::p16::cases_exhaustive_all() {
        assert!((p $op crate::p16::NAR).is_nar(), "{p:?}");
        assert!((crate::p16::NAR $op p).is_nar(), "{p:?}");
      }
    }
  }
}

pub(crate) use mk_tests;
