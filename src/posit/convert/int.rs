use super::*;

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Posit<N, ES, Int> {
  /// The kernel for converting a posit to an int: the magnitude of `self` rounded to the nearest
  /// integer (ties to even), and its sign. Magnitudes of 2^128 or more saturate to `u128::MAX`.
  ///
  /// `self` must not be NaR.
  fn to_int_kernel(self) -> (bool, u128) {
    debug_assert!(!self.is_nar());
    let rounded = self.nearest_int();
    if rounded.is_zero() {
      return (false, 0)
    }
    // SAFETY: `rounded` is not 0 or NaR
    let Decoded { sign, exp, frac } = unsafe { rounded.decode_regular() };

    // `rounded` is an integer ≥ 1, so `exp` ≥ 0, and `frac × 2^(exp - FRAC_WIDTH)` is exact.
    let exp = exp.as_u32();
    let width = Decoded::<N, ES, Int>::FRAC_WIDTH;
    let frac = Into::<i128>::into(frac) as u128;
    let mag = if exp >= 128 {
      u128::MAX
    } else if exp >= width {
      frac << (exp - width)
    } else {
      frac >> (width - exp)
    };
    (sign, mag)
  }

  /// The kernel for converting an int to a posit, given its sign and magnitude. Magnitudes of
  /// 2^MAX_EXP or more saturate to [`Self::MAX`] or [`Self::MIN`].
  fn from_int_kernel(negative: bool, mag: u128) -> Self {
    match mag {
      0 => Self::ZERO,
      1 => if negative { Self::MINUS_ONE } else { Self::ONE },
      _ if i128::from(mag.ilog2()) >= Self::MAX_EXP_I128 => {
        trace!("conversion of {mag} saturated to MAX");
        if negative { Self::MIN } else { Self::MAX }
      },
      _ => Self::round_from_magnitude(negative, mag, 0, false),
    }
  }
}

macro_rules! make_impl {
  ($signed:ty, $unsigned:ty) => {
    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<$signed> for Posit<N, ES, Int> {
      #[doc = concat!("Convert an `", stringify!($signed), "` into a `Posit`, rounding if necessary.")]
      ///
      #[doc = concat!("Every value converts numerically, [`", stringify!($signed), "::MIN`] included.")]
      fn round_from(value: $signed) -> Self {
        Self::from_int_kernel(value < 0, value.unsigned_abs().into())
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<$unsigned> for Posit<N, ES, Int> {
      #[doc = concat!("Convert a `", stringify!($unsigned), "` into a `Posit`, rounding if necessary.")]
      fn round_from(value: $unsigned) -> Self {
        Self::from_int_kernel(false, value.into())
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<Posit<N, ES, Int>> for $signed {
      #[doc = concat!("Convert a `Posit` into an `", stringify!($signed), "`, rounding to the nearest integer (ties to even):")]
      ///
      #[doc = concat!("  - Values beyond the range of `", stringify!($signed), "` saturate to [`", stringify!($signed), "::MIN`] or [`", stringify!($signed), "::MAX`].")]
      #[doc = concat!("  - [NaR](Posit::NAR) converts to [`", stringify!($signed), "::MIN`].")]
      fn round_from(value: Posit<N, ES, Int>) -> Self {
        if value.is_nar() {
          return <$signed>::MIN
        }
        let (sign, mag) = value.to_int_kernel();
        if sign {
          if mag > <$signed>::MIN.unsigned_abs() as u128 {
            trace!("conversion of {value:?} saturated to {}", <$signed>::MIN);
            <$signed>::MIN
          } else {
            (mag as $signed).wrapping_neg()
          }
        } else if mag > <$signed>::MAX as u128 {
          trace!("conversion of {value:?} saturated to {}", <$signed>::MAX);
          <$signed>::MAX
        } else {
          mag as $signed
        }
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Int: crate::Int,
    > RoundFrom<Posit<N, ES, Int>> for $unsigned {
      #[doc = concat!("Convert a `Posit` into a `", stringify!($unsigned), "`, rounding to the nearest integer (ties to even):")]
      ///
      #[doc = concat!("  - Values beyond [`", stringify!($unsigned), "::MAX`] saturate to it, and negative values to 0.")]
      ///   - [NaR](Posit::NAR) converts to 0.
      fn round_from(value: Posit<N, ES, Int>) -> Self {
        if value.is_nar() {
          return 0
        }
        let (sign, mag) = value.to_int_kernel();
        if sign {
          trace!("conversion of {value:?} saturated to 0");
          0
        } else if mag > <$unsigned>::MAX as u128 {
          trace!("conversion of {value:?} saturated to {}", <$unsigned>::MAX);
          <$unsigned>::MAX
        } else {
          mag as $unsigned
        }
      }
    }
  }
}

make_impl!{i8, u8}
make_impl!{i16, u16}
make_impl!{i32, u32}
make_impl!{i64, u64}
make_impl!{i128, u128}
