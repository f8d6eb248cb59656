use super::*;

/// One line of the [`const_as`] function.
macro_rules! const_as_line {
  ($x:ident, $t:ty, $u:ty) => {
    if const { T::BITS == <$t>::BITS && U::BITS == <$u>::BITS } {
      // SAFETY: `Prim` is only implemented for the signed primitives, one per width, so matching
      // widths means `$t` is `T` and `$u` is `U`; both transmute_copy are identities.
      let t = unsafe { ::core::mem::transmute_copy::<T, $t>(&$x) };
      let u = t as $u;
      return unsafe { ::core::mem::transmute_copy::<$u, U>(&u) }
    }
  }
}

/// A type-generic and `const` version of the keyword `as`, for casting between signed primitives
/// in `const` contexts (where the [`Int`] trait methods are not callable).
///
/// ```ignore
/// assert_eq!(const_as::<i16, i32>(1234i16), 1234i16 as i32);
/// assert_eq!(const_as::<i128, i64>(-16i128), -16i128 as i64);
/// ```
pub const fn const_as<T: Prim, U: Prim>(x: T) -> U {
  const_as_line!(x, i8, i8);
  const_as_line!(x, i8, i16);
  const_as_line!(x, i8, i32);
  const_as_line!(x, i8, i64);
  const_as_line!(x, i8, i128);
  const_as_line!(x, i16, i8);
  const_as_line!(x, i16, i16);
  const_as_line!(x, i16, i32);
  const_as_line!(x, i16, i64);
  const_as_line!(x, i16, i128);
  const_as_line!(x, i32, i8);
  const_as_line!(x, i32, i16);
  const_as_line!(x, i32, i32);
  const_as_line!(x, i32, i64);
  const_as_line!(x, i32, i128);
  const_as_line!(x, i64, i8);
  const_as_line!(x, i64, i16);
  const_as_line!(x, i64, i32);
  const_as_line!(x, i64, i64);
  const_as_line!(x, i64, i128);
  const_as_line!(x, i128, i8);
  const_as_line!(x, i128, i16);
  const_as_line!(x, i128, i32);
  const_as_line!(x, i128, i64);
  const_as_line!(x, i128, i128);
  unreachable!() // cannot be const { unreachable!() }
}
