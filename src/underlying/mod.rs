//! The machine-integer operations that the posit codec is written against. These are hidden from
//! the end-user, which only sees the sealed [`Int`] trait, implemented for `i8`, `i16`, `i32` and
//! `i64` (the backing types of the four standard posit widths).

/// The trait for the underlying machine integer types that can back a posit (only satisfied by
/// `i8`, `i16`, `i32`, and `i64`).
///
/// This is a *sealed* type.
pub trait Int: Sealed {}

/// Signed primitives that [`const_as`] can cast between. This is wider than [`Int`]: `i128` is
/// also included, as the common intermediate for constants.
pub trait Prim: Copy {
  const BITS: u32;
}

/// Actual operations implemented here.
pub trait Sealed:
  Prim +
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  core::ops::Add<Self, Output=Self> + core::ops::AddAssign<Self> +
  core::ops::Sub<Self, Output=Self> + core::ops::SubAssign<Self> +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> + core::ops::BitOrAssign +
  core::ops::BitXor<Output=Self> +
  core::ops::Not<Output=Self> +
  core::ops::Neg<Output=Self> +
  From<bool> + Into<i128> + Into<i64>
{
  type Unsigned: Unsigned;
  type Double: Double<Single = Self>;

  /// The native byte array, `[u8; BITS / 8]`.
  type Bytes: Copy + core::fmt::Debug + AsRef<[u8]> + AsMut<[u8]> + Default
    + for<'a> TryFrom<&'a [u8], Error = core::array::TryFromSliceError>;

  const ZERO: Self;
  const ONE: Self;

  fn as_unsigned(self) -> Self::Unsigned;
  fn of_unsigned(x: Self::Unsigned) -> Self;

  fn as_u32(self) -> u32;
  fn of_u32(x: u32) -> Self;

  /// Truncating cast from a `u128` (i.e. `x as iX`).
  fn of_u128(x: u128) -> Self;

  fn to_le_bytes(self) -> Self::Bytes;
  fn from_le_bytes(bytes: Self::Bytes) -> Self;
  fn to_be_bytes(self) -> Self::Bytes;
  fn from_be_bytes(bytes: Self::Bytes) -> Self;

  fn is_positive(self) -> bool;

  /// Logical shift right (rather than arithmetic shift). Short for `(self as uX >> n) as iX`.
  fn lshr(self, n: u32) -> Self;

  /// Set all bits more significant than `n` to 0. `n` must be `< BITS`.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_i16.mask_lsb(4), 0x000d_i16)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  /// Get the lsb of `self` as a bool
  fn get_lsb(self) -> bool;

  /// Number of leading (most significant) 0 bits until the first 1.
  fn leading_zeros(self) -> u32;

  /// As [Sealed::leading_zeros], but is undefined if `self` is zero.
  unsafe fn leading_zeros_nonzero(self) -> u32;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;
  fn wrapping_abs(self) -> Self;

  /// Sign-extending widening cast into [`Self::Double`].
  fn widen(self) -> Self::Double;

  /// Multiply without overflow or loss of precision, by returning a type that's twice as wide as
  /// `Self`.
  fn doubling_mul(self, other: Self) -> Self::Double;
}

/// This trait models the unsigned counterpart to an [`Int`].
pub trait Unsigned:
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary +
  Copy + Clone +
  Eq + Ord +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  Into<u128>
{
}

/// This trait models the type that is an `Int` with twice the precision (e.g. `i32::Double` =
/// `i64`). The two ways to convert between the two are by:
///
///   - Multiplying two `Int`s with no loss of precision, fitting into a `Double`
///     ([`Sealed::doubling_mul`]), or widening one ([`Sealed::widen`]).
///   - Breaking a `Double` into its hi and lo `Int`s ([`Double::components_hi_lo`]).
///
/// All the values the kernels keep in a `Double` are non-negative.
pub trait Double:
  core::fmt::Debug +
  Copy + Clone +
  Eq + Ord +
  core::ops::Add<Self, Output=Self> +
  core::ops::Sub<Self, Output=Self> +
  core::ops::Div<Self, Output=Self> +
  core::ops::Rem<Self, Output=Self> +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> +
  From<bool> + Into<i128>
{
  type Single: Int;

  const ZERO: Self;
  const BITS: u32;

  /// Break a `Double` down into its high and low `Int`s, respectively.
  fn components_hi_lo(self) -> (Self::Single, Self::Single);

  /// Number of leading (most significant) 0 bits until the first 1.
  fn leading_zeros(self) -> u32;

  /// Set all bits more significant than `n` to 0. `n` must be `< BITS`.
  fn mask_lsb(self, n: u32) -> Self;

  /// Floor of the square root, and whether it was inexact. `self` must be non-negative.
  fn sqrt_rem(self) -> (Self, bool);
}

mod int;
mod unsigned;
mod double;
mod const_as;
pub use const_as::const_as;
