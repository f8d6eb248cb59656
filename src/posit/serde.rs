use super::*;
use crate::underlying::const_as;

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `serde_support` impl
impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Serialize for Posit<N, ES, Int> {
  /// Serializes `self` as its raw bits, that is: as the signed integer [`Posit::to_bits`] of the
  /// same width. This is lossless, and NaR is just another bit pattern.
  ///
  /// ```
  /// // Example using the `ron` crate
  /// use posit_codec::{p8, p32, RoundFrom};
  /// use ron::to_string;
  ///
  /// assert_eq!(to_string(&p8::ONE).unwrap(), "64");
  /// assert_eq!(to_string(&p32::round_from(-1.0)).unwrap(), "-1073741824");
  /// assert_eq!(to_string(&p8::NAR).unwrap(), "-128");
  /// ```
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let bits: i64 = self.to_bits().into();
    match Self::BITS {
      8 => serializer.serialize_i8(bits as i8),
      16 => serializer.serialize_i16(bits as i16),
      32 => serializer.serialize_i32(bits as i32),
      _ => serializer.serialize_i64(bits),
    }
  }
}

/// A `serde_support` impl
impl<
  'de,
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Deserialize<'de> for Posit<N, ES, Int> {
  /// Deserializes a posit from its raw bits, as serialized by [`Serialize`]. Every bit pattern is
  /// a valid posit, so this only fails if the integer does not fit in `N` bits.
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let bits = match Self::BITS {
      8 => i64::from(i8::deserialize(deserializer)?),
      16 => i64::from(i16::deserialize(deserializer)?),
      32 => i64::from(i32::deserialize(deserializer)?),
      _ => i64::deserialize(deserializer)?,
    };
    Ok(Self::from_bits(const_as::<i64, Int>(bits)))
  }
}
