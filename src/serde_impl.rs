//! Serde integration.
//!
//! Human-readable formats carry the value as a bare number when it fits in
//! 64 bits and as a decimal string otherwise, so JSON consumers limited to
//! 64-bit integers never see a number they cannot represent. Binary formats
//! carry the fixed 16-byte little-endian layout.

use core::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::UInt128;

impl Serialize for UInt128 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            if self.hi() == 0 {
                serializer.serialize_u64(self.lo())
            } else {
                serializer.collect_str(self)
            }
        } else {
            self.to_le_bytes().serialize(serializer)
        }
    }
}

/// Human-readable input may be a bare number or a decimal string. Bare
/// numbers are limited to the 64-bit range: formats such as JSON hand wider
/// literals over as `f64`, which is rejected rather than rounded, so values
/// of 2^64 and above must be quoted.
impl<'de> Deserialize<'de> for UInt128 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(UInt128Visitor)
        } else {
            let bytes = <[u8; UInt128::BYTES]>::deserialize(deserializer)?;
            Ok(Self::from_le_bytes(bytes))
        }
    }
}

struct UInt128Visitor;

impl<'de> Visitor<'de> for UInt128Visitor {
    type Value = UInt128;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an unsigned 128-bit integer or its decimal string")
    }

    fn visit_u64<E>(self, v: u64) -> core::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(UInt128::from_u64(v))
    }

    fn visit_u128<E>(self, v: u128) -> core::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(UInt128::from_u128(v))
    }

    fn visit_i64<E>(self, v: i64) -> core::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v)
            .map(UInt128::from_u64)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> core::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        UInt128::from_quoted_str(v).map_err(E::custom)
    }
}
