// crates/shared-kernel/src/value_objects/way_count.rs
use std::{fmt, str::FromStr};

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Number of distinct move sequences reaching the top of a staircase.
///
/// Backed by an arbitrary-precision integer: counts grow exponentially with
/// the stair count and must never wrap. Serialized as a decimal string so
/// JSON consumers with 53-bit numbers do not lose precision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WayCount(BigUint);

impl WayCount {
    #[inline]
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    #[inline]
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    #[inline]
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Returns the value if it fits in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.0).ok()
    }
}

impl From<BigUint> for WayCount {
    fn from(value: BigUint) -> Self {
        Self::new(value)
    }
}

impl From<WayCount> for BigUint {
    fn from(value: WayCount) -> Self {
        value.0
    }
}

impl From<u64> for WayCount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl PartialEq<u64> for WayCount {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl fmt::Display for WayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for WayCount {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<BigUint>().map(Self)
    }
}

impl Serialize for WayCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WayCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WayCountVisitor;

        impl de::Visitor<'_> for WayCountVisitor {
            type Value = WayCount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or its decimal string form")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<WayCount, E> {
                Ok(WayCount::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<WayCount, E> {
                u64::try_from(v)
                    .map(WayCount::from)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<WayCount, E> {
                v.parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(WayCountVisitor)
    }
}
