//! Serde helper for chrono durations.
//!
//! Serializes a `TimeDelta` as whole seconds (`i64`). Use with
//! `#[serde(with = "duration_serde::seconds")]` and
//! `#[schemars(with = "i64")]` on struct fields.

/// `TimeDelta` as signed whole seconds. Sub-second precision is dropped.
pub mod seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(delta: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
        delta.num_seconds().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<TimeDelta, D::Error> {
        let secs = i64::deserialize(d)?;
        TimeDelta::try_seconds(secs)
            .ok_or_else(|| serde::de::Error::custom(format!("duration out of range: {secs}s")))
    }
}
