//! Rounding helpers for display and serialization.
//!
//! Statistics are held unrounded in memory; rounding happens only when a
//! number leaves the program, so comparisons never depend on display
//! precision.

use serde::ser::SerializeMap;
use serde::Serializer;
use std::collections::BTreeMap;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub fn serialize_round2<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round2(*value))
}

pub fn serialize_round2_map<K, S>(
    map: &BTreeMap<K, f64>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    K: serde::Serialize + Ord,
    S: Serializer,
{
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map {
        out.serialize_entry(key, &round2(*value))?;
    }
    out.end()
}
