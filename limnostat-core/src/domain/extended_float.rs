//! Serde helpers for `f64` fields that may legitimately be infinite.
//!
//! JSON has no encoding for infinities and serde_json writes them as `null`,
//! losing the sign. Fields tagged `#[serde(with = "extended_float")]` write
//! finite values as numbers and non-finite ones as `"inf"`, `"-inf"` or `"nan"`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

const POSITIVE_INFINITY: &str = "inf";
const NEGATIVE_INFINITY: &str = "-inf";
const NOT_A_NUMBER: &str = "nan";

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        serializer.serialize_str(NOT_A_NUMBER)
    } else if *value == f64::INFINITY {
        serializer.serialize_str(POSITIVE_INFINITY)
    } else if *value == f64::NEG_INFINITY {
        serializer.serialize_str(NEGATIVE_INFINITY)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ExtendedFloatVisitor)
}

struct ExtendedFloatVisitor;

impl<'de> Visitor<'de> for ExtendedFloatVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or one of \"inf\", \"-inf\", \"nan\"")
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match v {
            POSITIVE_INFINITY => Ok(f64::INFINITY),
            NEGATIVE_INFINITY => Ok(f64::NEG_INFINITY),
            NOT_A_NUMBER => Ok(f64::NAN),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}
