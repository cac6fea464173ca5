//! Typed scalar values used as histogram bounds.
//!
//! Bounds are heterogeneous: one histogram may mix numbers, strings, dates and
//! the other kinds the storage format supports. Each value carries its kind
//! explicitly, and [`TypedValue::to_value`] maps every kind onto its document
//! representation. Kinds that plain JSON cannot carry use the relaxed extended
//! JSON wrappers (`$date`, `$oid`, `$timestamp`, `$minKey`, `$maxKey`,
//! `$numberDouble`).

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{document::double_value, error::Error};

/// 12-byte object identifier, rendered as 24 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 24 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::ObjectIdInvalid(s.to_owned()));
        }
        let mut bytes = [0u8; 12];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16)
                .map_err(|_| Error::ObjectIdInvalid(s.to_owned()))?;
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for ObjectId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ObjectId> for String {
    fn from(oid: ObjectId) -> Self {
        oid.to_string()
    }
}

/// A scalar paired with its type discriminator.
///
/// The set of kinds is closed, so converting a bound never fails.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    /// UTC instant with millisecond precision.
    Date(DateTime<Utc>),
    Timestamp {
        t: u32,
        i: u32,
    },
    ObjectId(ObjectId),
    MinKey,
    MaxKey,
}

impl TypedValue {
    /// Date bound from milliseconds since the Unix epoch; `None` when out of range.
    pub fn date_from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self::Date)
    }

    /// Kind name, matching the `type` tag used by the serialized form.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Timestamp { .. } => "timestamp",
            Self::ObjectId(_) => "object_id",
            Self::MinKey => "min_key",
            Self::MaxKey => "max_key",
        }
    }

    /// Converts the value into its document element representation.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Boolean(b) => Value::Bool(*b),
            Self::Int32(v) => json!(v),
            Self::Int64(v) => json!(v),
            Self::Double(v) => double_value(*v),
            Self::String(s) => Value::String(s.clone()),
            Self::Date(date) => date_value(date),
            Self::Timestamp { t, i } => json!({ "$timestamp": { "t": t, "i": i } }),
            Self::ObjectId(oid) => json!({ "$oid": oid.to_string() }),
            Self::MinKey => json!({ "$minKey": 1 }),
            Self::MaxKey => json!({ "$maxKey": 1 }),
        }
    }
}

// relaxed form only covers years 1970 through 9999
fn date_value(date: &DateTime<Utc>) -> Value {
    if (1970..=9999).contains(&date.year()) {
        json!({ "$date": date.to_rfc3339_opts(SecondsFormat::Millis, true) })
    } else {
        json!({ "$date": { "$numberLong": date.timestamp_millis().to_string() } })
    }
}

/// Converts a bounds sequence element-wise, preserving order.
pub fn convert_bounds(bounds: &[TypedValue]) -> Value {
    Value::Array(bounds.iter().map(TypedValue::to_value).collect())
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for TypedValue {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for TypedValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<ObjectId> for TypedValue {
    fn from(value: ObjectId) -> Self {
        Self::ObjectId(value)
    }
}
