//! Unix epoch timestamps as the HelloSign API encodes them.
//!
//! Some endpoints send epoch seconds as a JSON number, others as a numeric
//! JSON string. [`UnixTimestamp`] accepts both and always writes a bare
//! integer back out. [`NullableTimestamp`] adds an explicit `null` state.

use chrono::{DateTime, Local, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Error returned when epoch seconds cannot be turned into a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// The input is not a base-10 signed 64-bit integer.
    #[error("invalid epoch seconds: {0}")]
    Parse(#[from] ParseIntError),

    /// The integer is outside the range chrono can represent.
    #[error("epoch seconds out of range: {0}")]
    OutOfRange(i64),
}

/// A point in time, encoded on the wire as whole seconds since the Unix epoch.
///
/// Sub-second precision is dropped on encode. Only seconds chrono can
/// represent (roughly ±262,000 years around 1970) round-trip; anything
/// further out fails to decode with [`TimestampError::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixTimestamp(pub DateTime<Utc>);

impl UnixTimestamp {
    /// Builds a timestamp from epoch seconds.
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(Self)
    }

    /// Parses epoch seconds, with or without one pair of surrounding quotes.
    ///
    /// ```
    /// use hellosign::UnixTimestamp;
    ///
    /// let bare = UnixTimestamp::parse("1730137243").unwrap();
    /// let quoted = UnixTimestamp::parse("\"1730137243\"").unwrap();
    /// assert_eq!(bare, quoted);
    /// ```
    pub fn parse(src: &str) -> Result<Self, TimestampError> {
        let digits = match src.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
            Some(inner) if !inner.is_empty() => inner,
            _ => src,
        };
        let secs: i64 = digits.parse()?;
        Self::from_unix(secs).ok_or(TimestampError::OutOfRange(secs))
    }

    /// Whole seconds since the Unix epoch.
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// The same instant in the local time zone.
    pub fn to_local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    /// The wrapped UTC time.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for UnixTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<UnixTimestamp> for DateTime<Utc> {
    fn from(value: UnixTimestamp) -> Self {
        value.0
    }
}

impl FromStr for UnixTimestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unix())
    }
}

impl Serialize for UnixTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.unix())
    }
}

impl<'de> Deserialize<'de> for UnixTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UnixTimestampVisitor)
    }
}

struct UnixTimestampVisitor;

impl<'de> Visitor<'de> for UnixTimestampVisitor {
    type Value = UnixTimestamp;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("epoch seconds as an integer or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        UnixTimestamp::from_unix(v).ok_or_else(|| E::custom(TimestampError::OutOfRange(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))?;
        self.visit_i64(secs)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        UnixTimestamp::parse(v).map_err(E::custom)
    }
}

/// A [`UnixTimestamp`] that may be explicitly `null` on the wire.
///
/// Missing fields deserialize to the invalid state when the field carries
/// `#[serde(default)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullableTimestamp(pub Option<UnixTimestamp>);

impl NullableTimestamp {
    /// The explicit-null value.
    pub const NULL: Self = Self(None);

    /// Returns true when a timestamp is present.
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The timestamp, if present.
    pub fn get(&self) -> Option<UnixTimestamp> {
        self.0
    }
}

impl From<UnixTimestamp> for NullableTimestamp {
    fn from(value: UnixTimestamp) -> Self {
        Self(Some(value))
    }
}

impl From<Option<UnixTimestamp>> for NullableTimestamp {
    fn from(value: Option<UnixTimestamp>) -> Self {
        Self(value)
    }
}

impl Serialize for NullableTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(ts) => ts.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullableTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<UnixTimestamp>::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_decode_number_and_string_agree() {
        for n in [0i64, 1, -1, 1_730_137_243, -86_400, 253_402_300_799] {
            let from_number: UnixTimestamp = serde_json::from_value(json!(n)).unwrap();
            let from_string: UnixTimestamp = serde_json::from_value(json!(n.to_string())).unwrap();
            assert_eq!(from_number, from_string);
            assert_eq!(from_number.unix(), n);
        }
    }

    #[test]
    fn test_encode_is_bare_integer() {
        let ts: UnixTimestamp = serde_json::from_str(r#""1730137243""#).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1730137243");

        let round_trip: UnixTimestamp =
            serde_json::from_str(&serde_json::to_string(&ts).unwrap()).unwrap();
        assert_eq!(round_trip, ts);
    }

    #[test]
    fn test_encode_drops_sub_seconds() {
        let precise = Utc.timestamp_opt(1_730_137_243, 999_000_000).unwrap();
        let ts = UnixTimestamp::from(precise);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1730137243");
    }

    #[test]
    fn test_parse_strips_one_quote_pair() {
        assert_eq!(UnixTimestamp::parse("42").unwrap().unix(), 42);
        assert_eq!(UnixTimestamp::parse("\"42\"").unwrap().unix(), 42);
        assert_eq!(UnixTimestamp::parse("\"-7\"").unwrap().unix(), -7);
        assert!(UnixTimestamp::parse("\"\"42\"\"").is_err());
        assert!(UnixTimestamp::parse("\"\"").is_err());
        assert!(UnixTimestamp::parse("").is_err());
    }

    #[test]
    fn test_rejects_non_integers() {
        assert!(UnixTimestamp::parse("12.5").is_err());
        assert!(UnixTimestamp::parse("soon").is_err());
        assert!(serde_json::from_str::<UnixTimestamp>("12.5").is_err());
        assert!(serde_json::from_str::<UnixTimestamp>("true").is_err());
        assert!(serde_json::from_str::<UnixTimestamp>(r#""12.5""#).is_err());
        assert!(serde_json::from_str::<UnixTimestamp>("null").is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            UnixTimestamp::parse(&i64::MAX.to_string()),
            Err(TimestampError::OutOfRange(i64::MAX))
        );
        assert!(serde_json::from_str::<UnixTimestamp>(&u64::MAX.to_string()).is_err());
    }

    #[test]
    fn test_nullable_null() {
        let ts: NullableTimestamp = serde_json::from_str("null").unwrap();
        assert!(!ts.is_valid());
        assert_eq!(serde_json::to_string(&NullableTimestamp::NULL).unwrap(), "null");
    }

    #[test]
    fn test_nullable_value_round_trip() {
        let ts: NullableTimestamp = serde_json::from_str(r#""1730137243""#).unwrap();
        assert!(ts.is_valid());

        let encoded = serde_json::to_string(&ts).unwrap();
        assert_eq!(encoded, "1730137243");
        let decoded: NullableTimestamp = serde_json::from_str(&encoded).unwrap();
        assert!(decoded.is_valid());
        assert_eq!(decoded, ts);
    }

    #[test]
    fn test_nullable_rejects_garbage() {
        assert!(serde_json::from_str::<NullableTimestamp>(r#""never""#).is_err());
    }

    #[test]
    fn test_local_view_is_same_instant() {
        let ts = UnixTimestamp::parse("1730137243").unwrap();
        assert_eq!(ts.to_local().with_timezone(&Utc), ts.0);
        assert_eq!(ts.to_string(), "1730137243");
    }
}
