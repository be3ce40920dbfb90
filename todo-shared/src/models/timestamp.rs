use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// Server-issued point in time.
///
/// The todo service may emit either RFC 3339 strings or naive ISO-8601
/// timestamps without an offset; naive values are read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl Timestamp {
    /// Parse a timestamp the way the todo service writes them.
    ///
    /// # Errors
    /// Returns the last parse error if no supported format matches.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(value) {
            Ok(parsed) => Ok(Self(parsed.with_timezone(&Utc))),
            Err(rfc_err) => NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|naive| Self(naive.and_utc()))
                .ok_or(rfc_err),
        }
    }

    /// Short calendar date used in the todo list, e.g. `3/8/2025`, in the
    /// viewer's local time zone.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date_label_in(&Local)
    }

    /// [`Self::date_label`] for an explicit time zone.
    #[must_use]
    pub fn date_label_in<Tz>(&self, zone: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.0.with_timezone(zone).format("%-m/%-d/%Y").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|err| de::Error::custom(format!("invalid timestamp {raw:?}: {err}")))
    }
}
