//! Multi-format date decoding for backend payloads
//!
//! The backend emits dates in several shapes depending on the field and the
//! org configuration. `DateCodec` tries a fixed, ordered list of formats and
//! the first one that parses wins. The order never changes at runtime, so the
//! same input always resolves through the same format.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// A single date shape the codec knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `2024-01-08T10:15:30.000+0000`
    IsoMillis,
    /// `2024-01-08T10:15:30+0000`
    IsoSeconds,
    /// `2024-01-08T10:15:30.123456Z`, `2024-01-08T10:15:30+02:00`
    Rfc3339,
    /// `2024-01-08T10:15:30`, read as UTC
    IsoNaive,
    /// `2024-01-08 10:15:30`, read as UTC
    SpaceSeparated,
    /// `2024-01-08`, midnight UTC
    DateOnly,
}

/// Resolution order. First match wins.
const STANDARD_FORMATS: [DateFormat; 6] = [
    DateFormat::IsoMillis,
    DateFormat::IsoSeconds,
    DateFormat::Rfc3339,
    DateFormat::IsoNaive,
    DateFormat::SpaceSeparated,
    DateFormat::DateOnly,
];

impl DateFormat {
    /// Try to read `raw` in this format
    pub fn parse(self, raw: &str) -> Option<DateTime<Utc>> {
        match self {
            DateFormat::IsoMillis => parse_with_offset(raw, "%Y-%m-%dT%H:%M:%S%.3f%z"),
            DateFormat::IsoSeconds => parse_with_offset(raw, "%Y-%m-%dT%H:%M:%S%z"),
            DateFormat::Rfc3339 => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|date| date.with_timezone(&Utc)),
            DateFormat::IsoNaive => parse_naive(raw, "%Y-%m-%dT%H:%M:%S"),
            DateFormat::SpaceSeparated => parse_naive(raw, "%Y-%m-%d %H:%M:%S"),
            DateFormat::DateOnly => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| Utc.from_utc_datetime(&naive)),
        }
    }
}

fn parse_with_offset(raw: &str, pattern: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, pattern)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

fn parse_naive(raw: &str, pattern: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, pattern)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Ordered list of date formats with first-match-wins resolution
#[derive(Debug, Clone, Copy)]
pub struct DateCodec {
    formats: &'static [DateFormat],
}

impl Default for DateCodec {
    fn default() -> Self {
        Self::standard()
    }
}

impl DateCodec {
    /// The codec used for every backend payload
    pub const fn standard() -> Self {
        Self {
            formats: &STANDARD_FORMATS,
        }
    }

    /// Formats in resolution order
    pub fn formats(&self) -> &[DateFormat] {
        self.formats
    }

    /// Parse `raw`, failing with `UnparsableDate` when no format matches
    pub fn parse(&self, raw: &str) -> Result<DateTime<Utc>> {
        self.resolve(raw).map(|(_, date)| date)
    }

    /// Parse `raw` and report which format matched
    pub fn resolve(&self, raw: &str) -> Result<(DateFormat, DateTime<Utc>)> {
        self.formats
            .iter()
            .find_map(|format| format.parse(raw).map(|date| (*format, date)))
            .ok_or_else(|| Error::UnparsableDate(raw.to_string()))
    }

    /// Canonical wire form. Always readable by `parse` with no precision loss.
    pub fn encode(&self, date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

/// Serde adapter for required date fields: `#[serde(with = "dates::wire")]`
pub mod wire {
    use super::DateCodec;
    use chrono::{DateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&DateCodec::standard().encode(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateCodec::standard().parse(&raw).map_err(D::Error::custom)
    }

    /// Optional date fields. Pair with `#[serde(default)]` so a missing key
    /// decodes the same as an explicit `null`.
    pub mod option {
        use super::DateCodec;
        use chrono::{DateTime, Utc};
        use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(date) => serializer.serialize_some(&DateCodec::standard().encode(date)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => DateCodec::standard()
                    .parse(&raw)
                    .map(Some)
                    .map_err(D::Error::custom),
                None => Ok(None),
            }
        }
    }
}
