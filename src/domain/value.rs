use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// OAuth bearer token used to authenticate against SMSAPI.
///
/// Invariant: non-empty after trimming and made of visible ASCII characters only, so it
/// can always be carried in an `Authorization` header.
pub struct AccessToken(String);

impl AccessToken {
    /// Name used when reporting validation errors.
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(ValidationError::InvalidCharacters { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// A wire value that matched none of the accepted representations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} representation: {input:?}")]
pub struct ParseValueError {
    kind: &'static str,
    input: String,
}

impl ParseValueError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }
}

const DATE_LAYOUT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Point in time exchanged with SMSAPI (`date`, `date_sent`, `created_at`, ...).
///
/// Always serialized as an RFC3339 string in UTC. Deserialization accepts a UNIX epoch
/// (JSON number or digit string), an RFC3339 string, or a plain `YYYY-MM-DD` date which
/// is taken as midnight UTC. Equality compares instants, so an input carrying a non-UTC
/// offset equals its UTC counterpart.
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap an instant.
    pub fn new<Tz: TimeZone>(value: DateTime<Tz>) -> Self {
        Self(value.with_timezone(&Utc))
    }

    /// Build from seconds since the UNIX epoch; `None` when out of range.
    pub fn from_unix(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    /// Seconds since the UNIX epoch.
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    fn from_epoch(seconds: i64, input: &str) -> Result<Self, ParseValueError> {
        Self::from_unix(seconds).ok_or_else(|| ParseValueError::new("timestamp", input))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl FromStr for Timestamp {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(seconds) = s.parse::<i64>() {
            return Self::from_epoch(seconds, s);
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::new(parsed));
        }
        if let Ok(date) = Date::from_str(s) {
            return Ok(Self(date.midnight_utc()));
        }
        Err(ParseValueError::new("timestamp", s))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a UNIX epoch, an RFC3339 string or a YYYY-MM-DD date")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
                Timestamp::from_epoch(v, &v.to_string()).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
                let seconds = i64::try_from(v).map_err(|_| E::custom("epoch out of range"))?;
                self.visit_i64(seconds)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(TimestampVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Calendar date without time of day (`expire_at`, `birthday_date`).
///
/// Wire format is strictly `YYYY-MM-DD`; epochs and timestamps are rejected.
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Create a date, rejecting combinations that do not exist in the calendar.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or(ValidationError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    fn midnight_utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(self.year, self.month, self.day, 0, 0, 0)
            .single()
            .unwrap_or_default()
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts single-digit months and days; the wire layout does not.
        let shaped = s.len() == 10
            && s.bytes().enumerate().all(|(idx, b)| match idx {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(ParseValueError::new("date", s));
        }
        NaiveDate::parse_from_str(s, DATE_LAYOUT)
            .map(Self::from)
            .map_err(|_| ParseValueError::new("date", s))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
