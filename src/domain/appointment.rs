//! Appointment domain model
//!
//! Appointments are stored as opaque JSON records. The only fields the index
//! interprets are `date` and the optional `time`, from which the temporal
//! classification ([`AppointmentKind`]) is derived at query time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Date-time layouts accepted for the `date` field, tried in order after RFC 3339
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts accepted for the `date` field
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Layouts accepted for the separate `time` field
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"];

/// Temporal classification of an appointment relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentKind {
    /// Scheduled in the future
    Upcoming,
    /// In the past, within the recency window
    Recent,
    /// Older than the recency window
    Past,
}

impl AppointmentKind {
    /// Every classification, in display order
    pub const ALL: [AppointmentKind; 3] = [
        AppointmentKind::Upcoming,
        AppointmentKind::Recent,
        AppointmentKind::Past,
    ];

    /// Returns the wire name of this classification
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentKind::Upcoming => "upcoming",
            AppointmentKind::Recent => "recent",
            AppointmentKind::Past => "past",
        }
    }

    /// Parses an optional filter value
    ///
    /// Absent, blank or unrecognized values mean "no filter".
    pub fn parse_filter(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }
}

impl fmt::Display for AppointmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Ok(AppointmentKind::Upcoming),
            "recent" => Ok(AppointmentKind::Recent),
            "past" => Ok(AppointmentKind::Past),
            _ => Err(format!(
                "Invalid appointment type: '{s}'. Must be one of: upcoming, recent, past"
            )),
        }
    }
}

/// When an appointment takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentDate {
    /// Only the calendar day is known
    Day(NaiveDate),
    /// An exact instant (naive values are taken as UTC)
    At(DateTime<Utc>),
}

impl AppointmentDate {
    /// Parses a `date` value, combined with a separate `time` value if given
    ///
    /// Returns `None` when the date cannot be interpreted. An unparseable
    /// `time` is ignored and the appointment falls back to day precision.
    pub fn parse(date: &str, time: Option<&str>) -> Option<Self> {
        let date = date.trim();
        if date.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
            return Some(AppointmentDate::At(dt.with_timezone(&Utc)));
        }

        for format in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(date, format) {
                return Some(AppointmentDate::At(naive.and_utc()));
            }
        }

        let day = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(date, format).ok())?;

        let at = time.and_then(parse_time).map(|t| day.and_time(t).and_utc());
        Some(match at {
            Some(instant) => AppointmentDate::At(instant),
            None => AppointmentDate::Day(day),
        })
    }
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time, format).ok())
}

/// A single appointment record
///
/// The record is kept verbatim and re-emitted unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Appointment(Value);

impl Appointment {
    /// Wraps a raw JSON record
    pub fn new(record: Value) -> Self {
        Self(record)
    }

    /// The raw `date` field, if it is a string
    pub fn date(&self) -> Option<&str> {
        self.0.get("date").and_then(Value::as_str)
    }

    /// The raw `time` field, if it is a string
    pub fn time(&self) -> Option<&str> {
        self.0.get("time").and_then(Value::as_str)
    }

    /// When the appointment takes place, if its date is parseable
    pub fn scheduled(&self) -> Option<AppointmentDate> {
        AppointmentDate::parse(self.date()?, self.time())
    }

    /// The underlying JSON record
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// A patient's appointments as stored in the data source
///
/// The source may hold a flat array or an object of named arrays
/// (`{"upcoming": [...], "past": [...]}`). The original value is kept for
/// pass-through output; [`AppointmentBook::entries`] is the flattened view
/// that classification works on. Stored group names are not trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentBook {
    raw: Value,
    entries: Vec<Appointment>,
}

impl AppointmentBook {
    /// Builds a book from a raw JSON value
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither null, an array, nor an object.
    pub fn from_value(raw: Value) -> Result<Self, String> {
        let entries = match &raw {
            Value::Null => Vec::new(),
            Value::Array(items) => items.iter().cloned().map(Appointment::new).collect(),
            Value::Object(groups) => groups
                .values()
                .filter_map(Value::as_array)
                .flatten()
                .cloned()
                .map(Appointment::new)
                .collect(),
            other => {
                return Err(format!(
                    "appointments must be an array or an object of arrays, got {other}"
                ))
            }
        };
        Ok(Self { raw, entries })
    }

    /// Every appointment, flattened in source order
    pub fn entries(&self) -> &[Appointment] {
        &self.entries
    }

    /// Number of appointments
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no appointments
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value exactly as it appeared in the data source
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl Default for AppointmentBook {
    fn default() -> Self {
        Self {
            raw: Value::Object(serde_json::Map::new()),
            entries: Vec::new(),
        }
    }
}

impl Serialize for AppointmentBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AppointmentBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        AppointmentBook::from_value(raw).map_err(de::Error::custom)
    }
}
