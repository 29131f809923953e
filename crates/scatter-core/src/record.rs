// File: crates/scatter-core/src/record.rs
// Summary: Raw wire records, validated `Record`s, and the anchored `FinishTime` clock value.
// Notes:
// - Finish times are anchored to 1980-01-01T00:00:00Z; only minutes and seconds carry meaning.

use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Deserialize;

use crate::error::{RecordError, RecordErrorKind};

/// Wire shape of one dataset entry. Every field is optional so validation can say
/// which one is missing; unknown fields (`Place`, `Seconds`, `URL`, ...) are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Nationality")]
    pub nationality: Option<String>,
    #[serde(rename = "Doping")]
    pub doping: Option<String>,
}

/// A race finish time as a time of day on a fixed anchor date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FinishTime(DateTime<Utc>);

impl FinishTime {
    /// Build from minute and second components. Both must be below 60.
    pub fn from_min_sec(minutes: u32, seconds: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(1980, 1, 1)?
            .and_hms_opt(0, minutes, seconds)
            .map(|dt| Self(dt.and_utc()))
    }

    /// Parse `"MM:SS"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (m, s) = raw.trim().split_once(':')?;
        if m.is_empty() || s.is_empty() || !m.bytes().chain(s.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::from_min_sec(m.parse().ok()?, s.parse().ok()?)
    }

    /// Rebuild from a millisecond timestamp (used for tick values).
    pub fn from_millis(ms: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(ms).map(Self)
    }

    pub fn millis(&self) -> i64 { self.0.timestamp_millis() }

    /// ISO-8601 with millisecond precision, e.g. `1980-01-01T00:36:50.000Z`.
    pub fn iso(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Minute:second clock label, e.g. `36:50`.
    pub fn clock(&self) -> String {
        self.0.format("%M:%S").to_string()
    }
}

impl fmt::Display for FinishTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clock())
    }
}

/// One cyclist's validated data point. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub year: i32,
    pub finish_time: FinishTime,
    pub name: String,
    pub nationality: String,
    pub doping: String,
}

impl Record {
    pub fn has_allegation(&self) -> bool { !self.doping.is_empty() }

    /// Validate a raw record. `index` is its position in the payload, for error reports.
    pub fn try_from_raw(index: usize, raw: RawRecord) -> Result<Self, RecordError> {
        let missing = |field| RecordError { index, kind: RecordErrorKind::MissingField(field) };
        let time = raw.time.ok_or_else(|| missing("Time"))?;
        let finish_time = FinishTime::parse(&time)
            .ok_or(RecordError { index, kind: RecordErrorKind::BadTime(time.clone()) })?;
        Ok(Self {
            year: raw.year.ok_or_else(|| missing("Year"))?,
            finish_time,
            name: raw.name.ok_or_else(|| missing("Name"))?,
            nationality: raw.nationality.ok_or_else(|| missing("Nationality"))?,
            doping: raw.doping.ok_or_else(|| missing("Doping"))?,
        })
    }
}

/// Validate a whole payload, stopping at the first bad record.
pub fn validate(raw: Vec<RawRecord>) -> Result<Vec<Record>, RecordError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, r)| Record::try_from_raw(i, r))
        .collect()
}
