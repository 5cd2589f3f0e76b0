use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday, parsed strictly from `DD.MM.YYYY` and rendered
/// back the same way, zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        parse_strict(raw)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidBirthday(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// chrono's own parser tolerates unpadded fields, so the two-digit and
// four-digit shape is checked by hand before the calendar check.
fn parse_strict(raw: &str) -> Option<NaiveDate> {
    let (day, rest) = raw.split_once('.')?;
    let (month, year) = rest.split_once('.')?;
    if day.len() != 2 || month.len() != 2 || year.len() != 4 {
        return None;
    }
    if [day, month, year]
        .iter()
        .any(|part| !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Birthday::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for `NaiveDate` fields carried in the `DD.MM.YYYY`
/// wire format.
pub mod wire_date {
    use super::{parse_strict, DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_strict(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date {raw:?}: expected DD.MM.YYYY")))
    }
}
