//! Date values as they appear on dashboard records
//!
//! Creator validity windows and audit timestamps come either as real dates or
//! as free-form date strings ("2024-06-15", "June 15, 2024",
//! "2024-06-15T10:30:00Z"). [`DateValue`] keeps whichever form it was given
//! and normalizes to a locale date string at export time.

use std::fmt::{self, Write as _};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rendered for date strings that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Locale date format used when none is configured (en-US, `6/15/2024`)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

const TEXT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%m/%d/%Y", "%Y/%m/%d"];

const TEXT_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// A date given either as a typed value or as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// A calendar date
    Date(NaiveDate),
    /// A point in time
    Timestamp(DateTime<Utc>),
    /// A date string, parsed lazily
    Text(String),
}

impl DateValue {
    /// Resolve to a calendar date, if the value is parseable
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Timestamp(ts) => Some(ts.date_naive()),
            Self::Text(text) => parse_date_text(text),
        }
    }

    /// Format as a locale date string.
    ///
    /// Unparseable text becomes [`INVALID_DATE`]. An unusable `format` falls
    /// back to [`DEFAULT_DATE_FORMAT`].
    pub fn to_locale_string(&self, format: &str) -> String {
        let Some(date) = self.to_naive_date() else {
            log::warn!("Unparseable date value: {}", self);
            return INVALID_DATE.to_string();
        };

        let mut out = String::new();
        if write!(out, "{}", date.format(format)).is_err() {
            out.clear();
            // The default format is always valid
            let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
        }
        out
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }

    TEXT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            TEXT_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Timestamp(ts) => f.write_str(&ts.to_rfc3339()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        if let Ok(ts) = DateTime::parse_from_rfc3339(&text) {
            return Ok(Self::Timestamp(ts.with_timezone(&Utc)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }
        Ok(Self::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_object_formats_as_locale_date() {
        let value = DateValue::from(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(value.to_locale_string(DEFAULT_DATE_FORMAT), "6/15/2024");
    }

    #[test]
    fn test_date_strings_normalize_to_same_output() {
        let expected = "1/5/2025";
        for text in ["2025-01-05", "January 5, 2025", "Jan 05, 2025", "2025-01-05T08:00:00Z"] {
            assert_eq!(
                DateValue::from(text).to_locale_string(DEFAULT_DATE_FORMAT),
                expected,
                "input {text}"
            );
        }
    }

    #[test]
    fn test_timestamp_uses_utc_calendar_date() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(DateValue::from(ts).to_locale_string(DEFAULT_DATE_FORMAT), "12/31/2024");
    }

    #[test]
    fn test_unparseable_text_is_invalid_date() {
        let value = DateValue::from("sometime soon");
        assert_eq!(value.to_locale_string(DEFAULT_DATE_FORMAT), INVALID_DATE);
    }

    #[test]
    fn test_custom_format() {
        let value = DateValue::from("2024-03-09");
        assert_eq!(value.to_locale_string("%d.%m.%Y"), "09.03.2024");
    }

    #[test]
    fn test_deserialize_picks_typed_variant() {
        let date: DateValue = serde_json::from_str("\"2024-06-15\"").unwrap();
        assert!(matches!(date, DateValue::Date(_)));

        let ts: DateValue = serde_json::from_str("\"2024-06-15T10:00:00Z\"").unwrap();
        assert!(matches!(ts, DateValue::Timestamp(_)));

        let text: DateValue = serde_json::from_str("\"June 15, 2024\"").unwrap();
        assert_eq!(text, DateValue::Text("June 15, 2024".into()));
    }
}
