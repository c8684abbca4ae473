//! Date normalization between ISO and display formats.
//!
//! Forms post dates either as ISO (`2026-03-01`, or a full timestamp picked
//! up from a date picker) or in the US display form (`3/1/2026`). Storage
//! and the JSON API use ISO; CSV export uses the configured display format.

use std::fmt::{self, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer, Visitor};

/// Default display format: month/day/year without zero padding.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

const ISO_DATE: &str = "%Y-%m-%d";

/// Datetime layouts accepted in addition to RFC 3339.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a date string in any accepted layout. Returns `None` for blank or
/// unparsable input.
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, ISO_DATE) {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts.date());
        }
    }
    // chrono's %m/%d accept values without zero padding.
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

/// Format a date as `YYYY-MM-DD`.
pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Format a date with a strftime-style display format.
///
/// Fails when the format holds specifiers a plain date cannot supply, such
/// as hours or a UTC offset.
pub fn to_display(date: NaiveDate, format: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{}", date.format(format))?;
    Ok(out)
}

/// Render any accepted date string in the display format. Unparsable input
/// renders as the empty string.
pub fn normalize_to_display(input: &str, format: &str) -> Result<String, fmt::Error> {
    match parse_flexible(input) {
        Some(date) => to_display(date, format),
        None => Ok(String::new()),
    }
}

/// Check that a display format renders a date without error.
pub fn is_valid_display_format(format: &str) -> bool {
    NaiveDate::from_ymd_opt(2000, 1, 31).is_some_and(|sample| to_display(sample, format).is_ok())
}

/// Deserialize an optional form date where `null` and `""` mean unset.
///
/// Use with `#[serde(default, deserialize_with = "...")]` on
/// `Option<NaiveDate>`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FormDateVisitor)
}

struct FormDateVisitor;

impl<'de> Visitor<'de> for FormDateVisitor {
    type Value = Option<NaiveDate>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date string (YYYY-MM-DD or M/D/YYYY) or an empty value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.trim().is_empty() {
            return Ok(None);
        }
        parse_flexible(v)
            .map(Some)
            .ok_or_else(|| E::custom(format!("'{v}' is not a valid date")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(FormDateVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_flexible("2026-03-01"), Some(ymd(2026, 3, 1)));
    }

    #[test]
    fn parses_timestamps() {
        assert_eq!(parse_flexible("2026-03-01T10:15:00Z"), Some(ymd(2026, 3, 1)));
        assert_eq!(parse_flexible("2026-03-01T10:15:00.000Z"), Some(ymd(2026, 3, 1)));
        assert_eq!(parse_flexible("2026-03-01 23:59:59"), Some(ymd(2026, 3, 1)));
        assert_eq!(parse_flexible("2026-03-01T08:00:00"), Some(ymd(2026, 3, 1)));
    }

    #[test]
    fn parses_display_dates_with_and_without_padding() {
        assert_eq!(parse_flexible("3/1/2026"), Some(ymd(2026, 3, 1)));
        assert_eq!(parse_flexible("03/01/2026"), Some(ymd(2026, 3, 1)));
    }

    #[test]
    fn rejects_garbage_and_blank() {
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("   "), None);
        assert_eq!(parse_flexible("next tuesday"), None);
        assert_eq!(parse_flexible("2026-02-30"), None);
    }

    #[test]
    fn display_round_trip() {
        let date = ymd(2026, 10, 9);
        let shown = to_display(date, DEFAULT_DISPLAY_FORMAT).unwrap();
        assert_eq!(shown, "10/9/2026");
        assert_eq!(parse_flexible(&shown), Some(date));
    }

    #[test]
    fn normalize_to_display_handles_garbage_and_bad_formats() {
        assert_eq!(normalize_to_display("2026-03-01", DEFAULT_DISPLAY_FORMAT).unwrap(), "3/1/2026");
        assert_eq!(normalize_to_display("soon", DEFAULT_DISPLAY_FORMAT).unwrap(), "");
        assert!(normalize_to_display("2026-03-01", "%H:%M").is_err());
    }

    #[test]
    fn display_format_check() {
        assert!(is_valid_display_format(DEFAULT_DISPLAY_FORMAT));
        assert!(is_valid_display_format("%d.%m.%Y"));
        assert!(!is_valid_display_format("%Q"));
        assert!(!is_valid_display_format("%H:%M"));
        assert!(!is_valid_display_format("%Y-%m-%d %z"));
    }

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "deserialize_optional")]
        move_in_date: Option<NaiveDate>,
    }

    #[test]
    fn form_dates_accept_both_layouts_and_blank() {
        let parse = |json: &str| serde_json::from_str::<Form>(json).unwrap().move_in_date;
        assert_eq!(parse(r#"{"move_in_date": "2026-03-01"}"#), Some(ymd(2026, 3, 1)));
        assert_eq!(parse(r#"{"move_in_date": "3/1/2026"}"#), Some(ymd(2026, 3, 1)));
        assert_eq!(parse(r#"{"move_in_date": ""}"#), None);
        assert_eq!(parse(r#"{"move_in_date": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn form_dates_reject_garbage() {
        assert!(serde_json::from_str::<Form>(r#"{"move_in_date": "someday"}"#).is_err());
    }
}
