//! Utilities for date and time handling
//!
//! The API sends timestamps as ISO local datetimes and expects filter bounds
//! as `YYYY-MM-DD HH:MM:SS`; the browser `datetime-local` input works with
//! `YYYY-MM-DDTHH:MM[:SS]`.

use chrono::NaiveDateTime;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Format ISO datetime string for table cells
/// Example: "2024-03-15T14:02:26.123" -> "2024-03-15 14:02:26"
///
/// Anything that does not parse is shown as is; a missing value is empty.
pub fn format_datetime(datetime_str: Option<&str>) -> String {
    let Some(raw) = datetime_str else {
        return String::new();
    };
    let trimmed = raw.trim_end_matches('Z');
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, INPUT_FORMAT))
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Parse the value of a `datetime-local` input; empty means unset
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, INPUT_FORMAT_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(value, INPUT_FORMAT))
        .ok()
}

/// Inverse of `parse_datetime_local`
pub fn to_datetime_local(value: &NaiveDateTime) -> String {
    value.format(INPUT_FORMAT_SECONDS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(Some("2024-03-15T14:02:26.123")),
            "2024-03-15 14:02:26"
        );
        assert_eq!(
            format_datetime(Some("2024-12-31T23:59:59Z")),
            "2024-12-31 23:59:59"
        );
        assert_eq!(format_datetime(Some("2024-12-31T23:59")), "2024-12-31 23:59:00");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime(Some("invalid")), "invalid");
        assert_eq!(format_datetime(None), "");
    }

    #[test]
    fn test_parse_datetime_local() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 0))
            .unwrap();
        assert_eq!(parse_datetime_local("2024-01-02T03:04"), Some(expected));
        assert_eq!(parse_datetime_local("2024-01-02T03:04:00"), Some(expected));
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("yesterday"), None);
    }

    #[test]
    fn test_datetime_local_roundtrip() {
        let value = NaiveDate::from_ymd_opt(2024, 5, 6)
            .and_then(|d| d.and_hms_opt(7, 8, 9))
            .unwrap();
        assert_eq!(parse_datetime_local(&to_datetime_local(&value)), Some(value));
    }
}
