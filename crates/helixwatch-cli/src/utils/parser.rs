use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use thiserror::Error;

/// Accepted layout of `--end-time`, e.g. "2024-05-01 03:30PM".
pub const END_TIME_FORMAT: &str = "%Y-%m-%d %I:%M%p";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid end time '{0}'. Expected 'YYYY-MM-DD HH:MMam/pm' (e.g., '2024-05-01 03:30pm').")]
    InvalidEndTime(String),

    #[error("End time '{0}' does not exist in the local time zone.")]
    NonexistentLocalTime(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// Parses a local wall-clock end time. The am/pm marker is case-insensitive.
pub fn parse_end_time(input: &str) -> Result<DateTime<Local>, ParseError> {
    let normalized = input.trim().to_uppercase();
    let naive = NaiveDateTime::parse_from_str(&normalized, END_TIME_FORMAT)
        .map_err(|_| ParseError::InvalidEndTime(input.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| ParseError::NonexistentLocalTime(input.to_string()))
}

/// Splits a `KEY=VALUE` override at the first '='.
pub fn parse_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(input.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "KEY",
            input: input.to_string(),
        });
    }
    Ok((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_pm_time_into_24_hour_clock() {
        let end = parse_end_time("2031-07-04 03:30pm").unwrap();
        assert_eq!((end.year(), end.month(), end.day()), (2031, 7, 4));
        assert_eq!((end.hour(), end.minute()), (15, 30));
    }

    #[test]
    fn am_pm_marker_is_case_insensitive() {
        let lower = parse_end_time("2031-07-04 09:05am").unwrap();
        let upper = parse_end_time("2031-07-04 09:05AM").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.hour(), 9);
    }

    #[test]
    fn twelve_am_is_midnight() {
        let end = parse_end_time("2031-07-04 12:00am").unwrap();
        assert_eq!(end.hour(), 0);
    }

    #[test]
    fn rejects_malformed_end_times() {
        for input in ["2031-07-04 15:30", "tomorrow", "2031-07-04 03:30", "2031-13-01 01:00pm"] {
            assert_eq!(
                parse_end_time(input),
                Err(ParseError::InvalidEndTime(input.to_string())),
                "{input}"
            );
        }
    }

    #[test]
    fn key_value_splits_at_first_equals() {
        assert_eq!(
            parse_key_value("dssp.binary=/opt/a=b/mkdssp").unwrap(),
            ("dssp.binary", "/opt/a=b/mkdssp")
        );
        assert_eq!(
            parse_key_value(" polling.interval-ms = 250 ").unwrap(),
            ("polling.interval-ms", "250")
        );
    }

    #[test]
    fn key_value_rejects_missing_separator_or_key() {
        assert_eq!(
            parse_key_value("polling.interval-ms"),
            Err(ParseError::InvalidKeyValue("polling.interval-ms".to_string()))
        );
        assert!(matches!(
            parse_key_value("=5"),
            Err(ParseError::EmptyComponent { component: "KEY", .. })
        ));
    }
}
