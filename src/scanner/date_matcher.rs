use crate::error::{DaySortError, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use std::fmt;
use std::time::SystemTime;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar day a file's modification time must fall on, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    /// Parses a strict `YYYY-MM-DD` date. Unpadded fields and other separators are rejected.
    pub fn parse(value: &str) -> Result<Self> {
        if !has_date_shape(value) {
            return Err(DaySortError::InvalidDate {
                value: value.to_string(),
                reason: "expected YYYY-MM-DD".to_string(),
            });
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|e| DaySortError::InvalidDate {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// True when `modified`, read as local civil time, falls on this day.
    pub fn matches(&self, modified: SystemTime) -> bool {
        let local: DateTime<Local> = modified.into();
        same_day(&local, &self.0)
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Compares year, month and day only.
pub fn same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local_time(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> SystemTime {
        Local
            .with_ymd_and_hms(y, m, d, h, min, s)
            .earliest()
            .unwrap()
            .into()
    }

    #[test]
    fn test_parse_valid_date() {
        let date = TargetDate::parse("2024-03-05").unwrap();
        assert_eq!(date, TargetDate(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()));
        assert_eq!(date.to_string(), "2024-03-05");
    }

    #[test]
    fn test_parse_rejects_malformed_dates() {
        for value in [
            "",
            "2024-3-5",
            "2024/03/05",
            "20240305",
            " 2024-03-05",
            "2024-03-05T00:00:00",
            "2024-13-01",
            "2023-02-29",
            "2024-02-30",
        ] {
            let err = TargetDate::parse(value).unwrap_err();
            assert!(
                matches!(err, DaySortError::InvalidDate { .. }),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(TargetDate::parse("2024-02-29").is_ok());
    }

    #[test]
    fn test_matches_whole_local_day() {
        let target = TargetDate::parse("2024-03-05").unwrap();

        assert!(target.matches(local_time(2024, 3, 5, 0, 0, 0)));
        assert!(target.matches(local_time(2024, 3, 5, 12, 30, 0)));
        assert!(target.matches(local_time(2024, 3, 5, 23, 59, 59)));

        assert!(!target.matches(local_time(2024, 3, 4, 23, 59, 59)));
        assert!(!target.matches(local_time(2024, 3, 6, 0, 0, 0)));
        assert!(!target.matches(local_time(2023, 3, 5, 12, 0, 0)));
    }

    #[test]
    fn test_same_day_ignores_time_of_day() {
        let morning = Local.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).earliest().unwrap();
        let evening = Local.with_ymd_and_hms(2024, 1, 1, 22, 0, 0).earliest().unwrap();
        let next = Local.with_ymd_and_hms(2024, 1, 2, 1, 0, 0).earliest().unwrap();

        assert!(same_day(&morning, &evening));
        assert!(!same_day(&evening, &next));
        assert!(same_day(&morning, &NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    }
}
