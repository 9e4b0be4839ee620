//! Time and date validation for schedule windows.
//!
//! Checks the raw string fields of a schedule before any window is derived:
//! - `HH:mm` times: exactly five characters, 24-hour clock
//! - `YYYY-MM-DD` dates: exactly ten characters, real calendar date
//! - Date ranges: start must not fall after end
//!
//! Both predicates are pure; [`validate_window`] lifts them into the
//! crate's typed errors.

use chrono::NaiveDate;

use crate::error::ScheduleError;

/// Whether `s` is a valid `HH:mm` time.
///
/// Strictly five characters, `HH` in `00..23`, `mm` in `00..59`.
/// No seconds, no timezone, no single-digit hours.
pub fn is_valid_time(s: &str) -> bool {
    time_of_day_seconds(s).is_some()
}

/// Whether `s` is a valid `YYYY-MM-DD` calendar date.
///
/// Strictly ten characters and a date that actually exists
/// (`2024-02-29` passes, `2023-02-29` and `2024-02-30` do not).
pub fn is_valid_date(s: &str) -> bool {
    parse_date(s).is_some()
}

/// Parses a strict `HH:mm` time into its second offset within a day.
///
/// Hand-rolled rather than `NaiveTime::parse_from_str` because chrono's
/// `%H` accepts single-digit hours and the wire contract is fixed-width.
pub(crate) fn time_of_day_seconds(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if ![0, 1, 3, 4].iter().all(|&i: &usize| bytes[i].is_ascii_digit()) {
        return None;
    }
    let hours = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
    let minutes = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 3600 + minutes * 60)
}

/// Parses a strict `YYYY-MM-DD` string into a calendar date.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    for (i, b) in bytes.iter().enumerate() {
        if i != 4 && i != 7 && !b.is_ascii_digit() {
            return None;
        }
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Validates the raw window fields of a candidate schedule.
///
/// Checks:
/// 1. Both times are valid `HH:mm` strings
/// 2. Each present date is a valid `YYYY-MM-DD` calendar date
/// 3. When both dates are present, `start_date <= end_date`
///
/// Dates are optional; an absent date means that side of the range is
/// unbounded. `start_time == end_time` is accepted — it denotes a
/// zero-length window that is never active.
///
/// # Returns
/// `Ok(())` if the window is well-formed, otherwise
/// [`ScheduleError::InvalidTimeRange`] or [`ScheduleError::InvalidDateRange`].
pub fn validate_window(
    start_date: Option<&str>,
    end_date: Option<&str>,
    start_time: &str,
    end_time: &str,
) -> Result<(), ScheduleError> {
    for value in [start_time, end_time] {
        if !is_valid_time(value) {
            return Err(ScheduleError::InvalidTimeRange {
                value: value.to_string(),
            });
        }
    }

    let start = parse_optional_date(start_date)?;
    let end = parse_optional_date(end_date)?;

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(ScheduleError::InvalidDateRange {
                message: format!("start date {start} is after end date {end}"),
            });
        }
    }

    Ok(())
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, ScheduleError> {
    match value {
        None => Ok(None),
        Some(s) => {
            parse_date(s)
                .map(Some)
                .ok_or_else(|| ScheduleError::InvalidDateRange {
                    message: format!("'{s}' is not a valid YYYY-MM-DD date"),
                })
        }
    }
}
