//! Window model: the comparable representation of a schedule's coverage.
//!
//! A schedule's raw fields (`HH:mm` and `YYYY-MM-DD` strings) are lowered
//! into a [`Window`]: an inclusive calendar date range plus zero, one, or
//! two half-open daily segments of second offsets.
//!
//! # Segments
//! - `start == end` → no segments (a zero-length window, never active)
//! - `start < end`  → one segment `[start, end)`
//! - `start > end`  → two segments `[start, 86400)` and `[0, end)`
//!
//! Splitting a midnight-wrapping range into two segments reduces every
//! later comparison (conflict detection, active matching) to plain
//! half-open interval intersection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::Schedule;
use crate::validation::{parse_date, time_of_day_seconds};

/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A half-open interval `[start_s, end_s)` of second offsets within one day.
///
/// Includes start, excludes end: two segments that merely touch at a
/// boundary do not overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailySegment {
    /// Segment start (seconds from midnight, inclusive).
    pub start_s: u32,
    /// Segment end (seconds from midnight, exclusive).
    pub end_s: u32,
}

impl DailySegment {
    /// Creates a new daily segment.
    pub fn new(start_s: u32, end_s: u32) -> Self {
        Self { start_s, end_s }
    }

    /// Length of this segment in seconds.
    #[inline]
    pub fn len_seconds(&self) -> u32 {
        self.end_s - self.start_s
    }

    /// Whether a second offset falls within this segment.
    #[inline]
    pub fn contains(&self, second: u32) -> bool {
        second >= self.start_s && second < self.end_s
    }

    /// Whether two segments overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_s < other.end_s && other.start_s < self.end_s
    }
}

/// Converts two validated `HH:mm` strings into 0, 1, or 2 daily segments.
///
/// # Returns
/// - Empty vector when `start_time == end_time` (never-active window)
/// - One segment `[start, end)` when `start_time < end_time`
/// - Two segments `[start, 86400)` and `[0, end)` when the range wraps
///   past midnight
///
/// # Errors
/// [`ScheduleError::InvalidTimeRange`] if either string is not `HH:mm`.
pub fn daily_segments(start_time: &str, end_time: &str) -> Result<Vec<DailySegment>, ScheduleError> {
    let start = seconds_of(start_time)?;
    let end = seconds_of(end_time)?;

    let segments = match start.cmp(&end) {
        std::cmp::Ordering::Equal => Vec::new(),
        std::cmp::Ordering::Less => vec![DailySegment::new(start, end)],
        std::cmp::Ordering::Greater => vec![
            DailySegment::new(start, SECONDS_PER_DAY),
            DailySegment::new(0, end),
        ],
    };
    Ok(segments)
}

fn seconds_of(value: &str) -> Result<u32, ScheduleError> {
    time_of_day_seconds(value).ok_or_else(|| ScheduleError::InvalidTimeRange {
        value: value.to_string(),
    })
}

/// The derived date-range + daily-segment representation of a schedule.
///
/// Derived, never persisted: a pure function of the schedule's raw fields,
/// recomputed wherever overlap or active-matching decisions are made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Window {
    /// ID of the schedule this window was derived from.
    pub schedule_id: String,
    /// ID of the display the schedule targets.
    pub display_id: String,
    /// First day the window applies (inclusive).
    pub start_date: NaiveDate,
    /// Last day the window applies (inclusive).
    pub end_date: NaiveDate,
    /// Daily time coverage (0, 1, or 2 half-open segments).
    pub segments: Vec<DailySegment>,
}

impl Window {
    /// Derives the window of a schedule.
    ///
    /// Absent dates default to an effectively unbounded range
    /// (`1970-01-01..2099-12-31`).
    ///
    /// # Errors
    /// [`ScheduleError::InvalidTimeRange`] or
    /// [`ScheduleError::InvalidDateRange`] if the schedule's raw strings
    /// do not parse.
    pub fn from_schedule(schedule: &Schedule) -> Result<Self, ScheduleError> {
        let start_date = match schedule.start_date.as_deref() {
            Some(s) => date_of(s)?,
            None => unbounded_start(),
        };
        let end_date = match schedule.end_date.as_deref() {
            Some(s) => date_of(s)?,
            None => unbounded_end(),
        };
        let segments = daily_segments(&schedule.start_time, &schedule.end_time)?;

        Ok(Self {
            schedule_id: schedule.id.clone(),
            display_id: schedule.display_id.clone(),
            start_date,
            end_date,
            segments,
        })
    }

    /// Total daily coverage in seconds.
    ///
    /// Wraparound is already handled by construction: a midnight-wrapping
    /// window's two segments sum to `86400 - start + end`.
    pub fn span_seconds(&self) -> u64 {
        self.segments
            .iter()
            .map(|s| u64::from(s.len_seconds()))
            .sum()
    }

    /// Whether this window's date range contains a calendar date.
    #[inline]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Whether this window's date range overlaps another's.
    ///
    /// Inclusive on both ends: ranges sharing a single day overlap.
    pub fn dates_overlap(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Whether a second-of-day falls within any of this window's segments.
    pub fn contains_second(&self, second: u32) -> bool {
        self.segments.iter().any(|s| s.contains(second))
    }
}

fn date_of(value: &str) -> Result<NaiveDate, ScheduleError> {
    parse_date(value).ok_or_else(|| ScheduleError::InvalidDateRange {
        message: format!("'{value}' is not a valid YYYY-MM-DD date"),
    })
}

fn unbounded_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn unbounded_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 12, 31).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Schedule;

    #[test]
    fn test_segment_half_open() {
        let s = DailySegment::new(100, 200);
        assert_eq!(s.len_seconds(), 100);
        assert!(s.contains(100));
        assert!(s.contains(199));
        assert!(!s.contains(200)); // exclusive end
        assert!(!s.contains(50));
    }

    #[test]
    fn test_segment_overlap_symmetric() {
        let a = DailySegment::new(0, 100);
        let b = DailySegment::new(50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = DailySegment::new(100, 200); // touching, not overlapping
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_equal_times_yield_no_segments() {
        assert!(daily_segments("12:00", "12:00").unwrap().is_empty());
        assert!(daily_segments("00:00", "00:00").unwrap().is_empty());
    }

    #[test]
    fn test_ordinary_range_yields_one_segment() {
        let segments = daily_segments("08:00", "17:00").unwrap();
        assert_eq!(segments, vec![DailySegment::new(8 * 3600, 17 * 3600)]);
    }

    #[test]
    fn test_wrapping_range_yields_two_segments() {
        let segments = daily_segments("22:00", "06:00").unwrap();
        assert_eq!(
            segments,
            vec![
                DailySegment::new(22 * 3600, SECONDS_PER_DAY),
                DailySegment::new(0, 6 * 3600),
            ]
        );
        // Total span equals 86400 - start + end
        let total: u32 = segments.iter().map(DailySegment::len_seconds).sum();
        assert_eq!(total, SECONDS_PER_DAY - 22 * 3600 + 6 * 3600);
    }

    #[test]
    fn test_daily_segments_rejects_bad_time() {
        let err = daily_segments("24:00", "06:00").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_window_from_schedule() {
        let schedule = Schedule::new("s1")
            .with_display("d1")
            .with_dates("2026-01-01", "2026-01-31")
            .with_times("08:00", "17:00");
        let window = Window::from_schedule(&schedule).unwrap();

        assert_eq!(window.schedule_id, "s1");
        assert_eq!(window.display_id, "d1");
        assert_eq!(
            window.start_date,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert_eq!(
            window.end_date,
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
        );
        assert_eq!(window.segments.len(), 1);
        assert_eq!(window.span_seconds(), 9 * 3600);
    }

    #[test]
    fn test_window_defaults_to_unbounded_dates() {
        let schedule = Schedule::new("s1").with_times("08:00", "17:00");
        let window = Window::from_schedule(&schedule).unwrap();

        assert!(window.contains_date(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()));
        assert!(window.contains_date(NaiveDate::from_ymd_opt(2099, 12, 31).unwrap()));
    }

    #[test]
    fn test_window_rejects_corrupt_fields() {
        let schedule = Schedule::new("s1").with_times("08:00", "17:61");
        assert!(Window::from_schedule(&schedule).is_err());

        let schedule = Schedule::new("s1")
            .with_dates("2026-02-30", "2026-03-01")
            .with_times("08:00", "17:00");
        assert!(Window::from_schedule(&schedule).is_err());
    }

    #[test]
    fn test_wrapping_window_span() {
        let schedule = Schedule::new("s1").with_times("23:00", "01:00");
        let window = Window::from_schedule(&schedule).unwrap();
        assert_eq!(window.span_seconds(), 2 * 3600);
        assert!(window.contains_second(23 * 3600 + 30 * 60));
        assert!(window.contains_second(30 * 60));
        assert!(!window.contains_second(12 * 3600));
    }

    #[test]
    fn test_dates_overlap_inclusive() {
        let schedule = |id: &str, start: &str, end: &str| {
            Schedule::new(id)
                .with_dates(start, end)
                .with_times("08:00", "17:00")
        };
        let a = Window::from_schedule(&schedule("a", "2026-01-01", "2026-01-31")).unwrap();
        let b = Window::from_schedule(&schedule("b", "2026-01-31", "2026-02-15")).unwrap();
        let c = Window::from_schedule(&schedule("c", "2026-02-01", "2026-02-15")).unwrap();

        assert!(a.dates_overlap(&b)); // share exactly one day
        assert!(b.dates_overlap(&a));
        assert!(!a.dates_overlap(&c));
    }
}
