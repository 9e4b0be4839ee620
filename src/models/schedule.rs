//! Schedule model.
//!
//! A schedule assigns one playlist to one display for an inclusive date
//! range and a daily time-of-day range, with a priority used to resolve
//! ties when several schedules are simultaneously eligible.
//!
//! The raw fields stay strings (`YYYY-MM-DD`, `HH:mm`) — that is the wire
//! shape of the surrounding HTTP layer. Comparisons never happen on the
//! raw fields; they go through the derived [`Window`](super::Window).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist-to-display assignment with a date/time window.
///
/// `is_active` is an independent staff-controlled toggle; whether the
/// schedule is *playing* is recomputed from wall-clock time on every
/// evaluation and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Unique schedule identifier.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Playlist this schedule plays.
    pub playlist_id: String,
    /// Display this schedule targets.
    pub display_id: String,
    /// First day of the window (`YYYY-MM-DD`, inclusive). `None` = unbounded.
    pub start_date: Option<String>,
    /// Last day of the window (`YYYY-MM-DD`, inclusive). `None` = unbounded.
    pub end_date: Option<String>,
    /// Daily window start (`HH:mm`, 24-hour clock).
    pub start_time: String,
    /// Daily window end (`HH:mm`). Before `start_time` = wraps past midnight;
    /// equal to `start_time` = zero-length, never active.
    pub end_time: String,
    /// Selection priority (higher wins).
    pub priority: i32,
    /// Staff toggle, independent of the date/time window.
    pub is_active: bool,
    /// Creation timestamp, owned by the persistence layer.
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp, owned by the persistence layer.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Schedule {
    /// Creates a new schedule with the given ID.
    ///
    /// Defaults: unbounded dates, `00:00..00:00` (zero-length) times,
    /// priority 0, active.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            playlist_id: String::new(),
            display_id: String::new(),
            start_date: None,
            end_date: None,
            start_time: "00:00".to_string(),
            end_time: "00:00".to_string(),
            priority: 0,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the display label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the target playlist.
    pub fn with_playlist(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = playlist_id.into();
        self
    }

    /// Sets the target display.
    pub fn with_display(mut self, display_id: impl Into<String>) -> Self {
        self.display_id = display_id.into();
        self
    }

    /// Sets the inclusive date range.
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Sets the daily time range.
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Sets the selection priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the active toggle.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
