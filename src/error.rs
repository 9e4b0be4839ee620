//! Error types for schedule validation and selection.
//!
//! Every error here is recoverable by the caller and maps to a 4xx-class
//! response at the service boundary. The core performs no retries and no
//! partial application: a window is accepted whole or rejected whole.

use thiserror::Error;

/// Errors produced by the scheduling core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A time string is not a valid `HH:mm` value.
    #[error("invalid time value '{value}' (expected HH:mm)")]
    InvalidTimeRange {
        /// The offending input.
        value: String,
    },

    /// A date string is malformed, or the start date falls after the end date.
    #[error("invalid date range: {message}")]
    InvalidDateRange {
        /// What was wrong with the range.
        message: String,
    },

    /// The schedule's window is shorter than its playlist requires.
    ///
    /// Carries the computed minimum so the caller can surface it.
    #[error("window spans {actual_seconds}s but the playlist requires at least {required_seconds}s")]
    WindowTooShort {
        /// Minimum seconds the window must span.
        required_seconds: u64,
        /// Seconds the window actually spans.
        actual_seconds: u64,
    },

    /// The candidate window overlaps an existing schedule on the same display.
    #[error("window overlaps existing schedule '{conflicting_id}' on the same display")]
    ScheduleConflict {
        /// ID of the first existing schedule found to overlap.
        conflicting_id: String,
    },

    /// The target display has no configured screen dimensions.
    #[error("display '{display_id}' has no configured screen resolution")]
    DeviceResolutionMissing {
        /// ID of the display missing its resolution.
        display_id: String,
    },
}
