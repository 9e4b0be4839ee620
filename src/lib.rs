//! Scheduling core for digital signage.
//!
//! Staff assign a playlist to a physical display for specific date ranges
//! and daily time windows; displays poll for what should be playing right
//! now. This crate is the computation layer behind both paths: it
//! validates windows, detects overlaps between schedules on one display,
//! computes the minimum seconds a window must span so content is not cut
//! off, and deterministically picks the active schedule for an instant
//! and timezone.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Schedule`](models::Schedule),
//!   [`Display`](models::Display), [`PlaylistItem`](models::PlaylistItem),
//!   and the derived [`Window`](models::Window) / [`DailySegment`](models::DailySegment)
//! - **`validation`**: Strict `HH:mm` / `YYYY-MM-DD` checks and window validation
//! - **`conflict`**: Overlap detection between windows on the same display
//! - **`duration`**: Minimum playable duration for a playlist on a display
//! - **`selector`**: The single schedule that should be playing now
//! - **`settings`**: Runtime playback settings (auto-scroll speed)
//! - **`error`**: The crate-wide error enum
//!
//! # Architecture
//!
//! Everything here is pure and synchronous: no I/O, no persistence, no
//! clocks. The surrounding service loads the records, calls in, and
//! persists afterwards. A schedule's window is derived on demand, never
//! stored, and "active" is recomputed from wall-clock time on every
//! evaluation — there is no status field to drift.
//!
//! A create/update flow composes the pieces in order: `validate_window`,
//! then `required_min_duration_seconds` + `ensure_window_fits` against
//! the target display and playlist, then `ensure_no_conflicts` against
//! the display's existing windows. A polling endpoint just calls
//! `select_active_schedule`.

pub mod conflict;
pub mod duration;
pub mod error;
pub mod models;
pub mod selector;
pub mod settings;
pub mod validation;

pub use conflict::{ensure_no_conflicts, windows_conflict};
pub use duration::{ensure_window_fits, required_min_duration_seconds};
pub use error::ScheduleError;
pub use selector::select_active_schedule;
pub use settings::PlaybackSettings;
pub use validation::{is_valid_date, is_valid_time, validate_window};
