//! Signage scheduling domain models.
//!
//! Provides the record types the core computes over — the persisted
//! entities as loaded by the caller ([`Schedule`], [`Display`],
//! [`PlaylistItem`]) and the derived, never-persisted [`Window`]
//! representation used for every overlap and active-matching decision.

mod display;
mod playlist;
mod schedule;
mod window;

pub use display::Display;
pub use playlist::{ContentKind, ContentMeta, PlaylistItem};
pub use schedule::Schedule;
pub use window::{daily_segments, DailySegment, Window, SECONDS_PER_DAY};
