//! Runtime playback settings.
//!
//! The surrounding service stores settings as loose key/value strings;
//! this module gives them a typed shape with safe defaults, so a missing
//! or garbage stored value never breaks duration calculation.

use serde::{Deserialize, Serialize};

/// Default auto-scroll speed in pixels per second.
pub const DEFAULT_SCROLL_PX_PER_SECOND: u32 = 24;

/// Playback-related runtime settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybackSettings {
    /// Pixels per second that oversized content scrolls at.
    #[serde(default = "default_scroll_px_per_second")]
    pub scroll_px_per_second: u32,
}

fn default_scroll_px_per_second() -> u32 {
    DEFAULT_SCROLL_PX_PER_SECOND
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            scroll_px_per_second: DEFAULT_SCROLL_PX_PER_SECOND,
        }
    }
}

impl PlaybackSettings {
    /// Builds settings from a raw stored value.
    ///
    /// Absent, unparseable, or zero values fall back to the default.
    pub fn from_stored(value: Option<&str>) -> Self {
        let scroll_px_per_second = value
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_SCROLL_PX_PER_SECOND);
        Self {
            scroll_px_per_second,
        }
    }
}
