//! Minimum playable duration for a playlist on a display.
//!
//! A window must span at least the playlist's total play time, plus the
//! auto-scroll time of every item whose content renders taller than the
//! screen. Content is scaled to the display's width; the overflow beyond
//! the screen height scrolls at a configured pixels-per-second rate.

use crate::error::ScheduleError;
use crate::models::{Display, PlaylistItem, Window};
use crate::settings::PlaybackSettings;

/// Computes the minimum seconds a window must span for a playlist to play
/// without being cut off on the given display.
///
/// Base duration is the sum of item durations. Each image or document
/// item with known positive dimensions adds
/// `ceil((scaled_height - screen_height) / scroll_px_per_second)` when its
/// width-scaled height overflows the screen. Items with missing content
/// or unusable dimensions contribute their base duration only.
///
/// # Errors
/// [`ScheduleError::DeviceResolutionMissing`] if the display has no
/// configured screen dimensions.
pub fn required_min_duration_seconds(
    items: &[PlaylistItem],
    display: &Display,
    settings: &PlaybackSettings,
) -> Result<u64, ScheduleError> {
    let (screen_width, screen_height) = display.resolution()?;
    let scroll_px_per_second = settings.scroll_px_per_second.max(1);

    let mut total: u64 = items.iter().map(|item| item.duration_seconds).sum();
    for item in items {
        total += scroll_overflow_seconds(item, screen_width, screen_height, scroll_px_per_second);
    }
    Ok(total)
}

/// Extra seconds an item needs to scroll its overflow, or zero.
fn scroll_overflow_seconds(
    item: &PlaylistItem,
    screen_width: u32,
    screen_height: u32,
    scroll_px_per_second: u32,
) -> u64 {
    let Some(content) = &item.content else {
        return 0;
    };
    if !content.kind.scrolls() {
        return 0;
    }
    let (Some(width), Some(height)) = (content.width, content.height) else {
        return 0;
    };
    if width == 0 || height == 0 {
        return 0;
    }

    let scaled_height = f64::from(screen_width) / f64::from(width) * f64::from(height);
    let overflow = scaled_height - f64::from(screen_height);
    if overflow <= 0.0 {
        return 0;
    }
    (overflow / f64::from(scroll_px_per_second)).ceil() as u64
}

/// Checks that a window's daily span covers the required minimum.
///
/// The span is the sum of the window's segment lengths, so a
/// midnight-wrapping window is measured correctly.
///
/// # Errors
/// [`ScheduleError::WindowTooShort`] carrying both the required minimum
/// and the actual span, so the caller can surface them.
pub fn ensure_window_fits(window: &Window, required_seconds: u64) -> Result<(), ScheduleError> {
    let actual_seconds = window.span_seconds();
    if actual_seconds < required_seconds {
        return Err(ScheduleError::WindowTooShort {
            required_seconds,
            actual_seconds,
        });
    }
    Ok(())
}
