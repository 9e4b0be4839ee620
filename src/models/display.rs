//! Display (device) model.
//!
//! Only the fields this core computes with: a display's identity and its
//! screen dimensions. Registration, heartbeats, and streaming belong to
//! the surrounding service.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// A physical display a schedule can target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    /// Unique display identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Screen width in pixels. `None` = not yet configured.
    pub screen_width: Option<u32>,
    /// Screen height in pixels. `None` = not yet configured.
    pub screen_height: Option<u32>,
}

impl Display {
    /// Creates a new display with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            screen_width: None,
            screen_height: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the screen dimensions in pixels.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.screen_width = Some(width);
        self.screen_height = Some(height);
        self
    }

    /// Returns `(width, height)` in pixels.
    ///
    /// Schedules cannot be validated against a display without known
    /// dimensions, so absent or zero dimensions are an error.
    ///
    /// # Errors
    /// [`ScheduleError::DeviceResolutionMissing`] if either dimension is
    /// absent or zero.
    pub fn resolution(&self) -> Result<(u32, u32), ScheduleError> {
        match (self.screen_width, self.screen_height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => Ok((width, height)),
            _ => Err(ScheduleError::DeviceResolutionMissing {
                display_id: self.id.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_present() {
        let display = Display::new("d1").with_resolution(1920, 1080);
        assert_eq!(display.resolution().unwrap(), (1920, 1080));
    }

    #[test]
    fn test_resolution_missing() {
        let display = Display::new("d1").with_name("Lobby screen");
        let err = display.resolution().unwrap_err();
        assert_eq!(
            err,
            ScheduleError::DeviceResolutionMissing {
                display_id: "d1".to_string()
            }
        );
    }

    #[test]
    fn test_resolution_zero_is_missing() {
        let display = Display::new("d1").with_resolution(1920, 0);
        assert!(display.resolution().is_err());
    }
}
