//! Playlist item and content metadata models.
//!
//! Read-only inputs to the minimum-duration calculation. A playlist item
//! plays for a fixed number of seconds and may reference a content object
//! whose dimensions decide whether it must auto-scroll on a given display.

use serde::{Deserialize, Serialize};

/// Classification of content objects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Still image.
    Image,
    /// Rendered document page (PDF and similar).
    Document,
    /// Video clip.
    Video,
    /// Audio-only content.
    Audio,
    /// Embedded web page.
    Web,
    /// Anything else.
    Other,
}

impl ContentKind {
    /// Whether this kind auto-scrolls when taller than the screen.
    ///
    /// Only images and documents scroll; video, audio, and web content
    /// manage their own presentation.
    #[inline]
    pub fn scrolls(&self) -> bool {
        matches!(self, ContentKind::Image | ContentKind::Document)
    }
}

/// Metadata of the content object a playlist item references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeta {
    /// Content classification.
    pub kind: ContentKind,
    /// Intrinsic width in pixels, when known.
    pub width: Option<u32>,
    /// Intrinsic height in pixels, when known.
    pub height: Option<u32>,
}

impl ContentMeta {
    /// Creates content metadata of the given kind, dimensions unknown.
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            width: None,
            height: None,
        }
    }

    /// Sets the intrinsic dimensions in pixels.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// One entry of a playlist.
///
/// `content` is `None` when the referenced content object is missing;
/// such items still play for their configured duration but contribute no
/// scroll overflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    /// Seconds this item plays.
    pub duration_seconds: u64,
    /// Metadata of the referenced content, when resolvable.
    pub content: Option<ContentMeta>,
}

impl PlaylistItem {
    /// Creates an item with the given play duration and no content metadata.
    pub fn new(duration_seconds: u64) -> Self {
        Self {
            duration_seconds,
            content: None,
        }
    }

    /// Attaches content metadata.
    pub fn with_content(mut self, content: ContentMeta) -> Self {
        self.content = Some(content);
        self
    }
}
