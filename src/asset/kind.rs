//! Media-type classification
//!
//! Maps a MIME type string onto one of five display categories. The mapping
//! is total: every input, including garbage, yields exactly one category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display category of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    /// Backend convention, not a MIME top-level type: `application/*` and `text/*`
    Document,
    Other,
}

impl MediaKind {
    /// Lowercase name, matching the type filter values
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Document => "document",
            Self::Other => "other",
        }
    }

    /// Icon name used by list rows, thumbnail cards and the selection panel
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Image => "file-image",
            Self::Audio => "file-audio",
            Self::Video => "file-video",
            Self::Document | Self::Other => "file",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a MIME type by its top-level token (text before `/`)
///
/// Matching is case-insensitive and ignores surrounding whitespace and
/// parameters (`text/plain; charset=utf-8`). A string without a `/` or with
/// an empty subtype is malformed and classifies as [`MediaKind::Other`].
///
/// # Examples
///
/// ```
/// use media_browser::asset::{classify, MediaKind};
///
/// assert_eq!(classify("image/png"), MediaKind::Image);
/// assert_eq!(classify("application/pdf"), MediaKind::Document);
/// assert_eq!(classify("font/woff2"), MediaKind::Other);
/// assert_eq!(classify(""), MediaKind::Other);
/// ```
#[must_use]
pub fn classify(mime_type: &str) -> MediaKind {
    let essence = mime_type.split(';').next().unwrap_or_default().trim();

    let Some((top, sub)) = essence.split_once('/') else {
        return MediaKind::Other;
    };
    if sub.trim().is_empty() {
        return MediaKind::Other;
    }

    match top.trim().to_ascii_lowercase().as_str() {
        "image" => MediaKind::Image,
        "audio" => MediaKind::Audio,
        "video" => MediaKind::Video,
        "application" | "text" => MediaKind::Document,
        _ => MediaKind::Other,
    }
}
