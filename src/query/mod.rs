//! Query state: the user's current filter intent
//!
//! A pure state holder for the search term and the media type filter. It
//! performs no I/O; the [`MediaUi`](crate::session::MediaUi) turns every
//! successful mutation into a collection reload.

pub mod error;

pub use error::InvalidFilterError;

use crate::asset::MediaKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media type filter as chosen in the type filter box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MediaTypeFilter {
    /// No filtering (`""`)
    #[default]
    All,
    Video,
    Audio,
    Image,
    Document,
}

impl MediaTypeFilter {
    /// Every filter value, in type filter display order
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Video,
        Self::Audio,
        Self::Image,
        Self::Document,
    ];

    /// Wire value sent to the repository (`""` for [`MediaTypeFilter::All`])
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Document => "document",
        }
    }

    /// Whether an asset of the given kind passes this filter
    #[must_use]
    pub const fn matches(&self, kind: MediaKind) -> bool {
        matches!(
            (self, kind),
            (Self::All, _)
                | (Self::Video, MediaKind::Video)
                | (Self::Audio, MediaKind::Audio)
                | (Self::Image, MediaKind::Image)
                | (Self::Document, MediaKind::Document)
        )
    }
}

impl fmt::Display for MediaTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaTypeFilter {
    type Err = InvalidFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == value)
            .ok_or_else(|| InvalidFilterError::new(value))
    }
}

impl TryFrom<String> for MediaTypeFilter {
    type Error = InvalidFilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MediaTypeFilter> for String {
    fn from(filter: MediaTypeFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Search term and media type filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    media_type_filter: MediaTypeFilter,
}

impl QueryState {
    /// Create a query state with defaults (empty term, all media types)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search term
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current media type filter
    #[must_use]
    pub const fn media_type_filter(&self) -> MediaTypeFilter {
        self.media_type_filter
    }

    /// Replace the search term unconditionally
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Set the media type filter from its wire value
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilterError` if `value` is not one of the accepted
    /// filter values. The current filter is left unchanged in that case.
    pub fn set_media_type_filter(&mut self, value: &str) -> Result<(), InvalidFilterError> {
        self.media_type_filter = value.parse()?;
        Ok(())
    }

    /// Set an already validated filter
    pub const fn set_filter(&mut self, filter: MediaTypeFilter) {
        self.media_type_filter = filter;
    }

    /// Back to defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
