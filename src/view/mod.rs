//! View adapters
//!
//! Pure, read-only projections of a [`MediaUi`](crate::session::MediaUi)
//! into renderable rows, cards and panels. Nothing here owns or mutates
//! state; views call back into `MediaUi` for every change.
//!
//! - `list`: table rows for the list layout
//! - `thumbnail`: cards for the grid layout
//! - `inspector`: current selection and IPTC metadata panels
//! - `filter`: type filter options
//! - `render`: plain text rendering for the command line

pub mod filter;
pub mod inspector;
pub mod list;
pub mod render;
pub mod thumbnail;

pub use filter::{FilterOption, type_filter_options};
pub use inspector::{CurrentSelection, IptcPanel, current_selection, iptc_panel};
pub use list::{ListRow, list_view};
pub use thumbnail::{CardImage, ThumbnailCard, thumbnail_view};

use crate::session::MediaUi;
use crate::store::LoadStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown for a successful, empty collection
pub const NO_ASSETS_FOUND: &str = "No assets found";

/// Grid layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Table with one row per asset
    #[default]
    List,
    /// Grid of thumbnail cards
    Thumbnail,
}

impl ViewMode {
    /// The other layout
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::List => Self::Thumbnail,
            Self::Thumbnail => Self::List,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Thumbnail => "thumbnail",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Date format used when none is configured or the configured one is invalid
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formatting options shared by the projections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// chrono format string for last-modified dates (rendered in UTC)
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Message a collection view shows instead of, or above, its items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The latest reload succeeded with no results
    NoAssets,

    /// The latest reload failed; items are the last good collection
    LoadFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAssets => f.write_str(NO_ASSETS_FOUND),
            Self::LoadFailed(message) => write!(f, "Failed to load assets: {message}"),
        }
    }
}

/// A projected collection view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl<T> Listing<T> {
    /// Project every asset of `ui` through `project`
    pub(crate) fn project(ui: &MediaUi, project: impl Fn(&crate::asset::Asset) -> T) -> Self {
        Self {
            items: ui.assets().iter().map(project).collect(),
            loading: ui.loading(),
            notice: notice(ui),
        }
    }
}

/// Empty and failed collections are told apart: a failure always wins, an
/// empty collection only counts once something was loaded.
fn notice(ui: &MediaUi) -> Option<Notice> {
    match ui.status() {
        LoadStatus::Failed(message) => Some(Notice::LoadFailed(message.clone())),
        LoadStatus::Loaded if ui.assets().is_empty() => Some(Notice::NoAssets),
        LoadStatus::Loaded | LoadStatus::NotLoaded => None,
    }
}
