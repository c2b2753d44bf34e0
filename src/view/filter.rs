//! Type filter options

use crate::query::MediaTypeFilter;

/// One entry of the type filter box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: MediaTypeFilter,
    pub label: &'static str,
    pub icon: &'static str,
    pub is_active: bool,
}

impl FilterOption {
    /// Wire value passed to `set_media_type_filter`
    #[must_use]
    pub const fn value(&self) -> &'static str {
        self.filter.as_str()
    }
}

const fn describe(filter: MediaTypeFilter) -> (&'static str, &'static str) {
    match filter {
        MediaTypeFilter::All => ("All", "photo-video"),
        MediaTypeFilter::Video => ("Video", "file-video"),
        MediaTypeFilter::Audio => ("Audio", "file-audio"),
        MediaTypeFilter::Image => ("Images", "file-image"),
        MediaTypeFilter::Document => ("Document", "file"),
    }
}

/// All filter options in display order, marking the active one
#[must_use]
pub fn type_filter_options(active: MediaTypeFilter) -> Vec<FilterOption> {
    MediaTypeFilter::ALL
        .into_iter()
        .map(|filter| {
            let (label, icon) = describe(filter);
            FilterOption {
                filter,
                label,
                icon,
                is_active: filter == active,
            }
        })
        .collect()
}
