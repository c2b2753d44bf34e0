//! List layout projection

use super::{DEFAULT_DATE_FORMAT, DisplayOptions, Listing};
use crate::asset::{Asset, AssetId};
use crate::session::MediaUi;
use byte_unit::{Byte, UnitType};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Column headers of the list layout
pub const LIST_HEADERS: [&str; 4] = ["Name", "Last Modified", "File size", "Type"];

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: AssetId,
    pub icon: &'static str,
    pub label: String,
    pub filename: String,
    pub last_modified: String,
    pub file_size: String,
    pub media_type: String,
    pub is_selected: bool,
}

impl ListRow {
    fn from_asset(asset: &Asset, ui: &MediaUi, options: &DisplayOptions) -> Self {
        Self {
            id: asset.id.clone(),
            icon: asset.kind().icon(),
            label: asset.label.clone(),
            filename: asset.filename.clone(),
            last_modified: format_date(&asset.last_modified, &options.date_format),
            file_size: format_file_size(asset.file.size),
            media_type: asset.file.media_type.clone(),
            is_selected: ui.is_selected(&asset.id),
        }
    }
}

/// Human readable size in binary units
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    format!("{adjusted:.1}")
}

/// Format `date` with a chrono format string
///
/// Falls back to the default format if `format` contains an invalid
/// specifier.
#[must_use]
pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_ok() {
        return out;
    }
    log::warn!("Invalid date format {format:?}, using {DEFAULT_DATE_FORMAT:?}");
    date.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Rows for the list layout
#[must_use]
pub fn list_view(ui: &MediaUi, options: &DisplayOptions) -> Listing<ListRow> {
    Listing::project(ui, |asset| ListRow::from_asset(asset, ui, options))
}
