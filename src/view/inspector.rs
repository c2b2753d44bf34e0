//! Side panel projections for the current selection
//!
//! Both panels are absent when nothing is selected. Neither assumes the
//! selected asset belongs to a particular media class; the icon comes from
//! classifying its MIME type.

use crate::asset::IptcProperty;
use crate::session::MediaUi;

pub const SELECTION_HEADLINE: &str = "Selected asset";
pub const IPTC_HEADLINE: &str = "IPTC Metadata";

/// "Selected asset" panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSelection {
    pub label: String,
    pub filename: String,
    pub icon: &'static str,
}

/// IPTC metadata panel, in backend order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IptcPanel {
    pub properties: Vec<IptcProperty>,
}

#[must_use]
pub fn current_selection(ui: &MediaUi) -> Option<CurrentSelection> {
    ui.selected_asset().map(|asset| CurrentSelection {
        label: asset.label.clone(),
        filename: asset.filename.clone(),
        icon: asset.kind().icon(),
    })
}

/// IPTC panel, or `None` when nothing is selected or it has no IPTC data
#[must_use]
pub fn iptc_panel(ui: &MediaUi) -> Option<IptcPanel> {
    let asset = ui.selected_asset()?;
    if asset.iptc_properties.is_empty() {
        return None;
    }
    Some(IptcPanel {
        properties: asset.iptc_properties.clone(),
    })
}
