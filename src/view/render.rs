//! Plain text rendering of the view projections
//!
//! Used by the command line frontend. Output is coloured with `colored`,
//! which honours `NO_COLOR` and non-terminal stdout.

use super::filter::FilterOption;
use super::inspector::{CurrentSelection, IPTC_HEADLINE, IptcPanel, SELECTION_HEADLINE};
use super::list::{LIST_HEADERS, ListRow};
use super::thumbnail::{CardImage, ThumbnailCard};
use super::{Listing, Notice};
use colored::Colorize;
use std::fmt::Write;

const SELECTED_MARKER: &str = "▶";

/// Render the list layout as an aligned table
#[must_use]
pub fn render_list(listing: &Listing<ListRow>) -> String {
    let mut out = String::new();
    render_status(&mut out, listing);
    if listing.items.is_empty() {
        return out;
    }

    let name_width = column_width(
        LIST_HEADERS[0],
        listing.items.iter().map(|r| r.label.chars().count()),
    );
    let date_width = column_width(
        LIST_HEADERS[1],
        listing.items.iter().map(|r| r.last_modified.chars().count()),
    );
    let size_width = column_width(
        LIST_HEADERS[2],
        listing.items.iter().map(|r| r.file_size.chars().count()),
    );

    let header = format!(
        "  {:<name_width$}  {:<date_width$}  {:<size_width$}  {}",
        LIST_HEADERS[0], LIST_HEADERS[1], LIST_HEADERS[2], LIST_HEADERS[3]
    );
    let _ = writeln!(out, "{}", header.bold());

    for row in &listing.items {
        let line = format!(
            "{:<name_width$}  {:<date_width$}  {:<size_width$}  {}",
            row.label, row.last_modified, row.file_size, row.media_type
        );
        if row.is_selected {
            let _ = writeln!(out, "{} {}", SELECTED_MARKER.green(), line.green().bold());
        } else {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

/// Render the thumbnail layout, one card per line
#[must_use]
pub fn render_thumbnails(listing: &Listing<ThumbnailCard>) -> String {
    let mut out = String::new();
    render_status(&mut out, listing);

    for card in &listing.items {
        let image = match &card.image {
            CardImage::Thumbnail(url) => url.clone(),
            CardImage::Icon(icon) => format!("[{icon}]"),
        };
        let label = if card.is_selected {
            card.label.green().bold().to_string()
        } else {
            card.label.clone()
        };
        let marker = if card.is_selected { SELECTED_MARKER } else { " " };
        let _ = writeln!(out, "{marker} {label}  {}", image.dimmed());
    }
    out
}

/// Render the side panels for the current selection
#[must_use]
pub fn render_inspector(selection: Option<&CurrentSelection>, iptc: Option<&IptcPanel>) -> String {
    let mut out = String::new();

    if let Some(selection) = selection {
        let _ = writeln!(out, "{}", SELECTION_HEADLINE.bold());
        let _ = writeln!(
            out,
            "  [{}] {} ({})",
            selection.icon, selection.label, selection.filename
        );
    }

    if let Some(iptc) = iptc {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", IPTC_HEADLINE.bold());
        let width = iptc
            .properties
            .iter()
            .map(|p| p.property_name.chars().count())
            .max()
            .unwrap_or_default();
        for property in &iptc.properties {
            let _ = writeln!(
                out,
                "  {:<width$}  {}",
                property.property_name,
                property.value.dimmed()
            );
        }
    }
    out
}

/// Render type filter options, marking the active one
#[must_use]
pub fn render_filter_options(options: &[FilterOption]) -> String {
    let mut out = String::new();
    for option in options {
        let marker = if option.is_active { SELECTED_MARKER } else { " " };
        let value = if option.value().is_empty() {
            "\"\"".to_string()
        } else {
            option.value().to_string()
        };
        let _ = writeln!(
            out,
            "{marker} {:<10} {:<10} [{}]",
            value,
            option.label,
            option.icon
        );
    }
    out
}

fn render_status<T>(out: &mut String, listing: &Listing<T>) {
    if listing.loading {
        let _ = writeln!(out, "{}", "Loading...".dimmed());
    }
    match &listing.notice {
        Some(notice @ Notice::LoadFailed(_)) => {
            let _ = writeln!(out, "{}", notice.to_string().red());
        }
        Some(notice @ Notice::NoAssets) => {
            let _ = writeln!(out, "{notice}");
        }
        None => {}
    }
}

fn column_width(header: &str, lengths: impl Iterator<Item = usize>) -> usize {
    lengths.max().unwrap_or_default().max(header.chars().count())
}
