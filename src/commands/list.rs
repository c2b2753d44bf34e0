//! List command - render the assets matching a query

use super::load;
use crate::{
    MediaUiError,
    asset::AssetId,
    cli::ListParams,
    repository::AssetRepository,
    session::MediaUi,
    view::{self, DisplayOptions, ViewMode, render as text},
};

type Result<T> = std::result::Result<T, MediaUiError>;

/// Execute the list command
///
/// # Errors
///
/// Returns `MediaUiError::InvalidFilter` if the type filter is not one of
/// the accepted values.
pub fn execute<R: AssetRepository>(
    repository: &R,
    params: &ListParams,
    default_view: ViewMode,
    options: &DisplayOptions,
    quiet: bool,
) -> Result<()> {
    print!("{}", render(repository, params, default_view, options, quiet)?);
    Ok(())
}

/// Build the session for `params` and render it
///
/// Every query change issues a reload; only the last one is fetched; the
/// earlier ones are superseded before they ever reach the repository.
///
/// # Errors
///
/// Returns `MediaUiError::InvalidFilter` if the type filter is not one of
/// the accepted values.
pub fn render<R: AssetRepository>(
    repository: &R,
    params: &ListParams,
    default_view: ViewMode,
    options: &DisplayOptions,
    quiet: bool,
) -> Result<String> {
    let mut ui = MediaUi::with_view_mode(params.view.unwrap_or(default_view));

    let mut request = None;
    if let Some(term) = &params.search {
        request = Some(ui.set_search_term(term.as_str()));
    }
    if let Some(media_type) = &params.media_type {
        request = Some(ui.set_media_type_filter(media_type)?);
    }
    let request = request.unwrap_or_else(|| ui.reload());
    load(&mut ui, repository, request);

    if let Some(id) = &params.select {
        ui.select(&AssetId::new(id.as_str()));
    }

    let mut out = String::new();
    if !quiet {
        out.push_str(&summary(&ui));
    }
    match ui.view_mode() {
        ViewMode::List => out.push_str(&text::render_list(&view::list_view(&ui, options))),
        ViewMode::Thumbnail => out.push_str(&text::render_thumbnails(&view::thumbnail_view(&ui))),
    }

    let inspector = text::render_inspector(
        view::current_selection(&ui).as_ref(),
        view::iptc_panel(&ui).as_ref(),
    );
    if !inspector.is_empty() {
        out.push('\n');
        out.push_str(&inspector);
    }
    Ok(out)
}

fn summary(ui: &MediaUi) -> String {
    let filter = match ui.media_type_filter().as_str() {
        "" => "all",
        other => other,
    };
    let count = ui.assets().len();
    let noun = if count == 1 { "asset" } else { "assets" };
    format!(
        "{count} {noun} (search: {:?}, type: {filter})\n",
        ui.search_term()
    )
}
