//! Show command - render the side panels for one asset

use super::load;
use crate::{
    MediaUiError,
    asset::AssetId,
    repository::AssetRepository,
    selection::SelectionError,
    session::MediaUi,
    view::{self, render as text},
};

type Result<T> = std::result::Result<T, MediaUiError>;

/// Execute the show command
///
/// # Errors
///
/// Returns `MediaUiError::Selection` if no asset has this id, or
/// `MediaUiError::Load` if the repository query failed.
pub fn execute<R: AssetRepository>(repository: &R, id: &str) -> Result<()> {
    print!("{}", render(repository, id)?);
    Ok(())
}

/// Load the full collection, select `id` and render its panels
///
/// # Errors
///
/// Returns `MediaUiError::Selection` if no asset has this id, or
/// `MediaUiError::Load` if the repository query failed.
pub fn render<R: AssetRepository>(repository: &R, id: &str) -> Result<String> {
    let mut ui = MediaUi::new();
    let request = ui.reload();
    load(&mut ui, repository, request);

    if let Some(message) = ui.error() {
        return Err(MediaUiError::Load(message.to_string()));
    }

    let id = AssetId::new(id);
    if !ui.select(&id) {
        return Err(SelectionError::NotFound(id).into());
    }

    Ok(text::render_inspector(
        view::current_selection(&ui).as_ref(),
        view::iptc_panel(&ui).as_ref(),
    ))
}
