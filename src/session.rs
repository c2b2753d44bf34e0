//! Media UI session: the single source of truth shared by all views
//!
//! `MediaUi` owns the query state, the collection store (including the
//! selection) and the grid layout mode. Views receive `&MediaUi` and read
//! from it; every mutation goes through the methods below.
//!
//! # Workflow
//!
//! ```text
//! set_search_term / set_media_type_filter / reload
//!     ↓ ReloadRequest (new generation, loading = true)
//! request.fetch(&repository).await
//!     ↓ ReloadResponse
//! complete_reload(response)
//!     ├─ latest generation → commit + reconcile selection
//!     └─ superseded        → discarded
//! ```
//!
//! `refresh` runs the whole cycle for callers that do not interleave
//! reloads.

use crate::asset::{Asset, AssetId};
use crate::query::{InvalidFilterError, MediaTypeFilter, QueryState};
use crate::repository::{AssetQuery, AssetRepository};
use crate::store::{AssetCollectionStore, CommitOutcome, LoadStatus, ReloadRequest, ReloadResponse};
use crate::view::ViewMode;

/// Shared media browser state
#[derive(Debug, Default)]
pub struct MediaUi {
    query: QueryState,
    store: AssetCollectionStore,
    view_mode: ViewMode,
}

impl MediaUi {
    /// Create a session with default query and list layout
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session starting in the given layout
    #[must_use]
    pub fn with_view_mode(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        self.store.assets()
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.store.loading()
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        self.store.status()
    }

    /// Message of the last failed reload
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.store.error()
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        self.query.search_term()
    }

    #[must_use]
    pub const fn media_type_filter(&self) -> MediaTypeFilter {
        self.query.media_type_filter()
    }

    /// The selected asset, always a member of [`assets`](Self::assets)
    #[must_use]
    pub fn selected_asset(&self) -> Option<&Asset> {
        self.store.selected_asset()
    }

    /// Whether `id` is the selected asset
    #[must_use]
    pub fn is_selected(&self, id: &AssetId) -> bool {
        self.store.selection().is_selected(id)
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub const fn store(&self) -> &AssetCollectionStore {
        &self.store
    }

    // ------------------------------------------------------------------
    // Query mutations
    // ------------------------------------------------------------------

    /// Replace the search term and reload
    pub fn set_search_term(&mut self, term: impl Into<String>) -> ReloadRequest {
        self.query.set_search_term(term);
        self.reload()
    }

    /// Set the media type filter from its wire value and reload
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilterError` for values outside the accepted set. No
    /// reload is issued and the filter keeps its previous value.
    pub fn set_media_type_filter(&mut self, value: &str) -> Result<ReloadRequest, InvalidFilterError> {
        self.query.set_media_type_filter(value)?;
        Ok(self.reload())
    }

    /// Set an already validated media type filter and reload
    pub fn set_filter(&mut self, filter: MediaTypeFilter) -> ReloadRequest {
        self.query.set_filter(filter);
        self.reload()
    }

    /// Reset search term and filter to defaults and reload
    pub fn reset_query(&mut self) -> ReloadRequest {
        self.query.reset();
        self.reload()
    }

    // ------------------------------------------------------------------
    // Collection
    // ------------------------------------------------------------------

    /// Issue a reload for the current query
    pub fn reload(&mut self) -> ReloadRequest {
        self.store.reload(AssetQuery::from(&self.query))
    }

    /// Commit a fetched response (dropped if superseded)
    pub fn complete_reload(&mut self, response: ReloadResponse) -> CommitOutcome {
        self.store.commit(response)
    }

    /// Reload, fetch from `repository` and commit in one go
    pub async fn refresh<R: AssetRepository>(&mut self, repository: &R) -> CommitOutcome {
        let request = self.reload();
        let response = request.fetch(repository).await;
        self.complete_reload(response)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Select an asset of the current collection
    ///
    /// Selecting an id that is not in view is a no-op; it is logged and
    /// never reported to the user. Returns whether the selection was set.
    pub fn select(&mut self, id: &AssetId) -> bool {
        match self.store.select(id) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Ignoring selection: {e}");
                false
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    pub const fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Switch between list and thumbnail layout
    pub const fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }
}
