//! Asset collection store
//!
//! Owns the current result set and the selection, and guards every commit
//! with a generation counter so that only the most recently issued reload
//! can ever land.
//!
//! # Reload lifecycle
//!
//! ```text
//! reload(query) ─→ ReloadRequest { generation: n }   (loading = true)
//!                       │
//!                       ↓ fetch(repo).await           (only suspension point)
//!                  ReloadResponse { generation: n }
//!                       │
//!                       ↓ commit(response)
//!     n == pending? ─ no ─→ Discarded (stale, superseded by a newer reload)
//!          │ yes
//!          ├─ Ok(assets) → replace collection, reconcile selection
//!          └─ Err(e)     → keep stale collection, flag error, keep selection
//! ```
//!
//! While a reload is in flight the previous collection stays visible.

use crate::asset::{Asset, AssetId};
use crate::repository::{AssetQuery, AssetRepository, RepositoryError};
use crate::selection::{Selection, SelectionError};

/// An issued reload, waiting to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a reload does nothing until it is fetched and committed"]
pub struct ReloadRequest {
    generation: u64,
    query: AssetQuery,
}

impl ReloadRequest {
    /// Generation this request was issued under
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Query captured at issue time
    pub const fn query(&self) -> &AssetQuery {
        &self.query
    }

    /// Run the query against `repository`
    pub async fn fetch<R: AssetRepository>(self, repository: &R) -> ReloadResponse {
        let result = repository.query(&self.query).await;
        self.respond(result)
    }

    /// Pair an externally obtained result with this request's generation
    pub fn respond(self, result: Result<Vec<Asset>, RepositoryError>) -> ReloadResponse {
        ReloadResponse {
            generation: self.generation,
            result,
        }
    }
}

/// Result of a fetched reload, ready to commit
#[derive(Debug)]
pub struct ReloadResponse {
    generation: u64,
    result: Result<Vec<Asset>, RepositoryError>,
}

impl ReloadResponse {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Load state of the collection, as rendered by the views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing committed yet
    #[default]
    NotLoaded,

    /// Last reload succeeded (the collection may be empty)
    Loaded,

    /// Last reload failed; the collection is the last good one
    Failed(String),
}

/// What `commit` did with a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Collection replaced
    Committed {
        count: usize,
        selection_cleared: bool,
    },

    /// Latest reload failed; stale collection retained
    Failed(String),

    /// Response belonged to a superseded reload and was dropped
    Discarded,
}

/// Current asset collection plus selection
#[derive(Debug, Default)]
pub struct AssetCollectionStore {
    assets: Vec<Asset>,
    selection: Selection,
    status: LoadStatus,
    generation: u64,
    pending: Option<u64>,
}

impl AssetCollectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current collection, in repository order
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Whether a reload is in flight
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Error message of the last reload, if it failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            LoadStatus::NotLoaded | LoadStatus::Loaded => None,
        }
    }

    /// Generation of the most recently issued reload
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| &asset.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &AssetId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected asset as found in the current collection
    #[must_use]
    pub fn selected_asset(&self) -> Option<&Asset> {
        self.selection.resolve(&self.assets)
    }

    /// Issue a reload for `query`, superseding any reload in flight
    ///
    /// Safe to call redundantly: every call supersedes the previous one, so
    /// at most the latest response is ever committed.
    pub fn reload(&mut self, query: AssetQuery) -> ReloadRequest {
        self.generation += 1;
        if let Some(superseded) = self.pending.replace(self.generation) {
            log::debug!(
                "Reload generation {superseded} superseded by {}",
                self.generation
            );
        }
        log::debug!(
            "Issuing reload generation {} (term: {:?}, filter: {:?})",
            self.generation,
            query.search_term,
            query.media_type_filter.as_str()
        );

        ReloadRequest {
            generation: self.generation,
            query,
        }
    }

    /// Commit a fetched response if it belongs to the latest reload
    pub fn commit(&mut self, response: ReloadResponse) -> CommitOutcome {
        if self.pending != Some(response.generation) {
            log::debug!(
                "Discarding stale response for generation {} (current: {})",
                response.generation,
                self.generation
            );
            return CommitOutcome::Discarded;
        }
        self.pending = None;

        match response.result {
            Ok(assets) => {
                self.assets = assets;
                self.status = LoadStatus::Loaded;
                let selection_cleared = self.selection.reconcile(&self.assets);
                log::info!(
                    "Committed {} assets for generation {}",
                    self.assets.len(),
                    response.generation
                );
                CommitOutcome::Committed {
                    count: self.assets.len(),
                    selection_cleared,
                }
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!(
                    "Reload generation {} failed, keeping {} stale assets: {message}",
                    response.generation,
                    self.assets.len()
                );
                self.status = LoadStatus::Failed(message.clone());
                CommitOutcome::Failed(message)
            }
        }
    }

    /// Select an asset of the current collection
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::NotFound` if `id` is not in the collection.
    pub fn select(&mut self, id: &AssetId) -> Result<(), SelectionError> {
        self.selection.select(id, &self.assets)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MediaTypeFilter;
    use crate::repository::InMemoryRepository;
    use crate::testing::{asset, ids, sample_catalog};
    use futures::executor::block_on;

    fn query(term: &str) -> AssetQuery {
        AssetQuery::new(term, MediaTypeFilter::All)
    }

    fn store_with(assets: Vec<Asset>) -> AssetCollectionStore {
        let mut store = AssetCollectionStore::new();
        let request = store.reload(query(""));
        store.commit(request.respond(Ok(assets)));
        store
    }

    #[test]
    fn test_new_store_is_empty_and_idle() {
        let store = AssetCollectionStore::new();
        assert!(store.assets().is_empty());
        assert!(!store.loading());
        assert_eq!(store.status(), &LoadStatus::NotLoaded);
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn test_reload_sets_loading_and_keeps_previous_collection() {
        let mut store = store_with(vec![asset("a1", "image/png")]);

        let _request = store.reload(query("x"));

        assert!(store.loading());
        assert_eq!(ids(store.assets()), vec!["a1"]);
    }

    #[test]
    fn test_commit_replaces_collection() {
        let mut store = AssetCollectionStore::new();
        let request = store.reload(query(""));

        let outcome = store.commit(request.respond(Ok(vec![
            asset("a1", "image/png"),
            asset("a2", "video/mp4"),
        ])));

        assert_eq!(
            outcome,
            CommitOutcome::Committed {
                count: 2,
                selection_cleared: false
            }
        );
        assert_eq!(ids(store.assets()), vec!["a1", "a2"]);
        assert!(!store.loading());
        assert_eq!(store.status(), &LoadStatus::Loaded);
    }

    #[test]
    fn test_stale_response_arriving_late_is_discarded() {
        let mut store = AssetCollectionStore::new();
        let slow = store.reload(query("be"));
        let fast = store.reload(query("beach"));

        let fast_outcome = store.commit(fast.respond(Ok(vec![asset("beach", "image/jpeg")])));
        let slow_outcome = store.commit(slow.respond(Ok(vec![
            asset("beach", "image/jpeg"),
            asset("bees", "video/mp4"),
        ])));

        assert!(matches!(fast_outcome, CommitOutcome::Committed { count: 1, .. }));
        assert_eq!(slow_outcome, CommitOutcome::Discarded);
        assert_eq!(ids(store.assets()), vec!["beach"]);
    }

    #[test]
    fn test_superseded_response_arriving_first_is_discarded() {
        let mut store = AssetCollectionStore::new();
        let first = store.reload(query("a"));
        let second = store.reload(query("ab"));

        let outcome = store.commit(first.respond(Ok(vec![asset("a", "image/png")])));

        assert_eq!(outcome, CommitOutcome::Discarded);
        assert!(store.assets().is_empty());
        assert!(store.loading());

        store.commit(second.respond(Ok(vec![asset("ab", "image/png")])));
        assert_eq!(ids(store.assets()), vec!["ab"]);
        assert!(!store.loading());
    }

    #[test]
    fn test_redundant_reload_commits_once() {
        let mut store = AssetCollectionStore::new();
        let first = store.reload(query(""));
        let second = store.reload(query(""));
        let assets = vec![asset("a1", "image/png")];

        let outcomes = [
            store.commit(first.respond(Ok(assets.clone()))),
            store.commit(second.clone().respond(Ok(assets.clone()))),
            store.commit(second.respond(Ok(assets))),
        ];

        let committed = outcomes
            .iter()
            .filter(|o| matches!(o, CommitOutcome::Committed { .. }))
            .count();
        assert_eq!(committed, 1);
        assert_eq!(ids(store.assets()), vec!["a1"]);
    }

    #[test]
    fn test_reconcile_clears_selection_missing_from_new_collection() {
        let mut store = store_with(vec![asset("a1", "image/png"), asset("a2", "image/png")]);
        store.select(&AssetId::new("a1")).unwrap();

        let request = store.reload(query(""));
        let outcome = store.commit(request.respond(Ok(vec![
            asset("a2", "image/png"),
            asset("a3", "image/png"),
        ])));

        assert_eq!(
            outcome,
            CommitOutcome::Committed {
                count: 2,
                selection_cleared: true
            }
        );
        assert!(store.selected_asset().is_none());
    }

    #[test]
    fn test_reconcile_keeps_selection_present_in_new_collection() {
        let mut store = store_with(vec![asset("a1", "image/png"), asset("a2", "image/png")]);
        store.select(&AssetId::new("a2")).unwrap();

        let request = store.reload(query(""));
        store.commit(request.respond(Ok(vec![asset("a2", "image/png")])));

        assert_eq!(store.selected_asset().unwrap().id, AssetId::new("a2"));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let mut store = store_with(vec![asset("a1", "image/png")]);

        let request = store.reload(query("nothing"));
        store.commit(request.respond(Ok(Vec::new())));

        assert!(store.assets().is_empty());
        assert_eq!(store.status(), &LoadStatus::Loaded);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_failed_reload_keeps_stale_collection_and_selection() {
        let mut store = store_with(vec![asset("a1", "image/png"), asset("a2", "image/png")]);
        store.select(&AssetId::new("a1")).unwrap();

        let request = store.reload(query("x"));
        let outcome = store.commit(request.respond(Err(RepositoryError::Timeout)));

        assert_eq!(outcome, CommitOutcome::Failed("Request timed out".to_string()));
        assert_eq!(ids(store.assets()), vec!["a1", "a2"]);
        assert_eq!(store.error(), Some("Request timed out"));
        assert!(!store.loading());
        assert_eq!(store.selected_asset().unwrap().id, AssetId::new("a1"));
    }

    #[test]
    fn test_failure_does_not_block_next_reload() {
        let mut store = AssetCollectionStore::new();
        let failing = store.reload(query(""));
        store.commit(failing.respond(Err(RepositoryError::Backend("down".into()))));

        let retry = store.reload(query(""));
        store.commit(retry.respond(Ok(vec![asset("a1", "image/png")])));

        assert_eq!(store.status(), &LoadStatus::Loaded);
        assert_eq!(ids(store.assets()), vec!["a1"]);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut store = AssetCollectionStore::new();
        let old = store.reload(query("a"));
        let new = store.reload(query("b"));

        store.commit(new.respond(Ok(vec![asset("b", "image/png")])));
        let outcome = store.commit(old.respond(Err(RepositoryError::Timeout)));

        assert_eq!(outcome, CommitOutcome::Discarded);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_generation_is_monotonic() {
        let mut store = AssetCollectionStore::new();
        let generations: Vec<u64> = (0..5).map(|_| store.reload(query("")).generation()).collect();
        assert_eq!(generations, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fetch_against_repository() {
        let repository = InMemoryRepository::new(sample_catalog());
        let mut store = AssetCollectionStore::new();

        let request = store.reload(AssetQuery::new("", MediaTypeFilter::Audio));
        assert_eq!(request.query().media_type_filter, MediaTypeFilter::Audio);
        let response = block_on(request.fetch(&repository));
        store.commit(response);

        assert_eq!(ids(store.assets()), vec!["aud-theme"]);
    }

    #[test]
    fn test_select_unknown_leaves_selection() {
        let mut store = store_with(vec![asset("a1", "image/png")]);
        store.select(&AssetId::new("a1")).unwrap();

        assert!(store.select(&AssetId::new("nope")).is_err());
        assert!(store.selection().is_selected(&AssetId::new("a1")));

        store.clear_selection();
        assert!(store.selection().is_empty());
    }
}
