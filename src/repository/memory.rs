//! In-memory asset repository
//!
//! Holds a fixed catalog and answers queries by filtering it. Used by the
//! command line frontend (catalog loaded from a JSON file) and by tests.
//! Queries resolve immediately.

use super::{AssetQuery, AssetRepository, RepositoryError};
use crate::asset::Asset;
use std::fs;
use std::path::Path;

/// Repository over an in-memory asset catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    assets: Vec<Asset>,
}

impl InMemoryRepository {
    /// Create a repository over `assets`, preserving their order
    #[must_use]
    pub const fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// Parse a catalog from a JSON array of assets
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Parse` if the JSON is not a list of assets.
    pub fn from_json_str(json: &str) -> Result<Self, RepositoryError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be read and
    /// `RepositoryError::Parse` if its content is not a list of assets.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref())?;
        let repository = Self::from_json_str(&content)?;
        log::debug!(
            "Loaded {} assets from {}",
            repository.len(),
            path.as_ref().display()
        );
        Ok(repository)
    }

    /// Number of assets in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Synchronous form of [`AssetRepository::query`]
    #[must_use]
    pub fn matching(&self, query: &AssetQuery) -> Vec<Asset> {
        let needle = query.search_term.trim().to_lowercase();

        self.assets
            .iter()
            .filter(|asset| matches_term(asset, &needle))
            .filter(|asset| query.media_type_filter.matches(asset.kind()))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring match over filename and label
fn matches_term(asset: &Asset, needle: &str) -> bool {
    needle.is_empty()
        || asset.filename.to_lowercase().contains(needle)
        || asset.label.to_lowercase().contains(needle)
}

impl AssetRepository for InMemoryRepository {
    async fn query(&self, query: &AssetQuery) -> Result<Vec<Asset>, RepositoryError> {
        Ok(self.matching(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MediaTypeFilter;
    use crate::testing::{TempCatalog, ids, sample_catalog};
    use futures::executor::block_on;

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let repo = InMemoryRepository::new(sample_catalog());
        let result = block_on(repo.query(&AssetQuery::default())).unwrap();

        assert_eq!(result.len(), repo.len());
        assert_eq!(ids(&result), ids(&sample_catalog()));
    }

    #[test]
    fn test_search_term_matches_filename_or_label() {
        let repo = InMemoryRepository::new(sample_catalog());

        let by_filename = repo.matching(&AssetQuery::new("beach", MediaTypeFilter::All));
        assert_eq!(ids(&by_filename), vec!["img-beach"]);

        let by_label = repo.matching(&AssetQuery::new("Interview", MediaTypeFilter::All));
        assert_eq!(ids(&by_label), vec!["vid-interview"]);
    }

    #[test]
    fn test_search_term_is_case_insensitive_and_trimmed() {
        let repo = InMemoryRepository::new(sample_catalog());
        let result = repo.matching(&AssetQuery::new("  BEACH ", MediaTypeFilter::All));
        assert_eq!(ids(&result), vec!["img-beach"]);
    }

    #[test]
    fn test_term_and_filter_combine_with_and() {
        let repo = InMemoryRepository::new(sample_catalog());

        let images = repo.matching(&AssetQuery::new("", MediaTypeFilter::Image));
        assert!(images.iter().all(|a| a.file.media_type.starts_with("image/")));
        assert_eq!(images.len(), 2);

        let none = repo.matching(&AssetQuery::new("beach", MediaTypeFilter::Audio));
        assert!(none.is_empty());
    }

    #[test]
    fn test_document_filter() {
        let repo = InMemoryRepository::new(sample_catalog());
        let documents = repo.matching(&AssetQuery::new("", MediaTypeFilter::Document));
        assert_eq!(ids(&documents), vec!["doc-report"]);
    }

    #[test]
    fn test_from_json_file() {
        let catalog = TempCatalog::new(&sample_catalog());

        let repo = InMemoryRepository::from_json_file(catalog.path()).unwrap();

        assert_eq!(repo.len(), sample_catalog().len());
        assert!(!repo.is_empty());
        let result = block_on(repo.query(&AssetQuery::default())).unwrap();
        assert_eq!(result, sample_catalog());
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = InMemoryRepository::from_json_file("does/not/exist.json");
        assert!(matches!(result, Err(RepositoryError::Io(_))));
    }

    #[test]
    fn test_from_json_str_invalid() {
        let result = InMemoryRepository::from_json_str("{\"not\": \"a list\"}");
        assert!(matches!(result, Err(RepositoryError::Parse(_))));
    }
}
