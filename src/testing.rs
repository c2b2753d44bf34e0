//! Testing utilities for media-browser
//!
//! Fixture builders for assets and catalogs, a scripted repository whose
//! answers are decided by the test, and a temporary catalog file guard.
//!
//! Only available when compiled with `cfg(test)`.

use crate::asset::Asset;
use crate::repository::{AssetQuery, AssetRepository, RepositoryError};
use chrono::{TimeZone, Utc};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a minimal asset with the given id and MIME type
///
/// The filename and label are derived from the id.
#[must_use]
pub fn asset(id: &str, media_type: &str) -> Asset {
    Asset::new(
        id,
        format!("{id}.bin"),
        id.to_uppercase(),
        media_type,
        1024,
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
    )
}

/// A small mixed catalog covering every media kind
///
/// | id | kind |
/// |---|---|
/// | `img-beach` | image, with thumbnail and IPTC data |
/// | `img-forest` | image |
/// | `vid-interview` | video ("Interview" only in the label) |
/// | `aud-theme` | audio |
/// | `doc-report` | document (PDF) |
/// | `font-brand` | other |
#[must_use]
pub fn sample_catalog() -> Vec<Asset> {
    let date = |day| Utc.with_ymd_and_hms(2024, 3, day, 10, 15, 0).unwrap();

    vec![
        Asset::new("img-beach", "beach.jpg", "Beach at dawn", "image/jpeg", 2_457_600, date(1))
            .with_thumbnail("https://media.example.com/thumbs/beach.jpg")
            .with_iptc("Title", "Beach at dawn")
            .with_iptc("Creator", "Jane Doe")
            .with_iptc("Copyright Notice", "CC BY 4.0"),
        Asset::new("img-forest", "forest.png", "Forest", "image/png", 512_000, date(2)),
        Asset::new(
            "vid-interview",
            "artist-talk.mp4",
            "Interview with the artist",
            "video/mp4",
            104_857_600,
            date(3),
        ),
        Asset::new("aud-theme", "theme.mp3", "Theme song", "audio/mpeg", 4_194_304, date(4)),
        Asset::new("doc-report", "report.pdf", "Annual report", "application/pdf", 350_000, date(5)),
        Asset::new("font-brand", "brand.woff2", "Brand font", "font/woff2", 48_000, date(6)),
    ]
}

/// Ids of `assets`, in order
#[must_use]
pub fn ids(assets: &[Asset]) -> Vec<&str> {
    assets.iter().map(|asset| asset.id.as_str()).collect()
}

/// Repository that answers with pre-scripted responses, in order
///
/// Records every query it receives. Once the script is exhausted it answers
/// with an empty collection.
#[derive(Debug, Default)]
pub struct ScriptedRepository {
    responses: RefCell<VecDeque<Result<Vec<Asset>, RepositoryError>>>,
    queries: RefCell<Vec<AssetQuery>>,
}

impl ScriptedRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    #[must_use]
    pub fn then_ok(self, assets: Vec<Asset>) -> Self {
        self.responses.borrow_mut().push_back(Ok(assets));
        self
    }

    /// Queue a failed response
    #[must_use]
    pub fn then_err(self, error: RepositoryError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    /// Queries received so far
    #[must_use]
    pub fn queries(&self) -> Vec<AssetQuery> {
        self.queries.borrow().clone()
    }
}

impl AssetRepository for ScriptedRepository {
    async fn query(&self, query: &AssetQuery) -> Result<Vec<Asset>, RepositoryError> {
        self.queries.borrow_mut().push(query.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Catalog JSON file in a temporary directory, removed on drop
pub struct TempCatalog {
    _dir: TempDir,
    path: PathBuf,
}

impl TempCatalog {
    /// Write `assets` as a JSON catalog
    ///
    /// # Panics
    /// Panics if the temporary directory or file cannot be created.
    #[must_use]
    pub fn new(assets: &[Asset]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string_pretty(assets).expect("Failed to serialize catalog");
        std::fs::write(&path, json).expect("Failed to write catalog");
        Self { _dir: dir, path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::MediaKind;
    use futures::executor::block_on;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_covers_every_kind() {
        let kinds: HashSet<MediaKind> = sample_catalog().iter().map(Asset::kind).collect();
        assert_eq!(kinds.len(), 5);
    }

    #[test]
    fn test_sample_catalog_ids_are_unique() {
        let catalog = sample_catalog();
        let unique: HashSet<&str> = ids(&catalog).into_iter().collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn test_scripted_repository_answers_in_order() {
        let repo = ScriptedRepository::new()
            .then_ok(vec![asset("a1", "image/png")])
            .then_err(RepositoryError::Timeout);

        let first = block_on(repo.query(&AssetQuery::default()));
        let second = block_on(repo.query(&AssetQuery::default()));
        let third = block_on(repo.query(&AssetQuery::default()));

        assert_eq!(first.unwrap().len(), 1);
        assert!(matches!(second, Err(RepositoryError::Timeout)));
        assert!(third.unwrap().is_empty());
        assert_eq!(repo.queries().len(), 3);
    }

    #[test]
    fn test_temp_catalog_roundtrip() {
        let catalog = TempCatalog::new(&sample_catalog());
        let content = std::fs::read_to_string(catalog.path()).unwrap();
        let parsed: Vec<Asset> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, sample_catalog());
    }

    #[test]
    fn test_temp_catalog_cleanup() {
        let path = {
            let catalog = TempCatalog::new(&[]);
            assert!(catalog.path().exists());
            catalog.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
