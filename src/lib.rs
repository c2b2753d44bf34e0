//! media-browser - state and view core of a media asset browser
//!
//! This library holds the shared state behind a media browser (search term,
//! type filter, asset collection, selection, grid layout mode) and derives
//! what each view renders from it. Collection reloads are guarded by a
//! generation counter so that out-of-order responses never overwrite newer
//! state.

use thiserror::Error;

pub mod asset;
pub mod cli;
pub mod commands;
pub mod config;
pub mod query;
pub mod repository;
pub mod selection;
pub mod session;
pub mod store;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use asset::{Asset, AssetId, MediaKind, classify};
pub use query::{InvalidFilterError, MediaTypeFilter, QueryState};
pub use repository::{AssetQuery, AssetRepository, InMemoryRepository, RepositoryError};
pub use selection::{Selection, SelectionError};
pub use session::MediaUi;
pub use store::{AssetCollectionStore, CommitOutcome, LoadStatus, ReloadRequest, ReloadResponse};
pub use view::ViewMode;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MediaUiError {
    /// Repository error
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    /// Rejected media type filter
    #[error(transparent)]
    InvalidFilter(#[from] InvalidFilterError),
    /// Selection of an asset outside the collection
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// Reload failed; the message comes from the repository
    #[error("Failed to load assets: {0}")]
    Load(String),
    /// No catalog given on the command line or in the config
    #[error("No asset catalog configured (use --catalog or set `catalog` in the config file)")]
    NoCatalog,
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
