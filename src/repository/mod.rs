//! Asset repository boundary
//!
//! The repository is the backend that actually stores media files and their
//! metadata. The core only ever asks it one question: which assets match a
//! search term and a media type filter.
//!
//! - `AssetRepository`: the async query seam
//! - `memory`: in-memory implementation backed by a JSON catalog

pub mod error;
pub mod memory;

pub use error::RepositoryError;
pub use memory::InMemoryRepository;

use crate::asset::Asset;
use crate::query::{MediaTypeFilter, QueryState};

/// Parameters of a single repository query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetQuery {
    /// Free-text term matched against filename and label
    pub search_term: String,

    /// Media type restriction (`All` for none)
    pub media_type_filter: MediaTypeFilter,
}

impl AssetQuery {
    #[must_use]
    pub fn new(search_term: impl Into<String>, media_type_filter: MediaTypeFilter) -> Self {
        Self {
            search_term: search_term.into(),
            media_type_filter,
        }
    }
}

impl From<&QueryState> for AssetQuery {
    fn from(state: &QueryState) -> Self {
        Self::new(state.search_term(), state.media_type_filter())
    }
}

/// Source of assets for the collection store
///
/// Implementations combine both criteria with AND semantics: an asset must
/// match the search term and, unless the filter is `All`, the media type.
/// How the term matches (substring, fuzzy, full-text) is up to the backend.
#[allow(async_fn_in_trait)]
pub trait AssetRepository {
    /// Fetch the ordered assets matching `query`
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` on transport or backend failure, including
    /// timeouts the implementation chooses to enforce.
    async fn query(&self, query: &AssetQuery) -> Result<Vec<Asset>, RepositoryError>;
}
