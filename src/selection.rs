//! Selection controller
//!
//! Single-selection state machine with two states, `Empty` and
//! `Selected(id)`:
//!
//! ```text
//! Empty       --select(id), id in collection-->  Selected(id)
//! Selected(x) --select(id), id in collection-->  Selected(id)
//! Selected(x) --reconcile, x not in collection-> Empty
//! Selected(x) --clear-->                         Empty
//! any         --select(id), id not in collection-> unchanged
//! ```
//!
//! Invariant: after any operation completes, a selected id is present in
//! the collection the operation was given.

use crate::asset::{Asset, AssetId};
use thiserror::Error;

/// Selection errors
///
/// Internal and non-fatal: selecting something not in view is a timing or
/// programming error, logged by the caller and otherwise ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The requested asset is not part of the current collection
    #[error("Asset '{0}' is not in the current collection")]
    NotFound(AssetId),
}

/// Current selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    Selected(AssetId),
}

impl Selection {
    /// Id of the selected asset, if any
    #[must_use]
    pub const fn selected_id(&self) -> Option<&AssetId> {
        match self {
            Self::Empty => None,
            Self::Selected(id) => Some(id),
        }
    }

    /// Whether `id` is the selected asset
    #[must_use]
    pub fn is_selected(&self, id: &AssetId) -> bool {
        self.selected_id() == Some(id)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Select `id` if it is part of `collection`
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::NotFound` if no asset in `collection` has
    /// this id; the selection is left unchanged.
    pub fn select(&mut self, id: &AssetId, collection: &[Asset]) -> Result<(), SelectionError> {
        if !collection.iter().any(|asset| &asset.id == id) {
            return Err(SelectionError::NotFound(id.clone()));
        }
        *self = Self::Selected(id.clone());
        Ok(())
    }

    /// Clear the selection unconditionally
    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// Re-validate the selection against a new collection
    ///
    /// Identity is by id: an equivalent asset object from a newer fetch keeps
    /// the selection. Returns `true` if the selection was cleared.
    pub fn reconcile(&mut self, collection: &[Asset]) -> bool {
        let stale = match self {
            Self::Empty => false,
            Self::Selected(id) => !collection.iter().any(|asset| &asset.id == id),
        };
        if stale {
            log::debug!("Clearing selection no longer in collection: {self:?}");
            self.clear();
        }
        stale
    }

    /// Resolve the selection to its asset in `collection`
    #[must_use]
    pub fn resolve<'a>(&self, collection: &'a [Asset]) -> Option<&'a Asset> {
        let id = self.selected_id()?;
        collection.iter().find(|asset| &asset.id == id)
    }
}
