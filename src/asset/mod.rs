//! Asset data model
//!
//! Assets are created by an [`AssetRepository`](crate::repository::AssetRepository)
//! in response to a query and are never mutated by the core: a reload
//! replaces the whole collection instead.
//!
//! Field names on the wire follow the backend's camelCase JSON
//! (`lastModified`, `iptcProperties`, `file.mediaType`).

mod kind;

pub use kind::{MediaKind, classify};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque asset identifier, stable across fetches
///
/// Selection identity is by id, never by reference: a reload may hand back
/// an equivalent asset object that still counts as the same selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Create a new identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A media item plus its metadata as exposed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier
    pub id: AssetId,

    /// Original filename (e.g. "sunset.jpg")
    pub filename: String,

    /// Human readable title
    pub label: String,

    /// Stored file information
    pub file: AssetFile,

    /// Last modification time of the asset
    pub last_modified: DateTime<Utc>,

    /// Preview image for thumbnail cards, if the backend rendered one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// IPTC metadata in backend order
    #[serde(default)]
    pub iptc_properties: Vec<IptcProperty>,
}

/// File information attached to an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    /// MIME type, e.g. `image/png`
    pub media_type: String,

    /// File size in bytes
    #[serde(default)]
    pub size: u64,
}

/// One IPTC metadata entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IptcProperty {
    pub property_name: String,
    pub value: String,
}

impl Asset {
    /// Create an asset with no thumbnail and no IPTC metadata
    #[must_use]
    pub fn new(
        id: impl Into<AssetId>,
        filename: impl Into<String>,
        label: impl Into<String>,
        media_type: impl Into<String>,
        size: u64,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            label: label.into(),
            file: AssetFile {
                media_type: media_type.into(),
                size,
            },
            last_modified,
            thumbnail_url: None,
            iptc_properties: Vec::new(),
        }
    }

    /// Attach a thumbnail url
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Append an IPTC property, keeping insertion order
    #[must_use]
    pub fn with_iptc(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.iptc_properties.push(IptcProperty {
            property_name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Classification of this asset's MIME type
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        classify(&self.file.media_type)
    }
}
