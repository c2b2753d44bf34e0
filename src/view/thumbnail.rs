//! Thumbnail grid projection

use super::Listing;
use crate::asset::{Asset, AssetId};
use crate::session::MediaUi;

/// What a card shows as its picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    /// Rendered preview
    Thumbnail(String),
    /// Media kind icon, when the backend has no preview
    Icon(&'static str),
}

/// One grid card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailCard {
    pub id: AssetId,
    pub label: String,
    pub image: CardImage,
    pub is_selected: bool,
}

impl ThumbnailCard {
    fn from_asset(asset: &Asset, ui: &MediaUi) -> Self {
        let image = asset.thumbnail_url.as_ref().map_or_else(
            || CardImage::Icon(asset.kind().icon()),
            |url| CardImage::Thumbnail(url.clone()),
        );

        Self {
            id: asset.id.clone(),
            label: asset.label.clone(),
            image,
            is_selected: ui.is_selected(&asset.id),
        }
    }
}

/// Cards for the thumbnail layout
#[must_use]
pub fn thumbnail_view(ui: &MediaUi) -> Listing<ThumbnailCard> {
    Listing::project(ui, |asset| ThumbnailCard::from_asset(asset, ui))
}
