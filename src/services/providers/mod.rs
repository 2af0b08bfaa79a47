//! External collaborators of the recommendation core
//!
//! The core never talks HTTP itself. It sees the product catalog and the
//! image-analysis backend only through these traits, so the built-in
//! reference data, a remote API, or a test mock can be swapped freely.

use crate::{
    error::{AppError, AppResult},
    models::{DecorItem, RoomAnalysis, RoomImage, RoomType, StyleTag},
};

pub mod remote_catalog;
pub mod static_catalog;
pub mod vision_api;

pub use remote_catalog::RemoteCatalog;
pub use static_catalog::StaticCatalog;
pub use vision_api::VisionApiProvider;

/// Source of decor items
///
/// Implementations return items in a stable order; alternatives and listings
/// rely on it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Every item of the catalog, in catalog order
    async fn all_items(&self) -> AppResult<Vec<DecorItem>>;

    /// Single item lookup
    ///
    /// Default implementation scans `all_items`. Providers with a per-item
    /// endpoint can override it.
    async fn item_by_id(&self, id: &str) -> AppResult<DecorItem> {
        self.all_items()
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Decor item '{}'", id)))
    }

    /// Items tagged with the given style
    async fn items_by_style(&self, style: StyleTag) -> AppResult<Vec<DecorItem>> {
        Ok(self
            .all_items()
            .await?
            .into_iter()
            .filter(|item| item.has_style(style))
            .collect())
    }

    /// Items suitable for the given room type
    async fn items_for_room(&self, room_type: RoomType) -> AppResult<Vec<DecorItem>> {
        Ok(self
            .all_items()
            .await?
            .into_iter()
            .filter(|item| item.suits_room(room_type))
            .collect())
    }

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Backend that extracts style and palette information from a room photo
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RoomAnalysisProvider: Send + Sync {
    async fn analyze(&self, image: &RoomImage) -> AppResult<RoomAnalysis>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
