use std::sync::Arc;

use crate::{
    domain::{ItemType, SavedItem, SavedItemKey, SavedItemSnapshot, ToggleResult},
    error::Result,
    repository::SavedItemRepository,
};

pub struct SavedItemService {
    repo: Arc<dyn SavedItemRepository>,
}

impl SavedItemService {
    pub fn new(repo: Arc<dyn SavedItemRepository>) -> Self {
        Self { repo }
    }

    pub async fn is_saved(&self, key: &SavedItemKey) -> Result<bool> {
        self.repo.exists(key).await
    }

    /// Saves the item unless it already is.
    pub async fn save(&self, key: &SavedItemKey, snapshot: SavedItemSnapshot) -> Result<()> {
        if self.repo.insert(key, snapshot).await? {
            tracing::debug!(user_id = %key.user_id, item_id = %key.item_id, item_type = key.item_type.as_str(), "Item saved");
        }
        Ok(())
    }

    pub async fn unsave(&self, key: &SavedItemKey) -> Result<()> {
        if self.repo.remove(key).await? {
            tracing::debug!(user_id = %key.user_id, item_id = %key.item_id, item_type = key.item_type.as_str(), "Item unsaved");
        }
        Ok(())
    }

    /// Flips the saved state. `snapshot` is only stored when the item ends up saved.
    pub async fn toggle(&self, key: &SavedItemKey, snapshot: SavedItemSnapshot) -> Result<ToggleResult> {
        let saved = self.repo.toggle(key, snapshot).await?;
        tracing::debug!(
            user_id = %key.user_id,
            item_id = %key.item_id,
            item_type = key.item_type.as_str(),
            saved,
            "Saved item toggled"
        );
        Ok(ToggleResult { saved })
    }

    pub async fn list(&self, user_id: &str, item_type: Option<ItemType>) -> Result<Vec<SavedItem>> {
        self.repo.list_by_user(user_id, item_type).await
    }
}
