use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{Course, ItemType, Job, ListingStatus, SavedItemKey, SavedItemSnapshot},
    error::{AppError, Result},
    service::{catalog_service::CatalogService, saved_item_service::SavedItemService},
};

/// A course or job as shown on its detail page.
#[async_trait]
pub trait Listing: Clone + Send + Sync + Sized {
    const ITEM_TYPE: ItemType;
    /// Where the "back" link of the not-found view points.
    const LIST_PATH: &'static str;

    async fn fetch(catalog: &CatalogService, id: Uuid) -> Result<Self>;

    fn id(&self) -> Uuid;
    fn status(&self) -> ListingStatus;
    fn snapshot(&self) -> SavedItemSnapshot;
    fn apply_path(&self) -> String;
}

#[async_trait]
impl Listing for Course {
    const ITEM_TYPE: ItemType = ItemType::Course;
    const LIST_PATH: &'static str = "/courses";

    async fn fetch(catalog: &CatalogService, id: Uuid) -> Result<Self> {
        catalog.get_course(id).await
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> ListingStatus {
        self.status
    }

    fn snapshot(&self) -> SavedItemSnapshot {
        SavedItemSnapshot::from(self)
    }

    fn apply_path(&self) -> String {
        format!("/apply/{}", self.id)
    }
}

#[async_trait]
impl Listing for Job {
    const ITEM_TYPE: ItemType = ItemType::Job;
    const LIST_PATH: &'static str = "/jobs";

    async fn fetch(catalog: &CatalogService, id: Uuid) -> Result<Self> {
        catalog.get_job(id).await
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> ListingStatus {
        self.status
    }

    fn snapshot(&self) -> SavedItemSnapshot {
        SavedItemSnapshot::from(self)
    }

    fn apply_path(&self) -> String {
        format!("/jobs/{}/apply", self.id)
    }
}

#[derive(Debug, Clone)]
pub enum DetailState<T> {
    Loading,
    Loaded(T),
    NotFound { message: String, back_path: &'static str },
    Failed(String),
}

pub struct DetailsPage<T: Listing> {
    catalog: Arc<CatalogService>,
    saved_items: Arc<SavedItemService>,
    item_id: Uuid,
    user_id: Option<String>,
    state: DetailState<T>,
    saved: bool,
}

impl<T: Listing> DetailsPage<T> {
    pub fn new(
        catalog: Arc<CatalogService>,
        saved_items: Arc<SavedItemService>,
        item_id: Uuid,
        user_id: Option<String>,
    ) -> Self {
        Self {
            catalog,
            saved_items,
            item_id,
            user_id,
            state: DetailState::Loading,
            saved: false,
        }
    }

    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }

    pub fn listing(&self) -> Option<&T> {
        match &self.state {
            DetailState::Loaded(listing) => Some(listing),
            _ => None,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn save_label(&self) -> &'static str {
        if self.saved { "Saved" } else { "Save" }
    }

    pub fn status_label(&self) -> Option<&'static str> {
        self.listing().map(|l| l.status().label())
    }

    pub fn can_apply(&self) -> bool {
        self.listing().map(|l| l.status() == ListingStatus::Active).unwrap_or(false)
    }

    /// Target of the "Apply Now" button, when applying is possible.
    pub fn apply_path(&self) -> Option<String> {
        self.listing()
            .filter(|l| l.status() == ListingStatus::Active)
            .map(|l| l.apply_path())
    }

    fn key(&self) -> Option<SavedItemKey> {
        self.user_id
            .as_ref()
            .map(|uid| SavedItemKey::new(uid.clone(), self.item_id, T::ITEM_TYPE))
    }

    pub async fn load(&mut self) {
        self.state = DetailState::Loading;
        self.state = match T::fetch(&self.catalog, self.item_id).await {
            Ok(listing) => DetailState::Loaded(listing),
            Err(AppError::NotFound(message)) => DetailState::NotFound {
                message,
                back_path: T::LIST_PATH,
            },
            Err(e) => {
                tracing::error!(item_id = %self.item_id, "Failed to load {}: {}", T::ITEM_TYPE.as_str(), e);
                DetailState::Failed(e.to_string())
            }
        };
        self.refresh_saved().await;
    }

    async fn refresh_saved(&mut self) {
        let Some(key) = self.key() else {
            self.saved = false;
            return;
        };

        match self.saved_items.is_saved(&key).await {
            Ok(saved) => self.saved = saved,
            Err(e) => tracing::error!(item_id = %self.item_id, "Failed to check saved state: {}", e),
        }
    }

    /// Saves or unsaves the loaded listing. Errors are logged and leave the
    /// previous state in place.
    pub async fn toggle_save(&mut self) -> bool {
        let Some(key) = self.key() else {
            return self.saved;
        };
        let Some(snapshot) = self.listing().map(|l| l.snapshot()) else {
            return self.saved;
        };

        if let Err(e) = self.saved_items.toggle(&key, snapshot).await {
            tracing::error!(
                item_id = %self.item_id,
                "Error saving/unsaving {}: {}",
                T::ITEM_TYPE.as_str(),
                e
            );
        }

        self.refresh_saved().await;
        self.saved
    }
}
