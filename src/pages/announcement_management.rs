use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{Announcement, AnnouncementData, AnnouncementForm},
    error::Result,
    pages::management::{banner_message, ManagedCollection, ManagementPage},
    service::announcement_service::AnnouncementService,
};

/// Every announcement, as the admin sees them.
pub struct AnnouncementCollection {
    service: Arc<AnnouncementService>,
}

impl AnnouncementCollection {
    pub fn new(service: Arc<AnnouncementService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ManagedCollection for AnnouncementCollection {
    type Record = Announcement;
    type Form = AnnouncementForm;
    type Data = AnnouncementData;

    const NOUN: &'static str = "announcement";

    fn record_id(record: &Announcement) -> Uuid {
        record.id
    }

    fn form_for(record: &Announcement) -> AnnouncementForm {
        AnnouncementForm::from_announcement(record)
    }

    fn validate(form: &AnnouncementForm) -> Result<AnnouncementData> {
        form.validate()
    }

    async fn fetch_all(&self) -> Result<Vec<Announcement>> {
        self.service.list().await
    }

    async fn add(&self, data: AnnouncementData) -> Result<Announcement> {
        self.service.create(data).await
    }

    async fn update(&self, id: Uuid, data: AnnouncementData) -> Result<Announcement> {
        self.service.update(id, data).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.service.delete(id).await
    }
}

pub type AnnouncementManagementPage = ManagementPage<AnnouncementCollection>;

impl ManagementPage<AnnouncementCollection> {
    /// Flips the announcement's visibility and reloads the list.
    pub async fn toggle_status(&mut self, announcement: &Announcement) -> bool {
        let result = self
            .collection()
            .service
            .set_status(announcement.id, !announcement.is_active)
            .await;

        match result {
            Ok(_) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::error!(id = %announcement.id, "Failed to toggle announcement: {}", e);
                self.set_error(banner_message(&e, "Failed to update announcement".to_string()));
                false
            }
        }
    }
}
