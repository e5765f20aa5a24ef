use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{filter_for_audience, Announcement, AnnouncementData, UserRole},
    error::Result,
    repository::AnnouncementRepository,
};

pub struct AnnouncementService {
    repo: Arc<dyn AnnouncementRepository>,
}

impl AnnouncementService {
    pub fn new(repo: Arc<dyn AnnouncementRepository>) -> Self {
        Self { repo }
    }

    /// All announcements, newest first (admin view)
    pub async fn list(&self) -> Result<Vec<Announcement>> {
        self.repo.list().await
    }

    /// Active announcements addressed to `role`, newest first
    pub async fn list_active_for(&self, role: Option<UserRole>) -> Result<Vec<Announcement>> {
        let active = self.repo.list_active().await?;
        Ok(filter_for_audience(active, role))
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Announcement>> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, data: AnnouncementData) -> Result<Announcement> {
        let announcement = self.repo.create(data).await?;
        tracing::info!(
            id = %announcement.id,
            audience = announcement.target_audience.as_str(),
            "Announcement published"
        );
        Ok(announcement)
    }

    pub async fn update(&self, id: Uuid, data: AnnouncementData) -> Result<Announcement> {
        let announcement = self.repo.update(id, data).await?;
        tracing::info!(id = %id, "Announcement updated");
        Ok(announcement)
    }

    /// Sets the visibility flag. Concurrent toggles are last-write-wins.
    pub async fn set_status(&self, id: Uuid, is_active: bool) -> Result<Announcement> {
        let announcement = self.repo.set_active(id, is_active).await?;
        tracing::info!(id = %id, is_active, "Announcement status changed");
        Ok(announcement)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repo.delete(id).await?;
        tracing::info!(id = %id, "Announcement deleted");
        Ok(())
    }
}
