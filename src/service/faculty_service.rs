use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{Faculty, FacultyData},
    error::{AppError, Result},
    repository::FacultyRepository,
};

pub struct FacultyService {
    repo: Arc<dyn FacultyRepository>,
}

impl FacultyService {
    pub fn new(repo: Arc<dyn FacultyRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, institution_id: &str) -> Result<Vec<Faculty>> {
        self.repo.list_by_institution(institution_id).await
    }

    pub async fn create(&self, institution_id: &str, data: FacultyData) -> Result<Faculty> {
        let faculty = self.repo.create(institution_id, data).await?;
        tracing::info!(id = %faculty.id, institution_id, "Faculty created");
        Ok(faculty)
    }

    pub async fn update(&self, institution_id: &str, id: Uuid, data: FacultyData) -> Result<Faculty> {
        self.ensure_owned(institution_id, id).await?;
        let faculty = self.repo.update(id, data).await?;
        tracing::info!(id = %id, institution_id, "Faculty updated");
        Ok(faculty)
    }

    pub async fn delete(&self, institution_id: &str, id: Uuid) -> Result<()> {
        self.ensure_owned(institution_id, id).await?;
        self.repo.delete(id).await?;
        tracing::info!(id = %id, institution_id, "Faculty deleted");
        Ok(())
    }

    async fn ensure_owned(&self, institution_id: &str, id: Uuid) -> Result<()> {
        let faculty = self.repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound("Faculty not found".to_string())
        })?;

        if faculty.institution_id != institution_id {
            tracing::warn!(id = %id, institution_id, "Faculty belongs to another institution");
            return Err(AppError::Forbidden);
        }

        Ok(())
    }
}
