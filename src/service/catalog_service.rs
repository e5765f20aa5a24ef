use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{Course, Job, ListingStatus},
    error::{AppError, Result},
    repository::{CourseRepository, JobRepository},
};

/// Read side of the course and job listings.
pub struct CatalogService {
    course_repo: Arc<dyn CourseRepository>,
    job_repo: Arc<dyn JobRepository>,
}

impl CatalogService {
    pub fn new(course_repo: Arc<dyn CourseRepository>, job_repo: Arc<dyn JobRepository>) -> Self {
        Self { course_repo, job_repo }
    }

    pub async fn list_courses(&self, status: Option<ListingStatus>) -> Result<Vec<Course>> {
        self.course_repo.list(status).await
    }

    pub async fn get_course(&self, id: Uuid) -> Result<Course> {
        self.course_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    pub async fn list_jobs(&self, status: Option<ListingStatus>) -> Result<Vec<Job>> {
        self.job_repo.list(status).await
    }

    pub async fn get_job(&self, id: Uuid) -> Result<Job> {
        self.job_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
    }
}
