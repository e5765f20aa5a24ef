use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ListingStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company_id: String,
    pub company_name: String,
    pub description: String,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub work_mode: Option<String>,
    pub remote: bool,
    pub department: Option<String>,
    pub experience: Option<String>,
    pub positions: Option<i64>,
    pub status: ListingStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub benefits: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status == ListingStatus::Active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company_id: String,
    pub company_name: String,
    pub description: String,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub work_mode: Option<String>,
    pub remote: bool,
    pub department: Option<String>,
    pub experience: Option<String>,
    pub positions: Option<i64>,
    pub status: ListingStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub benefits: Vec<String>,
}
