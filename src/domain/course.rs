use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a course or job still takes applications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Closed,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Closed => "closed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(ListingStatus::Active),
            "closed" => Some(ListingStatus::Closed),
            _ => None,
        }
    }

    /// Label the detail pages show next to the title.
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Active => "Open",
            ListingStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub institution_id: String,
    pub institution_name: String,
    pub description: String,
    pub duration: Option<String>,
    pub fee: Option<String>,
    pub status: ListingStatus,
    pub level: Option<String>,
    pub degree: Option<String>,
    pub mode: Option<String>,
    pub location: Option<String>,
    pub language: Option<String>,
    pub credits: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    pub prerequisites: Vec<String>,
    pub skills: Vec<String>,
    pub curriculum: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn is_open(&self) -> bool {
        self.status == ListingStatus::Active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub institution_id: String,
    pub institution_name: String,
    pub description: String,
    pub duration: Option<String>,
    pub fee: Option<String>,
    pub status: ListingStatus,
    pub level: Option<String>,
    pub degree: Option<String>,
    pub mode: Option<String>,
    pub location: Option<String>,
    pub language: Option<String>,
    pub credits: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    pub prerequisites: Vec<String>,
    pub skills: Vec<String>,
    pub curriculum: Vec<String>,
}
