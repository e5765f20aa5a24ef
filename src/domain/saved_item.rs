use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Course, Job};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Course,
    Job,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Course => "course",
            ItemType::Job => "job",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "course" => Some(ItemType::Course),
            "job" => Some(ItemType::Job),
            _ => None,
        }
    }
}

/// Identity of a bookmark: one per (user, item, type).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SavedItemKey {
    pub user_id: String,
    pub item_id: Uuid,
    pub item_type: ItemType,
}

impl SavedItemKey {
    pub fn new(user_id: impl Into<String>, item_id: Uuid, item_type: ItemType) -> Self {
        Self {
            user_id: user_id.into(),
            item_id,
            item_type,
        }
    }
}

/// Display fields copied from the course or job when it is saved.
///
/// Courses fill `provider_name` with the institution, `duration_or_location`
/// with the duration and `fee_or_salary` with the fee; jobs use the company,
/// location and salary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SavedItemSnapshot {
    pub title: String,
    pub provider_name: Option<String>,
    pub duration_or_location: Option<String>,
    pub fee_or_salary: Option<String>,
}

impl From<&Course> for SavedItemSnapshot {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            provider_name: Some(course.institution_name.clone()),
            duration_or_location: course.duration.clone(),
            fee_or_salary: course.fee.clone(),
        }
    }
}

impl From<&Job> for SavedItemSnapshot {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            provider_name: Some(job.company_name.clone()),
            duration_or_location: job.location.clone(),
            fee_or_salary: job.salary.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedItem {
    pub user_id: String,
    pub item_id: Uuid,
    pub item_type: ItemType,
    #[serde(flatten)]
    pub snapshot: SavedItemSnapshot,
    pub saved_at: DateTime<Utc>,
}

/// Outcome of a save toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleResult {
    pub saved: bool,
}
