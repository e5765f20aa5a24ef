use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{require_non_blank, split_comma_list};
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    pub id: Uuid,
    /// Uid of the institution account that owns this faculty.
    pub institution_id: String,
    pub name: String,
    pub description: String,
    pub dean: String,
    pub contact_email: String,
    pub departments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable faculty fields after form normalisation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FacultyData {
    pub name: String,
    pub description: String,
    pub dean: String,
    pub contact_email: String,
    pub departments: Vec<String>,
}

/// Institution dialog fields. `departments` is the raw comma-separated input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FacultyForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dean: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub departments: String,
}

impl FacultyForm {
    pub fn from_faculty(faculty: &Faculty) -> Self {
        Self {
            name: faculty.name.clone(),
            description: faculty.description.clone(),
            dean: faculty.dean.clone(),
            contact_email: faculty.contact_email.clone(),
            departments: faculty.departments.join(", "),
        }
    }

    pub fn validate(&self) -> Result<FacultyData> {
        let name = require_non_blank(&self.name, "Faculty name is required")?;

        Ok(FacultyData {
            name,
            description: self.description.trim().to_string(),
            dean: self.dean.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
            departments: split_comma_list(&self.departments),
        })
    }
}
