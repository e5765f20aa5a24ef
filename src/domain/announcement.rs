use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{require_non_blank, UserRole};
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub announcement_type: AnnouncementType,
    pub target_audience: Audience,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Severity shown next to an announcement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl AnnouncementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementType::Info => "info",
            AnnouncementType::Warning => "warning",
            AnnouncementType::Success => "success",
            AnnouncementType::Error => "error",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "info" => Some(AnnouncementType::Info),
            "warning" => Some(AnnouncementType::Warning),
            "success" => Some(AnnouncementType::Success),
            "error" => Some(AnnouncementType::Error),
            _ => None,
        }
    }
}

/// Viewer segment an announcement is addressed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    All,
    Student,
    Institute,
    Company,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::All => "all",
            Audience::Student => "student",
            Audience::Institute => "institute",
            Audience::Company => "company",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Audience::All),
            "student" => Some(Audience::Student),
            "institute" => Some(Audience::Institute),
            "company" => Some(Audience::Company),
            _ => None,
        }
    }

    /// Whether a viewer holding `role` belongs to this segment.
    pub fn includes(&self, role: Option<UserRole>) -> bool {
        match (self, role) {
            (Audience::All, _) => true,
            (Audience::Student, Some(UserRole::Student)) => true,
            (Audience::Institute, Some(UserRole::Institute)) => true,
            (Audience::Company, Some(UserRole::Company)) => true,
            _ => false,
        }
    }
}

/// Writable fields of an announcement, as submitted by the admin form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnouncementData {
    pub title: String,
    pub message: String,
    pub announcement_type: AnnouncementType,
    pub target_audience: Audience,
    pub is_active: bool,
}

impl Announcement {
    pub fn is_visible_to(&self, role: Option<UserRole>) -> bool {
        self.is_active && self.target_audience.includes(role)
    }
}

/// Keeps the announcements a viewer with `role` should see, preserving order.
pub fn filter_for_audience(announcements: Vec<Announcement>, role: Option<UserRole>) -> Vec<Announcement> {
    announcements
        .into_iter()
        .filter(|a| a.is_visible_to(role))
        .collect()
}

/// Admin dialog fields for creating or editing an announcement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnnouncementForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub announcement_type: AnnouncementType,
    #[serde(default)]
    pub target_audience: Audience,
}

impl AnnouncementForm {
    pub fn from_announcement(announcement: &Announcement) -> Self {
        Self {
            title: announcement.title.clone(),
            message: announcement.message.clone(),
            announcement_type: announcement.announcement_type,
            target_audience: announcement.target_audience,
        }
    }

    /// Trims the text fields and checks they are present. Submitted
    /// announcements are always active.
    pub fn validate(&self) -> Result<AnnouncementData> {
        let title = require_non_blank(&self.title, "Title is required")?;
        let message = require_non_blank(&self.message, "Message is required")?;

        Ok(AnnouncementData {
            title,
            message,
            announcement_type: self.announcement_type,
            target_audience: self.target_audience,
            is_active: true,
        })
    }
}
