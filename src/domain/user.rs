use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace role attached to a provider account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Institute,
    Company,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Institute => "institute",
            UserRole::Company => "company",
            UserRole::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "student" => Some(UserRole::Student),
            "institute" => Some(UserRole::Institute),
            "company" => Some(UserRole::Company),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account id issued by the identity provider.
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}
