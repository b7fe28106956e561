//! User account models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role on the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Company,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Company => "COMPANY",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<UserRole> {
        match s {
            "COMPANY" => Some(UserRole::Company),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// A user account owning a company profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
