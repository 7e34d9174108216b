//! User Account Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

impl Role {
    /// Directory sort priority, admins first
    pub fn priority(&self) -> u8 {
        match self {
            Self::Admin => 0,
            Self::Manager => 1,
            Self::Staff => 2,
        }
    }

    /// Human-facing label
    pub fn pretty(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Staff => "Staff",
        }
    }
}

/// Person with system access
///
/// ADMIN accounts are exempt from disable/remove; both operations are
/// refused before any remote call is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Unique case-insensitively among all accounts
    pub email: String,
    pub role: Role,
    #[serde(rename = "active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Display name, falling back to the email's local part
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

/// Create user payload (server assigns id and a one-time temp password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Update user payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}
