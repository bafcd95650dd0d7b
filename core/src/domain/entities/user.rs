//! User entity as returned by the authentication endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sm_shared::utils::image_url;
use sm_shared::Id;

/// Role of an account on the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Shopper
    Customer,
    /// Account that owns a store
    Seller,
    Admin,
    #[serde(other)]
    Unknown,
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,

    #[serde(default)]
    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// Avatar path, possibly relative
    #[serde(default, alias = "avatar_url")]
    pub avatar: Option<String>,

    #[serde(default)]
    pub role: Option<UserRole>,

    /// Whether the email address has been verified
    #[serde(default, alias = "is_verified")]
    pub email_verified: Option<bool>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Absolute avatar URL
    pub fn avatar_url(&self, image_base_url: &str) -> Option<String> {
        image_url(image_base_url, self.avatar.as_deref())
    }

    pub fn is_seller(&self) -> bool {
        matches!(self.role, Some(UserRole::Seller))
    }
}
