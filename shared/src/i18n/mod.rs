//! Localized user-facing messages
//!
//! The catalog is compiled into the binary from `i18n/messages.toml` and
//! parsed once on first use. Lookups never fail: a missing entry falls back
//! to English, and a missing English text falls back to the key itself.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

use crate::types::Language;

const EMBEDDED_CATALOG: &str = include_str!("../../i18n/messages.toml");

static CATALOG: Lazy<MessageCatalog> =
    Lazy::new(|| MessageCatalog::from_toml(EMBEDDED_CATALOG).unwrap_or_default());

/// Keys of every message the client core can show to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    GenericError,
    NotLoggedIn,
    HostUnreachable,
    Timeout,
    NetworkError,
    NullData,
    InvalidResponse,
    SessionExpired,
    VerificationRequired,
    SessionSaveFailed,
    NoRefreshToken,
    EmailNotRegistered,
    InvalidResetCode,
    ProductNotFound,
    CartItemNotFound,
    OrderNotFound,
    OrderNotCancellable,
    PaymentNotFound,
    SellerNotFound,
    StoreAlreadyExists,
    StoreNotFound,
    InvalidData,
}

impl MessageKey {
    pub const ALL: [MessageKey; 22] = [
        MessageKey::GenericError,
        MessageKey::NotLoggedIn,
        MessageKey::HostUnreachable,
        MessageKey::Timeout,
        MessageKey::NetworkError,
        MessageKey::NullData,
        MessageKey::InvalidResponse,
        MessageKey::SessionExpired,
        MessageKey::VerificationRequired,
        MessageKey::SessionSaveFailed,
        MessageKey::NoRefreshToken,
        MessageKey::EmailNotRegistered,
        MessageKey::InvalidResetCode,
        MessageKey::ProductNotFound,
        MessageKey::CartItemNotFound,
        MessageKey::OrderNotFound,
        MessageKey::OrderNotCancellable,
        MessageKey::PaymentNotFound,
        MessageKey::SellerNotFound,
        MessageKey::StoreAlreadyExists,
        MessageKey::StoreNotFound,
        MessageKey::InvalidData,
    ];

    /// Key as written in the catalog file
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::GenericError => "generic_error",
            MessageKey::NotLoggedIn => "not_logged_in",
            MessageKey::HostUnreachable => "host_unreachable",
            MessageKey::Timeout => "timeout",
            MessageKey::NetworkError => "network_error",
            MessageKey::NullData => "null_data",
            MessageKey::InvalidResponse => "invalid_response",
            MessageKey::SessionExpired => "session_expired",
            MessageKey::VerificationRequired => "verification_required",
            MessageKey::SessionSaveFailed => "session_save_failed",
            MessageKey::NoRefreshToken => "no_refresh_token",
            MessageKey::EmailNotRegistered => "email_not_registered",
            MessageKey::InvalidResetCode => "invalid_reset_code",
            MessageKey::ProductNotFound => "product_not_found",
            MessageKey::CartItemNotFound => "cart_item_not_found",
            MessageKey::OrderNotFound => "order_not_found",
            MessageKey::OrderNotCancellable => "order_not_cancellable",
            MessageKey::PaymentNotFound => "payment_not_found",
            MessageKey::SellerNotFound => "seller_not_found",
            MessageKey::StoreAlreadyExists => "store_already_exists",
            MessageKey::StoreNotFound => "store_not_found",
            MessageKey::InvalidData => "invalid_data",
        }
    }
}

/// One message in both supported languages
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Parsed message catalog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    pub messages: HashMap<String, LocalizedText>,
}

impl MessageCatalog {
    /// Parse a catalog from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Look up a message, falling back to English when the translation is missing
    pub fn get(&self, key: MessageKey, lang: Language) -> Option<&str> {
        let entry = self.messages.get(key.as_str())?;
        match lang {
            Language::English => Some(entry.en.as_str()),
            Language::Indonesian => Some(entry.id.as_deref().unwrap_or(entry.en.as_str())),
        }
    }
}

/// Localized text for `key`
pub fn message(key: MessageKey, lang: Language) -> String {
    CATALOG
        .get(key, lang)
        .unwrap_or_else(|| key.as_str())
        .to_string()
}

/// Localized text for `key` with `{name}` placeholders filled in
pub fn message_with(key: MessageKey, lang: Language, params: &[(&str, &str)]) -> String {
    format_message(&message(key, lang), params)
}

/// Replace `{name}` placeholders in a template
pub fn format_message(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
