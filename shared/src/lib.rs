//! Shared utilities and common types for the ShopMobile client
//!
//! This crate provides common functionality used across all client modules:
//! - Configuration types
//! - The backend response envelope
//! - Language selection and the localized message catalog
//! - Utility functions (image URLs, email masking, etc.)

pub mod config;
pub mod i18n;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ApiConfig, ClientConfig, Environment, LogFormat, LoggingConfig, SessionConfig};
pub use i18n::{message, MessageKey};
pub use types::{Envelope, Id, Language, PageInfo, Pagination, SortOrder};
pub use utils::{image, validation};
