//! Type definitions module with domain-specific sub-modules
//!
//! This module organizes types into logical categories:
//! - `common` - Backend identifiers and sort order
//! - `envelope` - The `{success, message, data}` wrapper around backend payloads
//! - `language` - Internationalization and language types
//! - `pagination` - Pagination for list endpoints

pub mod common;
pub mod envelope;
pub mod language;
pub mod pagination;

// Re-export commonly used types at module level
pub use common::{Id, SortOrder};
pub use envelope::Envelope;
pub use language::Language;
pub use pagination::{PageInfo, Pagination};
