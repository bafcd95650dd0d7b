//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 20;
const MIN_PER_PAGE: u32 = 1;
const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters sent with list requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// Pagination for the page after this one
    pub fn next(&self) -> Self {
        Self::new(self.page.saturating_add(1), self.per_page)
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

/// Pagination metadata returned by the backend next to a page of items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Current page number
    #[serde(default = "default_page", alias = "current_page")]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_per_page", alias = "per_page")]
    pub limit: u32,

    /// Total number of items
    #[serde(default, alias = "total_items")]
    pub total: u64,

    /// Total number of pages
    #[serde(default, alias = "last_page")]
    pub total_pages: u32,
}

impl PageInfo {
    /// Build metadata for a page when the backend sent none
    pub fn single_page(count: usize) -> Self {
        let total = count as u64;
        Self {
            page: DEFAULT_PAGE,
            limit: u32::try_from(count).unwrap_or(u32::MAX).max(MIN_PER_PAGE),
            total,
            total_pages: if total == 0 { 0 } else { 1 },
        }
    }

    /// Whether a further page can be requested
    pub fn has_next(&self) -> bool {
        self.page < self.effective_total_pages()
    }

    /// Total pages, derived from `total` when the backend omitted it
    pub fn effective_total_pages(&self) -> u32 {
        if self.total_pages > 0 {
            return self.total_pages;
        }
        if self.total == 0 || self.limit == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}
