use crate::domain::category::CategoryId;
use chrono::{DateTime, Utc};

/// Blog post as seen from a category listing. Posts are managed elsewhere.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub category_id: CategoryId,
    pub title: String,
    pub slug: String,
    /// `true` once the post is published.
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}
