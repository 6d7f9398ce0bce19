// src/domain/page/entity.rs
use crate::domain::page::value_objects::{PageContent, PageId, PageStatus, PageTitle};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub slug: Slug,
    pub content: PageContent,
    pub status: PageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: PageTitle,
    pub slug: Slug,
    pub content: PageContent,
    pub status: PageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PageUpdate {
    pub id: PageId,
    pub title: PageTitle,
    pub slug: Slug,
    pub content: PageContent,
    pub status: PageStatus,
    pub updated_at: DateTime<Utc>,
}

impl PageUpdate {
    pub fn apply_to(&self, page: &mut Page) {
        page.title = self.title.clone();
        page.slug = self.slug.clone();
        page.content = self.content.clone();
        page.status = self.status;
        page.updated_at = self.updated_at;
    }
}
