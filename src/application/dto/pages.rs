use crate::domain::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{SeoMetadata, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    /// `true` when published, `false` for drafts.
    pub status: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.into_inner(),
            slug: page.slug.into_inner(),
            content: page.content.into_inner(),
            status: page.status.into(),
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageShowDto {
    pub page: PageDto,
    pub seo: SeoMetadata,
}
