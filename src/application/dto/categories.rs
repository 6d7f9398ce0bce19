use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PaginatedResult, PostDto, SeoMetadata, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Public category view: the category, one page of its published posts and
/// the metadata the view layer renders into the document head.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryShowDto {
    pub category: CategoryDto,
    pub posts: PaginatedResult<PostDto>,
    pub seo: SeoMetadata,
}
