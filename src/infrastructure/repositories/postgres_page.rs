// src/infrastructure/repositories/postgres_page.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    NewPage, Page, PageContent, PageId, PageReadRepository, PageStatus, PageTitle, PageUpdate,
    PageWriteRepository,
};
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, title, slug, content, status, created_at, updated_at";
const LIST_ALL: &str = "SELECT id, title, slug, content, status, created_at, updated_at FROM pages ORDER BY id";

#[derive(Clone)]
pub struct PostgresPageRepository {
    pool: PgPool,
}

impl PostgresPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    status: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id)?,
            title: PageTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            content: PageContent::new(row.content)?,
            status: PageStatus::from(row.status),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PageWriteRepository for PostgresPageRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let NewPage {
            title,
            slug,
            content,
            status,
            created_at,
            updated_at,
        } = page;

        let row = sqlx::query_as::<_, PageRow>(&format!(
            "INSERT INTO pages (title, slug, content, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(status.is_published())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let PageUpdate {
            id,
            title,
            slug,
            content,
            status,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, PageRow>(&format!(
            "UPDATE pages SET title = $1, slug = $2, content = $3, status = $4, updated_at = $5
             WHERE id = $6
             RETURNING {COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(status.is_published())
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("page"))?;

        Page::try_from(row)
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("page"));
        }
        Ok(())
    }
}

#[async_trait]
impl PageReadRepository for PostgresPageRepository {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!("SELECT {COLUMNS} FROM pages WHERE id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {COLUMNS} FROM pages WHERE slug = $1 AND status = TRUE"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Page>> {
        let rows = sqlx::query_as::<_, PageRow>(LIST_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Page::try_from).collect()
    }
}

#[async_trait]
impl SlugIndex for PostgresPageRepository {
    async fn owner_of(&self, slug: &str) -> DomainResult<Option<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM pages WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
