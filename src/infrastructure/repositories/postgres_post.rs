// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{Pagination, Post, PostReadRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COUNT_PUBLISHED: &str = "SELECT COUNT(*) FROM posts WHERE category_id = $1 AND status = TRUE";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    category_id: i64,
    title: String,
    slug: String,
    status: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: row.id,
            category_id: CategoryId::new(row.category_id)?,
            title: row.title,
            slug: row.slug,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// One page of a category's published posts, newest first.
fn published_page_query(
    category_id: CategoryId,
    per_page: u32,
    offset: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT id, category_id, title, slug, status, created_at, updated_at FROM posts WHERE category_id = ",
    );
    builder.push_bind(i64::from(category_id));
    builder.push(" AND status = TRUE ORDER BY created_at DESC, id DESC LIMIT ");
    builder.push_bind(i64::from(per_page));
    builder.push(" OFFSET ");
    builder.push_bind(offset);
    builder
}

#[async_trait]
impl PostReadRepository for PostgresPostRepository {
    async fn list_published_by_category(
        &self,
        category_id: CategoryId,
        pagination: Pagination,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let total: i64 = sqlx::query_scalar(COUNT_PUBLISHED)
            .bind(i64::from(category_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let offset = i64::try_from(pagination.offset())
            .map_err(|_| DomainError::Validation("page out of range".into()))?;

        let rows = published_page_query(category_id, pagination.per_page, offset)
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((posts, u64::try_from(total).unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_filter_on_status_column() {
        assert!(COUNT_PUBLISHED.contains("status = TRUE"));

        let query = published_page_query(CategoryId::new(3).unwrap(), 10, 20);
        let sql = query.sql();
        assert!(sql.contains(" status, created_at"));
        assert!(sql.contains("AND status = TRUE ORDER BY created_at DESC, id DESC"));
        assert!(!sql.contains("published"));
    }

    #[test]
    fn migration_declares_status_column() {
        let schema = include_str!("../../../migrations/20240601000200_create_posts.sql");
        assert!(schema.contains("status BOOLEAN NOT NULL"));
        assert!(!schema.contains("published"));
    }
}
