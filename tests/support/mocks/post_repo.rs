// tests/support/mocks/post_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Duration;
use mokkan_content::domain::category::CategoryId;
use mokkan_content::domain::errors::DomainResult;
use mokkan_content::domain::post::{Pagination, Post, PostReadRepository};

use super::time::fixed_now;

#[derive(Default)]
pub struct InMemoryPostRepo {
    rows: Mutex<Vec<Post>>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// `category_id` に投稿を追加する。後から追加したものほど新しい。
    pub fn push(&self, category_id: i64, title: &str, status: bool) -> i64 {
        let mut rows = self.rows.lock().unwrap();
        let id = i64::try_from(rows.len()).unwrap() + 1;
        let created_at = fixed_now() + Duration::minutes(id);
        rows.push(Post {
            id,
            category_id: CategoryId::new(category_id).unwrap(),
            title: title.to_string(),
            slug: format!("post-{id}"),
            status,
            created_at,
            updated_at: created_at,
        });
        id
    }

    /// ON DELETE CASCADE 相当
    pub fn remove_category(&self, category_id: i64) {
        self.rows
            .lock()
            .unwrap()
            .retain(|p| i64::from(p.category_id) != category_id);
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn list_published_by_category(
        &self,
        category_id: CategoryId,
        pagination: Pagination,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let mut matching: Vec<Post> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category_id == category_id && p.status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(pagination.offset()).unwrap())
            .take(pagination.per_page as usize)
            .collect();
        Ok((items, total))
    }
}
