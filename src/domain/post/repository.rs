use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{Pagination, Post};
use async_trait::async_trait;

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    /// Published posts of a category, newest first, plus the total count.
    async fn list_published_by_category(
        &self,
        category_id: CategoryId,
        pagination: Pagination,
    ) -> DomainResult<(Vec<Post>, u64)>;
}
