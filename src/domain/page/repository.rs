use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page, PageUpdate};
use crate::domain::page::value_objects::PageId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait PageWriteRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn update(&self, update: PageUpdate) -> DomainResult<Page>;
    async fn delete(&self, id: PageId) -> DomainResult<()>;
}

#[async_trait]
pub trait PageReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    /// Drafts are never returned.
    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>>;
    /// Every page, drafts included, ordered by id.
    async fn list(&self) -> DomainResult<Vec<Page>>;
}
