// tests/support/mocks/page_repo.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mokkan_content::domain::errors::{DomainError, DomainResult};
use mokkan_content::domain::page::{
    NewPage, Page, PageId, PageReadRepository, PageUpdate, PageWriteRepository,
};
use mokkan_content::domain::slug::{Slug, SlugIndex};

/// `pages` テーブル相当。slug の一意制約も再現する。
#[derive(Default)]
pub struct InMemoryPageRepo {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Page>,
}

impl Inner {
    fn slug_owner(&self, slug: &str) -> Option<i64> {
        self.rows
            .values()
            .find(|p| p.slug.as_str() == slug)
            .map(|p| p.id.into())
    }
}

impl InMemoryPageRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Page> {
        self.inner.lock().unwrap().rows.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Page> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl PageWriteRepository for InMemoryPageRepo {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let mut inner = self.inner.lock().unwrap();
        if inner.slug_owner(page.slug.as_str()).is_some() {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        inner.next_id += 1;
        let id = inner.next_id;
        let stored = Page {
            id: PageId::new(id)?,
            title: page.title,
            slug: page.slug,
            content: page.content,
            status: page.status,
            created_at: page.created_at,
            updated_at: page.updated_at,
        };
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let mut inner = self.inner.lock().unwrap();
        let id = i64::from(update.id);
        if inner
            .slug_owner(update.slug.as_str())
            .is_some_and(|owner| owner != id)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("page"))?;
        update.apply_to(row);
        Ok(row.clone())
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("page"))
    }
}

#[async_trait]
impl PageReadRepository for InMemoryPageRepo {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        Ok(self.get(id.into()))
    }

    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .find(|p| p.slug == *slug && p.is_published())
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Page>> {
        // BTreeMap iteration is already in id order.
        Ok(self.all())
    }
}

#[async_trait]
impl SlugIndex for InMemoryPageRepo {
    async fn owner_of(&self, slug: &str) -> DomainResult<Option<i64>> {
        Ok(self.inner.lock().unwrap().slug_owner(slug))
    }
}
