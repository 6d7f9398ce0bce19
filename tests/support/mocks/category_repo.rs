// tests/support/mocks/category_repo.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mokkan_content::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategoryUpdate, CategoryWriteRepository,
    NewCategory,
};
use mokkan_content::domain::errors::{DomainError, DomainResult};
use mokkan_content::domain::slug::{Slug, SlugIndex};

/// `categories` テーブル相当。slug の一意制約も再現する。
#[derive(Default)]
pub struct InMemoryCategoryRepo {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Category>,
}

impl Inner {
    fn slug_owner(&self, slug: &str) -> Option<i64> {
        self.rows
            .values()
            .find(|c| c.slug.as_str() == slug)
            .map(|c| c.id.into())
    }
}

impl InMemoryCategoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Category> {
        self.inner.lock().unwrap().rows.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Category> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut inner = self.inner.lock().unwrap();
        if inner.slug_owner(category.slug.as_str()).is_some() {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        inner.next_id += 1;
        let id = inner.next_id;
        let stored = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            slug: category.slug,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
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
            .ok_or_else(|| DomainError::not_found("category"))?;
        update.apply_to(row);
        Ok(row.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("category"))
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategoryRepo {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.get(id.into()))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .find(|c| c.slug == *slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        // BTreeMap iteration is already in id order.
        Ok(self.all())
    }
}

#[async_trait]
impl SlugIndex for InMemoryCategoryRepo {
    async fn owner_of(&self, slug: &str) -> DomainResult<Option<i64>> {
        Ok(self.inner.lock().unwrap().slug_owner(slug))
    }
}
