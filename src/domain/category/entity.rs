// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId, name: CategoryName, slug: Slug, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            slug,
            updated_at,
        }
    }

    /// Applies the change to an in-memory copy of the stored record.
    pub fn apply_to(&self, category: &mut Category) {
        category.name = self.name.clone();
        category.slug = self.slug.clone();
        category.updated_at = self.updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn apply_to_replaces_name_slug_and_timestamp() {
        let created = Utc::now();
        let mut category = Category {
            id: CategoryId::new(1).unwrap(),
            name: CategoryName::new("News").unwrap(),
            slug: Slug::new("news").unwrap(),
            created_at: created,
            updated_at: created,
        };
        let later = created + Duration::seconds(5);
        let update = CategoryUpdate::new(
            category.id,
            CategoryName::new("Events").unwrap(),
            Slug::new("events").unwrap(),
            later,
        );

        update.apply_to(&mut category);

        assert_eq!(category.name.as_str(), "Events");
        assert_eq!(category.slug.as_str(), "events");
        assert_eq!(category.created_at, created);
        assert_eq!(category.updated_at, later);
    }
}
