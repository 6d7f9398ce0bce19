// src/domain/slug.rs
use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};

/// URL-safe identifier shared by categories and pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub const MAX_LEN: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "slug cannot exceed {} characters",
                Self::MAX_LEN
            )));
        }
        if !is_url_safe(&value) {
            return Err(DomainError::Validation(
                "slug may only contain letters, numbers, dashes and underscores".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// ASCII letters, digits, `-` and `_`.
pub fn is_url_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Lookup of slug ownership within a single table.
#[async_trait]
pub trait SlugIndex: Send + Sync {
    /// Id of the record currently holding `slug`, if any.
    async fn owner_of(&self, slug: &str) -> DomainResult<Option<i64>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uniqueness {
    Enforced,
    Disabled,
}

/// Result of claiming a caller supplied slug for an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugClaim {
    Available(Slug),
    Taken(String),
    Empty,
}

/// Produces slugs for one entity table.
pub struct SlugService {
    entity: &'static str,
    index: Arc<dyn SlugIndex>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

// Leaves room for "-<counter>" suffixes within Slug::MAX_LEN.
const BASE_MAX_LEN: usize = Slug::MAX_LEN - 12;

impl SlugService {
    pub fn new(
        entity: &'static str,
        index: Arc<dyn SlugIndex>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            entity,
            index,
            generator,
            clock,
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Whether `candidate` belongs to a record other than `ignore_id`.
    pub async fn is_taken(&self, candidate: &str, ignore_id: Option<i64>) -> DomainResult<bool> {
        let owner = self.index.owner_of(candidate).await?;
        Ok(owner.is_some_and(|owner| Some(owner) != ignore_id))
    }

    pub async fn generate(
        &self,
        source: &str,
        uniqueness: Uniqueness,
        ignore_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = self.base_slug(source);

        if uniqueness == Uniqueness::Disabled {
            return Slug::new(base);
        }

        let mut candidate = base.clone();
        let mut counter = 1u64;
        while self.is_taken(&candidate, ignore_id).await? {
            candidate = format!("{base}-{counter}");
            counter += 1;
        }

        Slug::new(candidate)
    }

    /// Normalizes `requested` and checks it against every other record.
    /// The raw value and the normalized value must both be free.
    pub async fn claim(&self, requested: &str, owner: i64) -> DomainResult<SlugClaim> {
        let normalized = truncate(self.generator.slugify(requested));
        if normalized.is_empty() {
            return Ok(SlugClaim::Empty);
        }

        for candidate in [requested, normalized.as_str()] {
            if self.is_taken(candidate, Some(owner)).await? {
                return Ok(SlugClaim::Taken(candidate.to_string()));
            }
        }

        Ok(SlugClaim::Available(Slug::new(normalized)?))
    }

    fn base_slug(&self, source: &str) -> String {
        let base = truncate(self.generator.slugify(source));
        if base.is_empty() {
            format!("{}-{}", self.entity, self.clock.now().timestamp())
        } else {
            base
        }
    }
}

fn truncate(mut slug: String) -> String {
    if slug.len() > BASE_MAX_LEN {
        // slugify output is ASCII, any byte offset is a char boundary.
        slug.truncate(BASE_MAX_LEN);
        let trimmed = slug.trim_end_matches('-').len();
        slug.truncate(trimmed);
    }
    slug
}
