use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 255;
pub const CONTENT_MIN_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("page id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PageId> for i64 {
    fn from(value: PageId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        let len = value.chars().count();
        if len < TITLE_MIN_CHARS {
            return Err(DomainError::Validation(format!(
                "page title must be at least {TITLE_MIN_CHARS} characters"
            )));
        }
        if len > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "page title cannot exceed {TITLE_MAX_CHARS} characters"
            )));
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

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitized HTML body of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent(String);

impl PageContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().chars().count() < CONTENT_MIN_CHARS {
            return Err(DomainError::Validation(format!(
                "page content must be at least {CONTENT_MIN_CHARS} characters"
            )));
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
}

impl PageStatus {
    pub fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl From<bool> for PageStatus {
    fn from(published: bool) -> Self {
        if published {
            Self::Published
        } else {
            Self::Draft
        }
    }
}

impl From<PageStatus> for bool {
    fn from(value: PageStatus) -> Self {
        value.is_published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_bool() {
        assert_eq!(PageStatus::from(true), PageStatus::Published);
        assert!(!bool::from(PageStatus::Draft));
    }

    #[test]
    fn content_requires_two_visible_characters() {
        assert!(PageContent::new(" a ").is_err());
        assert!(PageContent::new("<p>ok</p>").is_ok());
    }

    #[test]
    fn title_bounds() {
        assert!(PageTitle::new("A").is_err());
        assert!(PageTitle::new("About").is_ok());
        assert!(PageTitle::new("t".repeat(256)).is_err());
    }
}
