// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_PAGE_SLUG: &str = "pages_slug_key";
const CNT_POST_CATEGORY: &str = "posts_category_id_fkey";

const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    let sqlx::Error::Database(db_err) = &err else {
        return DomainError::Persistence(err.to_string());
    };

    if let Some(mapped) = db_err.constraint().and_then(constraint_error) {
        return mapped;
    }

    match db_err.code().as_deref() {
        Some(SQLSTATE_UNIQUE_VIOLATION) => {
            DomainError::Conflict("unique constraint violated".into())
        }
        Some(SQLSTATE_FOREIGN_KEY_VIOLATION) => {
            DomainError::NotFound("referenced record not found".into())
        }
        _ => {
            tracing::error!(error = %db_err, "unexpected database error");
            DomainError::Persistence(db_err.message().to_string())
        }
    }
}

/// Domain error for a violation of one of the named schema constraints.
fn constraint_error(constraint: &str) -> Option<DomainError> {
    match constraint {
        CNT_CATEGORY_SLUG | CNT_PAGE_SLUG => {
            Some(DomainError::Conflict("slug already exists".into()))
        }
        CNT_POST_CATEGORY => Some(DomainError::not_found("category")),
        _ => None,
    }
}
