// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object rejected its input.
    #[error("validation error: {0}")]
    Validation(String),
    /// Unique slug lost to a concurrent writer.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Storage failure with no better classification.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{entity} not found"))
    }
}
