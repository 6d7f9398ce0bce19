// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `bytes` under `name` and return the public URL of the file.
    async fn put(&self, name: &str, bytes: &[u8]) -> ApplicationResult<String>;
}
