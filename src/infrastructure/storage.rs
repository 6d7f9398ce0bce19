// src/infrastructure/storage.rs
use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::{
    ApplicationResult, error::ApplicationError, ports::storage::ImageStore,
};

const STORE_FAILED: &str = "failed to store upload";

/// Writes uploads to a local directory served under `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> ApplicationResult<String> {
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(ApplicationError::validation("invalid upload file name"));
        }

        tokio::fs::create_dir_all(&self.root).await.map_err(|err| {
            tracing::error!(dir = %self.root.display(), error = %err, "cannot create upload directory");
            ApplicationError::infrastructure(STORE_FAILED)
        })?;

        let path = self.root.join(name);
        tokio::fs::write(&path, bytes).await.map_err(|err| {
            tracing::error!(path = %path.display(), error = %err, "cannot write upload");
            ApplicationError::infrastructure(STORE_FAILED)
        })?;

        Ok(format!("{}/uploads/{name}", self.public_base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_writes_file_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("uploads"), "https://cms.example/");

        let url = store.put("abc.png", b"png-bytes").await.unwrap();

        assert_eq!(url, "https://cms.example/uploads/abc.png");
        let written = std::fs::read(dir.path().join("uploads/abc.png")).unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[tokio::test]
    async fn put_rejects_path_segments() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "http://localhost");
        assert!(store.put("../escape.png", b"x").await.is_err());
        assert!(store.put(".hidden", b"x").await.is_err());
    }

    #[tokio::test]
    async fn write_failure_hides_server_paths() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let store = LocalImageStore::new(blocker.join("uploads"), "http://localhost");

        let err = store.put("abc.png", b"x").await.unwrap_err();

        assert!(matches!(err, ApplicationError::Infrastructure(_)));
        let message = err.to_string();
        assert!(message.contains(STORE_FAILED));
        assert!(!message.contains(&*dir.path().to_string_lossy()));
    }
}
