// tests/support/mocks/storage.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mokkan_content::application::{ApplicationResult, ports::storage::ImageStore};

pub const TEST_BASE_URL: &str = "http://cms.test";

/// 書き込まれたファイルを保持するだけのストア
#[derive(Default)]
pub struct MemoryImageStore {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn read(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(name).cloned()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> ApplicationResult<String> {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes.to_vec());
        Ok(format!("{TEST_BASE_URL}/uploads/{name}"))
    }
}
