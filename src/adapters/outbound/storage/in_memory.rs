use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::ports::storage::{LabelStore, LabelStoreError};

/// In-memory implementation of LabelStore for testing and development
#[derive(Clone, Default)]
pub struct InMemoryLabelStore {
    files: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl InMemoryLabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, filename: &str) -> Option<Bytes> {
        self.files.read().await.get(filename).cloned()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

#[async_trait]
impl LabelStore for InMemoryLabelStore {
    async fn put(&self, filename: &str, content: &[u8]) -> Result<PathBuf, LabelStoreError> {
        self.files
            .write()
            .await
            .insert(filename.to_string(), Bytes::copy_from_slice(content));

        Ok(PathBuf::from(filename))
    }
}
