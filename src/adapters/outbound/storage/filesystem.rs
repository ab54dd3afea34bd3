use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::ports::storage::{LabelStore, LabelStoreError};

/// Filesystem implementation of LabelStore
///
/// Labels land flat under one root directory; writing the same filename
/// again overwrites the previous label.
pub struct FilesystemLabelStore {
    root: PathBuf,
}

impl FilesystemLabelStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl LabelStore for FilesystemLabelStore {
    async fn put(&self, filename: &str, content: &[u8]) -> Result<PathBuf, LabelStoreError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.root.join(filename);
        tokio::fs::write(&path, content).await?;

        debug!(path = %path.display(), bytes = content.len(), "label stored");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_and_overwrites_labels() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemLabelStore::new(dir.path().join("labels"));

        let path = store.put("12_ORD001.pdf", b"first").await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"first");

        let path = store.put("12_ORD001.pdf", b"second").await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"second");
    }
}
