use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Failures while persisting a label file
#[derive(Error, Debug)]
pub enum LabelStoreError {
    #[error("label store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("label store error: {0}")]
    Other(String),
}

/// Port for durable label storage
///
/// Writes are idempotent per filename: re-exporting a shipment overwrites
/// its previous label.
#[async_trait]
pub trait LabelStore: Send + Sync + 'static {
    /// Write label bytes under the given filename, returning the stored path
    async fn put(&self, filename: &str, content: &[u8]) -> Result<PathBuf, LabelStoreError>;
}
