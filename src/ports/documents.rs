use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Failures while downloading a label document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("document transport failure: {0}")]
    Transport(String),

    #[error("unexpected status {0} fetching document")]
    Status(u16),

    #[error("document not found at {0}")]
    NotFound(String),
}

/// Port for fetching label bytes from the carrier's document host
///
/// The label response only carries server-relative paths; the adapter owns
/// the fixed base domain.
#[async_trait]
pub trait DocumentTransport: Send + Sync + 'static {
    async fn fetch(&self, relative_path: &str) -> Result<Bytes, DocumentError>;
}
