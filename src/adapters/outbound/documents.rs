use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tokio::sync::RwLock;

use crate::ports::documents::{DocumentError, DocumentTransport};

/// Carrier domain the label paths are relative to
pub const CARRIER_DOCUMENT_BASE_URL: &str = "https://www.mondialrelay.fr";

/// HTTP implementation of DocumentTransport over the fixed carrier domain
pub struct HttpDocumentTransport {
    client: Client,
    base_url: String,
}

impl HttpDocumentTransport {
    pub fn new() -> Self {
        Self::with_base_url(CARRIER_DOCUMENT_BASE_URL)
    }

    /// Override the base URL, for exercising the adapter against a local
    /// server
    pub fn with_base_url(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for HttpDocumentTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentTransport for HttpDocumentTransport {
    async fn fetch(&self, relative_path: &str) -> Result<Bytes, DocumentError> {
        let url = if relative_path.starts_with('/') {
            format!("{}{}", self.base_url, relative_path)
        } else {
            format!("{}/{}", self.base_url, relative_path)
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DocumentError::Transport(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(DocumentError::NotFound(url));
        }
        if !status.is_success() {
            return Err(DocumentError::Status(status.as_u16()));
        }

        response
            .bytes()
            .await
            .map_err(|e| DocumentError::Transport(e.to_string()))
    }
}

/// In-memory implementation of DocumentTransport for testing and development
#[derive(Clone, Default)]
pub struct InMemoryDocumentTransport {
    documents: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl InMemoryDocumentTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `content` for `relative_path`
    pub async fn insert(&self, relative_path: &str, content: impl Into<Bytes>) {
        self.documents
            .write()
            .await
            .insert(relative_path.to_string(), content.into());
    }
}

#[async_trait]
impl DocumentTransport for InMemoryDocumentTransport {
    async fn fetch(&self, relative_path: &str) -> Result<Bytes, DocumentError> {
        self.documents
            .read()
            .await
            .get(relative_path)
            .cloned()
            .ok_or_else(|| DocumentError::NotFound(relative_path.to_string()))
    }
}
