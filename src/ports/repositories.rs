use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::ExportCompletion;

/// Failures while applying an export completion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("unknown export record {0}")]
    UnknownExport(u64),

    #[error("persistence backend failure: {0}")]
    Backend(String),
}

/// Port for the platform's export record store
///
/// The workflow never mutates platform entities directly; it hands the
/// repository one completion command and the repository applies every state
/// transition (shipment shipped, order shipped, export exported) in one go.
#[async_trait]
pub trait ExportRepository: Send + Sync + 'static {
    async fn complete(&self, completion: &ExportCompletion) -> Result<(), RepositoryError>;
}
