pub mod documents;
pub mod gateway;
pub mod repositories;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use documents::{DocumentError, DocumentTransport};
pub use gateway::{CarrierGateway, GatewayError, GatewayResult};
pub use repositories::{ExportRepository, RepositoryError};
pub use services::ExportService;
pub use storage::{LabelStore, LabelStoreError};
