use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    adapters::outbound::{
        documents::{HttpDocumentTransport, InMemoryDocumentTransport},
        gateway::{InMemoryCarrierGateway, SoapCarrierGateway},
        persistence::InMemoryExportRepository,
        storage::{FilesystemLabelStore, InMemoryLabelStore},
    },
    ports::{
        documents::DocumentTransport, gateway::CarrierGateway, repositories::ExportRepository,
        storage::LabelStore,
    },
    services::ExportServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub gateway_backend: GatewayBackend,
    pub label_store_backend: LabelStoreBackend,
}

/// Carrier gateway backend configuration
#[derive(Debug, Clone, Default)]
pub enum GatewayBackend {
    /// Scripted gateway that accepts everything; for tests and dry runs
    #[default]
    InMemory,
    /// Live SOAP web service client
    Soap,
}

/// Label storage backend configuration
#[derive(Debug, Clone, Default)]
pub enum LabelStoreBackend {
    #[default]
    InMemory,
    Filesystem {
        root: PathBuf,
    },
}

/// Application dependencies container
pub struct AppDependencies {
    pub gateway: Arc<dyn CarrierGateway>,
    pub documents: Arc<dyn DocumentTransport>,
    pub label_store: Arc<dyn LabelStore>,
    pub repository: Arc<dyn ExportRepository>,
}

/// Application services container
pub struct AppServices {
    pub export_service: ExportServiceImpl,
    /// The export repository backing the service, kept concrete so callers
    /// can seed and inspect records
    pub repository: Arc<InMemoryExportRepository>,
}

/// Errors during application construction
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid application configuration: {0}")]
    Configuration(String),
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_gateway_backend(mut self, backend: GatewayBackend) -> Self {
        self.config.gateway_backend = backend;
        self
    }

    pub fn with_label_store_backend(mut self, backend: LabelStoreBackend) -> Self {
        self.config.label_store_backend = backend;
        self
    }

    /// Build the application dependencies
    pub fn build_dependencies(&self) -> Result<AppDependencies, AppError> {
        let (gateway, documents, label_store) = self.create_adapters()?;
        let repository = Arc::new(InMemoryExportRepository::new());

        Ok(AppDependencies {
            gateway,
            documents,
            label_store,
            repository,
        })
    }

    fn create_adapters(
        &self,
    ) -> Result<
        (
            Arc<dyn CarrierGateway>,
            Arc<dyn DocumentTransport>,
            Arc<dyn LabelStore>,
        ),
        AppError,
    > {
        let gateway: Arc<dyn CarrierGateway> = match &self.config.gateway_backend {
            GatewayBackend::InMemory => Arc::new(InMemoryCarrierGateway::accepting("00000000")),
            GatewayBackend::Soap => Arc::new(SoapCarrierGateway::new()),
        };

        let documents: Arc<dyn DocumentTransport> = match &self.config.gateway_backend {
            GatewayBackend::InMemory => Arc::new(InMemoryDocumentTransport::new()),
            GatewayBackend::Soap => Arc::new(HttpDocumentTransport::new()),
        };

        let label_store: Arc<dyn LabelStore> = match &self.config.label_store_backend {
            LabelStoreBackend::InMemory => Arc::new(InMemoryLabelStore::new()),
            LabelStoreBackend::Filesystem { root } => {
                if root.as_os_str().is_empty() {
                    return Err(AppError::Configuration(
                        "label store root cannot be empty".to_string(),
                    ));
                }
                Arc::new(FilesystemLabelStore::new(root))
            }
        };

        Ok((gateway, documents, label_store))
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        let (gateway, documents, label_store) = self.create_adapters()?;
        let repository = Arc::new(InMemoryExportRepository::new());

        let export_service =
            ExportServiceImpl::new(gateway, documents, label_store, repository.clone());

        Ok(AppServices {
            export_service,
            repository,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create an application wired entirely to in-memory adapters
pub fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new().build()
}

/// Create an application talking to the live carrier web service, storing
/// labels under `labels_root`
pub fn create_live_app(labels_root: PathBuf) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_gateway_backend(GatewayBackend::Soap)
        .with_label_store_backend(LabelStoreBackend::Filesystem { root: labels_root })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_in_memory_app() {
        assert!(create_in_memory_app().is_ok());
    }

    #[test]
    fn rejects_empty_label_root() {
        let result = AppBuilder::new()
            .with_label_store_backend(LabelStoreBackend::Filesystem {
                root: PathBuf::new(),
            })
            .build();

        assert!(result.is_err());
    }
}
