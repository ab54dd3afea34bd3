pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    Address,
    ExportCompletion,
    ExportConfig,
    // Errors
    ExportError,
    ExportOutcome,
    ExportResult,
    ExportState,
    GatewayAccount,
    LabelPaths,
    LabelRequest,
    // Value objects
    LabelSize,
    // Models
    Order,
    Party,
    PickupReference,
    Shipment,
    ShipmentRequest,
    ShipmentState,
    ShipperConfig,
    ShippingExport,
    TrackingNumber,
    ValidationError,
    MONDIAL_RELAY_CARRIER_CODE,
};

// Port types - interfaces for external systems
pub use ports::{
    CarrierGateway, DocumentTransport, ExportRepository, ExportService, GatewayError, LabelStore,
};

// Service implementations - business logic
pub use services::ExportServiceImpl;

// Application factory and configuration
pub use app::{
    create_in_memory_app, create_live_app, AppBuilder, AppConfig, AppDependencies, AppError,
    AppServices, GatewayBackend, LabelStoreBackend,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    documents::{HttpDocumentTransport, InMemoryDocumentTransport},
    gateway::{InMemoryCarrierGateway, SoapCarrierGateway},
    persistence::InMemoryExportRepository,
    storage::{FilesystemLabelStore, InMemoryLabelStore},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, create_live_app, AppBuilder, AppServices, CarrierGateway,
        ExportConfig, ExportError, ExportOutcome, ExportRepository, ExportService,
        ExportServiceImpl, LabelSize, LabelStore, PickupReference, ShippingExport, TrackingNumber,
    };
}
