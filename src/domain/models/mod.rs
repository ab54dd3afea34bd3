pub mod config;
pub mod export;
pub mod order;
pub mod request;

pub use config::{ExportConfig, GatewayAccount, ShipperConfig};
pub use export::{
    ExportCompletion, ExportOutcome, ExportState, ShippingExport, MONDIAL_RELAY_CARRIER_CODE,
};
pub use order::{Address, Order, Shipment, ShipmentState};
pub use request::{LabelPaths, LabelRequest, Party, ShipmentRequest, COLLECTION_MODE};
