use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::models::{ExportCompletion, ExportState, ShipmentState, ShippingExport},
    ports::repositories::{ExportRepository, RepositoryError},
};

/// In-memory implementation of ExportRepository for testing and development
///
/// Stands in for the platform's export record store: holds seeded records
/// and applies completion commands the way the real ORM layer would.
#[derive(Clone, Default)]
pub struct InMemoryExportRepository {
    records: Arc<RwLock<HashMap<u64, ShippingExport>>>,
}

impl InMemoryExportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an export record the workflow may later complete
    pub async fn seed(&self, export: ShippingExport) {
        self.records.write().await.insert(export.id, export);
    }

    pub async fn get(&self, export_id: u64) -> Option<ShippingExport> {
        self.records.read().await.get(&export_id).cloned()
    }
}

#[async_trait]
impl ExportRepository for InMemoryExportRepository {
    async fn complete(&self, completion: &ExportCompletion) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;

        let record = records
            .get_mut(&completion.export_id)
            .ok_or(RepositoryError::UnknownExport(completion.export_id))?;

        record.shipment.state = ShipmentState::Shipped;
        record.order.shipping_state = ShipmentState::Shipped;
        record.shipment.tracking = completion
            .tracking
            .as_ref()
            .map(|tracking| tracking.as_str().to_string());
        record.label_path = completion.label_path.clone();
        record.state = ExportState::Exported;
        record.exported_at = Some(completion.exported_at);

        Ok(())
    }
}
