use async_trait::async_trait;

use crate::domain::errors::ExportResult;
use crate::domain::models::{ExportConfig, ExportOutcome, ShippingExport};

/// Port for the shipment export workflow
#[async_trait]
pub trait ExportService: Send + Sync + 'static {
    /// Run the full submission/label workflow for one export record
    ///
    /// Returns `ExportOutcome::NotApplicable` when the record belongs to a
    /// different carrier. Any error leaves the export record untouched, so
    /// reprocessing the same record is always safe.
    async fn process(
        &self,
        export: &ShippingExport,
        config: &ExportConfig,
    ) -> ExportResult<ExportOutcome>;
}
