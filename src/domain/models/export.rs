use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::order::{Order, Shipment};
use crate::domain::value_objects::TrackingNumber;

/// Gateway code identifying shipments this workflow is responsible for
pub const MONDIAL_RELAY_CARRIER_CODE: &str = "mondial_relay_shipping_gateway";

/// Lifecycle state of an export record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportState {
    Pending,
    Exported,
    /// Set by the platform, never by this workflow
    Failed,
}

/// The platform's export record for one order/shipment pair
///
/// Owned by the hosting platform. This workflow only ever advances it
/// through an [`ExportCompletion`]; it never creates or deletes records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingExport {
    pub id: u64,
    pub carrier_code: String,
    pub state: ExportState,
    pub shipment: Shipment,
    pub order: Order,
    #[serde(default)]
    pub label_path: Option<PathBuf>,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
}

/// State transition produced by a successful export
///
/// The workflow returns this instead of mutating platform entities in
/// place; the repository port applies it in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportCompletion {
    pub export_id: u64,
    pub shipment_id: u64,
    pub tracking: Option<TrackingNumber>,
    pub label_path: Option<PathBuf>,
    pub exported_at: DateTime<Utc>,
}

/// Outcome of processing one export record
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// The shipment was exported; tracking and label path are absent on the
    /// label-less path
    Exported {
        tracking: Option<TrackingNumber>,
        label_path: Option<PathBuf>,
    },

    /// The export is addressed to a different carrier; nothing was done
    NotApplicable,
}

impl ExportOutcome {
    /// Translation key for the user-visible success notification
    pub fn notification_key(&self) -> Option<&'static str> {
        match self {
            ExportOutcome::Exported { .. } => Some("bitbag.ui.shipment_data_has_been_exported"),
            ExportOutcome::NotApplicable => None,
        }
    }
}
