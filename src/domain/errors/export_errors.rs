use crate::domain::value_objects::TrackingNumber;

/// Errors that can abort a shipment export
///
/// Every variant is terminal for the current attempt: the export record is
/// left in its prior state, so reprocessing the export is always safe.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Pickup reference did not decompose into id-networkCode-countryCode
    InvalidPickupReference { reference: String },

    /// A required configuration key was absent or empty
    MissingConfiguration { key: &'static str },

    /// A configuration key was present but unusable
    InvalidConfiguration { key: &'static str, reason: String },

    /// The carrier refused the shipment, or the submission call never
    /// reached it
    CarrierSubmissionFailed { code: String },

    /// The shipment was registered but the label request failed; the
    /// carrier-assigned tracking number is carried so callers can decide
    /// what to do with it
    LabelRetrievalFailed {
        code: String,
        tracking: TrackingNumber,
    },

    /// The label document could not be downloaded from the carrier domain
    LabelDownloadFailed { message: String },

    /// Label file write or export record persistence failed
    PersistenceFailed { message: String },
}

impl ExportError {
    /// Short machine-readable code, also the suffix of the notification key
    pub fn code(&self) -> &str {
        match self {
            ExportError::InvalidPickupReference { .. } => "invalid_pickup_reference",
            ExportError::MissingConfiguration { .. } => "missing_configuration",
            ExportError::InvalidConfiguration { .. } => "invalid_configuration",
            ExportError::CarrierSubmissionFailed { code } => code,
            ExportError::LabelRetrievalFailed { code, .. } => code,
            ExportError::LabelDownloadFailed { .. } => "label_download_failed",
            ExportError::PersistenceFailed { .. } => "persistence_failed",
        }
    }

    /// Translation key for the user-visible error notification
    ///
    /// Carrier failures reuse the plugin's historical key prefix so existing
    /// translation catalogs keep working.
    pub fn notification_key(&self) -> String {
        format!("mondial_relay.pickup.list.error.{}", self.code())
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::InvalidPickupReference { reference } => {
                write!(f, "Invalid pickup reference: '{}'", reference)
            }
            ExportError::MissingConfiguration { key } => {
                write!(f, "Missing required configuration key '{}'", key)
            }
            ExportError::InvalidConfiguration { key, reason } => {
                write!(f, "Invalid configuration key '{}': {}", key, reason)
            }
            ExportError::CarrierSubmissionFailed { code } => {
                write!(f, "Carrier rejected the shipment submission: {}", code)
            }
            ExportError::LabelRetrievalFailed { code, tracking } => {
                write!(
                    f,
                    "Label retrieval failed for shipment {}: {}",
                    tracking, code
                )
            }
            ExportError::LabelDownloadFailed { message } => {
                write!(f, "Label download failed: {}", message)
            }
            ExportError::PersistenceFailed { message } => {
                write!(f, "Persistence failed: {}", message)
            }
        }
    }
}

impl std::error::Error for ExportError {}

/// Result type for export workflow operations
pub type ExportResult<T> = Result<T, ExportError>;
