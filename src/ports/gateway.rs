use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::{GatewayAccount, LabelPaths, LabelRequest, ShipmentRequest};
use crate::domain::value_objects::TrackingNumber;

/// Failures surfaced by the carrier gateway
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The carrier processed the call and refused it with a status code
    #[error("carrier rejected the request with status {code}")]
    Rejected { code: String },

    /// The call never completed (connect failure, timeout, non-2xx)
    #[error("carrier transport failure: {0}")]
    Transport(String),

    /// The carrier answered with a response this client cannot read
    #[error("malformed carrier response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Stable error code for notification keys
    pub fn code(&self) -> String {
        match self {
            GatewayError::Rejected { code } => code.clone(),
            GatewayError::Transport(_) => "network_error".to_string(),
            GatewayError::MalformedResponse(_) => "invalid_response".to_string(),
        }
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Port for the carrier's shipment web service
///
/// Account configuration travels with every call: the hosting platform may
/// run several gateways against different merchant accounts.
#[async_trait]
pub trait CarrierGateway: Send + Sync + 'static {
    /// Register a shipment with the carrier, returning the expedition number
    async fn submit_shipment(
        &self,
        request: &ShipmentRequest,
        account: &GatewayAccount,
    ) -> GatewayResult<TrackingNumber>;

    /// Request label document locations for a registered shipment
    async fn get_label(
        &self,
        request: &LabelRequest,
        account: &GatewayAccount,
    ) -> GatewayResult<LabelPaths>;
}
