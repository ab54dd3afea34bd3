use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::{GatewayAccount, LabelPaths, LabelRequest, ShipmentRequest};
use crate::domain::value_objects::TrackingNumber;
use crate::ports::gateway::{CarrierGateway, GatewayError, GatewayResult};

/// In-memory implementation of CarrierGateway for testing and development
///
/// Replays scripted responses and records every submission it receives so
/// tests can assert which calls were (or were not) made.
#[derive(Clone)]
pub struct InMemoryCarrierGateway {
    state: Arc<RwLock<GatewayState>>,
}

struct GatewayState {
    submission: GatewayResult<TrackingNumber>,
    label: GatewayResult<LabelPaths>,
    submissions: Vec<ShipmentRequest>,
    label_requests: Vec<LabelRequest>,
}

impl InMemoryCarrierGateway {
    /// Gateway that accepts every submission with the given tracking number
    /// and answers label requests with an A4/A5 pair derived from it
    pub fn accepting(tracking: &str) -> Self {
        let paths = LabelPaths {
            a4: Some(format!("/ww2/pdf/{}_A4.pdf", tracking)),
            a5: Some(format!("/ww2/pdf/{}_A5.pdf", tracking)),
            wallet: None,
        };

        Self::scripted(
            TrackingNumber::new(tracking.to_string()).map_err(|e| {
                GatewayError::MalformedResponse(e.to_string())
            }),
            Ok(paths),
        )
    }

    /// Gateway whose submission call fails with a carrier status code
    pub fn rejecting_submission(code: &str) -> Self {
        Self::scripted(
            Err(GatewayError::Rejected {
                code: code.to_string(),
            }),
            Err(GatewayError::Rejected {
                code: code.to_string(),
            }),
        )
    }

    /// Gateway that accepts submissions but fails label retrieval
    pub fn rejecting_label(tracking: &str, code: &str) -> Self {
        Self::scripted(
            TrackingNumber::new(tracking.to_string())
                .map_err(|e| GatewayError::MalformedResponse(e.to_string())),
            Err(GatewayError::Rejected {
                code: code.to_string(),
            }),
        )
    }

    pub fn scripted(
        submission: GatewayResult<TrackingNumber>,
        label: GatewayResult<LabelPaths>,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(GatewayState {
                submission,
                label,
                submissions: Vec::new(),
                label_requests: Vec::new(),
            })),
        }
    }

    /// Number of submission calls received
    pub async fn submission_count(&self) -> usize {
        self.state.read().await.submissions.len()
    }

    /// Number of label calls received
    pub async fn label_request_count(&self) -> usize {
        self.state.read().await.label_requests.len()
    }

    /// The last submitted payload, if any
    pub async fn last_submission(&self) -> Option<ShipmentRequest> {
        self.state.read().await.submissions.last().cloned()
    }
}

#[async_trait]
impl CarrierGateway for InMemoryCarrierGateway {
    async fn submit_shipment(
        &self,
        request: &ShipmentRequest,
        _account: &GatewayAccount,
    ) -> GatewayResult<TrackingNumber> {
        let mut state = self.state.write().await;
        state.submissions.push(request.clone());
        state.submission.clone()
    }

    async fn get_label(
        &self,
        request: &LabelRequest,
        _account: &GatewayAccount,
    ) -> GatewayResult<LabelPaths> {
        let mut state = self.state.write().await;
        state.label_requests.push(request.clone());
        state.label.clone()
    }
}
