use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    domain::{
        errors::{ExportError, ExportResult},
        language::label_language,
        models::{
            ExportCompletion, ExportConfig, ExportOutcome, LabelRequest, Party, ShipmentRequest,
            ShippingExport, COLLECTION_MODE, MONDIAL_RELAY_CARRIER_CODE,
        },
        normalize::{label_filename, normalize},
        value_objects::PickupReference,
    },
    ports::{
        documents::DocumentTransport, gateway::CarrierGateway, repositories::ExportRepository,
        services::ExportService, storage::LabelStore,
    },
};

/// File extension of carrier labels
const LABEL_EXTENSION: &str = "pdf";

/// Implementation of the shipment submission and label retrieval workflow
///
/// Sequential, single-transaction pipeline: every step either advances or
/// aborts the whole export, and nothing is persisted before the final
/// completion command.
#[derive(Clone)]
pub struct ExportServiceImpl {
    gateway: Arc<dyn CarrierGateway>,
    documents: Arc<dyn DocumentTransport>,
    labels: Arc<dyn LabelStore>,
    repository: Arc<dyn ExportRepository>,
}

impl ExportServiceImpl {
    pub fn new(
        gateway: Arc<dyn CarrierGateway>,
        documents: Arc<dyn DocumentTransport>,
        labels: Arc<dyn LabelStore>,
        repository: Arc<dyn ExportRepository>,
    ) -> Self {
        Self {
            gateway,
            documents,
            labels,
            repository,
        }
    }

    async fn finalize(
        &self,
        completion: ExportCompletion,
    ) -> ExportResult<ExportOutcome> {
        self.repository
            .complete(&completion)
            .await
            .map_err(|e| ExportError::PersistenceFailed {
                message: e.to_string(),
            })?;

        info!(
            export_id = completion.export_id,
            shipment_id = completion.shipment_id,
            "export completed"
        );

        Ok(ExportOutcome::Exported {
            tracking: completion.tracking,
            label_path: completion.label_path,
        })
    }
}

#[async_trait]
impl ExportService for ExportServiceImpl {
    async fn process(
        &self,
        export: &ShippingExport,
        config: &ExportConfig,
    ) -> ExportResult<ExportOutcome> {
        if export.carrier_code != MONDIAL_RELAY_CARRIER_CODE {
            debug!(
                export_id = export.id,
                carrier = %export.carrier_code,
                "export addressed to another carrier, skipping"
            );
            return Ok(ExportOutcome::NotApplicable);
        }

        if !config.label_generate {
            // Label-less path: mark shipped/exported without contacting the
            // carrier.
            return self
                .finalize(ExportCompletion {
                    export_id: export.id,
                    shipment_id: export.shipment.id,
                    tracking: None,
                    label_path: None,
                    exported_at: Utc::now(),
                })
                .await;
        }

        // Fail fast on bad input before any network call.
        config.validate()?;
        let request = build_shipment_request(export, config)?;

        let tracking = self
            .gateway
            .submit_shipment(&request, &config.account)
            .await
            .map_err(|e| {
                warn!(export_id = export.id, error = %e, "shipment submission failed");
                ExportError::CarrierSubmissionFailed { code: e.code() }
            })?;

        info!(
            export_id = export.id,
            tracking = %tracking,
            "shipment registered with carrier"
        );

        let label_request = LabelRequest {
            tracking: tracking.clone(),
            country_code: export.order.shipping_address.country_code.clone(),
        };

        let paths = self
            .gateway
            .get_label(&label_request, &config.account)
            .await
            .map_err(|e| {
                warn!(export_id = export.id, tracking = %tracking, error = %e, "label retrieval failed");
                ExportError::LabelRetrievalFailed {
                    code: e.code(),
                    tracking: tracking.clone(),
                }
            })?;

        let relative_path = paths.for_size(config.label_size).ok_or_else(|| {
            warn!(
                export_id = export.id,
                size = %config.label_size,
                "label response carries no document for the configured size"
            );
            ExportError::LabelRetrievalFailed {
                code: "invalid_response".to_string(),
                tracking: tracking.clone(),
            }
        })?;

        let content = self
            .documents
            .fetch(relative_path)
            .await
            .map_err(|e| ExportError::LabelDownloadFailed {
                message: e.to_string(),
            })?;

        let filename = format!(
            "{}.{}",
            label_filename(export.shipment.id, &export.order.number),
            LABEL_EXTENSION
        );

        let label_path = self
            .labels
            .put(&filename, &content)
            .await
            .map_err(|e| ExportError::PersistenceFailed {
                message: e.to_string(),
            })?;

        self.finalize(ExportCompletion {
            export_id: export.id,
            shipment_id: export.shipment.id,
            tracking: Some(tracking),
            label_path: Some(label_path),
            exported_at: Utc::now(),
        })
        .await
    }
}

/// Assemble the carrier payload from order, shipment and configuration
///
/// Pure except for the pickup reference parse; every free-text address
/// field passes through accent folding and normalization.
pub(crate) fn build_shipment_request(
    export: &ShippingExport,
    config: &ExportConfig,
) -> ExportResult<ShipmentRequest> {
    let pickup = PickupReference::parse(&export.shipment.pickup_reference).map_err(|_| {
        ExportError::InvalidPickupReference {
            reference: export.shipment.pickup_reference.clone(),
        }
    })?;

    let weight_grams = compute_weight_grams(export.shipment.shipping_weight, config.weight_divisor());

    let shipper = Party {
        language: label_language(&config.shipper.country_code).to_string(),
        line1: normalize(&config.shipper.company).trim().to_string(),
        line2: String::new(),
        street: normalize(&config.shipper.street).trim().to_string(),
        city: normalize(&config.shipper.city).trim().to_string(),
        postcode: config.shipper.postcode.clone(),
        country_code: normalize(&config.shipper.country_code).trim().to_string(),
        phone: config.shipper.phone_number.clone(),
        email: config.shipper.email.clone(),
    };

    let address = &export.order.shipping_address;
    let recipient = Party {
        language: label_language(&address.country_code).to_string(),
        line1: normalize(&address.full_name).trim().to_string(),
        line2: address
            .company
            .as_deref()
            .map(|company| normalize(company).trim().to_string())
            .unwrap_or_default(),
        street: normalize(&address.street).trim().to_string(),
        city: normalize(&address.city).trim().to_string(),
        postcode: address.postcode.clone(),
        country_code: normalize(&address.country_code).trim().to_string(),
        phone: address.phone_number.clone().unwrap_or_default(),
        email: export.order.customer_email.clone(),
    };

    Ok(ShipmentRequest {
        order_number: export.order.number.clone(),
        customer_id: export.order.customer_id,
        weight_grams,
        parcel_count: 1,
        collection_mode: COLLECTION_MODE.to_string(),
        delivery_mode: pickup.network_code().to_string(),
        shipper,
        recipient,
        pickup,
        insured_value: 0,
        instructions: String::new(),
    })
}

/// Weight sent to the carrier: shipment weight in kilograms scaled to grams,
/// divided by the configured per-product divisor
fn compute_weight_grams(weight_kg: f64, divisor: u32) -> u32 {
    ((weight_kg * 1000.0) / divisor as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        Address, ExportState, GatewayAccount, Order, Shipment, ShipmentState, ShipperConfig,
    };
    use crate::domain::value_objects::LabelSize;

    fn sample_export() -> ShippingExport {
        ShippingExport {
            id: 1,
            carrier_code: MONDIAL_RELAY_CARRIER_CODE.to_string(),
            state: ExportState::Pending,
            shipment: Shipment {
                id: 12,
                shipping_weight: 2.5,
                pickup_reference: "024595-24R-FR".to_string(),
                state: ShipmentState::Ready,
                tracking: None,
            },
            order: Order {
                number: "ORD-001".to_string(),
                customer_id: 77,
                customer_email: "claire@example.com".to_string(),
                shipping_address: Address {
                    full_name: "Claire Léger".to_string(),
                    company: None,
                    street: "3, quai de l'Île".to_string(),
                    city: "Liège".to_string(),
                    postcode: "4000".to_string(),
                    country_code: "BE".to_string(),
                    phone_number: Some("+3242000000".to_string()),
                },
                shipping_state: ShipmentState::Ready,
            },
            label_path: None,
            exported_at: None,
        }
    }

    fn sample_config() -> ExportConfig {
        ExportConfig {
            label_generate: true,
            label_size: LabelSize::A4,
            product_weight: None,
            shipper: ShipperConfig {
                company: "Magentix".to_string(),
                street: "1 rue du Commerce".to_string(),
                city: "Nantes".to_string(),
                postcode: "44000".to_string(),
                country_code: "FR".to_string(),
                phone_number: "+33240000000".to_string(),
                email: "shop@example.com".to_string(),
            },
            account: GatewayAccount {
                merchant_id: "BDTEST13".to_string(),
                private_key: "PrivateK".to_string(),
                endpoint: "https://api.mondialrelay.com/Web_Services.asmx".to_string(),
            },
        }
    }

    #[test]
    fn weight_defaults_to_divisor_one() {
        assert_eq!(compute_weight_grams(2.5, 1), 2500);
    }

    #[test]
    fn weight_honors_configured_divisor() {
        assert_eq!(compute_weight_grams(2.5, 10), 250);
    }

    #[test]
    fn builds_request_with_normalized_fields() {
        let request = build_shipment_request(&sample_export(), &sample_config()).unwrap();

        assert_eq!(request.weight_grams, 2500);
        assert_eq!(request.parcel_count, 1);
        assert_eq!(request.collection_mode, "CCC");
        assert_eq!(request.delivery_mode, "24R");
        assert_eq!(request.pickup.point_id(), "024595");
        assert_eq!(request.recipient.language, "NL");
        assert_eq!(request.shipper.language, "FR");
        assert_eq!(request.recipient.line1, "Claire Leger");
        assert_eq!(request.recipient.street, "3  quai de l Ile");
        assert_eq!(request.recipient.city, "Liege");
        assert_eq!(request.insured_value, 0);
    }

    #[test]
    fn rejects_malformed_pickup_reference() {
        let mut export = sample_export();
        export.shipment.pickup_reference = "024595-FR".to_string();

        match build_shipment_request(&export, &sample_config()) {
            Err(ExportError::InvalidPickupReference { reference }) => {
                assert_eq!(reference, "024595-FR");
            }
            other => panic!("expected InvalidPickupReference, got {:?}", other),
        }
    }
}
