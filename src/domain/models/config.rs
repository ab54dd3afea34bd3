use serde::{Deserialize, Serialize};

use crate::domain::errors::{ExportError, ExportResult};
use crate::domain::value_objects::LabelSize;

/// Per-call carrier account configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayAccount {
    /// Merchant identifier ("Enseigne")
    pub merchant_id: String,
    /// Private key mixed into the request security hash
    pub private_key: String,
    /// Web service endpoint URL
    pub endpoint: String,
}

/// Origin address printed on every label, from gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipperConfig {
    pub company: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country_code: String,
    pub phone_number: String,
    pub email: String,
}

/// Gateway configuration consumed by the export workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Gate for the whole label branch; when false the export is marked
    /// shipped without contacting the carrier
    pub label_generate: bool,
    pub label_size: LabelSize,
    /// Divisor applied to the shipment weight; absent means 1
    #[serde(default)]
    pub product_weight: Option<u32>,
    pub shipper: ShipperConfig,
    pub account: GatewayAccount,
}

impl ExportConfig {
    /// Effective weight divisor
    pub fn weight_divisor(&self) -> u32 {
        self.product_weight.unwrap_or(1)
    }

    /// Check required keys before any network call is made
    pub fn validate(&self) -> ExportResult<()> {
        if self.product_weight == Some(0) {
            return Err(ExportError::InvalidConfiguration {
                key: "product_weight",
                reason: "divisor must be non-zero".to_string(),
            });
        }

        let required: [(&'static str, &str); 5] = [
            ("label_shipper_company", &self.shipper.company),
            ("label_shipper_street", &self.shipper.street),
            ("label_shipper_city", &self.shipper.city),
            ("label_shipper_postcode", &self.shipper.postcode),
            ("label_shipper_country_code", &self.shipper.country_code),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ExportError::MissingConfiguration { key });
            }
        }

        if self.account.merchant_id.trim().is_empty() {
            return Err(ExportError::MissingConfiguration {
                key: "gateway_merchant_id",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ExportConfig {
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
    fn divisor_defaults_to_one() {
        assert_eq!(config().weight_divisor(), 1);

        let mut with_divisor = config();
        with_divisor.product_weight = Some(10);
        assert_eq!(with_divisor.weight_divisor(), 10);
    }

    #[test]
    fn rejects_blank_shipper_fields() {
        let mut broken = config();
        broken.shipper.city = "  ".to_string();

        match broken.validate() {
            Err(ExportError::MissingConfiguration { key }) => {
                assert_eq!(key, "label_shipper_city");
            }
            other => panic!("expected MissingConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_divisor() {
        let mut broken = config();
        broken.product_weight = Some(0);
        assert!(broken.validate().is_err());
    }
}
