use crate::domain::value_objects::{LabelSize, PickupReference, TrackingNumber};

/// Collection mode sent with every submission (merchant drop-off)
pub const COLLECTION_MODE: &str = "CCC";

/// One side of a shipment, already normalized for the carrier
///
/// `line1` carries the shipper company or the recipient full name; `line2`
/// carries the recipient company when present.
#[derive(Debug, Clone, PartialEq)]
pub struct Party {
    pub language: String,
    pub line1: String,
    pub line2: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country_code: String,
    pub phone: String,
    pub email: String,
}

/// A fully built carrier submission payload
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRequest {
    pub order_number: String,
    pub customer_id: u64,
    /// Computed weight in grams
    pub weight_grams: u32,
    /// Always 1: one parcel per shipment
    pub parcel_count: u32,
    pub collection_mode: String,
    /// Delivery mode, taken from the pickup network code
    pub delivery_mode: String,
    pub shipper: Party,
    pub recipient: Party,
    pub pickup: PickupReference,
    /// Declared/insured value; the plugin never sets one
    pub insured_value: u32,
    pub instructions: String,
}

/// Label retrieval request: which shipment, rendered in which language
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    pub tracking: TrackingNumber,
    pub country_code: String,
}

/// Server-relative label document URLs returned by the carrier, one per
/// supported format
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelPaths {
    pub a4: Option<String>,
    pub a5: Option<String>,
    pub wallet: Option<String>,
}

impl LabelPaths {
    /// Select the relative path for the configured label size
    pub fn for_size(&self, size: LabelSize) -> Option<&str> {
        match size {
            LabelSize::A4 => self.a4.as_deref(),
            LabelSize::A5 => self.a5.as_deref(),
            LabelSize::Wallet => self.wallet.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_path_by_size() {
        let paths = LabelPaths {
            a4: Some("/label/a4.pdf".to_string()),
            a5: None,
            wallet: Some("/label/10x15.pdf".to_string()),
        };

        assert_eq!(paths.for_size(LabelSize::A4), Some("/label/a4.pdf"));
        assert_eq!(paths.for_size(LabelSize::A5), None);
        assert_eq!(paths.for_size(LabelSize::Wallet), Some("/label/10x15.pdf"));
    }
}
