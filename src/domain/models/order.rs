use serde::{Deserialize, Serialize};

/// Shipping state shared by shipments and orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentState {
    Ready,
    Shipped,
}

/// A shipping address as read from the order store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub full_name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country_code: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// The slice of an order this workflow reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub number: String,
    pub customer_id: u64,
    pub customer_email: String,
    pub shipping_address: Address,
    pub shipping_state: ShipmentState,
}

/// The slice of a shipment this workflow reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: u64,
    /// Shipping weight in kilograms
    pub shipping_weight: f64,
    /// Packed pickup reference, `id-networkCode-countryCode`
    pub pickup_reference: String,
    pub state: ShipmentState,
    #[serde(default)]
    pub tracking: Option<String>,
}
