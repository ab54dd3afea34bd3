mod label_size;
mod pickup_reference;
mod tracking_number;

pub use label_size::LabelSize;
pub use pickup_reference::PickupReference;
pub use tracking_number::TrackingNumber;
