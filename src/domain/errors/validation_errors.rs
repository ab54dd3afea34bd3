/// Validation errors for domain value objects and input data
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Pickup reference did not decompose into `id-networkCode-countryCode`
    MalformedPickupReference { raw: String },

    /// Tracking number was empty or blank
    EmptyTrackingNumber,

    /// The `label_size` configuration value matched no known format
    UnknownLabelSize { value: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MalformedPickupReference { raw } => {
                write!(
                    f,
                    "Pickup reference '{}' is not of the form id-networkCode-countryCode",
                    raw
                )
            }
            ValidationError::EmptyTrackingNumber => {
                write!(f, "Tracking number cannot be empty")
            }
            ValidationError::UnknownLabelSize { value } => {
                write!(
                    f,
                    "Unknown label size '{}' (expected A4, A5 or 10x15)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
