use crate::domain::errors::ValidationError;

/// A carrier-assigned expedition number
///
/// Opaque to this service: the carrier allocates it on successful shipment
/// submission and expects it back verbatim on label requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyTrackingNumber);
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_opaque_values() {
        assert!(TrackingNumber::new("ABC123".to_string()).is_ok());
        assert!(TrackingNumber::new("31000001".to_string()).is_ok());
    }

    #[test]
    fn rejects_blank_values() {
        assert!(TrackingNumber::new("".to_string()).is_err());
        assert!(TrackingNumber::new("   ".to_string()).is_err());
    }
}
