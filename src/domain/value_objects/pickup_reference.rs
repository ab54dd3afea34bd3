use crate::domain::errors::ValidationError;

/// A parsed pickup point reference.
///
/// The platform stores the reference packed as `id-networkCode-countryCode`
/// (e.g. `024595-24R-FR`); the carrier API wants the three components
/// separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PickupReference {
    point_id: String,
    network_code: String,
    country_code: String,
}

impl PickupReference {
    /// Parse a packed reference, requiring exactly three non-empty components
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let parts: Vec<&str> = raw.split('-').collect();

        if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
            return Err(ValidationError::MalformedPickupReference {
                raw: raw.to_string(),
            });
        }

        Ok(Self {
            point_id: parts[0].to_string(),
            network_code: parts[1].to_string(),
            country_code: parts[2].to_string(),
        })
    }

    /// The carrier-assigned pickup point identifier
    pub fn point_id(&self) -> &str {
        &self.point_id
    }

    /// The delivery network code (selects the carrier delivery mode)
    pub fn network_code(&self) -> &str {
        &self.network_code
    }

    /// The ISO country code of the pickup point
    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl std::fmt::Display for PickupReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.point_id, self.network_code, self.country_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_components() {
        let reference = PickupReference::parse("024595-24R-FR").unwrap();

        assert_eq!(reference.point_id(), "024595");
        assert_eq!(reference.network_code(), "24R");
        assert_eq!(reference.country_code(), "FR");
    }

    #[test]
    fn rejects_malformed_references() {
        assert!(PickupReference::parse("024595-FR").is_err());
        assert!(PickupReference::parse("024595-24R-FR-EXTRA").is_err());
        assert!(PickupReference::parse("").is_err());
        assert!(PickupReference::parse("024595--FR").is_err());
        assert!(PickupReference::parse("-24R-FR").is_err());
    }

    #[test]
    fn round_trips_through_display() {
        let reference = PickupReference::parse("024595-24R-FR").unwrap();
        assert_eq!(reference.to_string(), "024595-24R-FR");
    }
}
