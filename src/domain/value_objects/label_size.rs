use crate::domain::errors::ValidationError;

/// Label format requested from the carrier
///
/// The label response carries one relative URL per format; the configured
/// size selects which one gets downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LabelSize {
    A4,
    A5,
    /// 10x15 cm wallet format
    Wallet,
}

impl LabelSize {
    /// Parse the `label_size` configuration value
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A4" => Ok(LabelSize::A4),
            "A5" => Ok(LabelSize::A5),
            "10X15" => Ok(LabelSize::Wallet),
            _ => Err(ValidationError::UnknownLabelSize {
                value: value.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for LabelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelSize::A4 => write!(f, "A4"),
            LabelSize::A5 => write!(f, "A5"),
            LabelSize::Wallet => write!(f, "10x15"),
        }
    }
}

impl std::str::FromStr for LabelSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_sizes() {
        assert_eq!(LabelSize::parse("A4").unwrap(), LabelSize::A4);
        assert_eq!(LabelSize::parse("a5").unwrap(), LabelSize::A5);
        assert_eq!(LabelSize::parse("10x15").unwrap(), LabelSize::Wallet);
    }

    #[test]
    fn rejects_unknown_sizes() {
        assert!(LabelSize::parse("letter").is_err());
        assert!(LabelSize::parse("").is_err());
    }
}
