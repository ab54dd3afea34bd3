/// Language the carrier prints on labels for a destination country
///
/// Fixed table; every country the carrier does not localize falls back to
/// French.
pub fn label_language(country_code: &str) -> &'static str {
    match country_code {
        "FR" => "FR",
        "BE" => "NL",
        "ES" => "ES",
        _ => "FR",
    }
}

#[cfg(test)]
mod tests {
    use super::label_language;

    #[test]
    fn maps_known_countries() {
        assert_eq!(label_language("FR"), "FR");
        assert_eq!(label_language("BE"), "NL");
        assert_eq!(label_language("ES"), "ES");
    }

    #[test]
    fn falls_back_to_french() {
        assert_eq!(label_language("DE"), "FR");
        assert_eq!(label_language(""), "FR");
    }
}
