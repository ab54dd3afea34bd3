use std::sync::OnceLock;

use regex::Regex;

/// Latin-1 diacritics the carrier's legacy encoding cannot carry, mapped to
/// their plain ASCII form. `/` and the bare diaeresis get special handling
/// inherited from the original plugin.
const ACCENT_TABLE: &[(char, &str)] = &[
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "a"),
    ('ç', "c"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ñ', "n"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ö', "o"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ý', "y"),
    ('ÿ', "y"),
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Ä', "A"),
    ('Ç', "C"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ñ', "N"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ö', "O"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('Ü', "U"),
    ('Ý', "Y"),
    ('/', " "),
    ('¨', "e"),
];

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9\-]").expect("valid regex"))
}

fn leading_hyphens() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-+").expect("valid regex"))
}

fn trailing_hyphens() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+$").expect("valid regex"))
}

fn hyphen_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-{2,}").expect("valid regex"))
}

/// Fold known Latin-1 diacritics to their unaccented ASCII form
pub fn fold_accents(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text.chars() {
        match ACCENT_TABLE.iter().find(|(accented, _)| *accented == c) {
            Some((_, replacement)) => folded.push_str(replacement),
            None => folded.push(c),
        }
    }

    folded
}

/// Normalize a free-text address field for the carrier payload
///
/// Step order matters: accents are folded first, then every remaining
/// character outside `[A-Za-z0-9-]` collapses to a space, leading and
/// trailing hyphen runs are stripped, and interior runs of two or more
/// hyphens collapse to a single space. Idempotent; callers trim
/// surrounding whitespace themselves.
pub fn normalize(text: &str) -> String {
    let folded = fold_accents(text);
    let spaced = non_alphanumeric().replace_all(&folded, " ");
    let no_leading = leading_hyphens().replace(&spaced, "");
    let no_trailing = trailing_hyphens().replace(&no_leading, "");
    hyphen_runs().replace_all(&no_trailing, " ").into_owned()
}

/// Strip an order number down to the characters allowed in a label filename
pub fn alphanumeric_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Deterministic label filename stem for one shipment
pub fn label_filename(shipment_id: u64, order_number: &str) -> String {
    format!("{}_{}", shipment_id, alphanumeric_only(order_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_to_ascii() {
        assert_eq!(fold_accents("Orléans"), "Orleans");
        assert_eq!(fold_accents("Müller"), "Muller");
        assert_eq!(fold_accents("ÉTÉ"), "ETE");
        assert_eq!(fold_accents("a/b"), "a b");
    }

    #[test]
    fn collapses_unknown_characters_to_spaces() {
        assert_eq!(normalize("12, rue de l'Église"), "12  rue de l Eglise");
        assert_eq!(normalize("Quai n°3"), "Quai n 3");
    }

    #[test]
    fn strips_boundary_hyphens_and_collapses_runs() {
        assert_eq!(normalize("-Saint-Nazaire-"), "Saint-Nazaire");
        assert_eq!(normalize("Loire--Atlantique"), "Loire Atlantique");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn is_idempotent() {
        for input in [
            "12, rue de l'Église",
            "-Saint-Nazaire-",
            "Loire--Atlantique",
            "Müller & Fils / Département 44",
            "déjà-vu",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {input:?}");
        }
    }

    #[test]
    fn never_leaves_boundary_hyphens() {
        for input in ["-abc", "abc-", "--abc--", "-a-b-"] {
            let out = normalize(input);
            assert!(!out.starts_with('-'), "leading hyphen in {out:?}");
            assert!(!out.ends_with('-'), "trailing hyphen in {out:?}");
        }
    }

    #[test]
    fn filename_keeps_only_alphanumerics() {
        assert_eq!(label_filename(42, "ORD-2024/001"), "42_ORD2024001");
        assert_eq!(label_filename(7, "000000012"), "7_000000012");
    }
}
