const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("pt-br", "Portuguese"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
];

const FALLBACK_LANGUAGE_NAME: &str = "English";

/// Name of the level-2 section that holds entries for `code`.
///
/// Unknown codes resolve to the English section.
pub fn section_name(code: &str) -> &'static str {
    let code = code.trim().to_ascii_lowercase();
    LANGUAGE_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(FALLBACK_LANGUAGE_NAME)
}

pub fn is_known(code: &str) -> bool {
    let code = code.trim().to_ascii_lowercase();
    LANGUAGE_NAMES.iter().any(|(known, _)| *known == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(section_name("en"), "English");
        assert_eq!(section_name("zh"), "Chinese");
        assert_eq!(section_name("pt"), "Portuguese");
        assert_eq!(section_name("pt-br"), "Portuguese");
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(section_name(" PT-BR "), "Portuguese");
        assert!(is_known("Ko"));
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        assert_eq!(section_name("xx"), "English");
        assert_eq!(section_name(""), "English");
        assert!(!is_known("xx"));
    }
}
