//! Category extraction from free-text descriptions.
//!
//! A description such as `"РАБОТА: Закрыл баг"` carries its category as an
//! upper-case prefix before the first colon. Anything else belongs to
//! [`DEFAULT_CATEGORY`].

/// Category assigned to descriptions without an upper-case prefix ("OTHER").
pub const DEFAULT_CATEGORY: &str = "ДРУГОЕ";

/// Split a description into `(category, body)`.
///
/// When the text before the first colon, trimmed, is upper-case, it is the
/// category and the trimmed remainder is the body. Otherwise the category is
/// [`DEFAULT_CATEGORY`] and the body is the description unchanged.
pub fn extract_group(description: &str) -> (&str, &str) {
    if let Some((prefix, rest)) = description.split_once(':') {
        let prefix = prefix.trim();
        if is_upper(prefix) {
            return (prefix, rest.trim());
        }
    }
    (DEFAULT_CATEGORY, description)
}

/// Build a description that extracts back into `category`.
pub fn compose_description(category: &str, body: &str) -> String {
    format!("{}: {}", category, body.trim())
}

/// Whether descriptions composed with `category` extract back into it.
pub fn is_valid_category(category: &str) -> bool {
    extract_group(&compose_description(category, "x")).0 == category
}

// At least one cased letter and no lower-case ones; digits and punctuation are ignored.
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_uppercase_prefix() {
        assert_eq!(
            extract_group("РАБОТА: Закрыл баг"),
            ("РАБОТА", "Закрыл баг")
        );
        assert_eq!(extract_group("  SPORT :  ran 5k  "), ("SPORT", "ran 5k"));
    }

    #[test]
    fn test_no_colon_falls_back_to_default() {
        assert_eq!(extract_group("random note"), (DEFAULT_CATEGORY, "random note"));
    }

    #[test]
    fn test_lowercase_or_mixed_prefix_falls_back() {
        let (category, body) = extract_group("Работа: что-то");
        assert_eq!(category, DEFAULT_CATEGORY);
        assert_eq!(body, "Работа: что-то");

        let (category, body) = extract_group("work: thing");
        assert_eq!(category, DEFAULT_CATEGORY);
        assert_eq!(body, "work: thing");
    }

    #[test]
    fn test_prefix_without_letters_is_not_a_category() {
        assert_eq!(extract_group("2024: year"), (DEFAULT_CATEGORY, "2024: year"));
        assert_eq!(extract_group(": empty"), (DEFAULT_CATEGORY, ": empty"));
    }

    #[test]
    fn test_only_first_colon_splits() {
        assert_eq!(
            extract_group("DEV: fix: null deref"),
            ("DEV", "fix: null deref")
        );
    }

    #[test]
    fn test_prefix_with_digits_and_upper_letters() {
        assert_eq!(extract_group("Q3 GOALS: ship"), ("Q3 GOALS", "ship"));
    }

    #[test]
    fn test_compose_round_trips() {
        let description = compose_description("УЧЁБА", " глава 3 ");
        assert_eq!(description, "УЧЁБА: глава 3");
        assert_eq!(extract_group(&description), ("УЧЁБА", "глава 3"));
    }

    #[test]
    fn test_valid_categories() {
        assert!(is_valid_category("РАБОТА"));
        assert!(is_valid_category("Q3 GOALS"));
        assert!(is_valid_category(DEFAULT_CATEGORY));

        assert!(!is_valid_category("work"));
        assert!(!is_valid_category("Работа"));
        assert!(!is_valid_category("A:B"));
        assert!(!is_valid_category(" A"));
        assert!(!is_valid_category(""));
    }
}
