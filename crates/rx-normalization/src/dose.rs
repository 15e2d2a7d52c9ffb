//! Dose (strength) extraction from free-text ingredient lists.

use std::sync::LazyLock;

use regex::Regex;

/// Captures the text of the first non-empty parenthesized group.
static STRENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("valid strength regex"));

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_dose_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Extracts the dose from an `active_ingredients` value.
///
/// Takes the first parenthesized group and removes all whitespace from it.
/// Missing ingredients and text without parentheses yield an empty dose.
///
/// ```
/// use rx_normalization::extract_dose;
///
/// assert_eq!(extract_dose(Some("Morphine Sulfate (30 MG)")), "30MG");
/// assert_eq!(extract_dose(Some("Aspirin")), "");
/// assert_eq!(extract_dose(None), "");
/// ```
pub fn extract_dose(active_ingredients: Option<&str>) -> String {
    let text = active_ingredients.unwrap_or_default();
    STRENGTH_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().chars().filter(|c| !is_dose_space(*c)).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_group_wins() {
        assert_eq!(extract_dose(Some("X (A) (B)")), "A");
        assert_eq!(
            extract_dose(Some("Acetaminophen (325 MG) / Oxycodone (5 MG)")),
            "325MG"
        );
    }

    #[test]
    fn empty_group_is_skipped() {
        assert_eq!(extract_dose(Some("X () (5 MG)")), "5MG");
    }

    #[test]
    fn unclosed_group_has_no_dose() {
        assert_eq!(extract_dose(Some("Thing (30 MG")), "");
    }

    #[test]
    fn nested_open_paren_is_kept() {
        assert_eq!(extract_dose(Some("((30 MG)")), "(30MG");
    }

    #[test]
    fn all_whitespace_kinds_removed() {
        assert_eq!(extract_dose(Some("Drug (0.125\tMG /\n ML)")), "0.125MG/ML");
    }

    #[test]
    fn information_separators_removed() {
        assert_eq!(extract_dose(Some("X (30\x1fMG)")), "30MG");
        assert_eq!(extract_dose(Some("X (1\x1c2\x1d3\x1e4)")), "1234");
        assert_eq!(extract_dose(Some("X (5\x1bMG)")), "5\x1bMG");
    }

    #[test]
    fn value_without_whitespace_unchanged() {
        assert_eq!(extract_dose(Some("Morphine Sulfate (30MG)")), "30MG");
    }

    proptest! {
        #[test]
        fn dose_never_contains_whitespace(text in ".*") {
            let dose = extract_dose(Some(text.as_str()));
            prop_assert!(!dose.chars().any(is_dose_space));
        }

        #[test]
        fn dose_is_deterministic(text in ".*") {
            prop_assert_eq!(extract_dose(Some(text.as_str())), extract_dose(Some(text.as_str())));
        }

        #[test]
        fn text_without_parentheses_has_no_dose(text in "[^()]*") {
            prop_assert_eq!(extract_dose(Some(text.as_str())), "");
        }
    }
}
