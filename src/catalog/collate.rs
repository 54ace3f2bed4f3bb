//! Name ordering for the catalog listing.
//!
//! Approximates root-locale collation for Latin-script names in three levels:
//! base letters (accents and case folded away), then accents, then case with
//! lowercase first. Raw text breaks any remaining tie.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    base: String,
    accents: String,
    uppercase: Vec<bool>,
}

impl SortKey {
    fn new(name: &str) -> Self {
        let decomposed: String = name.nfd().collect();
        let accents = decomposed.to_lowercase();
        let base = accents.chars().filter(|c| !is_combining_mark(*c)).collect();
        let uppercase = decomposed
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect();
        Self {
            base,
            accents,
            uppercase,
        }
    }
}

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    SortKey::new(a)
        .cmp(&SortKey::new(b))
        .then_with(|| a.cmp(b))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| locale_cmp(a, b));
        v
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        assert_eq!(
            sorted(&[
                "Yale University",
                "École Polytechnique",
                "Emory University",
                "apple College",
                "Apple College",
            ]),
            vec![
                "apple College",
                "Apple College",
                "École Polytechnique",
                "Emory University",
                "Yale University",
            ]
        );
    }

    #[test]
    fn unaccented_before_accented() {
        assert_eq!(locale_cmp("Ecole", "École"), Ordering::Less);
        assert_eq!(locale_cmp("Université", "Universite"), Ordering::Greater);
    }

    #[test]
    fn lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn precomposed_and_decomposed_compare_by_raw_text_only() {
        let composed = "Montr\u{e9}al";
        let decomposed = "Montre\u{301}al";
        assert_eq!(SortKey::new(composed), SortKey::new(decomposed));
        assert_ne!(locale_cmp(composed, decomposed), Ordering::Equal);
    }
}
