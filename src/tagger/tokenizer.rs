//! Splits raw text into the one-token-per-line input TreeTagger expects.

use once_cell::sync::Lazy;
use regex::Regex;

// Words (with inner hyphens or apostrophes) or single punctuation marks.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:[-'’]\w+)*|[^\w\s]").expect("token pattern is valid")
});

/// Tokenize text into words and punctuation, preserving order and case.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_splits_punctuation() {
        assert_eq!(
            tokenize("Ovo je kratka rečenica za testiranje taggera."),
            vec!["Ovo", "je", "kratka", "rečenica", "za", "testiranje", "taggera", "."]
        );
    }

    #[test]
    fn test_keeps_hyphenated_words() {
        assert_eq!(tokenize("crno-bela, (da)"), vec!["crno-bela", ",", "(", "da", ")"]);
    }

    #[test]
    fn test_cyrillic_text() {
        assert_eq!(tokenize("Ово је кућа!"), vec!["Ово", "је", "кућа", "!"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }
}
