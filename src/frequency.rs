//! Lemma frequency counting.
//!
//! Counting lowercases the whole lemma stream and splits on whitespace.
//! Stopwords are removed after counting, then entries are ordered by count,
//! highest first. Equal counts keep the order in which the lemma first
//! appeared, so identical input always yields identical output.

use crate::text::StopwordSet;
use serde::Serialize;
use std::collections::HashMap;

/// A lemma and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LemmaCount {
    pub lemma: String,
    pub count: usize,
}

impl LemmaCount {
    pub fn new(lemma: impl Into<String>, count: usize) -> Self {
        Self {
            lemma: lemma.into(),
            count,
        }
    }
}

/// Insertion-ordered lemma counts.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<LemmaCount>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count whitespace-separated tokens of `text` after lowercasing it.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for token in text.to_lowercase().split_whitespace() {
            table.add(token);
        }
        table
    }

    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push(LemmaCount::new(token, 1));
            }
        }
    }

    pub fn get(&self, lemma: &str) -> Option<usize> {
        self.index.get(lemma).map(|&slot| self.entries[slot].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Drop every entry whose lemma is in `stopwords`.
    pub fn remove_stopwords(&mut self, stopwords: &StopwordSet) {
        self.entries.retain(|entry| !stopwords.contains(&entry.lemma));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(slot, entry)| (entry.lemma.clone(), slot))
            .collect();
    }

    /// Entries by descending count; ties stay in first-seen order.
    pub fn into_sorted(self) -> Vec<LemmaCount> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

/// Count lemmas in `text`, drop stopwords and sort by frequency.
pub fn lemma_frequencies(text: &str, stopwords: &StopwordSet) -> Vec<LemmaCount> {
    let mut table = FrequencyTable::from_text(text);
    table.remove_stopwords(stopwords);
    table.into_sorted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_stopword_is_removed() {
        let stopwords: StopwordSet = ["pas"].into_iter().collect();
        assert_eq!(
            lemma_frequencies("kuća kuća pas mačka", &stopwords),
            vec![LemmaCount::new("kuća", 2), LemmaCount::new("mačka", 1)]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(lemma_frequencies("", &StopwordSet::new()).is_empty());
        assert!(lemma_frequencies("  \n ", &StopwordSet::new()).is_empty());
    }

    #[test]
    fn test_lowercases_before_counting() {
        let freqs = lemma_frequencies("Beograd beograd BEOGRAD", &StopwordSet::new());
        assert_eq!(freqs, vec![LemmaCount::new("beograd", 3)]);
    }

    #[test]
    fn test_uppercase_stopword_does_not_match_lowercased_token() {
        let stopwords: StopwordSet = ["Pas"].into_iter().collect();
        let freqs = lemma_frequencies("Pas pas", &stopwords);
        assert_eq!(freqs, vec![LemmaCount::new("pas", 2)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let freqs = lemma_frequencies("c b a b c a d", &StopwordSet::new());
        let lemmas: Vec<&str> = freqs.iter().map(|f| f.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_table_lookup_after_stopword_removal() {
        let mut table = FrequencyTable::from_text("a b b c");
        table.remove_stopwords(&["a"].into_iter().collect());
        assert_eq!(table.get("a"), None);
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.get("c"), Some(1));
        assert_eq!(table.total(), 3);
    }

    proptest! {
        #[test]
        fn prop_keys_are_tokens_minus_stopwords(
            tokens in prop::collection::vec("[a-e]{1,2}", 0..60),
            stop in prop::collection::hash_set("[a-e]{1,2}", 0..6),
        ) {
            let text = tokens.join(" ");
            let stopwords: StopwordSet = stop.iter().cloned().collect();
            let freqs = lemma_frequencies(&text, &stopwords);

            let keys: HashSet<&str> = freqs.iter().map(|f| f.lemma.as_str()).collect();
            let expected: HashSet<&str> = tokens
                .iter()
                .map(String::as_str)
                .filter(|t| !stop.contains(*t))
                .collect();
            prop_assert_eq!(keys, expected);

            let total: usize = freqs.iter().map(|f| f.count).sum();
            let kept = tokens.iter().filter(|t| !stop.contains(*t)).count();
            prop_assert_eq!(total, kept);

            prop_assert!(freqs.windows(2).all(|w| w[0].count >= w[1].count));
        }
    }
}
