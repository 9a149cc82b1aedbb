//! Stopword list loading.

use crate::errors::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Set of tokens excluded from frequency counts and word clouds.
///
/// Entries keep the case they were loaded with. Corpus tokens are lowercased
/// before lookup, so an uppercase entry never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a newline-delimited list. Blank lines are ignored.
    pub fn parse(contents: &str) -> Self {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in sorted order, for writing to external tools deterministically.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Load stopwords from a UTF-8 file with one token per line.
pub fn load_stopwords(path: &Path) -> Result<StopwordSet> {
    let contents = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
    let stopwords = StopwordSet::parse(&contents);
    tracing::info!(
        "Loaded {} stopwords from {}",
        stopwords.len(),
        path.display()
    );
    Ok(stopwords)
}
