//! Lemmatizer adapter over a [`Tagger`].
//!
//! Lemmatization never fails outright. When the tagger cannot be run or its
//! output cannot be parsed, the result is [`Lemmatized::Degraded`] carrying
//! the original text, and callers decide whether passthrough text is good
//! enough.

use super::records::{make_tags, TagParseError};
use super::Tagger;
use std::fmt;

/// Why lemmatization fell back to the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    /// Tagger output had a structurally invalid line.
    MalformedOutput(TagParseError),
    /// The tagger process could not be run or exited with an error.
    TaggerFailed(String),
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedOutput(e) => write!(f, "{e}"),
            Self::TaggerFailed(msg) => write!(f, "tagger failed: {msg}"),
        }
    }
}

/// Outcome of lemmatizing one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lemmatized {
    /// Space-joined lemmas of every regular token.
    Lemmas(String),
    /// The input, returned unmodified.
    Degraded {
        original: String,
        reason: DegradeReason,
    },
}

impl Lemmatized {
    /// Text to use downstream: the lemmas, or the passthrough original.
    pub fn text(&self) -> &str {
        match self {
            Self::Lemmas(lemmas) => lemmas,
            Self::Degraded { original, .. } => original,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Lemmas(lemmas) => lemmas,
            Self::Degraded { original, .. } => original,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn degrade_reason(&self) -> Option<&DegradeReason> {
        match self {
            Self::Degraded { reason, .. } => Some(reason),
            Self::Lemmas(_) => None,
        }
    }
}

/// Replaces every word of a text with its lemma.
#[derive(Debug)]
pub struct Lemmatizer<T> {
    tagger: T,
}

impl<T: Tagger> Lemmatizer<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    pub fn into_inner(self) -> T {
        self.tagger
    }

    /// `None` in, `None` out; otherwise see [`Lemmatizer::lemmatize`].
    pub fn lemmatize_opt(&mut self, text: Option<&str>) -> Option<Lemmatized> {
        text.map(|t| self.lemmatize(t))
    }

    pub fn lemmatize(&mut self, text: &str) -> Lemmatized {
        let lines = match self.tagger.tag_text(text) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::error!("Error during lemmatization: {}", e);
                return degraded(text, DegradeReason::TaggerFailed(e.to_string()));
            }
        };

        match make_tags(lines.iter().map(String::as_str)) {
            Ok(tags) => {
                let lemmas: Vec<&str> = tags.iter().filter_map(|tag| tag.lemma()).collect();
                Lemmatized::Lemmas(lemmas.join(" "))
            }
            Err(e) => {
                tracing::error!("Error during lemmatization: {}", e);
                tracing::debug!("Problematic tagger output: {:?}", lines);
                degraded(text, DegradeReason::MalformedOutput(e))
            }
        }
    }
}

fn degraded(text: &str, reason: DegradeReason) -> Lemmatized {
    Lemmatized::Degraded {
        original: text.to_string(),
        reason,
    }
}
