//! External tagger integration.
//!
//! - [`Tagger`]: the seam to the part-of-speech tagger process
//! - [`records`]: parsing of its tab-separated output
//! - [`lemmatizer`]: turns tagger output into a lemma stream, with fallback
//! - [`treetagger`]: the TreeTagger-backed implementation

pub mod lemmatizer;
pub mod records;
pub mod tokenizer;
pub mod treetagger;

pub use lemmatizer::{DegradeReason, Lemmatized, Lemmatizer};
pub use records::{make_tags, TagParseError, TagRecord};
pub use treetagger::{TaggerSettings, TreeTagger};

use crate::errors::Result;

/// A part-of-speech tagger that produces lemma-bearing output lines.
///
/// Implementations return raw output lines; interpretation is left to
/// [`records::make_tags`] so malformed output can be handled in one place.
pub trait Tagger {
    fn tag_text(&mut self, text: &str) -> Result<Vec<String>>;
}

impl<T: Tagger + ?Sized> Tagger for &mut T {
    fn tag_text(&mut self, text: &str) -> Result<Vec<String>> {
        (**self).tag_text(text)
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag_text(&mut self, text: &str) -> Result<Vec<String>> {
        (**self).tag_text(text)
    }
}
