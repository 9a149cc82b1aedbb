//! Corpus inputs: stopword lists and per-directory text collection.

pub mod collector;
pub mod stopwords;

pub use collector::{collect_text, text_files, CollectedText};
pub use stopwords::{load_stopwords, StopwordSet};
