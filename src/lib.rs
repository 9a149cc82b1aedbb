// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod frequency;
pub mod observability;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod tagger;
pub mod text;
pub mod worker;

// Re-export commonly used types
pub use crate::errors::{Error, Result};

pub use crate::frequency::{lemma_frequencies, FrequencyTable, LemmaCount};

pub use crate::text::{collect_text, load_stopwords, CollectedText, StopwordSet};

pub use crate::tagger::{
    DegradeReason, Lemmatized, Lemmatizer, TagRecord, Tagger, TaggerSettings, TreeTagger,
};

pub use crate::pipeline::{BatchReport, DirectoryOutcome, Mode, Pipeline, SkipReason};

pub use crate::render::{CloudOptions, CloudRenderer, WordcloudCli};

pub use crate::observability::{Logging, LoggingConfig};

pub use crate::config::{load_config, AppConfig};
