//! Word-cloud rendering.
//!
//! Layout and drawing are done by an external renderer behind the
//! [`CloudRenderer`] trait. [`WordcloudCli`] drives the `wordcloud_cli`
//! executable shipped with the Python `wordcloud` package.

pub mod wordcloud_cli;

pub use wordcloud_cli::WordcloudCli;

use crate::errors::Result;
use crate::text::StopwordSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image settings for one word cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudOptions {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    /// Let the renderer join frequent adjacent word pairs into one entry.
    pub collocations: bool,
    pub background: String,
    pub prefer_horizontal: f32,
    pub relative_scaling: f32,
    pub min_font_size: u32,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            max_words: 200,
            collocations: true,
            background: "white".to_string(),
            prefer_horizontal: 0.9,
            relative_scaling: 0.5,
            min_font_size: 8,
        }
    }
}

impl CloudOptions {
    pub fn with_collocations(&self, collocations: bool) -> Self {
        Self {
            collocations,
            ..self.clone()
        }
    }
}

/// Renders lemmatized text to a PNG file.
pub trait CloudRenderer {
    /// Render `text` to `output`. Stopwords must not appear in the image.
    fn render(
        &self,
        text: &str,
        stopwords: &StopwordSet,
        options: &CloudOptions,
        output: &Path,
    ) -> Result<()>;
}

impl<R: CloudRenderer + ?Sized> CloudRenderer for &R {
    fn render(
        &self,
        text: &str,
        stopwords: &StopwordSet,
        options: &CloudOptions,
        output: &Path,
    ) -> Result<()> {
        (**self).render(text, stopwords, options, output)
    }
}

impl<R: CloudRenderer + ?Sized> CloudRenderer for Box<R> {
    fn render(
        &self,
        text: &str,
        stopwords: &StopwordSet,
        options: &CloudOptions,
        output: &Path,
    ) -> Result<()> {
        (**self).render(text, stopwords, options, output)
    }
}
