use super::{logging_config, resolve_tagger, tagger_config};
use crate::cli::{LogArgs, TaggerArgs};
use crate::config::load_config;
use crate::observability::Logging;
use crate::tagger::{Lemmatized, Lemmatizer, TreeTagger};
use anyhow::{Context, Result};

pub const CHECK_SENTENCE: &str = "Ovo je kratka rečenica za testiranje taggera.";

/// Lemmatize [`CHECK_SENTENCE`] and fail unless the tagger produced lemmas.
pub fn check_tagger(tagger: TaggerArgs, log: LogArgs) -> Result<()> {
    let config = load_config()?;
    let logging = Logging::new(&logging_config(&log, &config.logging, false))
        .context("Failed to set up logging")?;
    let _guard = logging.install();

    let settings = resolve_tagger(&tagger_config(tagger, &config.tagger))
        .context("Failed to set up TreeTagger")?;
    let result = TreeTagger::scoped(settings, |tagger| {
        Lemmatizer::new(tagger).lemmatize(CHECK_SENTENCE)
    })?;

    println!("Original text: {CHECK_SENTENCE}");
    match result {
        Lemmatized::Lemmas(lemmas) => {
            println!("Lemmatized text: {lemmas}");
            Ok(())
        }
        Lemmatized::Degraded { reason, .. } => {
            anyhow::bail!("TreeTagger check failed: {reason}")
        }
    }
}
