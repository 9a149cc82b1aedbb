//! CLI command implementations.
//!
//! - **freq**: lemma frequency CSV per input subdirectory
//! - **cloud**: word cloud image(s) per input subdirectory
//! - **check-tagger**: lemmatize a fixed sentence to verify the tagger setup
//! - **init**: write a default `.wordcloudsr.toml`
//!
//! Each batch command resolves its settings from flags, environment and the
//! config file (in that order of precedence), installs logging, and then runs
//! the pipeline with a scoped tagger.

pub mod check;
pub mod cloud;
pub mod freq;
pub mod init;

pub use check::check_tagger;
pub use cloud::{run_cloud, CloudArgs};
pub use freq::run_freq;
pub use init::init_config;

use crate::cli::{BatchArgs, LogArgs, TaggerArgs};
use crate::config::{AppConfig, TaggerConfig};
use crate::observability::LoggingConfig;
use crate::output::{print_summary, write_summary_json};
use crate::pipeline::{BatchReport, Mode, Pipeline};
use crate::progress::{ProgressConfig, TerminalProgressSink};
use crate::tagger::{TaggerSettings, TreeTagger};
use crate::text::load_stopwords;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Fully resolved options of a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stopwords: PathBuf,
    pub strict: bool,
    pub summary: Option<PathBuf>,
    pub quiet: bool,
    pub logging: LoggingConfig,
    pub tagger: TaggerConfig,
}

impl BatchSettings {
    pub fn resolve(args: BatchArgs, config: &AppConfig) -> Self {
        Self {
            input: args.input.unwrap_or_else(|| config.paths.input.clone()),
            output: args.output.unwrap_or_else(|| config.paths.output.clone()),
            stopwords: args
                .stopwords
                .unwrap_or_else(|| config.paths.stopwords.clone()),
            strict: args.strict,
            summary: args.summary,
            quiet: args.log.quiet,
            logging: logging_config(
                &args.log,
                &config.logging,
                ProgressConfig::new(args.log.quiet).should_show_progress(),
            ),
            tagger: tagger_config(args.tagger, &config.tagger),
        }
    }
}

/// A visible progress bar owns the terminal, so console logging is switched
/// off while it is drawn; the log file still gets everything.
pub fn logging_config(args: &LogArgs, config: &LoggingConfig, bar_visible: bool) -> LoggingConfig {
    LoggingConfig {
        debug: args.debug || config.debug,
        file: args.log_file.clone().or_else(|| config.file.clone()),
        console: config.console && !bar_visible,
    }
}

pub fn tagger_config(args: TaggerArgs, config: &TaggerConfig) -> TaggerConfig {
    TaggerConfig {
        binary: args.tagger_bin.or_else(|| config.binary.clone()),
        parameter_file: args
            .tagger_params
            .or_else(|| config.parameter_file.clone()),
        extra_args: config.extra_args.clone(),
    }
}

pub(crate) fn resolve_tagger(config: &TaggerConfig) -> crate::errors::Result<TaggerSettings> {
    Ok(
        TaggerSettings::resolve(config.binary.as_deref(), config.parameter_file.as_deref())?
            .with_extra_args(config.extra_args.clone()),
    )
}

/// Open the tagger, load stopwords and run the pipeline in `mode`.
pub(crate) fn execute_batch(settings: &BatchSettings, mode: Mode<'_>) -> Result<BatchReport> {
    let tagger_settings =
        resolve_tagger(&settings.tagger).context("Failed to set up TreeTagger")?;
    let stopwords = load_stopwords(&settings.stopwords).with_context(|| {
        format!(
            "Failed to load stopwords from {}",
            settings.stopwords.display()
        )
    })?;

    let progress = TerminalProgressSink::new(ProgressConfig::new(settings.quiet));
    let report = TreeTagger::scoped(tagger_settings, |tagger| {
        let mut pipeline = Pipeline::new(tagger, &stopwords, mode, &settings.output, &progress)
            .strict(settings.strict);
        pipeline.run(&settings.input)
    })??;
    progress.finish();

    Ok(report)
}

/// Print the summary and write the JSON report if requested.
pub(crate) fn finish_batch(settings: &BatchSettings, report: &BatchReport) -> Result<()> {
    print_summary(report);
    if let Some(path) = &settings.summary {
        write_summary_json(path, report)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    }
    Ok(())
}
