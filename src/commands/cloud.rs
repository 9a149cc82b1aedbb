use super::{execute_batch, finish_batch, BatchSettings};
use crate::cli::BatchArgs;
use crate::config::{load_config, AppConfig};
use crate::observability::Logging;
use crate::pipeline::Mode;
use crate::render::{CloudOptions, WordcloudCli};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Flags specific to `cloud`.
#[derive(Debug, Clone, Default)]
pub struct CloudArgs {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_words: Option<usize>,
    pub no_collocations: bool,
    pub renderer_bin: Option<PathBuf>,
}

pub fn cloud_options(args: &CloudArgs, config: &AppConfig) -> CloudOptions {
    let base = &config.cloud;
    CloudOptions {
        width: args.width.unwrap_or(base.width),
        height: args.height.unwrap_or(base.height),
        max_words: args.max_words.unwrap_or(base.max_words),
        collocations: base.collocations && !args.no_collocations,
        ..base.clone()
    }
}

/// Render word clouds for every input subdirectory.
pub fn run_cloud(batch: BatchArgs, args: CloudArgs) -> Result<()> {
    let config = load_config()?;
    let settings = BatchSettings::resolve(batch, &config);
    let logging = Logging::new(&settings.logging).context("Failed to set up logging")?;
    let _guard = logging.install();

    let options = cloud_options(&args, &config);
    let renderer_bin = args.renderer_bin.or_else(|| config.renderer.binary.clone());
    let renderer = WordcloudCli::locate(renderer_bin.as_deref())
        .context("Failed to locate the word-cloud renderer")?;
    tracing::info!(
        "Rendering {}x{} clouds with up to {} words using {}",
        options.width,
        options.height,
        options.max_words,
        renderer.binary().display()
    );

    let report = execute_batch(
        &settings,
        Mode::WordCloud {
            renderer: &renderer,
            options,
        },
    )?;
    finish_batch(&settings, &report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config_cloud_section() {
        let mut config = AppConfig::default();
        config.cloud.width = 640;
        config.cloud.background = "black".into();

        let options = cloud_options(
            &CloudArgs {
                height: Some(480),
                no_collocations: true,
                ..CloudArgs::default()
            },
            &config,
        );
        assert_eq!(options.width, 640);
        assert_eq!(options.height, 480);
        assert_eq!(options.max_words, 200);
        assert_eq!(options.background, "black");
        assert!(!options.collocations);
    }

    #[test]
    fn test_collocations_on_by_default() {
        let options = cloud_options(&CloudArgs::default(), &AppConfig::default());
        assert!(options.collocations);
    }
}
