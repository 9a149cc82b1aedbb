use super::{execute_batch, finish_batch, BatchSettings};
use crate::cli::BatchArgs;
use crate::config::load_config;
use crate::observability::Logging;
use crate::pipeline::Mode;
use anyhow::{Context, Result};

/// Write one lemma frequency CSV per input subdirectory.
pub fn run_freq(args: BatchArgs) -> Result<()> {
    let config = load_config()?;
    let settings = BatchSettings::resolve(args, &config);
    let logging = Logging::new(&settings.logging).context("Failed to set up logging")?;
    let _guard = logging.install();

    let report = execute_batch(&settings, Mode::Frequencies)?;
    finish_batch(&settings, &report)
}
