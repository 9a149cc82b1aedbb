//! Progress feedback for batch runs.
//!
//! [`TerminalProgressSink`] draws an `indicatif` bar over the input
//! directories when stderr is a terminal and falls back to a hidden bar
//! otherwise, so piped output and CI logs stay clean.

pub mod implementations;
pub mod traits;

pub use implementations::{
    ChannelProgressSink, ProgressEvent, RecordingProgressSink, SilentProgressSink,
};
pub use traits::ProgressSink;

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

pub const TEMPLATE_DIRECTORIES: &str = "📁 {msg} {pos}/{len} directories ({percent}%) - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressConfig {
    pub quiet_mode: bool,
}

impl ProgressConfig {
    pub fn new(quiet_mode: bool) -> Self {
        Self { quiet_mode }
    }

    pub fn should_show_progress(&self) -> bool {
        !self.quiet_mode && std::io::stderr().is_terminal()
    }
}

/// Progress bar over the directories of a batch.
#[derive(Debug)]
pub struct TerminalProgressSink {
    bar: ProgressBar,
}

impl TerminalProgressSink {
    pub fn new(config: ProgressConfig) -> Self {
        let bar = if config.should_show_progress() {
            let bar = ProgressBar::new(0);
            match ProgressStyle::default_bar().template(TEMPLATE_DIRECTORIES) {
                Ok(style) => bar.set_style(style.progress_chars("█▓▒░  ")),
                Err(e) => tracing::debug!("Invalid progress template: {}", e),
            }
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for TerminalProgressSink {
    fn report(&self, _stage: &str, current: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
    }

    fn start_stage(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    fn complete_stage(&self, _name: &str) {
        self.bar.inc(1);
    }

    // Hidden bars leave warnings to the console log layer.
    fn warn(&self, message: &str) {
        if !self.bar.is_hidden() {
            self.bar.suspend(|| eprintln!("Warning: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_mode_hides_progress() {
        assert!(!ProgressConfig::new(true).should_show_progress());
    }

    #[test]
    fn test_hidden_bar_accepts_updates() {
        let sink = TerminalProgressSink::new(ProgressConfig::new(true));
        sink.report("Directories", 0, 2);
        sink.start_stage("poems");
        sink.complete_stage("poems");
        sink.finish();
    }
}
