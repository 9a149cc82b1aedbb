//! Progress sink implementations for different front ends.
//!
//! | Use Case | Implementation |
//! |----------|----------------|
//! | Unit tests | [`SilentProgressSink`] or [`RecordingProgressSink`] |
//! | Background worker | [`ChannelProgressSink`] |
//! | CLI tool | [`super::TerminalProgressSink`] |

use super::traits::ProgressSink;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

/// No-op sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentProgressSink;

impl ProgressSink for SilentProgressSink {
    #[inline]
    fn report(&self, _stage: &str, _current: usize, _total: usize) {}

    #[inline]
    fn start_stage(&self, _name: &str) {}

    #[inline]
    fn complete_stage(&self, _name: &str) {}

    #[inline]
    fn warn(&self, _message: &str) {}
}

/// Progress event recorded by [`RecordingProgressSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Report {
        stage: String,
        current: usize,
        total: usize,
    },
    StartStage {
        name: String,
    },
    CompleteStage {
        name: String,
    },
    Warn {
        message: String,
    },
}

/// Captures every event, for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl RecordingProgressSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.lock().clone()
    }

    /// Names of all started stages, in order.
    pub fn stages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::StartStage { name } => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Warn { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ProgressEvent>> {
        // A poisoned recorder still holds every event pushed before the panic.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, event: ProgressEvent) {
        self.lock().push(event);
    }
}

impl ProgressSink for RecordingProgressSink {
    fn report(&self, stage: &str, current: usize, total: usize) {
        self.push(ProgressEvent::Report {
            stage: stage.to_string(),
            current,
            total,
        });
    }

    fn start_stage(&self, name: &str) {
        self.push(ProgressEvent::StartStage {
            name: name.to_string(),
        });
    }

    fn complete_stage(&self, name: &str) {
        self.push(ProgressEvent::CompleteStage {
            name: name.to_string(),
        });
    }

    fn warn(&self, message: &str) {
        self.push(ProgressEvent::Warn {
            message: message.to_string(),
        });
    }
}

/// Posts human-readable status lines to a channel.
///
/// Sending never blocks; if the receiver is gone, updates are dropped.
#[derive(Debug)]
pub struct ChannelProgressSink {
    sender: Mutex<Sender<String>>,
}

impl ChannelProgressSink {
    pub fn new(sender: Sender<String>) -> Self {
        Self {
            sender: Mutex::new(sender),
        }
    }

    fn send(&self, line: String) {
        if let Ok(sender) = self.sender.lock() {
            let _ = sender.send(line);
        }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn report(&self, stage: &str, current: usize, total: usize) {
        self.send(format!("{stage}: {}/{total}", current + 1));
    }

    fn start_stage(&self, name: &str) {
        self.send(format!("Processing {name}..."));
    }

    fn complete_stage(&self, name: &str) {
        self.send(format!("Finished {name}"));
    }

    fn warn(&self, message: &str) {
        self.send(format!("Warning: {message}"));
    }
}
