//! Progress sink trait.
//!
//! The batch pipeline reports what it is doing through a [`ProgressSink`]
//! instead of printing directly, so the same run can drive a terminal
//! progress bar, a status channel for a background worker, or nothing.

/// Receives progress updates from a batch run.
///
/// Methods must be cheap and must not panic on odd input (such as
/// `current > total`). Sinks are shared with worker threads, hence
/// `Send + Sync`.
pub trait ProgressSink: Send + Sync {
    /// `current` items of `total` are done for `stage`.
    fn report(&self, stage: &str, current: usize, total: usize);

    /// A stage (usually one input directory) started.
    fn start_stage(&self, name: &str);

    /// A stage finished, successfully or not.
    fn complete_stage(&self, name: &str);

    /// Something went wrong that does not stop the batch.
    fn warn(&self, message: &str);
}
