//! Run a batch off the calling thread.
//!
//! The worker posts human-readable status lines over a channel while it
//! runs, which is all a front end needs to show progress. There is no
//! cancellation: dropping the receiver only discards the remaining status
//! lines.

use crate::errors::{Error, Result};
use crate::observability::Logging;
use crate::pipeline::BatchReport;
use crate::progress::{ChannelProgressSink, ProgressSink};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// A batch running on its own thread.
pub struct BatchWorker {
    pub status: Receiver<String>,
    handle: JoinHandle<Result<BatchReport>>,
}

impl BatchWorker {
    /// Wait for the batch to finish.
    pub fn join(self) -> Result<BatchReport> {
        self.handle
            .join()
            .map_err(|_| Error::configuration("batch worker panicked"))?
    }
}

/// Start `job` on a worker thread with `logging` installed there.
pub fn spawn_batch<F>(logging: &Logging, job: F) -> Result<BatchWorker>
where
    F: FnOnce(&dyn ProgressSink) -> Result<BatchReport> + Send + 'static,
{
    let (sender, status) = mpsc::channel();
    let dispatch = logging.dispatch().clone();

    let handle = thread::Builder::new()
        .name("wordcloudsr-batch".to_string())
        .spawn(move || {
            tracing::dispatcher::with_default(&dispatch, || {
                let sink = ChannelProgressSink::new(sender);
                let result = job(&sink);
                match &result {
                    Ok(report) => sink.complete_stage(&format!(
                        "batch ({} processed)",
                        report.processed_count()
                    )),
                    Err(e) => sink.warn(&e.to_string()),
                }
                result
            })
        })?;

    Ok(BatchWorker { status, handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::DirectoryOutcome;

    #[test]
    fn test_status_lines_arrive_in_order() {
        let worker = spawn_batch(&Logging::silent(), |progress| {
            progress.start_stage("poems");
            progress.report("Directories", 0, 1);
            progress.complete_stage("poems");
            let mut report = BatchReport::default();
            report.push(DirectoryOutcome::new("poems", "in/poems"));
            Ok(report)
        })
        .unwrap();

        let report = {
            let lines: Vec<String> = worker.status.iter().collect::<Vec<_>>();
            assert_eq!(
                lines,
                vec![
                    "Processing poems...",
                    "Directories: 1/1",
                    "Finished poems",
                    "Finished batch (0 processed)",
                ]
            );
            worker.join().unwrap()
        };
        assert_eq!(report.directories.len(), 1);
    }

    #[test]
    fn test_job_error_is_returned_from_join() {
        let worker =
            spawn_batch(&Logging::silent(), |_| Err(Error::configuration("no input"))).unwrap();
        let lines: Vec<String> = worker.status.iter().collect();
        assert_eq!(lines, vec!["Warning: Configuration error: no input"]);
        assert!(matches!(worker.join(), Err(Error::Configuration(_))));
    }
}
