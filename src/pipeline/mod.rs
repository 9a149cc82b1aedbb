//! Directory batch pipeline.
//!
//! For every immediate subdirectory of the input root:
//!
//! ```text
//! collect .txt text -> lemmatize -> count frequencies -> <name>.csv
//!                                 \-> render cloud(s)  -> <name>.png, <name>_collocations.png
//! ```
//!
//! A problem in one directory is logged, recorded in the [`BatchReport`] and
//! never stops the batch. Only failures that affect every directory (missing
//! input root, output directory that cannot be created) are returned as
//! errors.

pub mod report;

pub use report::{Artifact, ArtifactStatus, BatchReport, DirectoryOutcome, SkipReason};

use crate::errors::{Error, Result};
use crate::frequency::lemma_frequencies;
use crate::output::{ensure_dir, write_frequencies_to_csv, ArtifactKind};
use crate::progress::ProgressSink;
use crate::render::{CloudOptions, CloudRenderer};
use crate::tagger::{Lemmatizer, Tagger};
use crate::text::{collect_text, StopwordSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const STAGE: &str = "Directories";

/// What the pipeline produces for each directory.
pub enum Mode<'a> {
    /// One `Lemma,Frequency` CSV.
    Frequencies,
    /// A word cloud, plus a collocation variant when `options.collocations`.
    WordCloud {
        renderer: &'a dyn CloudRenderer,
        options: CloudOptions,
    },
}

/// Immediate subdirectories of `root`, sorted by name.
pub fn list_subdirectories(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::configuration(format!(
            "input directory {} does not exist",
            root.display()
        )));
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::file_system(root, e.into()))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

fn directory_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

/// Sequential batch processor sharing one tagger across directories.
pub struct Pipeline<'a, T> {
    lemmatizer: Lemmatizer<T>,
    stopwords: &'a StopwordSet,
    mode: Mode<'a>,
    output_dir: PathBuf,
    strict: bool,
    progress: &'a dyn ProgressSink,
}

impl<'a, T: Tagger> Pipeline<'a, T> {
    pub fn new(
        tagger: T,
        stopwords: &'a StopwordSet,
        mode: Mode<'a>,
        output_dir: impl Into<PathBuf>,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self {
            lemmatizer: Lemmatizer::new(tagger),
            stopwords,
            mode,
            output_dir: output_dir.into(),
            strict: false,
            progress,
        }
    }

    /// Skip directories whose lemmatization degraded instead of counting
    /// the passthrough text.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn into_tagger(self) -> T {
        self.lemmatizer.into_inner()
    }

    /// Process every subdirectory of `input_root`.
    pub fn run(&mut self, input_root: &Path) -> Result<BatchReport> {
        tracing::info!(
            "Starting text processing with input dir: {}, output dir: {}",
            input_root.display(),
            self.output_dir.display()
        );
        let dirs = list_subdirectories(input_root)?;
        ensure_dir(&self.output_dir)?;

        let mut report = BatchReport::default();
        for (index, dir) in dirs.iter().enumerate() {
            self.progress.report(STAGE, index, dirs.len());
            let outcome = self.process_directory(dir);
            report.push(outcome);
        }

        tracing::info!(
            "Text processing completed. Processed {} of {} directories.",
            report.processed_count(),
            dirs.len()
        );
        Ok(report)
    }

    /// Process one directory. Never fails; problems end up in the outcome.
    pub fn process_directory(&mut self, dir: &Path) -> DirectoryOutcome {
        let name = directory_name(dir);
        let _span = tracing::info_span!("directory", name = %name).entered();
        tracing::info!("Processing directory: {}", dir.display());
        self.progress.start_stage(&name);

        let outcome = self.process_named(&name, dir);
        if let Some(reason) = &outcome.skipped {
            tracing::warn!("Skipping {}: {}", dir.display(), reason);
            self.progress.warn(&format!("{name}: {reason}"));
        }
        for artifact in outcome.artifacts.iter().filter(|a| !a.is_written()) {
            if let ArtifactStatus::Failed { error } = &artifact.status {
                self.progress
                    .warn(&format!("{}: {}", artifact.path.display(), error));
            }
        }

        self.progress.complete_stage(&name);
        outcome
    }

    fn process_named(&mut self, name: &str, dir: &Path) -> DirectoryOutcome {
        let mut outcome = DirectoryOutcome::new(name, dir);

        let collected = match collect_text(dir) {
            Ok(collected) => collected,
            Err(e) => return outcome.skip(SkipReason::Unreadable(e.to_string())),
        };
        if collected.is_empty() {
            return outcome.skip(SkipReason::NoText);
        }

        let lemmatized = self.lemmatizer.lemmatize(&collected.text);
        if let Some(reason) = lemmatized.degrade_reason() {
            if self.strict {
                return outcome.skip(SkipReason::Degraded(reason.to_string()));
            }
            tracing::warn!("Using unlemmatized text for {}: {}", name, reason);
            outcome.degraded = Some(reason.to_string());
        }

        let text = lemmatized.into_text();
        if text.trim().is_empty() {
            return outcome.skip(SkipReason::EmptyLemmas);
        }

        match &self.mode {
            Mode::Frequencies => {
                let frequencies = lemma_frequencies(&text, self.stopwords);
                if frequencies.is_empty() {
                    return outcome.skip(SkipReason::NoFrequencies);
                }
                let path = ArtifactKind::FrequencyCsv.path_in(&self.output_dir, name);
                let status = status_of(write_frequencies_to_csv(&path, &frequencies));
                outcome.artifacts.push(Artifact {
                    kind: ArtifactKind::FrequencyCsv,
                    path,
                    status,
                });
            }
            Mode::WordCloud { renderer, options } => {
                let mut variants = vec![(ArtifactKind::WordCloud, false)];
                if options.collocations {
                    variants.push((ArtifactKind::CollocationCloud, true));
                }
                for (kind, collocations) in variants {
                    let path = kind.path_in(&self.output_dir, name);
                    let variant = options.with_collocations(collocations);
                    let result = renderer.render(&text, self.stopwords, &variant, &path);
                    if result.is_ok() {
                        tracing::info!("Successfully saved word cloud to {}", path.display());
                    }
                    outcome.artifacts.push(Artifact {
                        kind,
                        path,
                        status: status_of(result),
                    });
                }
            }
        }

        outcome
    }
}

fn status_of(result: Result<()>) -> ArtifactStatus {
    match result {
        Ok(()) => ArtifactStatus::Written,
        Err(e) => {
            tracing::error!("{}", e);
            ArtifactStatus::Failed {
                error: e.to_string(),
            }
        }
    }
}
