//! Per-directory outcomes of a batch run.

use crate::output::ArtifactKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Why a directory produced no artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The directory listing itself failed.
    Unreadable(String),
    /// No `.txt` file, or only blank ones.
    NoText,
    /// Lemmatization fell back to the original text and strict mode is on.
    Degraded(String),
    /// Lemmatization produced no lemmas.
    EmptyLemmas,
    /// Every lemma was a stopword.
    NoFrequencies,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable(e) => write!(f, "directory could not be read: {e}"),
            Self::NoText => write!(f, "no text content found"),
            Self::Degraded(e) => write!(f, "lemmatization failed: {e}"),
            Self::EmptyLemmas => write!(f, "lemmatization produced no lemmas"),
            Self::NoFrequencies => write!(f, "no lemmas left after stopword removal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactStatus {
    Written,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: ArtifactStatus,
}

impl Artifact {
    pub fn is_written(&self) -> bool {
        self.status == ArtifactStatus::Written
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryOutcome {
    pub name: String,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
    /// Set when lemmatization fell back to passthrough text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<String>,
    pub artifacts: Vec<Artifact>,
}

impl DirectoryOutcome {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            skipped: None,
            degraded: None,
            artifacts: Vec::new(),
        }
    }

    pub fn skip(mut self, reason: SkipReason) -> Self {
        self.skipped = Some(reason);
        self
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    pub fn written(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(|a| a.is_written())
    }
}

/// Outcome of every input directory, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub directories: Vec<DirectoryOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: DirectoryOutcome) {
        self.directories.push(outcome);
    }

    /// Directories that produced at least one artifact.
    pub fn processed_count(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.written().next().is_some())
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.directories.iter().filter(|d| d.is_skipped()).count()
    }

    pub fn degraded_count(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.degraded.is_some())
            .count()
    }

    pub fn failed_artifacts(&self) -> impl Iterator<Item = (&str, &Artifact)> {
        self.directories.iter().flat_map(|d| {
            d.artifacts
                .iter()
                .filter(|a| !a.is_written())
                .map(move |a| (d.name.as_str(), a))
        })
    }

    /// Written artifact paths keyed by directory name.
    pub fn written_paths(&self) -> BTreeMap<&str, Vec<&PathBuf>> {
        self.directories
            .iter()
            .filter_map(|d| {
                let paths: Vec<&PathBuf> = d.written().map(|a| &a.path).collect();
                (!paths.is_empty()).then_some((d.name.as_str(), paths))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(kind: ArtifactKind, path: &str) -> Artifact {
        Artifact {
            kind,
            path: PathBuf::from(path),
            status: ArtifactStatus::Written,
        }
    }

    #[test]
    fn test_counts() {
        let mut report = BatchReport::default();
        let mut poems = DirectoryOutcome::new("poems", "in/poems");
        poems
            .artifacts
            .push(written(ArtifactKind::FrequencyCsv, "out/poems.csv"));
        report.push(poems);
        report.push(DirectoryOutcome::new("empty", "in/empty").skip(SkipReason::NoText));
        let mut broken = DirectoryOutcome::new("broken", "in/broken");
        broken.artifacts.push(Artifact {
            kind: ArtifactKind::FrequencyCsv,
            path: PathBuf::from("out/broken.csv"),
            status: ArtifactStatus::Failed {
                error: "denied".into(),
            },
        });
        report.push(broken);

        assert_eq!(report.processed_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failed_artifacts().count(), 1);
        assert_eq!(report.written_paths().len(), 1);
        assert_eq!(
            report.written_paths()["poems"],
            vec![&PathBuf::from("out/poems.csv")]
        );
    }

    #[test]
    fn test_serializes_skip_reason() {
        let outcome = DirectoryOutcome::new("empty", "in/empty").skip(SkipReason::NoText);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["skipped"]["reason"], "no_text");
        assert!(json.get("degraded").is_none());
    }

    #[test]
    fn test_serializes_artifact_status_inline() {
        let json = serde_json::to_value(written(ArtifactKind::WordCloud, "out/a.png")).unwrap();
        assert_eq!(json["kind"], "word_cloud");
        assert_eq!(json["status"], "written");
    }
}
