//! Artifact naming and writing.

pub mod csv;
pub mod summary;

pub use self::csv::{write_frequencies, write_frequencies_to_csv};
pub use summary::{format_summary, print_summary, write_summary_json};

use crate::errors::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of file produced for an input directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    FrequencyCsv,
    WordCloud,
    CollocationCloud,
}

impl ArtifactKind {
    /// File name for an input directory named `base`.
    pub fn file_name(self, base: &str) -> String {
        match self {
            Self::FrequencyCsv => format!("{base}.csv"),
            Self::WordCloud => format!("{base}.png"),
            Self::CollocationCloud => format!("{base}_collocations.png"),
        }
    }

    pub fn path_in(self, output_dir: &Path, base: &str) -> PathBuf {
        output_dir.join(self.file_name(base))
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|e| Error::file_system(path, e))?;
        tracing::debug!("Created directory {}", path.display());
    }
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}
