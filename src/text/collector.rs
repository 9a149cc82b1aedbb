//! Gathers the plain-text corpus of one input directory.

use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Concatenated text of every `.txt` file directly inside a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedText {
    pub text: String,
    pub files_read: usize,
    pub files_failed: usize,
}

impl CollectedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// List `.txt` files directly inside `dir`, in file-name order.
pub fn text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            Error::file_system(path, e.into())
        })?;
        if entry.file_type().is_file() && is_text_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_text_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "txt")
}

/// Read and join every `.txt` file in `dir`, separated by a single space.
///
/// Unreadable or non-UTF-8 files are logged and left out; they never fail the
/// directory. The result is trimmed, so a directory of blank files yields
/// empty text.
pub fn collect_text(dir: &Path) -> Result<CollectedText> {
    let mut collected = CollectedText::default();
    let mut parts = Vec::new();

    for path in text_files(dir)? {
        match fs::read_to_string(&path) {
            Ok(text) => {
                parts.push(text);
                collected.files_read += 1;
            }
            Err(e) => {
                tracing::warn!("Could not read file {}: {}", path.display(), e);
                collected.files_failed += 1;
            }
        }
    }

    collected.text = parts.join(" ").trim().to_string();
    tracing::info!(
        "Processed {} text files from {}",
        collected.files_read,
        dir.display()
    );
    Ok(collected)
}
