//! Process-backed renderer using `wordcloud_cli`.

use super::{CloudOptions, CloudRenderer};
use crate::errors::{Error, Result};
use crate::output::ensure_parent_dir;
use crate::tagger::treetagger::locate_executable;
use crate::text::StopwordSet;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

/// Default executable name searched on `PATH`.
pub const DEFAULT_BINARY: &str = "wordcloud_cli";

#[derive(Debug, Clone)]
pub struct WordcloudCli {
    binary: PathBuf,
}

impl WordcloudCli {
    /// Locate the renderer, by explicit path or on `PATH`.
    pub fn locate(binary: Option<&Path>) -> Result<Self> {
        let binary = locate_executable(binary.unwrap_or_else(|| Path::new(DEFAULT_BINARY)))?;
        tracing::debug!("Using word-cloud renderer {}", binary.display());
        Ok(Self { binary })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

fn arguments(
    text_file: &Path,
    stopwords_file: &Path,
    options: &CloudOptions,
    output: &Path,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--text".into(),
        text_file.into(),
        "--stopwords".into(),
        stopwords_file.into(),
        "--imagefile".into(),
        output.into(),
        "--width".into(),
        options.width.to_string().into(),
        "--height".into(),
        options.height.to_string().into(),
        "--max_words".into(),
        options.max_words.to_string().into(),
        "--background".into(),
        options.background.clone().into(),
        "--prefer_horizontal".into(),
        options.prefer_horizontal.to_string().into(),
        "--relative_scaling".into(),
        options.relative_scaling.to_string().into(),
        "--min_font_size".into(),
        options.min_font_size.to_string().into(),
    ];
    if !options.collocations {
        args.push("--no_collocations".into());
    }
    args
}

fn scratch_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

impl CloudRenderer for WordcloudCli {
    fn render(
        &self,
        text: &str,
        stopwords: &StopwordSet,
        options: &CloudOptions,
        output: &Path,
    ) -> Result<()> {
        if text.trim().is_empty() {
            return Err(Error::render("empty text provided for word cloud generation"));
        }

        ensure_parent_dir(output)?;
        let text_file = scratch_file(&text.to_lowercase())?;
        let stopwords_file = scratch_file(&stopwords.sorted().join("\n"))?;

        let result = Command::new(&self.binary)
            .args(arguments(
                text_file.path(),
                stopwords_file.path(),
                options,
                output,
            ))
            .output()
            .map_err(|e| Error::render(format!("failed to start {}: {e}", self.binary.display())))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::render(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                result.status,
                stderr.trim()
            )));
        }
        if !output.is_file() {
            return Err(Error::render(format!(
                "renderer reported success but {} was not written",
                output.display()
            )));
        }

        tracing::debug!(collocations = options.collocations, "Rendered {}", output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_arguments_without_collocations() {
        let args = strings(&arguments(
            Path::new("t.txt"),
            Path::new("s.txt"),
            &CloudOptions::default().with_collocations(false),
            Path::new("out/poems.png"),
        ));
        assert_eq!(
            &args[..6],
            [
                "--text",
                "t.txt",
                "--stopwords",
                "s.txt",
                "--imagefile",
                "out/poems.png"
            ]
        );
        assert!(args.windows(2).any(|w| w == ["--width", "1200"]));
        assert!(args.windows(2).any(|w| w == ["--height", "800"]));
        assert!(args.windows(2).any(|w| w == ["--max_words", "200"]));
        assert_eq!(args.last().map(String::as_str), Some("--no_collocations"));
    }

    #[test]
    fn test_arguments_with_collocations() {
        let options = CloudOptions::default();
        assert!(options.collocations);
        let args = strings(&arguments(
            Path::new("t.txt"),
            Path::new("s.txt"),
            &options,
            Path::new("poems_collocations.png"),
        ));
        assert!(!args.iter().any(|a| a == "--no_collocations"));
    }

    #[test]
    fn test_missing_renderer() {
        let err = WordcloudCli::locate(Some(Path::new("/nope/wordcloud_cli"))).unwrap_err();
        assert!(matches!(err, Error::ExecutableNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_render_with_fake_binary() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("wordcloud_cli");
        // Copies the --text input to --imagefile so the test can inspect it.
        std::fs::write(
            &script,
            concat!(
                "#!/bin/sh\n",
                "while [ $# -gt 0 ]; do\n",
                "  case $1 in --text) t=$2;; --imagefile) o=$2;; esac\n",
                "  shift\n",
                "done\n",
                "cp \"$t\" \"$o\"\n",
            ),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let renderer = WordcloudCli::locate(Some(&script)).unwrap();
        let output = dir.path().join("out/poems.png");
        renderer
            .render("Kuća Pas", &StopwordSet::new(), &CloudOptions::default(), &output)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "kuća pas");
    }

    #[test]
    fn test_empty_text_is_render_error() {
        let renderer = WordcloudCli {
            binary: PathBuf::from("wordcloud_cli"),
        };
        let err = renderer
            .render(" ", &StopwordSet::new(), &CloudOptions::default(), Path::new("x.png"))
            .unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }
}
