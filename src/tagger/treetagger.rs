//! TreeTagger process wrapper for Serbian lemmatization.
//!
//! The tagger handle is acquired once per batch with [`TreeTagger::open`] and
//! released with [`TreeTagger::close`] (or used through
//! [`TreeTagger::scoped`]). Opening validates the parameter file and locates
//! the `tree-tagger` executable, so configuration problems surface before any
//! directory is processed.

use super::tokenizer::tokenize;
use super::Tagger;
use crate::errors::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// Default executable name searched on `PATH`.
pub const DEFAULT_BINARY: &str = "tree-tagger";

/// Flags that make TreeTagger print `word\tpos\tlemma` and echo SGML lines.
const BASE_ARGS: [&str; 4] = ["-token", "-lemma", "-sgml", "-quiet"];

/// Resolved locations of the tagger executable and its parameter file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggerSettings {
    pub binary: PathBuf,
    pub parameter_file: PathBuf,
    pub extra_args: Vec<String>,
}

impl TaggerSettings {
    /// Resolve settings from optional binary and parameter-file paths.
    ///
    /// A missing parameter file path is [`Error::MissingTaggerParams`]. A bare
    /// binary name is looked up on `PATH`.
    pub fn resolve(binary: Option<&Path>, parameter_file: Option<&Path>) -> Result<Self> {
        let parameter_file = parameter_file.ok_or(Error::MissingTaggerParams)?;
        if !parameter_file.is_file() {
            return Err(Error::configuration(format!(
                "TreeTagger parameter file {} does not exist",
                parameter_file.display()
            )));
        }

        let binary = locate_executable(binary.unwrap_or_else(|| Path::new(DEFAULT_BINARY)))?;

        Ok(Self {
            binary,
            parameter_file: parameter_file.to_path_buf(),
            extra_args: Vec::new(),
        })
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .args(BASE_ARGS)
            .args(&self.extra_args)
            .arg(&self.parameter_file)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

/// Find an executable by explicit path or by name on `PATH`.
pub fn locate_executable(program: &Path) -> Result<PathBuf> {
    if program.components().count() > 1 {
        return if program.is_file() {
            Ok(program.to_path_buf())
        } else {
            Err(Error::ExecutableNotFound {
                name: program.display().to_string(),
                message: "no such file".to_string(),
            })
        };
    }

    which::which(program).map_err(|e| Error::ExecutableNotFound {
        name: program.display().to_string(),
        message: e.to_string(),
    })
}

/// Long-lived TreeTagger handle shared by every directory of a batch.
#[derive(Debug)]
pub struct TreeTagger {
    settings: TaggerSettings,
    calls: usize,
    tokens: usize,
}

impl TreeTagger {
    pub fn open(settings: TaggerSettings) -> Result<Self> {
        tracing::info!(
            binary = %settings.binary.display(),
            params = %settings.parameter_file.display(),
            "Serbian TreeTagger initialized"
        );
        Ok(Self {
            settings,
            calls: 0,
            tokens: 0,
        })
    }

    /// Run `f` with an open tagger, closing it afterwards.
    pub fn scoped<R>(settings: TaggerSettings, f: impl FnOnce(&mut TreeTagger) -> R) -> Result<R> {
        let mut tagger = Self::open(settings)?;
        let result = f(&mut tagger);
        tagger.close();
        Ok(result)
    }

    pub fn settings(&self) -> &TaggerSettings {
        &self.settings
    }

    pub fn close(self) {
        tracing::info!(
            calls = self.calls,
            tokens = self.tokens,
            "TreeTagger released"
        );
    }

    fn run(&self, input: String) -> Result<String> {
        let mut child = self
            .settings
            .command()
            .spawn()
            .map_err(|e| {
                Error::tagger(format!(
                    "failed to start {}: {e}",
                    self.settings.binary.display()
                ))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::tagger("tagger stdin was not captured"))?;

        // Feed stdin from a separate thread so a full stdout pipe cannot block us.
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(Error::Io(e)),
            Err(_) => return Err(Error::tagger("stdin writer thread panicked")),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tagger(format!(
                "tree-tagger exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::tagger(format!("tagger output is not UTF-8: {e}")))
    }
}

impl Tagger for TreeTagger {
    fn tag_text(&mut self, text: &str) -> Result<Vec<String>> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        self.calls += 1;
        self.tokens += tokens.len();
        tracing::debug!("Tagging {} tokens", tokens.len());

        let mut input = tokens.join("\n");
        input.push('\n');

        let stdout = self.run(input)?;
        Ok(stdout.lines().map(str::to_string).collect())
    }
}
