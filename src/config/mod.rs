//! `.wordcloudsr.toml` configuration.
//!
//! Every field has a built-in default, so an empty or missing file is a
//! valid configuration. Command-line flags and environment variables are
//! applied on top by the command layer.

mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE,
    MAX_TRAVERSAL_DEPTH,
};

use crate::observability::LoggingConfig;
use crate::render::CloudOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_STOPWORDS_FILE: &str = "stopwords.txt";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub tagger: TaggerConfig,
    pub cloud: CloudOptions,
    pub renderer: RendererConfig,
    pub logging: LoggingConfig,
}

/// Input root, output directory and stopword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stopwords: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            stopwords: PathBuf::from(DEFAULT_STOPWORDS_FILE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// `tree-tagger` executable; searched on `PATH` when unset.
    pub binary: Option<PathBuf>,
    /// Serbian parameter file. `TREETAGGER_PATH` takes precedence.
    pub parameter_file: Option<PathBuf>,
    /// Extra flags placed before the parameter file.
    pub extra_args: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// `wordcloud_cli` executable; searched on `PATH` when unset.
    pub binary: Option<PathBuf>,
}

/// Contents written by `wordcloudsr init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# wordcloudsr configuration

[paths]
input = "input"
output = "output"
stopwords = "stopwords.txt"

[tagger]
# binary = "/opt/treetagger/bin/tree-tagger"
# parameter_file = "/opt/treetagger/lib/serbian.par"
extra_args = []

[cloud]
width = 1200
height = 800
max_words = 200
collocations = true
background = "white"

[renderer]
# binary = "wordcloud_cli"

[logging]
debug = false
file = "wordcloud.log"
console = true
"#;
