use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordcloudsr")]
#[command(about = "Word clouds and lemma frequency reports for Serbian text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a `Lemma,Frequency` CSV for every input subdirectory
    Freq {
        #[command(flatten)]
        batch: BatchArgs,

        /// Accepted for compatibility with `cloud`; ignored
        #[arg(long, hide = true)]
        width: Option<u32>,

        /// Accepted for compatibility with `cloud`; ignored
        #[arg(long, hide = true)]
        height: Option<u32>,

        /// Accepted for compatibility with `cloud`; ignored
        #[arg(long = "max-words", hide = true)]
        max_words: Option<usize>,
    },

    /// Render a word cloud for every input subdirectory
    Cloud {
        #[command(flatten)]
        batch: BatchArgs,

        /// Image width in pixels [default: 1200]
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels [default: 800]
        #[arg(long)]
        height: Option<u32>,

        /// Maximum number of words in a cloud [default: 200]
        #[arg(long = "max-words")]
        max_words: Option<usize>,

        /// Only render `<name>.png`, skipping the collocation variant
        #[arg(long = "no-collocations")]
        no_collocations: bool,

        /// `wordcloud_cli` executable
        #[arg(long = "renderer-bin", env = "WORDCLOUD_CLI")]
        renderer_bin: Option<PathBuf>,
    },

    /// Lemmatize a fixed Serbian sentence to verify the tagger setup
    CheckTagger {
        #[command(flatten)]
        tagger: TaggerArgs,

        #[command(flatten)]
        log: LogArgs,
    },

    /// Initialize a .wordcloudsr.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Options shared by every batch command.
#[derive(Args, Debug, Clone, Default)]
pub struct BatchArgs {
    /// Root directory whose subdirectories hold .txt files [default: input]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for generated files [default: output]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Newline-delimited stopword list [default: stopwords.txt]
    #[arg(short, long)]
    pub stopwords: Option<PathBuf>,

    /// Skip directories whose lemmatization failed instead of using raw text
    #[arg(long)]
    pub strict: bool,

    /// Write a JSON batch summary to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    #[command(flatten)]
    pub tagger: TaggerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TaggerArgs {
    /// Serbian TreeTagger parameter file
    #[arg(long = "tagger-params", env = "TREETAGGER_PATH")]
    pub tagger_params: Option<PathBuf>,

    /// `tree-tagger` executable
    #[arg(long = "tagger-bin", env = "TREETAGGER_BIN")]
    pub tagger_bin: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Log at DEBUG level
    #[arg(long)]
    pub debug: bool,

    /// Append log lines to this file [default: wordcloud.log]
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}
