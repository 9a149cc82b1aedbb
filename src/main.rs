use anyhow::Result;
use clap::Parser;
use wordcloudsr::cli::{Cli, Commands};
use wordcloudsr::commands::{self, CloudArgs};

fn main() -> Result<()> {
    // TREETAGGER_PATH and friends may live in a .env file next to the corpus.
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Freq { batch, .. } => commands::run_freq(batch),
        Commands::Cloud {
            batch,
            width,
            height,
            max_words,
            no_collocations,
            renderer_bin,
        } => {
            let args = CloudArgs {
                width,
                height,
                max_words,
                no_collocations,
                renderer_bin,
            };
            commands::run_cloud(batch, args)
        }
        Commands::CheckTagger { tagger, log } => commands::check_tagger(tagger, log),
        Commands::Init { force } => commands::init_config(force),
    }
}
