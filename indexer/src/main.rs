use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use layerdex_core::IndexerConfig;
use layerdex_indexer::{run_build, run_check};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "layerdex-indexer")]
#[command(about = "Build the keyword search index for the layer dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the index from the dataset (the default)
    Build(PathArgs),
    /// Verify that the index on disk matches the current dataset
    Check(PathArgs),
}

#[derive(Args, Default)]
struct PathArgs {
    /// Directory holding data/layers.json and data/index.json
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,
    /// Dataset path, overrides <base-dir>/data/layers.json
    #[arg(long)]
    input: Option<PathBuf>,
    /// Index path, overrides <base-dir>/data/index.json
    #[arg(long)]
    output: Option<PathBuf>,
}

impl PathArgs {
    fn into_config(self) -> IndexerConfig {
        IndexerConfig::from_base_dir(self.base_dir).with_input(self.input).with_output(self.output)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Build(PathArgs { base_dir: PathBuf::from("."), ..PathArgs::default() })) {
        Commands::Build(args) => {
            run_build(&args.into_config())?;
        }
        Commands::Check(args) => {
            let report = run_check(&args.into_config())?;
            if report.is_stale() {
                bail!("index is stale ({} tokens on disk, {} records in dataset)", report.tokens_on_disk, report.records);
            }
        }
    }
    Ok(())
}
