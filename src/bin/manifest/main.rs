//! Writes `Manifest.json` listing the baseline panel plus the
//! evaluated participant per cancer type.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use driverbench::Result;
use driverbench::manifest::{build_manifest, write_manifest};

#[derive(Debug, Parser)]
#[command(
    name = "driverbench-manifest",
    version,
    about = "Generate the benchmark manifest for the selected cancer types"
)]
struct Cli {
    /// Dir where the manifest and the data for the benchmark are stored
    #[arg(short = 'b', long = "benchmark_data")]
    benchmark_data: PathBuf,

    /// List of types of cancer selected by the user, separated by spaces
    #[arg(short = 'c', long = "cancer_types", num_args = 1.., required = true)]
    cancer_types: Vec<String>,

    /// Name of the tool used for prediction
    #[arg(short = 'p', long = "participant_name")]
    participant_name: String,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let entries = build_manifest(&cli.cancer_types, &cli.participant_name);
    let path = write_manifest(&cli.benchmark_data, &entries)?;
    info!(
        "wrote manifest for {} cancer types to {}",
        entries.len(),
        path.display()
    );
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
