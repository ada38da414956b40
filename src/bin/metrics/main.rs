//! Scores a participant's predicted driver genes against gold
//! standards, one assessment JSON per cancer type.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use driverbench::{AssessConfig, Result, run_assessment};

#[derive(Debug, Parser)]
#[command(
    name = "driverbench-metrics",
    version,
    about = "Compute TPR and precision of predicted cancer driver genes"
)]
struct Cli {
    /// List of cancer genes prediction
    #[arg(short = 'i', long = "participant_data")]
    participant_data: PathBuf,

    /// List of types of cancer selected by the user, separated by spaces
    #[arg(short = 'c', long = "cancer_types", num_args = 1.., required = true)]
    cancer_types: Vec<String>,

    /// Dir that contains metrics reference datasets for all cancer types
    #[arg(short = 'm', long = "metrics_ref")]
    metrics_ref: PathBuf,

    /// Name of the tool used for prediction
    #[arg(short = 'p', long = "participant_name")]
    participant_name: String,

    /// Output directory where assessment JSON files will be written
    #[arg(short = 'o', long = "output")]
    output: PathBuf,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AssessConfig {
        participant_data: cli.participant_data,
        gold_standards_dir: cli.metrics_ref,
        cancer_types: cli.cancer_types,
        participant: cli.participant_name,
        out_dir: cli.output,
    };
    run_assessment(&config)?;
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
