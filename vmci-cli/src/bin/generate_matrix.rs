// generate-matrix
// Emits the CI job matrix derived from the version configuration

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::PathBuf;
use vmci_service::{ConfigParser, JobMatrix};

/// Generate the CI job matrix from the Ubuntu version configuration.
#[derive(Parser)]
#[command(name = "generate-matrix", version)]
struct Args {
    /// Path to the version configuration file
    #[arg(long, default_value = ".github/ubuntu-versions.yml")]
    config: PathBuf,

    /// Include upcoming (pre-release) versions in the matrix
    #[arg(long)]
    include_upcoming: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config = ConfigParser::from_file(&args.config).wrap_err("Error generating matrix")?;
    let matrix = JobMatrix::generate(&config, args.include_upcoming);

    // The orchestrator consumes a single line on stdout, nothing else
    println!("{}", matrix.to_json()?);
    Ok(())
}
