use std::path::PathBuf;

use anyhow::Result;
use binary_converter::convert;
use clap::Parser;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

/// Converts a flat binary into lines of 32 binary digits, one per
/// little-endian word
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the input binary
    input: PathBuf,

    /// Path of the output text file
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

#[instrument]
fn run(cli: Cli) -> Result<()> {
    convert(&cli.input, &cli.output)?;
    Ok(())
}
