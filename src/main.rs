use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use unify_roadmap::config::{UnifyConfig, UNIFIED_OUTPUT_FILE};
use unify_roadmap::pipeline;

#[derive(Parser, Debug)]
#[command(name = "unify-roadmap")]
#[command(about = "Generates the unified Ultra-IA roadmap from its source reports")]
#[command(version)]
struct Args {
    /// Directory holding the source reports and receiving the output
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Output file name, relative to the base directory
    #[arg(long, default_value = UNIFIED_OUTPUT_FILE)]
    output: PathBuf,

    /// Count temporal mentions in each source report (output is unaffected)
    #[arg(long)]
    scan_temporal: bool,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

// WHY: one sequential read/assemble/write pass; a worker pool would sit idle
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // WHY: stdout carries only the progress messages, JSON logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting unify-roadmap");
    info!(?args, "Parsed CLI arguments");

    // WHY: validate the base directory up front for a clearer error than a missing source
    if !args.base_dir.exists() {
        anyhow::bail!("Base directory does not exist: {}", args.base_dir.display());
    }

    if !args.base_dir.is_dir() {
        anyhow::bail!("Base path is not a directory: {}", args.base_dir.display());
    }

    let config = UnifyConfig {
        output_file: args.output,
        scan_temporal: args.scan_temporal,
        stats_out: args.stats_out,
        ..UnifyConfig::with_base_dir(&args.base_dir)
    };

    pipeline::run(&config).await?;

    Ok(())
}
