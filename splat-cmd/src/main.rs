use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use splat_decode::{DEFAULT_MAX_POINTS, DecodeConfig, decode_splats};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI for decoding a Gaussian splat ply file and reporting its statistics.
#[derive(Parser)]
struct Args {
    /// Binary little endian splat ply file
    #[arg(short, long)]
    input: PathBuf,

    /// Max nr. of points to keep, larger files are subsampled
    #[arg(short, long, default_value_t = DEFAULT_MAX_POINTS)]
    max_points: usize,

    /// Print the decoded summary as json on stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let data = tokio::fs::read(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    info!("Read {} bytes from {}", data.len(), args.input.display());

    let config = DecodeConfig::new().with_max_points(args.max_points);
    let cloud = decode_splats(&data, &config)
        .with_context(|| format!("Failed to decode {}", args.input.display()))?;

    let summary = cloud.summary();
    info!(
        count = summary.count,
        radius = summary.radius,
        "Decoded splats, center {:?}, bounds {:?} .. {:?}",
        summary.center,
        summary.min,
        summary.max
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
