//! geojson-simplify CLI - reduce the coordinate density of a GeoJSON file

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geojson_simplify::io::{simplify_file, SimplifyOptions, SimplifyReport, DEFAULT_TOLERANCE};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Parser)]
#[command(name = "geojson-simplify")]
#[command(author, version, about = "Reduce the coordinate density of a GeoJSON file", long_about = None)]
struct Cli {
    /// Minimum distance between kept points, in degrees (0.0001 is about 11 m)
    #[arg(default_value_t = DEFAULT_TOLERANCE, allow_negative_numbers = true)]
    tolerance: f64,

    /// Input GeoJSON file
    #[arg(short, long, default_value = "Cartografia/Autonomias.geojson")]
    input: PathBuf,

    /// Output GeoJSON file
    #[arg(short, long, default_value = "Cartografia/Autonomias_simplified.geojson")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn done(report: &SimplifyReport, path: &Path, elapsed: std::time::Duration) {
    println!("Simplified GeoJSON saved to: {}", path.display());
    println!(
        "  Original size: {:.2} MB",
        report.input_bytes as f64 / BYTES_PER_MB
    );
    println!("  New size: {:.2} MB", report.output_bytes as f64 / BYTES_PER_MB);
    println!("  Reduction: {:.1}%", report.reduction_percent());
    println!("  Processing time: {:.2?}", elapsed);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let options = SimplifyOptions::new(cli.input, cli.output).with_tolerance(cli.tolerance);
    options.validate().context("Invalid tolerance argument")?;

    let start = Instant::now();
    let report = simplify_file(&options).with_context(|| {
        format!(
            "Failed to simplify {} into {}",
            options.input.display(),
            options.output.display()
        )
    })?;
    let elapsed = start.elapsed();

    if let Some(num_features) = report.num_features {
        info!("Features: {}", num_features);
    }
    info!(
        "Coordinates: {} -> {}",
        report.input_coords, report.output_coords
    );
    done(&report, &options.output, elapsed);
    Ok(())
}
