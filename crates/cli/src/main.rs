//! AOIGrid CLI - statistics and grid segmentation for drawn areas of interest

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use aoigrid_algorithms::segmentation::{segment_with, SegmentParams};
use aoigrid_algorithms::stats::{compute_stats, AreaStatus};
use aoigrid_core::io::{cells_to_feature_collection, read_ring, write_feature_collection};
use aoigrid_core::Ring;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "aoigrid")]
#[command(author, version, about = "AOI statistics and grid segmentation", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Point count, closure, centroid and area of a drawn path
    Stats {
        /// Input GeoJSON file (Feature, FeatureCollection or geometry)
        input: PathBuf,
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Tile a closed AOI into square cells of fixed area
    Segment {
        /// Input GeoJSON file (Feature, FeatureCollection or geometry)
        input: PathBuf,
        /// Area of each grid cell in km²
        #[arg(short, long, default_value = "20")]
        grid_area: f64,
        /// Buffer distance around the AOI in km
        #[arg(short, long, default_value = "0")]
        buffer: f64,
        /// Directory the FeatureCollection is written to
        #[arg(short, long, default_value = "output")]
        output_dir: PathBuf,
        /// Only print the summary, do not write a file
        #[arg(long)]
        no_write: bool,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_aoi(path: &Path) -> Result<Ring> {
    let ring = read_ring(path)
        .with_context(|| format!("Failed to read AOI from {}", path.display()))?;
    info!("Input: {} points", ring.len());
    Ok(ring)
}

fn done(name: &str, path: &Path, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

// ─── Commands ───────────────────────────────────────────────────────────

fn run_stats(input: &Path, json: bool) -> Result<()> {
    let ring = read_aoi(input)?;
    let report = compute_stats(&ring).context("Failed to compute statistics")?;

    match &report.area {
        AreaStatus::Measured { crs } => info!("Area measured in {}", crs),
        AreaStatus::NotApplicable => info!("Open path, area not applicable"),
        AreaStatus::Unavailable(e) => warn!("Area unavailable, reported as 0: {}", e),
    }

    if json {
        let out = serde_json::to_string_pretty(&report.stats)
            .context("Failed to serialize statistics")?;
        println!("{}", out);
        return Ok(());
    }

    let stats = &report.stats;
    println!("File: {}", input.display());
    println!("Points: {}", stats.point_count);
    println!("Closed: {}", stats.is_closed);
    println!("Area: {:.3} km²", stats.area_sqkm);
    match &stats.centroid {
        Some(c) => println!("Centroid: ({:.6}, {:.6})", c.lon(), c.lat()),
        None => println!("Centroid: -"),
    }
    Ok(())
}

fn run_segment(input: &Path, params: SegmentParams, output_dir: &Path, no_write: bool) -> Result<()> {
    let ring = read_aoi(input)?;

    let start = Instant::now();
    let pb = spinner("Segmenting AOI...");
    let result = segment_with(&ring, &params);
    pb.finish_and_clear();
    let result = result.context("Segmentation failed")?;
    let elapsed = start.elapsed();

    info!(
        "Grid: {} x {} cells of {:.1} m in {}",
        result.columns, result.rows, result.side_length_m, result.crs
    );
    println!("{}", result.message);

    if no_write {
        println!("  Processing time: {:.2?}", elapsed);
        return Ok(());
    }

    let pb = spinner("Writing GeoJSON...");
    let fc = cells_to_feature_collection(&result.cells);
    let written = write_feature_collection(&fc, output_dir);
    pb.finish_and_clear();
    let path = written.context("Failed to write segmentation result")?;

    done("Segmentation", &path, start.elapsed());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Stats { input, json } => run_stats(&input, json),
        Commands::Segment {
            input,
            grid_area,
            buffer,
            output_dir,
            no_write,
        } => {
            let params = SegmentParams {
                grid_area_sqkm: grid_area,
                buffer_km: buffer,
            };
            run_segment(&input, params, &output_dir, no_write)
        }
    }
}
