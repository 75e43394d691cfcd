//! Convert lat/lon coordinates to 1-indexed row and column indices on the
//! WRF Alaska grid.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use wrf_grid::GridLocator;

#[derive(Parser, Debug)]
#[command(name = "wrf-locate")]
#[command(about = "Convert lat/lon coordinates to 1-indexed row and column indices on the WRF Alaska grid")]
struct Args {
    /// Latitude in decimal degrees (WGS84)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in decimal degrees (WGS84)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // Logs go to stderr; stdout carries only the result line
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let locator = GridLocator::wrf_alaska();
    debug!(lat = args.lat, lon = args.lon, "looking up grid cell");

    let cell = locator.locate(args.lat, args.lon)?;
    println!("Row: {}; Column: {}", cell.row, cell.col);

    Ok(())
}
