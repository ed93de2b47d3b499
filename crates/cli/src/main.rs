//! # CLI - MapReaper Save Cleaner
//!
//! Command-line front end for the MapReaper engine. Points the cleaner at a
//! game save directory and either lists the map files it contains or deletes
//! a rectangular tile area, with safehouse regions protected by default.
//!
//! ## Usage
//!
//! ```text
//! mapreaper <DIRECTORY> --list
//! mapreaper <DIRECTORY> --area START_X START_Y END_X END_Y
//!           [--map-data] [--chunk-data] [--zpop-data]
//!           [--dry-run] [--no-protect] [--padding N]
//! ```
//!
//! The area is half-open: start coordinates are inclusive, end coordinates
//! exclusive. At least one of the three file-type flags must be given.
//!
//! ## Configuration
//!
//! ```text
//! REAPER_PADDING  default safehouse padding in tiles  (default: 2)
//! RUST_LOG        log filter for diagnostics          (e.g. "info")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ mapreaper /saves/world1 --area 100 100 200 200 --map-data --dry-run
//! DRY RUN: Processing area: X=[100, 200), Y=[100, 200)
//! Would delete: map_100_100.bin
//! Would delete: map_100_101.bin
//!
//! DRY RUN Summary:
//!   Coordinates checked: 10000
//!   Coordinates protected: 25
//!   Files would be deleted: 2
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use engine::{
    Cleaner, CleanOptions, Coverage, DeletionSink, FsDeletionSink, PreviewSink,
    DEFAULT_SAFEHOUSE_PADDING,
};
use geometry::Region;

/// Delete map files from a rectangular area of a game save.
#[derive(Parser, Debug)]
#[command(
    name = "mapreaper",
    version,
    about,
    after_help = "Examples:
  # List all map files and the area they cover
  mapreaper /saves/world1 --list

  # Preview deleting tile maps in a 100x100 tile square
  mapreaper /saves/world1 --area 100 100 200 200 --map-data --dry-run

  # Delete map, chunk and zombie data in the square
  mapreaper /saves/world1 --area 100 100 200 200 --map-data --chunk-data --zpop-data"
)]
struct Args {
    /// Path to the save directory
    directory: PathBuf,

    /// List map files and show the covered area instead of deleting
    #[arg(long)]
    list: bool,

    /// Tile area to delete: start inclusive, end exclusive
    #[arg(
        long,
        num_args = 4,
        value_names = ["START_X", "START_Y", "END_X", "END_Y"],
        allow_negative_numbers = true
    )]
    area: Option<Vec<i32>>,

    /// Delete tile map files (map_<x>_<y>.bin)
    #[arg(long)]
    map_data: bool,

    /// Delete chunk data files (chunkdata_<cx>_<cy>.bin)
    #[arg(long)]
    chunk_data: bool,

    /// Delete zombie population files (zpop_<cx>_<cy>.bin)
    #[arg(long)]
    zpop_data: bool,

    /// Report what would be deleted without removing anything
    #[arg(long)]
    dry_run: bool,

    /// Delete inside safehouse regions as well
    #[arg(long)]
    no_protect: bool,

    /// Tiles of margin kept around each safehouse (overrides REAPER_PADDING)
    #[arg(long)]
    padding: Option<i32>,
}

/// Reads a configuration value from the environment, falling back to `default`.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let cleaner = Cleaner::new(&args.directory);

    if args.list {
        return list_map_files(&cleaner);
    }

    let area = match args.area.as_deref() {
        Some(&[start_x, start_y, end_x, end_y]) => {
            if end_x <= start_x || end_y <= start_y {
                eprintln!(
                    "Error: Invalid area coordinates. \
                     End coordinates must be greater than start coordinates."
                );
                std::process::exit(1);
            }
            Region::new(start_x, start_y, end_x, end_y)
        }
        _ => {
            eprintln!("Error: --area is required when not using --list");
            Args::command().print_help().ok();
            std::process::exit(1);
        }
    };

    let padding = match args.padding {
        Some(padding) => padding,
        None => env_or("REAPER_PADDING", "2")
            .parse()
            .unwrap_or(DEFAULT_SAFEHOUSE_PADDING),
    };

    let opts = CleanOptions {
        map_data: args.map_data,
        chunk_data: args.chunk_data,
        zpop_data: args.zpop_data,
        protect_safehouses: !args.no_protect,
        padding,
    };
    log::debug!("sweep options: {opts:?}");

    let prefix = if args.dry_run { "DRY RUN: " } else { "" };
    println!(
        "{}Processing area: X=[{}, {}), Y=[{}, {})",
        prefix, area.from_x, area.to_x, area.from_y, area.to_y
    );

    let mut fs_sink = FsDeletionSink;
    let mut preview_sink = PreviewSink;
    let sink: &mut dyn DeletionSink = if args.dry_run {
        &mut preview_sink
    } else {
        &mut fs_sink
    };
    let report = cleaner.clean_area(area, &opts, sink)?;

    let prefix = if args.dry_run { "DRY RUN " } else { "" };
    println!("\n{prefix}Summary:");
    println!("  Coordinates checked: {}", report.examined);
    println!("  Coordinates protected: {}", report.protected);
    let verb = if args.dry_run { "would be " } else { "" };
    println!("  Files {}deleted: {}", verb, report.deleted);
    if report.failed > 0 {
        println!("  Failed deletions: {}", report.failed);
    }

    Ok(())
}

fn list_map_files(cleaner: &Cleaner) -> Result<()> {
    let tiles = cleaner.scan_map_tiles()?;
    match Coverage::from_tiles(&tiles) {
        None => println!("No map files found in directory."),
        Some(coverage) => {
            println!("Found {} map files", coverage.files);
            println!(
                "Coverage area: X=[{}, {}], Y=[{}, {}]",
                coverage.min_x, coverage.max_x, coverage.min_y, coverage.max_y
            );
            println!("Dimensions: {} x {}", coverage.width(), coverage.height());
        }
    }
    Ok(())
}
