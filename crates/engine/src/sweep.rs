//! The area sweep: `clean_area()` and its option/report types.

use std::collections::HashSet;

use anyhow::{ensure, Result};
use geometry::{ProtectedZones, Region};

use crate::{Cleaner, DeletionSink, FileCategory, DEFAULT_SAFEHOUSE_PADDING};

/// What a sweep should delete and how safehouses are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Delete tile-level `map_<x>_<y>.bin` files.
    pub map_data: bool,
    /// Delete chunk-level `chunkdata_<cx>_<cy>.bin` files.
    pub chunk_data: bool,
    /// Delete chunk-level `zpop_<cx>_<cy>.bin` files.
    pub zpop_data: bool,
    /// Skip coordinates claimed by a safehouse.
    pub protect_safehouses: bool,
    /// Tiles of extra margin around each safehouse region.
    pub padding: i32,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            map_data: true,
            chunk_data: false,
            zpop_data: false,
            protect_safehouses: true,
            padding: DEFAULT_SAFEHOUSE_PADDING,
        }
    }
}

impl CleanOptions {
    /// Enabled categories in sweep order: map, then chunk, then zpop.
    pub(crate) fn enabled_categories(&self) -> Vec<FileCategory> {
        let mut categories = Vec::new();
        if self.map_data {
            categories.push(FileCategory::Map);
        }
        if self.chunk_data {
            categories.push(FileCategory::Chunk);
        }
        if self.zpop_data {
            categories.push(FileCategory::Zpop);
        }
        categories
    }
}

/// Counters accumulated over one `clean_area()` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Coordinates visited, protected ones included.
    pub examined: u64,
    /// Files handed to the sink. A failed removal still counts here.
    pub deleted: u64,
    /// Coordinates skipped because a safehouse claims them.
    pub protected: u64,
    /// Sink calls that reported failure.
    pub failed: u64,
}

impl Cleaner {
    /// Sweeps a rectangular tile area, deleting every enabled file category
    /// through `sink`.
    ///
    /// The area is half-open on both axes: `from_x..to_x` by `from_y..to_y`.
    /// Coordinates are visited in row-major order, x outermost, so deletion
    /// output is deterministic. Each coordinate is counted as examined; a
    /// coordinate inside a protected zone is counted and skipped whole, with
    /// no file touched for any category.
    ///
    /// Chunk-level files are shared by many tiles. Each file name is sent to
    /// the sink at most once per sweep, the first time a coordinate maps to
    /// it and the file exists on disk.
    ///
    /// # Errors
    ///
    /// Fails when no category is enabled or `padding` is negative. Deletion
    /// failures do not abort the sweep; they are tallied in
    /// [`SweepReport::failed`].
    pub fn clean_area(
        &self,
        area: Region,
        opts: &CleanOptions,
        sink: &mut dyn DeletionSink,
    ) -> Result<SweepReport> {
        ensure!(
            opts.map_data || opts.chunk_data || opts.zpop_data,
            "Select at least one file type to delete"
        );
        ensure!(opts.padding >= 0, "padding must not be negative");

        let zones = if opts.protect_safehouses {
            self.protected_zones(opts.padding)
        } else {
            ProtectedZones::default()
        };

        let categories = opts.enabled_categories();
        let mut requested: HashSet<String> = HashSet::new();
        let mut report = SweepReport::default();

        for x in area.from_x..area.to_x {
            for y in area.from_y..area.to_y {
                report.examined += 1;

                if zones.contains(x, y) {
                    report.protected += 1;
                    continue;
                }

                for &category in &categories {
                    let name = category.filename(x, y);
                    if requested.contains(&name) {
                        continue;
                    }
                    let (gx, gy) = category.grid_coords(x, y);
                    if let Some(path) = self.locate(&name, gx, gy) {
                        // A failed removal still counts as deleted; the
                        // file was found and the attempt was reported.
                        if !sink.remove(&name, &path) {
                            report.failed += 1;
                        }
                        report.deleted += 1;
                        requested.insert(name);
                    }
                }
            }
        }

        Ok(report)
    }
}
