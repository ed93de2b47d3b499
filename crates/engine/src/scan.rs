//! Map tile discovery for directory listings.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::{parse_map_filename, Cleaner};

/// Bounding box over the tile coordinates of the discovered map files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    /// Number of map files found.
    pub files: usize,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Coverage {
    /// Summarizes a tile list; `None` when it is empty.
    #[must_use]
    pub fn from_tiles(tiles: &[(i32, i32)]) -> Option<Self> {
        let (&(first_x, first_y), rest) = tiles.split_first()?;
        let mut coverage = Self {
            files: tiles.len(),
            min_x: first_x,
            max_x: first_x,
            min_y: first_y,
            max_y: first_y,
        };
        for &(x, y) in rest {
            coverage.min_x = coverage.min_x.min(x);
            coverage.max_x = coverage.max_x.max(x);
            coverage.min_y = coverage.min_y.min(y);
            coverage.max_y = coverage.max_y.max(y);
        }
        Some(coverage)
    }

    /// Tile width of the covered area, both edges inclusive.
    #[must_use]
    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x) + 1
    }

    /// Tile height of the covered area, both edges inclusive.
    #[must_use]
    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y) + 1
    }
}

impl Cleaner {
    /// Tile coordinates of every map file in the save, sorted.
    ///
    /// Scans both layouts: flat files in the directory root and files
    /// nested under numeric per-axis subdirectories. Entries whose names
    /// do not parse as map files are skipped, so a save directory holding
    /// foreign files lists cleanly.
    ///
    /// # Errors
    ///
    /// Fails when the save directory does not exist or is not a directory.
    pub fn scan_map_tiles(&self) -> Result<Vec<(i32, i32)>> {
        let dir = self.save_dir();
        if !dir.exists() {
            bail!("Directory not found: {}", dir.display());
        }
        if !dir.is_dir() {
            bail!("Not a directory: {}", dir.display());
        }

        let mut tiles = Vec::new();
        let entries =
            fs::read_dir(dir).with_context(|| format!("could not list {}", dir.display()))?;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if path.is_file() {
                if let Some(tile) = parse_map_filename(name) {
                    tiles.push(tile);
                }
            } else if path.is_dir() && name.parse::<i32>().is_ok() {
                scan_nested_axis(&path, &mut tiles);
            }
        }

        tiles.sort_unstable();
        Ok(tiles)
    }
}

/// Second directory level of the nested layout: `<save>/<gx>/<gy>/...`.
/// Unreadable subdirectories are skipped rather than failing the scan.
fn scan_nested_axis(axis_dir: &Path, tiles: &mut Vec<(i32, i32)>) {
    let entries = match fs::read_dir(axis_dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        let numeric = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.parse::<i32>().is_ok())
            .unwrap_or(false);
        if path.is_dir() && numeric {
            scan_leaf_dir(&path, tiles);
        }
    }
}

/// Innermost directory of the nested layout, holding the actual files.
fn scan_leaf_dir(leaf: &Path, tiles: &mut Vec<(i32, i32)>) {
    let entries = match fs::read_dir(leaf) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(tile) = parse_map_filename(name) {
                tiles.push(tile);
            }
        }
    }
}
