//! File naming and on-disk resolution for the three map file categories.
//!
//! Map files are keyed by tile coordinate, chunk files by chunk coordinate
//! (one chunk covers a 30x30 tile square). A save written by an older game
//! build keeps every file flat in the directory root; newer builds nest
//! them one directory level per axis (`<save>/<gx>/<gy>/<name>`). Both
//! layouts can coexist in a save that was migrated mid-life, so resolution
//! checks the flat location first and falls back to the nested one.

use std::path::PathBuf;

use crate::Cleaner;

/// Width of one chunk in tiles. Chunk-level files aggregate this many
/// tiles per axis, so many tile coordinates map to the same chunk file.
pub const TILES_PER_CHUNK: i32 = 30;

/// The kinds of per-coordinate files a sweep can delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// Tile-level map data (`map_<x>_<y>.bin`), one file per tile.
    Map,
    /// Chunk-level map data (`chunkdata_<cx>_<cy>.bin`).
    Chunk,
    /// Chunk-level zombie population data (`zpop_<cx>_<cy>.bin`).
    Zpop,
}

impl FileCategory {
    /// Maps a tile coordinate to this category's file grid.
    ///
    /// Tile-level files use the coordinate unchanged; chunk-level files
    /// divide by [`TILES_PER_CHUNK`] with flooring, so negative tiles land
    /// in the correct negative chunk.
    #[must_use]
    pub fn grid_coords(self, x: i32, y: i32) -> (i32, i32) {
        match self {
            FileCategory::Map => (x, y),
            FileCategory::Chunk | FileCategory::Zpop => (
                x.div_euclid(TILES_PER_CHUNK),
                y.div_euclid(TILES_PER_CHUNK),
            ),
        }
    }

    /// Canonical file name for a tile coordinate.
    ///
    /// The name doubles as the deduplication identity during a sweep: two
    /// tiles in the same chunk yield the same `chunkdata` name.
    #[must_use]
    pub fn filename(self, x: i32, y: i32) -> String {
        let (gx, gy) = self.grid_coords(x, y);
        match self {
            FileCategory::Map => format!("map_{gx}_{gy}.bin"),
            FileCategory::Chunk => format!("chunkdata_{gx}_{gy}.bin"),
            FileCategory::Zpop => format!("zpop_{gx}_{gy}.bin"),
        }
    }
}

/// Extracts the tile coordinate from a `map_<x>_<y>.bin` file name.
///
/// Returns `None` for anything else, including names with extra
/// underscore-separated parts or non-numeric coordinates.
#[must_use]
pub fn parse_map_filename(name: &str) -> Option<(i32, i32)> {
    let coords = name.strip_prefix("map_")?.strip_suffix(".bin")?;
    let (x, y) = coords.split_once('_')?;
    if y.contains('_') {
        return None;
    }
    Some((x.parse().ok()?, y.parse().ok()?))
}

impl Cleaner {
    /// Resolves a file name to its on-disk path, or `None` if the file does
    /// not exist in either layout.
    ///
    /// `gx`/`gy` are the file's own grid coordinates (tile coordinates for
    /// map files, chunk coordinates for the rest); they name the nested
    /// subdirectories. The flat location wins when both exist.
    #[must_use]
    pub fn locate(&self, name: &str, gx: i32, gy: i32) -> Option<PathBuf> {
        let flat = self.save_dir().join(name);
        if flat.is_file() {
            return Some(flat);
        }
        let nested = self
            .save_dir()
            .join(gx.to_string())
            .join(gy.to_string())
            .join(name);
        if nested.is_file() {
            Some(nested)
        } else {
            None
        }
    }
}
