//! # Engine - MapReaper Cleanup Engine
//!
//! The central orchestrator that ties together the [`worldmeta`] and
//! [`geometry`] crates into a complete save-directory cleanup tool.
//!
//! ## Architecture
//!
//! ```text
//! CLI flags + save directory
//!   |
//!   v
//! ┌───────────────────────────────────────────────┐
//! │                   CLEANER                     │
//! │                                               │
//! │ protect.rs → map_meta.bin → safehouse list    │
//! │                  |                            │
//! │                  v                            │
//! │          ProtectedZones (padded tiles)        │
//! │                  |                            │
//! │ sweep.rs → for (x, y) in area:                │
//! │              protected? count + skip          │
//! │              else: name files per category,   │
//! │                    dedup, locate on disk      │
//! │                  |                            │
//! │                  v                            │
//! │ sink.rs → remove_file() | "Would delete"      │
//! │                                               │
//! │ scan.rs → tile discovery + coverage box       │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module      | Purpose                                                  |
//! |------------|----------------------------------------------------------|
//! | [`lib.rs`] | `Cleaner` struct, constructor, accessors, constants       |
//! | [`protect`]| Metadata load, safehouse decode, protection index         |
//! | [`sweep`]  | `clean_area()` coordinate walk with dedup + protection    |
//! | [`locate`] | File naming, chunk math, flat/nested path resolution      |
//! | [`scan`]   | Map tile discovery and coverage summary for listings      |
//! | [`sink`]   | `DeletionSink` trait, filesystem + preview implementations|
//!
//! ## Failure Policy
//!
//! Corrupt or missing world metadata never aborts a sweep: decode problems
//! are logged and the sweep runs with an empty protection index. Individual
//! deletion failures are reported through the sink and counted; the sweep
//! always visits every coordinate in the requested area.
mod locate;
mod protect;
mod scan;
mod sink;
mod sweep;

use std::path::{Path, PathBuf};

pub use locate::{parse_map_filename, FileCategory, TILES_PER_CHUNK};
pub use scan::Coverage;
pub use sink::{DeletionSink, FsDeletionSink, PreviewSink};
pub use sweep::{CleanOptions, SweepReport};

/// Name of the world metadata file in the save directory root.
pub const META_FILENAME: &str = "map_meta.bin";

/// Default padding (in tiles) added around each safehouse region.
///
/// The game stores a safehouse as the claimed rectangle only, but players
/// keep vehicles and crops in the immediate surroundings. Each protected
/// region is widened by this many tiles on every side before the sweep
/// consults it. Set to `0` to protect exactly the claimed footprint.
pub const DEFAULT_SAFEHOUSE_PADDING: i32 = 2;

/// Deletes map files for a rectangular tile area of one game save.
///
/// # Sweep Path
///
/// 1. Decode safehouses from `map_meta.bin` and build the protection index.
/// 2. Walk every coordinate of the requested area in row-major order.
/// 3. Skip protected coordinates; for the rest, derive the file name for
///    each enabled category and delete it through the sink.
/// 4. Return a [`SweepReport`] with examined/deleted/protected counts.
///
/// Construction is cheap and infallible. The save directory is validated by
/// the operations that read it, so a cleaner for a missing directory fails
/// with a clear error on first use rather than at construction.
#[derive(Debug, Clone)]
pub struct Cleaner {
    save_dir: PathBuf,
}

impl Cleaner {
    /// Creates a cleaner rooted at a save directory.
    #[must_use]
    pub fn new<P: AsRef<Path>>(save_dir: P) -> Self {
        Self {
            save_dir: save_dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the save directory this cleaner operates on.
    #[must_use]
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }
}

#[cfg(test)]
mod tests;
