//! Safehouse protection: metadata loading and the protection index.
//!
//! Protection is strictly best-effort. A save with no metadata file, a
//! truncated file, or a file from a game build older than the supported
//! format all degrade to "no safehouses" with a logged warning, and the
//! sweep proceeds unprotected.

use std::io;

use geometry::ProtectedZones;
use worldmeta::Safehouse;

use crate::{Cleaner, META_FILENAME};

impl Cleaner {
    /// Decodes the safehouses recorded in the save's metadata file.
    ///
    /// A missing file is a world with no claims and returns an empty list
    /// silently. Any other read or decode problem is logged at `warn` and
    /// also yields an empty list.
    #[must_use]
    pub fn load_safehouses(&self) -> Vec<Safehouse> {
        let path = self.save_dir().join(META_FILENAME);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log::warn!("could not read {}: {}", path.display(), err);
                return Vec::new();
            }
        };
        worldmeta::read_safehouses(&bytes)
    }

    /// Builds the protection index the sweep consults, widening every
    /// safehouse region by `padding` tiles on each side.
    #[must_use]
    pub fn protected_zones(&self, padding: i32) -> ProtectedZones {
        let houses = self.load_safehouses();
        if !houses.is_empty() {
            log::info!(
                "protecting {} safehouse region(s) with padding {}",
                houses.len(),
                padding
            );
        }
        ProtectedZones::build(houses.into_iter().map(|house| house.region), padding)
    }
}
