//! Deletion sinks: where located files are sent.
//!
//! The sweep never unlinks files itself. It hands each located file to a
//! [`DeletionSink`], which lets the same sweep serve real deletion, dry
//! runs, and tests that only record what would happen.

use std::path::Path;

/// Receives one call per located file during a sweep.
pub trait DeletionSink {
    /// Handles a single file. `name` is the bare file name as reported to
    /// the user; `path` is where it was found on disk.
    ///
    /// Returns `false` when the file could not be removed. Implementations
    /// report their own outcomes; the sweep only counts the failure and
    /// moves on.
    fn remove(&mut self, name: &str, path: &Path) -> bool;
}

/// Deletes files from disk, reporting each outcome on stdout.
#[derive(Debug, Default)]
pub struct FsDeletionSink;

impl DeletionSink for FsDeletionSink {
    fn remove(&mut self, name: &str, path: &Path) -> bool {
        match std::fs::remove_file(path) {
            Ok(()) => {
                println!("Deleted: {name}");
                true
            }
            Err(err) => {
                println!("Error deleting {name}: {err}");
                false
            }
        }
    }
}

/// Reports what a real run would delete without touching the filesystem.
#[derive(Debug, Default)]
pub struct PreviewSink;

impl DeletionSink for PreviewSink {
    fn remove(&mut self, name: &str, _path: &Path) -> bool {
        println!("Would delete: {name}");
        true
    }
}
