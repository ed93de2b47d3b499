use std::fs;
use std::path::Path;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{DeletionSink, META_FILENAME};

/// Creates an empty file named `name` inside `dir`.
pub fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}

/// Writes a version-194 metadata file with an empty one-cell grid and the
/// given safehouse rectangles (world units: x, y, width, height).
pub fn write_meta_file(dir: &Path, houses: &[(i32, i32, i32, i32)]) {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"META");
    buf.write_i32::<BigEndian>(194).unwrap();
    // world bounds spanning a single cell
    for bound in [0, 0, 0, 0] {
        buf.write_i32::<BigEndian>(bound).unwrap();
    }
    // the cell: no rooms, no buildings
    buf.write_i32::<BigEndian>(0).unwrap();
    buf.write_i32::<BigEndian>(0).unwrap();
    buf.write_i32::<BigEndian>(houses.len() as i32).unwrap();
    for &(x, y, w, h) in houses {
        for value in [x, y, w, h] {
            buf.write_i32::<BigEndian>(value).unwrap();
        }
        write_str(&mut buf, "Owner");
        buf.write_i32::<BigEndian>(0).unwrap(); // no players
        buf.extend_from_slice(&[0u8; 8]); // last-visited timestamp
        write_str(&mut buf, "Base");
        buf.write_i32::<BigEndian>(0).unwrap(); // no respawn points
    }
    fs::write(dir.join(META_FILENAME), buf).unwrap();
}

fn write_str(buf: &mut Vec<u8>, s: &str) {
    buf.write_u16::<BigEndian>(s.len() as u16).unwrap();
    buf.extend_from_slice(s.as_bytes());
}

/// Sink that records every call without touching the filesystem.
#[derive(Default)]
pub struct RecordingSink {
    pub names: Vec<String>,
    /// When set, every call reports failure.
    pub fail_all: bool,
}

impl DeletionSink for RecordingSink {
    fn remove(&mut self, name: &str, _path: &Path) -> bool {
        self.names.push(name.to_string());
        !self.fail_all
    }
}
