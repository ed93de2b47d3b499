//! Format constants, header probe, and version-dependent record widths.
//!
//! The width functions are ordered chains of version checks mirroring the
//! fields the game added (and once removed) over the years. The thresholds
//! interleave per-field, not per-record; do not collapse or reorder them.

use bytecursor::{ByteCursor, CursorError};

/// ASCII marker opening a versioned metadata file.
pub const FORMAT_MARKER: &str = "META";

/// Version assumed for files that predate the marker.
pub const LEGACY_VERSION: i32 = 33;

/// Earliest version whose cell grid this decoder can walk.
///
/// Older revisions differ in more than record widths. Rather than walk the
/// grid wrongly and misread whatever follows, the decoder refuses them and
/// reports zero safehouses.
pub const MIN_SUPPORTED_VERSION: i32 = 194;

/// First version that stores a safehouse section at all.
pub const FIRST_SAFEHOUSE_VERSION: i32 = 113;

/// First version that stores an explicit safehouse title.
pub const TITLE_MIN_VERSION: i32 = 101;

/// First version that stores a respawn point list per safehouse.
pub const RESPAWN_MIN_VERSION: i32 = 177;

/// World units per map tile. Safehouse rectangles are stored in world
/// units; everything else in this tool speaks tiles.
pub const WORLD_UNITS_PER_TILE: i32 = 10;

/// Decoded file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatHeader {
    pub version: i32,
}

/// Reads the header, probing for the [`FORMAT_MARKER`].
///
/// The cursor is marked before the probe. If the first 4 bytes are not the
/// marker (or the file is shorter than 4 bytes), the cursor is rewound so an
/// unmarked legacy file decodes from offset 0.
pub(crate) fn read_header(cur: &mut ByteCursor) -> Result<FormatHeader, CursorError> {
    cur.mark();
    match cur.read_string_exact(4) {
        Ok(marker) if marker == FORMAT_MARKER => {
            let version = cur.read_i32()?;
            Ok(FormatHeader { version })
        }
        _ => {
            cur.reset();
            Ok(FormatHeader {
                version: LEGACY_VERSION,
            })
        }
    }
}

/// Width in bytes of one room record in the cell grid.
///
/// Room ID (4 B, 8 B since version 194), then flags (1 B, a second byte
/// since 34, widened to a single 2-byte field in 160).
#[must_use]
pub fn room_record_len(version: i32) -> usize {
    let mut len = if version >= 194 { 8 } else { 4 };
    if version >= 160 {
        len += 2;
    } else {
        len += 1;
        if version >= 34 {
            len += 1;
        }
    }
    len
}

/// Width in bytes of one building record in the cell grid.
///
/// Building ID (8 B since version 194, absent before), one flag byte, then
/// the fields each later revision appended. The 4-byte field added in 111
/// was removed again in 121.
#[must_use]
pub fn building_record_len(version: i32) -> usize {
    let mut len = 0;
    if version >= 194 {
        len += 8;
    }
    len += 1;
    if version >= 57 {
        len += 4;
    }
    if version >= 74 {
        len += 1;
    }
    if version >= 107 {
        len += 1;
    }
    if (111..121).contains(&version) {
        len += 4;
    }
    if version >= 125 {
        len += 4;
    }
    len
}
