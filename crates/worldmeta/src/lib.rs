//! # Worldmeta - Map Metadata Decoder
//!
//! Read-only decoder for the `map_meta.bin` file the game keeps next to the
//! map tiles in a save directory. MapReaper reads it for exactly one purpose:
//! turning player-claimed safehouses into regions the sweep must not delete.
//!
//! ## File layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ HEADER                                                       │
//! │                                                              │
//! │ "META" (4 B ASCII, optional) | version (i32)                 │
//! │ Files without the marker are implicitly version 33.          │
//! ├──────────────────────────────────────────────────────────────┤
//! │ WORLD BOUNDS                                                 │
//! │                                                              │
//! │ min_x | min_y | max_x | max_y   (i32, inclusive)             │
//! ├──────────────────────────────────────────────────────────────┤
//! │ CELL GRID (one entry per (x, y), x outer, y inner)           │
//! │                                                              │
//! │ room_count (i32)     | room_count * room record              │
//! │ building_count (i32) | building_count * building record      │
//! │                                                              │
//! │ Record widths are version-dependent (table below). The       │
//! │ decoder skips this section byte-exactly; it needs none of    │
//! │ the contents, but one wrong width misaligns every read that  │
//! │ follows.                                                     │
//! ├──────────────────────────────────────────────────────────────┤
//! │ SAFEHOUSES (version >= 113; absent entirely when empty)      │
//! │                                                              │
//! │ count (i32), then per record:                                │
//! │   x, y, w, h (i32, world units)                              │
//! │   owner (string) | player_count (i32) | players (string...)  │
//! │   last_visited (8 B, skipped)                                │
//! │   title (string, version >= 101)                             │
//! │   respawn_count (i32) + respawn points (string..., v >= 177) │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are big-endian. Strings carry a u16 big-endian length prefix
//! (see [`bytecursor`]).
//!
//! ## Version history
//!
//! The game never documented this format; the thresholds below were
//! recovered from save files across releases and must be applied in exactly
//! this order.
//!
//! | Version | Change                                                 |
//! |---------|--------------------------------------------------------|
//! | 34      | Second room flag byte                                  |
//! | 57      | Building record grows by 4 bytes                       |
//! | 74      | Building record grows by 1 byte                        |
//! | 101     | Safehouse records carry an explicit title              |
//! | 107     | Building record grows by 1 byte                        |
//! | 111     | Building record grows by 4 bytes (dropped again in 121)|
//! | 113     | Safehouse section appears                              |
//! | 125     | Building record grows by 4 bytes                       |
//! | 160     | Room flags widen from one byte to two                  |
//! | 177     | Safehouse respawn point list                           |
//! | 194     | 64-bit room/building IDs; earliest version decoded     |
//!
//! Versions below 194 changed the cell grid in more ways than record width,
//! so the decoder treats them as undecodable and reports zero safehouses
//! rather than guessing.

mod format;
mod reader;

pub use format::{
    building_record_len, room_record_len, FormatHeader, FIRST_SAFEHOUSE_VERSION, FORMAT_MARKER,
    LEGACY_VERSION, MIN_SUPPORTED_VERSION, RESPAWN_MIN_VERSION, TITLE_MIN_VERSION,
    WORLD_UNITS_PER_TILE,
};
pub use reader::{decode, read_safehouses, DecodeError, Safehouse};

#[cfg(test)]
mod tests;
