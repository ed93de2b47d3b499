//! Safehouse extraction from raw metadata bytes.
//!
//! The public entry point is [`read_safehouses`]: whatever the input looks
//! like, it hands back a list. A missing file, a truncated file, a revision
//! this decoder does not model, all of these are normal outcomes with zero
//! (or fewer) safehouses, logged at warn level, never an error the sweep has
//! to handle.

use bytecursor::{ByteCursor, CursorError};
use geometry::Region;
use thiserror::Error;

use crate::format::{
    building_record_len, read_header, room_record_len, FIRST_SAFEHOUSE_VERSION,
    MIN_SUPPORTED_VERSION, RESPAWN_MIN_VERSION, TITLE_MIN_VERSION, WORLD_UNITS_PER_TILE,
};

/// A player-claimed safehouse decoded from world metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Safehouse {
    /// Claimed footprint in tile units, covering every partially occupied
    /// tile.
    pub region: Region,
    /// Claiming player.
    pub owner: String,
    /// Members with access, in file order.
    pub players: Vec<String>,
    /// Display title. Versions before 101 store none; those records get
    /// `"<owner>'s safe house"`.
    pub title: String,
}

/// Why a strict [`decode`] gave up.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file predates the cell grid encoding this decoder models.
    #[error("metadata version {version} is not supported (needs 194 or newer)")]
    UnsupportedVersion { version: i32 },

    /// A read ran past the end of the buffer before the safehouse section.
    #[error("metadata ends early: {0}")]
    Truncated(#[from] CursorError),
}

/// Decodes the safehouse list, degrading to an empty list on any failure.
///
/// This is the entry point the engine uses. Problems surface only as fewer
/// protected regions plus a warning in the log.
#[must_use]
pub fn read_safehouses(bytes: &[u8]) -> Vec<Safehouse> {
    match decode(bytes) {
        Ok(houses) => houses,
        Err(DecodeError::UnsupportedVersion { version }) => {
            log::warn!(
                "metadata version {} predates the supported format; safehouses will not be protected",
                version
            );
            Vec::new()
        }
        Err(err) => {
            log::warn!("could not decode world metadata: {}", err);
            Vec::new()
        }
    }
}

/// Strict decode surfacing the failure reason.
///
/// Failures inside the safehouse section itself never reach the caller: a
/// missing count means a world with no safehouses (some revisions omit the
/// section entirely when empty), and a record that cuts off mid-field
/// truncates the list to the entries already decoded.
pub fn decode(bytes: &[u8]) -> Result<Vec<Safehouse>, DecodeError> {
    let mut cur = ByteCursor::new(bytes);
    let header = read_header(&mut cur)?;

    if header.version < MIN_SUPPORTED_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            version: header.version,
        });
    }

    skip_cell_grid(&mut cur, header.version)?;
    Ok(read_safehouse_section(&mut cur, header.version))
}

/// Advances the cursor past the per-cell room and building lists.
///
/// Iteration is x outer, y inner, matching the writer's nesting.
fn skip_cell_grid(cur: &mut ByteCursor, version: i32) -> Result<(), CursorError> {
    let min_x = cur.read_i32()?;
    let min_y = cur.read_i32()?;
    let max_x = cur.read_i32()?;
    let max_y = cur.read_i32()?;

    let room_len = room_record_len(version);
    let building_len = building_record_len(version);

    for _x in min_x..=max_x {
        for _y in min_y..=max_y {
            let rooms = cur.read_i32()?;
            for _ in 0..rooms {
                cur.skip(room_len)?;
            }
            let buildings = cur.read_i32()?;
            for _ in 0..buildings {
                cur.skip(building_len)?;
            }
        }
    }
    Ok(())
}

/// Reads the safehouse section from the current cursor position.
pub(crate) fn read_safehouse_section(cur: &mut ByteCursor, version: i32) -> Vec<Safehouse> {
    if version < FIRST_SAFEHOUSE_VERSION {
        return Vec::new();
    }

    // A missing count is a world with no safehouses, not an error.
    let count = match cur.read_i32() {
        Ok(n) => n,
        Err(_) => return Vec::new(),
    };

    let mut houses = Vec::new();
    for _ in 0..count {
        match read_safehouse(cur, version) {
            Ok(house) => houses.push(house),
            // The cursor cannot be trusted past a failed record.
            Err(_) => break,
        }
    }
    houses
}

/// Reads one safehouse record.
pub(crate) fn read_safehouse(cur: &mut ByteCursor, version: i32) -> Result<Safehouse, CursorError> {
    let x = cur.read_i32()?;
    let y = cur.read_i32()?;
    let w = cur.read_i32()?;
    let h = cur.read_i32()?;

    let owner = cur.read_string()?;

    let player_count = cur.read_i32()?;
    let mut players = Vec::new();
    for _ in 0..player_count {
        players.push(cur.read_string()?);
    }

    // Last-visited timestamp, unused here.
    cur.skip(8)?;

    let title = if version >= TITLE_MIN_VERSION {
        cur.read_string()?
    } else {
        format!("{owner}'s safe house")
    };

    if version >= RESPAWN_MIN_VERSION {
        let respawn_count = cur.read_i32()?;
        for _ in 0..respawn_count {
            cur.read_string()?;
        }
    }

    Ok(Safehouse {
        region: tile_region(x, y, w, h),
        owner,
        players,
        title,
    })
}

/// Converts a world-unit rectangle to a half-open tile region.
///
/// The near corner rounds down and the far corner rounds up, so a partially
/// occupied tile always ends up inside the region.
fn tile_region(x: i32, y: i32, w: i32, h: i32) -> Region {
    // x + w can leave the i32 range, so the far corner is widened before
    // rounding.
    fn tile_ceil(world: i64) -> i32 {
        const TILE: i64 = WORLD_UNITS_PER_TILE as i64;
        (world + TILE - 1).div_euclid(TILE) as i32
    }

    Region::new(
        x.div_euclid(WORLD_UNITS_PER_TILE),
        y.div_euclid(WORLD_UNITS_PER_TILE),
        tile_ceil(i64::from(x) + i64::from(w)),
        tile_ceil(i64::from(y) + i64::from(h)),
    )
}
