use byteorder::{BigEndian, WriteBytesExt};

/// Builds metadata buffers byte by byte for decoder tests.
///
/// Record filler uses literal version-194 widths (10-byte rooms, 19-byte
/// buildings) rather than the production width functions, so a width bug
/// cannot cancel itself out.
pub struct MetaEncoder {
    buf: Vec<u8>,
}

impl MetaEncoder {
    /// Starts a marked file: `"META"` plus `version`.
    pub fn versioned(version: i32) -> Self {
        let mut enc = Self { buf: Vec::new() };
        enc.raw(b"META").i32(version);
        enc
    }

    /// Starts an unmarked legacy file.
    pub fn legacy() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.buf.write_i32::<BigEndian>(v).unwrap();
        self
    }

    pub fn i64(&mut self, v: i64) -> &mut Self {
        self.buf.write_i64::<BigEndian>(v).unwrap();
        self
    }

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Length-prefixed string.
    pub fn string(&mut self, s: &str) -> &mut Self {
        self.string_raw(s.as_bytes())
    }

    /// Length-prefixed payload that need not be valid UTF-8.
    pub fn string_raw(&mut self, payload: &[u8]) -> &mut Self {
        self.buf.write_u16::<BigEndian>(payload.len() as u16).unwrap();
        self.raw(payload)
    }

    /// World bounds, inclusive on both axes.
    pub fn bounds(&mut self, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> &mut Self {
        self.i32(min_x).i32(min_y).i32(max_x).i32(max_y)
    }

    /// One grid cell holding `rooms` and `buildings` records in the
    /// version-194 layout.
    pub fn cell_v194(&mut self, rooms: i32, buildings: i32) -> &mut Self {
        self.i32(rooms);
        for _ in 0..rooms {
            self.raw(&[0u8; 10]);
        }
        self.i32(buildings);
        for _ in 0..buildings {
            self.raw(&[0u8; 19]);
        }
        self
    }

    /// Bounds plus an all-empty cell grid covering them.
    pub fn empty_grid(&mut self, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> &mut Self {
        self.bounds(min_x, min_y, max_x, max_y);
        for _ in min_x..=max_x {
            for _ in min_y..=max_y {
                self.cell_v194(0, 0);
            }
        }
        self
    }

    /// One safehouse record in the version-194 layout (title present, empty
    /// respawn list).
    pub fn safehouse(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        owner: &str,
        players: &[&str],
        title: &str,
    ) -> &mut Self {
        self.i32(x).i32(y).i32(w).i32(h);
        self.string(owner);
        self.i32(players.len() as i32);
        for p in players {
            self.string(p);
        }
        self.i64(0); // last visited
        self.string(title);
        self.i32(0) // respawn points
    }

    pub fn finish(&self) -> Vec<u8> {
        self.buf.clone()
    }
}
