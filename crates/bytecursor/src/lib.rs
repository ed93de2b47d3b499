//! # ByteCursor - Big-Endian Slice Reader
//!
//! A sequential reader over a borrowed byte buffer, used to walk the binary
//! layout of Project Zomboid's world metadata files. The save format stores
//! every multi-byte integer big-endian, and strings with an unsigned 16-bit
//! big-endian length prefix:
//!
//! ```text
//! [len: u16 BE][bytes ...]
//! ```
//!
//! String payloads are decoded as UTF-8 where possible, falling back to a
//! Latin-1 interpretation (byte value = code point) because the game does not
//! guarantee valid UTF-8 in player-provided names. Decoded strings are
//! truncated at the first embedded NUL.
//!
//! Every read is bounds-checked up front: a read that would pass the end of
//! the buffer fails with [`CursorError::TruncatedData`] carrying the requested
//! size and the current offset, and leaves the offset where it was. Callers
//! can therefore treat a failed read as "the file ends here" without losing
//! track of how far they got.
//!
//! A single saved mark supports the one rewind the metadata format needs:
//! probing the 4-byte header marker and backing up when it is absent.
//!
//! ## Example
//!
//! ```rust
//! use bytecursor::ByteCursor;
//!
//! let buf = [0x00, 0x03, b'a', b'b', b'c'];
//! let mut cur = ByteCursor::new(&buf);
//! assert_eq!(cur.read_string().unwrap(), "abc");
//! ```

use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;

/// Errors produced by cursor reads.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// A read or skip would pass the end of the buffer.
    ///
    /// `requested` is the number of bytes the operation needed; `offset` is
    /// the cursor position it would have started from (unchanged by the
    /// failure).
    #[error("truncated data: {requested} byte read at offset {offset} passes end of buffer")]
    TruncatedData { requested: usize, offset: usize },
}

/// Sequential big-endian reader over a borrowed byte slice.
///
/// The cursor never copies the underlying buffer; string reads allocate only
/// for the decoded text. After any successful read the offset sits just past
/// the consumed bytes; after a failed read it is unchanged.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    /// At most one saved offset for [`reset`](ByteCursor::reset). A second
    /// [`mark`](ByteCursor::mark) overwrites the first.
    mark: Option<usize>,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at offset 0 with no mark.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            mark: None,
        }
    }

    /// Current read offset from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the offset and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Borrows the next `n` bytes and advances, or fails without advancing.
    fn take(&mut self, n: usize) -> Result<&'a [u8], CursorError> {
        if n > self.buf.len() - self.pos {
            return Err(CursorError::TruncatedData {
                requested: n,
                offset: self.pos,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Reads a signed 8-bit integer.
    pub fn read_i8(&mut self) -> Result<i8, CursorError> {
        Ok(self.take(1)?[0] as i8)
    }

    /// Reads a signed big-endian 16-bit integer.
    pub fn read_i16(&mut self) -> Result<i16, CursorError> {
        Ok(BigEndian::read_i16(self.take(2)?))
    }

    /// Reads a signed big-endian 32-bit integer.
    pub fn read_i32(&mut self) -> Result<i32, CursorError> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    /// Reads an unsigned big-endian 16-bit integer.
    ///
    /// String length prefixes and some record counts use the full unsigned
    /// range, so `0xFFFF` must come back as 65535, never -1.
    pub fn read_u16(&mut self) -> Result<u16, CursorError> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    /// Advances past `n` bytes without interpreting them.
    pub fn skip(&mut self, n: usize) -> Result<(), CursorError> {
        self.take(n).map(|_| ())
    }

    /// Reads a length-prefixed string: u16 BE length, then that many bytes.
    ///
    /// A zero length yields the empty string without touching the payload.
    /// If the payload read fails the cursor is left just past the prefix.
    pub fn read_string(&mut self) -> Result<String, CursorError> {
        let len = self.read_u16()? as usize;
        if len == 0 {
            return Ok(String::new());
        }
        self.read_string_exact(len)
    }

    /// Reads exactly `len` bytes and decodes them as a string.
    ///
    /// Used for the unprefixed 4-byte header marker probe.
    pub fn read_string_exact(&mut self, len: usize) -> Result<String, CursorError> {
        Ok(decode_string(self.take(len)?))
    }

    /// Saves the current offset. Overwrites any previous mark.
    pub fn mark(&mut self) {
        self.mark = Some(self.pos);
    }

    /// Returns to the marked offset and clears the mark.
    ///
    /// With no mark saved, returns to offset 0.
    pub fn reset(&mut self) {
        self.pos = self.mark.take().unwrap_or(0);
    }
}

/// Decodes raw string bytes: UTF-8 first, Latin-1 when that fails, then
/// truncated at the first embedded NUL.
fn decode_string(bytes: &[u8]) -> String {
    let mut s = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        // Not valid UTF-8: map each byte to the code point of the same value.
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    };
    if let Some(nul) = s.find('\0') {
        s.truncate(nul);
    }
    s
}
