//! # Tile Rectangles and Protection Zones
//!
//! Plain integer geometry for the cleaner: axis-aligned rectangles over the
//! tile grid, stored half-open (`from` inclusive, `to` exclusive), plus the
//! zone index the sweep consults before touching a coordinate.
//!
//! ## Usage in MapReaper
//!
//! Safehouse footprints decoded from world metadata become [`Region`]s, are
//! widened by the configured padding, and are collected into a
//! [`ProtectedZones`] index. The sweep asks the index about every tile it
//! visits and leaves the protected ones alone.
//!
//! ## Example
//!
//! ```rust
//! use geometry::{ProtectedZones, Region};
//!
//! let zones = ProtectedZones::build([Region::new(100, 200, 105, 203)], 2);
//! assert!(zones.contains(99, 199));
//! assert!(!zones.contains(110, 210));
//! ```

/// An axis-aligned rectangle on the tile grid.
///
/// Both axes are half-open: a tile `(x, y)` lies inside when
/// `from_x <= x < to_x` and `from_y <= y < to_y`. A region whose `to` bound
/// does not exceed its `from` bound on some axis is empty and contains
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
}

impl Region {
    /// Creates a region from half-open bounds.
    #[must_use]
    pub fn new(from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> Self {
        Self {
            from_x,
            from_y,
            to_x,
            to_y,
        }
    }

    /// Returns `true` if the tile `(x, y)` lies inside the region.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.from_x && x < self.to_x && y >= self.from_y && y < self.to_y
    }

    /// Returns `true` if no tile lies inside the region.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_x <= self.from_x || self.to_y <= self.from_y
    }

    /// Returns a copy widened by `padding` tiles on every side.
    ///
    /// Bounds saturate at the `i32` range instead of wrapping.
    #[must_use]
    pub fn expand(&self, padding: i32) -> Self {
        Self {
            from_x: self.from_x.saturating_sub(padding),
            from_y: self.from_y.saturating_sub(padding),
            to_x: self.to_x.saturating_add(padding),
            to_y: self.to_y.saturating_add(padding),
        }
    }
}

/// A collection of padded regions the sweep must not touch.
///
/// Membership checks scan the zones linearly; save files carry at most a
/// few hundred safehouses.
#[derive(Debug, Default, Clone)]
pub struct ProtectedZones {
    zones: Vec<Region>,
}

impl ProtectedZones {
    /// Collects `regions` into an index, widening each one by `padding` tiles.
    pub fn build<I>(regions: I, padding: i32) -> Self
    where
        I: IntoIterator<Item = Region>,
    {
        let zones = regions.into_iter().map(|r| r.expand(padding)).collect();
        Self { zones }
    }

    /// Returns `true` if any zone covers the tile `(x, y)`.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.zones.iter().any(|z| z.contains(x, y))
    }

    /// Returns the number of zones in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if the index holds no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests;
