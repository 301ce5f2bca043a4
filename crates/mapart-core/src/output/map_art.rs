//! MapArt struct: the resolved block and height of every pixel.
//!
//! [`MapArt`] stores one palette index and one absolute height per pixel in
//! row-major order, together with the shared [`Palette`] the indices refer
//! to. Placement records are produced on demand.

use std::sync::Arc;

use crate::palette::{ElevationTag, Palette};

/// One block to place: the unit consumed by instruction emitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    /// Block identifier
    pub block_id: &'a str,
    /// Absolute height of the block
    pub height: i32,
    /// Image column
    pub x: usize,
    /// Image row
    pub y: usize,
    /// The block must stand on a supporting block one unit below
    pub needs_support: bool,
}

/// The finished output of matching and height integration.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use mapart_core::{ElevationTag, MapArt, Oklab, Palette, PaletteEntry};
///
/// let palette = Palette::new(
///     ElevationTag::ALL
///         .iter()
///         .map(|&tag| PaletteEntry::new(Oklab::new(0.5 + tag.delta() as f64 * 0.1, 0.0, 0.0), "minecraft:stone", tag))
///         .collect(),
/// )
/// .unwrap();
///
/// let art = MapArt::new(vec![1, 2], vec![0, 1], 1, 2, Arc::new(palette));
/// let placements: Vec<_> = art.placements().collect();
/// assert_eq!(placements[1].height, 1);
/// assert_eq!(placements[1].y, 1);
/// ```
#[derive(Debug, Clone)]
pub struct MapArt {
    /// Palette entry index per pixel, row-major.
    entries: Vec<usize>,
    /// Absolute height per pixel, row-major.
    heights: Vec<i32>,
    width: usize,
    height: usize,
    palette: Arc<Palette>,
}

impl MapArt {
    /// Assemble a map from per-pixel entry indices and heights.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that both buffers hold `width * height` values.
    pub fn new(
        entries: Vec<usize>,
        heights: Vec<i32>,
        width: usize,
        height: usize,
        palette: Arc<Palette>,
    ) -> Self {
        debug_assert_eq!(entries.len(), width * height);
        debug_assert_eq!(heights.len(), width * height);
        Self {
            entries,
            heights,
            width,
            height,
            palette,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for a zero-sized image.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The palette the entry indices refer to.
    #[inline]
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Palette entry index per pixel, row-major.
    #[inline]
    pub fn entry_indices(&self) -> &[usize] {
        &self.entries
    }

    /// Absolute height per pixel, row-major.
    #[inline]
    pub fn heights(&self) -> &[i32] {
        &self.heights
    }

    /// Block id of pixel `i` (row-major).
    #[inline]
    pub fn block_id(&self, i: usize) -> &str {
        &self.palette.entry(self.entries[i]).block_id
    }

    /// Elevation tag the matcher chose for pixel `i`.
    #[inline]
    pub fn elevation(&self, i: usize) -> ElevationTag {
        self.palette.entry(self.entries[i]).elevation
    }

    /// `(block_id, absolute_height)` per pixel in row-major order.
    pub fn blocks(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        (0..self.len()).map(move |i| (self.block_id(i), self.heights[i]))
    }

    /// Placement records in row-major order.
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_>> + '_ {
        let width = self.width;
        self.blocks()
            .enumerate()
            .map(move |(i, (block_id, height))| Placement {
                block_id,
                height,
                x: i % width,
                y: i / width,
                needs_support: self.palette.needs_support(block_id),
            })
    }

    /// Lowest and highest absolute height, `None` for an empty map.
    pub fn height_range(&self) -> Option<(i32, i32)> {
        let min = self.heights.iter().copied().min()?;
        let max = self.heights.iter().copied().max()?;
        Some((min, max))
    }

    /// Number of distinct block ids used.
    pub fn distinct_blocks(&self) -> usize {
        let mut used: Vec<&str> = self.blocks().map(|(b, _)| b).collect();
        used.sort_unstable();
        used.dedup();
        used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Oklab;
    use crate::palette::PaletteEntry;

    fn two_block_palette() -> Arc<Palette> {
        let mut entries = Vec::new();
        for (block, base) in [("minecraft:stone", 0.4), ("minecraft:light_weighted_pressure_plate", 0.8)] {
            for tag in ElevationTag::ALL {
                entries.push(PaletteEntry::new(
                    Oklab::new(base + tag.delta() as f64 * 0.05, 0.0, 0.0),
                    block,
                    tag,
                ));
            }
        }
        Arc::new(
            Palette::new(entries)
                .unwrap()
                .with_supported_blocks(["minecraft:light_weighted_pressure_plate"]),
        )
    }

    #[test]
    fn test_accessors() {
        let art = MapArt::new(vec![0, 4, 2, 1], vec![-1, 0, 0, 0], 2, 2, two_block_palette());
        assert_eq!(art.width(), 2);
        assert_eq!(art.height(), 2);
        assert_eq!(art.len(), 4);
        assert_eq!(art.block_id(1), "minecraft:light_weighted_pressure_plate");
        assert_eq!(art.elevation(0), ElevationTag::Down);
        assert_eq!(art.elevation(2), ElevationTag::Up);
        assert_eq!(art.height_range(), Some((-1, 0)));
        assert_eq!(art.distinct_blocks(), 2);
    }

    #[test]
    fn test_placements_coordinates_and_support() {
        let art = MapArt::new(vec![0, 4, 1, 1, 3, 2], vec![0, 1, 2, 3, 4, 5], 3, 2, two_block_palette());
        let placements: Vec<_> = art.placements().collect();
        assert_eq!(placements.len(), 6);

        let coords: Vec<_> = placements.iter().map(|p| (p.x, p.y, p.height)).collect();
        assert_eq!(
            coords,
            vec![(0, 0, 0), (1, 0, 1), (2, 0, 2), (0, 1, 3), (1, 1, 4), (2, 1, 5)]
        );

        let supported: Vec<_> = placements.iter().map(|p| p.needs_support).collect();
        assert_eq!(supported, vec![false, true, false, false, true, false]);
    }

    #[test]
    fn test_empty_map() {
        let art = MapArt::new(Vec::new(), Vec::new(), 0, 0, two_block_palette());
        assert!(art.is_empty());
        assert_eq!(art.height_range(), None);
        assert_eq!(art.placements().count(), 0);
    }
}
