//! Palette struct with validated block groups and nearest-entry matching.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::entry::{ElevationTag, PaletteEntry};
use super::error::PaletteError;
use crate::color::Oklab;

/// Result of matching one pixel against the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMatch<'p> {
    /// Index of the winning entry in enumeration order
    pub index: usize,
    /// Block id of the winning entry
    pub block_id: &'p str,
    /// Elevation tag of the winning entry
    pub elevation: ElevationTag,
    /// Distance from the query to the winning entry
    pub distance: f64,
}

/// An immutable, validated set of reference colors.
///
/// Entries keep the enumeration order they were given in; that order decides
/// ties during matching, so loaders must preserve the file order.
///
/// Construction checks that every block id appears exactly once per
/// [`ElevationTag`]. Once built, a palette is never mutated and can be shared
/// across threads behind an `Arc`.
///
/// # Example
///
/// ```
/// use mapart_core::{ElevationTag, Oklab, Palette, PaletteEntry};
///
/// let entries = ElevationTag::ALL
///     .iter()
///     .enumerate()
///     .map(|(i, &tag)| PaletteEntry::new(Oklab::new(0.3 * i as f64, 0.0, 0.0), "minecraft:stone", tag))
///     .collect();
/// let palette = Palette::new(entries).unwrap();
///
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.block_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    // Distinct block ids in first-appearance order
    blocks: Vec<Arc<str>>,
    // Blocks the renderer only accepts on top of a supporting block
    needs_support: HashSet<String>,
}

impl Palette {
    /// Build a palette from entries in enumeration order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] when `entries` is empty
    /// - [`PaletteError::EmptyBlockId`] for an entry with an empty id
    /// - [`PaletteError::NonFiniteColor`] for NaN or infinite coordinates
    /// - [`PaletteError::DuplicateElevation`] when a block repeats a tag
    /// - [`PaletteError::MissingElevation`] when a block lacks a tag
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut blocks: Vec<Arc<str>> = Vec::new();
        let mut groups: HashMap<&str, [bool; 3]> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if entry.block_id.is_empty() {
                return Err(PaletteError::EmptyBlockId { index });
            }
            if !entry.color.is_finite() {
                return Err(PaletteError::NonFiniteColor {
                    index,
                    block_id: entry.block_id.to_string(),
                });
            }

            let seen = groups.entry(&*entry.block_id).or_insert_with(|| {
                blocks.push(Arc::clone(&entry.block_id));
                [false; 3]
            });
            let slot = (entry.elevation.delta() + 1) as usize;
            if seen[slot] {
                return Err(PaletteError::DuplicateElevation {
                    block_id: entry.block_id.to_string(),
                    elevation: entry.elevation,
                    index,
                });
            }
            seen[slot] = true;
        }

        for block in &blocks {
            let seen = groups[&**block];
            if let Some(missing) = ElevationTag::ALL
                .iter()
                .zip(seen)
                .find_map(|(&tag, present)| (!present).then_some(tag))
            {
                return Err(PaletteError::MissingElevation {
                    block_id: block.to_string(),
                    missing,
                });
            }
        }

        Ok(Self {
            entries,
            blocks,
            needs_support: HashSet::new(),
        })
    }

    /// Mark block ids that need a supporting block placed beneath them.
    ///
    /// Ids are matched by value; ids not present in the palette are kept too,
    /// so one list can serve several palette files.
    pub fn with_supported_blocks<I, S>(mut self, block_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.needs_support
            .extend(block_ids.into_iter().map(Into::into));
        self
    }

    /// Returns true if `block_id` must be placed on a supporting block.
    #[inline]
    pub fn needs_support(&self, block_id: &str) -> bool {
        self.needs_support.contains(block_id)
    }

    /// Number of entries (three per block).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed palette.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct block ids.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Distinct block ids in first-appearance order.
    pub fn block_ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| &**b)
    }

    /// All entries in enumeration order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry at `idx`.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// Find the entry nearest to `color` under [`Oklab::delta_e`].
    ///
    /// Returns `(index, distance)`. Linear scan over every entry; on equal
    /// distances the entry seen first wins, which keeps output reproducible
    /// for a given palette file.
    ///
    /// ```
    /// use mapart_core::{ElevationTag, Oklab, Palette, PaletteEntry};
    ///
    /// let palette = Palette::new(vec![
    ///     PaletteEntry::new(Oklab::new(0.2, 0.0, 0.0), "minecraft:stone", ElevationTag::Down),
    ///     PaletteEntry::new(Oklab::new(0.5, 0.0, 0.0), "minecraft:stone", ElevationTag::Level),
    ///     PaletteEntry::new(Oklab::new(0.8, 0.0, 0.0), "minecraft:stone", ElevationTag::Up),
    /// ])
    /// .unwrap();
    ///
    /// let (idx, _) = palette.find_nearest(Oklab::new(0.75, 0.0, 0.0));
    /// assert_eq!(idx, 2);
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Oklab) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;

        for (i, entry) in self.entries.iter().enumerate() {
            let dist = color.delta_e(entry.color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Match `color` and return the winning block id and elevation tag.
    #[inline]
    pub fn match_color(&self, color: Oklab) -> PixelMatch<'_> {
        let (index, distance) = self.find_nearest(color);
        let entry = &self.entries[index];
        PixelMatch {
            index,
            block_id: &entry.block_id,
            elevation: entry.elevation,
            distance,
        }
    }
}
