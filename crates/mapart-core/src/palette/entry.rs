//! Palette entry records.

use std::fmt;
use std::sync::Arc;

use super::error::PaletteError;
use crate::color::Oklab;

/// Whether a block sits one step lower, level with, or one step higher than
/// the block before it in the same column.
///
/// The renderer shades a block by this relation, so each block contributes
/// three reference colors to the palette, one per tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElevationTag {
    /// One step lower (darkest shade)
    Down,
    /// Same height (base shade)
    Level,
    /// One step higher (lightest shade)
    Up,
}

impl ElevationTag {
    /// All tags in palette group order.
    pub const ALL: [ElevationTag; 3] = [ElevationTag::Down, ElevationTag::Level, ElevationTag::Up];

    /// Height change relative to the previous row: -1, 0 or +1.
    #[inline]
    pub const fn delta(self) -> i32 {
        match self {
            ElevationTag::Down => -1,
            ElevationTag::Level => 0,
            ElevationTag::Up => 1,
        }
    }

    /// Tag for the given position inside a group of three (`position % 3`).
    ///
    /// This is how positional palette files encode elevation; it is resolved
    /// once when the file is loaded.
    #[inline]
    pub const fn from_group_position(position: usize) -> Self {
        match position % 3 {
            0 => ElevationTag::Down,
            1 => ElevationTag::Level,
            _ => ElevationTag::Up,
        }
    }
}

impl From<ElevationTag> for i32 {
    fn from(tag: ElevationTag) -> Self {
        tag.delta()
    }
}

impl TryFrom<i32> for ElevationTag {
    type Error = PaletteError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(ElevationTag::Down),
            0 => Ok(ElevationTag::Level),
            1 => Ok(ElevationTag::Up),
            other => Err(PaletteError::InvalidElevation(other)),
        }
    }
}

impl fmt::Display for ElevationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElevationTag::Down => "down",
            ElevationTag::Level => "level",
            ElevationTag::Up => "up",
        };
        f.write_str(name)
    }
}

/// One reference color of the palette.
///
/// Block ids are reference counted since every block appears in three entries
/// and in every placement that uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// Reference color in the working perceptual space
    pub color: Oklab,
    /// Opaque block identifier, e.g. `minecraft:white_concrete`
    pub block_id: Arc<str>,
    /// Elevation relation this shade represents
    pub elevation: ElevationTag,
}

impl PaletteEntry {
    /// Create an entry.
    ///
    /// ```
    /// use mapart_core::{ElevationTag, Oklab, PaletteEntry};
    ///
    /// let entry = PaletteEntry::new(
    ///     Oklab::new(0.9, 0.0, 0.0),
    ///     "minecraft:snow_block",
    ///     ElevationTag::Up,
    /// );
    /// assert_eq!(&*entry.block_id, "minecraft:snow_block");
    /// ```
    pub fn new(color: Oklab, block_id: impl Into<Arc<str>>, elevation: ElevationTag) -> Self {
        Self {
            color,
            block_id: block_id.into(),
            elevation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_values() {
        assert_eq!(ElevationTag::Down.delta(), -1);
        assert_eq!(ElevationTag::Level.delta(), 0);
        assert_eq!(ElevationTag::Up.delta(), 1);
        assert_eq!(i32::from(ElevationTag::Up), 1);
    }

    #[test]
    fn test_group_position_matches_delta_order() {
        // Position p in a triple maps to delta p - 1.
        for position in 0..9 {
            let tag = ElevationTag::from_group_position(position);
            assert_eq!(tag.delta(), (position % 3) as i32 - 1);
        }
    }

    #[test]
    fn test_try_from_i32() {
        assert_eq!(ElevationTag::try_from(-1), Ok(ElevationTag::Down));
        assert_eq!(ElevationTag::try_from(0), Ok(ElevationTag::Level));
        assert_eq!(ElevationTag::try_from(1), Ok(ElevationTag::Up));
        assert_eq!(
            ElevationTag::try_from(2),
            Err(PaletteError::InvalidElevation(2))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ElevationTag::Down.to_string(), "down");
        assert_eq!(ElevationTag::Level.to_string(), "level");
        assert_eq!(ElevationTag::Up.to_string(), "up");
    }
}
