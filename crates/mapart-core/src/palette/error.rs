//! Error types for palette operations
//!
//! Every variant of [`PaletteError`] is a configuration error: it is raised
//! while the palette is being built, before any pixel is matched.

use std::num::ParseIntError;

use thiserror::Error;

use super::entry::ElevationTag;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No entries provided
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// A block id is missing one of the three elevation variants
    #[error("block '{block_id}' has no {missing} entry")]
    MissingElevation {
        /// The incomplete block
        block_id: String,
        /// The elevation tag with no entry
        missing: ElevationTag,
    },

    /// A block id has two entries for the same elevation tag
    #[error("block '{block_id}' has a duplicate {elevation} entry at index {index}")]
    DuplicateElevation {
        /// The offending block
        block_id: String,
        /// The repeated tag
        elevation: ElevationTag,
        /// Index of the second occurrence
        index: usize,
    },

    /// An entry's coordinate contains NaN or infinity
    #[error("entry {index} ('{block_id}') has a non-finite color coordinate")]
    NonFiniteColor {
        /// Index of the entry
        index: usize,
        /// Block id of the entry
        block_id: String,
    },

    /// An entry has an empty block id
    #[error("entry {index} has an empty block id")]
    EmptyBlockId {
        /// Index of the entry
        index: usize,
    },

    /// An integer outside {-1, 0, +1} was offered as an elevation tag
    #[error("invalid elevation tag {0} (expected -1, 0 or 1)")]
    InvalidElevation(i32),
}
