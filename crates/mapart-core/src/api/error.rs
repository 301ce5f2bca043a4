//! Unified error type for the mapart-core public API.

use thiserror::Error;

use crate::height::HeightError;
use crate::palette::PaletteError;

/// Unified error type for the mapart-core public API.
///
/// Wraps the per-module errors for convenient `?` propagation.
///
/// # Example
///
/// ```
/// use mapart_core::{MapArtError, MapArtMaker};
///
/// let result = MapArtMaker::from_entries(Vec::new());
/// assert!(matches!(result, Err(MapArtError::Palette(_))));
/// ```
#[derive(Debug, Error)]
pub enum MapArtError {
    /// Palette validation error (empty, incomplete groups, bad coordinates)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Pixel buffer does not match the declared image size
    #[error("image has {actual} pixels, expected {width}x{height}")]
    PixelCountMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Pixels supplied
        actual: usize,
    },

    /// Height integration failed
    #[error("height error: {0}")]
    Height(#[from] HeightError),

    /// The progress callback asked to stop
    #[error("cancelled after {processed} pixels")]
    Cancelled {
        /// Pixels matched before cancellation
        processed: usize,
    },
}
