//! Palette types and utilities
//!
//! A palette is the fixed set of (color, block, elevation) triples pixels are
//! matched against. Each block contributes one entry per [`ElevationTag`].

mod entry;
mod error;
mod palette;

pub use entry::{ElevationTag, PaletteEntry};
pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PixelMatch};
