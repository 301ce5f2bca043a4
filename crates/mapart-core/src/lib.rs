#![allow(clippy::excessive_precision, clippy::module_inception)]

//! mapart-core: block matching and height resolution for map art
//!
//! Converts image pixels into blocks whose top faces, seen from above on a
//! map, reproduce the image. Each block renders in three shades depending on
//! whether it sits lower than, level with, or higher than the block before it
//! in its column, so matching picks a block *and* an elevation step, and a
//! second pass turns those steps into absolute heights.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use mapart_core::{ElevationTag, MapArtMaker, Oklab, Palette, PaletteEntry, Rgb};
//!
//! let entries = vec![
//!     PaletteEntry::new(Oklab::from(Rgb::new(90, 90, 90)), "minecraft:stone", ElevationTag::Down),
//!     PaletteEntry::new(Oklab::from(Rgb::new(110, 110, 110)), "minecraft:stone", ElevationTag::Level),
//!     PaletteEntry::new(Oklab::from(Rgb::new(128, 128, 128)), "minecraft:stone", ElevationTag::Up),
//! ];
//! let palette = Arc::new(Palette::new(entries).unwrap());
//!
//! let maker = MapArtMaker::new(palette);
//! let pixels = vec![Rgb::new(128, 128, 128); 6];
//! let art = maker.make(&pixels, 3, 2).unwrap();
//!
//! assert_eq!(art.heights(), &[1, 1, 1, 2, 2, 2]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Rgb pixels
//!     |
//!     v
//! Oklab             (color::Oklab::from, batched in parallel)
//!     |
//!     v
//! find_nearest      (linear scan with Oklab::delta_e, first entry wins ties)
//!     |
//!     v
//! (block, tag)      per pixel
//!     |
//!     v
//! integrate         (row 0 literal, then running sum down each column)
//!     |
//!     v
//! MapArt            (block + absolute height per pixel, placement records)
//! ```

pub mod api;
pub mod color;
pub mod height;
pub mod output;
pub mod palette;


pub use api::{MapArtError, MapArtMaker, Progress};
pub use color::{Oklab, Rgb};
pub use height::HeightError;
pub use output::{MapArt, Placement};
pub use palette::{ElevationTag, Palette, PaletteEntry, PaletteError, ParseColorError, PixelMatch};
