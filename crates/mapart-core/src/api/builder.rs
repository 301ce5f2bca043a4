//! MapArtMaker builder -- the primary entry point for the crate.
//!
//! [`MapArtMaker`] wraps conversion, matching and height integration behind a
//! small fluent configuration.

use std::ops::ControlFlow;
use std::sync::Arc;

use rayon::prelude::*;

use super::error::MapArtError;
use crate::color::{convert_pixels, Oklab, Rgb};
use crate::height::integrate;
use crate::output::MapArt;
use crate::palette::{Palette, PaletteEntry, PixelMatch};

/// Default number of image rows matched between progress reports.
const DEFAULT_BATCH_ROWS: usize = 16;

/// Matching progress, reported after every batch of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Pixels matched so far
    pub done: usize,
    /// Pixels in the image
    pub total: usize,
}

impl Progress {
    /// Completed fraction in `0.0..=1.0` (1.0 for an empty image).
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.done as f64 / self.total as f64
        }
    }
}

/// High-level map-art builder.
///
/// - Constructor takes the palette as a shared handle; the palette is only
///   ever read, so matching threads need no synchronization.
/// - Configuration methods consume and return `self`.
/// - [`make()`](Self::make) takes `&self`, so one maker serves many images.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use mapart_core::{ElevationTag, MapArtMaker, Oklab, Palette, PaletteEntry, Rgb};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new(Oklab::new(0.2, 0.0, 0.0), "minecraft:stone", ElevationTag::Down),
///     PaletteEntry::new(Oklab::new(0.5, 0.0, 0.0), "minecraft:stone", ElevationTag::Level),
///     PaletteEntry::new(Oklab::new(0.8, 0.0, 0.0), "minecraft:stone", ElevationTag::Up),
/// ])
/// .unwrap();
///
/// let maker = MapArtMaker::new(Arc::new(palette));
/// let pixels = vec![Rgb::new(255, 255, 255); 4];
/// let art = maker.make(&pixels, 2, 2).unwrap();
///
/// assert_eq!(art.width(), 2);
/// assert!(art.blocks().all(|(block, _)| block == "minecraft:stone"));
/// ```
#[derive(Debug, Clone)]
pub struct MapArtMaker {
    palette: Arc<Palette>,
    parallel: bool,
    batch_rows: usize,
}

impl MapArtMaker {
    /// Create a maker for the given palette.
    ///
    /// Matching runs on the rayon thread pool by default.
    pub fn new(palette: Arc<Palette>) -> Self {
        Self {
            palette,
            parallel: true,
            batch_rows: DEFAULT_BATCH_ROWS,
        }
    }

    /// Validate `entries` into a palette and create a maker for it.
    ///
    /// # Errors
    ///
    /// Returns [`MapArtError::Palette`] for any palette validation failure,
    /// including an empty entry list.
    pub fn from_entries(entries: Vec<PaletteEntry>) -> Result<Self, MapArtError> {
        Ok(Self::new(Arc::new(Palette::new(entries)?)))
    }

    /// Match pixels on the rayon thread pool (`true`) or on the calling
    /// thread (`false`). Both produce identical output.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Rows matched between progress reports. Clamped to at least one.
    #[inline]
    pub fn batch_rows(mut self, rows: usize) -> Self {
        self.batch_rows = rows.max(1);
        self
    }

    /// The palette this maker matches against.
    #[inline]
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Match a single pixel.
    #[inline]
    pub fn match_pixel(&self, pixel: Rgb) -> PixelMatch<'_> {
        self.palette.match_color(Oklab::from(pixel))
    }

    /// Build the map for a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`MapArtError::PixelCountMismatch`] if `pixels.len() != width * height`
    /// - [`MapArtError::Height`] if height integration fails
    pub fn make(&self, pixels: &[Rgb], width: usize, height: usize) -> Result<MapArt, MapArtError> {
        self.make_with_progress(pixels, width, height, |_| ControlFlow::Continue(()))
    }

    /// Build the map, calling `progress` after every batch of rows.
    ///
    /// Returning [`ControlFlow::Break`] from the callback stops matching
    /// before the next batch and yields [`MapArtError::Cancelled`]; nothing
    /// partial is returned.
    pub fn make_with_progress<F>(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
        mut progress: F,
    ) -> Result<MapArt, MapArtError>
    where
        F: FnMut(Progress) -> ControlFlow<()>,
    {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(MapArtError::PixelCountMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }

        let total = pixels.len();
        let mut entries: Vec<usize> = Vec::with_capacity(total);

        if total > 0 {
            let batch = width.saturating_mul(self.batch_rows);
            for chunk in pixels.chunks(batch) {
                self.match_batch(chunk, &mut entries);
                let report = Progress {
                    done: entries.len(),
                    total,
                };
                if progress(report).is_break() {
                    return Err(MapArtError::Cancelled {
                        processed: entries.len(),
                    });
                }
            }
        }

        let tags: Vec<i32> = entries
            .iter()
            .map(|&i| self.palette.entry(i).elevation.delta())
            .collect();
        let heights = integrate(&tags, width, height)?;

        Ok(MapArt::new(
            entries,
            heights,
            width,
            height,
            Arc::clone(&self.palette),
        ))
    }

    fn match_batch(&self, chunk: &[Rgb], out: &mut Vec<usize>) {
        let palette = &*self.palette;
        if self.parallel {
            let coords = convert_pixels(chunk);
            let matched: Vec<usize> = coords
                .par_iter()
                .map(|&c| palette.find_nearest(c).0)
                .collect();
            out.extend(matched);
        } else {
            out.extend(
                chunk
                    .iter()
                    .map(|&px| palette.find_nearest(Oklab::from(px)).0),
            );
        }
    }
}
