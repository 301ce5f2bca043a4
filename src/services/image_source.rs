//! Image decoding into row-major RGB pixels.

use std::path::Path;

use mapart_core::Rgb;

use crate::error::ImageError;

/// A decoded image ready for matching.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelImage {
    /// Row-major pixels
    pub pixels: Vec<Rgb>,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl PixelImage {
    /// Flatten an RGB buffer. Alpha, if the source had any, is already gone.
    pub fn from_rgb8(image: &image::RgbImage) -> Self {
        let pixels = image.pixels().map(|p| Rgb::from_bytes(p.0)).collect();
        Self {
            pixels,
            width: image.width() as usize,
            height: image.height() as usize,
        }
    }
}

/// Decode a PNG or JPEG file. Transparency is dropped, not composited.
pub fn load_image(path: &Path) -> Result<PixelImage, ImageError> {
    let decoded = image::open(path).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(ImageError::Empty { width, height });
    }

    let image = PixelImage::from_rgb8(&decoded.to_rgb8());
    tracing::info!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "Decoded image"
    );
    Ok(image)
}
