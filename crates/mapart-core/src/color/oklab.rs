//! Oklab-style perceptual color space
//!
//! The map-art palette files store their reference colors in this space, so
//! the conversion below must reproduce the palette generator bit for bit
//! rather than the textbook Oklab transform:
//!
//! - channels are normalized but not gamma-decoded,
//! - the first matrix is applied to the pixel as a row vector,
//! - the cube root is replaced by a linear segment near zero (the CIELAB
//!   `f(t)` curve) so dark inputs do not sit on the cube root's infinite slope.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use rayon::prelude::*;

use super::rgb::Rgb;

/// Below this value the response curve switches to its linear segment.
pub const RESPONSE_THRESHOLD: f64 = 0.008856451679;

const LINEAR_SLOPE: f64 = 7.787037037;
const LINEAR_OFFSET: f64 = 0.1379310345;

/// A coordinate in the working perceptual color space.
///
/// # Components
///
/// - `l`: Lightness
/// - `a`: First chroma axis
/// - `b`: Second chroma axis
///
/// Values are not clamped or normalized in any way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklab {
    /// Lightness
    pub l: f64,
    /// First chroma axis
    pub a: f64,
    /// Second chroma axis
    pub b: f64,
}

impl Oklab {
    /// Create a coordinate from its components.
    ///
    /// ```
    /// use mapart_core::Oklab;
    ///
    /// let c = Oklab::new(0.5, 0.1, -0.1);
    /// assert_eq!(c.l, 0.5);
    /// ```
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared chroma magnitude, `a² + b²`.
    #[inline]
    pub fn chroma_squared(self) -> f64 {
        self.a * self.a + self.b * self.b
    }

    /// True when all three components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }

    /// Perceptual color difference used for palette matching.
    ///
    /// Splits the difference into a lightness term, a chroma-magnitude term
    /// `dC` and a hue term `dH`:
    ///
    /// ```text
    /// c1 = a1² + b1²,  c2 = a2² + b2²
    /// dC = -2·√c1·√c2 + c1 + c2
    /// dH = |(a1-a2)² + (b1-b2)² - dC|
    /// d  = √(dL² + dC + dH)
    /// ```
    ///
    /// `dH` is mathematically non-negative; the absolute value only absorbs
    /// rounding that would otherwise push it below zero. Palette files were
    /// tuned against exactly this formula, including its tie behavior, so it
    /// must not be swapped for another Delta E variant.
    ///
    /// ```
    /// use mapart_core::Oklab;
    ///
    /// let a = Oklab::new(0.5, 0.0, 0.0);
    /// let b = Oklab::new(0.2, 0.0, 0.0);
    /// assert!((a.delta_e(b) - 0.3).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Oklab) -> f64 {
        let dl = self.l - other.l;
        let c1 = self.chroma_squared();
        let c2 = other.chroma_squared();
        let dc = -2.0 * c1.sqrt() * c2.sqrt() + c1 + c2;
        let da = self.a - other.a;
        let db = self.b - other.b;
        let dh = (da * da + db * db - dc).abs();
        (dl * dl + dc + dh).sqrt()
    }
}

/// Piecewise response curve applied between the two linear transforms.
#[inline]
pub fn response(x: f64) -> f64 {
    if x > RESPONSE_THRESHOLD {
        x.cbrt()
    } else {
        LINEAR_SLOPE * x + LINEAR_OFFSET
    }
}

impl From<Rgb> for Oklab {
    /// Convert an 8-bit pixel into the working color space.
    ///
    /// Total over all inputs and deterministic.
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.normalized();

        // Step 1: row vector times M1
        let l = 0.4122214708 * r + 0.2119034982 * g + 0.0883024619 * b;
        let m = 0.5363325362 * r + 0.6806995451 * g + 0.2817188376 * b;
        let s = 0.0514459929 * r + 0.1073969566 * g + 0.6299787005 * b;

        // Step 2: nonlinearity
        let l_ = response(l);
        let m_ = response(m);
        let s_ = response(s);

        // Step 3: M2
        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

/// Convert a whole image's pixels, in order, using all available cores.
///
/// Produces exactly what mapping [`Oklab::from`] over the slice would.
pub fn convert_pixels(pixels: &[Rgb]) -> Vec<Oklab> {
    pixels.par_iter().map(|&px| Oklab::from(px)).collect()
}
