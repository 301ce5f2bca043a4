//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit pixels as decoded from the source image.
//! - [`Oklab`]: the perceptual space palette entries live in, with the
//!   [`Oklab::delta_e`] metric used for matching.
//!
//! # Example
//!
//! ```
//! use mapart_core::{Oklab, Rgb};
//!
//! let px = Rgb::new(128, 64, 32);
//! let coord = Oklab::from(px);
//! assert!(coord.delta_e(coord) < 1e-6);
//! ```

mod oklab;
mod rgb;

pub use oklab::{convert_pixels, response, Oklab, RESPONSE_THRESHOLD};
pub use rgb::Rgb;
