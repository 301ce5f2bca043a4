//! Height resolution
//!
//! Turns the per-pixel elevation tags produced by matching into absolute
//! block heights, one column chain at a time.

mod error;
mod integrator;

pub use error::HeightError;
pub use integrator::{integrate, integrate_tags};
