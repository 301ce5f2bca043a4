//! Public API for the mapart-core crate.
//!
//! This module provides the high-level API: the [`MapArtMaker`] builder and
//! the [`MapArtError`] unified error type.

mod builder;
mod error;

pub use builder::{MapArtMaker, Progress};
pub use error::MapArtError;
