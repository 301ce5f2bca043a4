//! Output types of the map-art pipeline.

mod map_art;

pub use map_art::{MapArt, Placement};
