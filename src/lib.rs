//! mapart - Minecraft map art generator
//!
//! Turns an image into a datapack function that builds it as a staircased
//! map art. Colour matching and height integration live in `mapart-core`;
//! this library adds file formats, configuration and output, and is exposed
//! for integration testing.

pub mod error;
pub mod models;
pub mod services;
