use std::path::PathBuf;

use mapart_core::{MapArtError, PaletteError};
use thiserror::Error;

/// Top-level error of the mapart application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Palette error: {0}")]
    Load(#[from] LoadError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Map art error: {0}")]
    MapArt(#[from] MapArtError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors raised while reading a palette file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized palette format: {0}")]
    Format(String),

    #[error("Invalid color key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Entry {index} ({block_id}) is not a string block id")]
    InvalidBlockId { index: usize, block_id: String },

    #[error("{0}")]
    Palette(#[from] PaletteError),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image is empty ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("Failed to encode pack metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}
