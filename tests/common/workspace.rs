//! Scratch directory holding the inputs and output of one build.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mapart::error::AppError;
use mapart::models::AppConfig;
use mapart::services::{BuildSummary, MapArtPipeline};
use mapart_core::Rgb;
use tempfile::TempDir;

/// Temporary workspace with `image.png`, `palette.json` and an `out/` dir
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir(dir.path().join("out")).expect("Failed to create out dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn image_path(&self) -> PathBuf {
        self.path().join("image.png")
    }

    pub fn palette_path(&self) -> PathBuf {
        self.path().join("palette.json")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path().join("out")
    }

    /// Write a row-major RGB image as PNG.
    pub fn write_image(&self, pixels: &[Rgb], width: u32, height: u32) {
        let buffer = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb(pixels[(y * width + x) as usize].to_bytes())
        });
        buffer.save(self.image_path()).expect("Failed to write PNG");
    }

    pub fn write_palette(&self, json: &str) {
        std::fs::write(self.palette_path(), json).expect("Failed to write palette");
    }

    /// Run the pipeline on the workspace inputs.
    pub fn build(&self, config: AppConfig) -> Result<BuildSummary, AppError> {
        MapArtPipeline::new(Arc::new(config)).build(
            &self.image_path(),
            &self.palette_path(),
            &self.output_dir(),
        )
    }

    /// Path of a file relative to the output directory.
    pub fn output_file(&self, relative: &str) -> PathBuf {
        self.output_dir().join(relative)
    }

    pub fn read_output(&self, relative: &str) -> String {
        std::fs::read_to_string(self.output_file(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }
}
