use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mapart_core::{MapArt, MapArtMaker, Palette, Progress};

use crate::error::AppError;
use crate::models::AppConfig;
use crate::services::{datapack, image_source, mcfunction, palette_loader};

/// What a finished build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub width: usize,
    pub height: usize,
    pub distinct_blocks: usize,
    /// Lowest and highest absolute block height
    pub height_range: (i32, i32),
    pub commands: usize,
    /// The written function file
    pub function_path: PathBuf,
}

/// Orchestrates palette → image → matching → datapack output
pub struct MapArtPipeline {
    config: Arc<AppConfig>,
}

impl MapArtPipeline {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load a palette file and apply the configured support rule.
    pub fn load_palette(&self, path: &Path) -> Result<Palette, AppError> {
        let palette = palette_loader::load_palette_file(path)?
            .into_palette(&self.config.blocks.needs_support)?;
        tracing::info!(
            entries = palette.len(),
            blocks = palette.block_count(),
            "Palette ready"
        );
        Ok(palette)
    }

    /// Create a matcher for `palette` using the configured matching settings.
    pub fn maker(&self, palette: Palette) -> MapArtMaker {
        MapArtMaker::new(Arc::new(palette))
            .parallel(self.config.matching.parallel)
            .batch_rows(self.config.matching.batch_rows)
    }

    /// Decode `image`, match it against `palette` and build the map.
    pub fn make_map(&self, image: &Path, palette: Palette) -> Result<MapArt, AppError> {
        let image = image_source::load_image(image)?;
        let maker = self.maker(palette);

        let mut reporter = ProgressLogger::default();
        let art = maker.make_with_progress(&image.pixels, image.width, image.height, |p| {
            reporter.report(p);
            ControlFlow::Continue(())
        })?;
        Ok(art)
    }

    /// Run the full build and write the datapack into `output_dir`.
    pub fn build(
        &self,
        image: &Path,
        palette: &Path,
        output_dir: &Path,
    ) -> Result<BuildSummary, AppError> {
        // Fail on a bad output directory before doing any matching work
        if !output_dir.is_dir() {
            return Err(crate::error::OutputError::MissingDirectory(output_dir.to_path_buf()).into());
        }

        let palette = self.load_palette(palette)?;
        let art = self.make_map(image, palette)?;

        let pack = datapack::create_datapack(output_dir, &self.config.pack)?;
        let function_path = pack.function_path(&self.config.pack.function);
        let commands = mcfunction::write_function_file(&function_path, &art, &self.config.blocks)?;

        let summary = BuildSummary {
            width: art.width(),
            height: art.height(),
            distinct_blocks: art.distinct_blocks(),
            height_range: art.height_range().unwrap_or((0, 0)),
            commands,
            function_path,
        };
        tracing::info!(
            width = summary.width,
            height = summary.height,
            blocks = summary.distinct_blocks,
            "Build complete"
        );
        Ok(summary)
    }
}

/// Logs matching progress once per 10 % step.
#[derive(Debug, Default)]
struct ProgressLogger {
    last_step: Option<u32>,
}

impl ProgressLogger {
    fn report(&mut self, progress: Progress) {
        let step = (progress.fraction() * 10.0).floor() as u32;
        if self.last_step.is_some_and(|last| step <= last) {
            return;
        }
        self.last_step = Some(step);
        tracing::info!(
            done = progress.done,
            total = progress.total,
            "Matching {}%",
            step * 10
        );
    }
}
