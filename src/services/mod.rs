pub mod datapack;
pub mod image_source;
pub mod mcfunction;
pub mod palette_loader;
pub mod pipeline;

pub use datapack::{create_datapack, Datapack};
pub use image_source::{load_image, PixelImage};
pub use mcfunction::{write_commands, write_function_file};
pub use palette_loader::{load_palette_file, parse_palette, PaletteSource};
pub use pipeline::{BuildSummary, MapArtPipeline};
