pub mod config;

pub use config::{AppConfig, BlockConfig, MatchingConfig, PackConfig};
