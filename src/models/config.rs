use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Application configuration loaded from an optional `mapart.yaml`
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Datapack layout
    pub pack: PackConfig,

    /// Blocks placed around the image itself
    pub blocks: BlockConfig,

    /// Matching engine settings
    pub matching: MatchingConfig,
}

/// Where and how the datapack is written
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    /// Pack directory created inside the output directory
    pub dir_name: String,

    /// Function namespace (`data/<namespace>/function`)
    pub namespace: String,

    /// Function file name without the `.mcfunction` extension
    pub function: String,

    /// `pack_format` written to pack.mcmeta
    pub pack_format: u32,

    /// Description written to pack.mcmeta
    pub description: String,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            dir_name: "MapArtMaker".to_string(),
            namespace: "map_art".to_string(),
            function: "place".to_string(),
            pack_format: 34,
            description: "Your MapArt. Just yours.".to_string(),
        }
    }
}

/// Blocks the emitter adds around matched placements
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BlockConfig {
    /// Reference row laid in front of the image
    pub foundation: String,

    /// Block placed under blocks that cannot float
    pub support: String,

    /// Block ids that need `support` beneath them
    pub needs_support: Vec<String>,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            foundation: "minecraft:bedrock".to_string(),
            support: "minecraft:stone".to_string(),
            needs_support: vec!["minecraft:light_weighted_pressure_plate".to_string()],
        }
    }
}

/// Matching engine settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Match pixels on all cores
    pub parallel: bool,

    /// Image rows matched between progress reports
    pub batch_rows: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            batch_rows: 16,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to an empty mapping.
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the values the game will later interpret as resource locations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_resource_name(&self.pack.namespace, false) {
            return Err(ConfigError::Invalid(format!(
                "namespace '{}' may only contain a-z, 0-9, '_', '-' and '.'",
                self.pack.namespace
            )));
        }
        if !is_resource_name(&self.pack.function, true) {
            return Err(ConfigError::Invalid(format!(
                "function '{}' may only contain a-z, 0-9, '_', '-', '.' and '/'",
                self.pack.function
            )));
        }
        if self.pack.dir_name.trim().is_empty() {
            return Err(ConfigError::Invalid("pack dir_name is empty".to_string()));
        }
        for (name, block) in [
            ("foundation", &self.blocks.foundation),
            ("support", &self.blocks.support),
        ] {
            if block.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} block is empty")));
            }
        }
        Ok(())
    }
}

fn is_resource_name(name: &str, allow_slash: bool) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.') || (allow_slash && c == '/')
        })
}
