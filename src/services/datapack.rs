//! Datapack directory scaffolding.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::OutputError;
use crate::models::PackConfig;

#[derive(Debug, Serialize)]
struct PackMeta<'a> {
    pack: PackInfo<'a>,
}

#[derive(Debug, Serialize)]
struct PackInfo<'a> {
    pack_format: u32,
    description: &'a str,
}

/// Paths of a scaffolded datapack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datapack {
    /// Pack root (contains pack.mcmeta)
    pub root: PathBuf,
    /// Directory the function file goes into
    pub function_dir: PathBuf,
}

impl Datapack {
    /// Full path of the placement function file.
    pub fn function_path(&self, function: &str) -> PathBuf {
        self.function_dir.join(format!("{function}.mcfunction"))
    }
}

/// Create the pack layout under `output_dir`.
///
/// ```text
/// <output_dir>/<dir_name>/pack.mcmeta
/// <output_dir>/<dir_name>/data/<namespace>/function/
/// ```
///
/// An existing pack.mcmeta is left untouched.
pub fn create_datapack(output_dir: &Path, config: &PackConfig) -> Result<Datapack, OutputError> {
    if !output_dir.is_dir() {
        return Err(OutputError::MissingDirectory(output_dir.to_path_buf()));
    }

    let root = output_dir.join(&config.dir_name);
    let function_dir = root.join("data").join(&config.namespace).join("function");
    std::fs::create_dir_all(&function_dir).map_err(|source| OutputError::Io {
        path: function_dir.clone(),
        source,
    })?;

    let meta_path = root.join("pack.mcmeta");
    if meta_path.is_file() {
        tracing::info!(path = %meta_path.display(), "pack.mcmeta already exists, keeping it");
    } else {
        let meta = PackMeta {
            pack: PackInfo {
                pack_format: config.pack_format,
                description: &config.description,
            },
        };
        let json = serde_json::to_string_pretty(&meta)?;
        std::fs::write(&meta_path, json).map_err(|source| OutputError::Io {
            path: meta_path.clone(),
            source,
        })?;
        tracing::info!(path = %meta_path.display(), "Wrote pack.mcmeta");
    }

    Ok(Datapack { root, function_dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_creates_layout_and_meta() {
        let dir = tempfile::tempdir().unwrap();
        let pack = create_datapack(dir.path(), &PackConfig::default()).unwrap();

        assert_eq!(pack.root, dir.path().join("MapArtMaker"));
        assert!(pack.function_dir.ends_with("MapArtMaker/data/map_art/function"));
        assert!(pack.function_dir.is_dir());
        assert_eq!(
            pack.function_path("place"),
            pack.function_dir.join("place.mcfunction")
        );

        let meta = std::fs::read_to_string(pack.root.join("pack.mcmeta")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&meta).unwrap();
        assert_eq!(value["pack"]["pack_format"], 34);
        assert_eq!(value["pack"]["description"], "Your MapArt. Just yours.");
        assert!(meta.contains("\n  \"pack\""), "expected 2-space indent:\n{meta}");
    }

    #[test]
    fn test_existing_meta_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("MapArtMaker");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("pack.mcmeta"), "custom").unwrap();

        create_datapack(dir.path(), &PackConfig::default()).unwrap();
        assert_eq!(
            std::fs::read_to_string(root.join("pack.mcmeta")).unwrap(),
            "custom"
        );
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            create_datapack(&missing, &PackConfig::default()),
            Err(OutputError::MissingDirectory(_))
        ));
    }
}
