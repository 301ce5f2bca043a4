//! Palette file loading.
//!
//! Two JSON layouts are accepted:
//!
//! - **Colour map**: an object mapping a serialized coordinate tuple
//!   `"(L, a, b)"` to a block id. Entries come in consecutive triples per
//!   block (down, level, up) and the elevation of each entry is taken from
//!   its position inside its triple.
//! - **Structured**: `{"blocks": [{"id", "down", "level", "up", "needs_support"}]}`
//!   with the three shades named explicitly.
//!
//! Both keep file order, which the matcher uses to break ties.

use std::path::Path;

use mapart_core::{ElevationTag, Oklab, Palette, PaletteEntry};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::LoadError;

/// A palette file parsed into explicit entries, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSource {
    /// Entries in file order
    pub entries: Vec<PaletteEntry>,
    /// Block ids the file itself marks as needing support
    pub needs_support: Vec<String>,
}

impl PaletteSource {
    /// Validate the entries and attach the support rule.
    ///
    /// `extra_supported` is merged with the ids the file marks itself.
    pub fn into_palette(self, extra_supported: &[String]) -> Result<Palette, LoadError> {
        let palette = Palette::new(self.entries)?
            .with_supported_blocks(self.needs_support)
            .with_supported_blocks(extra_supported.iter().cloned());
        Ok(palette)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StructuredPalette {
    blocks: Vec<BlockShades>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlockShades {
    id: String,
    down: [f64; 3],
    level: [f64; 3],
    up: [f64; 3],
    #[serde(default)]
    needs_support: bool,
}

/// Read and parse a palette file.
pub fn load_palette_file(path: &Path) -> Result<PaletteSource, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let source = parse_palette(&content)?;
    tracing::info!(
        path = %path.display(),
        entries = source.entries.len(),
        "Loaded palette file"
    );
    Ok(source)
}

/// Parse palette JSON in either supported layout.
pub fn parse_palette(content: &str) -> Result<PaletteSource, LoadError> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Object(map) if map.contains_key("blocks") => {
            let structured: StructuredPalette = serde_json::from_value(Value::Object(map))?;
            Ok(from_structured(structured))
        }
        Value::Object(map) => from_colour_map(map),
        other => Err(LoadError::Format(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn from_structured(palette: StructuredPalette) -> PaletteSource {
    let mut entries = Vec::with_capacity(palette.blocks.len() * 3);
    let mut needs_support = Vec::new();

    for block in palette.blocks {
        for (tag, [l, a, b]) in ElevationTag::ALL.into_iter().zip([block.down, block.level, block.up]) {
            entries.push(PaletteEntry::new(Oklab::new(l, a, b), block.id.as_str(), tag));
        }
        if block.needs_support {
            needs_support.push(block.id);
        }
    }

    PaletteSource {
        entries,
        needs_support,
    }
}

fn from_colour_map(map: Map<String, Value>) -> Result<PaletteSource, LoadError> {
    if map.len() % 3 != 0 {
        return Err(LoadError::Format(format!(
            "colour map has {} entries, expected a multiple of 3 (down, level, up per block)",
            map.len()
        )));
    }

    let mut entries = Vec::with_capacity(map.len());
    for (index, (key, value)) in map.into_iter().enumerate() {
        let color = parse_coordinate_key(&key)?;
        let block_id = match value {
            Value::String(s) => s,
            other => {
                return Err(LoadError::InvalidBlockId {
                    index,
                    block_id: other.to_string(),
                })
            }
        };
        entries.push(PaletteEntry::new(
            color,
            block_id,
            ElevationTag::from_group_position(index),
        ));
    }

    for (group, triple) in entries.chunks(3).enumerate() {
        if triple.iter().any(|e| e.block_id != triple[0].block_id) {
            return Err(LoadError::Format(format!(
                "entries {}..{} do not share one block id",
                group * 3,
                group * 3 + 3
            )));
        }
    }

    Ok(PaletteSource {
        entries,
        needs_support: Vec::new(),
    })
}

/// Parse a tuple key such as `"(0.63, -0.02, 0.11)"`.
pub fn parse_coordinate_key(key: &str) -> Result<Oklab, LoadError> {
    let invalid = |reason: &str| LoadError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let inner = key
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| invalid("expected a parenthesized tuple"))?;

    let components = inner
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(&e.to_string()))?;

    match components.as_slice() {
        &[l, a, b] => Ok(Oklab::new(l, a, b)),
        other => Err(invalid(&format!(
            "expected 3 components, found {}",
            other.len()
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapart_core::PaletteError;
    use pretty_assertions::assert_eq;

    const COLOUR_MAP: &str = r#"{
        "(0.30, 0.0, 0.0)": "minecraft:stone",
        "(0.40, 0.0, 0.0)": "minecraft:stone",
        "(0.50, 0.0, 0.0)": "minecraft:stone",
        "(0.80, 0.01, -0.02)": "minecraft:light_weighted_pressure_plate",
        "(0.85, 0.01, -0.02)": "minecraft:light_weighted_pressure_plate",
        "(0.90, 0.01, -0.02)": "minecraft:light_weighted_pressure_plate"
    }"#;

    #[test]
    fn test_parse_coordinate_key() {
        assert_eq!(
            parse_coordinate_key("(0.5, -0.25, 1e-3)").unwrap(),
            Oklab::new(0.5, -0.25, 0.001)
        );
        assert_eq!(
            parse_coordinate_key(" (1,0,0) ").unwrap(),
            Oklab::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_parse_coordinate_key_errors() {
        for key in ["0.5, 0.1, 0.2", "(0.5, 0.1)", "(0.5, x, 0.2)", "(0.5, 0.1, 0.2, 0.3)"] {
            assert!(
                matches!(parse_coordinate_key(key), Err(LoadError::InvalidKey { .. })),
                "{key} should be rejected"
            );
        }
    }

    #[test]
    fn test_colour_map_keeps_order_and_assigns_tags() {
        let source = parse_palette(COLOUR_MAP).unwrap();
        let summary: Vec<_> = source
            .entries
            .iter()
            .map(|e| (e.block_id.to_string(), e.elevation, e.color.l))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("minecraft:stone".to_string(), ElevationTag::Down, 0.30),
                ("minecraft:stone".to_string(), ElevationTag::Level, 0.40),
                ("minecraft:stone".to_string(), ElevationTag::Up, 0.50),
                ("minecraft:light_weighted_pressure_plate".to_string(), ElevationTag::Down, 0.80),
                ("minecraft:light_weighted_pressure_plate".to_string(), ElevationTag::Level, 0.85),
                ("minecraft:light_weighted_pressure_plate".to_string(), ElevationTag::Up, 0.90),
            ]
        );
        assert!(source.needs_support.is_empty());
    }

    #[test]
    fn test_colour_map_support_comes_from_caller() {
        let palette = parse_palette(COLOUR_MAP)
            .unwrap()
            .into_palette(&["minecraft:light_weighted_pressure_plate".to_string()])
            .unwrap();
        assert_eq!(palette.block_count(), 2);
        assert!(palette.needs_support("minecraft:light_weighted_pressure_plate"));
        assert!(!palette.needs_support("minecraft:stone"));
    }

    #[test]
    fn test_colour_map_incomplete_group() {
        let json = r#"{
            "(0.3, 0.0, 0.0)": "minecraft:stone",
            "(0.4, 0.0, 0.0)": "minecraft:stone"
        }"#;
        assert!(matches!(parse_palette(json), Err(LoadError::Format(_))));
    }

    #[test]
    fn test_colour_map_mixed_triple() {
        let json = r#"{
            "(0.3, 0.0, 0.0)": "minecraft:stone",
            "(0.4, 0.0, 0.0)": "minecraft:dirt",
            "(0.5, 0.0, 0.0)": "minecraft:stone"
        }"#;
        assert!(matches!(parse_palette(json), Err(LoadError::Format(_))));
    }

    #[test]
    fn test_colour_map_non_string_value() {
        let json = r#"{
            "(0.3, 0.0, 0.0)": "minecraft:stone",
            "(0.4, 0.0, 0.0)": 7,
            "(0.5, 0.0, 0.0)": "minecraft:stone"
        }"#;
        assert!(matches!(
            parse_palette(json),
            Err(LoadError::InvalidBlockId { index: 1, .. })
        ));
    }

    #[test]
    fn test_structured_palette() {
        let json = r#"{
            "blocks": [
                {"id": "minecraft:stone", "down": [0.3, 0, 0], "level": [0.4, 0, 0], "up": [0.5, 0, 0]},
                {"id": "minecraft:light_weighted_pressure_plate",
                 "down": [0.8, 0, 0], "level": [0.85, 0, 0], "up": [0.9, 0, 0],
                 "needs_support": true}
            ]
        }"#;
        let source = parse_palette(json).unwrap();
        assert_eq!(source.entries.len(), 6);
        assert_eq!(source.entries[4].elevation, ElevationTag::Level);
        assert_eq!(
            source.needs_support,
            vec!["minecraft:light_weighted_pressure_plate".to_string()]
        );

        let palette = source.into_palette(&[]).unwrap();
        assert!(palette.needs_support("minecraft:light_weighted_pressure_plate"));
    }

    #[test]
    fn test_structured_palette_unknown_field() {
        let json = r#"{"blocks": [{"id": "a", "down": [0,0,0], "level": [0,0,0], "up": [0,0,0], "shade": 1}]}"#;
        assert!(matches!(parse_palette(json), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_empty_palette_is_config_error() {
        let source = parse_palette("{}").unwrap();
        assert!(matches!(
            source.into_palette(&[]),
            Err(LoadError::Palette(PaletteError::EmptyPalette))
        ));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(parse_palette("[1, 2, 3]"), Err(LoadError::Format(_))));
        assert!(matches!(parse_palette("not json"), Err(LoadError::Json(_))));
    }
}
