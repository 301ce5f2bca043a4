//! Test fixtures and constants.

use mapart_core::{Oklab, Rgb};

/// Block ids used by the fixtures
pub mod blocks {
    pub const WOOL: &str = "minecraft:white_wool";

    /// Needs support under the default configuration
    pub const PLATE: &str = "minecraft:light_weighted_pressure_plate";
}

/// Shades of each fixture block as (down, level, up)
pub mod shades {
    use mapart_core::Rgb;

    pub const WOOL: [Rgb; 3] = [
        Rgb::new(180, 180, 180),
        Rgb::new(220, 220, 220),
        Rgb::new(255, 255, 255),
    ];

    pub const PLATE: [Rgb; 3] = [
        Rgb::new(120, 100, 20),
        Rgb::new(160, 140, 40),
        Rgb::new(200, 180, 60),
    ];
}

/// Serialize a colour as a colour-map key `"(L, a, b)"`.
pub fn coordinate_key(color: Rgb) -> String {
    let lab = Oklab::from(color);
    format!("({}, {}, {})", lab.l, lab.a, lab.b)
}

/// Colour-map palette JSON with the shades of each block in order.
pub fn colour_map_json(blocks: &[(&str, [Rgb; 3])]) -> String {
    let mut map = serde_json::Map::new();
    for (block, triple) in blocks {
        for color in triple {
            map.insert(coordinate_key(*color), serde_json::Value::from(*block));
        }
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(map)).unwrap()
}

/// Structured palette JSON; the last tuple field marks `needs_support`.
pub fn structured_json(blocks: &[(&str, [Rgb; 3], bool)]) -> String {
    let blocks: Vec<_> = blocks
        .iter()
        .map(|(id, triple, needs_support)| {
            let [down, level, up] = triple.map(|c| {
                let lab = Oklab::from(c);
                [lab.l, lab.a, lab.b]
            });
            serde_json::json!({
                "id": id,
                "down": down,
                "level": level,
                "up": up,
                "needs_support": needs_support,
            })
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "blocks": blocks })).unwrap()
}

/// The default two-block palette used by most tests.
pub fn default_palette_json() -> String {
    colour_map_json(&[(blocks::WOOL, shades::WOOL), (blocks::PLATE, shades::PLATE)])
}

/// 2x2 image whose pixels hit fixture shades exactly:
///
/// ```text
/// wool/up     plate/level
/// wool/level  wool/up
/// ```
pub fn small_image() -> (Vec<Rgb>, u32, u32) {
    (
        vec![shades::WOOL[2], shades::PLATE[1], shades::WOOL[1], shades::WOOL[2]],
        2,
        2,
    )
}
