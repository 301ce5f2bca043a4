//! Placement emitter: writes a map as an mcfunction file.
//!
//! Coordinates are relative to the executing position. Image column `x`
//! maps to `~x`, image row `y` to `~z`, and a block at absolute height `h`
//! lands on `~(h-1)`. The first line lays a reference row one block north of
//! the image so the shade of row 0 has a neighbour to compare against.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mapart_core::MapArt;

use crate::error::OutputError;
use crate::models::BlockConfig;

/// Write placement commands for `art` to `out`.
pub fn write_commands<W: Write>(
    out: &mut W,
    art: &MapArt,
    blocks: &BlockConfig,
) -> std::io::Result<usize> {
    let last_column = art.width().saturating_sub(1);
    writeln!(
        out,
        "fill ~ ~-1 ~-1 ~{last_column} ~-1 ~-1 {} replace air",
        blocks.foundation
    )?;
    let mut lines = 1;

    for placement in art.placements() {
        let (x, z, h) = (placement.x, placement.y, placement.height);
        if placement.needs_support {
            writeln!(out, "setblock ~{x} ~{} ~{z} {}", h - 2, blocks.support)?;
            lines += 1;
        }
        writeln!(out, "setblock ~{x} ~{} ~{z} {}", h - 1, placement.block_id)?;
        lines += 1;
    }

    Ok(lines)
}

/// Write the function file, replacing any previous one.
///
/// Parent directories are created, which matters for function names
/// containing `/`.
pub fn write_function_file(
    path: &Path,
    art: &MapArt,
    blocks: &BlockConfig,
) -> Result<usize, OutputError> {
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    let lines = write_commands(&mut writer, art, blocks).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), lines, "Wrote function file");
    Ok(lines)
}
