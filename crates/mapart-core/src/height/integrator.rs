//! Column-wise integration of elevation tags.
//!
//! Row 0 is the baseline: its values are taken as absolute heights as they
//! are. Every later cell adds its tag to the cell directly above it, so each
//! column is a running sum starting from its row-0 value. A row-0 `-1`
//! therefore yields an absolute height of `-1`, and no implicit zero row is
//! assumed above the image.
//!
//! Columns never read each other. Rows are processed in order, and all
//! columns of a row are updated together from the finished previous row.

use super::error::HeightError;
use crate::palette::ElevationTag;

/// Integrate a row-major grid of raw tags into absolute heights.
///
/// Row 0 accepts any integer; rows below it must hold -1, 0 or +1. The grid
/// is validated completely before any row is integrated.
///
/// # Errors
///
/// - [`HeightError::ShapeMismatch`] if `tags.len() != width * height`
/// - [`HeightError::InvalidTag`] for a tag outside {-1, 0, +1} below row 0
/// - [`HeightError::Overflow`] if a running height leaves the `i32` range
///
/// # Example
///
/// ```
/// use mapart_core::height::integrate;
///
/// // 2 columns, 3 rows
/// let tags = [0, 2, 1, -1, 1, 0];
/// let heights = integrate(&tags, 2, 3).unwrap();
/// assert_eq!(heights, vec![0, 2, 1, 1, 2, 1]);
/// ```
pub fn integrate(tags: &[i32], width: usize, height: usize) -> Result<Vec<i32>, HeightError> {
    let expected = width.checked_mul(height);
    if expected != Some(tags.len()) {
        return Err(HeightError::ShapeMismatch {
            width,
            height,
            actual: tags.len(),
        });
    }
    if tags.is_empty() {
        return Ok(Vec::new());
    }

    if let Some((i, &value)) = tags
        .iter()
        .enumerate()
        .skip(width)
        .find(|(_, v)| !(-1..=1).contains(*v))
    {
        return Err(HeightError::InvalidTag {
            x: i % width,
            y: i / width,
            value,
        });
    }

    let mut heights = tags.to_vec();
    for y in 1..height {
        let (done, rest) = heights.split_at_mut(y * width);
        let prev = &done[(y - 1) * width..];
        let row = &mut rest[..width];
        for (x, (cell, &above)) in row.iter_mut().zip(prev).enumerate() {
            *cell = above
                .checked_add(*cell)
                .ok_or(HeightError::Overflow { x, y })?;
        }
    }

    Ok(heights)
}

/// Integrate matched elevation tags (row 0 taken as its tag's delta).
pub fn integrate_tags(
    tags: &[ElevationTag],
    width: usize,
    height: usize,
) -> Result<Vec<i32>, HeightError> {
    let raw: Vec<i32> = tags.iter().map(|t| t.delta()).collect();
    integrate(&raw, width, height)
}
