use thiserror::Error;

/// Errors raised by height integration. All of them are detected before a
/// grid is returned; callers never see a partially integrated grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeightError {
    /// Tag count does not match the declared dimensions
    #[error("tag grid has {actual} cells, expected {width}x{height}")]
    ShapeMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Number of tags supplied
        actual: usize,
    },

    /// A tag below row 0 is not one of -1, 0, +1
    #[error("invalid elevation tag {value} at ({x}, {y})")]
    InvalidTag {
        /// Column
        x: usize,
        /// Row
        y: usize,
        /// Offending value
        value: i32,
    },

    /// Accumulated height left the `i32` range
    #[error("height overflow at ({x}, {y})")]
    Overflow {
        /// Column
        x: usize,
        /// Row
        y: usize,
    },
}
