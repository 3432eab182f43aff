//! Error types for pixscale-core
//!
//! Grids validate their storage at construction time, so most callers only
//! ever see [`Error::InvalidGridDimensions`]. The remaining variants come from
//! explicit coordinate access and from caller-supplied output buffers.

use thiserror::Error;

/// pixscale core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Declared grid dimensions disagree with the pixel storage
    #[error("invalid grid dimensions: {width}x{height} with {len} pixels of storage")]
    InvalidGridDimensions { width: u32, height: u32, len: usize },

    /// Coordinate outside the grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Grid has the wrong size for the operation
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for pixscale core operations
pub type Result<T> = std::result::Result<T, Error>;
