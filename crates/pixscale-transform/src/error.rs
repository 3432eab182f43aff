//! Error types for pixscale-transform

use thiserror::Error;

/// Errors that can occur while scaling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixscale_core::Error),

    /// Doubled dimensions do not fit the grid size type
    #[error("cannot double a {width}x{height} grid: output size overflows")]
    DimensionOverflow { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
