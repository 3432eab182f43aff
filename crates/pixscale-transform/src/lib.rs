//! pixscale-transform - Scale2x pixel-art upscaling
//!
//! This crate provides the 2x EPX / Scale2x transform:
//!
//! - [`scale2x`] - Upscale into a new grid
//! - [`scale2x_into`] - Upscale into a caller-supplied grid
//! - [`scale2x_par`] - Row-parallel upscale (feature `rayon`)
//! - [`expand`] - The per-pixel rule on its own, for any pixel type
//!
//! The transform is pure: the same input always produces the same output.

mod error;
#[cfg(feature = "rayon")]
pub mod par;
pub mod scale2x;

pub use error::{TransformError, TransformResult};
#[cfg(feature = "rayon")]
pub use par::scale2x_par;
pub use scale2x::{Block, expand, output_dimensions, scale2x, scale2x_into};
