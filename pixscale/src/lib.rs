//! pixscale - Scale2x pixel-art upscaling for Rust
//!
//! Doubles the width and height of a raster image. Each source pixel becomes
//! a 2x2 block whose corners are chosen by comparing the pixel with its four
//! direct neighbors (the EPX / Scale2x rule), so diagonal edges come out
//! smooth instead of stair-stepped while flat areas stay flat.
//!
//! # Overview
//!
//! - [`Grid`] / [`GridMut`]: RGBA pixel buffers
//! - [`transform`]: the scaler ([`transform::scale2x`] and friends)
//! - [`io`]: PNG and PAM decode/encode
//!
//! # Example
//!
//! ```
//! use pixscale::{Grid, Rgba};
//! use pixscale::transform::scale2x;
//!
//! let red = Rgba::rgb(255, 0, 0);
//! let blue = Rgba::rgb(0, 0, 255);
//! let grid = Grid::from_pixels(2, 1, vec![red, blue]).unwrap();
//!
//! let out = scale2x(&grid).unwrap();
//! assert_eq!(out.dimensions(), (4, 2));
//! assert_eq!(out.row(0), &[red, red, blue, blue]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixscale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixscale_io as io;
pub use pixscale_transform as transform;
