//! pixscale core - Pixel and grid types
//!
//! This crate provides the data structures the scaler works on:
//!
//! - [`Rgba`] - A 4-channel 8-bit pixel, compared by exact equality
//! - [`Grid`] / [`GridMut`] - Row-major pixel buffers (immutable / mutable)
//! - [`Neighbor`] / [`Neighborhood`] - Border-aware neighbor sampling
//!
//! Grids never perform I/O; decoding and encoding live in `pixscale-io`.

pub mod error;
pub mod grid;
pub mod pixel;

pub use error::{Error, Result};
pub use grid::{Grid, GridMut, Neighbor, Neighborhood};
pub use pixel::Rgba;
