//! Pixel access functions
//!
//! Checked and unchecked reads and writes of individual pixels.

use super::{Grid, GridMut};
use crate::Rgba;
use crate::error::{Error, Result};

impl Grid {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.inner.width && y < self.inner.height {
            Some(self.inner.pixels[self.inner.index(x, y)])
        } else {
            None
        }
    }

    /// Get the pixel at (x, y) without a bounds check on each axis.
    ///
    /// # Panics
    ///
    /// May panic, or return a pixel from a neighboring row, if `x >= width`
    /// or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.inner.pixels[self.inner.index(x, y)]
    }
}

impl GridMut {
    /// Get the pixel at (x, y).
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.inner.width && y < self.inner.height {
            Some(self.inner.pixels[self.inner.index(x, y)])
        } else {
            None
        }
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.pixels[idx] = pixel;
        Ok(())
    }

    /// Set the pixel at (x, y) without a bounds check on each axis.
    ///
    /// # Panics
    ///
    /// May panic if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: Rgba) {
        let idx = self.inner.index(x, y);
        self.inner.pixels[idx] = pixel;
    }
}
