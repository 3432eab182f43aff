//! Grid - The pixel buffer
//!
//! A `Grid` is a row-major rectangle of [`Rgba`] pixels addressed by
//! `(x, y)` with `x` the column and `y` the row.
//!
//! # Storage invariant
//!
//! The pixel vector always holds exactly `width * height` entries. Every
//! constructor checks this, so a grid whose declared size disagrees with its
//! storage cannot be built. Empty grids (0x0, 0xN, Nx0) are valid.
//!
//! # Ownership model
//!
//! `Grid` uses `Arc` for cheap cloning (shared ownership) and is safe to read
//! from many threads at once. To modify pixels, convert to [`GridMut`] via
//! [`Grid::try_into_mut`] or [`Grid::to_mut`], then convert back with
//! `Into<Grid>`.

mod access;
mod neighbor;

pub use neighbor::{Neighbor, Neighborhood};

use crate::Rgba;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal grid data
#[derive(Debug, PartialEq, Eq)]
struct GridData {
    width: u32,
    height: u32,
    /// Row-major pixels, `width * height` long
    pixels: Vec<Rgba>,
}

impl GridData {
    fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        match pixel_count(width, height) {
            Some(len) if len == pixels.len() => Ok(GridData {
                width,
                height,
                pixels,
            }),
            _ => Err(Error::InvalidGridDimensions {
                width,
                height,
                len: pixels.len(),
            }),
        }
    }

    fn filled(width: u32, height: u32, pixel: Rgba) -> Result<Self> {
        let len = pixel_count(width, height).ok_or(Error::InvalidGridDimensions {
            width,
            height,
            len: 0,
        })?;
        Ok(GridData {
            width,
            height,
            pixels: vec![pixel; len],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Number of pixels in a `width x height` grid, `None` if the storage
/// would exceed `isize::MAX` bytes.
#[inline]
fn pixel_count(width: u32, height: u32) -> Option<usize> {
    let count = (width as usize).checked_mul(height as usize)?;
    let bytes = count.checked_mul(std::mem::size_of::<Rgba>())?;
    (bytes <= isize::MAX as usize).then_some(count)
}

/// Immutable pixel grid
///
/// # Examples
///
/// ```
/// use pixscale_core::{Grid, Rgba};
///
/// let grid = Grid::filled(4, 3, Rgba::WHITE).unwrap();
/// assert_eq!(grid.dimensions(), (4, 3));
/// assert_eq!(grid.get_pixel(3, 2), Some(Rgba::WHITE));
/// assert_eq!(grid.get_pixel(4, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    inner: Arc<GridData>,
}

impl Grid {
    /// Create a grid with every pixel set to [`Rgba::TRANSPARENT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridDimensions`] if `width * height` does not
    /// fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a grid with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Result<Self> {
        Ok(Grid {
            inner: Arc::new(GridData::filled(width, height, pixel)?),
        })
    }

    /// Wrap row-major pixel storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridDimensions`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        Ok(Grid {
            inner: Arc::new(GridData::from_pixels(width, height, pixels)?),
        })
    }

    /// Build a grid from interleaved 8-bit RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridDimensions`] if `bytes.len()` is not
    /// `width * height * 4`. The reported `len` is in whole pixels.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(Error::InvalidGridDimensions {
                width,
                height,
                len: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Rgba([c[0], c[1], c[2], c[3]]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Interleaved 8-bit RGBA bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.inner.pixels.iter().flat_map(|p| p.channels()).collect()
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.pixels.len()
    }

    /// True when the grid holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.pixels.is_empty()
    }

    /// Row-major pixel storage.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.inner.pixels
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgba] {
        assert!(y < self.inner.height, "row {} out of range (height {})", y, self.inner.height);
        let start = self.inner.index(0, y);
        &self.inner.pixels[start..start + self.inner.width as usize]
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Get the number of strong references to the shared storage.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a deep copy that shares nothing with `self`.
    pub fn deep_clone(&self) -> Self {
        Grid {
            inner: Arc::new(GridData {
                width: self.inner.width,
                height: self.inner.height,
                pixels: self.inner.pixels.clone(),
            }),
        }
    }

    /// Try to get mutable access to the storage.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<GridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(GridMut { inner: data }),
            Err(arc) => Err(Grid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    pub fn to_mut(&self) -> GridMut {
        GridMut {
            inner: GridData {
                width: self.inner.width,
                height: self.inner.height,
                pixels: self.inner.pixels.clone(),
            },
        }
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for Grid {}

/// Mutable grid
///
/// Exclusive owner of its storage. Convert back to an immutable [`Grid`]
/// using `Into<Grid>`.
#[derive(Debug)]
pub struct GridMut {
    inner: GridData,
}

impl GridMut {
    /// Create a mutable grid with every pixel set to [`Rgba::TRANSPARENT`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(GridMut {
            inner: GridData::filled(width, height, Rgba::TRANSPARENT)?,
        })
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: Rgba) {
        self.inner.pixels.fill(pixel);
    }

    /// Row-major pixel storage.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.inner.pixels
    }

    /// Mutable row-major pixel storage. The length cannot change.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.inner.pixels
    }

    /// Mutable pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Rgba] {
        assert!(y < self.inner.height, "row {} out of range (height {})", y, self.inner.height);
        let start = self.inner.index(0, y);
        let end = start + self.inner.width as usize;
        &mut self.inner.pixels[start..end]
    }
}

impl From<GridMut> for Grid {
    fn from(grid: GridMut) -> Self {
        Grid {
            inner: Arc::new(grid.inner),
        }
    }
}
