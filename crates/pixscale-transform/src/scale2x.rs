//! Scale2x (EPX) upscaling
//!
//! Each source pixel P becomes a 2x2 block chosen by comparing P's four
//! axis-aligned neighbors:
//!
//! ```text
//!       A             1 2
//!     C P B    ->     3 4
//!       D
//! ```
//!
//! All four cells start as P, then independently:
//!
//! - `C == A && C != D && A != B` => 1 = A
//! - `A == B && A != C && B != D` => 2 = B
//! - `D == C && D != B && C != A` => 3 = C
//! - `B == D && B != A && D != C` => 4 = D
//!
//! # Borders
//!
//! Neighbors outside the grid are [`Neighbor::Absent`] and never compare
//! equal to anything, so every rule whose equality test needs a missing
//! neighbor fails and that corner keeps P. The border is not clamped or
//! wrapped.
//!
//! # Layout
//!
//! Source pixel (x, y) owns output cells (2x, 2y), (2x+1, 2y), (2x, 2y+1)
//! and (2x+1, 2y+1). Source row y therefore owns output rows 2y and 2y+1
//! outright, which is what the row-pair writers below rely on.

use crate::{TransformError, TransformResult};
use pixscale_core::{Error, Grid, GridMut, Neighbor, Neighborhood, Rgba};
use tracing::debug;

/// The 2x2 output cells of one source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<P> {
    /// Cell 1, output (2x, 2y)
    pub top_left: P,
    /// Cell 2, output (2x+1, 2y)
    pub top_right: P,
    /// Cell 3, output (2x, 2y+1)
    pub bottom_left: P,
    /// Cell 4, output (2x+1, 2y+1)
    pub bottom_right: P,
}

impl<P: Copy> Block<P> {
    /// Block with all four cells set to `pixel`.
    #[inline]
    pub fn uniform(pixel: P) -> Self {
        Block {
            top_left: pixel,
            top_right: pixel,
            bottom_left: pixel,
            bottom_right: pixel,
        }
    }
}

/// Expand one pixel into its 2x2 block.
///
/// Works on any pixel type with exact equality; the four corner rules are
/// independent and each writes only its own cell.
///
/// # Examples
///
/// ```
/// use pixscale_core::{Neighbor, Neighborhood};
/// use pixscale_transform::expand;
///
/// // A and B agree, C and D differ from them: only the top-right corner
/// // takes the diagonal.
/// let n = Neighborhood {
///     center: 'x',
///     above: Neighbor::Present('r'),
///     right: Neighbor::Present('r'),
///     left: Neighbor::Present('g'),
///     below: Neighbor::Absent,
/// };
/// let block = expand(n);
/// assert_eq!(block.top_right, 'r');
/// assert_eq!(block.top_left, 'x');
/// ```
#[inline]
pub fn expand<P: Copy + PartialEq>(n: Neighborhood<P>) -> Block<P> {
    let Neighborhood {
        center: p,
        above: a,
        right: b,
        left: c,
        below: d,
    } = n;
    let mut block = Block::uniform(p);

    if let Neighbor::Present(pa) = a && c == a && c != d && a != b {
        block.top_left = pa;
    }
    if let Neighbor::Present(pb) = b && a == b && a != c && b != d {
        block.top_right = pb;
    }
    if let Neighbor::Present(pc) = c && d == c && d != b && c != a {
        block.bottom_left = pc;
    }
    if let Neighbor::Present(pd) = d && b == d && b != a && d != c {
        block.bottom_right = pd;
    }

    block
}

/// Output dimensions for a `width x height` source.
///
/// # Errors
///
/// Returns [`TransformError::DimensionOverflow`] if either doubled dimension
/// does not fit in `u32`.
pub fn output_dimensions(width: u32, height: u32) -> TransformResult<(u32, u32)> {
    match (width.checked_mul(2), height.checked_mul(2)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(TransformError::DimensionOverflow { width, height }),
    }
}

/// Upscale a grid 2x with the Scale2x rule.
///
/// Returns a new grid of exactly twice the width and height; the input is
/// not modified. Empty grids produce empty grids of the doubled size.
///
/// # Examples
///
/// ```
/// use pixscale_core::{Grid, Rgba};
/// use pixscale_transform::scale2x;
///
/// let grid = Grid::filled(3, 2, Rgba::WHITE).unwrap();
/// let scaled = scale2x(&grid).unwrap();
/// assert_eq!(scaled.dimensions(), (6, 4));
/// ```
///
/// # Errors
///
/// Returns [`TransformError::DimensionOverflow`] if the doubled size is not
/// representable, or a core error if the output cannot be allocated.
pub fn scale2x(grid: &Grid) -> TransformResult<Grid> {
    let (out_w, out_h) = output_dimensions(grid.width(), grid.height())?;
    debug!(width = grid.width(), height = grid.height(), "scale2x");

    let mut out = GridMut::new(out_w, out_h)?;
    write_blocks(grid, out.pixels_mut());
    Ok(out.into())
}

/// Upscale a grid 2x into a caller-supplied output grid.
///
/// Every cell of `out` is overwritten.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] (wrapped in
/// [`TransformError::Core`]) if `out` is not exactly twice the size of
/// `grid`. `out` is left untouched in that case.
pub fn scale2x_into(grid: &Grid, out: &mut GridMut) -> TransformResult<()> {
    let expected = output_dimensions(grid.width(), grid.height())?;
    if out.dimensions() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: out.dimensions(),
        }
        .into());
    }
    debug!(width = grid.width(), height = grid.height(), "scale2x_into");

    write_blocks(grid, out.pixels_mut());
    Ok(())
}

/// Write all blocks into row-major output storage of the doubled size.
fn write_blocks(grid: &Grid, out: &mut [Rgba]) {
    let row_pair_len = row_pair_len(grid);
    if row_pair_len == 0 {
        return;
    }
    for (y, rows) in out.chunks_exact_mut(row_pair_len).enumerate() {
        expand_row(grid, y as u32, rows);
    }
}

/// Length of the two output rows owned by one source row.
#[inline]
pub(crate) fn row_pair_len(grid: &Grid) -> usize {
    4 * grid.width() as usize
}

/// Expand source row `y` into `rows`, its two output rows back to back.
pub(crate) fn expand_row(grid: &Grid, y: u32, rows: &mut [Rgba]) {
    let (top, bottom) = rows.split_at_mut(rows.len() / 2);
    for x in 0..grid.width() {
        let block = expand(grid.neighborhood_unchecked(x, y));
        let ox = 2 * x as usize;
        top[ox] = block.top_left;
        top[ox + 1] = block.top_right;
        bottom[ox] = block.bottom_left;
        bottom[ox + 1] = block.bottom_right;
    }
}
