//! Parallel Scale2x
//!
//! Output storage is split into disjoint row pairs, one per source row, and
//! handed to rayon workers. Workers share only the read-only source grid, so
//! no synchronization is needed and the result is identical to
//! [`scale2x`](crate::scale2x).

use crate::scale2x::{expand_row, output_dimensions, row_pair_len};
use crate::TransformResult;
use pixscale_core::{Grid, GridMut};
use rayon::prelude::*;
use tracing::debug;

/// Upscale a grid 2x with the Scale2x rule, one source row per task.
///
/// # Errors
///
/// Same as [`scale2x`](crate::scale2x).
pub fn scale2x_par(grid: &Grid) -> TransformResult<Grid> {
    let (out_w, out_h) = output_dimensions(grid.width(), grid.height())?;
    debug!(width = grid.width(), height = grid.height(), "scale2x_par");

    let mut out = GridMut::new(out_w, out_h)?;
    let row_pair_len = row_pair_len(grid);
    if row_pair_len > 0 {
        out.pixels_mut()
            .par_chunks_exact_mut(row_pair_len)
            .enumerate()
            .for_each(|(y, rows)| expand_row(grid, y as u32, rows));
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale2x;
    use pixscale_core::Rgba;

    #[test]
    fn test_par_matches_sequential() {
        let pixels = (0..7 * 5)
            .map(|i: u32| if (i * 7 + i / 3) % 3 == 0 { Rgba::BLACK } else { Rgba::WHITE })
            .collect();
        let grid = Grid::from_pixels(7, 5, pixels).unwrap();
        assert_eq!(scale2x_par(&grid).unwrap(), scale2x(&grid).unwrap());
    }

    #[test]
    fn test_par_empty() {
        for (w, h) in [(0, 0), (0, 4), (4, 0)] {
            let grid = Grid::new(w, h).unwrap();
            let out = scale2x_par(&grid).unwrap();
            assert_eq!(out.dimensions(), (w * 2, h * 2));
        }
    }
}
