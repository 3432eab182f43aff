//! Test grids built in code
//!
//! Fixtures panic on invalid input; they are only meant for tests.

use pixscale_core::{Grid, Rgba};

pub const RED: Rgba = Rgba::rgb(255, 0, 0);
pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);

/// A grid with every pixel set to `pixel`.
pub fn solid(width: u32, height: u32, pixel: Rgba) -> Grid {
    Grid::filled(width, height, pixel).expect("solid fixture")
}

/// A checkerboard of `a` and `b`, with `a` at (0, 0).
pub fn checkerboard(width: u32, height: u32, a: Rgba, b: Rgba) -> Grid {
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| if (x + y) % 2 == 0 { a } else { b }))
        .collect();
    Grid::from_pixels(width, height, pixels).expect("checkerboard fixture")
}

/// A grid from equal-length rows, top row first.
pub fn from_rows(rows: &[&[Rgba]]) -> Grid {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    assert!(
        rows.iter().all(|r| r.len() == width as usize),
        "from_rows fixture: ragged rows"
    );
    Grid::from_pixels(width, height, rows.concat()).expect("from_rows fixture")
}

/// A grid whose pixels are derived from their coordinates.
///
/// All pixels are distinct for grids up to 256x256.
pub fn gradient(width: u32, height: u32) -> Grid {
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| Rgba::new(x as u8, y as u8, (x ^ y) as u8, 255)))
        .collect();
    Grid::from_pixels(width, height, pixels).expect("gradient fixture")
}
