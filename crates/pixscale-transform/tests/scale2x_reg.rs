//! Scale2x regression test
//!
//! Size law, flat regions, borders, block ownership and determinism, plus
//! the hand-worked 1x1, 2x1 and 3x3 cases.

use pixscale_core::{Grid, GridMut, Rgba};
use pixscale_test::fixtures::{self, BLUE, GREEN, RED, YELLOW};
use pixscale_test::RegParams;
use pixscale_transform::{TransformError, scale2x, scale2x_into};

/// Output block of source pixel (x, y) as [top-left, top-right, bottom-left, bottom-right]
fn block_at(out: &Grid, x: u32, y: u32) -> [Rgba; 4] {
    [
        out.get_pixel_unchecked(2 * x, 2 * y),
        out.get_pixel_unchecked(2 * x + 1, 2 * y),
        out.get_pixel_unchecked(2 * x, 2 * y + 1),
        out.get_pixel_unchecked(2 * x + 1, 2 * y + 1),
    ]
}

#[test]
fn scale2x_reg() {
    let mut rp = RegParams::new("scale2x");

    // --- Test 1: Size law ---
    for (w, h) in [(0, 0), (1, 1), (2, 1), (1, 7), (5, 3), (16, 16)] {
        let out = scale2x(&fixtures::gradient(w, h)).expect("scale2x");
        rp.compare_values((w * 2) as f64, out.width() as f64, 0.0);
        rp.compare_values((h * 2) as f64, out.height() as f64, 0.0);
    }

    // --- Test 2: Single pixel becomes a uniform 2x2 ---
    let out = scale2x(&fixtures::solid(1, 1, RED)).expect("1x1");
    rp.compare_grids(&fixtures::solid(2, 2, RED), &out);

    // --- Test 3: Two pixels in a row ---
    let out = scale2x(&fixtures::from_rows(&[&[RED, BLUE]])).expect("2x1");
    let expected = fixtures::from_rows(&[&[RED, RED, BLUE, BLUE], &[RED, RED, BLUE, BLUE]]);
    rp.compare_grids(&expected, &out);

    // --- Test 4: Center pixel with A == B and C == D ---
    let x = Rgba::rgb(10, 10, 10);
    let grid = fixtures::from_rows(&[
        &[YELLOW, RED, YELLOW],
        &[GREEN, x, RED],
        &[YELLOW, GREEN, YELLOW],
    ]);
    let out = scale2x(&grid).expect("3x3");
    let block = block_at(&out, 1, 1);
    rp.compare_values(1.0, if block == [x, RED, GREEN, x] { 1.0 } else { 0.0 }, 0.0);
    eprintln!("  center block: {:?}", block);

    // --- Test 5: Flat image stays flat ---
    let out = scale2x(&fixtures::solid(6, 4, BLUE)).expect("solid");
    rp.compare_grids(&fixtures::solid(12, 8, BLUE), &out);

    assert!(rp.cleanup());
}

#[test]
fn scale2x_border_reg() {
    let mut rp = RegParams::new("scale2x_border");

    // --- Test 1: 2x2 checker smooths into diagonals using in-bounds pairs only ---
    let a = RED;
    let b = BLUE;
    let out = scale2x(&fixtures::checkerboard(2, 2, a, b)).expect("checker");
    let expected = fixtures::from_rows(&[
        &[a, a, b, b],
        &[a, b, a, b],
        &[b, a, b, a],
        &[b, b, a, a],
    ]);
    rp.compare_grids(&expected, &out);

    // --- Test 2: One row or one column degenerates to pixel doubling ---
    // Every corner rule compares a horizontal with a vertical neighbor, and
    // one of them is always missing.
    for grid in [
        fixtures::from_rows(&[&[RED, GREEN, GREEN, RED, BLUE, BLUE]]),
        fixtures::from_rows(&[&[RED], &[GREEN], &[GREEN], &[RED]]),
        fixtures::checkerboard(5, 1, RED, GREEN),
    ] {
        let out = scale2x(&grid).expect("thin");
        let mut ok = true;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let p = grid.get_pixel_unchecked(x, y);
                ok &= block_at(&out, x, y) == [p; 4];
            }
        }
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 3: Transparent black is a real pixel, not the border ---
    let t = Rgba::TRANSPARENT;
    let grid = fixtures::from_rows(&[&[t, t], &[t, RED]]);
    let out = scale2x(&grid).expect("transparent");
    // (0, 0) has right == below == t but they equal the center, so stays t
    rp.compare_values(1.0, if block_at(&out, 0, 0) == [t; 4] { 1.0 } else { 0.0 }, 0.0);
    // (1, 1) has above == left == t and both differ from the missing ones
    rp.compare_values(
        1.0,
        if block_at(&out, 1, 1) == [t, RED, RED, RED] { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup());
}

#[test]
fn scale2x_invariants_reg() {
    let mut rp = RegParams::new("scale2x_invariants");

    // --- Test 1: Identity on a flat 3x3 patch inside a busy image ---
    let mut grid = fixtures::gradient(9, 9).to_mut();
    for y in 3..6 {
        for x in 3..6 {
            grid.set_pixel(x, y, GREEN).expect("set");
        }
    }
    let grid: Grid = grid.into();
    let out = scale2x(&grid).expect("patch");
    rp.compare_values(1.0, if block_at(&out, 4, 4) == [GREEN; 4] { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: Every output cell comes from the pixel or a neighbor ---
    let grid = fixtures::checkerboard(7, 6, RED, YELLOW);
    let mut out = GridMut::new(14, 12).expect("out");
    let marker = Rgba::new(1, 2, 3, 4);
    out.fill(marker);
    scale2x_into(&grid, &mut out).expect("scale2x_into");
    let out: Grid = out.into();
    let leftover = out.pixels().iter().filter(|&&p| p == marker).count();
    rp.compare_values(0.0, leftover as f64, 0.0);

    // --- Test 3: Each block depends only on the pixel and its 4 neighbors ---
    // A 3x3 crop around an interior pixel must give that pixel the same block.
    let mut grid = fixtures::checkerboard(6, 5, RED, BLUE).to_mut();
    grid.set_pixel(2, 2, GREEN).expect("set");
    grid.set_pixel(3, 1, GREEN).expect("set");
    let grid: Grid = grid.into();
    let whole = scale2x(&grid).expect("whole");
    let mut ok = true;
    for y in 1..4 {
        for x in 1..5 {
            let rows: Vec<Vec<Rgba>> = (y - 1..y + 2)
                .map(|yy| (x - 1..x + 2).map(|xx| grid.get_pixel_unchecked(xx, yy)).collect())
                .collect();
            let row_refs: Vec<&[Rgba]> = rows.iter().map(|r| r.as_slice()).collect();
            let crop_out = scale2x(&fixtures::from_rows(&row_refs)).expect("crop");
            ok &= block_at(&crop_out, 1, 1) == block_at(&whole, x, y);
        }
    }
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: Determinism ---
    let grid = fixtures::checkerboard(11, 13, GREEN, BLUE);
    let first = scale2x(&grid).expect("first");
    let second = scale2x(&grid).expect("second");
    rp.compare_strings(&first.to_rgba_bytes(), &second.to_rgba_bytes());

    // --- Test 5: Input is untouched ---
    let before = grid.deep_clone();
    let _ = scale2x(&grid).expect("again");
    rp.compare_grids(&before, &grid);

    // --- Test 6: Mis-sized output is rejected ---
    let mut wrong = GridMut::new(3, 3).expect("wrong");
    let rejected = matches!(
        scale2x_into(&fixtures::solid(2, 2, RED), &mut wrong),
        Err(TransformError::Core(_))
    );
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup());
}
