//! Sprite golden-file regression test
//!
//! Scales a small sprite once and twice and checks both results against
//! golden PAM files under `tests/golden`.
//!
//! Regenerate with:
//! ```
//! REGTEST_MODE=generate cargo test -p pixscale-transform --test sprite_reg
//! ```

use pixscale_core::{Grid, Rgba};
use pixscale_io::ImageFormat;
use pixscale_test::RegParams;
use pixscale_transform::scale2x;

const SPRITE: [&str; 8] = [
    "..####..",
    ".#oooo#.",
    "#oo##oo#",
    "#o#..#o#",
    "#o#..#o#",
    "#oo##oo#",
    ".#oooo#.",
    "..####..",
];

fn palette(c: char) -> Rgba {
    match c {
        '#' => Rgba::rgb(40, 40, 60),
        'o' => Rgba::rgb(230, 180, 40),
        _ => Rgba::TRANSPARENT,
    }
}

fn sprite() -> Grid {
    let pixels = SPRITE.iter().flat_map(|row| row.chars().map(palette)).collect();
    Grid::from_pixels(8, 8, pixels).expect("sprite")
}

#[test]
fn sprite_reg() {
    let mut rp = RegParams::new("sprite");

    let x2 = scale2x(&sprite()).expect("scale2x");
    rp.write_grid_and_check(&x2, ImageFormat::Pam)
        .expect("write x2");

    let x4 = scale2x(&x2).expect("scale2x twice");
    rp.write_grid_and_check(&x4, ImageFormat::Pam)
        .expect("write x4");

    rp.compare_values(16.0, x2.width() as f64, 0.0);
    rp.compare_values(32.0, x4.height() as f64, 0.0);
    eprintln!("  sprite: 8x8 -> {:?} -> {:?}", x2.dimensions(), x4.dimensions());

    assert!(rp.cleanup());
}
