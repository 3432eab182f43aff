//! pixscale-test - Regression test framework for pixscale
//!
//! Every crate's `tests/*_reg.rs` drives a [`RegParams`] through a series of
//! numbered checks and asserts on [`RegParams::cleanup`]. Three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run checks without golden comparison
//!
//! # Usage
//!
//! ```ignore
//! use pixscale_test::{RegParams, fixtures};
//! use pixscale_transform::scale2x;
//!
//! let mut rp = RegParams::new("scale2x");
//! let grid = fixtures::solid(4, 4, fixtures::RED);
//! let scaled = scale2x(&grid).unwrap();
//! rp.compare_values(8.0, scaled.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixscale-test is at crates/pixscale-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
