//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use pixscale_core::Grid;
use pixscale_io::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unrecognised is `Compare`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode, and every
/// failure seen so far. Checks never panic; call [`RegParams::cleanup`] at
/// the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "scale2x")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    golden_dir: PathBuf,
    regout_dir: PathBuf,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from `REGTEST_MODE`; golden and output files go to the
    /// workspace `tests/golden` and `tests/regout` directories.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create regression test parameters with an explicit mode
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            golden_dir: PathBuf::from(golden_dir()),
            regout_dir: PathBuf::from(regout_dir()),
            success: true,
            failures: Vec::new(),
        }
    }

    /// Redirect golden and output files
    pub fn with_dirs(mut self, golden: impl Into<PathBuf>, regout: impl Into<PathBuf>) -> Self {
        self.golden_dir = golden.into();
        self.regout_dir = regout.into();
        self
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two grids for exact equality
    ///
    /// On mismatch the failure names either the differing dimensions or the
    /// first differing pixel in row-major order.
    pub fn compare_grids(&mut self, expected: &Grid, actual: &Grid) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                TestError::GridMismatch { index: self.index },
                expected.dimensions(),
                actual.dimensions()
            );
            self.fail(msg);
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let p1 = expected.get_pixel_unchecked(x, y);
                let p2 = actual.get_pixel_unchecked(x, y);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: {} - pixel mismatch at ({}, {}): {:08x} vs {:08x}",
                        self.test_name,
                        TestError::GridMismatch { index: self.index },
                        x,
                        y,
                        p1.to_u32(),
                        p2.to_u32()
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two byte strings for exact equality
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    fn ensure_dirs(&self) -> TestResult<()> {
        for dir in [&self.golden_dir, &self.regout_dir] {
            fs::create_dir_all(dir).map_err(|e| TestError::DirectoryCreate {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    fn local_path(&self, ext: &str) -> PathBuf {
        self.regout_dir
            .join(format!("{}.{:02}.{}", self.test_name, self.index, ext))
    }

    /// Write a grid to file and check it against the golden file
    pub fn write_grid_and_check(&mut self, grid: &Grid, format: ImageFormat) -> TestResult<()> {
        self.ensure_dirs()?;
        self.index += 1;

        let local_path = self.local_path(format.extension());
        pixscale_io::write_image(grid, &local_path, format).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        self.check_file(&local_path)
    }

    /// Write data to file and check it against the golden file
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        self.ensure_dirs()?;
        self.index += 1;

        let local_path = self.local_path(ext);
        fs::write(&local_path, data)?;
        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with the golden file.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &Path) -> TestResult<()> {
        let ext = local_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = self.golden_dir.join(format!(
            "{}_golden.{:02}.{}",
            self.test_name, self.index, ext
        ));

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path.display());
            }
            RegTestMode::Compare => {
                if !golden_path.exists() {
                    let msg = format!(
                        "Failure in {}_reg: {}",
                        self.test_name,
                        TestError::GoldenNotFound {
                            path: golden_path.display().to_string()
                        }
                    );
                    self.fail(msg);
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                // Encoders may differ byte-wise; fall back to decoded pixels
                if local_data != golden_data && !same_image(local_path, &golden_path) {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name,
                        self.index,
                        local_path.display(),
                        golden_path.display()
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Decode two image files and compare their pixels
fn same_image(path1: &Path, path2: &Path) -> bool {
    match (
        pixscale_io::read_image(path1),
        pixscale_io::read_image(path2),
    ) {
        (Ok(g1), Ok(g2)) => g1 == g2,
        _ => false,
    }
}
