//! pixscale-io - Image I/O for pixscale grids
//!
//! Decodes image files into [`Grid`]s and encodes grids back. The scaler
//! itself never touches files; this crate is the collaborator that feeds it.
//!
//! # Formats
//!
//! | Format | Feature      | Read | Write |
//! |--------|--------------|------|-------|
//! | PNG    | `png-format` | yes  | yes   |
//! | PAM    | `pam`        | yes  | yes   |
//!
//! Both are enabled by default.

mod error;
pub mod format;
#[cfg(feature = "pam")]
pub mod pam;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use pixscale_core::Grid;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;
use tracing::debug;

/// Read an image from a file, detecting its format from the header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    debug!(path = %path.display(), ?format, "read image");

    let reader = BufReader::new(File::open(path)?);
    read_image_format(reader, format)
}

/// Read an image from memory, detecting its format from the header.
pub fn read_image_mem(data: &[u8]) -> IoResult<Grid> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

#[allow(unused_variables)]
fn read_image_format<R: BufRead + Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<Grid> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pam")]
        ImageFormat::Pam => pam::read_pam(reader),
        _ => Err(IoError::UnsupportedFormat(format!(
            "cannot read {:?}",
            format
        ))),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(grid: &Grid, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?format, "write image");

    // Encode first so an unsupported format leaves no empty file behind
    let data = write_image_mem(grid, format)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Encode an image into memory in the given format.
#[allow(unused_mut)]
pub fn write_image_mem(grid: &Grid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, &mut buffer)?,
        #[cfg(feature = "pam")]
        ImageFormat::Pam => pam::write_pam(grid, &mut buffer)?,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot write {:?}",
                format
            )));
        }
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixscale_core::Rgba;

    #[test]
    fn test_mem_roundtrip_all_formats() {
        let grid = Grid::from_pixels(
            2,
            1,
            vec![Rgba::new(5, 6, 7, 8), Rgba::new(250, 0, 125, 255)],
        )
        .unwrap();
        for format in [ImageFormat::Png, ImageFormat::Pam] {
            let data = write_image_mem(&grid, format).unwrap();
            assert_eq!(detect_format_from_bytes(&data).unwrap(), format);
            assert_eq!(read_image_mem(&data).unwrap(), grid, "{:?}", format);
        }
    }

    #[test]
    fn test_unknown_format() {
        let grid = Grid::new(1, 1).unwrap();
        assert!(matches!(
            write_image_mem(&grid, ImageFormat::Unknown),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_image_mem(b"GIF89a......"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let grid = Grid::filled(3, 3, Rgba::rgb(1, 128, 255)).unwrap();
        write_image(&grid, &path, ImageFormat::Png).unwrap();
        assert_eq!(read_image(&path).unwrap(), grid);
    }

    #[test]
    fn test_write_unknown_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.dat");
        let grid = Grid::new(1, 1).unwrap();
        assert!(write_image(&grid, &path, ImageFormat::Unknown).is_err());
        assert!(!path.exists());
    }
}
