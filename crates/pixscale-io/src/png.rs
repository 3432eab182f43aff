//! PNG image format support
//!
//! Every PNG color type and bit depth is decoded to 8-bit RGBA: palettes and
//! low bit depths are expanded, 16-bit samples are stripped to their high
//! byte, gray is replicated into R, G and B, and a missing alpha channel
//! becomes 255. Grids are always written as 8-bit RGBA, so writing and
//! reading back is lossless.

use crate::{IoError, IoResult};
use pixscale_core::{Grid, Rgba};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use tracing::debug;

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Grid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let color_type = output_info.color_type;
    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }
    debug!(width, height, ?color_type, "read png");

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    for row in data.chunks_exact(bytes_per_row).take(height as usize) {
        for s in row[..width as usize * samples].chunks_exact(samples) {
            let pixel = match s {
                &[g] => Rgba::rgb(g, g, g),
                &[g, a] => Rgba::new(g, g, g, a),
                &[r, g, b] => Rgba::rgb(r, g, b),
                &[r, g, b, a] => Rgba::new(r, g, b, a),
                _ => unreachable!("chunks_exact yields {} samples", samples),
            };
            pixels.push(pixel);
        }
    }

    Ok(Grid::from_pixels(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGBA
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] for empty grids, which PNG cannot
/// represent.
pub fn write_png<W: Write>(grid: &Grid, writer: W) -> IoResult<()> {
    let (width, height) = grid.dimensions();
    if grid.is_empty() {
        return Err(IoError::EncodeError(format!(
            "PNG cannot encode a {}x{} image",
            width, height
        )));
    }
    debug!(width, height, "write png");

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&grid.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
