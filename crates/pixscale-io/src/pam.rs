//! Netpbm PAM (`P7`) format support
//!
//! Only `MAXVAL 255` is supported. Depth selects the layout:
//!
//! | DEPTH | TUPLTYPE          | Pixel          |
//! |-------|-------------------|----------------|
//! | 1     | `GRAYSCALE`       | (g, g, g, 255) |
//! | 2     | `GRAYSCALE_ALPHA` | (g, g, g, a)   |
//! | 3     | `RGB`             | (r, g, b, 255) |
//! | 4     | `RGB_ALPHA`       | (r, g, b, a)   |
//!
//! Grids are written as `RGB_ALPHA`. Unlike PNG, PAM allows zero width or
//! height, so empty grids round-trip.

use crate::{IoError, IoResult};
use pixscale_core::{Grid, Rgba};
use std::io::{BufRead, Read, Write};
use tracing::debug;

/// Longest header line accepted, newline included.
const MAX_HEADER_LINE: u64 = 256;

#[derive(Debug, Default)]
struct Header {
    width: Option<u32>,
    height: Option<u32>,
    depth: Option<usize>,
    maxval: Option<u32>,
}

fn parse_field<T: std::str::FromStr>(key: &str, value: Option<&str>) -> IoResult<T> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| IoError::InvalidData(format!("PAM header: bad {} value", key)))
}

/// Read one header line into `line`, returning the bytes read.
fn read_header_line<R: BufRead>(reader: &mut R, line: &mut String) -> IoResult<usize> {
    line.clear();
    let n = reader.by_ref().take(MAX_HEADER_LINE).read_line(line)?;
    if n as u64 == MAX_HEADER_LINE && !line.ends_with('\n') {
        return Err(IoError::InvalidData(format!(
            "PAM header line longer than {} bytes",
            MAX_HEADER_LINE
        )));
    }
    Ok(n)
}

fn read_header<R: BufRead>(reader: &mut R) -> IoResult<Header> {
    let mut line = String::new();
    read_header_line(reader, &mut line)?;
    if line.trim_end() != "P7" {
        return Err(IoError::InvalidData("missing PAM magic P7".to_string()));
    }

    let mut header = Header::default();
    loop {
        if read_header_line(reader, &mut line)? == 0 {
            return Err(IoError::InvalidData("PAM header without ENDHDR".to_string()));
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        match tokens.next() {
            Some("ENDHDR") => break,
            Some("WIDTH") => header.width = Some(parse_field("WIDTH", tokens.next())?),
            Some("HEIGHT") => header.height = Some(parse_field("HEIGHT", tokens.next())?),
            Some("DEPTH") => header.depth = Some(parse_field("DEPTH", tokens.next())?),
            Some("MAXVAL") => header.maxval = Some(parse_field("MAXVAL", tokens.next())?),
            // Layout follows DEPTH
            Some("TUPLTYPE") => {}
            Some(other) => {
                return Err(IoError::InvalidData(format!(
                    "unknown PAM header field: {}",
                    other
                )));
            }
            None => {}
        }
    }
    Ok(header)
}

/// Read a PAM image
pub fn read_pam<R: BufRead>(mut reader: R) -> IoResult<Grid> {
    let header = read_header(&mut reader)?;
    let (Some(width), Some(height), Some(depth)) = (header.width, header.height, header.depth)
    else {
        return Err(IoError::InvalidData(
            "PAM header missing WIDTH, HEIGHT or DEPTH".to_string(),
        ));
    };
    match header.maxval {
        Some(255) => {}
        Some(other) => {
            return Err(IoError::UnsupportedFormat(format!(
                "PAM MAXVAL {} (only 255 is supported)",
                other
            )));
        }
        None => return Err(IoError::InvalidData("PAM header missing MAXVAL".to_string())),
    }
    if !(1..=4).contains(&depth) {
        return Err(IoError::UnsupportedFormat(format!("PAM DEPTH {}", depth)));
    }
    debug!(width, height, depth, "read pam");

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(depth))
        .ok_or_else(|| IoError::InvalidData(format!("PAM size {}x{} overflows", width, height)))?;
    // Sized by what the stream holds, not by the header
    let mut data = Vec::new();
    reader.take(len as u64).read_to_end(&mut data)?;
    if data.len() != len {
        return Err(IoError::InvalidData(format!(
            "PAM data truncated: expected {} bytes, got {}",
            len,
            data.len()
        )));
    }

    let pixels = data
        .chunks_exact(depth)
        .map(|s| match *s {
            [g] => Rgba::rgb(g, g, g),
            [g, a] => Rgba::new(g, g, g, a),
            [r, g, b] => Rgba::rgb(r, g, b),
            [r, g, b, a] => Rgba::new(r, g, b, a),
            _ => unreachable!("depth checked above"),
        })
        .collect();

    Ok(Grid::from_pixels(width, height, pixels)?)
}

/// Write a PAM image as `RGB_ALPHA`
pub fn write_pam<W: Write>(grid: &Grid, mut writer: W) -> IoResult<()> {
    let (width, height) = grid.dimensions();
    debug!(width, height, "write pam");

    write!(
        writer,
        "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        width, height
    )?;
    writer.write_all(&grid.to_rgba_bytes())?;
    writer.flush()?;
    Ok(())
}
