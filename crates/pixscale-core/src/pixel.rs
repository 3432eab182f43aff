//! RGBA pixel value
//!
//! Four independent 8-bit channels with straight (non-premultiplied) alpha.
//! Pixels are only ever compared by exact equality; no channel arithmetic
//! happens anywhere in the scaler.
//!
//! # Packed format
//!
//! Packed pixels are `0xRRGGBBAA` (red in MSB, alpha in LSB).

/// Red channel index (byte 0)
pub const RED: usize = 0;
/// Green channel index (byte 1)
pub const GREEN: usize = 1;
/// Blue channel index (byte 2)
pub const BLUE: usize = 2;
/// Alpha channel index (byte 3)
pub const ALPHA: usize = 3;

/// Shift amounts for packed channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// A single 4-channel pixel.
///
/// # Examples
///
/// ```
/// use pixscale_core::Rgba;
///
/// let red = Rgba::rgb(255, 0, 0);
/// assert_eq!(red.to_u32(), 0xFF0000FF);
/// assert_eq!(Rgba::from_u32(0xFF0000FF), red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Fully transparent black, the zero value of a fresh grid.
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);
    /// Opaque black
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    /// Opaque white
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    /// Create a pixel from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba([r, g, b, a])
    }

    /// Create an opaque pixel (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, 255])
    }

    /// Red channel.
    #[inline]
    pub fn red(self) -> u8 {
        self.0[RED]
    }

    /// Green channel.
    #[inline]
    pub fn green(self) -> u8 {
        self.0[GREEN]
    }

    /// Blue channel.
    #[inline]
    pub fn blue(self) -> u8 {
        self.0[BLUE]
    }

    /// Alpha channel.
    #[inline]
    pub fn alpha(self) -> u8 {
        self.0[ALPHA]
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub fn channels(self) -> [u8; 4] {
        self.0
    }

    /// Pack into `0xRRGGBBAA`.
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.red() as u32) << RED_SHIFT)
            | ((self.green() as u32) << GREEN_SHIFT)
            | ((self.blue() as u32) << BLUE_SHIFT)
            | ((self.alpha() as u32) << ALPHA_SHIFT)
    }

    /// Unpack from `0xRRGGBBAA`.
    #[inline]
    pub fn from_u32(pixel: u32) -> Self {
        Rgba([
            ((pixel >> RED_SHIFT) & 0xff) as u8,
            ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            ((pixel >> BLUE_SHIFT) & 0xff) as u8,
            ((pixel >> ALPHA_SHIFT) & 0xff) as u8,
        ])
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(channels: [u8; 4]) -> Self {
        Rgba(channels)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(pixel: Rgba) -> Self {
        pixel.0
    }
}
