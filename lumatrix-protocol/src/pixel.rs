//! RGB565 wire frame decoding
//!
//! Wire frames pack one pixel into 16 bits, big-endian:
//!
//! ```text
//! bit 15        11 10          5 4           0
//!     ┌───────────┬─────────────┬─────────────┐
//!     │ R R R R R │ G G G G G G │ B B B B B   │
//!     └───────────┴─────────────┴─────────────┘
//!      5-bit red    6-bit green   5-bit blue
//! ```
//!
//! Widening to 8 bits per channel is a plain left shift (red << 3,
//! green << 2, blue << 3). This is lossy and deliberately not a linear
//! rescale; existing senders depend on the exact bit pattern, so it must
//! not be "improved".

/// One panel pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb24 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb24 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Bytes per pixel in the wire format
pub const BYTES_PER_PIXEL: usize = 2;

/// Errors that can occur while decoding a wire frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Wire buffer length does not match the panel pixel count
    SizeMismatch { got: usize, expected: usize },
}

/// Widen one RGB565 pixel (given as its two wire bytes) to RGB24.
#[inline]
pub fn rgb565_to_rgb24(high: u8, low: u8) -> Rgb24 {
    let rgb16 = u16::from_be_bytes([high, low]);
    Rgb24 {
        r: (((rgb16 >> 11) & 0x1F) << 3) as u8,
        g: (((rgb16 >> 5) & 0x3F) << 2) as u8,
        b: ((rgb16 & 0x1F) << 3) as u8,
    }
}

/// Decode a complete wire frame into a pixel buffer.
///
/// `wire` must contain exactly `pixels.len() * 2` bytes; anything else
/// fails with [`FrameError::SizeMismatch`] before a single pixel is
/// written. Pixel order is row-major and matches the wire layout.
pub fn decode_frame(wire: &[u8], pixels: &mut [Rgb24]) -> Result<(), FrameError> {
    let expected = pixels.len() * BYTES_PER_PIXEL;
    if wire.len() != expected {
        return Err(FrameError::SizeMismatch {
            got: wire.len(),
            expected,
        });
    }

    for (pixel, pair) in pixels.iter_mut().zip(wire.chunks_exact(BYTES_PER_PIXEL)) {
        *pixel = rgb565_to_rgb24(pair[0], pair[1]);
    }

    Ok(())
}
