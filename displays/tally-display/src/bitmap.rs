//! Monochrome framebuffer for one P10 panel

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Panel width in pixels
pub const PANEL_WIDTH: usize = 32;

/// Panel height in pixels
pub const PANEL_HEIGHT: usize = 16;

/// Bytes per pixel row
pub const ROW_BYTES: usize = PANEL_WIDTH / 8;

/// Row-select phases of a 1/4-scan panel
pub const SCAN_PHASES: usize = 4;

/// Bytes shifted out per scan phase
pub const SCAN_BYTES: usize = ROW_BYTES * PANEL_HEIGHT / SCAN_PHASES;

/// 32x16 one-bit framebuffer
///
/// Each row is a `u32` with the leftmost pixel in the most significant bit,
/// which is also the order the panel shift registers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    rows: [u32; PANEL_HEIGHT],
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bitmap {
    /// Create a blank bitmap
    pub const fn new() -> Self {
        Self {
            rows: [0; PANEL_HEIGHT],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.rows = [0; PANEL_HEIGHT];
    }

    /// Set one pixel; coordinates outside the panel are ignored
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x >= PANEL_WIDTH || y >= PANEL_HEIGHT {
            return;
        }
        let mask = 1u32 << (PANEL_WIDTH - 1 - x);
        if on {
            self.rows[y] |= mask;
        } else {
            self.rows[y] &= !mask;
        }
    }

    /// Whether a pixel is lit; outside the panel is always dark
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        if x >= PANEL_WIDTH || y >= PANEL_HEIGHT {
            return false;
        }
        self.rows[y] & (1u32 << (PANEL_WIDTH - 1 - x)) != 0
    }

    /// Pixel row `y` as bytes, leftmost pixel first
    pub fn row_bytes(&self, y: usize) -> [u8; ROW_BYTES] {
        self.rows.get(y).copied().unwrap_or(0).to_be_bytes()
    }

    /// Shift-register data for one scan phase
    ///
    /// A 1/4-scan panel lights rows `phase`, `phase + 4`, `phase + 8` and
    /// `phase + 12` together. For each byte column the bottom row goes out
    /// first. Bits are inverted because the column drivers sink current: a
    /// zero lights the LED.
    pub fn scan_bytes(&self, phase: usize) -> [u8; SCAN_BYTES] {
        let mut out = [0xFF; SCAN_BYTES];
        if phase >= SCAN_PHASES {
            return out;
        }
        let mut i = 0;
        for column in 0..ROW_BYTES {
            for band in (0..PANEL_HEIGHT / SCAN_PHASES).rev() {
                let row = self.row_bytes(phase + band * SCAN_PHASES);
                out[i] = !row[column];
                i += 1;
            }
        }
        out
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }
}

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size {
        Size::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32)
    }
}

impl DrawTarget for Bitmap {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                self.set(x, y, color.is_on());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { u32::MAX } else { 0 };
        self.rows = [fill; PANEL_HEIGHT];
        Ok(())
    }
}
