//! Panel configuration types

use embedded_graphics::mono_font::{ascii, MonoFont};

/// Fonts available to the sketches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 5x7 system font; five characters fit across one panel
    #[default]
    System5x7,
    /// 4x6 font for denser text
    Compact4x6,
    /// 6x10 font, uses most of the panel height
    Tall6x10,
}

impl Font {
    /// The `embedded-graphics` font backing this choice
    pub fn mono_font(self) -> &'static MonoFont<'static> {
        match self {
            Font::System5x7 => &ascii::FONT_5X7,
            Font::Compact4x6 => &ascii::FONT_4X6,
            Font::Tall6x10 => &ascii::FONT_6X10,
        }
    }
}

/// Static panel setup handed to the sink at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// LED brightness, 0-255
    pub brightness: u8,
    /// Text font
    pub font: Font,
    /// Text origin, x pixel
    pub origin_x: i32,
    /// Text origin, y pixel (top of the glyph cell)
    pub origin_y: i32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            brightness: 255,
            font: Font::System5x7,
            origin_x: 1,
            origin_y: 4,
        }
    }
}
