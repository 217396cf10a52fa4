//! Text rendering onto `embedded-graphics` targets

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{DisplayError, DisplaySink};
use crate::panel::Font;

/// `DisplaySink` that draws into a monochrome `DrawTarget`
///
/// Every `draw_text` clears the target first, so a shorter string never
/// leaves stale glyphs behind. Brightness is only recorded here; the
/// scan-out that owns the target applies it.
pub struct GraphicsSink<D> {
    target: D,
    font: Font,
    brightness: u8,
    initialized: bool,
}

impl<D> GraphicsSink<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap a draw target
    pub fn new(target: D) -> Self {
        Self {
            target,
            font: Font::default(),
            brightness: u8::MAX,
            initialized: false,
        }
    }

    /// The wrapped target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Current brightness
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Current font
    pub fn font(&self) -> Font {
        self.font
    }

    /// Release the wrapped target
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DisplaySink for GraphicsSink<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn configure(&mut self, brightness: u8, font: Font) -> Result<(), DisplayError> {
        self.brightness = brightness;
        self.font = font;
        Ok(())
    }

    fn initialize(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)?;
        self.initialized = true;
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)?;

        let style = MonoTextStyle::new(self.font.mono_font(), BinaryColor::On);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)?;

        Ok(())
    }
}
