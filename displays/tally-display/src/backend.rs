//! Display sink trait
//!
//! Defines the interface a sketch uses to put text on the panel.

use crate::panel::Font;

/// Display sink errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel or its framebuffer
    Communication,
    /// `draw_text` called before `initialize`
    NotInitialized,
}

/// Display sink trait
///
/// Hardware-agnostic text output for single-panel LED matrices. The sink
/// owns geometry, glyph rendering and scan-out. Text that does not fit is
/// clipped at the panel edge, never reported as an error.
pub trait DisplaySink {
    /// Set brightness (0 = off, 255 = full) and font
    ///
    /// May be called before or after `initialize`.
    fn configure(&mut self, brightness: u8, font: Font) -> Result<(), DisplayError>;

    /// Bring the panel up with a blank frame
    fn initialize(&mut self) -> Result<(), DisplayError>;

    /// Replace the panel content with `text` whose top-left corner sits at
    /// pixel (`x`, `y`)
    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn configure(&mut self, brightness: u8, font: Font) -> Result<(), DisplayError> {
        (**self).configure(brightness, font)
    }

    fn initialize(&mut self) -> Result<(), DisplayError> {
        (**self).initialize()
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError> {
        (**self).draw_text(x, y, text)
    }
}
