//! Compile-time configuration
//!
//! Everything a board build can tune lives here. Pin assignment is fixed by
//! the wiring and documented in [`crate::board`].

use embassy_time::Duration;
use tally_display::{Font, PanelConfig};
use tally_hal::SerialConfig;

/// Serial link to the peer
pub const BAUD_RATE: u32 = 9600;

/// UART ring buffer sizes
pub const UART_TX_BUF: usize = 256;
pub const UART_RX_BUF: usize = 256;

/// Panel brightness, 0-255
pub const BRIGHTNESS: u8 = 255;

/// Panel font
pub const FONT: Font = Font::System5x7;

/// Top-left corner of the text
pub const TEXT_ORIGIN: (i32, i32) = (1, 4);

/// SPI clock for the column shift registers
pub const PANEL_SPI_HZ: u32 = 4_000_000;

/// Unterminated input is taken as complete after this much silence
pub const IDLE_FLUSH_MS: u64 = 1000;

/// Wait between attempts to bring up a panel that failed to start
pub const START_RETRY: Duration = Duration::from_millis(500);

/// How often the sketch loop logs its counters
pub const STATS_INTERVAL: Duration = Duration::from_secs(10);

/// Serial settings
pub fn serial_config() -> SerialConfig {
    SerialConfig {
        baudrate: BAUD_RATE,
        ..SerialConfig::default()
    }
}

/// Panel settings
pub fn panel_config() -> PanelConfig {
    PanelConfig {
        brightness: BRIGHTNESS,
        font: FONT,
        origin_x: TEXT_ORIGIN.0,
        origin_y: TEXT_ORIGIN.1,
    }
}
