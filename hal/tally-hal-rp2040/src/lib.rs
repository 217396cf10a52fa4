//! RP2040 bindings for the Tally panel firmware
//!
//! This crate provides RP2040 implementations of the `tally-hal` traits and
//! the board side of the display:
//!
//! - `SerialPort`: `SerialRx`/`SerialTx` over the embassy buffered UART
//! - `EmbassyClock`: `Monotonic` on the embassy time driver
//! - `hub12`: framebuffer hand-off and scan-out for a P10 panel

#![no_std]

pub mod clock;
pub mod hub12;
pub mod uart;

pub use clock::EmbassyClock;
pub use hub12::{Hub12Pins, Hub12Scanner, PanelSink, SharedFrame};
pub use uart::{uart_config, SerialPort};
