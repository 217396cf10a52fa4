//! Display abstraction and shared rendering for Tally
//!
//! This crate provides:
//! - `DisplaySink` trait: the contract between a sketch and its panel driver
//! - `PanelConfig` and `Font`: compile-time panel setup
//! - `Bitmap`: a 32x16 monochrome framebuffer matching one P10 panel
//! - `GraphicsSink`: a `DisplaySink` that rasterises text onto any
//!   `embedded-graphics` draw target
//!
//! # Architecture
//!
//! Sketches only ever call `configure`, `initialize` and `draw_text`. How the
//! pixels reach the LEDs is the sink's business: on the RP2040 board the
//! sink renders into a `Bitmap` that a scan-out task shifts to the panel.

#![no_std]

pub mod backend;
pub mod bitmap;
pub mod graphics;
pub mod panel;

// Re-export key types
pub use backend::{DisplayError, DisplaySink};
pub use bitmap::{Bitmap, PANEL_HEIGHT, PANEL_WIDTH, SCAN_BYTES, SCAN_PHASES};
pub use graphics::GraphicsSink;
pub use panel::{Font, PanelConfig};
