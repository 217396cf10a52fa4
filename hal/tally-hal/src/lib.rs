//! Tally Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the panel sketches are
//! written against. Chip-specific crates implement them, which keeps the
//! sketch logic host-testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Sketches (tally-core, tally-firmware)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tally-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  tally-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::SerialRx`], [`uart::SerialTx`] - Non-blocking serial line
//! - [`clock::Monotonic`] - Millisecond uptime counter

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use clock::Monotonic;
pub use uart::{SerialConfig, SerialRx, SerialTx};
