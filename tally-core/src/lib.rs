//! Board-agnostic logic for the Tally panel sketches
//!
//! This crate contains everything that does not depend on specific
//! hardware:
//!
//! - Sketch state (countdown target, scoreboard text)
//! - Permissive numeric parsing of serial input
//! - Render formatting (countdown seconds, pass-through text)
//! - Serial line reading with idle flush
//! - The one-shot time-sync emitter
//! - The cycle runner tying serial, sketch and display sink together

#![no_std]
#![deny(unsafe_code)]

pub mod parse;
pub mod reader;
pub mod render;
pub mod runner;
pub mod sketch;
pub mod state;
pub mod sync;

#[cfg(test)]
pub(crate) mod testing;

pub use reader::{LineReader, ReaderConfig, ReaderStats};
pub use render::Frame;
pub use runner::{CycleOutcome, LoopStats, RunError, Runner};
pub use sketch::{ClockSketch, ScoreSketch, Sketch};
pub use state::{ClockState, ScoreState};
pub use sync::SyncEmitter;
