//! Countdown clock sketch

use core::fmt::Write;

use heapless::String;
use tally_hal::SerialTx;

use super::Sketch;
use crate::parse::parse_decimal;
use crate::render::{format_countdown, Frame};
use crate::state::ClockState;
use crate::sync::SyncEmitter;

/// Startup banner of the clock
pub const CLOCK_BANNER: &str = "hello";

/// Counts down to a target received over serial
#[derive(Debug, Clone, Default)]
pub struct ClockSketch {
    state: ClockState,
    sync: SyncEmitter,
}

impl ClockSketch {
    /// Create a clock with no target
    pub const fn new() -> Self {
        Self {
            state: ClockState::new(),
            sync: SyncEmitter::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    /// Whether the time-sync line has been sent
    pub fn has_synced(&self) -> bool {
        self.sync.has_emitted()
    }
}

impl Sketch for ClockSketch {
    const BANNER: &'static str = CLOCK_BANNER;

    fn start<T: SerialTx>(&mut self, tx: &mut T, now_millis: u64) {
        let _ = tx.write_line(Self::BANNER);
        self.sync.emit(tx, now_millis);
    }

    /// Every line is accepted; see [`parse_decimal`]. The parsed target is
    /// echoed back with two decimals.
    fn apply<T: SerialTx>(&mut self, line: &str, tx: &mut T) {
        let target = parse_decimal(line);
        self.state.set_target(target);

        let mut echo: String<48> = String::new();
        if write!(echo, "{:.2}", target).is_ok() {
            let _ = tx.write_line(&echo);
        }
    }

    fn render(&self, now_millis: u64) -> Frame {
        format_countdown(&self.state, now_millis)
    }
}
