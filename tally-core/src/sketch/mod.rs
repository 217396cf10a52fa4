//! Sketches: the two programs a panel can run
//!
//! A sketch owns its state and knows how to turn a serial line into a state
//! change and a state into a frame. It never touches the panel or reads the
//! port itself; the [`Runner`](crate::runner::Runner) does that.

mod clock;
mod score;

pub use clock::{ClockSketch, CLOCK_BANNER};
pub use score::{ScoreSketch, SCORE_BANNER};

use tally_hal::SerialTx;

use crate::render::Frame;

/// Behaviour shared by the clock and scoreboard programs
pub trait Sketch {
    /// Human-readable line written once at startup
    const BANNER: &'static str;

    /// Startup output: the banner, plus anything sketch specific
    ///
    /// Called once, before the first cycle. Write failures are ignored.
    fn start<T: SerialTx>(&mut self, tx: &mut T, _now_millis: u64) {
        let _ = tx.write_line(Self::BANNER);
    }

    /// Apply one received line to the state
    fn apply<T: SerialTx>(&mut self, line: &str, tx: &mut T);

    /// Frame for the current state at `now_millis`
    fn render(&self, now_millis: u64) -> Frame;
}
