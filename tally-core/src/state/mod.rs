//! Sketch state
//!
//! Each sketch owns exactly one of these for its whole lifetime. Both start
//! out holding a value that renders sensibly, so the panel never shows an
//! undefined frame.

mod clock;
mod score;

pub use clock::{ClockState, NO_TARGET};
pub use score::{ScoreState, MAX_SCORE_TEXT, SCORE_PLACEHOLDER};
