//! Scoreboard sketch

use tally_hal::SerialTx;

use super::Sketch;
use crate::render::{format_score, Frame};
use crate::state::ScoreState;

/// Startup banner of the scoreboard
pub const SCORE_BANNER: &str = "SCORE BOARD ACTIVE";

/// Shows whatever text was last received
#[derive(Debug, Clone, Default)]
pub struct ScoreSketch {
    state: ScoreState,
}

impl ScoreSketch {
    /// Create a scoreboard showing the placeholder
    pub fn new() -> Self {
        Self {
            state: ScoreState::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> &ScoreState {
        &self.state
    }
}

impl Sketch for ScoreSketch {
    const BANNER: &'static str = SCORE_BANNER;

    fn apply<T: SerialTx>(&mut self, line: &str, _tx: &mut T) {
        self.state.set_text(line);
    }

    fn render(&self, _now_millis: u64) -> Frame {
        format_score(&self.state)
    }
}
