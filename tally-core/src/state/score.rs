//! Scoreboard state

use heapless::String;
use tally_protocol::MAX_LINE_LEN;

/// Text shown before the first update
pub const SCORE_PLACEHOLDER: &str = "00000";

/// Longest text the scoreboard keeps, in bytes
pub const MAX_SCORE_TEXT: usize = MAX_LINE_LEN;

/// Text currently on the scoreboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreState {
    display_text: String<MAX_SCORE_TEXT>,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreState {
    /// Create a state showing the placeholder
    pub fn new() -> Self {
        let mut state = Self {
            display_text: String::new(),
        };
        state.set_text(SCORE_PLACEHOLDER);
        state
    }

    /// Replace the text wholesale
    ///
    /// Text longer than [`MAX_SCORE_TEXT`] keeps its longest prefix that
    /// ends on a character boundary; the panel clips far earlier anyway.
    pub fn set_text(&mut self, text: &str) {
        self.display_text.clear();
        let mut end = text.len().min(MAX_SCORE_TEXT);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let _ = self.display_text.push_str(&text[..end]);
    }

    /// Current text
    pub fn text(&self) -> &str {
        self.display_text.as_str()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScoreState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ScoreState[{}]", self.display_text.as_str());
    }
}
