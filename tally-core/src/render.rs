//! Render formatting
//!
//! Turns sketch state into the exact string drawn on the panel this cycle.

use core::fmt::Write;

use heapless::String;
use tally_protocol::MAX_LINE_LEN;

use crate::state::{ClockState, ScoreState};

/// Capacity of a rendered frame, in bytes
pub const FRAME_CAPACITY: usize = MAX_LINE_LEN;

/// Text drawn on the panel for one cycle
pub type Frame = String<FRAME_CAPACITY>;

/// Countdown shown once the target is reached or when none was set
pub const ELAPSED: &str = "00.00";

/// Largest number of seconds the countdown displays
///
/// Keeps absurd targets within the frame capacity.
pub const MAX_COUNTDOWN_SECS: f64 = 1.0e9;

/// Format the countdown for `now_millis`
pub fn format_countdown(state: &ClockState, now_millis: u64) -> Frame {
    format_remaining(state.remaining_millis(now_millis))
}

/// Format a remaining duration in milliseconds
///
/// Zero or less gives [`ELAPSED`]; anything else gives seconds with
/// exactly two decimals, rounded to nearest.
pub fn format_remaining(remaining_millis: f64) -> Frame {
    let mut frame = Frame::new();

    if remaining_millis.is_nan() || remaining_millis <= 0.0 {
        let _ = frame.push_str(ELAPSED);
        return frame;
    }

    let secs = (remaining_millis / 1000.0).min(MAX_COUNTDOWN_SECS);
    // At most 13 bytes after clamping
    let _ = write!(frame, "{:.2}", secs);
    frame
}

/// Format the scoreboard: the stored text, unchanged
pub fn format_score(state: &ScoreState) -> Frame {
    let mut frame = Frame::new();
    // Score text capacity equals frame capacity
    let _ = frame.push_str(state.text());
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_countdown_pattern(text: &str) -> bool {
        match text.split_once('.') {
            Some((whole, frac)) => {
                !whole.is_empty()
                    && whole.bytes().all(|b| b.is_ascii_digit())
                    && frac.len() == 2
                    && frac.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    #[test]
    fn test_no_target_shows_elapsed() {
        let state = ClockState::new();
        assert_eq!(format_countdown(&state, 0).as_str(), "00.00");
        assert_eq!(format_countdown(&state, 123_456).as_str(), "00.00");
    }

    #[test]
    fn test_countdown_scenario() {
        let mut state = ClockState::new();
        state.set_target(5000.0);
        assert_eq!(format_countdown(&state, 1000).as_str(), "4.00");
        assert_eq!(format_countdown(&state, 3500).as_str(), "1.50");
        assert_eq!(format_countdown(&state, 5000).as_str(), "00.00");
        assert_eq!(format_countdown(&state, 5001).as_str(), "00.00");
    }

    #[test]
    fn test_sub_centisecond_remaining() {
        assert_eq!(format_remaining(1.0).as_str(), "0.00");
        assert_eq!(format_remaining(10.0).as_str(), "0.01");
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(format_remaining(1_236.0).as_str(), "1.24");
        assert_eq!(format_remaining(1_234.0).as_str(), "1.23");
        assert_eq!(format_remaining(59_999.0).as_str(), "60.00");
    }

    #[test]
    fn test_nan_shows_elapsed() {
        assert_eq!(format_remaining(f64::NAN).as_str(), "00.00");
    }

    #[test]
    fn test_huge_remaining_is_clamped() {
        let frame = format_remaining(1.0e300);
        assert_eq!(frame.as_str(), "1000000000.00");
    }

    #[test]
    fn test_score_is_identity() {
        let mut state = ScoreState::new();
        assert_eq!(format_score(&state).as_str(), "00000");
        state.set_text("42-17");
        assert_eq!(format_score(&state).as_str(), "42-17");
        assert_eq!(format_score(&state), format_score(&state));
    }

    proptest! {
        #[test]
        fn prop_elapsed_for_non_positive(remaining in -1.0e12f64..=0.0) {
            let frame = format_remaining(remaining);
            prop_assert_eq!(frame.as_str(), "00.00");
        }

        #[test]
        fn prop_positive_matches_pattern(remaining in 0.001f64..1.0e11) {
            let frame = format_remaining(remaining);
            prop_assert!(is_countdown_pattern(&frame), "bad frame {}", frame.as_str());
        }

        #[test]
        fn prop_positive_value_within_half_centisecond(remaining in 0.001f64..1.0e9) {
            let frame = format_remaining(remaining);
            let shown: f64 = frame.parse().unwrap();
            prop_assert!((shown - remaining / 1000.0).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn prop_target_at_or_before_now_is_elapsed(target in 0u64..1_000_000, lag in 0u64..1_000_000) {
            let mut state = ClockState::new();
            state.set_target(target as f64);
            let frame = format_countdown(&state, target + lag);
            prop_assert_eq!(frame.as_str(), "00.00");
        }
    }
}
