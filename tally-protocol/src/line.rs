//! Line framing for the serial link.
//!
//! Bytes are collected until a `\n` terminator. A `\r` directly before the
//! terminator is dropped so CRLF peers work unchanged. Blank lines carry no
//! update and are swallowed.
//!
//! A line that outgrows the buffer is cut: the assembler reports
//! [`LineError::TooLong`] once, skips bytes up to the next terminator and
//! then delivers the first [`MAX_LINE_LEN`] bytes as the line. A multi-byte
//! character split by the cut is dropped.

use heapless::{String, Vec};

/// Line terminator
pub const LINE_END: u8 = b'\n';

/// Carriage return stripped from the end of a line
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Maximum line length in bytes, terminator excluded
pub const MAX_LINE_LEN: usize = 64;

/// A complete received line
pub type Line = String<MAX_LINE_LEN>;

/// Errors that can occur while assembling lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded [`MAX_LINE_LEN`]; its prefix follows at the terminator
    TooLong,
    /// Completed line is not valid UTF-8
    InvalidUtf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssembleState {
    /// Appending bytes to the current line
    Collecting,
    /// Buffer full, skipping the rest of the line
    Truncating,
}

/// State machine turning a byte stream into lines
#[derive(Debug, Clone)]
pub struct LineAssembler {
    state: AssembleState,
    buffer: Vec<u8, MAX_LINE_LEN>,
    /// A `\r` not yet known to be part of a CRLF terminator
    pending_cr: bool,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    /// Create a new line assembler
    pub fn new() -> Self {
        Self {
            state: AssembleState::Collecting,
            buffer: Vec::new(),
            pending_cr: false,
        }
    }

    /// Reset the assembler, dropping any partial line
    pub fn reset(&mut self) {
        self.state = AssembleState::Collecting;
        self.buffer.clear();
        self.pending_cr = false;
    }

    /// Whether bytes of an unfinished line are being held
    pub fn has_pending(&self) -> bool {
        !self.buffer.is_empty() || self.pending_cr || self.state == AssembleState::Truncating
    }

    /// Feed a single byte to the assembler
    ///
    /// Returns `Ok(Some(line))` when the byte completes a non-blank line,
    /// `Ok(None)` when more bytes are needed, or `Err` when the line is
    /// oversized or undecodable.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        if byte == LINE_END {
            return self.finish();
        }
        if self.state == AssembleState::Truncating {
            return Ok(None);
        }

        // Only a `\r` directly before the terminator is dropped
        if self.pending_cr {
            self.pending_cr = false;
            self.push(CARRIAGE_RETURN)?;
        }
        if byte == CARRIAGE_RETURN {
            self.pending_cr = true;
            return Ok(None);
        }
        self.push(byte)?;
        Ok(None)
    }

    /// Complete whatever partial line is held, as if a terminator arrived
    ///
    /// Used to frame input from peers that never send a terminator: once the
    /// link has gone quiet the bytes received so far are the whole update.
    pub fn take_pending(&mut self) -> Result<Option<Line>, LineError> {
        self.finish()
    }

    fn push(&mut self, byte: u8) -> Result<(), LineError> {
        if self.buffer.push(byte).is_err() {
            self.state = AssembleState::Truncating;
            self.pending_cr = false;
            return Err(LineError::TooLong);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<Option<Line>, LineError> {
        let truncated = self.state == AssembleState::Truncating;
        let mut bytes = core::mem::take(&mut self.buffer);
        self.state = AssembleState::Collecting;
        self.pending_cr = false;

        if truncated {
            // Drop a character the cut left incomplete
            if let Err(e) = core::str::from_utf8(&bytes) {
                if e.error_len().is_none() {
                    bytes.truncate(e.valid_up_to());
                }
            }
        }
        if bytes.is_empty() {
            return Ok(None);
        }
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| LineError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn feed_all(assembler: &mut LineAssembler, bytes: &[u8]) -> Option<Line> {
        let mut last = None;
        for &byte in bytes {
            if let Ok(Some(line)) = assembler.feed(byte) {
                last = Some(line);
            }
        }
        last
    }

    #[test]
    fn test_line_completes_on_newline() {
        let mut assembler = LineAssembler::new();
        for &byte in b"5000" {
            assert_eq!(assembler.feed(byte), Ok(None));
        }
        let line = assembler.feed(b'\n').unwrap().unwrap();
        assert_eq!(line.as_str(), "5000");
        assert!(!assembler.has_pending());
    }

    #[test]
    fn test_crlf_is_stripped() {
        let mut assembler = LineAssembler::new();
        let line = feed_all(&mut assembler, b"42-17\r\n").unwrap();
        assert_eq!(line.as_str(), "42-17");
    }

    #[test]
    fn test_blank_lines_are_swallowed() {
        let mut assembler = LineAssembler::new();
        assert_eq!(assembler.feed(b'\n'), Ok(None));
        assert_eq!(assembler.feed(b'\r'), Ok(None));
        assert_eq!(assembler.feed(b'\n'), Ok(None));
        assert!(!assembler.has_pending());
    }

    #[test]
    fn test_partial_line_survives_between_feeds() {
        let mut assembler = LineAssembler::new();
        assert_eq!(feed_all(&mut assembler, b"12"), None);
        assert!(assembler.has_pending());
        let line = feed_all(&mut assembler, b"34\n").unwrap();
        assert_eq!(line.as_str(), "1234");
    }

    #[test]
    fn test_take_pending_flushes_unterminated_line() {
        let mut assembler = LineAssembler::new();
        feed_all(&mut assembler, b"00042");
        let line = assembler.take_pending().unwrap().unwrap();
        assert_eq!(line.as_str(), "00042");
        assert!(!assembler.has_pending());
        assert_eq!(assembler.take_pending(), Ok(None));
    }

    #[test]
    fn test_oversized_line_is_cut_to_capacity() {
        let mut assembler = LineAssembler::new();
        let mut result = Ok(None);
        for _ in 0..=MAX_LINE_LEN {
            result = assembler.feed(b'9');
        }
        assert_eq!(result, Err(LineError::TooLong));

        // The tail is skipped, the prefix arrives at the terminator
        let line = feed_all(&mut assembler, b"888\n").unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
        assert!(line.bytes().all(|b| b == b'9'));

        // The next line is intact
        let line = feed_all(&mut assembler, b"7\n").unwrap();
        assert_eq!(line.as_str(), "7");
    }

    #[test]
    fn test_cut_drops_split_character() {
        let mut assembler = LineAssembler::new();
        let mut bytes = [b'a'; MAX_LINE_LEN + 3];
        // Two-byte 'é' straddles the capacity boundary
        bytes[MAX_LINE_LEN - 1] = 0xC3;
        bytes[MAX_LINE_LEN] = 0xA9;
        bytes[MAX_LINE_LEN + 2] = b'\n';
        let line = feed_all(&mut assembler, &bytes).unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN - 1);
        assert!(line.bytes().all(|b| b == b'a'));
    }

    #[test]
    fn test_line_at_capacity_with_crlf_is_accepted() {
        let mut assembler = LineAssembler::new();
        let mut bytes = [b'1'; MAX_LINE_LEN + 2];
        bytes[MAX_LINE_LEN] = b'\r';
        bytes[MAX_LINE_LEN + 1] = b'\n';
        for &byte in &bytes[..MAX_LINE_LEN + 1] {
            assert_eq!(assembler.feed(byte), Ok(None));
        }
        let line = assembler.feed(b'\n').unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
        assert!(line.bytes().all(|b| b == b'1'));
    }

    #[test]
    fn test_inner_carriage_return_is_kept() {
        let mut assembler = LineAssembler::new();
        let line = feed_all(&mut assembler, b"a\rb\r\r\n").unwrap();
        assert_eq!(line.as_str(), "a\rb\r");
    }

    #[test]
    fn test_line_at_capacity_is_accepted() {
        let mut assembler = LineAssembler::new();
        let mut bytes = [b'a'; MAX_LINE_LEN + 1];
        bytes[MAX_LINE_LEN] = b'\n';
        let line = feed_all(&mut assembler, &bytes).unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_take_pending_flushes_cut_line() {
        let mut assembler = LineAssembler::new();
        for _ in 0..MAX_LINE_LEN + 5 {
            let _ = assembler.feed(b'x');
        }
        assert!(assembler.has_pending());
        let line = assembler.take_pending().unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
        assert!(!assembler.has_pending());
        let line = feed_all(&mut assembler, b"ok\n").unwrap();
        assert_eq!(line.as_str(), "ok");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let mut assembler = LineAssembler::new();
        assert_eq!(assembler.feed(0xFF), Ok(None));
        assert_eq!(assembler.feed(b'\n'), Err(LineError::InvalidUtf8));
        let line = feed_all(&mut assembler, b"1\n").unwrap();
        assert_eq!(line.as_str(), "1");
    }

    proptest! {
        #[test]
        fn prop_resyncs_after_any_garbage(garbage in proptest::collection::vec(any::<u8>(), 0..200)) {
            let mut assembler = LineAssembler::new();
            for &byte in &garbage {
                let _ = assembler.feed(byte);
            }
            let line = feed_all(&mut assembler, b"\n1500\n").unwrap();
            prop_assert_eq!(line.as_str(), "1500");
        }

        #[test]
        fn prop_lines_never_exceed_capacity(bytes in proptest::collection::vec(any::<u8>(), 0..300)) {
            let mut assembler = LineAssembler::new();
            for &byte in &bytes {
                if let Ok(Some(line)) = assembler.feed(byte) {
                    prop_assert!(line.len() <= MAX_LINE_LEN);
                    prop_assert!(!line.is_empty());
                }
            }
        }
    }
}
