//! Serial line reader
//!
//! Drains whatever the serial port has buffered, once per cycle, and hands
//! back at most one line: the newest one completed. Older lines from the
//! same cycle are stale updates and are dropped (and counted).
//!
//! Partial lines carry over between cycles. A partial line that has seen no
//! new byte for the idle timeout is treated as complete, which keeps peers
//! that never send a terminator working.

use tally_hal::SerialRx;
use tally_protocol::{Line, LineAssembler, LineError};

/// Default idle time before an unterminated line is flushed, in ms
///
/// Matches the classic one-second serial stream read timeout.
pub const DEFAULT_IDLE_FLUSH_MS: u64 = 1000;

/// Bytes requested from the port per read
pub const READ_CHUNK: usize = 32;

/// Line reader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReaderConfig {
    /// Flush a quiet partial line after this many ms; `None` waits for `\n`
    pub idle_flush_ms: Option<u64>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            idle_flush_ms: Some(DEFAULT_IDLE_FLUSH_MS),
        }
    }
}

/// Counters kept by the reader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReaderStats {
    /// Lines completed (including superseded ones)
    pub lines: u32,
    /// Lines dropped because a newer one completed in the same poll
    pub superseded: u32,
    /// Lines flushed by the idle timeout
    pub idle_flushes: u32,
    /// Lines cut to fit the buffer
    pub overflows: u32,
    /// Lines dropped for invalid UTF-8
    pub rejected: u32,
    /// Reads that returned an error
    pub read_errors: u32,
}

/// Non-blocking line reader over a [`SerialRx`]
#[derive(Debug, Clone)]
pub struct LineReader {
    assembler: LineAssembler,
    config: ReaderConfig,
    last_byte_at: Option<u64>,
    stats: ReaderStats,
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new(ReaderConfig::default())
    }
}

impl LineReader {
    /// Create a reader
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            assembler: LineAssembler::new(),
            config,
            last_byte_at: None,
            stats: ReaderStats::default(),
        }
    }

    /// Counters since creation
    pub fn stats(&self) -> ReaderStats {
        self.stats
    }

    /// Whether an unfinished line is held over
    pub fn has_pending(&self) -> bool {
        self.assembler.has_pending()
    }

    /// Drain available bytes and return the newest complete line, if any
    ///
    /// Read errors end the drain for this cycle and are otherwise treated
    /// as "no input".
    pub fn poll<R: SerialRx>(&mut self, rx: &mut R, now_millis: u64) -> Option<Line> {
        let mut latest = None;
        let mut buf = [0u8; READ_CHUNK];

        // The port only holds what is already buffered, so this ends
        loop {
            let n = match rx.read_available(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(_) => {
                    self.stats.read_errors = self.stats.read_errors.saturating_add(1);
                    break;
                }
            };
            self.last_byte_at = Some(now_millis);

            for &byte in &buf[..n] {
                let result = self.assembler.feed(byte);
                self.record(result, &mut latest);
            }
        }

        if latest.is_none() && self.is_idle(now_millis) {
            let result = self.assembler.take_pending();
            if matches!(result, Ok(Some(_))) {
                self.stats.idle_flushes = self.stats.idle_flushes.saturating_add(1);
            }
            self.record(result, &mut latest);
        }

        latest
    }

    fn is_idle(&self, now_millis: u64) -> bool {
        match (self.config.idle_flush_ms, self.last_byte_at) {
            (Some(timeout), Some(last)) => {
                self.assembler.has_pending() && now_millis.saturating_sub(last) >= timeout
            }
            _ => false,
        }
    }

    fn record(&mut self, result: Result<Option<Line>, LineError>, latest: &mut Option<Line>) {
        match result {
            Ok(Some(line)) => {
                self.stats.lines = self.stats.lines.saturating_add(1);
                if latest.is_some() {
                    self.stats.superseded = self.stats.superseded.saturating_add(1);
                }
                *latest = Some(line);
            }
            Ok(None) => {}
            Err(LineError::TooLong) => {
                self.stats.overflows = self.stats.overflows.saturating_add(1);
            }
            Err(LineError::InvalidUtf8) => {
                self.stats.rejected = self.stats.rejected.saturating_add(1);
            }
        }
    }
}
