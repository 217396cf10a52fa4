//! One-shot time-sync emitter
//!
//! At startup the clock tells its peer what its uptime counter reads, as
//! `EMIT TIME_SYNC <millis>`. The peer pairs that with its own clock to
//! translate deadlines into device time. The line is sent once, without
//! retries or acknowledgement.

use tally_hal::SerialTx;
use tally_protocol::DeviceMessage;

/// Room for `EMIT TIME_SYNC ` plus a full `u64`
const SYNC_LINE_LEN: usize = 40;

/// Sends the time-sync line at most once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SyncEmitter {
    emitted: bool,
}

impl SyncEmitter {
    /// Create an emitter that has not fired yet
    pub const fn new() -> Self {
        Self { emitted: false }
    }

    /// Whether the sync line has already gone out
    pub fn has_emitted(&self) -> bool {
        self.emitted
    }

    /// Send `EMIT TIME_SYNC <now_millis>` unless already sent
    ///
    /// Returns `true` on the call that fired. A failed write still counts as
    /// fired.
    pub fn emit<T: SerialTx>(&mut self, tx: &mut T, now_millis: u64) -> bool {
        if self.emitted {
            return false;
        }
        self.emitted = true;

        let message = DeviceMessage::TimeSync { millis: now_millis };
        if let Ok(line) = message.to_line::<SYNC_LINE_LEN>() {
            let _ = tx.write_line(&line);
            let _ = tx.flush();
        }
        true
    }
}
