//! Monotonic clock on the embassy time driver

use embassy_time::Instant;
use tally_hal::Monotonic;

/// Milliseconds since boot
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Monotonic for EmbassyClock {
    fn now_millis(&self) -> u64 {
        Instant::now().as_millis()
    }
}
