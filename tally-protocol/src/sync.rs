//! Clock correlation between the peer and a panel.
//!
//! The clock panel counts milliseconds from its own boot and expects
//! countdown targets in that time base. At startup it emits one
//! `EMIT TIME_SYNC <uptime>` line; the peer notes its own clock when the line
//! arrives and from then on can translate any of its deadlines into device
//! time. Serial latency (a few ms at 9600 baud) is not compensated.

use crate::messages::{DeviceMessage, PeerMessage};

/// Pairing of a device uptime with the peer time it was observed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOffset {
    device_millis: u64,
    peer_millis: u64,
}

impl TimeOffset {
    /// Pair `device_millis` (from `TIME_SYNC`) with the peer clock at receipt
    pub const fn new(device_millis: u64, peer_millis: u64) -> Self {
        Self {
            device_millis,
            peer_millis,
        }
    }

    /// Build an offset from a received device message
    pub fn from_message(message: DeviceMessage, peer_millis: u64) -> Self {
        match message {
            DeviceMessage::TimeSync { millis } => Self::new(millis, peer_millis),
        }
    }

    /// Device time corresponding to a peer time
    ///
    /// Negative when the peer time lies before the device booted.
    pub fn device_time(&self, peer_millis: u64) -> i64 {
        let elapsed = (peer_millis as i64).saturating_sub(self.peer_millis as i64);
        (self.device_millis as i64).saturating_add(elapsed)
    }

    /// Peer time corresponding to a device time
    pub fn peer_time(&self, device_millis: u64) -> i64 {
        let elapsed = (device_millis as i64).saturating_sub(self.device_millis as i64);
        (self.peer_millis as i64).saturating_add(elapsed)
    }

    /// Countdown target message for a deadline on the peer's clock
    pub fn target_for(&self, peer_deadline_millis: u64) -> PeerMessage<'static> {
        PeerMessage::Target {
            millis: self.device_time(peer_deadline_millis),
        }
    }
}
