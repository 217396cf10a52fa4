//! Signal names carried by `EMIT` lines

/// Signals understood on the peer's serial bus
///
/// The panels only produce [`Signal::TimeSync`]. The remaining names come
/// from the game controller that shares the peer and are listed so a peer
/// built on this crate can route every line it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// Device uptime reference for clock-offset calculation
    TimeSync,
    /// Score update (one or two integer scores)
    Score,
    /// Round started (round length in ms)
    GameActive,
    /// Round finished
    GameInactive,
    /// A target was hit (target index)
    TargetHit,
    /// Game mode switch (0 = showdown, 1 = versus)
    GameMode,
}

// Wire names
const NAME_TIME_SYNC: &str = "TIME_SYNC";
const NAME_SCORE: &str = "SCORE";
const NAME_GAME_ACTIVE: &str = "GAME_ACTIVE";
const NAME_GAME_INACTIVE: &str = "GAME_INACTIVE";
const NAME_TARGET_HIT: &str = "TARGET_HIT";
const NAME_GAME_MODE: &str = "GAME_MODE";

impl Signal {
    /// Look up a signal by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            NAME_TIME_SYNC => Some(Signal::TimeSync),
            NAME_SCORE => Some(Signal::Score),
            NAME_GAME_ACTIVE => Some(Signal::GameActive),
            NAME_GAME_INACTIVE => Some(Signal::GameInactive),
            NAME_TARGET_HIT => Some(Signal::TargetHit),
            NAME_GAME_MODE => Some(Signal::GameMode),
            _ => None,
        }
    }

    /// Wire name of this signal
    pub fn name(self) -> &'static str {
        match self {
            Signal::TimeSync => NAME_TIME_SYNC,
            Signal::Score => NAME_SCORE,
            Signal::GameActive => NAME_GAME_ACTIVE,
            Signal::GameInactive => NAME_GAME_INACTIVE,
            Signal::TargetHit => NAME_TARGET_HIT,
            Signal::GameMode => NAME_GAME_MODE,
        }
    }
}
