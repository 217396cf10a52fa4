//! Countdown clock state

/// Target value meaning "nothing received yet"
///
/// Any non-negative uptime is past it, so it renders as elapsed.
pub const NO_TARGET: f64 = -1.0;

/// Countdown target in device milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    target_millis: f64,
    initialized: bool,
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockState {
    /// Create a state with no target
    pub const fn new() -> Self {
        Self {
            target_millis: NO_TARGET,
            initialized: false,
        }
    }

    /// Replace the target
    pub fn set_target(&mut self, target_millis: f64) {
        self.target_millis = target_millis;
        self.initialized = true;
    }

    /// Current target in device milliseconds
    pub fn target_millis(&self) -> f64 {
        self.target_millis
    }

    /// Whether a target has ever been received
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Milliseconds left until the target; zero or negative once reached
    pub fn remaining_millis(&self, now_millis: u64) -> f64 {
        self.target_millis - now_millis as f64
    }
}
