//! Monotonic time source

/// Millisecond counter that starts at zero on boot and never goes backwards
///
/// This is the device time base: countdown targets received over serial are
/// expressed in it, and the time-sync event reports it.
pub trait Monotonic {
    /// Milliseconds elapsed since boot
    fn now_millis(&self) -> u64;
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}
