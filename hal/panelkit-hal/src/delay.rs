//! Blocking delay abstraction

/// Blocking millisecond delay
///
/// Used by init scripts between controller commands. There is no
/// cancellation; the call returns once the time has elapsed.
pub trait DelayMs {
    /// Busy-wait (or sleep) for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<D: DelayMs + ?Sized> DelayMs for &mut D {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
