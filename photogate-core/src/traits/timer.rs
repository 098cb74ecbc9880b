//! Tick timer trait for the stopwatch time base

/// Periodic timer producing the stopwatch's 100 ms ticks
///
/// The timer is configured once by the board HAL. The stopwatch only
/// starts, stops and rewinds it.
pub trait TickTimer {
    /// Enable the counter
    fn start(&mut self);

    /// Disable the counter
    fn stop(&mut self);

    /// Clear a pending update event so it is not delivered later
    fn clear_pending(&mut self);

    /// Rewind the counter and prescaler to zero without raising an event
    fn rewind(&mut self);

    /// Check if the counter is enabled
    fn is_running(&self) -> bool;
}
