//! Unbounded busy-wait on a hardware condition
//!
//! Every status wait in the firmware goes through [`wait_until`]. There is no
//! timeout and no retry: a device that never raises the flag stalls the
//! caller forever, and recovery is left to an external watchdog reset.

/// Spin until `condition` returns true
///
/// `condition` is polled in a tight loop, typically reading a status
/// register. It is evaluated at least once.
#[inline]
pub fn wait_until<F>(mut condition: F)
where
    F: FnMut() -> bool,
{
    while !condition() {
        core::hint::spin_loop();
    }
}
