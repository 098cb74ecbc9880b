//! GPIO interrupt line abstractions

/// Pending-edge latch of an external interrupt line
///
/// The latch is set by hardware when the configured edge is seen and stays
/// set until software clears it. An interrupt handler must clear it before
/// returning, otherwise the vector fires again immediately.
pub trait EdgeLatch {
    /// Clear the pending flag for this line
    fn clear(&mut self);

    /// Check if an edge is pending
    fn is_pending(&self) -> bool;
}
