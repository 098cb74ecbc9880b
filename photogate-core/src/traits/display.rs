//! Display line trait for the multiplexed 7-segment display

/// Anode and cathode drive lines of a multiplexed display
///
/// `active` is the logical state: an active anode powers its digit, an
/// active cathode lights its segment. Implementations translate this to the
/// electrical level (the board uses active-low lines for both).
pub trait SegmentLines {
    /// Drive the anode of digit position `digit`
    fn set_anode(&mut self, digit: usize, active: bool);

    /// Drive the cathode of segment `segment` (bit index in the pattern)
    fn set_cathode(&mut self, segment: usize, active: bool);
}
