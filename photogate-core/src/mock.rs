//! Recording hardware mocks shared by the unit tests

use heapless::Vec;

use crate::display::{DIGIT_COUNT, SEGMENT_COUNT};
use crate::traits::{SegmentLines, TickTimer};

/// One line change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOp {
    Anode(usize, bool),
    Cathode(usize, bool),
}

/// Display lines that remember their logical state
pub struct MockLines {
    pub anodes: [bool; DIGIT_COUNT],
    pub cathodes: [bool; SEGMENT_COUNT],
    pub log: Vec<LineOp, 512>,
}

impl MockLines {
    pub fn new() -> Self {
        Self {
            // Power-on state is undefined; start with everything lit
            anodes: [true; DIGIT_COUNT],
            cathodes: [true; SEGMENT_COUNT],
            log: Vec::new(),
        }
    }

    /// Index of the only active anode, if exactly one is active
    pub fn lit_digit(&self) -> Option<usize> {
        let mut lit = self.anodes.iter().enumerate().filter(|(_, &on)| on);
        match (lit.next(), lit.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }

    /// Active cathodes as a segment bitmap
    pub fn lit_segments(&self) -> u8 {
        self.cathodes
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .fold(0u8, |acc, (i, _)| acc | (1 << i))
    }

    pub fn is_blank(&self) -> bool {
        self.anodes.iter().all(|&on| !on) && self.cathodes.iter().all(|&on| !on)
    }
}

impl SegmentLines for MockLines {
    fn set_anode(&mut self, digit: usize, active: bool) {
        self.anodes[digit] = active;
        self.log.push(LineOp::Anode(digit, active)).expect("line log full");
    }

    fn set_cathode(&mut self, segment: usize, active: bool) {
        self.cathodes[segment] = active;
        self.log.push(LineOp::Cathode(segment, active)).expect("line log full");
    }
}

/// Tick timer that tracks its enable and pending state
#[derive(Debug, Default)]
pub struct MockTimer {
    pub running: bool,
    pub pending: bool,
    pub starts: u32,
    pub stops: u32,
    pub rewinds: u32,
}

impl TickTimer for MockTimer {
    fn start(&mut self) {
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.running = false;
        self.stops += 1;
    }

    fn clear_pending(&mut self) {
        self.pending = false;
    }

    fn rewind(&mut self) {
        self.rewinds += 1;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
