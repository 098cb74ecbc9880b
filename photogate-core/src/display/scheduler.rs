//! Persistence-of-vision refresh scheduler
//!
//! Driven by a periodic timer with two events per period:
//!
//! - **update**: light the current digit from the frame buffer, then move on
//! - **compare** (80 % into the period): turn every line off
//!
//! Blanking on the compare event rather than on the next update keeps the
//! outgoing digit's segments from bleeding onto the incoming one. At 400
//! update events per second each digit is refreshed at 100 Hz.

use super::frame::{FrameBuffer, DIGIT_COUNT};
use super::segments::SEGMENT_COUNT;
use crate::traits::SegmentLines;

/// Digit multiplexer reading a shared [`FrameBuffer`]
pub struct DisplayScheduler<'a, L> {
    lines: L,
    frame: &'a FrameBuffer,
    /// Digit lit by the next update event
    current: usize,
}

impl<'a, L: SegmentLines> DisplayScheduler<'a, L> {
    /// Create a scheduler with every line turned off
    pub fn new(lines: L, frame: &'a FrameBuffer) -> Self {
        let mut scheduler = Self {
            lines,
            frame,
            current: 0,
        };
        scheduler.blank();
        scheduler
    }

    /// Handle the timer update event
    ///
    /// Lines are not blanked here; the preceding compare event already did.
    pub fn on_update(&mut self) {
        let digit = self.current;
        let segments = self.frame.digit(digit);

        self.lines.set_anode(digit, true);
        for segment in 0..SEGMENT_COUNT {
            if segments & (1 << segment) != 0 {
                self.lines.set_cathode(segment, true);
            }
        }

        self.current = (digit + 1) % DIGIT_COUNT;
    }

    /// Handle the timer compare event
    pub fn on_compare(&mut self) {
        self.blank();
    }

    /// Digit position the next update event will light
    pub fn current_digit(&self) -> usize {
        self.current
    }

    /// Release the display lines
    pub fn free(self) -> L {
        self.lines
    }

    fn blank(&mut self) {
        for segment in 0..SEGMENT_COUNT {
            self.lines.set_cathode(segment, false);
        }
        for digit in 0..DIGIT_COUNT {
            self.lines.set_anode(digit, false);
        }
    }
}
