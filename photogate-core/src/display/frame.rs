//! Display frame buffer shared between writer and refresh interrupt

use portable_atomic::{AtomicU8, Ordering};

/// Number of digit positions on the display
pub const DIGIT_COUNT: usize = 4;

/// Segment bitmaps for each digit position
///
/// Bit `i` lights segment `i` (A..G are bits 0..6, bit 7 is the decimal
/// point). Every slot is a single atomic byte, so a reader never sees a
/// partially updated digit. Slots are independent: last write wins per slot.
#[derive(Debug)]
pub struct FrameBuffer {
    slots: [AtomicU8; DIGIT_COUNT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank frame buffer
    pub const fn new() -> Self {
        Self {
            slots: [
                AtomicU8::new(0),
                AtomicU8::new(0),
                AtomicU8::new(0),
                AtomicU8::new(0),
            ],
        }
    }

    /// Set all four digits, left to right
    ///
    /// Non-blocking and callable from any context.
    pub fn set_digits(&self, d0: u8, d1: u8, d2: u8, d3: u8) {
        self.set(0, d0);
        self.set(1, d1);
        self.set(2, d2);
        self.set(3, d3);
    }

    /// Set a single digit position
    ///
    /// Positions outside the display are ignored.
    pub fn set(&self, index: usize, segments: u8) {
        if let Some(slot) = self.slots.get(index) {
            slot.store(segments, Ordering::Relaxed);
        }
    }

    /// Read one digit position (blank if out of range)
    pub fn digit(&self, index: usize) -> u8 {
        self.slots
            .get(index)
            .map(|slot| slot.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Copy out all four digits
    pub fn snapshot(&self) -> [u8; DIGIT_COUNT] {
        [self.digit(0), self.digit(1), self.digit(2), self.digit(3)]
    }

    /// Blank every digit
    pub fn clear(&self) {
        self.set_digits(0, 0, 0, 0);
    }
}
