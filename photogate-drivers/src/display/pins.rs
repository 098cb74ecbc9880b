//! GPIO segment lines
//!
//! Drives a common-anode display through transistors that invert both the
//! anode and cathode lines, so a line is active when its pin is LOW.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use photogate_core::display::{DIGIT_COUNT, SEGMENT_COUNT};
use photogate_core::traits::SegmentLines;

/// Anode and cathode pins of a multiplexed display
pub struct PinLines<P> {
    anodes: [P; DIGIT_COUNT],
    cathodes: [P; SEGMENT_COUNT],
}

impl<P: OutputPin<Error = Infallible>> PinLines<P> {
    /// Create from configured output pins
    ///
    /// `cathodes` are ordered A..G then the decimal point.
    pub fn new(anodes: [P; DIGIT_COUNT], cathodes: [P; SEGMENT_COUNT]) -> Self {
        Self { anodes, cathodes }
    }

    /// Release the pins
    pub fn free(self) -> ([P; DIGIT_COUNT], [P; SEGMENT_COUNT]) {
        (self.anodes, self.cathodes)
    }
}

fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, active: bool) {
    let result = if active { pin.set_low() } else { pin.set_high() };
    if let Err(e) = result {
        match e {}
    }
}

impl<P: OutputPin<Error = Infallible>> SegmentLines for PinLines<P> {
    fn set_anode(&mut self, digit: usize, active: bool) {
        if let Some(pin) = self.anodes.get_mut(digit) {
            drive(pin, active);
        }
    }

    fn set_cathode(&mut self, segment: usize, active: bool) {
        if let Some(pin) = self.cathodes.get_mut(segment) {
            drive(pin, active);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;
    use photogate_core::display::{DisplayScheduler, FrameBuffer};

    /// Mock GPIO pin for testing
    #[derive(Debug, Clone, Copy)]
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    fn lines() -> PinLines<MockPin> {
        PinLines::new([MockPin::new(); DIGIT_COUNT], [MockPin::new(); SEGMENT_COUNT])
    }

    #[test]
    fn test_active_low() {
        let mut lines = lines();

        lines.set_anode(2, true);
        lines.set_cathode(5, true);
        assert!(!lines.anodes[2].high);
        assert!(!lines.cathodes[5].high);

        lines.set_anode(2, false);
        lines.set_cathode(5, false);
        assert!(lines.anodes[2].high);
        assert!(lines.cathodes[5].high);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut lines = lines();
        lines.set_anode(DIGIT_COUNT, false);
        lines.set_cathode(SEGMENT_COUNT, false);

        let (anodes, cathodes) = lines.free();
        assert!(anodes.iter().all(|p| !p.high));
        assert!(cathodes.iter().all(|p| !p.high));
    }

    #[test]
    fn test_scheduler_drives_pins() {
        let frame = FrameBuffer::new();
        frame.set_digits(0, 0x06, 0, 0);
        let mut scheduler = DisplayScheduler::new(lines(), &frame);

        // Construction turns every line off
        let (anodes, cathodes) = scheduler.free().free();
        assert!(anodes.iter().chain(cathodes.iter()).all(|p| p.high));

        let mut scheduler = DisplayScheduler::new(PinLines::new(anodes, cathodes), &frame);
        scheduler.on_update();
        scheduler.on_update();

        let (anodes, cathodes) = scheduler.free().free();
        // Digit 0 was never blanked by a compare event, so both are on
        assert!(!anodes[0].high);
        assert!(!anodes[1].high);
        assert!(!cathodes[1].high);
        assert!(!cathodes[2].high);
        assert!(cathodes[0].high);
    }
}
