//! External interrupt lines for STM32F4
//!
//! EXTI lines 0-15 each follow one GPIO pin number, on a port selected in
//! SYSCFG. Lines 5-9 share the EXTI9_5 vector.

use embassy_stm32::pac;
use photogate_hal::gpio::EdgeLatch;

use crate::gpio::{Line, Mode, Pull, Speed};

/// Falling-edge interrupt line bound to one GPIO pin
pub struct ExtiLine {
    line: usize,
}

impl ExtiLine {
    /// Configure `pin` as an input with `pull` and unmask its falling edge
    ///
    /// SYSCFG and the port clock must already be enabled. Any edge latched
    /// before this call is discarded.
    pub fn falling_edge(pin: Line, pull: Pull) -> Self {
        let n = pin.pin as usize;

        pin.configure(Mode::Input, pull, Speed::Low);
        pac::SYSCFG
            .exticr(n / 4)
            .modify(|w| w.set_exti(n % 4, pin.port.index()));

        pac::EXTI.rtsr(0).modify(|w| w.set_line(n, false));
        pac::EXTI.ftsr(0).modify(|w| w.set_line(n, true));

        let mut line = Self { line: n };
        line.clear();
        pac::EXTI.imr(0).modify(|w| w.set_line(n, true));
        line
    }

    /// EXTI line number
    pub fn line(&self) -> usize {
        self.line
    }
}

impl EdgeLatch for ExtiLine {
    fn clear(&mut self) {
        // Write-one-to-clear
        pac::EXTI.pr(0).write(|w| w.set_line(self.line, true));
    }

    fn is_pending(&self) -> bool {
        pac::EXTI.pr(0).read().line(self.line)
    }
}
