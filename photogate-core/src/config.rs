//! Timer configuration
//!
//! Both periodic sources run from the 16 MHz APB1 timer clock. The values
//! here are written straight into the prescaler, auto-reload and compare
//! registers by the chip HAL.

/// Timer input clock in Hz
pub const TIMER_CLOCK_HZ: u32 = 16_000_000;

/// Periodic timer register values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Prescaler register value (divides by `prescaler + 1`)
    pub prescaler: u16,
    /// Auto-reload register value (period is `reload + 1` counts)
    pub reload: u16,
    /// Compare channel 1 value, if a mid-period event is used
    pub compare: Option<u16>,
}

impl TimerConfig {
    /// Display multiplexer: 1 MHz count, 2500 counts per period = 400 Hz.
    ///
    /// The compare event at 2000 counts blanks the digit at 80 % of the
    /// period. Later blanking leaves a shadow on the neighbouring digit.
    pub const DISPLAY: Self = Self {
        prescaler: 16 - 1,
        reload: 2500 - 1,
        compare: Some(2000),
    };

    /// Stopwatch tick: 1 kHz count, 100 counts per period = 10 Hz.
    ///
    /// A finer tick is pointless given how long the sensor needs per
    /// ranging measurement.
    pub const STOPWATCH_TICK: Self = Self {
        prescaler: 16000 - 1,
        reload: 100 - 1,
        compare: None,
    };

    /// Update events per second for the given input clock
    pub const fn update_rate_hz(&self, clock_hz: u32) -> u32 {
        clock_hz / ((self.prescaler as u32 + 1) * (self.reload as u32 + 1))
    }

    /// Refresh rate seen by each of `digits` multiplexed positions
    pub const fn per_digit_refresh_hz(&self, clock_hz: u32, digits: u32) -> u32 {
        self.update_rate_hz(clock_hz) / digits
    }

    /// Portion of the period before the compare event, in percent
    pub const fn on_time_percent(&self) -> Option<u32> {
        match self.compare {
            Some(compare) => Some(compare as u32 * 100 / (self.reload as u32 + 1)),
            None => None,
        }
    }

    /// Length of one period in microseconds
    pub const fn period_us(&self, clock_hz: u32) -> u32 {
        let counts = (self.prescaler as u32 + 1) * (self.reload as u32 + 1);
        counts / (clock_hz / 1_000_000)
    }
}
