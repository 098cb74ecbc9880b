//! Interrupt sources feeding the firmware

/// Events raised by the three interrupt sources
///
/// Each variant maps to exactly one handler in
/// [`Dispatcher::handle`](crate::dispatch::Dispatcher::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Display timer fired; either or both of its events may be pending
    DisplayTick {
        /// Period rollover: light the next digit
        update: bool,
        /// Mid-period compare: blank the display
        compare: bool,
    },
    /// 100 ms stopwatch tick
    StopwatchTick,
    /// Falling edge on the sensor's interrupt output
    SensorEdge,
}

impl Event {
    /// Display update event only
    pub const DISPLAY_UPDATE: Self = Event::DisplayTick {
        update: true,
        compare: false,
    };

    /// Display compare event only
    pub const DISPLAY_COMPARE: Self = Event::DisplayTick {
        update: false,
        compare: true,
    };
}
