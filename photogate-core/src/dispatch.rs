//! Event dispatch
//!
//! Routes each interrupt source to its handler. The firmware's vectors only
//! translate hardware flags into an [`Event`]; everything after that runs
//! here, so the whole system can be driven by synthetic events in tests.

use crate::display::DisplayScheduler;
use crate::state::{Event, State, Stopwatch};
use crate::traits::{EdgeHandler, EdgeOutcome, SegmentLines, TickTimer};

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handled {
    /// Display refresh step done
    Display,
    /// Stopwatch tick; `counted` is false if the stopwatch was not running
    Tick { counted: bool },
    /// Sensor edge serviced
    Sensor(EdgeOutcome),
}

/// Owner of the three interrupt-driven subsystems
pub struct Dispatcher<'a, L, T, S> {
    display: DisplayScheduler<'a, L>,
    stopwatch: Stopwatch<'a, T>,
    sensor: S,
}

impl<'a, L, T, S> Dispatcher<'a, L, T, S>
where
    L: SegmentLines,
    T: TickTimer,
    S: EdgeHandler,
{
    /// Assemble the dispatcher from initialized subsystems
    pub fn new(display: DisplayScheduler<'a, L>, stopwatch: Stopwatch<'a, T>, sensor: S) -> Self {
        Self {
            display,
            stopwatch,
            sensor,
        }
    }

    /// Run the handler for `event`
    pub fn handle(&mut self, event: Event) -> Result<Handled, S::Error> {
        match event {
            Event::DisplayTick { update, compare } => {
                // Both pending means the handler ran late: the compare
                // closed the previous period before the update opened this one
                if compare {
                    self.display.on_compare();
                }
                if update {
                    self.display.on_update();
                }
                Ok(Handled::Display)
            }
            Event::StopwatchTick => Ok(Handled::Tick {
                counted: self.stopwatch.on_tick(),
            }),
            Event::SensorEdge => self.sensor.on_edge(&mut self.stopwatch).map(Handled::Sensor),
        }
    }

    /// Current stopwatch state
    pub fn state(&self) -> State {
        self.stopwatch.state()
    }

    /// Stopwatch subsystem
    pub fn stopwatch(&self) -> &Stopwatch<'a, T> {
        &self.stopwatch
    }

    /// Display subsystem
    pub fn display(&self) -> &DisplayScheduler<'a, L> {
        &self.display
    }

    /// Sensor subsystem
    pub fn sensor(&self) -> &S {
        &self.sensor
    }
}
