//! Sensor edge handling traits
//!
//! The sensor bridge lives in the drivers crate. The dispatcher only needs to
//! hand it the stopwatch's trigger entry point.

use crate::state::State;

/// Receiver of start/stop/reset trigger events
pub trait TriggerSink {
    /// Advance to the next state; returns the state entered
    fn trigger(&mut self) -> State;
}

/// What a sensor edge interrupt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Object approached: trigger fired, far threshold now armed
    Triggered(State),
    /// Object left: near threshold re-armed, no trigger
    Rearmed,
}

/// Handler for the sensor's interrupt line
pub trait EdgeHandler {
    /// Error type of the underlying bus
    type Error;

    /// Service one edge interrupt
    ///
    /// May call `sink.trigger()` at most once.
    fn on_edge<T: TriggerSink>(&mut self, sink: &mut T) -> Result<EdgeOutcome, Self::Error>;
}
