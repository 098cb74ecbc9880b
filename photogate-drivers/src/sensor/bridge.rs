//! Sensor event bridge
//!
//! Turns the sensor's threshold interrupts into stopwatch triggers. The
//! bridge flips the armed threshold on every edge so one pass through the
//! gate produces exactly one trigger:
//!
//! ```text
//!   object enters ──► low threshold fires ──► trigger, arm high
//!   object leaves ──► high threshold fires ─► arm low
//! ```
//!
//! Runs in interrupt context and performs up to three blocking register
//! transactions per edge.

use photogate_core::traits::{EdgeHandler, EdgeOutcome, TriggerSink};
use photogate_hal::gpio::EdgeLatch;
use photogate_hal::i2c::I2cBus;

use super::vl6180x::{InterruptMode, Vl6180x};

/// VL6180X plus the interrupt line its GPIO1 output drives
pub struct SensorBridge<B, L> {
    sensor: Vl6180x<B>,
    latch: L,
}

impl<B: I2cBus, L: EdgeLatch> SensorBridge<B, L> {
    /// Create from an initialized sensor and its configured interrupt line
    pub fn new(sensor: Vl6180x<B>, latch: L) -> Self {
        Self { sensor, latch }
    }

    /// Underlying sensor driver
    pub fn sensor(&mut self) -> &mut Vl6180x<B> {
        &mut self.sensor
    }

    /// Release the sensor and interrupt line
    pub fn free(self) -> (Vl6180x<B>, L) {
        (self.sensor, self.latch)
    }
}

impl<B: I2cBus, L: EdgeLatch> EdgeHandler for SensorBridge<B, L> {
    type Error = B::Error;

    fn on_edge<T: TriggerSink>(&mut self, sink: &mut T) -> Result<EdgeOutcome, Self::Error> {
        self.latch.clear();

        let outcome = match self.sensor.interrupt_mode()? {
            Some(InterruptMode::LowThreshold) => {
                let state = sink.trigger();
                self.sensor.set_interrupt_mode(InterruptMode::HighThreshold)?;
                EdgeOutcome::Triggered(state)
            }
            _ => {
                self.sensor.set_interrupt_mode(InterruptMode::LowThreshold)?;
                EdgeOutcome::Rearmed
            }
        };

        self.sensor.clear_interrupts()?;
        Ok(outcome)
    }
}
