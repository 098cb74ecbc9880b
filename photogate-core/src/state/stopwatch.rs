//! Stopwatch with a 100 ms tick
//!
//! Owns the elapsed tick count and the tick timer. Every change of the count
//! is rendered straight into the shared frame buffer.

use super::machine::State;
use crate::display::{render, FrameBuffer};
use crate::traits::{TickTimer, TriggerSink};

/// Milliseconds per tick
pub const TICK_MS: u32 = 100;

/// Photo-gate stopwatch
pub struct Stopwatch<'a, T> {
    state: State,
    /// Elapsed 100 ms ticks; only changes while running
    ticks: u32,
    timer: T,
    frame: &'a FrameBuffer,
}

impl<'a, T: TickTimer> Stopwatch<'a, T> {
    /// Create a stopwatch in the idle state showing zero
    ///
    /// `timer` must already be configured for a 10 Hz update rate; it is
    /// left stopped.
    pub fn new(timer: T, frame: &'a FrameBuffer) -> Self {
        let mut stopwatch = Self {
            state: State::Idle,
            ticks: 0,
            timer,
            frame,
        };
        stopwatch.zero();
        stopwatch
    }

    /// Advance the state machine; returns the state entered
    pub fn trigger(&mut self) -> State {
        match self.state {
            State::Idle => self.run(),
            State::Running => self.stop(),
            State::Stopped => self.zero(),
        }
        self.state
    }

    /// Handle a tick timer update event
    ///
    /// Returns false if the tick was ignored because the stopwatch is not
    /// running.
    pub fn on_tick(&mut self) -> bool {
        if !self.state.is_counting() {
            return false;
        }
        self.ticks = self.ticks.wrapping_add(1);
        self.render();
        true
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Elapsed 100 ms ticks
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.ticks as u64 * TICK_MS as u64
    }

    /// Tick timer in use
    pub fn timer(&self) -> &T {
        &self.timer
    }

    fn run(&mut self) {
        self.timer.start();
        self.state = State::Running;
    }

    fn stop(&mut self) {
        self.timer.stop();
        self.timer.clear_pending();
        self.state = State::Stopped;
    }

    fn zero(&mut self) {
        self.ticks = 0;
        self.timer.rewind();
        self.render();
        self.state = State::Idle;
    }

    fn render(&self) {
        let [d0, d1, d2, d3] = render(self.ticks);
        self.frame.set_digits(d0, d1, d2, d3);
    }
}

impl<T: TickTimer> TriggerSink for Stopwatch<'_, T> {
    fn trigger(&mut self) -> State {
        Stopwatch::trigger(self)
    }
}
