//! State machine definition

/// Stopwatch states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Reset to zero, waiting for the first trigger
    #[default]
    Idle,
    /// Counting 100 ms ticks
    Running,
    /// Holding the final time on the display
    Stopped,
}

impl State {
    /// State entered on the next trigger
    pub fn next(self) -> Self {
        match self {
            State::Idle => State::Running,
            State::Running => State::Stopped,
            State::Stopped => State::Idle,
        }
    }

    /// Check if the tick timer should be enabled in this state
    pub fn is_counting(&self) -> bool {
        matches!(self, State::Running)
    }
}
