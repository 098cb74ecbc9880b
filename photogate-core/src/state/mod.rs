//! Stopwatch state machine
//!
//! The state machine is explicit, finite, and deterministic. A single
//! trigger input walks the cycle Idle -> Running -> Stopped -> Idle.

pub mod events;
pub mod machine;
pub mod stopwatch;

pub use events::Event;
pub use machine::State;
pub use stopwatch::Stopwatch;
