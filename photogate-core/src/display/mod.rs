//! Multiplexed 7-segment display
//!
//! The stopwatch renders into a [`FrameBuffer`]; the [`DisplayScheduler`]
//! reads it from the display timer interrupt and lights one digit at a time.

pub mod frame;
pub mod scheduler;
pub mod segments;

pub use frame::{FrameBuffer, DIGIT_COUNT};
pub use scheduler::DisplayScheduler;
pub use segments::{render, BLANK, DECIMAL_POINT, DIGIT_PATTERNS, SEGMENT_COUNT};
