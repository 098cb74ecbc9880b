//! 7-segment display output

pub mod pins;

pub use pins::PinLines;
