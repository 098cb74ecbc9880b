//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod sensor;
pub mod timer;

pub use display::SegmentLines;
pub use sensor::{EdgeHandler, EdgeOutcome, TriggerSink};
pub use timer::TickTimer;
