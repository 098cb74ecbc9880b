//! Board-agnostic core logic for the photo-gate stopwatch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (segment lines, tick timer, edge handler)
//! - Display frame buffer, segment rendering and refresh scheduling
//! - Stopwatch state machine
//! - Event dispatch from interrupt sources to handlers
//! - Timer configuration

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod dispatch;
pub mod display;
pub mod state;
pub mod traits;

#[cfg(test)]
mod mock;

pub use dispatch::{Dispatcher, Handled};
pub use display::{DisplayScheduler, FrameBuffer};
pub use state::{Event, State, Stopwatch};
