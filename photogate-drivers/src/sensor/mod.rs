//! Proximity sensor drivers

pub mod bridge;
pub mod vl6180x;

pub use bridge::SensorBridge;
pub use vl6180x::{InterruptMode, SensorConfig, Vl6180x};
