//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in photogate-core and photogate-hal:
//!
//! - I2C master transaction engine over a register-level peripheral
//! - VL6180X time-of-flight range sensor
//! - Sensor event bridge turning threshold interrupts into stopwatch triggers
//! - GPIO-backed 7-segment display lines

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod display;
pub mod sensor;

#[cfg(test)]
mod mock;
