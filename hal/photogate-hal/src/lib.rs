//! Photogate Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that chip-specific HALs
//! implement (currently only the STM32F4). Drivers and the stopwatch core
//! are written against these traits so they can be exercised on the host
//! with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  photogate-firmware (vectors, wiring)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  photogate-   │       │  photogate-   │
//! │   drivers     │       │     core      │
//! └───────────────┘       └───────────────┘
//!         │
//!         ▼
//! ┌─────────────────────────────────────────┐
//! │  photogate-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ photogate-hal-│
//!             │    stm32f4    │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - Transaction-level I2C master operations
//! - [`i2c::I2cRegisters`] - Register-level access to an I2C master peripheral
//! - [`gpio::EdgeLatch`] - Pending-edge latch of an external interrupt line
//!
//! # Waiting
//!
//! [`wait::wait_until`] is the only blocking primitive. It has no timeout.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod wait;

// Re-export key traits at crate root for convenience
pub use gpio::EdgeLatch;
pub use i2c::{Flags, I2cBus, I2cConfig, I2cRegisters};
pub use wait::wait_until;
