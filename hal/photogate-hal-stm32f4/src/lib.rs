//! STM32F4-specific HAL for the Photogate firmware
//!
//! This crate implements the `photogate-hal` and `photogate-core` traits on
//! the raw STM32F4 register blocks exposed by `embassy_stm32::pac`. Only the
//! peripherals the firmware uses are covered:
//!
//! - I2C1 as a register-level master for the bus transaction engine
//! - TIM4 as the display refresh timer, TIM3 as the stopwatch tick
//! - GPIO lines for the display and the sensor interrupt
//! - EXTI falling-edge lines
//!
//! # Features
//!
//! - `stm32f411re` - Enable support for STM32F411RE (Nucleo-F411RE)
//! - `stm32f401re` - Enable support for STM32F401RE
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! Call [`clock::enable_peripherals`] once after `embassy_stm32::init`, then
//! configure lines and peripherals with the helpers in each module. The
//! embassy drivers for these peripherals must not be used alongside.

#![no_std]

pub mod clock;
pub mod exti;
pub mod gpio;
pub mod i2c;
pub mod timer;

// Re-export shared types
pub use photogate_hal::i2c::I2cConfig;
