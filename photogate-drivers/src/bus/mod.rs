//! Bus engines

pub mod i2c;

pub use i2c::I2cMaster;
