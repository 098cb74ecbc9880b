//! I2C bus abstractions
//!
//! Two levels are provided:
//!
//! - [`I2cBus`] is the transaction-level interface device drivers use.
//! - [`I2cRegisters`] is the register-level interface of a master-mode
//!   peripheral (start/stop generation, acknowledge control, data and
//!   status registers). A transaction engine built on it implements
//!   [`I2cBus`].

use core::ops::BitOr;

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// This is commonly used to write a register address then read data.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// Snapshot of the master status register
///
/// Bit positions follow the STM32 `SR1` layout so a chip HAL can convert a
/// raw register read with [`Flags::from_bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flags(u16);

impl Flags {
    /// No flag set
    pub const EMPTY: Self = Self(0);
    /// Start condition generated (SB)
    pub const START_BIT: Self = Self(1 << 0);
    /// Address sent and acknowledged (ADDR)
    pub const ADDRESS: Self = Self(1 << 1);
    /// Byte transfer finished, shift register drained (BTF)
    pub const BYTE_TRANSFER_FINISHED: Self = Self(1 << 2);
    /// Receive data register not empty (RXNE)
    pub const RX_NOT_EMPTY: Self = Self(1 << 6);
    /// Transmit data register empty (TXE)
    pub const TX_EMPTY: Self = Self(1 << 7);

    /// Build from a raw status register value
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw bit value
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Check if every flag in `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Register-level access to an I2C master peripheral
///
/// Each method maps to a single register access. Ordering between calls is
/// significant: the transaction engine relies on the exact sequence to
/// stage acknowledge and stop conditions.
pub trait I2cRegisters {
    /// Request a start (or repeated start) condition
    fn start(&mut self);

    /// Request a stop condition after the current byte
    fn stop(&mut self);

    /// Enable or disable acknowledge of received bytes
    fn set_ack(&mut self, enabled: bool);

    /// Load a byte into the data register
    fn write_data(&mut self, byte: u8);

    /// Take a byte from the data register
    fn read_data(&mut self) -> u8;

    /// Read the status register
    fn flags(&mut self) -> Flags;

    /// Clear the address-sent flag
    ///
    /// On STM32 this is the side effect of reading `SR2` after `SR1`.
    fn clear_address_flag(&mut self);
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Peripheral bus clock feeding the I2C block in Hz
    pub pclk_hz: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz) from a 16 MHz APB1 clock
    pub const STANDARD: Self = Self {
        frequency: 100_000,
        pclk_hz: 16_000_000,
    };

    /// Fast mode (400 kHz) from a 16 MHz APB1 clock
    pub const FAST: Self = Self {
        frequency: 400_000,
        pclk_hz: 16_000_000,
    };

    /// Peripheral clock in whole MHz (`CR2.FREQ`)
    pub const fn freq_mhz(&self) -> u8 {
        (self.pclk_hz / 1_000_000) as u8
    }

    /// Clock control value for a 50 % duty SCL (`CCR`)
    pub const fn ccr(&self) -> u16 {
        (self.pclk_hz / (self.frequency << 1)) as u16
    }

    /// Maximum rise time in peripheral clock cycles plus one (`TRISE`)
    pub const fn trise(&self) -> u8 {
        self.freq_mhz() + 1
    }
}
