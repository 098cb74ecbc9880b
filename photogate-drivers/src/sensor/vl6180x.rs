//! VL6180X time-of-flight proximity sensor
//!
//! The sensor ranges continuously and raises GPIO1 (active low) when the
//! range crosses the armed threshold. Two modes are used:
//!
//! - **Low threshold**: interrupt when range < low threshold (object near)
//! - **High threshold**: interrupt when range > high threshold (object gone)
//!
//! # Register Protocol
//!
//! Registers have 16-bit big-endian addresses and single-byte values. A
//! write is one bus write of `[addr_hi, addr_lo, value]`; a read writes the
//! address and reads one byte back after a repeated start.

use photogate_hal::i2c::I2cBus;

/// VL6180X register addresses
pub mod reg {
    /// GPIO1 function and polarity
    pub const SYSTEM_MODE_GPIO1: u16 = 0x0011;
    /// Range/ALS interrupt mode
    pub const SYSTEM_INTERRUPT_CONFIG_GPIO: u16 = 0x0014;
    /// Interrupt clear bits
    pub const SYSTEM_INTERRUPT_CLEAR: u16 = 0x0015;
    /// Reads 1 until software clears it after loading settings
    pub const SYSTEM_FRESH_OUT_OF_RESET: u16 = 0x0016;
    /// Range measurement start/stop
    pub const SYSRANGE_START: u16 = 0x0018;
    /// High range threshold (mm)
    pub const SYSRANGE_THRESH_HIGH: u16 = 0x0019;
    /// Low range threshold (mm)
    pub const SYSRANGE_THRESH_LOW: u16 = 0x001A;
    /// Continuous ranging period, 10 ms units plus 10 ms
    pub const SYSRANGE_INTERMEASUREMENT_PERIOD: u16 = 0x001B;
    /// Latest range result (mm)
    pub const RESULT_RANGE_VAL: u16 = 0x0062;
}

/// Default 7-bit bus address
pub const DEFAULT_ADDRESS: u8 = 0x29;

/// Clear range, ALS and error interrupts
const CLEAR_ALL: u8 = 0x07;

/// Continuous mode, start
const RANGE_START_CONTINUOUS: u8 = 0x03;

/// Settings loaded once after power-on
///
/// Mandatory private registers from the datasheet's application note, then
/// the recommended and optional public registers, in that order.
pub const SETTINGS: &[(u16, u8)] = &[
    // Private
    (0x0207, 0x01),
    (0x0208, 0x01),
    (0x0096, 0x00),
    (0x0097, 0xFD),
    (0x00E3, 0x00),
    (0x00E4, 0x04),
    (0x00E5, 0x02),
    (0x00E6, 0x01),
    (0x00E7, 0x03),
    (0x00F5, 0x02),
    (0x00D9, 0x05),
    (0x00DB, 0xCE),
    (0x00DC, 0x03),
    (0x00DD, 0xF8),
    (0x009F, 0x00),
    (0x00A3, 0x3C),
    (0x00B7, 0x00),
    (0x00BB, 0x3C),
    (0x00B2, 0x09),
    (0x00CA, 0x09),
    (0x0198, 0x01),
    (0x01B0, 0x17),
    (0x01AD, 0x00),
    (0x00FF, 0x05),
    (0x0100, 0x05),
    (0x0199, 0x05),
    (0x01A6, 0x1B),
    (0x01AC, 0x3E),
    (0x01A7, 0x1F),
    (0x0030, 0x00),
    // Recommended
    (reg::SYSTEM_MODE_GPIO1, 0x10), // GPIO1 interrupt output, active low
    (0x010A, 0x30), // averaging sample period
    (0x003F, 0x46), // light and dark gain
    (0x0031, 0xFF), // auto calibration every 255 measurements
    (0x0040, 0x63), // ALS integration time 100 ms
    (0x002E, 0x01), // single temperature calibration
    // Optional
    (0x003E, 0x31), // ALS period 500 ms
];

/// Range interrupt mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InterruptMode {
    /// Level low: range below the low threshold
    LowThreshold = 0x01,
    /// Level high: range above the high threshold
    HighThreshold = 0x02,
}

impl InterruptMode {
    /// Decode the range bits of SYSTEM__INTERRUPT_CONFIG_GPIO
    pub fn from_register(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Self::LowThreshold),
            0x02 => Some(Self::HighThreshold),
            _ => None,
        }
    }

    /// Register value
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Near threshold in mm
    pub low_threshold_mm: u8,
    /// Far threshold in mm
    pub high_threshold_mm: u8,
    /// SYSRANGE__INTERMEASUREMENT_PERIOD code
    pub range_period: u8,
}

impl SensorConfig {
    /// Whole-range gate: anything in view triggers, 30 ms ranging period
    pub const DEFAULT: Self = Self {
        address: DEFAULT_ADDRESS,
        low_threshold_mm: 255,
        high_threshold_mm: 254,
        range_period: 0x02,
    };

    /// Inter-measurement period in milliseconds
    pub const fn range_period_ms(&self) -> u32 {
        (self.range_period as u32 + 1) * 10
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// VL6180X driver over any [`I2cBus`]
pub struct Vl6180x<B> {
    bus: B,
    config: SensorConfig,
}

impl<B: I2cBus> Vl6180x<B> {
    /// Create a driver; the device is not touched until [`init`](Self::init)
    pub fn new(bus: B, config: SensorConfig) -> Self {
        Self { bus, config }
    }

    /// Active configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Release the bus
    pub fn free(self) -> B {
        self.bus
    }

    /// Read one register
    pub fn read_byte(&mut self, reg: u16) -> Result<u8, B::Error> {
        let mut value = [0u8; 1];
        self.bus
            .write_read(self.config.address, &reg.to_be_bytes(), &mut value)?;
        Ok(value[0])
    }

    /// Write one register
    pub fn write_byte(&mut self, reg: u16, value: u8) -> Result<(), B::Error> {
        let [hi, lo] = reg.to_be_bytes();
        self.bus.write(self.config.address, &[hi, lo, value])
    }

    /// Check whether the settings still need loading
    pub fn is_fresh_out_of_reset(&mut self) -> Result<bool, B::Error> {
        Ok(self.read_byte(reg::SYSTEM_FRESH_OUT_OF_RESET)? == 1)
    }

    /// Bring the sensor up, arm the low threshold and drop stale interrupts
    ///
    /// Settings are only loaded on a sensor fresh out of reset, so calling
    /// this again after an MCU-only reset is harmless. A sensor that kept
    /// ranging across that reset may still hold GPIO1 low; clearing its
    /// interrupts releases the line so the next threshold crossing produces
    /// a falling edge. Returns whether the settings were loaded.
    pub fn init(&mut self) -> Result<bool, B::Error> {
        let fresh = self.is_fresh_out_of_reset()?;

        if fresh {
            for &(reg, value) in SETTINGS {
                self.write_byte(reg, value)?;
            }
            self.apply_config()?;
            self.write_byte(reg::SYSTEM_FRESH_OUT_OF_RESET, 0x00)?;
        }

        self.set_interrupt_mode(InterruptMode::LowThreshold)?;
        self.clear_interrupts()?;
        Ok(fresh)
    }

    fn apply_config(&mut self) -> Result<(), B::Error> {
        let config = self.config;
        self.write_byte(reg::SYSRANGE_INTERMEASUREMENT_PERIOD, config.range_period)?;
        self.write_byte(reg::SYSRANGE_THRESH_LOW, config.low_threshold_mm)?;
        self.write_byte(reg::SYSRANGE_THRESH_HIGH, config.high_threshold_mm)
    }

    /// Arm a range threshold interrupt
    pub fn set_interrupt_mode(&mut self, mode: InterruptMode) -> Result<(), B::Error> {
        self.write_byte(reg::SYSTEM_INTERRUPT_CONFIG_GPIO, mode.bits())
    }

    /// Currently armed mode, `None` if the register holds anything else
    pub fn interrupt_mode(&mut self) -> Result<Option<InterruptMode>, B::Error> {
        let value = self.read_byte(reg::SYSTEM_INTERRUPT_CONFIG_GPIO)?;
        Ok(InterruptMode::from_register(value))
    }

    /// Start continuous ranging
    pub fn start_continuous(&mut self) -> Result<(), B::Error> {
        self.write_byte(reg::SYSRANGE_START, RANGE_START_CONTINUOUS)
    }

    /// Halt continuous ranging, aborting any pending measurement
    pub fn stop_continuous(&mut self) -> Result<(), B::Error> {
        self.write_byte(reg::SYSRANGE_START, 0x00)
    }

    /// Acknowledge all pending sensor interrupts
    pub fn clear_interrupts(&mut self) -> Result<(), B::Error> {
        self.write_byte(reg::SYSTEM_INTERRUPT_CLEAR, CLEAR_ALL)
    }

    /// Latest range measurement in mm
    pub fn range_mm(&mut self) -> Result<u8, B::Error> {
        self.read_byte(reg::RESULT_RANGE_VAL)
    }
}
