//! I2C1 register block for STM32F4
//!
//! Exposes the I2C v1 peripheral through [`I2cRegisters`] so the bus
//! transaction engine in `photogate-drivers` can drive it. SCL/SDA must be
//! routed as open-drain alternate function 4 before [`init`].

use embassy_stm32::pac;
use photogate_hal::i2c::{Flags, I2cConfig, I2cRegisters};

use crate::gpio::{Drive, Line, Mode, Pull, Speed};

/// I2C1 alternate function number
pub const I2C1_AF: u8 = 4;

/// Route a line to I2C1
///
/// Open-drain without internal pull: the bus needs external pull-ups.
pub fn configure_pin(line: &Line) {
    line.configure(
        Mode::Alternate(I2C1_AF, Drive::OpenDrain),
        Pull::None,
        Speed::Low,
    );
}

/// Bring up I2C1 as a standard master
///
/// Resets CR1, programs the APB1 frequency, clock control and rise time
/// from `config`, then enables the peripheral.
pub fn init(config: &I2cConfig) -> I2c1Registers {
    let regs = pac::I2C1;

    regs.cr1().write(|_| {});
    regs.cr2().write(|w| w.set_freq(config.freq_mhz()));
    regs.ccr().write(|w| w.set_ccr(config.ccr()));
    regs.trise().write(|w| w.set_trise(config.trise()));
    regs.cr1().modify(|w| w.set_pe(true));

    I2c1Registers { _private: () }
}

/// Owned handle to the I2C1 register block
pub struct I2c1Registers {
    _private: (),
}

impl I2cRegisters for I2c1Registers {
    fn start(&mut self) {
        pac::I2C1.cr1().modify(|w| w.set_start(true));
    }

    fn stop(&mut self) {
        pac::I2C1.cr1().modify(|w| w.set_stop(true));
    }

    fn set_ack(&mut self, enabled: bool) {
        pac::I2C1.cr1().modify(|w| w.set_ack(enabled));
    }

    fn write_data(&mut self, byte: u8) {
        pac::I2C1.dr().write(|w| w.set_dr(byte));
    }

    fn read_data(&mut self) -> u8 {
        pac::I2C1.dr().read().dr()
    }

    fn flags(&mut self) -> Flags {
        Flags::from_bits(pac::I2C1.sr1().read().0 as u16)
    }

    fn clear_address_flag(&mut self) {
        // ADDR clears on an SR1 read followed by an SR2 read
        let _ = pac::I2C1.sr2().read();
    }
}
