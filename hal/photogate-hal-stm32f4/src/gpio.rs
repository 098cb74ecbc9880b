//! GPIO lines for STM32F4
//!
//! A [`Line`] is a port/pin pair addressed through the raw register block.
//! Outputs are driven through BSRR, so setting one line never disturbs
//! another on the same port, even from an interrupt.

use core::convert::Infallible;

use embassy_stm32::pac;
use embassy_stm32::pac::gpio::{vals, Gpio};
use embedded_hal::digital::{ErrorType, OutputPin};

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
}

impl Port {
    fn regs(self) -> Gpio {
        match self {
            Port::A => pac::GPIOA,
            Port::B => pac::GPIOB,
            Port::C => pac::GPIOC,
        }
    }

    /// SYSCFG_EXTICR port selector
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Output driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Drive {
    PushPull,
    OpenDrain,
}

/// Pin function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Input,
    Output(Drive),
    /// Alternate function number (AF0-AF15)
    Alternate(u8, Drive),
}

/// Internal resistor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Output slew rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// One GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Line {
    pub port: Port,
    pub pin: u8,
}

impl Line {
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Program mode, driver, pull and speed
    ///
    /// The port clock must already be enabled.
    pub fn configure(&self, mode: Mode, pull: Pull, speed: Speed) {
        let regs = self.port.regs();
        let n = self.pin as usize;

        let drive = match mode {
            Mode::Input => None,
            Mode::Output(drive) => Some(drive),
            Mode::Alternate(af, drive) => {
                regs.afr(n / 8).modify(|w| w.set_afr(n % 8, af));
                Some(drive)
            }
        };

        if let Some(drive) = drive {
            regs.otyper().modify(|w| {
                w.set_ot(
                    n,
                    match drive {
                        Drive::PushPull => vals::Ot::PUSH_PULL,
                        Drive::OpenDrain => vals::Ot::OPEN_DRAIN,
                    },
                )
            });
            regs.ospeedr().modify(|w| {
                w.set_ospeedr(
                    n,
                    match speed {
                        Speed::Low => vals::Ospeedr::LOW_SPEED,
                        Speed::Medium => vals::Ospeedr::MEDIUM_SPEED,
                        Speed::High => vals::Ospeedr::HIGH_SPEED,
                        Speed::VeryHigh => vals::Ospeedr::VERY_HIGH_SPEED,
                    },
                )
            });
        }

        regs.pupdr().modify(|w| {
            w.set_pupdr(
                n,
                match pull {
                    Pull::None => vals::Pupdr::FLOATING,
                    Pull::Up => vals::Pupdr::PULL_UP,
                    Pull::Down => vals::Pupdr::PULL_DOWN,
                },
            )
        });

        regs.moder().modify(|w| {
            w.set_moder(
                n,
                match mode {
                    Mode::Input => vals::Moder::INPUT,
                    Mode::Output(_) => vals::Moder::OUTPUT,
                    Mode::Alternate(..) => vals::Moder::ALTERNATE,
                },
            )
        });
    }

    /// Configure as an open-drain output, released first
    ///
    /// Released (high) is the inactive level of the display lines, so
    /// nothing lights up while the port is being set up.
    pub fn into_open_drain_output(mut self) -> Self {
        self.set(true);
        self.configure(Mode::Output(Drive::OpenDrain), Pull::None, Speed::Low);
        self
    }

    fn set(&mut self, high: bool) {
        let n = self.pin as usize;
        self.port.regs().bsrr().write(|w| {
            if high {
                w.set_bs(n, true);
            } else {
                w.set_br(n, true);
            }
        });
    }
}

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}
