//! Mock hardware shared by driver tests

use heapless::Vec;
use photogate_core::state::State;
use photogate_core::traits::{SegmentLines, TickTimer, TriggerSink};
use photogate_hal::gpio::EdgeLatch;
use photogate_hal::i2c::I2cBus;

/// Highest register address modelled
const REGISTER_SPACE: usize = 0x0300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

/// VL6180X register file behind an I2C bus
///
/// Understands the 16-bit register pointer protocol: a 3-byte write stores a
/// value, a 2-byte write followed by a read returns one.
pub struct MockSensor {
    pub regs: [u8; REGISTER_SPACE],
    pub writes: Vec<(u16, u8), 64>,
    pub reads: Vec<u16, 16>,
    pub address: Option<u8>,
    pub broken: bool,
}

impl MockSensor {
    pub fn new() -> Self {
        Self {
            regs: [0; REGISTER_SPACE],
            writes: Vec::new(),
            reads: Vec::new(),
            address: None,
            broken: false,
        }
    }

    /// Sensor straight out of power-on reset
    pub fn fresh() -> Self {
        let mut sensor = Self::new();
        sensor.regs[0x0016] = 1;
        sensor
    }

    pub fn with(reg: u16, value: u8) -> Self {
        let mut sensor = Self::new();
        sensor.regs[reg as usize] = value;
        sensor
    }

    fn pointer(&mut self, address: u8, bytes: &[u8]) -> Result<u16, BusError> {
        if self.broken {
            return Err(BusError);
        }
        self.address = Some(address);
        match bytes {
            [hi, lo, ..] => Ok(u16::from_be_bytes([*hi, *lo])),
            _ => panic!("register pointer needs two bytes, got {:?}", bytes),
        }
    }
}

impl I2cBus for MockSensor {
    type Error = BusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        let reg = self.pointer(address, data)?;
        if let [_, _, value] = data {
            self.regs[reg as usize] = *value;
            self.writes.push((reg, *value)).expect("write log full");
        }
        Ok(())
    }

    fn read(&mut self, _address: u8, _buf: &mut [u8]) -> Result<(), Self::Error> {
        panic!("register reads must set the pointer first");
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        let reg = self.pointer(address, write_data)?;
        self.reads.push(reg).expect("read log full");
        for (i, byte) in read_buf.iter_mut().enumerate() {
            *byte = self.regs[reg as usize + i];
        }
        Ok(())
    }
}

/// EXTI pending flag
#[derive(Debug, Default)]
pub struct MockLatch {
    pub pending: bool,
    pub clears: u32,
}

impl EdgeLatch for MockLatch {
    fn clear(&mut self) {
        self.pending = false;
        self.clears += 1;
    }

    fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Trigger sink stepping through the stopwatch states
#[derive(Debug, Default)]
pub struct MockSink {
    pub state: State,
    pub triggers: u32,
}

impl TriggerSink for MockSink {
    fn trigger(&mut self) -> State {
        self.triggers += 1;
        self.state = self.state.next();
        self.state
    }
}

/// Display lines that go nowhere
pub struct NullLines;

impl SegmentLines for NullLines {
    fn set_anode(&mut self, _digit: usize, _active: bool) {}

    fn set_cathode(&mut self, _segment: usize, _active: bool) {}
}

/// Tick timer that only tracks its enable bit
#[derive(Debug, Default)]
pub struct MockTimer {
    pub running: bool,
}

impl TickTimer for MockTimer {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn clear_pending(&mut self) {}

    fn rewind(&mut self) {}

    fn is_running(&self) -> bool {
        self.running
    }
}
