//! Blocking I2C master transaction engine
//!
//! Implements a write-then-read transaction with 7-bit addressing on top of
//! [`I2cRegisters`]. Every status wait is an unbounded busy-wait through
//! [`wait_until`]; the engine assumes a single, uncontended device.
//!
//! # Transaction
//!
//! 1. **Write phase** (skipped if there is nothing to write): START, address
//!    with the write bit, then the data bytes. The phase ends on BTF so the
//!    last byte has left the shift register, not just the data register.
//!    Without a read phase a STOP follows and the call returns.
//! 2. **Read phase** (skipped if there is nothing to read): repeated START,
//!    address with the read bit. The acknowledge policy is armed before
//!    waiting for the address flag: a single-byte read must be NACKed.
//! 3. **Reception**: the receiver is double-buffered, so NACK and STOP are
//!    staged one byte ahead, before waiting on byte `n - 2` (byte 0 when
//!    only one byte is read).

use core::convert::Infallible;

use photogate_hal::i2c::{Flags, I2cBus, I2cRegisters};
use photogate_hal::wait::wait_until;

/// Direction bit appended to the address
const WRITE: u8 = 0;
const READ: u8 = 1;

/// I2C master driving a register-level peripheral
pub struct I2cMaster<R> {
    regs: R,
}

impl<R: I2cRegisters> I2cMaster<R> {
    /// Create an engine over an initialized, enabled peripheral
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Write `write` then read into `read` from the device at `address`
    ///
    /// Returns once the STOP condition has been requested. Either slice may
    /// be empty; with both empty the bus is not touched.
    pub fn transact(&mut self, address: u8, write: &[u8], read: &mut [u8]) {
        if !write.is_empty() {
            self.write_phase(address, write);
            if read.is_empty() {
                self.regs.stop();
                return;
            }
        }

        if !read.is_empty() {
            self.read_phase(address, read);
        }
    }

    /// Release the peripheral
    pub fn free(self) -> R {
        self.regs
    }

    fn write_phase(&mut self, address: u8, bytes: &[u8]) {
        self.address(address, WRITE);
        self.await_flags(Flags::ADDRESS);
        self.regs.clear_address_flag();

        for (i, &byte) in bytes.iter().enumerate() {
            if i > 0 {
                self.await_flags(Flags::TX_EMPTY);
            }
            self.regs.write_data(byte);
        }

        self.await_flags(Flags::BYTE_TRANSFER_FINISHED);
    }

    fn read_phase(&mut self, address: u8, buf: &mut [u8]) {
        self.address(address, READ);

        // Must be set before ADDR is seen
        self.regs.set_ack(buf.len() != 1);

        self.await_flags(Flags::ADDRESS);
        self.regs.clear_address_flag();

        let stage_at = buf.len().saturating_sub(2);
        for (i, byte) in buf.iter_mut().enumerate() {
            if i == stage_at {
                self.regs.set_ack(false);
                self.regs.stop();
            }
            self.await_flags(Flags::RX_NOT_EMPTY);
            *byte = self.regs.read_data();
        }
    }

    /// START (or repeated START) followed by the address byte
    fn address(&mut self, address: u8, direction: u8) {
        self.regs.start();
        self.await_flags(Flags::START_BIT);
        self.regs.write_data(((address & 0x7F) << 1) | direction);
    }

    fn await_flags(&mut self, flags: Flags) {
        let regs = &mut self.regs;
        wait_until(|| regs.flags().contains(flags));
    }
}

impl<R: I2cRegisters> I2cBus for I2cMaster<R> {
    type Error = Infallible;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.transact(address, data, &mut []);
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.transact(address, &[], buf);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.transact(address, write_data, read_buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Start,
        Stop,
        Ack(bool),
        Write(u8),
        Read(u8),
        Poll,
        ClearAddr,
    }

    use Op::*;

    /// Peripheral model that records every register access
    struct MockRegisters {
        ops: Vec<Op, 64>,
        rx: &'static [u8],
        rx_pos: usize,
        /// Polls that report no flags before the flags appear
        latency: u8,
        waited: u8,
    }

    impl MockRegisters {
        fn new(rx: &'static [u8]) -> Self {
            Self {
                ops: Vec::new(),
                rx,
                rx_pos: 0,
                latency: 0,
                waited: 0,
            }
        }

        fn slow(rx: &'static [u8], latency: u8) -> Self {
            Self {
                latency,
                ..Self::new(rx)
            }
        }

        fn log(&mut self, op: Op) {
            self.ops.push(op).expect("op log full");
        }
    }

    impl I2cRegisters for MockRegisters {
        fn start(&mut self) {
            self.log(Start);
        }

        fn stop(&mut self) {
            self.log(Stop);
        }

        fn set_ack(&mut self, enabled: bool) {
            self.log(Ack(enabled));
        }

        fn write_data(&mut self, byte: u8) {
            self.log(Write(byte));
        }

        fn read_data(&mut self) -> u8 {
            let byte = self.rx[self.rx_pos];
            self.rx_pos += 1;
            self.log(Read(byte));
            byte
        }

        fn flags(&mut self) -> Flags {
            self.log(Poll);
            if self.waited < self.latency {
                self.waited += 1;
                return Flags::EMPTY;
            }
            self.waited = 0;
            Flags::START_BIT
                | Flags::ADDRESS
                | Flags::BYTE_TRANSFER_FINISHED
                | Flags::RX_NOT_EMPTY
                | Flags::TX_EMPTY
        }

        fn clear_address_flag(&mut self) {
            self.log(ClearAddr);
        }
    }

    const ADDR: u8 = 0x29;

    #[test]
    fn test_write_only() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[]));

        bus.transact(ADDR, &[0x00, 0x16, 0x01], &mut []);

        let regs = bus.free();
        assert_eq!(
            regs.ops.as_slice(),
            &[
                Start, Poll, Write(0x52), Poll, ClearAddr,
                Write(0x00), Poll, Write(0x16), Poll, Write(0x01),
                Poll, // BTF
                Stop,
            ]
        );
    }

    #[test]
    fn test_write_only_has_no_read_phase() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[]));

        bus.transact(ADDR, &[0xAB], &mut []);

        let regs = bus.free();
        assert!(!regs.ops.iter().any(|op| matches!(op, Ack(_) | Read(_))));
        assert_eq!(regs.ops.iter().filter(|op| **op == Start).count(), 1);
        assert_eq!(regs.ops.last(), Some(&Stop));
    }

    #[test]
    fn test_single_byte_register_read() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[0x01]));
        let mut buf = [0u8; 1];

        bus.transact(ADDR, &[0x00, 0x14], &mut buf);

        assert_eq!(buf, [0x01]);
        let regs = bus.free();
        assert_eq!(
            regs.ops.as_slice(),
            &[
                Start, Poll, Write(0x52), Poll, ClearAddr,
                Write(0x00), Poll, Write(0x14), Poll,
                // Repeated start, NACK armed before the address wait
                Start, Poll, Write(0x53), Ack(false), Poll, ClearAddr,
                Ack(false), Stop, Poll, Read(0x01),
            ]
        );
    }

    #[test]
    fn test_multi_byte_read_stages_nack_one_byte_early() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[0x10, 0x20, 0x30, 0x40]));
        let mut buf = [0u8; 4];

        bus.transact(ADDR, &[], &mut buf);

        assert_eq!(buf, [0x10, 0x20, 0x30, 0x40]);
        let regs = bus.free();
        assert_eq!(
            regs.ops.as_slice(),
            &[
                Start, Poll, Write(0x53), Ack(true), Poll, ClearAddr,
                Poll, Read(0x10),
                Poll, Read(0x20),
                Ack(false), Stop,
                Poll, Read(0x30),
                Poll, Read(0x40),
            ]
        );
    }

    #[test]
    fn test_two_byte_read_stages_before_first_byte() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[0xAA, 0x55]));
        let mut buf = [0u8; 2];

        bus.transact(ADDR, &[], &mut buf);

        let regs = bus.free();
        assert_eq!(
            regs.ops.as_slice(),
            &[
                Start, Poll, Write(0x53), Ack(true), Poll, ClearAddr,
                Ack(false), Stop, Poll, Read(0xAA),
                Poll, Read(0x55),
            ]
        );
    }

    #[test]
    fn test_register_pointer_then_multi_byte_read() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[0x11, 0x22, 0x33]));
        let mut buf = [0u8; 3];

        bus.transact(ADDR, &[0x00, 0x62], &mut buf);

        assert_eq!(buf, [0x11, 0x22, 0x33]);
        let regs = bus.free();
        assert_eq!(
            regs.ops.as_slice(),
            &[
                Start, Poll, Write(0x52), Poll, ClearAddr,
                Write(0x00), Poll, Write(0x62), Poll,
                // Repeated start with ACK on for the leading bytes
                Start, Poll, Write(0x53), Ack(true), Poll, ClearAddr,
                Poll, Read(0x11),
                Ack(false), Stop,
                Poll, Read(0x22),
                Poll, Read(0x33),
            ]
        );
    }

    #[test]
    fn test_read_only_skips_write_phase() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[0x07]));
        let mut buf = [0u8; 1];

        bus.transact(ADDR, &[], &mut buf);

        let regs = bus.free();
        assert_eq!(regs.ops.iter().filter(|op| **op == Start).count(), 1);
        assert_eq!(regs.ops[2], Write(0x53));
    }

    #[test]
    fn test_empty_transaction_touches_nothing() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[]));

        bus.transact(ADDR, &[], &mut []);

        assert!(bus.free().ops.is_empty());
    }

    #[test]
    fn test_waits_until_flags_appear() {
        let mut bus = I2cMaster::new(MockRegisters::slow(&[], 2));

        bus.transact(ADDR, &[0x01], &mut []);

        let regs = bus.free();
        assert_eq!(
            regs.ops.as_slice(),
            &[
                Start, Poll, Poll, Poll, Write(0x52),
                Poll, Poll, Poll, ClearAddr, Write(0x01),
                Poll, Poll, Poll, Stop,
            ]
        );
    }

    #[test]
    fn test_address_is_seven_bit() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[]));

        bus.transact(0xA9, &[0x00], &mut []);

        assert_eq!(bus.free().ops[2], Write(0x52));
    }

    #[test]
    fn test_i2c_bus_trait() {
        let mut bus = I2cMaster::new(MockRegisters::new(&[0x5A, 0xA5]));
        let mut buf = [0u8; 2];

        assert_eq!(bus.write_read(ADDR, &[0x00, 0x62], &mut buf), Ok(()));
        assert_eq!(buf, [0x5A, 0xA5]);
        assert_eq!(bus.write(ADDR, &[0x00, 0x15, 0x07]), Ok(()));
        assert_eq!(bus.free().ops.last(), Some(&Stop));
    }
}
