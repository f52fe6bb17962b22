//! Simulated SSD1306 on a recording bus
//!
//! Records every submitted transaction and interprets it the way the
//! controller would in page addressing mode, so tests can check both
//! the wire traffic and the resulting display RAM.

use std::vec::Vec;

use tablet_hal::i2c::{BusError, I2cBus, Transaction};

use crate::cmd;
use crate::{PAGES, WIDTH};

pub struct SimBus {
    /// Payloads of every transaction, in submission order
    pub log: Vec<Vec<u8>>,
    /// Addresses of every transaction
    pub addresses: Vec<u8>,
    pub timeouts: Vec<u32>,
    pub ram: [[u8; WIDTH]; PAGES],
    pub page: u8,
    pub column: u8,
    pub start_column: u8,
    pub display_on: bool,
    pub scrolling: bool,
    /// Fail the transaction with this index
    pub fail_at: Option<(usize, BusError)>,
}

impl SimBus {
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            addresses: Vec::new(),
            timeouts: Vec::new(),
            ram: [[0; WIDTH]; PAGES],
            page: 0,
            column: 0,
            start_column: 0,
            display_on: false,
            scrolling: false,
            fail_at: None,
        }
    }

    /// RAM filled with lit pixels
    pub fn dirty() -> Self {
        let mut sim = Self::new();
        sim.ram = [[0xFF; WIDTH]; PAGES];
        sim
    }

    pub fn failing(index: usize, error: BusError) -> Self {
        let mut sim = Self::new();
        sim.fail_at = Some((index, error));
        sim
    }

    pub fn commands(&self) -> impl Iterator<Item = &[u8]> {
        self.log
            .iter()
            .filter(|p| p[0] == cmd::CONTROL_COMMAND)
            .map(|p| &p[1..])
    }

    pub fn data(&self) -> impl Iterator<Item = &[u8]> {
        self.log
            .iter()
            .filter(|p| p[0] == cmd::CONTROL_DATA)
            .map(|p| &p[1..])
    }

    fn run_commands(&mut self, stream: &[u8]) {
        let mut i = 0;
        while i < stream.len() {
            let c = stream[i];
            i += 1;
            match c {
                0x00..=0x0F => {
                    self.start_column = (self.start_column & 0xF0) | c;
                    self.column = self.start_column;
                }
                0x10..=0x1F => {
                    self.start_column = (self.start_column & 0x0F) | ((c & 0x0F) << 4);
                    self.column = self.start_column;
                }
                0xB0..=0xB7 => self.page = c & 0x07,
                cmd::SET_MEMORY_ADDR_MODE => {
                    assert_eq!(stream[i], cmd::PAGE_ADDR_MODE, "only page mode is modelled");
                    i += 1;
                }
                cmd::SET_CHARGE_PUMP => i += 1,
                cmd::VERTICAL_RIGHT_SCROLL | cmd::VERTICAL_LEFT_SCROLL => i += 5,
                cmd::SET_VERTICAL_SCROLL_AREA => i += 2,
                cmd::ACTIVATE_SCROLL => self.scrolling = true,
                cmd::DEACTIVATE_SCROLL => self.scrolling = false,
                cmd::DISPLAY_ON => self.display_on = true,
                _ => {}
            }
        }
    }

    fn write_data(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.ram[self.page as usize][self.column as usize] = b;
            self.column = if self.column as usize == WIDTH - 1 {
                self.start_column
            } else {
                self.column + 1
            };
        }
    }
}

impl I2cBus for SimBus {
    fn submit(&mut self, transaction: Transaction, timeout_ms: u32) -> Result<(), BusError> {
        let index = self.log.len();
        self.log.push(transaction.payload().to_vec());
        self.addresses.push(transaction.address().get());
        self.timeouts.push(timeout_ms);

        if let Some((at, error)) = self.fail_at {
            if at == index {
                return Err(error);
            }
        }

        let (control, rest) = transaction
            .payload()
            .split_first()
            .expect("empty transaction");
        match *control {
            cmd::CONTROL_COMMAND => self.run_commands(rest),
            cmd::CONTROL_DATA => self.write_data(rest),
            other => panic!("unknown control byte 0x{:02X}", other),
        }
        Ok(())
    }
}
