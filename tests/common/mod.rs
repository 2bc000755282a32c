#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

pub const FUNC_CFG_ACCESS: u8 = 0x01;
pub const FIFO_STATUS1: u8 = 0x3A;
pub const FIFO_STATUS2: u8 = 0x3B;
pub const FIFO_DATA_OUT_TAG: u8 = 0x78;
pub const FIFO_DATA_OUT_Z_H: u8 = 0x7E;
pub const WHO_AM_I: u8 = 0x0F;
pub const PAGE_SEL: u8 = 0x02;
pub const PAGE_ADDRESS: u8 = 0x08;
pub const PAGE_VALUE: u8 = 0x09;
pub const PAGE_RW: u8 = 0x17;

const PAGE_READ: u8 = 0x20;
const PAGE_WRITE: u8 = 0x40;

/// Register-level model of the sensor.
///
/// Three 128-byte register banks selected through FUNC_CFG_ACCESS, a
/// 4096-byte advanced features memory behind the PAGE_SEL / PAGE_ADDRESS /
/// PAGE_VALUE indirection (with the hardware auto-increment of the page
/// address on every PAGE_VALUE access), and a queue of 7-byte FIFO records
/// served at FIFO_DATA_OUT_TAG.
pub struct DeviceState {
    pub user: [u8; 128],
    pub emb: [u8; 128],
    pub shub: [u8; 128],
    pub pages: [u8; 4096],
    pub fifo: VecDeque<[u8; 7]>,
    record: [u8; 7],
    pointer: u8,
    /// Number of I2C transactions performed.
    pub ops: u32,
    /// When set, every transaction after the N-th fails.
    pub fail_after: Option<u32>,
}

impl DeviceState {
    fn new() -> Self {
        let mut user = [0; 128];
        user[WHO_AM_I as usize] = 0x6C;
        user[0x12] = 0x04; // CTRL3_C: IF_INC power-on default

        Self {
            user,
            emb: [0; 128],
            shub: [0; 128],
            pages: [0; 4096],
            fifo: VecDeque::new(),
            record: [0; 7],
            pointer: 0,
            ops: 0,
            fail_after: None,
        }
    }

    fn bank(&self) -> u8 {
        self.user[FUNC_CFG_ACCESS as usize] >> 6
    }

    fn page_index(&self) -> usize {
        ((self.emb[PAGE_SEL as usize] >> 4) & 0x0F) as usize
    }

    fn write_mem(&mut self, reg: u8, val: u8) {
        // the bank selector register is visible from every bank
        if reg == FUNC_CFG_ACCESS {
            self.user[FUNC_CFG_ACCESS as usize] = val;
            return;
        }
        match self.bank() {
            // embedded functions bank
            0b10 => {
                if reg == PAGE_VALUE {
                    if self.emb[PAGE_RW as usize] & PAGE_WRITE != 0 {
                        let offset = self.emb[PAGE_ADDRESS as usize];
                        let index = (self.page_index() << 8) | offset as usize;
                        self.pages[index] = val;
                        self.emb[PAGE_ADDRESS as usize] = offset.wrapping_add(1);
                    }
                } else {
                    self.emb[(reg & 0x7F) as usize] = val;
                }
            }
            // sensor hub bank
            0b01 => self.shub[(reg & 0x7F) as usize] = val,
            _ => self.user[(reg & 0x7F) as usize] = val,
        }
    }

    fn read_mem(&mut self, reg: u8) -> u8 {
        if reg == FUNC_CFG_ACCESS {
            return self.user[FUNC_CFG_ACCESS as usize];
        }
        match self.bank() {
            0b10 => {
                if reg == PAGE_VALUE && self.emb[PAGE_RW as usize] & PAGE_READ != 0 {
                    let offset = self.emb[PAGE_ADDRESS as usize];
                    let index = (self.page_index() << 8) | offset as usize;
                    let val = self.pages[index];
                    self.emb[PAGE_ADDRESS as usize] = offset.wrapping_add(1);
                    val
                } else {
                    self.emb[(reg & 0x7F) as usize]
                }
            }
            0b01 => self.shub[(reg & 0x7F) as usize],
            _ => {
                if (FIFO_DATA_OUT_TAG..=FIFO_DATA_OUT_Z_H).contains(&reg) {
                    if reg == FIFO_DATA_OUT_TAG {
                        self.record = self.fifo.front().copied().unwrap_or([0; 7]);
                    }
                    let val = self.record[(reg - FIFO_DATA_OUT_TAG) as usize];
                    if reg == FIFO_DATA_OUT_Z_H {
                        self.fifo.pop_front();
                    }
                    val
                } else {
                    self.user[(reg & 0x7F) as usize]
                }
            }
        }
    }

    /// Load the FIFO status registers with the given level and flag bits.
    pub fn set_fifo_status(&mut self, level_low: u8, status2: u8) {
        self.user[FIFO_STATUS1 as usize] = level_low;
        self.user[FIFO_STATUS2 as usize] = status2;
    }

    /// Queue one FIFO record made of a raw tag byte and a 6-byte data set.
    pub fn push_fifo_record(&mut self, tag_byte: u8, data: [u8; 6]) {
        let mut record = [0; 7];
        record[0] = tag_byte;
        record[1..].copy_from_slice(&data);
        self.fifo.push_back(record);
    }
}

/// I2C peripheral backed by `DeviceState`, with register-pointer
/// auto-increment semantics.
pub struct SimI2c {
    state: Rc<RefCell<DeviceState>>,
}

impl SimI2c {
    pub fn new() -> (Self, Rc<RefCell<DeviceState>>) {
        let state = Rc::new(RefCell::new(DeviceState::new()));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl ErrorType for SimI2c {
    type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for SimI2c {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        assert_eq!(address, 0x6B);

        let mut state = self.state.borrow_mut();
        state.ops += 1;
        if let Some(limit) = state.fail_after {
            if state.ops > limit {
                return Err(ErrorKind::Other);
            }
        }

        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    if let Some((reg, data)) = bytes.split_first() {
                        state.pointer = *reg;
                        for &byte in data {
                            let reg = state.pointer;
                            state.write_mem(reg, byte);
                            state.pointer = reg.wrapping_add(1);
                        }
                    }
                }
                Operation::Read(buffer) => {
                    for slot in buffer.iter_mut() {
                        let reg = state.pointer;
                        *slot = state.read_mem(reg);
                        state.pointer = reg.wrapping_add(1);
                    }
                }
            }
        }

        Ok(())
    }
}
