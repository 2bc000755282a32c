mod common;

use common::{PAGE_RW, PAGE_SEL, SimI2c};
use embedded_hal_mock::eh1::delay::NoopDelay;
use lsm6dsox_rs::blocking::prelude::*;
use lsm6dsox_rs::blocking::*;
use st_mems_bus::blocking::{EmbAdvFunctions, MemBankFunctions};

#[test]
fn bank_selection_round_trips() {
    let (i2c, _state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    for bank in [
        MemBank::EmbedFuncMemBank,
        MemBank::SensorHubMemBank,
        MemBank::MainMemBank,
    ] {
        sensor.mem_bank_set(bank).unwrap();
        assert_eq!(sensor.mem_bank_get().unwrap(), bank);
    }

    sensor.mem_bank_set(MemBank::MainMemBank).unwrap();
    assert_eq!(sensor.mem_bank_get().unwrap(), MemBank::MainMemBank);
}

#[test]
fn unknown_bank_encoding_decodes_to_main() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    // both selector bits set is not a legal encoding
    state.borrow_mut().user[common::FUNC_CFG_ACCESS as usize] = 0xC0;

    assert_eq!(sensor.mem_bank_get().unwrap(), MemBank::MainMemBank);
}

#[test]
fn paged_byte_write_read_round_trips() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    // page 1, offset 10
    sensor.ln_pg_write(0x010A, &[0x2A], 1).unwrap();
    assert_eq!(state.borrow().pages[0x010A], 0x2A);

    let mut buf = [0u8; 1];
    sensor.ln_pg_read(0x010A, &mut buf, 1).unwrap();
    assert_eq!(buf[0], 0x2A);

    // the accessor must leave the device on the user bank
    assert_eq!(sensor.mem_bank_get().unwrap(), MemBank::MainMemBank);
}

#[test]
fn paged_block_write_crosses_page_boundary() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    let payload = [0x11, 0x22, 0x33, 0x44];
    sensor.ln_pg_write(0x01FE, &payload, 4).unwrap();

    {
        let state = state.borrow();
        assert_eq!(state.pages[0x01FE], 0x11);
        assert_eq!(state.pages[0x01FF], 0x22);
        assert_eq!(state.pages[0x0200], 0x33);
        assert_eq!(state.pages[0x0201], 0x44);
    }

    let mut buf = [0u8; 4];
    sensor.ln_pg_read(0x01FE, &mut buf, 4).unwrap();
    assert_eq!(buf, payload);
}

#[test]
fn paged_access_reaches_every_page() {
    let (i2c, _state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    for page in 0u16..16 {
        let address = (page << 8) | (0x20 + page);
        sensor.ln_pg_write(address, &[page as u8 ^ 0x5A], 1).unwrap();
    }

    for page in 0u16..16 {
        let address = (page << 8) | (0x20 + page);
        let mut buf = [0u8; 1];
        sensor.ln_pg_read(address, &mut buf, 1).unwrap();
        assert_eq!(buf[0], page as u8 ^ 0x5A);
    }
}

#[test]
fn paged_access_restores_page_zero_and_disables_page_mode() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    sensor.ln_pg_write(0x0342, &[0x7E], 1).unwrap();

    let state = state.borrow();
    // page selection back to 0 with the mandatory bit kept high
    assert_eq!(state.emb[PAGE_SEL as usize], 0x01);
    // page read/write mode disabled
    assert_eq!(state.emb[PAGE_RW as usize] & 0x60, 0x00);
    // user bank restored
    assert_eq!(state.user[common::FUNC_CFG_ACCESS as usize] >> 6, 0);
}

#[test]
fn transport_failure_before_payload_leaves_pages_untouched() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    state.borrow_mut().fail_after = Some(1);

    let res = sensor.ln_pg_write(0x0000, &[0xAA, 0xBB, 0xCC, 0xDD], 4);
    assert!(res.is_err());
    assert!(state.borrow().pages.iter().all(|&b| b == 0));
}

#[test]
fn transport_failure_aborts_without_extra_traffic() {
    // Reference run: count the transactions of a successful block write.
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);
    sensor.ln_pg_write(0x00F0, &[1, 2, 3, 4], 4).unwrap();
    let total = state.borrow().ops;

    // Failing at any point must propagate the error and never issue more
    // transactions than the successful run.
    for limit in 1..total {
        let (i2c, state) = SimI2c::new();
        let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);
        state.borrow_mut().fail_after = Some(limit);

        let res = sensor.ln_pg_write(0x00F0, &[1, 2, 3, 4], 4);
        assert!(res.is_err(), "limit {} did not fail", limit);
        // the failing call plus at most the best-effort teardown attempt
        assert!(
            state.borrow().ops <= limit + 3,
            "limit {} issued {} transactions",
            limit,
            state.borrow().ops
        );
    }
}
