mod common;

use common::SimI2c;
use embedded_hal_mock::eh1::delay::NoopDelay;
use lsm6dsox_rs::blocking::prelude::*;
use lsm6dsox_rs::blocking::*;

#[test]
fn device_id_matches() {
    let (i2c, _state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    assert_eq!(sensor.device_id_get().unwrap(), ID);
}

#[test]
fn xl_configuration_round_trips() {
    let (i2c, _state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    sensor.xl_full_scale_set(FsXl::_4g).unwrap();
    assert_eq!(sensor.xl_full_scale_get().unwrap(), FsXl::_4g);

    // with FSM and MLC off the requested rate is programmed unchanged
    sensor.xl_data_rate_set(OdrXl::_104hz).unwrap();
    assert_eq!(sensor.xl_data_rate_get().unwrap(), OdrXl::_104hz);

    sensor.block_data_update_set(PROPERTY_ENABLE).unwrap();
    assert_eq!(sensor.block_data_update_get().unwrap(), 1);
    // IF_INC power-on default must survive the read-modify-write
    assert_eq!(sensor.auto_increment_get().unwrap(), 1);
}

#[test]
fn unknown_full_scale_encoding_decodes_to_default() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    // FS_G = 0b011 is not a documented encoding
    state.borrow_mut().user[0x11] = 0b011 << 1;

    assert_eq!(sensor.gy_full_scale_get().unwrap(), FsGy::_250dps);
}

#[test]
fn step_counter_is_read_from_the_embedded_bank() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    {
        let mut state = state.borrow_mut();
        state.emb[0x62] = 0x34;
        state.emb[0x63] = 0x12;
    }

    assert_eq!(sensor.number_of_steps_get().unwrap(), 0x1234);
    // user bank restored after the scoped access
    assert_eq!(state.borrow().user[common::FUNC_CFG_ACCESS as usize] >> 6, 0);
}

#[test]
fn pedometer_period_lives_in_the_advanced_page() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    sensor.pedo_steps_period_set(0x0400).unwrap();

    {
        let state = state.borrow();
        // PEDO_SC_DELTAT, page 1 offsets 0xD0/0xD1, little-endian
        assert_eq!(state.pages[0x01D0], 0x00);
        assert_eq!(state.pages[0x01D1], 0x04);
    }

    assert_eq!(sensor.pedo_steps_period_get().unwrap(), 0x0400);
}

#[test]
fn fsm_long_counter_timeout_round_trips_through_paged_memory() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    sensor.long_cnt_int_value_set(0xBEEF).unwrap();

    {
        let state = state.borrow();
        // FSM_LC_TIMEOUT, page 1 offsets 0x7A/0x7B, little-endian
        assert_eq!(state.pages[0x017A], 0xEF);
        assert_eq!(state.pages[0x017B], 0xBE);
    }

    assert_eq!(sensor.long_cnt_int_value_get().unwrap(), 0xBEEF);
}

#[test]
fn mag_offsets_round_trip_through_paged_memory() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    sensor.mag_offset_set([-1, 2, -300]).unwrap();

    {
        let state = state.borrow();
        // MAG_OFFX, page 0 offset 0xC0, little-endian words
        assert_eq!(state.pages[0xC0], 0xFF);
        assert_eq!(state.pages[0xC1], 0xFF);
        assert_eq!(state.pages[0xC2], 0x02);
        assert_eq!(state.pages[0xC3], 0x00);
    }

    assert_eq!(sensor.mag_offset_get().unwrap(), [-1, 2, -300]);
}

#[test]
fn conversion_helpers_match_datasheet_sensitivities() {
    assert_eq!(from_fs2_to_mg(1000), 61.0);
    assert_eq!(from_fs2000_to_mdps(100), 7000.0);
    assert_eq!(from_lsb_to_celsius(0), 25.0);
    // 25 us timestamp resolution
    assert_eq!(from_lsb_to_nsec(40_000), 1_000_000_000);
}
