mod common;

use common::SimI2c;
use embedded_hal_mock::eh1::delay::NoopDelay;
use lsm6dsox_rs::blocking::prelude::*;
use lsm6dsox_rs::blocking::*;

fn tag_byte(tag_sensor: u8, tag_cnt: u8) -> u8 {
    (tag_sensor << 3) | (tag_cnt << 1)
}

#[test]
fn tag_decode_is_total_and_stable() {
    let known = [
        (0x01, FifoTag::GyroNc),
        (0x02, FifoTag::XlNc),
        (0x03, FifoTag::Temperature),
        (0x04, FifoTag::Timestamp),
        (0x05, FifoTag::CfgChange),
        (0x06, FifoTag::XlNcT2),
        (0x07, FifoTag::XlNcT1),
        (0x08, FifoTag::Xl2xC),
        (0x09, FifoTag::Xl3xC),
        (0x0A, FifoTag::GyroNcT2),
        (0x0B, FifoTag::GyroNcT1),
        (0x0C, FifoTag::Gyro2xC),
        (0x0D, FifoTag::Gyro3xC),
        (0x0E, FifoTag::SensorHubSlave0),
        (0x0F, FifoTag::SensorHubSlave1),
        (0x10, FifoTag::SensorHubSlave2),
        (0x11, FifoTag::SensorHubSlave3),
        (0x12, FifoTag::StepCounter),
        (0x19, FifoTag::SensorHubNack),
    ];

    for code in 0u8..=0xFF {
        let decoded = FifoTag::try_from(code).unwrap_or_default();
        let expected = known
            .iter()
            .find(|(raw, _)| *raw == code)
            .map(|(_, tag)| *tag)
            .unwrap_or(FifoTag::SensorHubNack);

        assert_eq!(decoded, expected, "code {:#04x}", code);
        // decode has no hidden state
        assert_eq!(decoded, FifoTag::try_from(code).unwrap_or_default());
    }
}

#[test]
fn unknown_tag_codes_fall_back_to_sensor_hub_nack() {
    assert_eq!(FifoTag::try_from(0x01).unwrap_or_default(), FifoTag::GyroNc);
    assert_eq!(
        FifoTag::try_from(0x1F).unwrap_or_default(),
        FifoTag::SensorHubNack
    );
}

#[test]
fn fifo_level_is_little_endian_across_the_status_pair() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    state.borrow_mut().set_fifo_status(200, 0x01);

    assert_eq!(sensor.fifo_data_level_get().unwrap(), 456);
}

#[test]
fn fifo_status_flags_come_with_the_level_in_one_read() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    state.borrow_mut().set_fifo_status(200, 0xF1);

    let status = sensor.fifo_status_get().unwrap();
    assert_eq!(status.fifo_level, 456);
    assert_eq!(status.fifo_th, 1);
    assert_eq!(status.fifo_ovr, 1);
    assert_eq!(status.fifo_full, 1);
    assert_eq!(status.fifo_bdr, 1);

    // single-flag accessors pay the same 2-byte read
    assert_eq!(sensor.fifo_wtm_flag_get().unwrap(), 1);
    assert_eq!(sensor.fifo_ovr_flag_get().unwrap(), 1);
    assert_eq!(sensor.fifo_full_flag_get().unwrap(), 1);
}

#[test]
fn fifo_records_decode_in_arrival_order() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    {
        let mut state = state.borrow_mut();
        state.push_fifo_record(tag_byte(0x01, 2), [1, 2, 3, 4, 5, 6]);
        state.push_fifo_record(tag_byte(0x02, 3), [6, 5, 4, 3, 2, 1]);
    }

    let gyro = sensor.fifo_out_raw_get().unwrap();
    assert_eq!(gyro.tag, FifoTag::GyroNc);
    assert_eq!(gyro.cnt, 2);
    assert_eq!(gyro.data, [1, 2, 3, 4, 5, 6]);

    let accel = sensor.fifo_out_raw_get().unwrap();
    assert_eq!(accel.tag, FifoTag::XlNc);
    assert_eq!(accel.cnt, 3);
    assert_eq!(accel.data, [6, 5, 4, 3, 2, 1]);

    assert!(state.borrow().fifo.is_empty());
}

#[test]
fn unknown_record_tag_reads_as_sensor_hub_nack() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    state
        .borrow_mut()
        .push_fifo_record(tag_byte(0x1F, 0), [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0xFF]);

    let record = sensor.fifo_out_raw_get().unwrap();
    assert_eq!(record.tag, FifoTag::SensorHubNack);
    assert_eq!(record.data, [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0xFF]);
}

#[test]
fn sensor_tag_peek_does_not_consume_the_record() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    state
        .borrow_mut()
        .push_fifo_record(tag_byte(0x04, 0), [0x10, 0x27, 0x00, 0x00, 0, 0]);

    assert_eq!(sensor.fifo_sensor_tag_get().unwrap(), FifoTag::Timestamp);

    let record = sensor.fifo_out_raw_get().unwrap();
    assert_eq!(record.tag, FifoTag::Timestamp);
    assert_eq!(record.data[..4], [0x10, 0x27, 0x00, 0x00]);
}

#[test]
fn watermark_spans_the_two_control_registers() {
    let (i2c, state) = SimI2c::new();
    let mut sensor = Lsm6dsox::new_i2c(i2c, I2CAddress::I2cAddH, NoopDelay);

    sensor.fifo_watermark_set(300).unwrap();

    {
        let state = state.borrow();
        assert_eq!(state.user[0x07], 44); // low 8 bits of 300
        assert_eq!(state.user[0x08] & 0x01, 0x01); // bit 8
    }

    assert_eq!(sensor.fifo_watermark_get().unwrap(), 300);
}
