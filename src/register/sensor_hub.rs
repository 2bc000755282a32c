use crate::Error;
use crate::register::SensorHubState;
use bitfield_struct::bitfield;
use derive_more::TryFrom;
use embedded_hal::delay::DelayNs;
use st_mem_bank_macro::register;
use st_mems_bus::BusOperation;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq)]
pub enum SensHubReg {
    SensorHub1 = 0x02,
    SensorHub2 = 0x03,
    SensorHub3 = 0x04,
    SensorHub4 = 0x05,
    SensorHub5 = 0x06,
    SensorHub6 = 0x07,
    SensorHub7 = 0x08,
    SensorHub8 = 0x09,
    SensorHub9 = 0x0A,
    SensorHub10 = 0x0B,
    SensorHub11 = 0x0C,
    SensorHub12 = 0x0D,
    SensorHub13 = 0x0E,
    SensorHub14 = 0x0F,
    SensorHub15 = 0x10,
    SensorHub16 = 0x11,
    SensorHub17 = 0x12,
    SensorHub18 = 0x13,
    MasterConfig = 0x14,
    Slv0Add = 0x15,
    Slv0Subadd = 0x16,
    Slv0Config = 0x17,
    Slv1Add = 0x18,
    Slv1Subadd = 0x19,
    Slv1Config = 0x1A,
    Slv2Add = 0x1B,
    Slv2Subadd = 0x1C,
    Slv2Config = 0x1D,
    Slv3Add = 0x1E,
    Slv3Subadd = 0x1F,
    Slv3Config = 0x20,
    DatawriteSlv0 = 0x21,
    StatusMaster = 0x22,
}

/// SENSOR_HUB_1 - SENSOR_HUB_18 (0x02 - 0x13)
///
/// External sensor data output registers (R); filled in slave 0..3 declaration order
#[register(address = SensHubReg::SensorHub1, access_type = SensorHubState, generics = 2)]
pub struct SensorHubData(pub [u8; 18]);

/// MASTER_CONFIG (0x14)
///
/// Sensor hub master configuration register (R/W)
#[register(address = SensHubReg::MasterConfig, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct MasterConfig {
    /// Number of external sensors to be read by the sensor hub. Default: 00 (one).
    #[bits(2)]
    pub aux_sens_on: u8,
    /// Enables sensor hub I2C master. Default: 0.
    #[bits(1)]
    pub master_on: u8,
    /// Enables internal pull-up on the auxiliary I2C line. Default: 0.
    #[bits(1)]
    pub shub_pu_en: u8,
    /// I2C interface pass-through mode. Default: 0.
    #[bits(1)]
    pub pass_through_mode: u8,
    /// Sensor hub trigger selection; 0=XL/GY data-ready, 1=INT2 pin. Default: 0.
    #[bits(1)]
    pub start_config: u8,
    /// Slave 0 write operation performed only at the first sensor hub cycle. Default: 0.
    #[bits(1)]
    pub write_once: u8,
    /// Resets the sensor hub master logic and the output registers. Default: 0.
    #[bits(1)]
    pub rst_master_regs: u8,
}

/// SLV0_ADD (0x15)
///
/// I2C slave address of the first external sensor (R/W)
#[register(address = SensHubReg::Slv0Add, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv0Add {
    /// Read/write operation on slave 0; 0=write, 1=read.
    #[bits(1)]
    pub rw_0: u8,
    /// 7-bit I2C address of slave 0.
    #[bits(7)]
    pub slave0: u8,
}

/// SLV0_SUBADD (0x16)
///
/// Register address on the first external sensor (R/W)
#[register(address = SensHubReg::Slv0Subadd, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv0Subadd {
    #[bits(8)]
    pub slave0_reg: u8,
}

/// SLV0_CONFIG (0x17)
///
/// First external sensor configuration register (R/W)
#[register(address = SensHubReg::Slv0Config, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv0Config {
    /// Number of read operations on slave 0.
    #[bits(3)]
    pub slave0_numop: u8,
    /// Enables batching in FIFO of slave 0 data. Default: 0.
    #[bits(1)]
    pub batch_ext_sens_0_en: u8,
    #[bits(2, access = RO)]
    not_used0: u8,
    /// Sensor hub output data rate. Default: 00 (104 Hz).
    #[bits(2)]
    pub shub_odr: u8,
}

/// SLV1_ADD (0x18)
///
/// I2C slave address of the second external sensor (R/W)
#[register(address = SensHubReg::Slv1Add, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv1Add {
    /// Enables read operation on slave 1.
    #[bits(1)]
    pub r_1: u8,
    /// 7-bit I2C address of slave 1.
    #[bits(7)]
    pub slave1_add: u8,
}

/// SLV1_SUBADD (0x19)
///
/// Register address on the second external sensor (R/W)
#[register(address = SensHubReg::Slv1Subadd, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv1Subadd {
    #[bits(8)]
    pub slave1_reg: u8,
}

/// SLV1_CONFIG (0x1A)
///
/// Second external sensor configuration register (R/W)
#[register(address = SensHubReg::Slv1Config, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv1Config {
    /// Number of read operations on slave 1.
    #[bits(3)]
    pub slave1_numop: u8,
    /// Enables batching in FIFO of slave 1 data. Default: 0.
    #[bits(1)]
    pub batch_ext_sens_1_en: u8,
    #[bits(4, access = RO)]
    not_used0: u8,
}

/// SLV2_ADD (0x1B)
///
/// I2C slave address of the third external sensor (R/W)
#[register(address = SensHubReg::Slv2Add, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv2Add {
    /// Enables read operation on slave 2.
    #[bits(1)]
    pub r_2: u8,
    /// 7-bit I2C address of slave 2.
    #[bits(7)]
    pub slave2_add: u8,
}

/// SLV2_SUBADD (0x1C)
///
/// Register address on the third external sensor (R/W)
#[register(address = SensHubReg::Slv2Subadd, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv2Subadd {
    #[bits(8)]
    pub slave2_reg: u8,
}

/// SLV2_CONFIG (0x1D)
///
/// Third external sensor configuration register (R/W)
#[register(address = SensHubReg::Slv2Config, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv2Config {
    /// Number of read operations on slave 2.
    #[bits(3)]
    pub slave2_numop: u8,
    /// Enables batching in FIFO of slave 2 data. Default: 0.
    #[bits(1)]
    pub batch_ext_sens_2_en: u8,
    #[bits(4, access = RO)]
    not_used0: u8,
}

/// SLV3_ADD (0x1E)
///
/// I2C slave address of the fourth external sensor (R/W)
#[register(address = SensHubReg::Slv3Add, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv3Add {
    /// Enables read operation on slave 3.
    #[bits(1)]
    pub r_3: u8,
    /// 7-bit I2C address of slave 3.
    #[bits(7)]
    pub slave3_add: u8,
}

/// SLV3_SUBADD (0x1F)
///
/// Register address on the fourth external sensor (R/W)
#[register(address = SensHubReg::Slv3Subadd, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv3Subadd {
    #[bits(8)]
    pub slave3_reg: u8,
}

/// SLV3_CONFIG (0x20)
///
/// Fourth external sensor configuration register (R/W)
#[register(address = SensHubReg::Slv3Config, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Slv3Config {
    /// Number of read operations on slave 3.
    #[bits(3)]
    pub slave3_numop: u8,
    /// Enables batching in FIFO of slave 3 data. Default: 0.
    #[bits(1)]
    pub batch_ext_sens_3_en: u8,
    #[bits(4, access = RO)]
    not_used0: u8,
}

/// DATAWRITE_SLV0 (0x21)
///
/// Data to be written into the slave 0 device (R/W)
#[register(address = SensHubReg::DatawriteSlv0, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct DatawriteSlv0 {
    #[bits(8)]
    pub slave0_dataw: u8,
}

/// STATUS_MASTER (0x22)
///
/// Sensor hub source register (R)
#[register(address = SensHubReg::StatusMaster, access_type = SensorHubState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct StatusMaster {
    /// Sensor hub communication concluded.
    #[bits(1)]
    pub sens_hub_endop: u8,
    #[bits(2, access = RO)]
    not_used0: u8,
    /// Slave 0 not-acknowledge status.
    #[bits(1)]
    pub slave0_nack: u8,
    /// Slave 1 not-acknowledge status.
    #[bits(1)]
    pub slave1_nack: u8,
    /// Slave 2 not-acknowledge status.
    #[bits(1)]
    pub slave2_nack: u8,
    /// Slave 3 not-acknowledge status.
    #[bits(1)]
    pub slave3_nack: u8,
    /// Write-once operation performed.
    #[bits(1)]
    pub wr_once_done: u8,
}

/// Number of external sensors read by the sensor hub.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum AuxSensOn {
    #[default]
    Slv0 = 0,
    Slv0Slv1 = 1,
    Slv0ToSlv2 = 2,
    AllSlv = 3,
}

/// Sensor hub output data rate.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum ShubOdr {
    #[default]
    _104hz = 0,
    _52hz = 1,
    _26hz = 2,
    _12_5hz = 3,
}
