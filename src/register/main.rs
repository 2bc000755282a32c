use crate::Error;
use crate::Lsm6dsox;
use bitfield_struct::bitfield;
use core::fmt::Debug;
use derive_more::TryFrom;
use embedded_hal::delay::DelayNs;
use st_mem_bank_macro::{named_register, register};
use st_mems_bus::BusOperation;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq)]
pub enum Reg {
    FuncCfgAccess = 0x01,
    PinCtrl = 0x02,
    FifoCtrl1 = 0x07,
    FifoCtrl2 = 0x08,
    FifoCtrl3 = 0x09,
    FifoCtrl4 = 0x0A,
    CounterBdrReg1 = 0x0B,
    CounterBdrReg2 = 0x0C,
    Int1Ctrl = 0x0D,
    Int2Ctrl = 0x0E,
    WhoAmI = 0x0F,
    Ctrl1Xl = 0x10,
    Ctrl2G = 0x11,
    Ctrl3C = 0x12,
    Ctrl4C = 0x13,
    Ctrl5C = 0x14,
    Ctrl6C = 0x15,
    Ctrl7G = 0x16,
    Ctrl8Xl = 0x17,
    Ctrl9Xl = 0x18,
    Ctrl10C = 0x19,
    AllIntSrc = 0x1A,
    WakeUpSrc = 0x1B,
    TapSrc = 0x1C,
    D6dSrc = 0x1D,
    StatusReg = 0x1E,
    OutTempL = 0x20,
    OutTempH = 0x21,
    OutxLG = 0x22,
    OutxHG = 0x23,
    OutyLG = 0x24,
    OutyHG = 0x25,
    OutzLG = 0x26,
    OutzHG = 0x27,
    OutxLA = 0x28,
    OutxHA = 0x29,
    OutyLA = 0x2A,
    OutyHA = 0x2B,
    OutzLA = 0x2C,
    OutzHA = 0x2D,
    EmbFuncStatusMainpage = 0x35,
    FsmStatusAMainpage = 0x36,
    FsmStatusBMainpage = 0x37,
    MlcStatusMainpage = 0x38,
    StatusMasterMainpage = 0x39,
    FifoStatus1 = 0x3A,
    FifoStatus2 = 0x3B,
    Timestamp0 = 0x40,
    Timestamp1 = 0x41,
    Timestamp2 = 0x42,
    Timestamp3 = 0x43,
    TapCfg0 = 0x56,
    TapCfg1 = 0x57,
    TapCfg2 = 0x58,
    TapThs6d = 0x59,
    IntDur2 = 0x5A,
    WakeUpThs = 0x5B,
    WakeUpDur = 0x5C,
    FreeFall = 0x5D,
    Md1Cfg = 0x5E,
    Md2Cfg = 0x5F,
    I3cBusAvb = 0x62,
    InternalFreqFine = 0x63,
    XOfsUsr = 0x73,
    YOfsUsr = 0x74,
    ZOfsUsr = 0x75,
    FifoDataOutTag = 0x78,
    FifoDataOutXL = 0x79,
    FifoDataOutXH = 0x7A,
    FifoDataOutYL = 0x7B,
    FifoDataOutYH = 0x7C,
    FifoDataOutZL = 0x7D,
    FifoDataOutZH = 0x7E,
}

/// FUNC_CFG_ACCESS (0x01)
///
/// Enable embedded functions register access (R/W)
#[register(address = Reg::FuncCfgAccess, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FuncCfgAccess {
    #[bits(6, access = RO, default = 0)]
    not_used0: u8,
    /// Enables access to the sensor hub (I2C master) registers. Default: 0.
    #[bits(1, default = 0)]
    pub shub_reg_access: u8,
    /// Enables access to the embedded functions configuration registers. Default: 0.
    #[bits(1, default = 0)]
    pub func_cfg_access: u8,
}

/// PIN_CTRL (0x02)
///
/// SDO pin pull-up control register (R/W)
#[register(address = Reg::PinCtrl, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct PinCtrl {
    #[bits(6, access = RO, default = 0b111111)]
    not_used0: u8,
    /// Enables pull-up on SDO pin. Default: 0 (disabled).
    #[bits(1, default = 0)]
    pub sdo_pu_en: u8,
    /// Disables pull-up on OCS_Aux and SDO_Aux pins. Default: 0 (enabled).
    #[bits(1, default = 0)]
    pub ois_pu_dis: u8,
}

/// FIFO_CTRL1 (0x07)
///
/// FIFO control register 1 (R/W); watermark threshold bits WTM\[7:0\]
#[register(address = Reg::FifoCtrl1, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FifoCtrl1 {
    /// FIFO watermark threshold, low 8 bits; 1 LSB = TAG (1 byte) + 1 sensor (6 bytes).
    #[bits(8)]
    pub wtm: u8,
}

/// FIFO_CTRL2 (0x08)
///
/// FIFO control register 2 (R/W)
#[register(address = Reg::FifoCtrl2, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FifoCtrl2 {
    /// FIFO watermark threshold bit 8.
    #[bits(1)]
    pub wtm: u8,
    /// Configures the compression algorithm to write non-compressed data at each rate.
    #[bits(2)]
    pub uncoptr_rate: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Enables ODR CHANGE virtual sensor batching in FIFO. Default: 0 (disabled).
    #[bits(1)]
    pub odrchg_en: u8,
    #[bits(1, access = RO)]
    not_used1: u8,
    /// Enables/disables compression algorithm runtime. Default: 0.
    #[bits(1)]
    pub fifo_compr_rt_en: u8,
    /// Sensing chain FIFO stop values memorization at threshold level. Default: 0.
    #[bits(1)]
    pub stop_on_wtm: u8,
}

/// FIFO_CTRL3 (0x09)
///
/// FIFO control register 3 (R/W); batch data rates
#[register(address = Reg::FifoCtrl3, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FifoCtrl3 {
    /// Selects batch data rate for accelerometer data. Default: 0000 (not batched).
    #[bits(4)]
    pub bdr_xl: u8,
    /// Selects batch data rate for gyroscope data. Default: 0000 (not batched).
    #[bits(4)]
    pub bdr_gy: u8,
}

/// FIFO_CTRL4 (0x0A)
///
/// FIFO control register 4 (R/W)
#[register(address = Reg::FifoCtrl4, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FifoCtrl4 {
    /// FIFO mode selection. Default: 000 (bypass).
    #[bits(3)]
    pub fifo_mode: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Selects batch data rate for temperature data. Default: 00 (not batched).
    #[bits(2)]
    pub odr_t_batch: u8,
    /// Selects decimation for timestamp batching in FIFO. Default: 00 (not batched).
    #[bits(2)]
    pub odr_ts_batch: u8,
}

/// COUNTER_BDR_REG1 (0x0B)
///
/// Counter batch data rate register 1 (R/W)
#[register(address = Reg::CounterBdrReg1, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct CounterBdrReg1 {
    /// Batch event counter threshold, bits \[10:8\].
    #[bits(3)]
    pub cnt_bdr_th: u8,
    #[bits(2, access = RO)]
    not_used0: u8,
    /// Selects the trigger for the internal counter of batch events; 0=XL, 1=GY.
    #[bits(1)]
    pub trig_counter_bdr: u8,
    /// Resets the internal counter of batch events. Default: 0.
    #[bits(1)]
    pub rst_counter_bdr: u8,
    /// Enables pulsed data-ready mode; 0=latched, 1=pulsed (75 us). Default: 0.
    #[bits(1)]
    pub dataready_pulsed: u8,
}

/// COUNTER_BDR_REG2 (0x0C)
///
/// Counter batch data rate register 2 (R/W); threshold bits \[7:0\]
#[register(address = Reg::CounterBdrReg2, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct CounterBdrReg2 {
    /// Batch event counter threshold, low 8 bits.
    #[bits(8)]
    pub cnt_bdr_th: u8,
}

/// INT1_CTRL (0x0D)
///
/// INT1 pin control register (R/W)
#[register(address = Reg::Int1Ctrl, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Int1Ctrl {
    /// Enables accelerometer data-ready interrupt on INT1 pin. Default: 0.
    #[bits(1)]
    pub int1_drdy_xl: u8,
    /// Enables gyroscope data-ready interrupt on INT1 pin. Default: 0.
    #[bits(1)]
    pub int1_drdy_g: u8,
    /// Enables boot status on INT1 pin. Default: 0.
    #[bits(1)]
    pub int1_boot: u8,
    /// Enables FIFO threshold interrupt on INT1 pin. Default: 0.
    #[bits(1)]
    pub int1_fifo_th: u8,
    /// Enables FIFO overrun interrupt on INT1 pin. Default: 0.
    #[bits(1)]
    pub int1_fifo_ovr: u8,
    /// Enables FIFO full flag interrupt on INT1 pin. Default: 0.
    #[bits(1)]
    pub int1_fifo_full: u8,
    /// Enables COUNTER_BDR_IA interrupt on INT1 pin. Default: 0.
    #[bits(1)]
    pub int1_cnt_bdr: u8,
    /// Sends DEN_DRDY (DEN stamped on sensor data flag) to INT1 pin. Default: 0.
    #[bits(1)]
    pub den_drdy_flag: u8,
}

/// INT2_CTRL (0x0E)
///
/// INT2 pin control register (R/W)
#[register(address = Reg::Int2Ctrl, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Int2Ctrl {
    /// Enables accelerometer data-ready interrupt on INT2 pin. Default: 0.
    #[bits(1)]
    pub int2_drdy_xl: u8,
    /// Enables gyroscope data-ready interrupt on INT2 pin. Default: 0.
    #[bits(1)]
    pub int2_drdy_g: u8,
    /// Enables temperature data-ready interrupt on INT2 pin. Default: 0.
    #[bits(1)]
    pub int2_drdy_temp: u8,
    /// Enables FIFO threshold interrupt on INT2 pin. Default: 0.
    #[bits(1)]
    pub int2_fifo_th: u8,
    /// Enables FIFO overrun interrupt on INT2 pin. Default: 0.
    #[bits(1)]
    pub int2_fifo_ovr: u8,
    /// Enables FIFO full flag interrupt on INT2 pin. Default: 0.
    #[bits(1)]
    pub int2_fifo_full: u8,
    /// Enables COUNTER_BDR_IA interrupt on INT2 pin. Default: 0.
    #[bits(1)]
    pub int2_cnt_bdr: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
}

/// WHO_AM_I (0x0F)
///
/// Device identification register (R); fixed at 0x6C
#[register(address = Reg::WhoAmI, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WhoAmI {
    #[bits(8, access = RO)]
    pub id: u8,
}

/// CTRL1_XL (0x10)
///
/// Accelerometer control register 1 (R/W)
#[register(address = Reg::Ctrl1Xl, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl1Xl {
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Accelerometer high-resolution selection (output from LPF2 stage). Default: 0.
    #[bits(1)]
    pub lpf2_xl_en: u8,
    /// Accelerometer full-scale selection. Default: 00 (±2 g).
    #[bits(2)]
    pub fs_xl: u8,
    /// Accelerometer output data rate selection. Default: 0000 (power-down).
    #[bits(4)]
    pub odr_xl: u8,
}

/// CTRL2_G (0x11)
///
/// Gyroscope control register 2 (R/W)
#[register(address = Reg::Ctrl2G, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl2G {
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Gyroscope full-scale selection (FS_125 + FS_G\[1:0\]). Default: 000 (±250 dps).
    #[bits(3)]
    pub fs_g: u8,
    /// Gyroscope output data rate selection. Default: 0000 (power-down).
    #[bits(4)]
    pub odr_g: u8,
}

/// CTRL3_C (0x12)
///
/// Control register 3 (R/W)
#[register(address = Reg::Ctrl3C, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl3C {
    /// Software reset; restores the default values in user registers. Self-cleared.
    #[bits(1)]
    pub sw_reset: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Register address automatically incremented during multiple byte access. Default: 1.
    #[bits(1, default = 1)]
    pub if_inc: u8,
    /// SPI serial interface mode selection; 0=4-wire, 1=3-wire. Default: 0.
    #[bits(1)]
    pub sim: u8,
    /// Push-pull/open-drain selection on INT1 and INT2 pins. Default: 0 (push-pull).
    #[bits(1)]
    pub pp_od: u8,
    /// Interrupt activation level; 0=active high, 1=active low. Default: 0.
    #[bits(1)]
    pub h_lactive: u8,
    /// Block data update; output registers not updated until MSB and LSB read. Default: 0.
    #[bits(1)]
    pub bdu: u8,
    /// Reboots memory content; reloads the calibration parameters. Self-cleared.
    #[bits(1)]
    pub boot: u8,
}

/// CTRL4_C (0x13)
///
/// Control register 4 (R/W)
#[register(address = Reg::Ctrl4C, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl4C {
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Enables gyroscope digital LPF1; bandwidth selected through FTYPE in CTRL6_C.
    #[bits(1)]
    pub lpf1_sel_g: u8,
    /// Disables I2C interface. Default: 0 (enabled).
    #[bits(1)]
    pub i2c_disable: u8,
    /// Masks DRDY on pin until filter settling ends. Default: 0.
    #[bits(1)]
    pub drdy_mask: u8,
    #[bits(1, access = RO)]
    not_used1: u8,
    /// All interrupt signals available on INT1 pin enable. Default: 0.
    #[bits(1)]
    pub int2_on_int1: u8,
    /// Enables gyroscope sleep mode. Default: 0.
    #[bits(1)]
    pub sleep_g: u8,
    #[bits(1, access = RO)]
    not_used2: u8,
}

/// CTRL5_C (0x14)
///
/// Control register 5 (R/W)
#[register(address = Reg::Ctrl5C, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl5C {
    /// Accelerometer self-test selection. Default: 00 (disabled).
    #[bits(2)]
    pub st_xl: u8,
    /// Gyroscope self-test selection. Default: 00 (disabled).
    #[bits(2)]
    pub st_g: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Circular burst-mode (rounding) read from output registers. Default: 00.
    #[bits(2)]
    pub rounding: u8,
    /// Accelerometer ultra-low-power mode enable. Default: 0.
    #[bits(1)]
    pub xl_ulp_en: u8,
}

/// CTRL6_C (0x15)
///
/// Control register 6 (R/W)
#[register(address = Reg::Ctrl6C, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl6C {
    /// Gyroscope low-pass filter LPF1 bandwidth selection.
    #[bits(3)]
    pub ftype: u8,
    /// Weight of XL user offset bits; 0=2^-10 g/LSB, 1=2^-6 g/LSB. Default: 0.
    #[bits(1)]
    pub usr_off_w: u8,
    /// Disables high-performance operating mode for accelerometer. Default: 0.
    #[bits(1)]
    pub xl_hm_mode: u8,
    /// DEN trigger mode selection.
    #[bits(3)]
    pub den_mode: u8,
}

/// CTRL7_G (0x16)
///
/// Control register 7 (R/W)
#[register(address = Reg::Ctrl7G, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl7G {
    /// Enables the OIS chain when OIS_ON_EN is set. Default: 0.
    #[bits(1)]
    pub ois_on: u8,
    /// Enables accelerometer user offset correction block on output. Default: 0.
    #[bits(1)]
    pub usr_off_on_out: u8,
    /// Selects the OIS chain enable source; 0=aux SPI, 1=primary interface. Default: 0.
    #[bits(1)]
    pub ois_on_en: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Gyroscope digital HP filter cutoff selection. Default: 00.
    #[bits(2)]
    pub hpm_g: u8,
    /// Enables gyroscope digital high-pass filter; active only in HP mode.
    #[bits(1)]
    pub hp_en_g: u8,
    /// Disables high-performance operating mode for gyroscope. Default: 0.
    #[bits(1)]
    pub g_hm_mode: u8,
}

/// CTRL8_XL (0x17)
///
/// Control register 8 (R/W)
#[register(address = Reg::Ctrl8Xl, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl8Xl {
    /// LPF2 on 6D function selection. Default: 0.
    #[bits(1)]
    pub low_pass_on_6d: u8,
    /// Accelerometer full-scale management between UI chain and OIS chain. Default: 0.
    #[bits(1)]
    pub xl_fs_mode: u8,
    /// Accelerometer slope filter / high-pass filter selection. Default: 0.
    #[bits(1)]
    pub hp_slope_xl_en: u8,
    /// Enables accelerometer LPF2 and HPF fast-settling mode. Default: 0.
    #[bits(1)]
    pub fastsettl_mode_xl: u8,
    /// Enables accelerometer high-pass filter reference mode. Default: 0.
    #[bits(1)]
    pub hp_ref_mode_xl: u8,
    /// Accelerometer LPF2 and HP filter configuration and cutoff setting.
    #[bits(3)]
    pub hpcf_xl: u8,
}

/// CTRL9_XL (0x18)
///
/// Control register 9 (R/W)
#[register(address = Reg::Ctrl9Xl, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl9Xl {
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Disables MIPI I3C communication protocol. Default: 0.
    #[bits(1)]
    pub i3c_disable: u8,
    /// DEN active level configuration. Default: 0.
    #[bits(1)]
    pub den_lh: u8,
    /// Extends DEN functionality to accelerometer sensor. Default: 0.
    #[bits(1)]
    pub den_xl_en: u8,
    /// DEN stamping sensor selection; 0=gyroscope, 1=accelerometer. Default: 0.
    #[bits(1)]
    pub den_xl_g: u8,
    /// DEN value stored in LSB of Z-axis. Default: 1.
    #[bits(1, default = 1)]
    pub den_z: u8,
    /// DEN value stored in LSB of Y-axis. Default: 1.
    #[bits(1, default = 1)]
    pub den_y: u8,
    /// DEN value stored in LSB of X-axis. Default: 1.
    #[bits(1, default = 1)]
    pub den_x: u8,
}

/// CTRL10_C (0x19)
///
/// Control register 10 (R/W)
#[register(address = Reg::Ctrl10C, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ctrl10C {
    #[bits(5, access = RO)]
    not_used0: u8,
    /// Enables timestamp counter. Default: 0.
    #[bits(1)]
    pub timestamp_en: u8,
    #[bits(2, access = RO)]
    not_used1: u8,
}

/// ALL_INT_SRC (0x1A)
///
/// Source register for all interrupts (R)
#[register(address = Reg::AllIntSrc, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct AllIntSrc {
    /// Free-fall event status.
    #[bits(1)]
    pub ff_ia: u8,
    /// Wake-up event status.
    #[bits(1)]
    pub wu_ia: u8,
    /// Single-tap event status.
    #[bits(1)]
    pub single_tap: u8,
    /// Double-tap event status.
    #[bits(1)]
    pub double_tap: u8,
    /// 6D orientation change event status.
    #[bits(1)]
    pub d6d_ia: u8,
    /// Activity/inactivity change event status.
    #[bits(1)]
    pub sleep_change_ia: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Timestamp counter overflow alert (within 6.4 ms of full).
    #[bits(1)]
    pub timestamp_endcount: u8,
}

/// WAKE_UP_SRC (0x1B)
///
/// Wake-up interrupt source register (R)
#[register(address = Reg::WakeUpSrc, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WakeUpSrc {
    /// Wake-up event on Z-axis status.
    #[bits(1)]
    pub z_wu: u8,
    /// Wake-up event on Y-axis status.
    #[bits(1)]
    pub y_wu: u8,
    /// Wake-up event on X-axis status.
    #[bits(1)]
    pub x_wu: u8,
    /// Wake-up event status.
    #[bits(1)]
    pub wu_ia: u8,
    /// Sleep status bit.
    #[bits(1)]
    pub sleep_state: u8,
    /// Free-fall event status.
    #[bits(1)]
    pub ff_ia: u8,
    /// Activity/inactivity change event status.
    #[bits(1)]
    pub sleep_change_ia: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
}

/// TAP_SRC (0x1C)
///
/// Tap source register (R)
#[register(address = Reg::TapSrc, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TapSrc {
    /// Tap event detection on Z-axis status.
    #[bits(1)]
    pub z_tap: u8,
    /// Tap event detection on Y-axis status.
    #[bits(1)]
    pub y_tap: u8,
    /// Tap event detection on X-axis status.
    #[bits(1)]
    pub x_tap: u8,
    /// Sign of acceleration detected by tap event; 0=positive, 1=negative.
    #[bits(1)]
    pub tap_sign: u8,
    /// Double-tap event status.
    #[bits(1)]
    pub double_tap: u8,
    /// Single-tap event status.
    #[bits(1)]
    pub single_tap: u8,
    /// Tap event status.
    #[bits(1)]
    pub tap_ia: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
}

/// D6D_SRC (0x1D)
///
/// Portrait, landscape, face-up and face-down source register (R)
#[register(address = Reg::D6dSrc, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct D6dSrc {
    /// X-axis low event (under threshold).
    #[bits(1)]
    pub xl: u8,
    /// X-axis high event (over threshold).
    #[bits(1)]
    pub xh: u8,
    /// Y-axis low event (under threshold).
    #[bits(1)]
    pub yl: u8,
    /// Y-axis high event (over threshold).
    #[bits(1)]
    pub yh: u8,
    /// Z-axis low event (under threshold).
    #[bits(1)]
    pub zl: u8,
    /// Z-axis high event (over threshold).
    #[bits(1)]
    pub zh: u8,
    /// Orientation change interrupt status.
    #[bits(1)]
    pub d6d_ia: u8,
    /// DEN data-ready flag; set when data output is related to DEN.
    #[bits(1)]
    pub den_drdy: u8,
}

/// STATUS_REG (0x1E)
///
/// Status register (R)
#[register(address = Reg::StatusReg, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct StatusReg {
    /// Accelerometer new data available flag.
    #[bits(1)]
    pub xlda: u8,
    /// Gyroscope new data available flag.
    #[bits(1)]
    pub gda: u8,
    /// Temperature new data available flag.
    #[bits(1)]
    pub tda: u8,
    #[bits(5, access = RO)]
    not_used0: u8,
}

/// OUT_TEMP (0x20 - 0x21)
///
/// Temperature sensor output data (16-bit two's complement)
#[register(address = Reg::OutTempL, access_type = Lsm6dsox, generics = 2)]
pub struct OutTemp(pub i16);

/// OUTX_L_G - OUTZ_H_G (0x22 - 0x27)
///
/// Gyroscope X, Y, Z axis angular rate output (3 x 16-bit two's complement)
#[named_register(address = Reg::OutxLG, access_type = Lsm6dsox, generics = 2)]
pub struct OutXYZG {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// OUTX_L_A - OUTZ_H_A (0x28 - 0x2D)
///
/// Accelerometer X, Y, Z axis linear acceleration output (3 x 16-bit two's complement)
#[named_register(address = Reg::OutxLA, access_type = Lsm6dsox, generics = 2)]
pub struct OutXYZA {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// EMB_FUNC_STATUS_MAINPAGE (0x35)
///
/// Embedded function status register, user-bank mirror (R)
#[register(address = Reg::EmbFuncStatusMainpage, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncStatusMainpage {
    #[bits(3, access = RO)]
    not_used0: u8,
    /// Step detection interrupt status.
    #[bits(1)]
    pub is_step_det: u8,
    /// Tilt interrupt status.
    #[bits(1)]
    pub is_tilt: u8,
    /// Significant motion interrupt status.
    #[bits(1)]
    pub is_sigmot: u8,
    #[bits(1, access = RO)]
    not_used1: u8,
    /// FSM long counter timeout interrupt status.
    #[bits(1)]
    pub is_fsm_lc: u8,
}

/// FSM_STATUS_A_MAINPAGE (0x36)
///
/// FSM 1-8 interrupt status register, user-bank mirror (R)
#[register(address = Reg::FsmStatusAMainpage, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmStatusAMainpage {
    /// FSM1 interrupt status.
    #[bits(1)]
    pub is_fsm1: u8,
    /// FSM2 interrupt status.
    #[bits(1)]
    pub is_fsm2: u8,
    /// FSM3 interrupt status.
    #[bits(1)]
    pub is_fsm3: u8,
    /// FSM4 interrupt status.
    #[bits(1)]
    pub is_fsm4: u8,
    /// FSM5 interrupt status.
    #[bits(1)]
    pub is_fsm5: u8,
    /// FSM6 interrupt status.
    #[bits(1)]
    pub is_fsm6: u8,
    /// FSM7 interrupt status.
    #[bits(1)]
    pub is_fsm7: u8,
    /// FSM8 interrupt status.
    #[bits(1)]
    pub is_fsm8: u8,
}

/// FSM_STATUS_B_MAINPAGE (0x37)
///
/// FSM 9-16 interrupt status register, user-bank mirror (R)
#[register(address = Reg::FsmStatusBMainpage, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmStatusBMainpage {
    /// FSM9 interrupt status.
    #[bits(1)]
    pub is_fsm9: u8,
    /// FSM10 interrupt status.
    #[bits(1)]
    pub is_fsm10: u8,
    /// FSM11 interrupt status.
    #[bits(1)]
    pub is_fsm11: u8,
    /// FSM12 interrupt status.
    #[bits(1)]
    pub is_fsm12: u8,
    /// FSM13 interrupt status.
    #[bits(1)]
    pub is_fsm13: u8,
    /// FSM14 interrupt status.
    #[bits(1)]
    pub is_fsm14: u8,
    /// FSM15 interrupt status.
    #[bits(1)]
    pub is_fsm15: u8,
    /// FSM16 interrupt status.
    #[bits(1)]
    pub is_fsm16: u8,
}

/// MLC_STATUS_MAINPAGE (0x38)
///
/// Machine learning core interrupt status register, user-bank mirror (R)
#[register(address = Reg::MlcStatusMainpage, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct MlcStatusMainpage {
    /// MLC1 interrupt status.
    #[bits(1)]
    pub is_mlc1: u8,
    /// MLC2 interrupt status.
    #[bits(1)]
    pub is_mlc2: u8,
    /// MLC3 interrupt status.
    #[bits(1)]
    pub is_mlc3: u8,
    /// MLC4 interrupt status.
    #[bits(1)]
    pub is_mlc4: u8,
    /// MLC5 interrupt status.
    #[bits(1)]
    pub is_mlc5: u8,
    /// MLC6 interrupt status.
    #[bits(1)]
    pub is_mlc6: u8,
    /// MLC7 interrupt status.
    #[bits(1)]
    pub is_mlc7: u8,
    /// MLC8 interrupt status.
    #[bits(1)]
    pub is_mlc8: u8,
}

/// STATUS_MASTER_MAINPAGE (0x39)
///
/// Sensor hub status register, user-bank mirror (R)
#[register(address = Reg::StatusMasterMainpage, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct StatusMasterMainpage {
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

/// FIFO_STATUS1 - FIFO_STATUS2 (0x3A - 0x3B)
///
/// FIFO status registers 1, 2 (R)
#[register(address = Reg::FifoStatus1, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u16, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u16, order = Lsb))]
pub struct FifoStatusReg {
    /// Number of unread sensor data (TAG + 6 bytes) stored in FIFO \[9:0\].
    #[bits(10)]
    pub diff_fifo: u16,
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Latched FIFO overrun status; reset when this register is read.
    #[bits(1)]
    pub fifo_ovr_latched: u8,
    /// Counter batch data rate interrupt active flag.
    #[bits(1)]
    pub counter_bdr_ia: u8,
    /// FIFO full (smart) interrupt active flag.
    #[bits(1)]
    pub fifo_full_ia: u8,
    /// FIFO overrun interrupt active flag.
    #[bits(1)]
    pub fifo_ovr_ia: u8,
    /// FIFO watermark interrupt active flag.
    #[bits(1)]
    pub fifo_wtm_ia: u8,
}

/// TIMESTAMP0 - TIMESTAMP3 (0x40 - 0x43)
///
/// Timestamp output; 32-bit word, 25 us/LSB resolution
#[register(address = Reg::Timestamp0, access_type = Lsm6dsox, generics = 2)]
pub struct Timestamp(pub u32);

/// TAP_CFG0 (0x56)
///
/// Tap, activity and interrupt basic configuration register (R/W)
#[register(address = Reg::TapCfg0, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TapCfg0 {
    /// Latched interrupt mode. Default: 0 (not latched).
    #[bits(1)]
    pub lir: u8,
    /// Enables Z-direction tap recognition. Default: 0.
    #[bits(1)]
    pub tap_z_en: u8,
    /// Enables Y-direction tap recognition. Default: 0.
    #[bits(1)]
    pub tap_y_en: u8,
    /// Enables X-direction tap recognition. Default: 0.
    #[bits(1)]
    pub tap_x_en: u8,
    /// HPF or slope filter selection on wake-up and activity/inactivity functions.
    #[bits(1)]
    pub slope_fds: u8,
    /// Activity/inactivity status routing on interrupt pins. Default: 0.
    #[bits(1)]
    pub sleep_status_on_int: u8,
    /// Clears latched interrupts when ALL_INT_SRC is read. Default: 0.
    #[bits(1)]
    pub int_clr_on_read: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
}

/// TAP_CFG1 (0x57)
///
/// Tap configuration register (R/W)
#[register(address = Reg::TapCfg1, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TapCfg1 {
    /// X-axis tap recognition threshold; 1 LSB = FS_XL / 32.
    #[bits(5)]
    pub tap_ths_x: u8,
    /// Selects the axis priority for tap detection.
    #[bits(3)]
    pub tap_priority: u8,
}

/// TAP_CFG2 (0x58)
///
/// Enables interrupt and inactivity functions, tap configuration (R/W)
#[register(address = Reg::TapCfg2, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TapCfg2 {
    /// Y-axis tap recognition threshold; 1 LSB = FS_XL / 32.
    #[bits(5)]
    pub tap_ths_y: u8,
    /// Enables activity/inactivity (sleep) function. Default: 00.
    #[bits(2)]
    pub inact_en: u8,
    /// Enables basic interrupts (6D/4D, free-fall, wake-up, tap, inactivity). Default: 0.
    #[bits(1)]
    pub interrupts_enable: u8,
}

/// TAP_THS_6D (0x59)
///
/// Portrait/landscape position and tap function threshold register (R/W)
#[register(address = Reg::TapThs6d, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TapThs6d {
    /// Z-axis tap recognition threshold; 1 LSB = FS_XL / 32.
    #[bits(5)]
    pub tap_ths_z: u8,
    /// Threshold for 4D/6D function. Default: 00 (80 degrees).
    #[bits(2)]
    pub sixd_ths: u8,
    /// Enables 4D orientation detection (Z-axis position detection disabled). Default: 0.
    #[bits(1)]
    pub d4d_en: u8,
}

/// INT_DUR2 (0x5A)
///
/// Tap recognition function time windows register (R/W)
#[register(address = Reg::IntDur2, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct IntDur2 {
    /// Maximum duration of overthreshold event; 1 LSB = 8/ODR_XL. Default: 00.
    #[bits(2)]
    pub shock: u8,
    /// Expected quiet time after a tap detection; 1 LSB = 4/ODR_XL. Default: 00.
    #[bits(2)]
    pub quiet: u8,
    /// Maximum time gap for double-tap recognition; 1 LSB = 32/ODR_XL. Default: 0000.
    #[bits(4)]
    pub dur: u8,
}

/// WAKE_UP_THS (0x5B)
///
/// Single/double-tap selection and wake-up configuration (R/W)
#[register(address = Reg::WakeUpThs, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WakeUpThs {
    /// Wake-up threshold; weight depends on WAKE_THS_W in WAKE_UP_DUR.
    #[bits(6)]
    pub wk_ths: u8,
    /// Drives the low-pass filtered data with user offset correction to the wake-up function.
    #[bits(1)]
    pub usr_off_on_wu: u8,
    /// Enables single/double-tap event; 0=single only, 1=both. Default: 0.
    #[bits(1)]
    pub single_double_tap: u8,
}

/// WAKE_UP_DUR (0x5C)
///
/// Free-fall, wake-up and sleep mode functions duration setting register (R/W)
#[register(address = Reg::WakeUpDur, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WakeUpDur {
    /// Duration to go in sleep mode; 1 LSB = 512/ODR_XL. Default: 0000 (16/ODR_XL).
    #[bits(4)]
    pub sleep_dur: u8,
    /// Weight of 1 LSB of wake-up threshold; 0=FS_XL/64, 1=FS_XL/256. Default: 0.
    #[bits(1)]
    pub wake_ths_w: u8,
    /// Wake-up duration event; 1 LSB = 1/ODR_XL. Default: 00.
    #[bits(2)]
    pub wake_dur: u8,
    /// Free-fall duration event bit 5.
    #[bits(1)]
    pub ff_dur: u8,
}

/// FREE_FALL (0x5D)
///
/// Free-fall function duration setting register (R/W)
#[register(address = Reg::FreeFall, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FreeFall {
    /// Free-fall threshold setting. Default: 000 (156 mg).
    #[bits(3)]
    pub ff_ths: u8,
    /// Free-fall duration event, bits \[4:0\]; 1 LSB = 1/ODR_XL.
    #[bits(5)]
    pub ff_dur: u8,
}

/// MD1_CFG (0x5E)
///
/// Functions routing on INT1 register (R/W)
#[register(address = Reg::Md1Cfg, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Md1Cfg {
    /// Routes sensor hub communication concluded event on INT1. Default: 0.
    #[bits(1)]
    pub int1_shub: u8,
    /// Routes embedded functions event on INT1. Default: 0.
    #[bits(1)]
    pub int1_emb_func: u8,
    /// Routes 6D event on INT1. Default: 0.
    #[bits(1)]
    pub int1_6d: u8,
    /// Routes double-tap event on INT1. Default: 0.
    #[bits(1)]
    pub int1_double_tap: u8,
    /// Routes free-fall event on INT1. Default: 0.
    #[bits(1)]
    pub int1_ff: u8,
    /// Routes wake-up event on INT1. Default: 0.
    #[bits(1)]
    pub int1_wu: u8,
    /// Routes single-tap event on INT1. Default: 0.
    #[bits(1)]
    pub int1_single_tap: u8,
    /// Routes activity/inactivity event on INT1. Default: 0.
    #[bits(1)]
    pub int1_sleep_change: u8,
}

/// MD2_CFG (0x5F)
///
/// Functions routing on INT2 register (R/W)
#[register(address = Reg::Md2Cfg, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Md2Cfg {
    /// Routes timestamp overflow alert on INT2. Default: 0.
    #[bits(1)]
    pub int2_timestamp: u8,
    /// Routes embedded functions event on INT2. Default: 0.
    #[bits(1)]
    pub int2_emb_func: u8,
    /// Routes 6D event on INT2. Default: 0.
    #[bits(1)]
    pub int2_6d: u8,
    /// Routes double-tap event on INT2. Default: 0.
    #[bits(1)]
    pub int2_double_tap: u8,
    /// Routes free-fall event on INT2. Default: 0.
    #[bits(1)]
    pub int2_ff: u8,
    /// Routes wake-up event on INT2. Default: 0.
    #[bits(1)]
    pub int2_wu: u8,
    /// Routes single-tap event on INT2. Default: 0.
    #[bits(1)]
    pub int2_single_tap: u8,
    /// Routes activity/inactivity event on INT2. Default: 0.
    #[bits(1)]
    pub int2_sleep_change: u8,
}

/// I3C_BUS_AVB (0x62)
///
/// I3C bus available time selection register (R/W)
#[register(address = Reg::I3cBusAvb, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct I3cBusAvb {
    /// Forces INT1 pull-down disable. Default: 0.
    #[bits(1)]
    pub pd_dis_int1: u8,
    #[bits(2, access = RO)]
    not_used0: u8,
    /// Selects the bus available time for I3C in-band interrupts. Default: 00 (50 us).
    #[bits(2)]
    pub i3c_bus_avb_sel: u8,
    #[bits(3, access = RO)]
    not_used1: u8,
}

/// INTERNAL_FREQ_FINE (0x63)
///
/// Internal frequency deviation with respect to the typical (R); 0.15%/LSB, two's complement
#[register(address = Reg::InternalFreqFine, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct InternalFreqFine {
    #[bits(8)]
    pub freq_fine: i8,
}

/// X_OFS_USR (0x73)
///
/// Accelerometer X-axis user offset correction (R/W); two's complement, weight from USR_OFF_W
#[register(address = Reg::XOfsUsr, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct XOfsUsr {
    #[bits(8)]
    pub x_ofs_usr: i8,
}

/// Y_OFS_USR (0x74)
///
/// Accelerometer Y-axis user offset correction (R/W); two's complement, weight from USR_OFF_W
#[register(address = Reg::YOfsUsr, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct YOfsUsr {
    #[bits(8)]
    pub y_ofs_usr: i8,
}

/// Z_OFS_USR (0x75)
///
/// Accelerometer Z-axis user offset correction (R/W); two's complement, weight from USR_OFF_W
#[register(address = Reg::ZOfsUsr, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct ZOfsUsr {
    #[bits(8)]
    pub z_ofs_usr: i8,
}

/// FIFO_DATA_OUT_TAG (0x78)
///
/// FIFO tag register (R).
/// Identifies the sensor source of the next 6-byte FIFO data set.
#[register(address = Reg::FifoDataOutTag, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FifoDataOutTag {
    /// Parity check of TAG content.
    #[bits(1, access = RO)]
    pub tag_parity: u8,
    /// 2-bit counter identifying the sensor time slot.
    #[bits(2, access = RO)]
    pub tag_cnt: u8,
    /// 5-bit FIFO tag identifying the sensor source.
    #[bits(5, access = RO)]
    pub tag_sensor: u8,
}

/// FIFO_DATA_OUT_X_L - FIFO_DATA_OUT_Z_H (0x79 - 0x7E)
///
/// FIFO data output (R); 6-byte data set interpreted per the record tag
#[register(address = Reg::FifoDataOutXL, access_type = Lsm6dsox, generics = 2)]
pub struct FifoDataOutXYZ(pub [u8; 6]);

/// Accelerometer full-scale selection.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FsXl {
    #[default]
    _2g = 0,
    _16g = 1,
    _4g = 2,
    _8g = 3,
}

/// Accelerometer output data rate selection.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum OdrXl {
    #[default]
    Off = 0,
    _12_5hz = 1,
    _26hz = 2,
    _52hz = 3,
    _104hz = 4,
    _208hz = 5,
    _417hz = 6,
    _833hz = 7,
    _1667hz = 8,
    _3333hz = 9,
    _6667hz = 10,
    /// Available in low-power mode only; 12.5 Hz in high-performance mode.
    _1_6hz = 11,
}

/// Gyroscope full-scale selection.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FsGy {
    #[default]
    _250dps = 0,
    _125dps = 1,
    _500dps = 2,
    _1000dps = 4,
    _2000dps = 6,
}

/// Gyroscope output data rate selection.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum OdrGy {
    #[default]
    Off = 0,
    _12_5hz = 1,
    _26hz = 2,
    _52hz = 3,
    _104hz = 4,
    _208hz = 5,
    _417hz = 6,
    _833hz = 7,
    _1667hz = 8,
    _3333hz = 9,
    _6667hz = 10,
}

/// Circular burst-mode (rounding) read configuration.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum Rounding {
    #[default]
    NoRound = 0,
    RoundXl = 1,
    RoundGy = 2,
    RoundGyXl = 3,
}

/// Weight of the accelerometer user offset words.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum UsrOffW {
    /// 2^-10 g/LSB (~1 mg).
    #[default]
    _1mgLsb = 0,
    /// 2^-6 g/LSB (~16 mg).
    _16mgLsb = 1,
}

/// Accelerometer power operating mode.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum XlHmMode {
    #[default]
    HighPerformanceMd = 0,
    LowNormalPowerMd = 1,
    UltraLowPowerMd = 2,
}

/// Gyroscope power operating mode.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum GyHmMode {
    #[default]
    GyHighPerformance = 0,
    GyNormal = 1,
}

/// Accelerometer self-test mode.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum StXl {
    #[default]
    XlStDisable = 0,
    XlStPositive = 1,
    XlStNegative = 2,
}

/// Gyroscope self-test mode.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum StGy {
    #[default]
    GyStDisable = 0,
    GyStPositive = 1,
    GyStNegative = 3,
}

/// Gyroscope LPF1 bandwidth selection.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum Ftype {
    #[default]
    UltraLight = 0,
    VeryLight = 1,
    Light = 2,
    Medium = 3,
    Strong = 4,
    VeryStrong = 5,
    Aggressive = 6,
    Xtreme = 7,
}

/// Accelerometer slope/high-pass/low-pass path configuration on output.
///
/// Bit 4 encodes hp_slope_xl_en, bit 5 hp_ref_mode_xl, bits \[2:0\] the cutoff.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum HpSlopeXlEn {
    #[default]
    HpPathDisableOnOut = 0x00,
    LpOdrDiv10 = 0x01,
    LpOdrDiv20 = 0x02,
    LpOdrDiv45 = 0x03,
    LpOdrDiv100 = 0x04,
    LpOdrDiv200 = 0x05,
    LpOdrDiv400 = 0x06,
    LpOdrDiv800 = 0x07,
    SlopeOdrDiv4 = 0x10,
    HpOdrDiv10 = 0x11,
    HpOdrDiv20 = 0x12,
    HpOdrDiv45 = 0x13,
    HpOdrDiv100 = 0x14,
    HpOdrDiv200 = 0x15,
    HpOdrDiv400 = 0x16,
    HpOdrDiv800 = 0x17,
    HpRefMdOdrDiv10 = 0x31,
    HpRefMdOdrDiv20 = 0x32,
    HpRefMdOdrDiv45 = 0x33,
    HpRefMdOdrDiv100 = 0x34,
    HpRefMdOdrDiv200 = 0x35,
    HpRefMdOdrDiv400 = 0x36,
    HpRefMdOdrDiv800 = 0x37,
}

/// Filter selection for wake-up and activity/inactivity functions.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum SlopeFds {
    #[default]
    UseSlopeDt = 0,
    UseHpfDt = 1,
}

/// Threshold for the 4D/6D orientation function.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum SixdThs {
    #[default]
    _80deg = 0,
    _70deg = 1,
    _60deg = 2,
    _50deg = 3,
}

/// Free-fall threshold selection.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FfThs {
    #[default]
    _156mg = 0,
    _219mg = 1,
    _250mg = 2,
    _312mg = 3,
    _344mg = 4,
    _406mg = 5,
    _469mg = 6,
    _500mg = 7,
}

/// Tap detection axis priority.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum TapPriority {
    #[default]
    Xyz = 0,
    Yxz = 1,
    Xzy = 2,
    Zyx = 3,
    Yzx = 5,
    Zxy = 6,
}

/// Single/double-tap event enable.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum TapMode {
    #[default]
    OnlySingle = 0,
    BothSingleDouble = 1,
}

/// Activity/inactivity (sleep) function configuration.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum ActMode {
    #[default]
    XlAndGyNotAffected = 0,
    XlLowPowerGyNotAffected = 1,
    XlLowPowerGySleep = 2,
    XlLowPowerGyPowerDown = 3,
}

/// Latched/pulsed interrupt notification mode.
///
/// Bit 0 drives the basic interrupt functions, bit 1 the embedded ones.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum Lir {
    #[default]
    AllIntPulsed = 0,
    BaseLatchedEmbPulsed = 1,
    BasePulsedEmbLatched = 2,
    AllIntLatched = 3,
}

/// Data-ready signal mode.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum DatareadyPulsed {
    #[default]
    DrdyLatched = 0,
    DrdyPulsed = 1,
}

/// Trigger source for the internal counter of batch events.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum TrigCounterBdr {
    #[default]
    XlBatchEvent = 0,
    GyroBatchEvent = 1,
}

/// FIFO operating mode.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FifoMode {
    #[default]
    BypassMode = 0,
    FifoMode = 1,
    StreamToFifoMode = 3,
    BypassToStreamMode = 4,
    StreamMode = 6,
    BypassToFifoMode = 7,
}

/// Accelerometer batch data rate in FIFO.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum BdrXl {
    #[default]
    XlNotBatched = 0,
    XlBatchedAt12_5hz = 1,
    XlBatchedAt26hz = 2,
    XlBatchedAt52hz = 3,
    XlBatchedAt104hz = 4,
    XlBatchedAt208hz = 5,
    XlBatchedAt417hz = 6,
    XlBatchedAt833hz = 7,
    XlBatchedAt1667hz = 8,
    XlBatchedAt3333hz = 9,
    XlBatchedAt6667hz = 10,
    XlBatchedAt1_6hz = 11,
}

/// Gyroscope batch data rate in FIFO.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum BdrGy {
    #[default]
    GyNotBatched = 0,
    GyBatchedAt12_5hz = 1,
    GyBatchedAt26hz = 2,
    GyBatchedAt52hz = 3,
    GyBatchedAt104hz = 4,
    GyBatchedAt208hz = 5,
    GyBatchedAt417hz = 6,
    GyBatchedAt833hz = 7,
    GyBatchedAt1667hz = 8,
    GyBatchedAt3333hz = 9,
    GyBatchedAt6667hz = 10,
    GyBatchedAt6_5hz = 11,
}

/// Temperature batch data rate in FIFO.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum OdrTBatch {
    #[default]
    TempNotBatched = 0,
    TempBatchedAt1_6hz = 1,
    TempBatchedAt12_5hz = 2,
    TempBatchedAt52hz = 3,
}

/// Decimation for timestamp batching in FIFO.
///
/// Write rate is the maximum rate between XL and GYRO BDR divided by the decimation.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum OdrTsBatch {
    #[default]
    NoDecimation = 0,
    Dec1 = 1,
    Dec8 = 2,
    Dec32 = 3,
}

/// FIFO compression algorithm configuration.
///
/// Bit 2 encodes the runtime enable, bits \[1:0\] the uncompressed data rate.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum UncoptrRate {
    #[default]
    CmpDisable = 0x00,
    CmpAlways = 0x04,
    Cmp8To1 = 0x05,
    Cmp16To1 = 0x06,
    Cmp32To1 = 0x07,
}

/// I3C bus available time for in-band interrupts.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum I3cBusAvbSel {
    #[default]
    _50us = 0,
    _2us = 1,
    _1ms = 2,
    _25ms = 3,
}

/// FIFO record tag.
///
/// Identifies the interpretation of the 6-byte data set following each tag
/// byte. Codes unknown to this driver decode to `SensorHubNack`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FifoTag {
    /// Gyroscope uncompressed data.
    GyroNc = 0x01,
    /// Accelerometer uncompressed data.
    XlNc = 0x02,
    /// Temperature data.
    Temperature = 0x03,
    /// Timestamp data (32-bit, 25 us/LSB).
    Timestamp = 0x04,
    /// Configuration-change record (ODR/FS/compression settings).
    CfgChange = 0x05,
    /// Accelerometer uncompressed data, time slot T-2.
    XlNcT2 = 0x06,
    /// Accelerometer uncompressed data, time slot T-1.
    XlNcT1 = 0x07,
    /// Accelerometer 2x compressed data.
    Xl2xC = 0x08,
    /// Accelerometer 3x compressed data.
    Xl3xC = 0x09,
    /// Gyroscope uncompressed data, time slot T-2.
    GyroNcT2 = 0x0A,
    /// Gyroscope uncompressed data, time slot T-1.
    GyroNcT1 = 0x0B,
    /// Gyroscope 2x compressed data.
    Gyro2xC = 0x0C,
    /// Gyroscope 3x compressed data.
    Gyro3xC = 0x0D,
    /// Sensor hub slave 0 data.
    SensorHubSlave0 = 0x0E,
    /// Sensor hub slave 1 data.
    SensorHubSlave1 = 0x0F,
    /// Sensor hub slave 2 data.
    SensorHubSlave2 = 0x10,
    /// Sensor hub slave 3 data.
    SensorHubSlave3 = 0x11,
    /// Step counter data.
    StepCounter = 0x12,
    /// Sensor hub slave not-acknowledge; also the fallback for unknown codes.
    #[default]
    SensorHubNack = 0x19,
}
