use crate::Error;
use crate::Lsm6dsox;
use bitfield_struct::bitfield;
use embedded_hal::delay::DelayNs;
use st_mem_bank_macro::adv_register;
use st_mems_bus::{BusOperation, EmbAdvFunctions};

#[repr(u16)]
#[derive(Clone, Copy, PartialEq)]
pub enum AdvPage {
    _0 = 0x000,
    _1 = 0x100,
}

#[repr(u16)]
#[derive(Clone, Copy, PartialEq)]
pub enum EmbAdv0Reg {
    MagSensitivityL = 0xBA,
    MagSensitivityH = 0xBB,
    MagOffxL = 0xC0,
    MagOffxH = 0xC1,
    MagOffyL = 0xC2,
    MagOffyH = 0xC3,
    MagOffzL = 0xC4,
    MagOffzH = 0xC5,
    MagSiXxL = 0xC6,
    MagSiXxH = 0xC7,
    MagSiXyL = 0xC8,
    MagSiXyH = 0xC9,
    MagSiXzL = 0xCA,
    MagSiXzH = 0xCB,
    MagSiYyL = 0xCC,
    MagSiYyH = 0xCD,
    MagSiYzL = 0xCE,
    MagSiYzH = 0xCF,
    MagSiZzL = 0xD0,
    MagSiZzH = 0xD1,
    MagCfgA = 0xD4,
    MagCfgB = 0xD5,
}

#[repr(u16)]
#[derive(Clone, Copy, PartialEq)]
pub enum EmbAdv1Reg {
    FsmLcTimeoutL = 0x7A,
    FsmLcTimeoutH = 0x7B,
    FsmPrograms = 0x7C,
    FsmStartAddL = 0x7E,
    FsmStartAddH = 0x7F,
    PedoCmdReg = 0x83,
    PedoDebStepsConf = 0x84,
    PedoScDeltatL = 0xD0,
    PedoScDeltatH = 0xD1,
}

/// MAG_SENSITIVITY (0xBA - 0xBB)
///
/// External magnetometer sensitivity value for the sensor hub (R/W).
/// 16-bit half-precision floating-point format.
#[adv_register(base_address = AdvPage::_0, address = EmbAdv0Reg::MagSensitivityL, access_type = Lsm6dsox, generics = 2)]
pub struct MagSensitivity(pub u16);

/// MAG_CFG_A (0xD4)
///
/// External magnetometer coordinates rotation register A (R/W)
#[adv_register(base_address = AdvPage::_0, address = EmbAdv0Reg::MagCfgA, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct MagCfgA {
    /// Magnetometer Z-axis coordinates rotation.
    #[bits(3)]
    pub mag_z_axis: u8,
    #[bits(1, access = RO)]
    not_used0: u8,
    /// Magnetometer Y-axis coordinates rotation.
    #[bits(3)]
    pub mag_y_axis: u8,
    #[bits(1, access = RO)]
    not_used1: u8,
}

/// MAG_CFG_B (0xD5)
///
/// External magnetometer coordinates rotation register B (R/W)
#[adv_register(base_address = AdvPage::_0, address = EmbAdv0Reg::MagCfgB, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct MagCfgB {
    /// Magnetometer X-axis coordinates rotation.
    #[bits(3)]
    pub mag_x_axis: u8,
    #[bits(5, access = RO)]
    not_used0: u8,
}

/// FSM_LC_TIMEOUT (0x7A - 0x7B)
///
/// FSM long counter timeout value (R/W); an interrupt is generated when the
/// long counter reaches this value
#[adv_register(base_address = AdvPage::_1, address = EmbAdv1Reg::FsmLcTimeoutL, access_type = Lsm6dsox, generics = 2)]
pub struct FsmLcTimeout(pub u16);

/// FSM_PROGRAMS (0x7C)
///
/// Number of FSM programs; must be less than or equal to 16 (R/W)
#[adv_register(base_address = AdvPage::_1, address = EmbAdv1Reg::FsmPrograms, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmProgramsReg {
    #[bits(8)]
    pub fsm_n_prog: u8,
}

/// FSM_START_ADD (0x7E - 0x7F)
///
/// FSM start address (R/W); first available address is 0x033C
#[adv_register(base_address = AdvPage::_1, address = EmbAdv1Reg::FsmStartAddL, access_type = Lsm6dsox, generics = 2)]
pub struct FsmStartAdd(pub u16);

/// PEDO_CMD_REG (0x83)
///
/// Pedometer configuration register (R/W)
#[adv_register(base_address = AdvPage::_1, address = EmbAdv1Reg::PedoCmdReg, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct PedoCmdReg {
    #[bits(2, access = RO)]
    not_used0: u8,
    /// Enables the false-positive rejection block. Default: 0.
    #[bits(1)]
    pub fp_rejection_en: u8,
    /// Sets the internal counter mode to count-and-carry at overflow. Default: 0.
    #[bits(1)]
    pub carry_count_en: u8,
    #[bits(4, access = RO)]
    not_used1: u8,
}

/// PEDO_DEB_STEPS_CONF (0x84)
///
/// Pedometer debounce number of steps register (R/W)
#[adv_register(base_address = AdvPage::_1, address = EmbAdv1Reg::PedoDebStepsConf, access_type = Lsm6dsox, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct PedoDebStepsConf {
    /// Debounce threshold; number of steps to be counted before step recognition.
    #[bits(8)]
    pub deb_step: u8,
}

/// PEDO_SC_DELTAT (0xD0 - 0xD1)
///
/// Time period register for step detection on delta time (R/W); 1 LSB = 6.4 ms
#[adv_register(base_address = AdvPage::_1, address = EmbAdv1Reg::PedoScDeltatL, access_type = Lsm6dsox, generics = 2)]
pub struct PedoScDeltat(pub u16);
