use crate::Error;
use crate::register::EmbedFuncState;
use bitfield_struct::bitfield;
use derive_more::TryFrom;
use embedded_hal::delay::DelayNs;
use st_mem_bank_macro::register;
use st_mems_bus::BusOperation;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq)]
pub enum EmbReg {
    PageSel = 0x02,
    EmbFuncEnA = 0x04,
    EmbFuncEnB = 0x05,
    PageAddress = 0x08,
    PageValue = 0x09,
    EmbFuncInt1 = 0x0A,
    FsmInt1A = 0x0B,
    FsmInt1B = 0x0C,
    MlcInt1 = 0x0D,
    EmbFuncInt2 = 0x0E,
    FsmInt2A = 0x0F,
    FsmInt2B = 0x10,
    MlcInt2 = 0x11,
    EmbFuncStatus = 0x12,
    FsmStatusA = 0x13,
    FsmStatusB = 0x14,
    MlcStatus = 0x15,
    PageRw = 0x17,
    EmbFuncFifoCfg = 0x44,
    FsmEnableA = 0x46,
    FsmEnableB = 0x47,
    FsmLongCounterL = 0x48,
    FsmLongCounterH = 0x49,
    FsmLongCounterClear = 0x4A,
    FsmOuts1 = 0x4C,
    FsmOuts2 = 0x4D,
    FsmOuts3 = 0x4E,
    FsmOuts4 = 0x4F,
    FsmOuts5 = 0x50,
    FsmOuts6 = 0x51,
    FsmOuts7 = 0x52,
    FsmOuts8 = 0x53,
    EmbFuncOdrCfgB = 0x5F,
    EmbFuncOdrCfgC = 0x60,
    StepCounterL = 0x62,
    StepCounterH = 0x63,
    EmbFuncSrc = 0x64,
    EmbFuncInitA = 0x66,
    EmbFuncInitB = 0x67,
    Mlc0Src = 0x70,
    Mlc1Src = 0x71,
    Mlc2Src = 0x72,
    Mlc3Src = 0x73,
    Mlc4Src = 0x74,
    Mlc5Src = 0x75,
    Mlc6Src = 0x76,
    Mlc7Src = 0x77,
}

/// PAGE_SEL (0x02)
///
/// Selects the advanced features dedicated page (R/W)
#[register(address = EmbReg::PageSel, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct PageSel {
    /// This bit must be set to 1 for the correct operation of the device.
    #[bits(1, default = 1)]
    pub not_used0: u8,
    #[bits(3, access = RO)]
    not_used1: u8,
    /// Page selection bits. Default: 0000.
    #[bits(4)]
    pub page_sel: u8,
}

/// EMB_FUNC_EN_A (0x04)
///
/// Embedded functions enable register (R/W)
#[register(address = EmbReg::EmbFuncEnA, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncEnA {
    #[bits(3, access = RO)]
    not_used0: u8,
    /// Enables pedometer algorithm. Default: 0 (disabled).
    #[bits(1)]
    pub pedo_en: u8,
    /// Enables tilt calculation algorithm. Default: 0 (disabled).
    #[bits(1)]
    pub tilt_en: u8,
    /// Enables significant motion detection. Default: 0 (disabled).
    #[bits(1)]
    pub sign_motion_en: u8,
    #[bits(2, access = RO)]
    not_used1: u8,
}

/// EMB_FUNC_EN_B (0x05)
///
/// Embedded functions enable register (R/W)
#[register(address = EmbReg::EmbFuncEnB, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncEnB {
    /// Enables finite state machine function. Default: 0 (disabled).
    #[bits(1)]
    pub fsm_en: u8,
    #[bits(2, access = RO)]
    not_used0: u8,
    /// Enables FIFO compression algorithm. Default: 0 (disabled).
    #[bits(1)]
    pub fifo_compr_en: u8,
    /// Enables machine learning core function. Default: 0 (disabled).
    #[bits(1)]
    pub mlc_en: u8,
    #[bits(3, access = RO)]
    not_used1: u8,
}

/// PAGE_ADDRESS (0x08)
///
/// Address of the register to be written/read in the selected advanced features page (R/W)
#[register(address = EmbReg::PageAddress, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct PageAddress {
    /// Offset within the selected page; auto-incremented on PAGE_VALUE access.
    #[bits(8)]
    pub page_addr: u8,
}

/// PAGE_VALUE (0x09)
///
/// Data port for the selected advanced features page line (R/W)
#[register(address = EmbReg::PageValue, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct PageValue {
    #[bits(8)]
    pub page_value: u8,
}

/// EMB_FUNC_INT1 (0x0A)
///
/// INT1 pin control register for embedded functions (R/W)
#[register(address = EmbReg::EmbFuncInt1, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncInt1 {
    #[bits(3, access = RO)]
    not_used0: u8,
    /// Routes pedometer step recognition event on INT1. Default: 0.
    #[bits(1)]
    pub int1_step_detector: u8,
    /// Routes tilt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_tilt: u8,
    /// Routes significant motion event on INT1. Default: 0.
    #[bits(1)]
    pub int1_sig_mot: u8,
    #[bits(1, access = RO)]
    not_used1: u8,
    /// Routes FSM long counter timeout event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm_lc: u8,
}

/// FSM_INT1_A (0x0B)
///
/// INT1 pin control register for FSM 1-8 interrupt events (R/W)
#[register(address = EmbReg::FsmInt1A, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmInt1A {
    /// Routes FSM1 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm1: u8,
    /// Routes FSM2 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm2: u8,
    /// Routes FSM3 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm3: u8,
    /// Routes FSM4 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm4: u8,
    /// Routes FSM5 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm5: u8,
    /// Routes FSM6 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm6: u8,
    /// Routes FSM7 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm7: u8,
    /// Routes FSM8 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm8: u8,
}

/// FSM_INT1_B (0x0C)
///
/// INT1 pin control register for FSM 9-16 interrupt events (R/W)
#[register(address = EmbReg::FsmInt1B, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmInt1B {
    /// Routes FSM9 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm9: u8,
    /// Routes FSM10 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm10: u8,
    /// Routes FSM11 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm11: u8,
    /// Routes FSM12 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm12: u8,
    /// Routes FSM13 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm13: u8,
    /// Routes FSM14 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm14: u8,
    /// Routes FSM15 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm15: u8,
    /// Routes FSM16 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_fsm16: u8,
}

/// MLC_INT1 (0x0D)
///
/// INT1 pin control register for MLC interrupt events (R/W)
#[register(address = EmbReg::MlcInt1, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct MlcInt1 {
    /// Routes MLC1 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_mlc1: u8,
    /// Routes MLC2 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_mlc2: u8,
    /// Routes MLC3 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_mlc3: u8,
    /// Routes MLC4 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_mlc4: u8,
    /// Routes MLC5 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_mlc5: u8,
    /// Routes MLC6 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_mlc6: u8,
    /// Routes MLC7 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_mlc7: u8,
    /// Routes MLC8 interrupt event on INT1. Default: 0.
    #[bits(1)]
    pub int1_mlc8: u8,
}

/// EMB_FUNC_INT2 (0x0E)
///
/// INT2 pin control register for embedded functions (R/W)
#[register(address = EmbReg::EmbFuncInt2, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncInt2 {
    #[bits(3, access = RO)]
    not_used0: u8,
    /// Routes pedometer step recognition event on INT2. Default: 0.
    #[bits(1)]
    pub int2_step_detector: u8,
    /// Routes tilt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_tilt: u8,
    /// Routes significant motion event on INT2. Default: 0.
    #[bits(1)]
    pub int2_sig_mot: u8,
    #[bits(1, access = RO)]
    not_used1: u8,
    /// Routes FSM long counter timeout event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm_lc: u8,
}

/// FSM_INT2_A (0x0F)
///
/// INT2 pin control register for FSM 1-8 interrupt events (R/W)
#[register(address = EmbReg::FsmInt2A, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmInt2A {
    /// Routes FSM1 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm1: u8,
    /// Routes FSM2 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm2: u8,
    /// Routes FSM3 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm3: u8,
    /// Routes FSM4 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm4: u8,
    /// Routes FSM5 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm5: u8,
    /// Routes FSM6 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm6: u8,
    /// Routes FSM7 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm7: u8,
    /// Routes FSM8 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm8: u8,
}

/// FSM_INT2_B (0x10)
///
/// INT2 pin control register for FSM 9-16 interrupt events (R/W)
#[register(address = EmbReg::FsmInt2B, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmInt2B {
    /// Routes FSM9 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm9: u8,
    /// Routes FSM10 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm10: u8,
    /// Routes FSM11 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm11: u8,
    /// Routes FSM12 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm12: u8,
    /// Routes FSM13 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm13: u8,
    /// Routes FSM14 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm14: u8,
    /// Routes FSM15 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm15: u8,
    /// Routes FSM16 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_fsm16: u8,
}

/// MLC_INT2 (0x11)
///
/// INT2 pin control register for MLC interrupt events (R/W)
#[register(address = EmbReg::MlcInt2, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct MlcInt2 {
    /// Routes MLC1 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_mlc1: u8,
    /// Routes MLC2 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_mlc2: u8,
    /// Routes MLC3 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_mlc3: u8,
    /// Routes MLC4 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_mlc4: u8,
    /// Routes MLC5 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_mlc5: u8,
    /// Routes MLC6 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_mlc6: u8,
    /// Routes MLC7 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_mlc7: u8,
    /// Routes MLC8 interrupt event on INT2. Default: 0.
    #[bits(1)]
    pub int2_mlc8: u8,
}

/// EMB_FUNC_STATUS (0x12)
///
/// Embedded function status register (R)
#[register(address = EmbReg::EmbFuncStatus, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncStatus {
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

/// FSM_STATUS_A (0x13)
///
/// FSM 1-8 interrupt status register (R)
#[register(address = EmbReg::FsmStatusA, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmStatusA {
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

/// FSM_STATUS_B (0x14)
///
/// FSM 9-16 interrupt status register (R)
#[register(address = EmbReg::FsmStatusB, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmStatusB {
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

/// MLC_STATUS (0x15)
///
/// Machine learning core interrupt status register (R)
#[register(address = EmbReg::MlcStatus, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct MlcStatus {
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

/// PAGE_RW (0x17)
///
/// Enables read/write mode on the advanced features page (R/W)
#[register(address = EmbReg::PageRw, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct PageRw {
    #[bits(5, access = RO)]
    not_used0: u8,
    /// Page access mode; 0b01 = read, 0b10 = write, 0b00 = disabled.
    #[bits(2)]
    pub page_rw: u8,
    /// Latched interrupt mode for embedded functions. Default: 0.
    #[bits(1)]
    pub emb_func_lir: u8,
}

/// EMB_FUNC_FIFO_CFG (0x44)
///
/// Embedded functions batching in FIFO configuration register (R/W)
#[register(address = EmbReg::EmbFuncFifoCfg, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncFifoCfg {
    #[bits(6, access = RO)]
    not_used0: u8,
    /// Enables batching step counter values in FIFO. Default: 0.
    #[bits(1)]
    pub pedo_fifo_en: u8,
    #[bits(1, access = RO)]
    not_used1: u8,
}

/// FSM_ENABLE_A (0x46)
///
/// FSM 1-8 enable register (R/W)
#[register(address = EmbReg::FsmEnableA, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmEnableA {
    /// Enables FSM1. Default: 0.
    #[bits(1)]
    pub fsm1_en: u8,
    /// Enables FSM2. Default: 0.
    #[bits(1)]
    pub fsm2_en: u8,
    /// Enables FSM3. Default: 0.
    #[bits(1)]
    pub fsm3_en: u8,
    /// Enables FSM4. Default: 0.
    #[bits(1)]
    pub fsm4_en: u8,
    /// Enables FSM5. Default: 0.
    #[bits(1)]
    pub fsm5_en: u8,
    /// Enables FSM6. Default: 0.
    #[bits(1)]
    pub fsm6_en: u8,
    /// Enables FSM7. Default: 0.
    #[bits(1)]
    pub fsm7_en: u8,
    /// Enables FSM8. Default: 0.
    #[bits(1)]
    pub fsm8_en: u8,
}

/// FSM_ENABLE_B (0x47)
///
/// FSM 9-16 enable register (R/W)
#[register(address = EmbReg::FsmEnableB, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmEnableB {
    /// Enables FSM9. Default: 0.
    #[bits(1)]
    pub fsm9_en: u8,
    /// Enables FSM10. Default: 0.
    #[bits(1)]
    pub fsm10_en: u8,
    /// Enables FSM11. Default: 0.
    #[bits(1)]
    pub fsm11_en: u8,
    /// Enables FSM12. Default: 0.
    #[bits(1)]
    pub fsm12_en: u8,
    /// Enables FSM13. Default: 0.
    #[bits(1)]
    pub fsm13_en: u8,
    /// Enables FSM14. Default: 0.
    #[bits(1)]
    pub fsm14_en: u8,
    /// Enables FSM15. Default: 0.
    #[bits(1)]
    pub fsm15_en: u8,
    /// Enables FSM16. Default: 0.
    #[bits(1)]
    pub fsm16_en: u8,
}

/// FSM_LONG_COUNTER_L - FSM_LONG_COUNTER_H (0x48 - 0x49)
///
/// FSM long counter status register (R/W); 16-bit word
#[register(address = EmbReg::FsmLongCounterL, access_type = EmbedFuncState, generics = 2)]
pub struct FsmLongCounter(pub u16);

/// FSM_LONG_COUNTER_CLEAR (0x4A)
///
/// FSM long counter reset register (R/W)
#[register(address = EmbReg::FsmLongCounterClear, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FsmLongCounterClear {
    /// Clears the FSM long counter; read back 0 when the clear is done.
    #[bits(1)]
    pub fsm_lc_clr: u8,
    /// Long counter cleared status.
    #[bits(1, access = RO)]
    pub fsm_lc_cleared: u8,
    #[bits(6, access = RO)]
    not_used0: u8,
}

/// FSM_OUTS1 - FSM_OUTS8 (0x4C - 0x53)
///
/// FSM output registers (R); one byte per state machine
#[register(address = EmbReg::FsmOuts1, access_type = EmbedFuncState, generics = 2)]
pub struct FsmOuts(pub [u8; 8]);

/// EMB_FUNC_ODR_CFG_B (0x5F)
///
/// FSM output data rate configuration register (R/W)
#[register(address = EmbReg::EmbFuncOdrCfgB, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncOdrCfgB {
    #[bits(3, access = RO, default = 0b011)]
    not_used0: u8,
    /// FSM output data rate selection. Default: 01 (26 Hz).
    #[bits(2, default = 0b01)]
    pub fsm_odr: u8,
    #[bits(3, access = RO, default = 0b010)]
    not_used1: u8,
}

/// EMB_FUNC_ODR_CFG_C (0x60)
///
/// MLC output data rate configuration register (R/W)
#[register(address = EmbReg::EmbFuncOdrCfgC, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncOdrCfgC {
    #[bits(4, access = RO, default = 0b0101)]
    not_used0: u8,
    /// MLC output data rate selection. Default: 01 (26 Hz).
    #[bits(2, default = 0b01)]
    pub mlc_odr: u8,
    #[bits(2, access = RO)]
    not_used1: u8,
}

/// STEP_COUNTER_L - STEP_COUNTER_H (0x62 - 0x63)
///
/// Step counter output register (R); 16-bit word
#[register(address = EmbReg::StepCounterL, access_type = EmbedFuncState, generics = 2)]
pub struct StepCounter(pub u16);

/// EMB_FUNC_SRC (0x64)
///
/// Embedded function source register (R/W)
#[register(address = EmbReg::EmbFuncSrc, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncSrc {
    #[bits(2, access = RO)]
    not_used0: u8,
    /// Pedometer step counter bit set status.
    #[bits(1)]
    pub stepcounter_bit_set: u8,
    /// Step counter overflow status.
    #[bits(1)]
    pub step_overflow: u8,
    /// Pedometer step recognition on delta time status.
    #[bits(1)]
    pub step_count_delta_ia: u8,
    /// Step detector event detection status.
    #[bits(1)]
    pub step_detected: u8,
    #[bits(1, access = RO)]
    not_used1: u8,
    /// Resets the step counter. Default: 0.
    #[bits(1)]
    pub pedo_rst_step: u8,
}

/// EMB_FUNC_INIT_A (0x66)
///
/// Embedded functions initialization register (R/W)
#[register(address = EmbReg::EmbFuncInitA, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncInitA {
    #[bits(3, access = RO)]
    not_used0: u8,
    /// Pedometer step counter/detector algorithm initialization request.
    #[bits(1)]
    pub step_det_init: u8,
    /// Tilt algorithm initialization request.
    #[bits(1)]
    pub tilt_init: u8,
    /// Significant motion detection algorithm initialization request.
    #[bits(1)]
    pub sig_mot_init: u8,
    #[bits(2, access = RO)]
    not_used1: u8,
}

/// EMB_FUNC_INIT_B (0x67)
///
/// Embedded functions initialization register (R/W)
#[register(address = EmbReg::EmbFuncInitB, access_type = EmbedFuncState, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct EmbFuncInitB {
    /// FSM initialization request.
    #[bits(1)]
    pub fsm_init: u8,
    #[bits(2, access = RO)]
    not_used0: u8,
    /// FIFO compression feature initialization request.
    #[bits(1)]
    pub fifo_compr_init: u8,
    /// Machine learning core initialization request.
    #[bits(1)]
    pub mlc_init: u8,
    #[bits(3, access = RO)]
    not_used1: u8,
}

/// MLC0_SRC - MLC7_SRC (0x70 - 0x77)
///
/// Machine learning core source registers (R); one byte per decision tree
#[register(address = EmbReg::Mlc0Src, access_type = EmbedFuncState, generics = 2)]
pub struct MlcSrc(pub [u8; 8]);

/// Pedometer operating mode.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum PedoMd {
    #[default]
    PedoBaseMode = 0x00,
    /// Base mode plus false-positive rejection filter (advanced detection).
    PedoAdvMode = 0x01,
}

/// FSM output data rate.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum FsmOdr {
    _12_5hz = 0,
    #[default]
    _26hz = 1,
    _52hz = 2,
    _104hz = 3,
}

/// MLC output data rate.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, Debug, TryFrom)]
#[try_from(repr)]
pub enum MlcOdr {
    _12_5hz = 0,
    #[default]
    _26hz = 1,
    _52hz = 2,
    _104hz = 3,
}
