use super::{
    BusOperation, DelayNs, EmbAdvFunctions, I2c, MemBankFunctions, RegisterOperation,
    SensorOperation, SevenBitAddress, SpiDevice, bisync, i2c, prelude::*, register::BankState, spi,
};

use core::fmt::Debug;
use core::marker::PhantomData;
use half::f16;

/// Driver for the LSM6DSOX sensor.
///
/// The struct takes a bus and a timer hardware object to write to the
/// registers.
/// The bus is generalized over the BusOperation trait, allowing the use
/// of I2C or SPI protocols; this also allows the user to implement sharing
/// techniques to share the underlying bus.
#[bisync]
pub struct Lsm6dsox<B, T, S>
where
    B: BusOperation,
    T: DelayNs,
    S: BankState,
{
    pub bus: B,
    pub tim: T,
    _state: PhantomData<S>,
}

#[derive(Debug, PartialEq)]
#[bisync]
pub enum Error<B> {
    Bus(B),          // Error at the bus level
    InvalidConfiguration,
    FailedToReadMemBank,
    FailedToSetMemBank(MemBank),
}

#[bisync]
impl<P, T> Lsm6dsox<i2c::I2cBus<P>, T, MainBank>
where
    P: I2c,
    T: DelayNs,
{
    /// Constructor method for using the I2C bus.
    pub fn new_i2c(i2c: P, address: I2CAddress, tim: T) -> Self {
        // Initialize the I2C bus with the COMPONENT address
        let bus = i2c::I2cBus::new(i2c, address as SevenBitAddress);
        Self {
            bus,
            tim,
            _state: PhantomData,
        }
    }
}

#[bisync]
impl<B, T, S> Lsm6dsox<B, T, S>
where
    B: BusOperation,
    T: DelayNs,
    S: BankState,
{
    /// Constructor method using a generic Bus that implements BusOperation
    pub fn from_bus(bus: B, tim: T) -> Self {
        Self {
            bus,
            tim,
            _state: PhantomData,
        }
    }
}

#[bisync]
impl<P, T> Lsm6dsox<spi::SpiBus<P>, T, MainBank>
where
    P: SpiDevice,
    T: DelayNs,
{
    /// Constructor method for using the SPI bus.
    pub fn new_spi(spi: P, tim: T) -> Self {
        // Initialize the SPI bus
        let bus = spi::SpiBus::new(spi);
        Self {
            bus,
            tim,
            _state: PhantomData,
        }
    }
}

#[bisync]
impl<B: BusOperation, T: DelayNs, S: BankState> MemBankFunctions<MemBank> for Lsm6dsox<B, T, S> {
    type Error = Error<B::Error>;

    /// Change memory bank.
    ///
    /// It changes the address space indexed.
    /// <div class="warning">Ensure to return to MainMemBank after each change!</div>
    async fn mem_bank_set(&mut self, val: MemBank) -> Result<(), Error<B::Error>> {
        let mut func_cfg_access = FuncCfgAccess::read(self)
            .await
            .map_err(|_| Error::FailedToReadMemBank)?;
        func_cfg_access.set_shub_reg_access(((val as u8) & 0x02) >> 1);
        func_cfg_access.set_func_cfg_access((val as u8) & 0x01);
        func_cfg_access
            .write(self)
            .await
            .map_err(|_| Error::FailedToSetMemBank(val))
    }

    /// Get the current memory bank set.
    ///
    /// If different from MainMemBank, a switch is required to guarantee the correct
    /// working of the driver.
    async fn mem_bank_get(&mut self) -> Result<MemBank, Error<B::Error>> {
        let func_cfg_access = FuncCfgAccess::read(self)
            .await
            .map_err(|_| Error::FailedToReadMemBank)?;

        let value = (func_cfg_access.shub_reg_access() << 1) + func_cfg_access.func_cfg_access();
        let val = match value {
            0 => MemBank::MainMemBank,
            1 => MemBank::EmbedFuncMemBank,
            2 => MemBank::SensorHubMemBank,
            _ => MemBank::MainMemBank,
        };
        Ok(val)
    }
}

#[bisync]
const PAGE_READ_ENABLE: u8 = 0x01;
#[bisync]
const PAGE_WRITE_ENABLE: u8 = 0x02;
#[bisync]
const PAGE_RW_DISABLE: u8 = 0x00;

#[bisync]
impl<B: BusOperation, T: DelayNs> EmbAdvFunctions for Lsm6dsox<B, T, MainBank> {
    type Error = Error<B::Error>;

    /// Write buffer in a page.
    ///
    /// The 16-bit address packs the 4-bit page index in the high byte and the
    /// intra-page offset in the low byte; page crossings are handled
    /// transparently.
    ///
    /// # Arguments
    ///
    /// * `address`: Address where the page write begins.
    /// * `buf`: Buffer to write in a page.
    /// * `len`: Length of the buffer.
    async fn ln_pg_write(
        &mut self,
        address: u16,
        buf: &[u8],
        len: u8,
    ) -> Result<(), Error<B::Error>> {
        let [mut lsb, mut msb] = address.to_le_bytes();
        msb &= 0x0F;

        self.operate_over_embed(async |state| {
            // Set page write
            let mut page_rw = PageRw::read(state).await?;
            page_rw.set_page_rw(PAGE_WRITE_ENABLE);
            page_rw.write(state).await?;

            // Select page
            let mut page_sel = PageSel::read(state).await?;
            page_sel.set_page_sel(msb);
            page_sel.set_not_used0(1);
            page_sel.write(state).await?;

            // Set page address
            let page_address = PageAddress::new().with_page_addr(lsb);
            page_address.write(state).await?;

            for &item in buf.iter().take(len as usize) {
                PageValue::from_bits(item).write(state).await?;

                lsb = lsb.wrapping_add(1);
                // Check if page wrap
                if lsb == 0x00 {
                    msb += 1;
                    page_sel = PageSel::read(state).await?;
                    page_sel.set_page_sel(msb);
                    page_sel.set_not_used0(1);
                    page_sel.write(state).await?;
                }
            }

            // Reset page selection
            page_sel = PageSel::read(state).await?;
            page_sel.set_page_sel(0);
            page_sel.set_not_used0(1);
            page_sel.write(state).await?;

            // Unset page write
            page_rw = PageRw::read(state).await?;
            page_rw.set_page_rw(PAGE_RW_DISABLE);
            page_rw.write(state).await
        })
        .await
    }

    /// Read buffer in a page.
    ///
    /// Reads are symmetric with the write path: one byte per PAGE_VALUE
    /// access, relying on the device auto-increment of the page address.
    ///
    /// # Arguments
    ///
    /// * `address`: The address to read from.
    /// * `buf`: Buffer filled with the page content.
    /// * `len`: Length of the buffer.
    async fn ln_pg_read(
        &mut self,
        address: u16,
        buf: &mut [u8],
        len: u8,
    ) -> Result<(), Error<B::Error>> {
        let [mut lsb, mut msb] = address.to_le_bytes();
        msb &= 0x0F;

        self.operate_over_embed(async |state| {
            // Set page read
            let mut page_rw = PageRw::read(state).await?;
            page_rw.set_page_rw(PAGE_READ_ENABLE);
            page_rw.write(state).await?;

            // Select page
            let mut page_sel = PageSel::read(state).await?;
            page_sel.set_page_sel(msb);
            page_sel.set_not_used0(1);
            page_sel.write(state).await?;

            // Set page address
            let page_address = PageAddress::new().with_page_addr(lsb);
            page_address.write(state).await?;

            for i in 0..len {
                state
                    .read_from_register(
                        EmbReg::PageValue as u8,
                        &mut buf[i as usize..(i as usize + 1)],
                    )
                    .await?;

                lsb = lsb.wrapping_add(1);
                // Check if page wrap
                if lsb == 0x00 {
                    msb += 1;
                    page_sel = PageSel::read(state).await?;
                    page_sel.set_page_sel(msb);
                    page_sel.set_not_used0(1);
                    page_sel.write(state).await?;
                }
            }

            // Reset page selection
            page_sel = PageSel::read(state).await?;
            page_sel.set_page_sel(0);
            page_sel.set_not_used0(1);
            page_sel.write(state).await?;

            // Unset page read
            page_rw = PageRw::read(state).await?;
            page_rw.set_page_rw(PAGE_RW_DISABLE);
            page_rw.write(state).await
        })
        .await
    }
}

#[bisync]
impl<B: BusOperation, T: DelayNs, S: BankState> SensorOperation for Lsm6dsox<B, T, S> {
    type Error = Error<B::Error>;

    #[inline]
    async fn read_from_register(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<B::Error>> {
        self.bus
            .read_from_register(reg, buf)
            .await
            .map_err(Error::Bus)
    }

    #[inline]
    async fn write_to_register(&mut self, reg: u8, buf: &[u8]) -> Result<(), Error<B::Error>> {
        self.bus
            .write_to_register(reg, buf)
            .await
            .map_err(Error::Bus)
    }
}

#[bisync]
impl<B, T> Lsm6dsox<B, T, MainBank>
where
    B: BusOperation,
    T: DelayNs,
{
    /// Get the device ID.
    ///
    /// The value returned by a present device is `ID` (0x6C).
    pub async fn device_id_get(&mut self) -> Result<u8, Error<B::Error>> {
        WhoAmI::read(self).await.map(|reg| reg.id())
    }

    /// Software reset. Restore the default values in user registers.
    pub async fn reset_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl3 = Ctrl3C::read(self).await?;
        ctrl3.set_sw_reset(val);
        ctrl3.write(self).await
    }

    /// Get the software reset status; the bit self-clears when the reset is done.
    pub async fn reset_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl3C::read(self).await.map(|reg| reg.sw_reset())
    }

    /// Reboot memory content. Reload the calibration parameters.
    pub async fn boot_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl3 = Ctrl3C::read(self).await?;
        ctrl3.set_boot(val);
        ctrl3.write(self).await
    }

    /// Get the reboot status; the bit self-clears when the boot is done.
    pub async fn boot_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl3C::read(self).await.map(|reg| reg.boot())
    }

    /// Enable register address automatic increment during a multiple byte
    /// access with a serial interface.
    pub async fn auto_increment_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl3 = Ctrl3C::read(self).await?;
        ctrl3.set_if_inc(val);
        ctrl3.write(self).await
    }

    /// Get the actual register address automatic increment configuration.
    pub async fn auto_increment_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl3C::read(self).await.map(|reg| reg.if_inc())
    }

    /// Enable Block Data Update.
    ///
    /// Output registers are not updated until MSB and LSB have been read.
    pub async fn block_data_update_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl3 = Ctrl3C::read(self).await?;
        ctrl3.set_bdu(val);
        ctrl3.write(self).await
    }

    /// Get the actual Block Data Update configuration.
    pub async fn block_data_update_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl3C::read(self).await.map(|reg| reg.bdu())
    }

    /// Enable pull-up on SDO pin.
    pub async fn sdo_sa0_pull_up_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut pin_ctrl = PinCtrl::read(self).await?;
        pin_ctrl.set_sdo_pu_en(val);
        pin_ctrl.write(self).await
    }

    /// Get the actual pull-up configuration on SDO pin.
    pub async fn sdo_sa0_pull_up_get(&mut self) -> Result<u8, Error<B::Error>> {
        PinCtrl::read(self).await.map(|reg| reg.sdo_pu_en())
    }

    /// Disable the MIPI I3C communication protocol.
    pub async fn i3c_disable_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl9 = Ctrl9Xl::read(self).await?;
        ctrl9.set_i3c_disable(val);
        ctrl9.write(self).await
    }

    /// Get the actual MIPI I3C protocol configuration.
    pub async fn i3c_disable_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl9Xl::read(self).await.map(|reg| reg.i3c_disable())
    }

    /// Select the I3C bus available time for in-band interrupts.
    pub async fn i3c_bus_avb_set(&mut self, val: I3cBusAvbSel) -> Result<(), Error<B::Error>> {
        let mut i3c_bus_avb = I3cBusAvb::read(self).await?;
        i3c_bus_avb.set_i3c_bus_avb_sel((val as u8) & 0x03);
        i3c_bus_avb.write(self).await
    }

    /// Get the actual I3C bus available time.
    pub async fn i3c_bus_avb_get(&mut self) -> Result<I3cBusAvbSel, Error<B::Error>> {
        let i3c_bus_avb = I3cBusAvb::read(self).await?;
        let val = I3cBusAvbSel::try_from(i3c_bus_avb.i3c_bus_avb_sel()).unwrap_or_default();
        Ok(val)
    }

    /// Set the accelerometer full-scale.
    pub async fn xl_full_scale_set(&mut self, val: FsXl) -> Result<(), Error<B::Error>> {
        let mut ctrl1_xl = Ctrl1Xl::read(self).await?;
        ctrl1_xl.set_fs_xl((val as u8) & 0x03);
        ctrl1_xl.write(self).await
    }

    /// Get the actual accelerometer full-scale.
    pub async fn xl_full_scale_get(&mut self) -> Result<FsXl, Error<B::Error>> {
        let ctrl1_xl = Ctrl1Xl::read(self).await?;
        let val = FsXl::try_from(ctrl1_xl.fs_xl()).unwrap_or_default();
        Ok(val)
    }

    /// Set the accelerometer output data rate.
    ///
    /// The selected rate is silently raised to the FSM/MLC rate when one of
    /// those engines is running faster than the requested value.
    pub async fn xl_data_rate_set(&mut self, mut val: OdrXl) -> Result<(), Error<B::Error>> {
        let fsm_enable = self.fsm_enable_get().await?;
        let fsm_running = fsm_enable.fsm_enable_a.into_bits() != PROPERTY_DISABLE
            || fsm_enable.fsm_enable_b.into_bits() != PROPERTY_DISABLE;

        if fsm_running {
            let fsm_odr = self.fsm_data_rate_get().await?;
            val = match fsm_odr {
                FsmOdr::_12_5hz => match val {
                    OdrXl::Off | OdrXl::_1_6hz => OdrXl::_12_5hz,
                    _ => val,
                },
                FsmOdr::_26hz => match val {
                    OdrXl::Off | OdrXl::_1_6hz | OdrXl::_12_5hz => OdrXl::_26hz,
                    _ => val,
                },
                FsmOdr::_52hz => match val {
                    OdrXl::Off | OdrXl::_1_6hz | OdrXl::_12_5hz | OdrXl::_26hz => OdrXl::_52hz,
                    _ => val,
                },
                FsmOdr::_104hz => match val {
                    OdrXl::Off
                    | OdrXl::_1_6hz
                    | OdrXl::_12_5hz
                    | OdrXl::_26hz
                    | OdrXl::_52hz => OdrXl::_104hz,
                    _ => val,
                },
            };
        }

        if self.mlc_get().await? == PROPERTY_ENABLE {
            let mlc_odr = self.mlc_data_rate_get().await?;
            val = match mlc_odr {
                MlcOdr::_12_5hz => match val {
                    OdrXl::Off | OdrXl::_1_6hz => OdrXl::_12_5hz,
                    _ => val,
                },
                MlcOdr::_26hz => match val {
                    OdrXl::Off | OdrXl::_1_6hz | OdrXl::_12_5hz => OdrXl::_26hz,
                    _ => val,
                },
                MlcOdr::_52hz => match val {
                    OdrXl::Off | OdrXl::_1_6hz | OdrXl::_12_5hz | OdrXl::_26hz => OdrXl::_52hz,
                    _ => val,
                },
                MlcOdr::_104hz => match val {
                    OdrXl::Off
                    | OdrXl::_1_6hz
                    | OdrXl::_12_5hz
                    | OdrXl::_26hz
                    | OdrXl::_52hz => OdrXl::_104hz,
                    _ => val,
                },
            };
        }

        let mut ctrl1_xl = Ctrl1Xl::read(self).await?;
        ctrl1_xl.set_odr_xl((val as u8) & 0x0F);
        ctrl1_xl.write(self).await
    }

    /// Get the actual accelerometer output data rate.
    pub async fn xl_data_rate_get(&mut self) -> Result<OdrXl, Error<B::Error>> {
        let ctrl1_xl = Ctrl1Xl::read(self).await?;
        let val = OdrXl::try_from(ctrl1_xl.odr_xl()).unwrap_or_default();
        Ok(val)
    }

    /// Set the gyroscope full-scale.
    pub async fn gy_full_scale_set(&mut self, val: FsGy) -> Result<(), Error<B::Error>> {
        let mut ctrl2_g = Ctrl2G::read(self).await?;
        ctrl2_g.set_fs_g((val as u8) & 0x07);
        ctrl2_g.write(self).await
    }

    /// Get the actual gyroscope full-scale.
    pub async fn gy_full_scale_get(&mut self) -> Result<FsGy, Error<B::Error>> {
        let ctrl2_g = Ctrl2G::read(self).await?;
        let val = FsGy::try_from(ctrl2_g.fs_g()).unwrap_or_default();
        Ok(val)
    }

    /// Set the gyroscope output data rate.
    ///
    /// The selected rate is silently raised to the FSM/MLC rate when one of
    /// those engines is running faster than the requested value.
    pub async fn gy_data_rate_set(&mut self, mut val: OdrGy) -> Result<(), Error<B::Error>> {
        let fsm_enable = self.fsm_enable_get().await?;
        let fsm_running = fsm_enable.fsm_enable_a.into_bits() != PROPERTY_DISABLE
            || fsm_enable.fsm_enable_b.into_bits() != PROPERTY_DISABLE;

        if fsm_running {
            let fsm_odr = self.fsm_data_rate_get().await?;
            val = match fsm_odr {
                FsmOdr::_12_5hz => match val {
                    OdrGy::Off => OdrGy::_12_5hz,
                    _ => val,
                },
                FsmOdr::_26hz => match val {
                    OdrGy::Off | OdrGy::_12_5hz => OdrGy::_26hz,
                    _ => val,
                },
                FsmOdr::_52hz => match val {
                    OdrGy::Off | OdrGy::_12_5hz | OdrGy::_26hz => OdrGy::_52hz,
                    _ => val,
                },
                FsmOdr::_104hz => match val {
                    OdrGy::Off | OdrGy::_12_5hz | OdrGy::_26hz | OdrGy::_52hz => OdrGy::_104hz,
                    _ => val,
                },
            };
        }

        if self.mlc_get().await? == PROPERTY_ENABLE {
            let mlc_odr = self.mlc_data_rate_get().await?;
            val = match mlc_odr {
                MlcOdr::_12_5hz => match val {
                    OdrGy::Off => OdrGy::_12_5hz,
                    _ => val,
                },
                MlcOdr::_26hz => match val {
                    OdrGy::Off | OdrGy::_12_5hz => OdrGy::_26hz,
                    _ => val,
                },
                MlcOdr::_52hz => match val {
                    OdrGy::Off | OdrGy::_12_5hz | OdrGy::_26hz => OdrGy::_52hz,
                    _ => val,
                },
                MlcOdr::_104hz => match val {
                    OdrGy::Off | OdrGy::_12_5hz | OdrGy::_26hz | OdrGy::_52hz => OdrGy::_104hz,
                    _ => val,
                },
            };
        }

        let mut ctrl2_g = Ctrl2G::read(self).await?;
        ctrl2_g.set_odr_g((val as u8) & 0x0F);
        ctrl2_g.write(self).await
    }

    /// Get the actual gyroscope output data rate.
    pub async fn gy_data_rate_get(&mut self) -> Result<OdrGy, Error<B::Error>> {
        let ctrl2_g = Ctrl2G::read(self).await?;
        let val = OdrGy::try_from(ctrl2_g.odr_g()).unwrap_or_default();
        Ok(val)
    }

    /// Set the accelerometer power mode.
    pub async fn xl_power_mode_set(&mut self, val: XlHmMode) -> Result<(), Error<B::Error>> {
        let mut ctrl5 = Ctrl5C::read(self).await?;
        ctrl5.set_xl_ulp_en(((val as u8) & 0x02) >> 1);
        ctrl5.write(self).await?;

        let mut ctrl6 = Ctrl6C::read(self).await?;
        ctrl6.set_xl_hm_mode((val as u8) & 0x01);
        ctrl6.write(self).await
    }

    /// Get the actual accelerometer power mode.
    pub async fn xl_power_mode_get(&mut self) -> Result<XlHmMode, Error<B::Error>> {
        let ctrl5 = Ctrl5C::read(self).await?;
        let ctrl6 = Ctrl6C::read(self).await?;

        let value = (ctrl5.xl_ulp_en() << 1) + ctrl6.xl_hm_mode();
        let val = XlHmMode::try_from(value).unwrap_or_default();
        Ok(val)
    }

    /// Set the gyroscope power mode.
    pub async fn gy_power_mode_set(&mut self, val: GyHmMode) -> Result<(), Error<B::Error>> {
        let mut ctrl7_g = Ctrl7G::read(self).await?;
        ctrl7_g.set_g_hm_mode((val as u8) & 0x01);
        ctrl7_g.write(self).await
    }

    /// Get the actual gyroscope power mode.
    pub async fn gy_power_mode_get(&mut self) -> Result<GyHmMode, Error<B::Error>> {
        let ctrl7_g = Ctrl7G::read(self).await?;
        let val = GyHmMode::try_from(ctrl7_g.g_hm_mode()).unwrap_or_default();
        Ok(val)
    }

    /// Enable gyroscope sleep mode.
    pub async fn gy_sleep_mode_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl4 = Ctrl4C::read(self).await?;
        ctrl4.set_sleep_g(val);
        ctrl4.write(self).await
    }

    /// Get the actual gyroscope sleep mode configuration.
    pub async fn gy_sleep_mode_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl4C::read(self).await.map(|reg| reg.sleep_g())
    }

    /// Set the accelerometer self-test mode.
    pub async fn xl_self_test_set(&mut self, val: StXl) -> Result<(), Error<B::Error>> {
        let mut ctrl5 = Ctrl5C::read(self).await?;
        ctrl5.set_st_xl((val as u8) & 0x03);
        ctrl5.write(self).await
    }

    /// Get the actual accelerometer self-test mode.
    pub async fn xl_self_test_get(&mut self) -> Result<StXl, Error<B::Error>> {
        let ctrl5 = Ctrl5C::read(self).await?;
        let val = StXl::try_from(ctrl5.st_xl()).unwrap_or_default();
        Ok(val)
    }

    /// Set the gyroscope self-test mode.
    pub async fn gy_self_test_set(&mut self, val: StGy) -> Result<(), Error<B::Error>> {
        let mut ctrl5 = Ctrl5C::read(self).await?;
        ctrl5.set_st_g((val as u8) & 0x03);
        ctrl5.write(self).await
    }

    /// Get the actual gyroscope self-test mode.
    pub async fn gy_self_test_get(&mut self) -> Result<StGy, Error<B::Error>> {
        let ctrl5 = Ctrl5C::read(self).await?;
        let val = StGy::try_from(ctrl5.st_g()).unwrap_or_default();
        Ok(val)
    }

    /// Set the circular burst-mode (rounding) read from the output registers.
    pub async fn rounding_mode_set(&mut self, val: Rounding) -> Result<(), Error<B::Error>> {
        let mut ctrl5 = Ctrl5C::read(self).await?;
        ctrl5.set_rounding((val as u8) & 0x03);
        ctrl5.write(self).await
    }

    /// Get the actual circular burst-mode (rounding) configuration.
    pub async fn rounding_mode_get(&mut self) -> Result<Rounding, Error<B::Error>> {
        let ctrl5 = Ctrl5C::read(self).await?;
        let val = Rounding::try_from(ctrl5.rounding()).unwrap_or_default();
        Ok(val)
    }

    /// Set the weight of the accelerometer user offset words.
    pub async fn xl_offset_weight_set(&mut self, val: UsrOffW) -> Result<(), Error<B::Error>> {
        let mut ctrl6 = Ctrl6C::read(self).await?;
        ctrl6.set_usr_off_w((val as u8) & 0x01);
        ctrl6.write(self).await
    }

    /// Get the actual weight of the accelerometer user offset words.
    pub async fn xl_offset_weight_get(&mut self) -> Result<UsrOffW, Error<B::Error>> {
        let ctrl6 = Ctrl6C::read(self).await?;
        let val = UsrOffW::try_from(ctrl6.usr_off_w()).unwrap_or_default();
        Ok(val)
    }

    /// Set the accelerometer X-axis user offset correction.
    ///
    /// Two's complement; weight depends on USR_OFF_W. The value must be in
    /// the range \[-127, 127\].
    pub async fn xl_usr_offset_x_set(&mut self, val: i8) -> Result<(), Error<B::Error>> {
        XOfsUsr::new().with_x_ofs_usr(val).write(self).await
    }

    /// Get the accelerometer X-axis user offset correction.
    pub async fn xl_usr_offset_x_get(&mut self) -> Result<i8, Error<B::Error>> {
        XOfsUsr::read(self).await.map(|reg| reg.x_ofs_usr())
    }

    /// Set the accelerometer Y-axis user offset correction.
    pub async fn xl_usr_offset_y_set(&mut self, val: i8) -> Result<(), Error<B::Error>> {
        YOfsUsr::new().with_y_ofs_usr(val).write(self).await
    }

    /// Get the accelerometer Y-axis user offset correction.
    pub async fn xl_usr_offset_y_get(&mut self) -> Result<i8, Error<B::Error>> {
        YOfsUsr::read(self).await.map(|reg| reg.y_ofs_usr())
    }

    /// Set the accelerometer Z-axis user offset correction.
    pub async fn xl_usr_offset_z_set(&mut self, val: i8) -> Result<(), Error<B::Error>> {
        ZOfsUsr::new().with_z_ofs_usr(val).write(self).await
    }

    /// Get the accelerometer Z-axis user offset correction.
    pub async fn xl_usr_offset_z_get(&mut self) -> Result<i8, Error<B::Error>> {
        ZOfsUsr::read(self).await.map(|reg| reg.z_ofs_usr())
    }

    /// Enable the accelerometer user offset correction block on output.
    pub async fn xl_usr_offset_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl7_g = Ctrl7G::read(self).await?;
        ctrl7_g.set_usr_off_on_out(val);
        ctrl7_g.write(self).await
    }

    /// Get the actual user offset correction block configuration.
    pub async fn xl_usr_offset_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl7G::read(self).await.map(|reg| reg.usr_off_on_out())
    }

    /// Enable the timestamp counter.
    pub async fn timestamp_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl10 = Ctrl10C::read(self).await?;
        ctrl10.set_timestamp_en(val);
        ctrl10.write(self).await
    }

    /// Get the actual timestamp counter configuration.
    pub async fn timestamp_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl10C::read(self).await.map(|reg| reg.timestamp_en())
    }

    /// Get the raw timestamp counter.
    ///
    /// The value is expressed as a 32-bit word with 25 us/LSB resolution.
    pub async fn timestamp_raw_get(&mut self) -> Result<u32, Error<B::Error>> {
        Timestamp::read(self).await.map(|reg| reg.0)
    }

    /// Reset the timestamp counter.
    pub async fn timestamp_rst(&mut self) -> Result<(), Error<B::Error>> {
        self.write_to_register(Reg::Timestamp2 as u8, &[0xAA]).await?;
        self.tim.delay_us(150).await; // AN5272 Section 6.4
        Ok(())
    }

    /// Get the raw temperature output.
    ///
    /// L and H registers together express a 16-bit word in two's complement.
    pub async fn temperature_raw_get(&mut self) -> Result<i16, Error<B::Error>> {
        OutTemp::read(self).await.map(|reg| reg.0)
    }

    /// Get the raw angular rate.
    ///
    /// The values are expressed as three 16-bit words in two's complement.
    pub async fn angular_rate_raw_get(&mut self) -> Result<[i16; 3], Error<B::Error>> {
        let val = OutXYZG::read(self).await?;
        Ok([val.x, val.y, val.z])
    }

    /// Get the raw linear acceleration.
    ///
    /// The values are expressed as three 16-bit words in two's complement.
    pub async fn acceleration_raw_get(&mut self) -> Result<[i16; 3], Error<B::Error>> {
        let val = OutXYZA::read(self).await?;
        Ok([val.x, val.y, val.z])
    }

    /// Get the difference in percentage of the effective ODR (and timestamp
    /// rate) with respect to the typical. Step: 0.15%, two's complement.
    pub async fn odr_cal_reg_get(&mut self) -> Result<i8, Error<B::Error>> {
        InternalFreqFine::read(self).await.map(|reg| reg.freq_fine())
    }

    /// Get the status register.
    pub async fn status_reg_get(&mut self) -> Result<StatusReg, Error<B::Error>> {
        StatusReg::read(self).await
    }

    /// Get the accelerometer new data available flag.
    pub async fn xl_flag_data_ready_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.status_reg_get().await?.xlda())
    }

    /// Get the gyroscope new data available flag.
    pub async fn gy_flag_data_ready_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.status_reg_get().await?.gda())
    }

    /// Get the temperature new data available flag.
    pub async fn temp_flag_data_ready_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.status_reg_get().await?.tda())
    }

    /// Get the status of all the interrupt sources.
    ///
    /// Reads the basic interrupt sources and the user-bank mirrors of the
    /// embedded function, FSM, MLC and sensor hub status in two batched
    /// transfers.
    pub async fn all_sources_get(&mut self) -> Result<AllSources, Error<B::Error>> {
        let mut buff: [u8; 5] = [0; 5];
        self.read_from_register(Reg::AllIntSrc as u8, &mut buff)
            .await?;

        let all_int_src = AllIntSrc::from_bits(buff[0]);
        let wake_up_src = WakeUpSrc::from_bits(buff[1]);
        let tap_src = TapSrc::from_bits(buff[2]);
        let d6d_src = D6dSrc::from_bits(buff[3]);
        let status_reg = StatusReg::from_bits(buff[4]);

        let mut buff: [u8; 5] = [0; 5];
        self.read_from_register(Reg::EmbFuncStatusMainpage as u8, &mut buff)
            .await?;

        let emb_func_status = EmbFuncStatusMainpage::from_bits(buff[0]);
        let fsm_status_a = FsmStatusAMainpage::from_bits(buff[1]);
        let fsm_status_b = FsmStatusBMainpage::from_bits(buff[2]);
        let mlc_status = MlcStatusMainpage::from_bits(buff[3]);
        let status_master = StatusMasterMainpage::from_bits(buff[4]);

        let val = AllSources {
            free_fall: all_int_src.ff_ia(),
            wake_up: wake_up_src.wu_ia(),
            wake_up_x: wake_up_src.x_wu(),
            wake_up_y: wake_up_src.y_wu(),
            wake_up_z: wake_up_src.z_wu(),
            sleep_state: wake_up_src.sleep_state(),
            sleep_change: wake_up_src.sleep_change_ia(),
            single_tap: tap_src.single_tap(),
            double_tap: tap_src.double_tap(),
            tap_x: tap_src.x_tap(),
            tap_y: tap_src.y_tap(),
            tap_z: tap_src.z_tap(),
            tap_sign: tap_src.tap_sign(),
            six_d: d6d_src.d6d_ia(),
            six_d_xl: d6d_src.xl(),
            six_d_xh: d6d_src.xh(),
            six_d_yl: d6d_src.yl(),
            six_d_yh: d6d_src.yh(),
            six_d_zl: d6d_src.zl(),
            six_d_zh: d6d_src.zh(),
            timestamp: all_int_src.timestamp_endcount(),
            drdy_xl: status_reg.xlda(),
            drdy_gy: status_reg.gda(),
            drdy_temp: status_reg.tda(),
            step_detector: emb_func_status.is_step_det(),
            tilt: emb_func_status.is_tilt(),
            sig_mot: emb_func_status.is_sigmot(),
            fsm_lc: emb_func_status.is_fsm_lc(),
            fsm1: fsm_status_a.is_fsm1(),
            fsm2: fsm_status_a.is_fsm2(),
            fsm3: fsm_status_a.is_fsm3(),
            fsm4: fsm_status_a.is_fsm4(),
            fsm5: fsm_status_a.is_fsm5(),
            fsm6: fsm_status_a.is_fsm6(),
            fsm7: fsm_status_a.is_fsm7(),
            fsm8: fsm_status_a.is_fsm8(),
            fsm9: fsm_status_b.is_fsm9(),
            fsm10: fsm_status_b.is_fsm10(),
            fsm11: fsm_status_b.is_fsm11(),
            fsm12: fsm_status_b.is_fsm12(),
            fsm13: fsm_status_b.is_fsm13(),
            fsm14: fsm_status_b.is_fsm14(),
            fsm15: fsm_status_b.is_fsm15(),
            fsm16: fsm_status_b.is_fsm16(),
            mlc1: mlc_status.is_mlc1(),
            mlc2: mlc_status.is_mlc2(),
            mlc3: mlc_status.is_mlc3(),
            mlc4: mlc_status.is_mlc4(),
            mlc5: mlc_status.is_mlc5(),
            mlc6: mlc_status.is_mlc6(),
            mlc7: mlc_status.is_mlc7(),
            mlc8: mlc_status.is_mlc8(),
            sh_endop: status_master.sens_hub_endop(),
            sh_slave0_nack: status_master.slave0_nack(),
            sh_slave1_nack: status_master.slave1_nack(),
            sh_slave2_nack: status_master.slave2_nack(),
            sh_slave3_nack: status_master.slave3_nack(),
            sh_wr_once: status_master.wr_once_done(),
        };

        Ok(val)
    }

    /// Enable the accelerometer LPF2 filtering stage.
    pub async fn xl_filter_lp2_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl1_xl = Ctrl1Xl::read(self).await?;
        ctrl1_xl.set_lpf2_xl_en(val);
        ctrl1_xl.write(self).await
    }

    /// Get the actual accelerometer LPF2 configuration.
    pub async fn xl_filter_lp2_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl1Xl::read(self).await.map(|reg| reg.lpf2_xl_en())
    }

    /// Enable the gyroscope digital LPF1 filter.
    ///
    /// The bandwidth can be selected through `gy_lp1_bandwidth_set`.
    pub async fn gy_filter_lp1_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl4 = Ctrl4C::read(self).await?;
        ctrl4.set_lpf1_sel_g(val);
        ctrl4.write(self).await
    }

    /// Get the actual gyroscope digital LPF1 configuration.
    pub async fn gy_filter_lp1_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl4C::read(self).await.map(|reg| reg.lpf1_sel_g())
    }

    /// Set the gyroscope low-pass filter LPF1 bandwidth.
    pub async fn gy_lp1_bandwidth_set(&mut self, val: Ftype) -> Result<(), Error<B::Error>> {
        let mut ctrl6 = Ctrl6C::read(self).await?;
        ctrl6.set_ftype((val as u8) & 0x07);
        ctrl6.write(self).await
    }

    /// Get the actual gyroscope low-pass filter LPF1 bandwidth.
    pub async fn gy_lp1_bandwidth_get(&mut self) -> Result<Ftype, Error<B::Error>> {
        let ctrl6 = Ctrl6C::read(self).await?;
        let val = Ftype::try_from(ctrl6.ftype()).unwrap_or_default();
        Ok(val)
    }

    /// Mask DRDY on pin (both XL and gyro) until filter settling ends.
    pub async fn drdy_mask_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl4 = Ctrl4C::read(self).await?;
        ctrl4.set_drdy_mask(val);
        ctrl4.write(self).await
    }

    /// Get the actual DRDY mask configuration.
    pub async fn drdy_mask_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl4C::read(self).await.map(|reg| reg.drdy_mask())
    }

    /// Set the accelerometer slope filter / high-pass filter path on output.
    pub async fn xl_hp_path_on_out_set(&mut self, val: HpSlopeXlEn) -> Result<(), Error<B::Error>> {
        let mut ctrl8_xl = Ctrl8Xl::read(self).await?;

        ctrl8_xl.set_hp_slope_xl_en(((val as u8) & 0x10) >> 4);
        ctrl8_xl.set_hp_ref_mode_xl(((val as u8) & 0x20) >> 5);
        ctrl8_xl.set_hpcf_xl((val as u8) & 0x07);

        ctrl8_xl.write(self).await
    }

    /// Get the actual accelerometer slope/high-pass filter path on output.
    pub async fn xl_hp_path_on_out_get(&mut self) -> Result<HpSlopeXlEn, Error<B::Error>> {
        let ctrl8_xl = Ctrl8Xl::read(self).await?;

        let value =
            (ctrl8_xl.hp_ref_mode_xl() << 5) + (ctrl8_xl.hp_slope_xl_en() << 4) + ctrl8_xl.hpcf_xl();
        let val = HpSlopeXlEn::try_from(value).unwrap_or_default();
        Ok(val)
    }

    /// Enable the accelerometer LPF2 and HPF fast-settling mode.
    ///
    /// Active only during device exit from power-down mode.
    pub async fn xl_fast_settling_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl8_xl = Ctrl8Xl::read(self).await?;
        ctrl8_xl.set_fastsettl_mode_xl(val);
        ctrl8_xl.write(self).await
    }

    /// Get the actual fast-settling mode configuration.
    pub async fn xl_fast_settling_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl8Xl::read(self).await.map(|reg| reg.fastsettl_mode_xl())
    }

    /// Select the HPF or slope filter on the wake-up and activity/inactivity
    /// functions.
    pub async fn xl_hp_path_internal_set(&mut self, val: SlopeFds) -> Result<(), Error<B::Error>> {
        let mut tap_cfg0 = TapCfg0::read(self).await?;
        tap_cfg0.set_slope_fds((val as u8) & 0x01);
        tap_cfg0.write(self).await
    }

    /// Get the actual filter selection on the wake-up and activity/inactivity
    /// functions.
    pub async fn xl_hp_path_internal_get(&mut self) -> Result<SlopeFds, Error<B::Error>> {
        let tap_cfg0 = TapCfg0::read(self).await?;
        let val = SlopeFds::try_from(tap_cfg0.slope_fds()).unwrap_or_default();
        Ok(val)
    }

    /// Route interrupt signals on the INT1 pin.
    ///
    /// The basic interrupt engine (TAP_CFG2.interrupts_enable) is switched on
    /// automatically when any event routing is requested.
    pub async fn pin_int1_route_set(&mut self, val: PinInt1Route) -> Result<(), Error<B::Error>> {
        let int1_ctrl = Int1Ctrl::new()
            .with_int1_drdy_xl(val.drdy_xl)
            .with_int1_drdy_g(val.drdy_g)
            .with_int1_boot(val.boot)
            .with_int1_fifo_th(val.fifo_th)
            .with_int1_fifo_ovr(val.fifo_ovr)
            .with_int1_fifo_full(val.fifo_full)
            .with_int1_cnt_bdr(val.fifo_bdr)
            .with_den_drdy_flag(val.den_flag);
        int1_ctrl.write(self).await?;

        let md1_cfg = Md1Cfg::new()
            .with_int1_shub(val.sh_endop)
            .with_int1_6d(val.six_d)
            .with_int1_double_tap(val.double_tap)
            .with_int1_ff(val.free_fall)
            .with_int1_wu(val.wake_up)
            .with_int1_single_tap(val.single_tap)
            .with_int1_sleep_change(val.sleep_change)
            .with_int1_emb_func(val.emb_func);
        md1_cfg.write(self).await?;

        let mut tap_cfg2 = TapCfg2::read(self).await?;
        if md1_cfg.into_bits() != PROPERTY_DISABLE {
            tap_cfg2.set_interrupts_enable(PROPERTY_ENABLE);
        }
        tap_cfg2.write(self).await
    }

    /// Get the actual interrupt routing on the INT1 pin.
    pub async fn pin_int1_route_get(&mut self) -> Result<PinInt1Route, Error<B::Error>> {
        let int1_ctrl = Int1Ctrl::read(self).await?;
        let md1_cfg = Md1Cfg::read(self).await?;

        Ok(PinInt1Route {
            drdy_xl: int1_ctrl.int1_drdy_xl(),
            drdy_g: int1_ctrl.int1_drdy_g(),
            boot: int1_ctrl.int1_boot(),
            fifo_th: int1_ctrl.int1_fifo_th(),
            fifo_ovr: int1_ctrl.int1_fifo_ovr(),
            fifo_full: int1_ctrl.int1_fifo_full(),
            fifo_bdr: int1_ctrl.int1_cnt_bdr(),
            den_flag: int1_ctrl.den_drdy_flag(),
            sh_endop: md1_cfg.int1_shub(),
            six_d: md1_cfg.int1_6d(),
            double_tap: md1_cfg.int1_double_tap(),
            free_fall: md1_cfg.int1_ff(),
            wake_up: md1_cfg.int1_wu(),
            single_tap: md1_cfg.int1_single_tap(),
            sleep_change: md1_cfg.int1_sleep_change(),
            emb_func: md1_cfg.int1_emb_func(),
        })
    }

    /// Route interrupt signals on the INT2 pin.
    pub async fn pin_int2_route_set(&mut self, val: PinInt2Route) -> Result<(), Error<B::Error>> {
        let int2_ctrl = Int2Ctrl::new()
            .with_int2_drdy_xl(val.drdy_xl)
            .with_int2_drdy_g(val.drdy_g)
            .with_int2_drdy_temp(val.drdy_temp)
            .with_int2_fifo_th(val.fifo_th)
            .with_int2_fifo_ovr(val.fifo_ovr)
            .with_int2_fifo_full(val.fifo_full)
            .with_int2_cnt_bdr(val.fifo_bdr);
        int2_ctrl.write(self).await?;

        let md2_cfg = Md2Cfg::new()
            .with_int2_timestamp(val.timestamp)
            .with_int2_6d(val.six_d)
            .with_int2_double_tap(val.double_tap)
            .with_int2_ff(val.free_fall)
            .with_int2_wu(val.wake_up)
            .with_int2_single_tap(val.single_tap)
            .with_int2_sleep_change(val.sleep_change)
            .with_int2_emb_func(val.emb_func);
        md2_cfg.write(self).await?;

        let mut tap_cfg2 = TapCfg2::read(self).await?;
        if md2_cfg.into_bits() != PROPERTY_DISABLE {
            tap_cfg2.set_interrupts_enable(PROPERTY_ENABLE);
        }
        tap_cfg2.write(self).await
    }

    /// Get the actual interrupt routing on the INT2 pin.
    pub async fn pin_int2_route_get(&mut self) -> Result<PinInt2Route, Error<B::Error>> {
        let int2_ctrl = Int2Ctrl::read(self).await?;
        let md2_cfg = Md2Cfg::read(self).await?;

        Ok(PinInt2Route {
            drdy_xl: int2_ctrl.int2_drdy_xl(),
            drdy_g: int2_ctrl.int2_drdy_g(),
            drdy_temp: int2_ctrl.int2_drdy_temp(),
            fifo_th: int2_ctrl.int2_fifo_th(),
            fifo_ovr: int2_ctrl.int2_fifo_ovr(),
            fifo_full: int2_ctrl.int2_fifo_full(),
            fifo_bdr: int2_ctrl.int2_cnt_bdr(),
            timestamp: md2_cfg.int2_timestamp(),
            six_d: md2_cfg.int2_6d(),
            double_tap: md2_cfg.int2_double_tap(),
            free_fall: md2_cfg.int2_ff(),
            wake_up: md2_cfg.int2_wu(),
            single_tap: md2_cfg.int2_single_tap(),
            sleep_change: md2_cfg.int2_sleep_change(),
            emb_func: md2_cfg.int2_emb_func(),
        })
    }

    /// Route all interrupt signals on the INT1 pin.
    pub async fn all_on_int1_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl4 = Ctrl4C::read(self).await?;
        ctrl4.set_int2_on_int1(val);
        ctrl4.write(self).await
    }

    /// Get the actual routing of all interrupt signals on the INT1 pin.
    pub async fn all_on_int1_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ctrl4C::read(self).await.map(|reg| reg.int2_on_int1())
    }

    /// Set the interrupt notification mode.
    ///
    /// Basic interrupts and embedded function interrupts carry independent
    /// latched/pulsed configurations.
    pub async fn int_notification_set(&mut self, val: Lir) -> Result<(), Error<B::Error>> {
        let mut tap_cfg0 = TapCfg0::read(self).await?;
        tap_cfg0.set_lir((val as u8) & 0x01);
        tap_cfg0.set_int_clr_on_read((val as u8) & 0x01);
        tap_cfg0.write(self).await?;

        self.operate_over_embed(async |state| {
            let mut page_rw = PageRw::read(state).await?;
            page_rw.set_emb_func_lir(((val as u8) & 0x02) >> 1);
            page_rw.write(state).await
        })
        .await
    }

    /// Get the actual interrupt notification mode.
    pub async fn int_notification_get(&mut self) -> Result<Lir, Error<B::Error>> {
        let tap_cfg0 = TapCfg0::read(self).await?;

        let page_rw = self
            .operate_over_embed(async |state| PageRw::read(state).await)
            .await?;

        let value = (page_rw.emb_func_lir() << 1) + tap_cfg0.lir();
        let val = Lir::try_from(value).unwrap_or_default();
        Ok(val)
    }

    /// Set the wake-up threshold.
    ///
    /// 1 LSB weight depends on WAKE_THS_W in WAKE_UP_DUR.
    pub async fn wkup_threshold_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_ths = WakeUpThs::read(self).await?;
        wake_up_ths.set_wk_ths(val);
        wake_up_ths.write(self).await
    }

    /// Get the actual wake-up threshold.
    pub async fn wkup_threshold_get(&mut self) -> Result<u8, Error<B::Error>> {
        WakeUpThs::read(self).await.map(|reg| reg.wk_ths())
    }

    /// Set the weight of 1 LSB of the wake-up threshold.
    ///
    /// 0: 1 LSB = FS_XL / 64; 1: 1 LSB = FS_XL / 256.
    pub async fn wkup_ths_weight_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_dur = WakeUpDur::read(self).await?;
        wake_up_dur.set_wake_ths_w(val);
        wake_up_dur.write(self).await
    }

    /// Get the actual weight of 1 LSB of the wake-up threshold.
    pub async fn wkup_ths_weight_get(&mut self) -> Result<u8, Error<B::Error>> {
        WakeUpDur::read(self).await.map(|reg| reg.wake_ths_w())
    }

    /// Set the wake-up duration event; 1 LSB = 1/ODR_XL.
    pub async fn wkup_dur_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_dur = WakeUpDur::read(self).await?;
        wake_up_dur.set_wake_dur(val);
        wake_up_dur.write(self).await
    }

    /// Get the actual wake-up duration event.
    pub async fn wkup_dur_get(&mut self) -> Result<u8, Error<B::Error>> {
        WakeUpDur::read(self).await.map(|reg| reg.wake_dur())
    }

    /// Set the activity/inactivity (sleep) function configuration.
    pub async fn act_mode_set(&mut self, val: ActMode) -> Result<(), Error<B::Error>> {
        let mut tap_cfg2 = TapCfg2::read(self).await?;
        tap_cfg2.set_inact_en((val as u8) & 0x03);
        tap_cfg2.write(self).await
    }

    /// Get the actual activity/inactivity (sleep) function configuration.
    pub async fn act_mode_get(&mut self) -> Result<ActMode, Error<B::Error>> {
        let tap_cfg2 = TapCfg2::read(self).await?;
        let val = ActMode::try_from(tap_cfg2.inact_en()).unwrap_or_default();
        Ok(val)
    }

    /// Set the duration to go in sleep mode; 1 LSB = 512/ODR_XL.
    pub async fn act_sleep_dur_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_dur = WakeUpDur::read(self).await?;
        wake_up_dur.set_sleep_dur(val);
        wake_up_dur.write(self).await
    }

    /// Get the actual duration to go in sleep mode.
    pub async fn act_sleep_dur_get(&mut self) -> Result<u8, Error<B::Error>> {
        WakeUpDur::read(self).await.map(|reg| reg.sleep_dur())
    }

    /// Enable tap detection on the X direction.
    pub async fn tap_detection_on_x_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_cfg0 = TapCfg0::read(self).await?;
        tap_cfg0.set_tap_x_en(val);
        tap_cfg0.write(self).await
    }

    /// Get the actual tap detection configuration on the X direction.
    pub async fn tap_detection_on_x_get(&mut self) -> Result<u8, Error<B::Error>> {
        TapCfg0::read(self).await.map(|reg| reg.tap_x_en())
    }

    /// Enable tap detection on the Y direction.
    pub async fn tap_detection_on_y_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_cfg0 = TapCfg0::read(self).await?;
        tap_cfg0.set_tap_y_en(val);
        tap_cfg0.write(self).await
    }

    /// Get the actual tap detection configuration on the Y direction.
    pub async fn tap_detection_on_y_get(&mut self) -> Result<u8, Error<B::Error>> {
        TapCfg0::read(self).await.map(|reg| reg.tap_y_en())
    }

    /// Enable tap detection on the Z direction.
    pub async fn tap_detection_on_z_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_cfg0 = TapCfg0::read(self).await?;
        tap_cfg0.set_tap_z_en(val);
        tap_cfg0.write(self).await
    }

    /// Get the actual tap detection configuration on the Z direction.
    pub async fn tap_detection_on_z_get(&mut self) -> Result<u8, Error<B::Error>> {
        TapCfg0::read(self).await.map(|reg| reg.tap_z_en())
    }

    /// Set the X-axis tap recognition threshold; 1 LSB = FS_XL / 32.
    pub async fn tap_threshold_x_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_cfg1 = TapCfg1::read(self).await?;
        tap_cfg1.set_tap_ths_x(val);
        tap_cfg1.write(self).await
    }

    /// Get the actual X-axis tap recognition threshold.
    pub async fn tap_threshold_x_get(&mut self) -> Result<u8, Error<B::Error>> {
        TapCfg1::read(self).await.map(|reg| reg.tap_ths_x())
    }

    /// Set the Y-axis tap recognition threshold; 1 LSB = FS_XL / 32.
    pub async fn tap_threshold_y_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_cfg2 = TapCfg2::read(self).await?;
        tap_cfg2.set_tap_ths_y(val);
        tap_cfg2.write(self).await
    }

    /// Get the actual Y-axis tap recognition threshold.
    pub async fn tap_threshold_y_get(&mut self) -> Result<u8, Error<B::Error>> {
        TapCfg2::read(self).await.map(|reg| reg.tap_ths_y())
    }

    /// Set the Z-axis tap recognition threshold; 1 LSB = FS_XL / 32.
    pub async fn tap_threshold_z_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_ths_6d = TapThs6d::read(self).await?;
        tap_ths_6d.set_tap_ths_z(val);
        tap_ths_6d.write(self).await
    }

    /// Get the actual Z-axis tap recognition threshold.
    pub async fn tap_threshold_z_get(&mut self) -> Result<u8, Error<B::Error>> {
        TapThs6d::read(self).await.map(|reg| reg.tap_ths_z())
    }

    /// Select the axis priority for tap detection.
    pub async fn tap_axis_priority_set(&mut self, val: TapPriority) -> Result<(), Error<B::Error>> {
        let mut tap_cfg1 = TapCfg1::read(self).await?;
        tap_cfg1.set_tap_priority((val as u8) & 0x07);
        tap_cfg1.write(self).await
    }

    /// Get the actual axis priority for tap detection.
    pub async fn tap_axis_priority_get(&mut self) -> Result<TapPriority, Error<B::Error>> {
        let tap_cfg1 = TapCfg1::read(self).await?;
        let val = TapPriority::try_from(tap_cfg1.tap_priority()).unwrap_or_default();
        Ok(val)
    }

    /// Set the maximum duration of the overthreshold event; 1 LSB = 8/ODR_XL.
    pub async fn tap_shock_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut int_dur2 = IntDur2::read(self).await?;
        int_dur2.set_shock(val);
        int_dur2.write(self).await
    }

    /// Get the actual maximum duration of the overthreshold event.
    pub async fn tap_shock_get(&mut self) -> Result<u8, Error<B::Error>> {
        IntDur2::read(self).await.map(|reg| reg.shock())
    }

    /// Set the expected quiet time after a tap detection; 1 LSB = 4/ODR_XL.
    pub async fn tap_quiet_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut int_dur2 = IntDur2::read(self).await?;
        int_dur2.set_quiet(val);
        int_dur2.write(self).await
    }

    /// Get the actual expected quiet time after a tap detection.
    pub async fn tap_quiet_get(&mut self) -> Result<u8, Error<B::Error>> {
        IntDur2::read(self).await.map(|reg| reg.quiet())
    }

    /// Set the maximum time gap for double-tap recognition; 1 LSB = 32/ODR_XL.
    pub async fn tap_dur_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut int_dur2 = IntDur2::read(self).await?;
        int_dur2.set_dur(val);
        int_dur2.write(self).await
    }

    /// Get the actual maximum time gap for double-tap recognition.
    pub async fn tap_dur_get(&mut self) -> Result<u8, Error<B::Error>> {
        IntDur2::read(self).await.map(|reg| reg.dur())
    }

    /// Enable single or single-and-double-tap recognition.
    pub async fn tap_mode_set(&mut self, val: TapMode) -> Result<(), Error<B::Error>> {
        let mut wake_up_ths = WakeUpThs::read(self).await?;
        wake_up_ths.set_single_double_tap((val as u8) & 0x01);
        wake_up_ths.write(self).await
    }

    /// Get the actual tap recognition mode.
    pub async fn tap_mode_get(&mut self) -> Result<TapMode, Error<B::Error>> {
        let wake_up_ths = WakeUpThs::read(self).await?;
        let val = TapMode::try_from(wake_up_ths.single_double_tap()).unwrap_or_default();
        Ok(val)
    }

    /// Set the threshold for the 4D/6D orientation function.
    pub async fn sixd_threshold_set(&mut self, val: SixdThs) -> Result<(), Error<B::Error>> {
        let mut tap_ths_6d = TapThs6d::read(self).await?;
        tap_ths_6d.set_sixd_ths((val as u8) & 0x03);
        tap_ths_6d.write(self).await
    }

    /// Get the actual threshold for the 4D/6D orientation function.
    pub async fn sixd_threshold_get(&mut self) -> Result<SixdThs, Error<B::Error>> {
        let tap_ths_6d = TapThs6d::read(self).await?;
        let val = SixdThs::try_from(tap_ths_6d.sixd_ths()).unwrap_or_default();
        Ok(val)
    }

    /// Enable 4D orientation detection; Z-axis position detection is disabled.
    pub async fn d4d_mode_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut tap_ths_6d = TapThs6d::read(self).await?;
        tap_ths_6d.set_d4d_en(val);
        tap_ths_6d.write(self).await
    }

    /// Get the actual 4D orientation detection configuration.
    pub async fn d4d_mode_get(&mut self) -> Result<u8, Error<B::Error>> {
        TapThs6d::read(self).await.map(|reg| reg.d4d_en())
    }

    /// Set the free-fall threshold.
    pub async fn ff_threshold_set(&mut self, val: FfThs) -> Result<(), Error<B::Error>> {
        let mut free_fall = FreeFall::read(self).await?;
        free_fall.set_ff_ths((val as u8) & 0x07);
        free_fall.write(self).await
    }

    /// Get the actual free-fall threshold.
    pub async fn ff_threshold_get(&mut self) -> Result<FfThs, Error<B::Error>> {
        let free_fall = FreeFall::read(self).await?;
        let val = FfThs::try_from(free_fall.ff_ths()).unwrap_or_default();
        Ok(val)
    }

    /// Set the free-fall duration event; 1 LSB = 1/ODR_XL.
    ///
    /// The 6-bit value is split between FREE_FALL and WAKE_UP_DUR.
    pub async fn ff_dur_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut wake_up_dur = WakeUpDur::read(self).await?;
        wake_up_dur.set_ff_dur((val & 0x20) >> 5);
        wake_up_dur.write(self).await?;

        let mut free_fall = FreeFall::read(self).await?;
        free_fall.set_ff_dur(val & 0x1F);
        free_fall.write(self).await
    }

    /// Get the actual free-fall duration event.
    pub async fn ff_dur_get(&mut self) -> Result<u8, Error<B::Error>> {
        let wake_up_dur = WakeUpDur::read(self).await?;
        let free_fall = FreeFall::read(self).await?;

        Ok((wake_up_dur.ff_dur() << 5) + free_fall.ff_dur())
    }

    /// Set the FIFO watermark threshold.
    ///
    /// 1 LSB = TAG (1 byte) + 1 sensor (6 bytes) written in FIFO.
    pub async fn fifo_watermark_set(&mut self, val: u16) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl2 = FifoCtrl2::read(self).await?;
        fifo_ctrl2.set_wtm(((val >> 8) & 0x01) as u8);

        FifoCtrl1::new().with_wtm((val & 0xFF) as u8).write(self).await?;
        fifo_ctrl2.write(self).await
    }

    /// Get the actual FIFO watermark threshold.
    pub async fn fifo_watermark_get(&mut self) -> Result<u16, Error<B::Error>> {
        let fifo_ctrl1 = FifoCtrl1::read(self).await?;
        let fifo_ctrl2 = FifoCtrl2::read(self).await?;

        Ok(((fifo_ctrl2.wtm() as u16) << 8) + fifo_ctrl1.wtm() as u16)
    }

    /// Enable FIFO stop at the watermark threshold.
    pub async fn fifo_stop_on_wtm_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl2 = FifoCtrl2::read(self).await?;
        fifo_ctrl2.set_stop_on_wtm(val);
        fifo_ctrl2.write(self).await
    }

    /// Get the actual FIFO stop at watermark configuration.
    pub async fn fifo_stop_on_wtm_get(&mut self) -> Result<u8, Error<B::Error>> {
        FifoCtrl2::read(self).await.map(|reg| reg.stop_on_wtm())
    }

    /// Configure the FIFO compression algorithm.
    ///
    /// Switches the compression feature in the embedded functions bank and
    /// programs the uncompressed data rate.
    pub async fn fifo_compression_algo_set(
        &mut self,
        val: UncoptrRate,
    ) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_en_b = EmbFuncEnB::read(state).await?;
            emb_func_en_b.set_fifo_compr_en(((val as u8) & 0x04) >> 2);
            emb_func_en_b.write(state).await
        })
        .await?;

        let mut fifo_ctrl2 = FifoCtrl2::read(self).await?;
        fifo_ctrl2.set_fifo_compr_rt_en(((val as u8) & 0x04) >> 2);
        fifo_ctrl2.set_uncoptr_rate((val as u8) & 0x03);
        fifo_ctrl2.write(self).await
    }

    /// Get the actual FIFO compression algorithm configuration.
    pub async fn fifo_compression_algo_get(&mut self) -> Result<UncoptrRate, Error<B::Error>> {
        let fifo_ctrl2 = FifoCtrl2::read(self).await?;

        let value = (fifo_ctrl2.fifo_compr_rt_en() << 2) + fifo_ctrl2.uncoptr_rate();
        let val = UncoptrRate::try_from(value).unwrap_or_default();
        Ok(val)
    }

    /// Request the FIFO compression algorithm initialization.
    pub async fn compression_algo_init_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_init_b = EmbFuncInitB::read(state).await?;
            emb_func_init_b.set_fifo_compr_init(val);
            emb_func_init_b.write(state).await
        })
        .await
    }

    /// Get the FIFO compression algorithm initialization request status.
    pub async fn compression_algo_init_get(&mut self) -> Result<u8, Error<B::Error>> {
        let emb_func_init_b = self
            .operate_over_embed(async |state| EmbFuncInitB::read(state).await)
            .await?;
        Ok(emb_func_init_b.fifo_compr_init())
    }

    /// Enable ODR CHANGE virtual sensor batching in FIFO.
    pub async fn fifo_virtual_sens_odr_chg_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl2 = FifoCtrl2::read(self).await?;
        fifo_ctrl2.set_odrchg_en(val);
        fifo_ctrl2.write(self).await
    }

    /// Get the actual ODR CHANGE virtual sensor batching configuration.
    pub async fn fifo_virtual_sens_odr_chg_get(&mut self) -> Result<u8, Error<B::Error>> {
        FifoCtrl2::read(self).await.map(|reg| reg.odrchg_en())
    }

    /// Set the batch data rate (write frequency in FIFO) for accelerometer data.
    pub async fn fifo_xl_batch_set(&mut self, val: BdrXl) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl3 = FifoCtrl3::read(self).await?;
        fifo_ctrl3.set_bdr_xl((val as u8) & 0x0F);
        fifo_ctrl3.write(self).await
    }

    /// Get the actual batch data rate for accelerometer data.
    pub async fn fifo_xl_batch_get(&mut self) -> Result<BdrXl, Error<B::Error>> {
        let fifo_ctrl3 = FifoCtrl3::read(self).await?;
        let val = BdrXl::try_from(fifo_ctrl3.bdr_xl()).unwrap_or_default();
        Ok(val)
    }

    /// Set the batch data rate (write frequency in FIFO) for gyroscope data.
    pub async fn fifo_gy_batch_set(&mut self, val: BdrGy) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl3 = FifoCtrl3::read(self).await?;
        fifo_ctrl3.set_bdr_gy((val as u8) & 0x0F);
        fifo_ctrl3.write(self).await
    }

    /// Get the actual batch data rate for gyroscope data.
    pub async fn fifo_gy_batch_get(&mut self) -> Result<BdrGy, Error<B::Error>> {
        let fifo_ctrl3 = FifoCtrl3::read(self).await?;
        let val = BdrGy::try_from(fifo_ctrl3.bdr_gy()).unwrap_or_default();
        Ok(val)
    }

    /// Set the FIFO mode.
    pub async fn fifo_mode_set(&mut self, val: FifoMode) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl4 = FifoCtrl4::read(self).await?;
        fifo_ctrl4.set_fifo_mode((val as u8) & 0x07);
        fifo_ctrl4.write(self).await
    }

    /// Get the actual FIFO mode.
    pub async fn fifo_mode_get(&mut self) -> Result<FifoMode, Error<B::Error>> {
        let fifo_ctrl4 = FifoCtrl4::read(self).await?;
        let val = FifoMode::try_from(fifo_ctrl4.fifo_mode()).unwrap_or_default();
        Ok(val)
    }

    /// Set the batch data rate (write frequency in FIFO) for temperature data.
    pub async fn fifo_temp_batch_set(&mut self, val: OdrTBatch) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl4 = FifoCtrl4::read(self).await?;
        fifo_ctrl4.set_odr_t_batch((val as u8) & 0x03);
        fifo_ctrl4.write(self).await
    }

    /// Get the actual batch data rate for temperature data.
    pub async fn fifo_temp_batch_get(&mut self) -> Result<OdrTBatch, Error<B::Error>> {
        let fifo_ctrl4 = FifoCtrl4::read(self).await?;
        let val = OdrTBatch::try_from(fifo_ctrl4.odr_t_batch()).unwrap_or_default();
        Ok(val)
    }

    /// Select the decimation for timestamp batching in FIFO.
    ///
    /// The write rate is the maximum rate between XL and GYRO BDR divided by
    /// the decimation.
    pub async fn fifo_timestamp_decimation_set(
        &mut self,
        val: OdrTsBatch,
    ) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl4 = FifoCtrl4::read(self).await?;
        fifo_ctrl4.set_odr_ts_batch((val as u8) & 0x03);
        fifo_ctrl4.write(self).await
    }

    /// Get the actual decimation for timestamp batching in FIFO.
    pub async fn fifo_timestamp_decimation_get(&mut self) -> Result<OdrTsBatch, Error<B::Error>> {
        let fifo_ctrl4 = FifoCtrl4::read(self).await?;
        let val = OdrTsBatch::try_from(fifo_ctrl4.odr_ts_batch()).unwrap_or_default();
        Ok(val)
    }

    /// Select the trigger for the internal counter of batch events.
    pub async fn fifo_cnt_event_batch_set(
        &mut self,
        val: TrigCounterBdr,
    ) -> Result<(), Error<B::Error>> {
        let mut counter_bdr_reg1 = CounterBdrReg1::read(self).await?;
        counter_bdr_reg1.set_trig_counter_bdr((val as u8) & 0x01);
        counter_bdr_reg1.write(self).await
    }

    /// Get the actual trigger for the internal counter of batch events.
    pub async fn fifo_cnt_event_batch_get(&mut self) -> Result<TrigCounterBdr, Error<B::Error>> {
        let counter_bdr_reg1 = CounterBdrReg1::read(self).await?;
        let val = TrigCounterBdr::try_from(counter_bdr_reg1.trig_counter_bdr()).unwrap_or_default();
        Ok(val)
    }

    /// Set the threshold for the internal counter of batch events.
    ///
    /// When the counter reaches the threshold, it is reset and COUNTER_BDR_IA
    /// is set.
    pub async fn batch_counter_threshold_set(&mut self, val: u16) -> Result<(), Error<B::Error>> {
        let mut counter_bdr_reg1 = CounterBdrReg1::read(self).await?;
        counter_bdr_reg1.set_cnt_bdr_th(((val >> 8) & 0x07) as u8);
        counter_bdr_reg1.write(self).await?;

        CounterBdrReg2::new()
            .with_cnt_bdr_th((val & 0xFF) as u8)
            .write(self)
            .await
    }

    /// Get the actual threshold for the internal counter of batch events.
    pub async fn batch_counter_threshold_get(&mut self) -> Result<u16, Error<B::Error>> {
        let counter_bdr_reg1 = CounterBdrReg1::read(self).await?;
        let counter_bdr_reg2 = CounterBdrReg2::read(self).await?;

        Ok(((counter_bdr_reg1.cnt_bdr_th() as u16) << 8) + counter_bdr_reg2.cnt_bdr_th() as u16)
    }

    /// Reset the internal counter of batch events.
    pub async fn rst_batch_counter_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut counter_bdr_reg1 = CounterBdrReg1::read(self).await?;
        counter_bdr_reg1.set_rst_counter_bdr(val);
        counter_bdr_reg1.write(self).await
    }

    /// Get the internal counter of batch events reset status.
    pub async fn rst_batch_counter_get(&mut self) -> Result<u8, Error<B::Error>> {
        CounterBdrReg1::read(self)
            .await
            .map(|reg| reg.rst_counter_bdr())
    }

    /// Set the data-ready pulsed/latched mode.
    pub async fn data_ready_mode_set(&mut self, val: DatareadyPulsed) -> Result<(), Error<B::Error>> {
        let mut counter_bdr_reg1 = CounterBdrReg1::read(self).await?;
        counter_bdr_reg1.set_dataready_pulsed((val as u8) & 0x01);
        counter_bdr_reg1.write(self).await
    }

    /// Get the actual data-ready pulsed/latched mode.
    pub async fn data_ready_mode_get(&mut self) -> Result<DatareadyPulsed, Error<B::Error>> {
        let counter_bdr_reg1 = CounterBdrReg1::read(self).await?;
        let val = DatareadyPulsed::try_from(counter_bdr_reg1.dataready_pulsed()).unwrap_or_default();
        Ok(val)
    }

    /// Get the FIFO status.
    ///
    /// Level and flags come from one 2-byte read of FIFO_STATUS1/2.
    pub async fn fifo_status_get(&mut self) -> Result<FifoStatus, Error<B::Error>> {
        let status = FifoStatusReg::read(self).await?;

        Ok(FifoStatus {
            fifo_level: status.diff_fifo(),
            fifo_bdr: status.counter_bdr_ia(),
            fifo_full: status.fifo_full_ia(),
            fifo_ovr: status.fifo_ovr_ia(),
            fifo_th: status.fifo_wtm_ia(),
        })
    }

    /// Get the number of unread sensor data (TAG + 6 bytes) stored in FIFO.
    pub async fn fifo_data_level_get(&mut self) -> Result<u16, Error<B::Error>> {
        FifoStatusReg::read(self).await.map(|reg| reg.diff_fifo())
    }

    /// Get the FIFO watermark status.
    pub async fn fifo_wtm_flag_get(&mut self) -> Result<u8, Error<B::Error>> {
        FifoStatusReg::read(self).await.map(|reg| reg.fifo_wtm_ia())
    }

    /// Get the FIFO overrun status.
    pub async fn fifo_ovr_flag_get(&mut self) -> Result<u8, Error<B::Error>> {
        FifoStatusReg::read(self).await.map(|reg| reg.fifo_ovr_ia())
    }

    /// Get the FIFO full status.
    pub async fn fifo_full_flag_get(&mut self) -> Result<u8, Error<B::Error>> {
        FifoStatusReg::read(self).await.map(|reg| reg.fifo_full_ia())
    }

    /// Get the tag of the next FIFO record without consuming its data set.
    pub async fn fifo_sensor_tag_get(&mut self) -> Result<FifoTag, Error<B::Error>> {
        let fifo_data_out_tag = FifoDataOutTag::read(self).await?;
        let val = FifoTag::try_from(fifo_data_out_tag.tag_sensor()).unwrap_or_default();
        Ok(val)
    }

    /// Read one FIFO record (tag byte plus 6-byte data set).
    ///
    /// The record is fetched in a single 7-byte transfer starting at
    /// FIFO_DATA_OUT_TAG; tag codes unknown to the driver decode to
    /// `FifoTag::SensorHubNack`.
    pub async fn fifo_out_raw_get(&mut self) -> Result<FifoOutRaw, Error<B::Error>> {
        let mut buff: [u8; 7] = [0; 7];
        self.read_from_register(Reg::FifoDataOutTag as u8, &mut buff)
            .await?;

        let fifo_data_out_tag = FifoDataOutTag::from_bits(buff[0]);
        let tag = FifoTag::try_from(fifo_data_out_tag.tag_sensor()).unwrap_or_default();
        let cnt = fifo_data_out_tag.tag_cnt();

        let mut data: [u8; 6] = [0; 6];
        data.copy_from_slice(&buff[1..7]);

        Ok(FifoOutRaw { tag, cnt, data })
    }

    /// Enable batching in FIFO of the step counter values.
    pub async fn fifo_pedo_batch_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_fifo_cfg = EmbFuncFifoCfg::read(state).await?;
            emb_func_fifo_cfg.set_pedo_fifo_en(val);
            emb_func_fifo_cfg.write(state).await
        })
        .await
    }

    /// Get the actual step counter batching configuration.
    pub async fn fifo_pedo_batch_get(&mut self) -> Result<u8, Error<B::Error>> {
        let emb_func_fifo_cfg = self
            .operate_over_embed(async |state| EmbFuncFifoCfg::read(state).await)
            .await?;
        Ok(emb_func_fifo_cfg.pedo_fifo_en())
    }

    /// Enable batching in FIFO of the sensor hub slave `idx` data.
    pub async fn fifo_sh_batch_slave_set(&mut self, idx: u8, val: u8) -> Result<(), Error<B::Error>> {
        assert!(idx <= 3);
        self.operate_over_sensor_hub(async |state| {
            let mut arr: [u8; 1] = [0];
            state
                .read_from_register(SensHubReg::Slv0Config as u8 + idx * 3, &mut arr)
                .await?;

            let mut slv_config = Slv0Config::from_bits(arr[0]);
            slv_config.set_batch_ext_sens_0_en(val);
            state
                .write_to_register(SensHubReg::Slv0Config as u8 + idx * 3, &[slv_config.into_bits()])
                .await
        })
        .await
    }

    /// Get the actual FIFO batching configuration of the sensor hub slave `idx`.
    pub async fn fifo_sh_batch_slave_get(&mut self, idx: u8) -> Result<u8, Error<B::Error>> {
        assert!(idx <= 3);
        self.operate_over_sensor_hub(async |state| {
            let mut arr: [u8; 1] = [0];
            state
                .read_from_register(SensHubReg::Slv0Config as u8 + idx * 3, &mut arr)
                .await?;
            let val = Slv0Config::from_bits(arr[0]).batch_ext_sens_0_en();
            Ok(val)
        })
        .await
    }

    /// Enable the pedometer algorithm.
    pub async fn pedo_sens_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_en_a = EmbFuncEnA::read(state).await?;
            emb_func_en_a.set_pedo_en(val);
            emb_func_en_a.write(state).await
        })
        .await
    }

    /// Get the actual pedometer algorithm configuration.
    pub async fn pedo_sens_get(&mut self) -> Result<u8, Error<B::Error>> {
        let emb_func_en_a = self
            .operate_over_embed(async |state| EmbFuncEnA::read(state).await)
            .await?;
        Ok(emb_func_en_a.pedo_en())
    }

    /// Set the pedometer operating mode.
    ///
    /// The false-positive rejection block lives in the advanced features page
    /// and is reached through the paged memory accessor.
    pub async fn pedo_mode_set(&mut self, val: PedoMd) -> Result<(), Error<B::Error>> {
        let mut pedo_cmd_reg = PedoCmdReg::read(self).await?;
        pedo_cmd_reg.set_fp_rejection_en((val as u8) & 0x01);
        pedo_cmd_reg.write(self).await
    }

    /// Get the actual pedometer operating mode.
    pub async fn pedo_mode_get(&mut self) -> Result<PedoMd, Error<B::Error>> {
        let pedo_cmd_reg = PedoCmdReg::read(self).await?;
        let val = PedoMd::try_from(pedo_cmd_reg.fp_rejection_en()).unwrap_or_default();
        Ok(val)
    }

    /// Set the pedometer debounce number of steps.
    pub async fn pedo_debounce_steps_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        PedoDebStepsConf::new().with_deb_step(val).write(self).await
    }

    /// Get the actual pedometer debounce number of steps.
    pub async fn pedo_debounce_steps_get(&mut self) -> Result<u8, Error<B::Error>> {
        PedoDebStepsConf::read(self).await.map(|reg| reg.deb_step())
    }

    /// Set the time period for step detection on delta time; 1 LSB = 6.4 ms.
    pub async fn pedo_steps_period_set(&mut self, val: u16) -> Result<(), Error<B::Error>> {
        PedoScDeltat(val).write(self).await
    }

    /// Get the actual time period for step detection on delta time.
    pub async fn pedo_steps_period_get(&mut self) -> Result<u16, Error<B::Error>> {
        PedoScDeltat::read(self).await.map(|reg| reg.0)
    }

    /// Get the step counter output.
    pub async fn number_of_steps_get(&mut self) -> Result<u16, Error<B::Error>> {
        self.operate_over_embed(async |state| StepCounter::read(state).await.map(|reg| reg.0))
            .await
    }

    /// Reset the step counter.
    pub async fn steps_reset(&mut self) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_src = EmbFuncSrc::read(state).await?;
            emb_func_src.set_pedo_rst_step(PROPERTY_ENABLE);
            emb_func_src.write(state).await
        })
        .await
    }

    /// Enable the tilt calculation algorithm.
    pub async fn tilt_sens_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_en_a = EmbFuncEnA::read(state).await?;
            emb_func_en_a.set_tilt_en(val);
            emb_func_en_a.write(state).await
        })
        .await
    }

    /// Get the actual tilt calculation algorithm configuration.
    pub async fn tilt_sens_get(&mut self) -> Result<u8, Error<B::Error>> {
        let emb_func_en_a = self
            .operate_over_embed(async |state| EmbFuncEnA::read(state).await)
            .await?;
        Ok(emb_func_en_a.tilt_en())
    }

    /// Enable the significant motion detection algorithm.
    pub async fn motion_sens_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_en_a = EmbFuncEnA::read(state).await?;
            emb_func_en_a.set_sign_motion_en(val);
            emb_func_en_a.write(state).await
        })
        .await
    }

    /// Get the actual significant motion detection configuration.
    pub async fn motion_sens_get(&mut self) -> Result<u8, Error<B::Error>> {
        let emb_func_en_a = self
            .operate_over_embed(async |state| EmbFuncEnA::read(state).await)
            .await?;
        Ok(emb_func_en_a.sign_motion_en())
    }

    /// Enable the finite state machine programs.
    ///
    /// The FSM engine is switched on when at least one program is enabled.
    pub async fn fsm_enable_set(&mut self, val: FsmEnable) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            val.fsm_enable_a.write(state).await?;
            val.fsm_enable_b.write(state).await?;

            let mut emb_func_en_b = EmbFuncEnB::read(state).await?;
            if (val.fsm_enable_a.into_bits() | val.fsm_enable_b.into_bits()) != PROPERTY_DISABLE {
                emb_func_en_b.set_fsm_en(PROPERTY_ENABLE);
            } else {
                emb_func_en_b.set_fsm_en(PROPERTY_DISABLE);
            }
            emb_func_en_b.write(state).await
        })
        .await
    }

    /// Get the actual finite state machine program enables.
    pub async fn fsm_enable_get(&mut self) -> Result<FsmEnable, Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let fsm_enable_a = FsmEnableA::read(state).await?;
            let fsm_enable_b = FsmEnableB::read(state).await?;

            Ok(FsmEnable {
                fsm_enable_a,
                fsm_enable_b,
            })
        })
        .await
    }

    /// Set the FSM long counter.
    pub async fn fsm_long_cnt_set(&mut self, val: u16) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| FsmLongCounter(val).write(state).await)
            .await
    }

    /// Get the actual FSM long counter value.
    pub async fn fsm_long_cnt_get(&mut self) -> Result<u16, Error<B::Error>> {
        self.operate_over_embed(async |state| FsmLongCounter::read(state).await.map(|cnt| cnt.0))
            .await
    }

    /// Clear the FSM long counter.
    pub async fn fsm_long_clr_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut clr = FsmLongCounterClear::read(state).await?;
            clr.set_fsm_lc_clr(val);
            clr.write(state).await
        })
        .await
    }

    /// Get the FSM long counter clear status.
    pub async fn fsm_long_clr_get(&mut self) -> Result<u8, Error<B::Error>> {
        let clr = self
            .operate_over_embed(async |state| FsmLongCounterClear::read(state).await)
            .await?;
        Ok(clr.fsm_lc_cleared())
    }

    /// Set the FSM output data rate.
    pub async fn fsm_data_rate_set(&mut self, val: FsmOdr) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_odr_cfg_b = EmbFuncOdrCfgB::read(state).await?;
            emb_func_odr_cfg_b.set_fsm_odr((val as u8) & 0x03);
            emb_func_odr_cfg_b.write(state).await
        })
        .await
    }

    /// Get the actual FSM output data rate.
    pub async fn fsm_data_rate_get(&mut self) -> Result<FsmOdr, Error<B::Error>> {
        let emb_func_odr_cfg_b = self
            .operate_over_embed(async |state| EmbFuncOdrCfgB::read(state).await)
            .await?;

        let val = FsmOdr::try_from(emb_func_odr_cfg_b.fsm_odr()).unwrap_or_default();
        Ok(val)
    }

    /// Request the FSM initialization.
    pub async fn fsm_init_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_init_b = EmbFuncInitB::read(state).await?;
            emb_func_init_b.set_fsm_init(val);
            emb_func_init_b.write(state).await
        })
        .await
    }

    /// Get the FSM initialization request status.
    pub async fn fsm_init_get(&mut self) -> Result<u8, Error<B::Error>> {
        let emb_func_init_b = self
            .operate_over_embed(async |state| EmbFuncInitB::read(state).await)
            .await?;
        Ok(emb_func_init_b.fsm_init())
    }

    /// Get the FSM output registers.
    pub async fn fsm_out_get(&mut self) -> Result<[u8; 8], Error<B::Error>> {
        self.operate_over_embed(async |state| FsmOuts::read(state).await.map(|reg| reg.0))
            .await
    }

    /// Set the FSM long counter timeout.
    ///
    /// An interrupt is generated when the long counter reaches this value;
    /// the register lives in the advanced features page.
    pub async fn long_cnt_int_value_set(&mut self, val: u16) -> Result<(), Error<B::Error>> {
        FsmLcTimeout(val).write(self).await
    }

    /// Get the actual FSM long counter timeout.
    pub async fn long_cnt_int_value_get(&mut self) -> Result<u16, Error<B::Error>> {
        FsmLcTimeout::read(self).await.map(|reg| reg.0)
    }

    /// Set the number of FSM programs; must be less than or equal to 16.
    pub async fn fsm_number_of_programs_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        if val > 16 {
            return Err(Error::InvalidConfiguration);
        }
        FsmProgramsReg::new().with_fsm_n_prog(val).write(self).await
    }

    /// Get the actual number of FSM programs.
    pub async fn fsm_number_of_programs_get(&mut self) -> Result<u8, Error<B::Error>> {
        FsmProgramsReg::read(self).await.map(|reg| reg.fsm_n_prog())
    }

    /// Set the FSM start address; the first available address is 0x033C.
    pub async fn fsm_start_address_set(&mut self, val: u16) -> Result<(), Error<B::Error>> {
        FsmStartAdd(val).write(self).await
    }

    /// Get the actual FSM start address.
    pub async fn fsm_start_address_get(&mut self) -> Result<u16, Error<B::Error>> {
        FsmStartAdd::read(self).await.map(|reg| reg.0)
    }

    /// Enable the machine learning core.
    ///
    /// An initialization is requested every time the core is switched on.
    pub async fn mlc_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_en_b = EmbFuncEnB::read(state).await?;
            emb_func_en_b.set_mlc_en(val);
            emb_func_en_b.write(state).await?;

            if val != PROPERTY_DISABLE {
                let mut emb_func_init_b = EmbFuncInitB::read(state).await?;
                emb_func_init_b.set_mlc_init(PROPERTY_ENABLE);
                emb_func_init_b.write(state).await?;
            }

            Ok(())
        })
        .await?;

        self.tim.delay_ms(1).await; // MLC needs to settle before configuration
        Ok(())
    }

    /// Get the actual machine learning core configuration.
    pub async fn mlc_get(&mut self) -> Result<u8, Error<B::Error>> {
        let emb_func_en_b = self
            .operate_over_embed(async |state| EmbFuncEnB::read(state).await)
            .await?;
        Ok(emb_func_en_b.mlc_en())
    }

    /// Set the MLC output data rate.
    pub async fn mlc_data_rate_set(&mut self, val: MlcOdr) -> Result<(), Error<B::Error>> {
        self.operate_over_embed(async |state| {
            let mut emb_func_odr_cfg_c = EmbFuncOdrCfgC::read(state).await?;
            emb_func_odr_cfg_c.set_mlc_odr((val as u8) & 0x03);
            emb_func_odr_cfg_c.write(state).await
        })
        .await
    }

    /// Get the actual MLC output data rate.
    pub async fn mlc_data_rate_get(&mut self) -> Result<MlcOdr, Error<B::Error>> {
        let emb_func_odr_cfg_c = self
            .operate_over_embed(async |state| EmbFuncOdrCfgC::read(state).await)
            .await?;

        let val = MlcOdr::try_from(emb_func_odr_cfg_c.mlc_odr()).unwrap_or_default();
        Ok(val)
    }

    /// Get the MLC interrupt status from the user-bank mirror.
    pub async fn mlc_status_get(&mut self) -> Result<MlcStatusMainpage, Error<B::Error>> {
        MlcStatusMainpage::read(self).await
    }

    /// Get the output value of all MLC decision trees.
    pub async fn mlc_out_get(&mut self) -> Result<[u8; 8], Error<B::Error>> {
        self.operate_over_embed(async |state| MlcSrc::read(state).await.map(|reg| reg.0))
            .await
    }

    /// Set the external magnetometer sensitivity used by the sensor hub
    /// compensation; 16-bit half-precision floating-point format.
    pub async fn mag_sensitivity_set(&mut self, val: u16) -> Result<(), Error<B::Error>> {
        MagSensitivity(val).write(self).await
    }

    /// Get the actual external magnetometer sensitivity.
    pub async fn mag_sensitivity_get(&mut self) -> Result<u16, Error<B::Error>> {
        MagSensitivity::read(self).await.map(|reg| reg.0)
    }

    /// Set the external magnetometer hard-iron offsets, X/Y/Z order.
    pub async fn mag_offset_set(&mut self, val: [i16; 3]) -> Result<(), Error<B::Error>> {
        let mut buff: [u8; 6] = [0; 6];

        for (i, axis) in val.iter().enumerate() {
            let bytes = axis.to_le_bytes();
            buff[i * 2] = bytes[0];
            buff[i * 2 + 1] = bytes[1];
        }

        self.ln_pg_write(
            AdvPage::_0 as u16 + EmbAdv0Reg::MagOffxL as u16,
            &buff,
            6,
        )
        .await
    }

    /// Get the actual external magnetometer hard-iron offsets.
    pub async fn mag_offset_get(&mut self) -> Result<[i16; 3], Error<B::Error>> {
        let mut buff: [u8; 6] = [0; 6];
        self.ln_pg_read(
            AdvPage::_0 as u16 + EmbAdv0Reg::MagOffxL as u16,
            &mut buff,
            6,
        )
        .await?;

        Ok([
            i16::from_le_bytes([buff[0], buff[1]]),
            i16::from_le_bytes([buff[2], buff[3]]),
            i16::from_le_bytes([buff[4], buff[5]]),
        ])
    }

    /// Set the external magnetometer soft-iron correction matrix.
    ///
    /// Order: XX, XY, XZ, YY, YZ, ZZ; 16-bit half-precision floating-point
    /// format.
    pub async fn mag_soft_iron_set(&mut self, val: [u16; 6]) -> Result<(), Error<B::Error>> {
        let mut buff: [u8; 12] = [0; 12];

        for (i, coeff) in val.iter().enumerate() {
            let bytes = coeff.to_le_bytes();
            buff[i * 2] = bytes[0];
            buff[i * 2 + 1] = bytes[1];
        }

        self.ln_pg_write(
            AdvPage::_0 as u16 + EmbAdv0Reg::MagSiXxL as u16,
            &buff,
            12,
        )
        .await
    }

    /// Get the actual external magnetometer soft-iron correction matrix.
    pub async fn mag_soft_iron_get(&mut self) -> Result<[u16; 6], Error<B::Error>> {
        let mut buff: [u8; 12] = [0; 12];
        self.ln_pg_read(
            AdvPage::_0 as u16 + EmbAdv0Reg::MagSiXxL as u16,
            &mut buff,
            12,
        )
        .await?;

        let mut val: [u16; 6] = [0; 6];
        for (i, coeff) in val.iter_mut().enumerate() {
            *coeff = u16::from_le_bytes([buff[i * 2], buff[i * 2 + 1]]);
        }
        Ok(val)
    }

    /// Set the external magnetometer Z-axis coordinates rotation.
    pub async fn mag_z_orient_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut mag_cfg_a = MagCfgA::read(self).await?;
        mag_cfg_a.set_mag_z_axis(val & 0x07);
        mag_cfg_a.write(self).await
    }

    /// Get the actual external magnetometer Z-axis coordinates rotation.
    pub async fn mag_z_orient_get(&mut self) -> Result<u8, Error<B::Error>> {
        MagCfgA::read(self).await.map(|reg| reg.mag_z_axis())
    }

    /// Set the external magnetometer Y-axis coordinates rotation.
    pub async fn mag_y_orient_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut mag_cfg_a = MagCfgA::read(self).await?;
        mag_cfg_a.set_mag_y_axis(val & 0x07);
        mag_cfg_a.write(self).await
    }

    /// Get the actual external magnetometer Y-axis coordinates rotation.
    pub async fn mag_y_orient_get(&mut self) -> Result<u8, Error<B::Error>> {
        MagCfgA::read(self).await.map(|reg| reg.mag_y_axis())
    }

    /// Set the external magnetometer X-axis coordinates rotation.
    pub async fn mag_x_orient_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut mag_cfg_b = MagCfgB::read(self).await?;
        mag_cfg_b.set_mag_x_axis(val & 0x07);
        mag_cfg_b.write(self).await
    }

    /// Get the actual external magnetometer X-axis coordinates rotation.
    pub async fn mag_x_orient_get(&mut self) -> Result<u8, Error<B::Error>> {
        MagCfgB::read(self).await.map(|reg| reg.mag_x_axis())
    }

    /// Enable the sensor hub I2C master.
    pub async fn sh_master_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            let mut master_config = MasterConfig::read(state).await?;
            master_config.set_master_on(val);
            master_config.write(state).await
        })
        .await
    }

    /// Get the actual sensor hub I2C master configuration.
    pub async fn sh_master_get(&mut self) -> Result<u8, Error<B::Error>> {
        let master_config = self
            .operate_over_sensor_hub(async |state| MasterConfig::read(state).await)
            .await?;
        Ok(master_config.master_on())
    }

    /// Enable the sensor hub pass-through mode.
    pub async fn sh_pass_through_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            let mut master_config = MasterConfig::read(state).await?;
            master_config.set_pass_through_mode(val);
            master_config.write(state).await
        })
        .await
    }

    /// Get the actual sensor hub pass-through mode configuration.
    pub async fn sh_pass_through_get(&mut self) -> Result<u8, Error<B::Error>> {
        let master_config = self
            .operate_over_sensor_hub(async |state| MasterConfig::read(state).await)
            .await?;
        Ok(master_config.pass_through_mode())
    }

    /// Enable the internal pull-up on the auxiliary I2C line.
    pub async fn sh_pin_mode_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            let mut master_config = MasterConfig::read(state).await?;
            master_config.set_shub_pu_en(val);
            master_config.write(state).await
        })
        .await
    }

    /// Get the actual pull-up configuration on the auxiliary I2C line.
    pub async fn sh_pin_mode_get(&mut self) -> Result<u8, Error<B::Error>> {
        let master_config = self
            .operate_over_sensor_hub(async |state| MasterConfig::read(state).await)
            .await?;
        Ok(master_config.shub_pu_en())
    }

    /// Select the sensor hub trigger; 0 = XL/GY data-ready, 1 = INT2 pin.
    pub async fn sh_syncro_mode_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            let mut master_config = MasterConfig::read(state).await?;
            master_config.set_start_config(val);
            master_config.write(state).await
        })
        .await
    }

    /// Get the actual sensor hub trigger configuration.
    pub async fn sh_syncro_mode_get(&mut self) -> Result<u8, Error<B::Error>> {
        let master_config = self
            .operate_over_sensor_hub(async |state| MasterConfig::read(state).await)
            .await?;
        Ok(master_config.start_config())
    }

    /// Perform the slave 0 write operation only at the first sensor hub cycle.
    pub async fn sh_write_mode_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            let mut master_config = MasterConfig::read(state).await?;
            master_config.set_write_once(val);
            master_config.write(state).await
        })
        .await
    }

    /// Get the actual slave 0 write mode.
    pub async fn sh_write_mode_get(&mut self) -> Result<u8, Error<B::Error>> {
        let master_config = self
            .operate_over_sensor_hub(async |state| MasterConfig::read(state).await)
            .await?;
        Ok(master_config.write_once())
    }

    /// Reset the sensor hub master logic and the output registers.
    ///
    /// The reset bit is toggled, not left set.
    pub async fn sh_reset_set(&mut self) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            let mut master_config = MasterConfig::read(state).await?;
            master_config.set_rst_master_regs(PROPERTY_ENABLE);
            master_config.write(state).await?;

            master_config.set_rst_master_regs(PROPERTY_DISABLE);
            master_config.write(state).await
        })
        .await
    }

    /// Get the sensor hub master logic reset status.
    pub async fn sh_reset_get(&mut self) -> Result<u8, Error<B::Error>> {
        let master_config = self
            .operate_over_sensor_hub(async |state| MasterConfig::read(state).await)
            .await?;
        Ok(master_config.rst_master_regs())
    }

    /// Set the number of external sensors read by the sensor hub.
    pub async fn sh_slave_connected_set(&mut self, val: AuxSensOn) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            let mut master_config = MasterConfig::read(state).await?;
            master_config.set_aux_sens_on((val as u8) & 0x03);
            master_config.write(state).await
        })
        .await
    }

    /// Get the actual number of external sensors read by the sensor hub.
    pub async fn sh_slave_connected_get(&mut self) -> Result<AuxSensOn, Error<B::Error>> {
        let master_config = self
            .operate_over_sensor_hub(async |state| MasterConfig::read(state).await)
            .await?;

        let val = AuxSensOn::try_from(master_config.aux_sens_on()).unwrap_or_default();
        Ok(val)
    }

    /// Set the sensor hub output data rate.
    pub async fn sh_data_rate_set(&mut self, val: ShubOdr) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            let mut slv0_config = Slv0Config::read(state).await?;
            slv0_config.set_shub_odr((val as u8) & 0x03);
            slv0_config.write(state).await
        })
        .await
    }

    /// Get the actual sensor hub output data rate.
    pub async fn sh_data_rate_get(&mut self) -> Result<ShubOdr, Error<B::Error>> {
        let slv0_config = self
            .operate_over_sensor_hub(async |state| Slv0Config::read(state).await)
            .await?;

        let val = ShubOdr::try_from(slv0_config.shub_odr()).unwrap_or_default();
        Ok(val)
    }

    /// Configure the slave 0 write descriptor.
    ///
    /// The write is performed at the next sensor hub cycle (or once, in
    /// write-once mode).
    pub async fn sh_cfg_write(&mut self, val: ShCfgWrite) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            Slv0Add::new()
                .with_slave0(val.slv0_add)
                .with_rw_0(PROPERTY_DISABLE)
                .write(state)
                .await?;

            Slv0Subadd::new()
                .with_slave0_reg(val.slv0_subadd)
                .write(state)
                .await?;

            DatawriteSlv0::new()
                .with_slave0_dataw(val.slv0_data)
                .write(state)
                .await
        })
        .await
    }

    /// Configure the read descriptor of the sensor hub slave `idx`.
    pub async fn sh_slv_cfg_read(
        &mut self,
        idx: u8,
        val: ShCfgRead,
    ) -> Result<(), Error<B::Error>> {
        assert!(idx <= 3);
        self.operate_over_sensor_hub(async |state| {
            let slv_add = Slv0Add::new()
                .with_slave0(val.slv_add)
                .with_rw_0(PROPERTY_ENABLE);
            state
                .write_to_register(SensHubReg::Slv0Add as u8 + idx * 3, &[slv_add.into_bits()])
                .await?;

            state
                .write_to_register(SensHubReg::Slv0Subadd as u8 + idx * 3, &[val.slv_subadd])
                .await?;

            let mut arr: [u8; 1] = [0];
            state
                .read_from_register(SensHubReg::Slv0Config as u8 + idx * 3, &mut arr)
                .await?;

            let mut slv_config = Slv0Config::from_bits(arr[0]);
            slv_config.set_slave0_numop(val.slv_len & 0x07);
            state
                .write_to_register(
                    SensHubReg::Slv0Config as u8 + idx * 3,
                    &[slv_config.into_bits()],
                )
                .await
        })
        .await
    }

    /// Read the sensor hub output registers.
    ///
    /// Data is filled in slave 0..3 declaration order; at most 18 bytes.
    pub async fn sh_read_data_raw_get(
        &mut self,
        buf: &mut [u8],
        len: u8,
    ) -> Result<(), Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| {
            state
                .read_from_register(SensHubReg::SensorHub1 as u8, &mut buf[..len as usize])
                .await
        })
        .await
    }

    /// Get the sensor hub source register.
    pub async fn sh_status_get(&mut self) -> Result<StatusMaster, Error<B::Error>> {
        self.operate_over_sensor_hub(async |state| StatusMaster::read(state).await)
            .await
    }
}

pub fn npy_half_to_float(bytes: u16) -> f32 {
    let half_float = f16::from_bits(bytes);
    f32::from(half_float)
}

pub fn npy_float_to_half(f: f32) -> u16 {
    let half_float = f16::from_f32(f);
    half_float.to_bits()
}

/// Convert the given LSB value to milligravity (mg), ±2 g full scale.
pub fn from_fs2_to_mg(lsb: i16) -> f32 {
    (lsb as f32) * 0.061
}

/// Convert the given LSB value to milligravity (mg), ±4 g full scale.
pub fn from_fs4_to_mg(lsb: i16) -> f32 {
    (lsb as f32) * 0.122
}

/// Convert the given LSB value to milligravity (mg), ±8 g full scale.
pub fn from_fs8_to_mg(lsb: i16) -> f32 {
    (lsb as f32) * 0.244
}

/// Convert the given LSB value to milligravity (mg), ±16 g full scale.
pub fn from_fs16_to_mg(lsb: i16) -> f32 {
    (lsb as f32) * 0.488
}

/// Convert the given LSB value to millidegrees per second, ±125 dps full scale.
pub fn from_fs125_to_mdps(lsb: i16) -> f32 {
    (lsb as f32) * 4.375
}

/// Convert the given LSB value to millidegrees per second, ±250 dps full scale.
pub fn from_fs250_to_mdps(lsb: i16) -> f32 {
    (lsb as f32) * 8.750
}

/// Convert the given LSB value to millidegrees per second, ±500 dps full scale.
pub fn from_fs500_to_mdps(lsb: i16) -> f32 {
    (lsb as f32) * 17.50
}

/// Convert the given LSB value to millidegrees per second, ±1000 dps full scale.
pub fn from_fs1000_to_mdps(lsb: i16) -> f32 {
    (lsb as f32) * 35.0
}

/// Convert the given LSB value to millidegrees per second, ±2000 dps full scale.
pub fn from_fs2000_to_mdps(lsb: i16) -> f32 {
    (lsb as f32) * 70.0
}

/// Convert the given LSB value to Celsius degrees.
pub fn from_lsb_to_celsius(lsb: i16) -> f32 {
    ((lsb as f32) / 256.0) + 25.0
}

/// Convert a timestamp LSB value to nanoseconds (25 us/LSB).
pub fn from_lsb_to_nsec(lsb: u32) -> u64 {
    (lsb as u64) * 25000
}

/// Status of all the interrupt sources of the device.
#[derive(Default, Debug, PartialEq)]
pub struct AllSources {
    pub drdy_xl: u8,
    pub drdy_gy: u8,
    pub drdy_temp: u8,
    pub timestamp: u8,
    pub free_fall: u8,
    pub wake_up: u8,
    pub wake_up_x: u8,
    pub wake_up_y: u8,
    pub wake_up_z: u8,
    pub sleep_state: u8,
    pub sleep_change: u8,
    pub single_tap: u8,
    pub double_tap: u8,
    pub tap_x: u8,
    pub tap_y: u8,
    pub tap_z: u8,
    pub tap_sign: u8,
    pub six_d: u8,
    pub six_d_xl: u8,
    pub six_d_xh: u8,
    pub six_d_yl: u8,
    pub six_d_yh: u8,
    pub six_d_zl: u8,
    pub six_d_zh: u8,
    pub step_detector: u8,
    pub tilt: u8,
    pub sig_mot: u8,
    pub fsm_lc: u8,
    pub fsm1: u8,
    pub fsm2: u8,
    pub fsm3: u8,
    pub fsm4: u8,
    pub fsm5: u8,
    pub fsm6: u8,
    pub fsm7: u8,
    pub fsm8: u8,
    pub fsm9: u8,
    pub fsm10: u8,
    pub fsm11: u8,
    pub fsm12: u8,
    pub fsm13: u8,
    pub fsm14: u8,
    pub fsm15: u8,
    pub fsm16: u8,
    pub mlc1: u8,
    pub mlc2: u8,
    pub mlc3: u8,
    pub mlc4: u8,
    pub mlc5: u8,
    pub mlc6: u8,
    pub mlc7: u8,
    pub mlc8: u8,
    pub sh_endop: u8,
    pub sh_slave0_nack: u8,
    pub sh_slave1_nack: u8,
    pub sh_slave2_nack: u8,
    pub sh_slave3_nack: u8,
    pub sh_wr_once: u8,
}

/// FIFO status: fill level and interrupt flags.
#[derive(Default, Debug, PartialEq)]
pub struct FifoStatus {
    /// Number of unread sensor data (TAG + 6 bytes) stored in FIFO.
    pub fifo_level: u16,
    /// Counter batch data rate interrupt active flag.
    pub fifo_bdr: u8,
    /// FIFO full interrupt active flag.
    pub fifo_full: u8,
    /// FIFO overrun interrupt active flag.
    pub fifo_ovr: u8,
    /// FIFO watermark interrupt active flag.
    pub fifo_th: u8,
}

/// One FIFO record: tag, time slot counter and 6-byte data set.
#[derive(Default, Debug, PartialEq)]
pub struct FifoOutRaw {
    pub tag: FifoTag,
    pub cnt: u8,
    pub data: [u8; 6],
}

/// Interrupt signals routed on the INT1 pin.
#[derive(Default, Debug, PartialEq, Clone)]
pub struct PinInt1Route {
    pub drdy_xl: u8,
    pub drdy_g: u8,
    pub boot: u8,
    pub fifo_th: u8,
    pub fifo_ovr: u8,
    pub fifo_full: u8,
    pub fifo_bdr: u8,
    pub den_flag: u8,
    pub sh_endop: u8,
    pub six_d: u8,
    pub double_tap: u8,
    pub free_fall: u8,
    pub wake_up: u8,
    pub single_tap: u8,
    pub sleep_change: u8,
    pub emb_func: u8,
}

/// Interrupt signals routed on the INT2 pin.
#[derive(Default, Debug, PartialEq, Clone)]
pub struct PinInt2Route {
    pub drdy_xl: u8,
    pub drdy_g: u8,
    pub drdy_temp: u8,
    pub fifo_th: u8,
    pub fifo_ovr: u8,
    pub fifo_full: u8,
    pub fifo_bdr: u8,
    pub timestamp: u8,
    pub six_d: u8,
    pub double_tap: u8,
    pub free_fall: u8,
    pub wake_up: u8,
    pub single_tap: u8,
    pub sleep_change: u8,
    pub emb_func: u8,
}

/// Finite state machine program enables.
#[derive(Default, Debug, Clone, Copy)]
pub struct FsmEnable {
    pub fsm_enable_a: FsmEnableA,
    pub fsm_enable_b: FsmEnableB,
}

/// Slave 0 write descriptor for the sensor hub.
#[derive(Default, Debug, PartialEq, Clone)]
pub struct ShCfgWrite {
    /// 7-bit I2C address of the slave device.
    pub slv0_add: u8,
    /// Register address on the slave device.
    pub slv0_subadd: u8,
    /// Byte written to the slave device.
    pub slv0_data: u8,
}

/// Read descriptor for a sensor hub slave.
#[derive(Default, Debug, PartialEq, Clone)]
pub struct ShCfgRead {
    /// 7-bit I2C address of the slave device.
    pub slv_add: u8,
    /// Register address on the slave device.
    pub slv_subadd: u8,
    /// Number of bytes read from the slave device.
    pub slv_len: u8,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq)]
pub enum I2CAddress {
    I2cAddL = 0x6A,
    I2cAddH = 0x6B,
}

#[allow(dead_code)]
pub const ID: u8 = 0x6C;

pub const PROPERTY_ENABLE: u8 = 1;
pub const PROPERTY_DISABLE: u8 = 0;
