//! Turns settings and operating modes into ordered register requests.
//!
//! Every operation either returns the full list of requests or fails with a
//! [`CommandError`](crate::error::CommandError) before building any of them. Nothing here talks to a device.

pub mod modes;
pub mod refresh;
pub mod slots;
pub mod validation;

pub use slots::{SlotKind, SlotNumber};

use crate::encoding;
use crate::error::Result;
use crate::givenergy::{DischargeMode, Model, Request, WriteHoldingRegisterRequest};
use crate::register::HoldingRegister;

use chrono::{Datelike, NaiveDateTime};
use log::debug;
use validation::check_range;

/// Request builder for one inverter.
///
/// Holds the device model and the slave address derived from it; nothing else, so one
/// instance can be shared freely between callers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommandBuilder {
    model: Option<Model>,
    main_slave_address: u8,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(None)
    }
}

impl CommandBuilder {
    pub fn new(model: Option<Model>) -> Self {
        let main_slave_address = Model::slave_address(model);
        debug!(
            "command builder for model {} uses slave address {:#04x}",
            model.map(|m| m.to_string()).unwrap_or_else(|| "unknown".to_string()),
            main_slave_address
        );

        Self {
            model,
            main_slave_address,
        }
    }

    pub fn model(&self) -> Option<Model> {
        self.model
    }

    pub fn main_slave_address(&self) -> u8 {
        self.main_slave_address
    }

    fn write<V: Into<u16>>(register: HoldingRegister, value: V) -> Request {
        WriteHoldingRegisterRequest::new(register, value).into()
    }

    /// Removes the SOC limit and charges to 100%.
    pub fn disable_charge_target() -> Result<Vec<Request>> {
        Ok(vec![
            Self::write(HoldingRegister::EnableChargeTarget, false),
            Self::write(HoldingRegister::ChargeTargetSoc, 100_u16),
        ])
    }

    /// Stop charging once the battery reaches `target_soc` percent ("winter mode").
    pub fn set_charge_target(target_soc: i32) -> Result<Vec<Request>> {
        let value = check_range("Charge target SOC", target_soc, validation::SOC_PERCENT)?;
        Ok(vec![Self::write(HoldingRegister::ChargeTargetSoc, value)])
    }

    /// Allow the battery to charge, subject to the mode and charge slots.
    pub fn set_enable_charge(enabled: bool) -> Result<Vec<Request>> {
        Ok(vec![Self::write(HoldingRegister::EnableCharge, enabled)])
    }

    pub fn set_enable_charge_target(enabled: bool) -> Result<Vec<Request>> {
        Ok(vec![Self::write(HoldingRegister::EnableChargeTarget, enabled)])
    }

    /// Allow the battery to discharge, subject to the mode and discharge slots.
    pub fn set_enable_discharge(enabled: bool) -> Result<Vec<Request>> {
        Ok(vec![Self::write(HoldingRegister::EnableDischarge, enabled)])
    }

    pub fn set_discharge_mode(mode: DischargeMode) -> Result<Vec<Request>> {
        Ok(vec![Self::write(HoldingRegister::BatteryPowerMode, mode)])
    }

    /// Discharge at full power, exporting whatever the load doesn't use.
    pub fn set_discharge_mode_max_power() -> Result<Vec<Request>> {
        Self::set_discharge_mode(DischargeMode::MaxPower)
    }

    /// Discharge only to cover load demand, avoiding export.
    pub fn set_discharge_mode_to_match_demand() -> Result<Vec<Request>> {
        Self::set_discharge_mode(DischargeMode::MatchDemand)
    }

    /// Minimum state of charge to keep in the battery.
    pub fn set_battery_soc_reserve(val: i32) -> Result<Vec<Request>> {
        let value = check_range("Battery SOC reserve", val, validation::SOC_RESERVE_PERCENT)?;
        Ok(vec![Self::write(HoldingRegister::BatterySocReserve, value)])
    }

    /// Charge power limit as a percentage of the inverter rating.
    pub fn set_battery_charge_limit(val: i32) -> Result<Vec<Request>> {
        let value = check_range("Battery charge limit", val, validation::POWER_LIMIT_PERCENT)?;
        Ok(vec![Self::write(HoldingRegister::BatteryChargeLimit, value)])
    }

    /// Discharge power limit as a percentage of the inverter rating.
    pub fn set_battery_discharge_limit(val: i32) -> Result<Vec<Request>> {
        let value = check_range("Battery discharge limit", val, validation::POWER_LIMIT_PERCENT)?;
        Ok(vec![Self::write(HoldingRegister::BatteryDischargeLimit, value)])
    }

    pub fn set_battery_power_reserve(val: i32) -> Result<Vec<Request>> {
        let value = check_range("Battery power reserve", val, validation::POWER_RESERVE_PERCENT)?;
        Ok(vec![Self::write(
            HoldingRegister::BatteryDischargeMinPowerReserve,
            value,
        )])
    }

    /// Accepts a [`BatteryPauseMode`](crate::givenergy::BatteryPauseMode) or its raw ordinal.
    pub fn set_battery_pause_mode<M: Into<i32>>(mode: M) -> Result<Vec<Request>> {
        let value = check_range("Battery pause mode", mode.into(), validation::BATTERY_PAUSE_MODE)?;
        Ok(vec![Self::write(HoldingRegister::BatteryPauseMode, value)])
    }

    pub fn set_inverter_reboot() -> Result<Vec<Request>> {
        Ok(vec![Self::write(HoldingRegister::Reboot, 100_u16)])
    }

    /// Ask the inverter to recalibrate its state of charge estimate.
    pub fn set_calibrate_battery_soc() -> Result<Vec<Request>> {
        Ok(vec![Self::write(HoldingRegister::SocForceAdjust, 1_u16)])
    }

    /// Set the inverter clock. Writes year, month, day, hour, minute, second in that order.
    pub fn set_system_date_time(dt: NaiveDateTime) -> Result<Vec<Request>> {
        check_range("System time year", dt.year(), validation::SYSTEM_TIME_YEAR)?;

        let registers = [
            HoldingRegister::SystemTimeYear,
            HoldingRegister::SystemTimeMonth,
            HoldingRegister::SystemTimeDay,
            HoldingRegister::SystemTimeHour,
            HoldingRegister::SystemTimeMinute,
            HoldingRegister::SystemTimeSecond,
        ];

        Ok(registers
            .into_iter()
            .zip(encoding::encode_date_time(dt))
            .map(|(register, value)| Self::write(register, value))
            .collect())
    }

    #[deprecated(note = "use set_enable_charge(true) instead")]
    pub fn enable_charge() -> Result<Vec<Request>> {
        Self::set_enable_charge(true)
    }

    #[deprecated(note = "use set_enable_charge(false) instead")]
    pub fn disable_charge() -> Result<Vec<Request>> {
        Self::set_enable_charge(false)
    }

    #[deprecated(note = "use set_enable_discharge(true) instead")]
    pub fn enable_discharge() -> Result<Vec<Request>> {
        Self::set_enable_discharge(true)
    }

    #[deprecated(note = "use set_enable_discharge(false) instead")]
    pub fn disable_discharge() -> Result<Vec<Request>> {
        Self::set_enable_discharge(false)
    }

    #[deprecated(note = "use set_battery_soc_reserve instead")]
    pub fn set_shallow_charge(val: i32) -> Result<Vec<Request>> {
        Self::set_battery_soc_reserve(val)
    }
}
