use crate::error::CommandError;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use std::str::FromStr;

/// Holding registers that the command builder knows how to write.
///
/// The discriminant is the register address on the primary inverter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum HoldingRegister {
    EnableChargeTarget = 20,
    BatteryPowerMode = 27,   // discharge mode: 0 = max power, 1 = match demand
    SocForceAdjust = 29,
    ChargeSlot2Start = 31,
    ChargeSlot2End = 32,
    SystemTimeYear = 35,     // years since 2000
    SystemTimeMonth = 36,
    SystemTimeDay = 37,
    SystemTimeHour = 38,
    SystemTimeMinute = 39,
    SystemTimeSecond = 40,
    DischargeSlot2Start = 44,
    DischargeSlot2End = 45,
    ActivePowerRate = 50,
    DischargeSlot1Start = 56,
    DischargeSlot1End = 57,
    EnableDischarge = 59,
    ChargeSlot1Start = 94,
    ChargeSlot1End = 95,
    EnableCharge = 96,
    BatterySocReserve = 110,
    BatteryChargeLimit = 111,
    BatteryDischargeLimit = 112,
    BatteryDischargeMinPowerReserve = 114,
    ChargeTargetSoc = 116,
    Reboot = 163,
    BatteryPauseMode = 318,
    BatteryPauseSlotStart = 319,
    BatteryPauseSlotEnd = 320,
}

impl HoldingRegister {
    pub const ALL: [Self; 29] = [
        Self::EnableChargeTarget,
        Self::BatteryPowerMode,
        Self::SocForceAdjust,
        Self::ChargeSlot2Start,
        Self::ChargeSlot2End,
        Self::SystemTimeYear,
        Self::SystemTimeMonth,
        Self::SystemTimeDay,
        Self::SystemTimeHour,
        Self::SystemTimeMinute,
        Self::SystemTimeSecond,
        Self::DischargeSlot2Start,
        Self::DischargeSlot2End,
        Self::ActivePowerRate,
        Self::DischargeSlot1Start,
        Self::DischargeSlot1End,
        Self::EnableDischarge,
        Self::ChargeSlot1Start,
        Self::ChargeSlot1End,
        Self::EnableCharge,
        Self::BatterySocReserve,
        Self::BatteryChargeLimit,
        Self::BatteryDischargeLimit,
        Self::BatteryDischargeMinPowerReserve,
        Self::ChargeTargetSoc,
        Self::Reboot,
        Self::BatteryPauseMode,
        Self::BatteryPauseSlotStart,
        Self::BatteryPauseSlotEnd,
    ];

    pub fn address(self) -> u16 {
        self.into()
    }

    /// Symbolic name as used in register documentation, e.g. `CHARGE_TARGET_SOC`.
    pub fn name(self) -> &'static str {
        use HoldingRegister::*;

        match self {
            EnableChargeTarget => "ENABLE_CHARGE_TARGET",
            BatteryPowerMode => "BATTERY_POWER_MODE",
            SocForceAdjust => "SOC_FORCE_ADJUST",
            ChargeSlot2Start => "CHARGE_SLOT_2_START",
            ChargeSlot2End => "CHARGE_SLOT_2_END",
            SystemTimeYear => "SYSTEM_TIME_YEAR",
            SystemTimeMonth => "SYSTEM_TIME_MONTH",
            SystemTimeDay => "SYSTEM_TIME_DAY",
            SystemTimeHour => "SYSTEM_TIME_HOUR",
            SystemTimeMinute => "SYSTEM_TIME_MINUTE",
            SystemTimeSecond => "SYSTEM_TIME_SECOND",
            DischargeSlot2Start => "DISCHARGE_SLOT_2_START",
            DischargeSlot2End => "DISCHARGE_SLOT_2_END",
            ActivePowerRate => "ACTIVE_POWER_RATE",
            DischargeSlot1Start => "DISCHARGE_SLOT_1_START",
            DischargeSlot1End => "DISCHARGE_SLOT_1_END",
            EnableDischarge => "ENABLE_DISCHARGE",
            ChargeSlot1Start => "CHARGE_SLOT_1_START",
            ChargeSlot1End => "CHARGE_SLOT_1_END",
            EnableCharge => "ENABLE_CHARGE",
            BatterySocReserve => "BATTERY_SOC_RESERVE",
            BatteryChargeLimit => "BATTERY_CHARGE_LIMIT",
            BatteryDischargeLimit => "BATTERY_DISCHARGE_LIMIT",
            BatteryDischargeMinPowerReserve => "BATTERY_DISCHARGE_MIN_POWER_RESERVE",
            ChargeTargetSoc => "CHARGE_TARGET_SOC",
            Reboot => "REBOOT",
            BatteryPauseMode => "BATTERY_PAUSE_MODE",
            BatteryPauseSlotStart => "BATTERY_PAUSE_SLOT_START",
            BatteryPauseSlotEnd => "BATTERY_PAUSE_SLOT_END",
        }
    }
}

impl std::fmt::Display for HoldingRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.address())
    }
}

// accepts CHARGE_TARGET_SOC, charge_target_soc or charge-target-soc
impl FromStr for HoldingRegister {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");

        Self::ALL
            .into_iter()
            .find(|register| register.name() == wanted)
            .ok_or_else(|| CommandError::unknown_setting(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn addresses_are_unique() {
        let addresses: HashSet<u16> = HoldingRegister::ALL.iter().map(|r| r.address()).collect();
        assert_eq!(addresses.len(), HoldingRegister::ALL.len());
    }

    #[test]
    fn every_name_resolves_back_to_its_register() {
        for register in HoldingRegister::ALL {
            assert_eq!(register.name().parse::<HoldingRegister>(), Ok(register));
            assert_eq!(HoldingRegister::try_from(register.address()).ok(), Some(register));
        }
    }

    #[test]
    fn lookup_is_forgiving_about_case_and_separators() {
        assert_eq!(
            "charge-target-soc".parse::<HoldingRegister>(),
            Ok(HoldingRegister::ChargeTargetSoc)
        );
        assert_eq!(
            "battery_soc_reserve".parse::<HoldingRegister>(),
            Ok(HoldingRegister::BatterySocReserve)
        );
    }

    #[test]
    fn undeclared_name_is_unknown_setting() {
        assert_eq!(
            "CHARGE_SLOT_3_START".parse::<HoldingRegister>(),
            Err(CommandError::UnknownSetting("CHARGE_SLOT_3_START".to_string()))
        );
    }

    #[test]
    fn undeclared_address_is_rejected() {
        assert!(HoldingRegister::try_from(21_u16).is_err());
    }

    #[test]
    fn known_addresses() {
        assert_eq!(HoldingRegister::ChargeTargetSoc.address(), 116);
        assert_eq!(HoldingRegister::Reboot.address(), 163);
        assert_eq!(HoldingRegister::BatteryPauseSlotEnd.address(), 320);
        assert_eq!(HoldingRegister::Reboot.to_string(), "REBOOT(163)");
    }
}
