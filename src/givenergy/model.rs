use crate::error::CommandError;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Slave address of the primary device on all-in-one units (and when the model is unknown).
pub const ALL_IN_ONE_SLAVE_ADDRESS: u8 = 0x11;
/// Slave address of the primary device on every other family.
pub const INVERTER_SLAVE_ADDRESS: u8 = 0x32;
/// First battery unit on the bus; battery `n` answers on `BATTERY_BASE_SLAVE_ADDRESS + n`.
pub const BATTERY_BASE_SLAVE_ADDRESS: u8 = 0x32;

// Model {{{
/// Inverter hardware family, keyed by the leading digit of the device type code.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, IntoPrimitive, TryFromPrimitive,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Model {
    Hybrid = 2,
    Ac = 3,
    #[serde(rename = "hybrid-3ph")]
    Hybrid3Ph = 4,
    Ems = 5,
    #[serde(rename = "ac-3ph")]
    Ac3Ph = 6,
    Gateway = 7,
    AllInOne = 8,
}

impl Model {
    pub fn all() -> &'static [Model] {
        &[
            Self::Hybrid,
            Self::Ac,
            Self::Hybrid3Ph,
            Self::Ems,
            Self::Ac3Ph,
            Self::Gateway,
            Self::AllInOne,
        ]
    }

    pub fn to_config_value(self) -> &'static str {
        match self {
            Self::Hybrid => "hybrid",
            Self::Ac => "ac",
            Self::Hybrid3Ph => "hybrid-3ph",
            Self::Ems => "ems",
            Self::Ac3Ph => "ac-3ph",
            Self::Gateway => "gateway",
            Self::AllInOne => "all-in-one",
        }
    }

    /// Resolve a model from a device type code such as `0x2001`, where the first hex digit
    /// names the family.
    pub fn from_device_type_code(code: u16) -> Result<Self, CommandError> {
        let family = (code >> 12) as u8;
        Self::try_from(family).map_err(|_| CommandError::UnknownModel(format!("{:#06x}", code)))
    }

    /// Primary slave address for an optional model; an unspecified model is treated like an
    /// all-in-one unit.
    pub fn slave_address(model: Option<Self>) -> u8 {
        match model {
            None | Some(Self::AllInOne) => ALL_IN_ONE_SLAVE_ADDRESS,
            Some(_) => INVERTER_SLAVE_ADDRESS,
        }
    }

    /// All-in-one units have no separately addressable batteries, so requests against the
    /// remote battery registers just time out.
    pub fn has_remote_batteries(model: Option<Self>) -> bool {
        !matches!(model, None | Some(Self::AllInOne))
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_config_value())
    }
}

impl FromStr for Model {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|m| m.to_config_value() == wanted)
            .ok_or_else(|| CommandError::UnknownModel(s.to_string()))
    }
} // }}}

// BatteryPauseMode {{{
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, IntoPrimitive, TryFromPrimitive)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum BatteryPauseMode {
    Disabled = 0,
    PauseCharge = 1,
    PauseDischarge = 2,
    PauseBoth = 3,
}

impl From<BatteryPauseMode> for i32 {
    fn from(mode: BatteryPauseMode) -> Self {
        i32::from(u8::from(mode))
    }
} // }}}

// DischargeMode {{{
/// How the battery discharges once discharging is enabled.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, IntoPrimitive, TryFromPrimitive)]
#[serde(rename_all = "kebab-case")]
#[repr(u16)]
pub enum DischargeMode {
    /// Full power; anything above load demand is exported.
    MaxPower = 0,
    /// Follow load demand and avoid exporting.
    MatchDemand = 1,
}

impl FromStr for DischargeMode {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "max-power" => Ok(Self::MaxPower),
            "match-demand" => Ok(Self::MatchDemand),
            _ => Err(CommandError::UnknownDischargeMode(s.to_string())),
        }
    }
} // }}}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slave_address_follows_model() {
        assert_eq!(Model::slave_address(None), 0x11);
        assert_eq!(Model::slave_address(Some(Model::AllInOne)), 0x11);
        assert_eq!(Model::slave_address(Some(Model::Hybrid)), 0x32);
        assert_eq!(Model::slave_address(Some(Model::Ac3Ph)), 0x32);
    }

    #[test]
    fn remote_batteries() {
        assert!(!Model::has_remote_batteries(None));
        assert!(!Model::has_remote_batteries(Some(Model::AllInOne)));
        assert!(Model::has_remote_batteries(Some(Model::Gateway)));
    }

    #[test]
    fn device_type_code() {
        assert_eq!(Model::from_device_type_code(0x2001), Ok(Model::Hybrid));
        assert_eq!(Model::from_device_type_code(0x8001), Ok(Model::AllInOne));
        assert_eq!(
            Model::from_device_type_code(0x1001),
            Err(CommandError::UnknownModel("0x1001".to_string()))
        );
    }

    #[test]
    fn config_names_round_trip() {
        for model in Model::all() {
            assert_eq!(model.to_config_value().parse::<Model>(), Ok(*model));
        }
        assert_eq!("ALL_IN_ONE".parse::<Model>(), Ok(Model::AllInOne));
        assert!("inverter".parse::<Model>().is_err());
    }

    #[test]
    fn discharge_mode_names() {
        assert_eq!("max-power".parse::<DischargeMode>(), Ok(DischargeMode::MaxPower));
        assert_eq!("Match_Demand".parse::<DischargeMode>(), Ok(DischargeMode::MatchDemand));

        let err = "eco".parse::<DischargeMode>().unwrap_err();
        assert_eq!(err, CommandError::UnknownDischargeMode("eco".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown discharge mode: eco (expected max-power or match-demand)"
        );
    }
}
