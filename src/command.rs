use crate::prelude::*;
use crate::commands::{SlotKind, SlotNumber};
use crate::givenergy::model::DischargeMode;

use chrono::{NaiveDateTime, NaiveTime};
use clap::Subcommand;

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("{}: expected HH:MM", e))
}

fn parse_slot_number(s: &str) -> Result<SlotNumber, String> {
    let number: u8 = s.parse().map_err(|e| format!("{}", e))?;
    SlotNumber::try_from(number).map_err(|e| e.to_string())
}

/// Settings and modes the planner knows how to translate.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read the plant's state
    Refresh {
        /// Also read holding registers and every possible battery
        #[clap(long)]
        complete: bool,
    },
    /// Stop charging at the given state of charge (4-100%)
    ChargeTarget { soc: i32 },
    /// Remove the charge target and charge to 100%
    DisableChargeTarget,
    EnableCharge {
        #[clap(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    EnableChargeTarget {
        #[clap(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    EnableDischarge {
        #[clap(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// max-power or match-demand
    DischargeMode { mode: DischargeMode },
    /// Minimum state of charge to keep (4-100%)
    SocReserve { percent: i32 },
    /// Battery charge power limit (0-50%)
    ChargeLimit { percent: i32 },
    /// Battery discharge power limit (0-50%)
    DischargeLimit { percent: i32 },
    /// Minimum power reserve while discharging (4-100%)
    PowerReserve { percent: i32 },
    /// 0 disabled, 1 pause charge, 2 pause discharge, 3 pause both
    PauseMode {
        #[clap(allow_negative_numbers = true)]
        mode: i32,
    },
    /// Set a charge slot as HH:MM-HH:MM, or clear it when no slot is given
    ChargeSlot {
        #[clap(value_parser = parse_slot_number)]
        number: SlotNumber,
        slot: Option<TimeSlot>,
    },
    /// Set a discharge slot as HH:MM-HH:MM, or clear it when no slot is given
    DischargeSlot {
        #[clap(value_parser = parse_slot_number)]
        number: SlotNumber,
        slot: Option<TimeSlot>,
    },
    PauseSlotStart {
        #[clap(value_parser = parse_time)]
        time: Option<NaiveTime>,
    },
    PauseSlotEnd {
        #[clap(value_parser = parse_time)]
        time: Option<NaiveTime>,
    },
    /// Set the inverter clock, defaulting to the local time now
    SyncTime {
        /// e.g. 2024-03-15T09:30:45
        at: Option<NaiveDateTime>,
    },
    Reboot,
    CalibrateSoc,
    /// Dynamic / Eco mode
    Dynamic,
    /// Storage mode, discharging in the given slots
    Storage {
        #[clap(long, default_value = "16:00-07:00")]
        slot_1: TimeSlot,
        #[clap(long)]
        slot_2: Option<TimeSlot>,
        /// Discharge at full power and export the excess
        #[clap(long)]
        export: bool,
    },
}

impl Command {
    pub fn requests(&self, builder: &CommandBuilder, config: &Config) -> Result<Vec<Request>> {
        let requests = match self {
            Self::Refresh { complete } => builder.refresh_plant_data(&config.refresh_plan(*complete))?,
            Self::ChargeTarget { soc } => CommandBuilder::set_charge_target(*soc)?,
            Self::DisableChargeTarget => CommandBuilder::disable_charge_target()?,
            Self::EnableCharge { enabled } => CommandBuilder::set_enable_charge(*enabled)?,
            Self::EnableChargeTarget { enabled } => CommandBuilder::set_enable_charge_target(*enabled)?,
            Self::EnableDischarge { enabled } => CommandBuilder::set_enable_discharge(*enabled)?,
            Self::DischargeMode { mode } => CommandBuilder::set_discharge_mode(*mode)?,
            Self::SocReserve { percent } => CommandBuilder::set_battery_soc_reserve(*percent)?,
            Self::ChargeLimit { percent } => CommandBuilder::set_battery_charge_limit(*percent)?,
            Self::DischargeLimit { percent } => CommandBuilder::set_battery_discharge_limit(*percent)?,
            Self::PowerReserve { percent } => CommandBuilder::set_battery_power_reserve(*percent)?,
            Self::PauseMode { mode } => CommandBuilder::set_battery_pause_mode(*mode)?,
            Self::ChargeSlot { number, slot } => CommandBuilder::set_slot(SlotKind::Charge, *number, *slot)?,
            Self::DischargeSlot { number, slot } => {
                CommandBuilder::set_slot(SlotKind::Discharge, *number, *slot)?
            }
            Self::PauseSlotStart { time } => CommandBuilder::set_pause_slot_start(*time)?,
            Self::PauseSlotEnd { time } => CommandBuilder::set_pause_slot_end(*time)?,
            Self::SyncTime { at } => {
                let at = at.unwrap_or_else(|| chrono::Local::now().naive_local());
                CommandBuilder::set_system_date_time(at)?
            }
            Self::Reboot => CommandBuilder::set_inverter_reboot()?,
            Self::CalibrateSoc => CommandBuilder::set_calibrate_battery_soc()?,
            Self::Dynamic => CommandBuilder::set_mode_dynamic()?,
            Self::Storage {
                slot_1,
                slot_2,
                export,
            } => CommandBuilder::set_mode_storage(*slot_1, *slot_2, *export)?,
        };

        Ok(requests)
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Refresh { .. } => "refresh",
            Self::ChargeTarget { .. } => "charge-target",
            Self::DisableChargeTarget => "disable-charge-target",
            Self::EnableCharge { .. } => "enable-charge",
            Self::EnableChargeTarget { .. } => "enable-charge-target",
            Self::EnableDischarge { .. } => "enable-discharge",
            Self::DischargeMode { .. } => "discharge-mode",
            Self::SocReserve { .. } => "soc-reserve",
            Self::ChargeLimit { .. } => "charge-limit",
            Self::DischargeLimit { .. } => "discharge-limit",
            Self::PowerReserve { .. } => "power-reserve",
            Self::PauseMode { .. } => "pause-mode",
            Self::ChargeSlot { .. } => "charge-slot",
            Self::DischargeSlot { .. } => "discharge-slot",
            Self::PauseSlotStart { .. } => "pause-slot-start",
            Self::PauseSlotEnd { .. } => "pause-slot-end",
            Self::SyncTime { .. } => "sync-time",
            Self::Reboot => "reboot",
            Self::CalibrateSoc => "calibrate-soc",
            Self::Dynamic => "dynamic",
            Self::Storage { .. } => "storage",
        }
    }
}
