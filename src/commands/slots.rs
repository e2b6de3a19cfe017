use super::CommandBuilder;
use crate::encoding;
use crate::error::{CommandError, Result};
use crate::givenergy::{Request, TimeSlot};
use crate::register::HoldingRegister;

use chrono::NaiveTime;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlotKind {
    Charge,
    Discharge,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlotNumber {
    One,
    Two,
}

impl TryFrom<u8> for SlotNumber {
    type Error = CommandError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(CommandError::invalid_parameter("Slot number", i32::from(value), 1, 2)),
        }
    }
}

/// Start and end registers of a charge or discharge slot.
pub fn slot_registers(kind: SlotKind, number: SlotNumber) -> (HoldingRegister, HoldingRegister) {
    use HoldingRegister::*;

    match (kind, number) {
        (SlotKind::Charge, SlotNumber::One) => (ChargeSlot1Start, ChargeSlot1End),
        (SlotKind::Charge, SlotNumber::Two) => (ChargeSlot2Start, ChargeSlot2End),
        (SlotKind::Discharge, SlotNumber::One) => (DischargeSlot1Start, DischargeSlot1End),
        (SlotKind::Discharge, SlotNumber::Two) => (DischargeSlot2Start, DischargeSlot2End),
    }
}

impl CommandBuilder {
    /// Writes both registers of a slot. `None` zeroes them, which disables the slot.
    pub fn set_slot(kind: SlotKind, number: SlotNumber, slot: Option<TimeSlot>) -> Result<Vec<Request>> {
        let (start_register, end_register) = slot_registers(kind, number);
        let (start, end) = encoding::encode_slot(slot.as_ref());

        Ok(vec![
            Self::write(start_register, start),
            Self::write(end_register, end),
        ])
    }

    pub fn set_charge_slot_1(slot: Option<TimeSlot>) -> Result<Vec<Request>> {
        Self::set_slot(SlotKind::Charge, SlotNumber::One, slot)
    }

    pub fn reset_charge_slot_1() -> Result<Vec<Request>> {
        Self::set_charge_slot_1(None)
    }

    pub fn set_charge_slot_2(slot: Option<TimeSlot>) -> Result<Vec<Request>> {
        Self::set_slot(SlotKind::Charge, SlotNumber::Two, slot)
    }

    pub fn reset_charge_slot_2() -> Result<Vec<Request>> {
        Self::set_charge_slot_2(None)
    }

    pub fn set_discharge_slot_1(slot: Option<TimeSlot>) -> Result<Vec<Request>> {
        Self::set_slot(SlotKind::Discharge, SlotNumber::One, slot)
    }

    pub fn reset_discharge_slot_1() -> Result<Vec<Request>> {
        Self::set_discharge_slot_1(None)
    }

    pub fn set_discharge_slot_2(slot: Option<TimeSlot>) -> Result<Vec<Request>> {
        Self::set_slot(SlotKind::Discharge, SlotNumber::Two, slot)
    }

    pub fn reset_discharge_slot_2() -> Result<Vec<Request>> {
        Self::set_discharge_slot_2(None)
    }

    /// Start of the battery pause window; `None` writes 0.
    pub fn set_pause_slot_start(start: Option<NaiveTime>) -> Result<Vec<Request>> {
        Ok(vec![Self::write(
            HoldingRegister::BatteryPauseSlotStart,
            encoding::encode_optional_time(start),
        )])
    }

    /// End of the battery pause window; `None` writes 0.
    pub fn set_pause_slot_end(end: Option<NaiveTime>) -> Result<Vec<Request>> {
        Ok(vec![Self::write(
            HoldingRegister::BatteryPauseSlotEnd,
            encoding::encode_optional_time(end),
        )])
    }
}
