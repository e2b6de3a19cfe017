mod common;
use common::*;

use givenergy_commands::commands::{SlotKind, SlotNumber};

#[test]
fn overnight_slot_encoding() {
    common_setup();

    let slot = Factory::slot((16, 0), (7, 0));
    assert_eq!(
        CommandBuilder::set_charge_slot_1(Some(slot)).unwrap(),
        vec![
            write(HoldingRegister::ChargeSlot1Start, 1600),
            write(HoldingRegister::ChargeSlot1End, 700),
        ]
    );
}

#[test]
fn minutes_are_kept() {
    let slot = Factory::slot((0, 30), (23, 59));
    assert_eq!(
        CommandBuilder::set_discharge_slot_2(Some(slot)).unwrap(),
        vec![
            write(HoldingRegister::DischargeSlot2Start, 30),
            write(HoldingRegister::DischargeSlot2End, 2359),
        ]
    );
}

#[test]
fn each_slot_has_its_own_registers() {
    let slot = Some(Factory::slot((1, 0), (2, 0)));

    let cases = [
        (
            CommandBuilder::set_charge_slot_1(slot),
            HoldingRegister::ChargeSlot1Start,
            HoldingRegister::ChargeSlot1End,
        ),
        (
            CommandBuilder::set_charge_slot_2(slot),
            HoldingRegister::ChargeSlot2Start,
            HoldingRegister::ChargeSlot2End,
        ),
        (
            CommandBuilder::set_discharge_slot_1(slot),
            HoldingRegister::DischargeSlot1Start,
            HoldingRegister::DischargeSlot1End,
        ),
        (
            CommandBuilder::set_discharge_slot_2(slot),
            HoldingRegister::DischargeSlot2Start,
            HoldingRegister::DischargeSlot2End,
        ),
    ];

    for (requests, start, end) in cases {
        let requests = requests.unwrap();
        assert_writes_are_mapped(&requests);
        assert_eq!(requests, vec![write(start, 100), write(end, 200)]);
    }
}

#[test]
fn clearing_a_slot_writes_zeros() {
    assert_eq!(
        CommandBuilder::set_charge_slot_2(None).unwrap(),
        vec![
            write(HoldingRegister::ChargeSlot2Start, 0),
            write(HoldingRegister::ChargeSlot2End, 0),
        ]
    );
    for requests in [
        CommandBuilder::reset_charge_slot_1().unwrap(),
        CommandBuilder::reset_discharge_slot_2().unwrap(),
    ] {
        assert_writes_are_mapped(&requests);
    }
    assert_eq!(
        CommandBuilder::reset_charge_slot_1(),
        CommandBuilder::set_charge_slot_1(None)
    );
    assert_eq!(
        CommandBuilder::reset_charge_slot_2(),
        CommandBuilder::set_charge_slot_2(None)
    );
    assert_eq!(
        CommandBuilder::reset_discharge_slot_1(),
        CommandBuilder::set_discharge_slot_1(None)
    );
    assert_eq!(
        CommandBuilder::reset_discharge_slot_2(),
        CommandBuilder::set_discharge_slot_2(None)
    );
}

#[test]
fn zero_length_slot_is_allowed() {
    let slot = Factory::slot((12, 0), (12, 0));
    assert_eq!(
        CommandBuilder::set_discharge_slot_1(Some(slot)).unwrap(),
        vec![
            write(HoldingRegister::DischargeSlot1Start, 1200),
            write(HoldingRegister::DischargeSlot1End, 1200),
        ]
    );
}

#[test]
fn generic_set_slot() {
    let slot = Some(Factory::slot((16, 0), (7, 0)));
    assert_eq!(
        CommandBuilder::set_slot(SlotKind::Discharge, SlotNumber::One, slot),
        CommandBuilder::set_discharge_slot_1(slot)
    );
    assert!(SlotNumber::try_from(3_u8).is_err());
}

#[test]
fn pause_slot() {
    for requests in [
        CommandBuilder::set_pause_slot_start(Some(Factory::time(9, 5))).unwrap(),
        CommandBuilder::set_pause_slot_end(None).unwrap(),
    ] {
        assert_writes_are_mapped(&requests);
    }

    assert_eq!(
        CommandBuilder::set_pause_slot_start(Some(Factory::time(9, 5))).unwrap(),
        vec![write(HoldingRegister::BatteryPauseSlotStart, 905)]
    );
    assert_eq!(
        CommandBuilder::set_pause_slot_end(Some(Factory::time(17, 45))).unwrap(),
        vec![write(HoldingRegister::BatteryPauseSlotEnd, 1745)]
    );
    assert_eq!(
        CommandBuilder::set_pause_slot_end(None).unwrap(),
        vec![write(HoldingRegister::BatteryPauseSlotEnd, 0)]
    );
}

#[test]
fn slot_from_text() {
    let slot: TimeSlot = "16:00-07:00".parse().unwrap();
    assert_eq!(slot, TimeSlot::overnight());
    assert_eq!(slot.to_string(), "16:00-07:00");
    assert!("16:00".parse::<TimeSlot>().is_err());
}
