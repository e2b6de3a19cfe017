mod common;
use common::*;

#[test]
fn dynamic() {
    common_setup();

    let requests = CommandBuilder::set_mode_dynamic().unwrap();
    assert_eq!(
        requests,
        vec![
            write(HoldingRegister::BatteryPowerMode, 1),
            write(HoldingRegister::BatterySocReserve, 4),
            write(HoldingRegister::EnableDischarge, 0),
        ]
    );
    assert_writes_are_mapped(&requests);

    // same plan every time
    assert_eq!(CommandBuilder::set_mode_dynamic().unwrap(), requests);
}

#[test]
fn storage_without_export() {
    common_setup();

    let requests =
        CommandBuilder::set_mode_storage(Factory::slot((16, 0), (7, 0)), None, false).unwrap();
    assert_eq!(
        requests,
        vec![
            write(HoldingRegister::BatteryPowerMode, 1),
            write(HoldingRegister::BatterySocReserve, 100),
            write(HoldingRegister::EnableDischarge, 1),
            write(HoldingRegister::DischargeSlot1Start, 1600),
            write(HoldingRegister::DischargeSlot1End, 700),
            write(HoldingRegister::DischargeSlot2Start, 0),
            write(HoldingRegister::DischargeSlot2End, 0),
        ]
    );
    assert_writes_are_mapped(&requests);
}

#[test]
fn storage_for_export_with_two_slots() {
    let requests = CommandBuilder::set_mode_storage(
        Factory::slot((2, 0), (5, 30)),
        Some(Factory::slot((16, 0), (19, 0))),
        true,
    )
    .unwrap();

    assert_eq!(
        requests,
        vec![
            write(HoldingRegister::BatteryPowerMode, 0),
            write(HoldingRegister::BatterySocReserve, 100),
            write(HoldingRegister::EnableDischarge, 1),
            write(HoldingRegister::DischargeSlot1Start, 200),
            write(HoldingRegister::DischargeSlot1End, 530),
            write(HoldingRegister::DischargeSlot2Start, 1600),
            write(HoldingRegister::DischargeSlot2End, 1900),
        ]
    );
}

#[test]
fn storage_default() {
    assert_eq!(
        CommandBuilder::set_mode_storage_default(),
        CommandBuilder::set_mode_storage(TimeSlot::overnight(), None, false)
    );
}

#[test]
fn modes_only_write() {
    for requests in [
        CommandBuilder::set_mode_dynamic().unwrap(),
        CommandBuilder::set_mode_storage_default().unwrap(),
    ] {
        assert!(requests.iter().all(|r| r.is_write()));
        assert!(requests.iter().all(|r| r.slave_address().is_none()));
    }
}
