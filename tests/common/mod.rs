#![allow(dead_code)]

pub use givenergy_commands::prelude::*;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use givenergy_commands::givenergy::{
    ReadHoldingRegistersRequest, ReadInputRegistersRequest, WriteHoldingRegisterRequest,
};

pub fn common_setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct Factory;
impl Factory {
    pub fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    pub fn slot(start: (u32, u32), end: (u32, u32)) -> TimeSlot {
        TimeSlot::new(Self::time(start.0, start.1), Self::time(end.0, end.1))
    }

    pub fn date_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 45)
            .unwrap()
    }

    pub fn config(yaml: &str) -> Config {
        Config::from_yaml(yaml).unwrap()
    }
}

pub fn write(register: HoldingRegister, value: u16) -> Request {
    WriteHoldingRegisterRequest::new(register, value).into()
}

pub fn read_holding(slave_address: u8, base_register: u16) -> Request {
    ReadHoldingRegistersRequest::new(slave_address, base_register, 60).into()
}

pub fn read_input(slave_address: u8, base_register: u16) -> Request {
    ReadInputRegistersRequest::new(slave_address, base_register, 60).into()
}

/// Every write must target a register from the map, and do so by address.
pub fn assert_writes_are_mapped(requests: &[Request]) {
    for request in requests.iter().filter(|r| r.is_write()) {
        assert!(
            HoldingRegister::try_from(request.base_register()).is_ok(),
            "unmapped register {}",
            request.base_register()
        );
    }
}
