//! Conversions from domain values to the integers the inverter stores.
//!
//! These never validate: `NaiveTime` already restricts hours and minutes, and callers
//! that need a bounded year check it before encoding.

use crate::givenergy::TimeSlot;

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};

/// `HH:MM` packed as the decimal number `HHMM`, so 07:05 becomes 705.
pub fn encode_time(time: NaiveTime) -> u16 {
    (time.hour() * 100 + time.minute()) as u16
}

/// An optional time; `None` clears the register with 0.
pub fn encode_optional_time(time: Option<NaiveTime>) -> u16 {
    time.map(encode_time).unwrap_or(0)
}

/// Start and end register values for a slot. `None` disables the slot as `(0, 0)`.
pub fn encode_slot(slot: Option<&TimeSlot>) -> (u16, u16) {
    match slot {
        Some(slot) => (encode_time(slot.start), encode_time(slot.end)),
        None => (0, 0),
    }
}

/// Year (as years since 2000), month, day, hour, minute, second.
pub fn encode_date_time(dt: NaiveDateTime) -> [u16; 6] {
    [
        (dt.year() - 2000) as u16,
        dt.month() as u16,
        dt.day() as u16,
        dt.hour() as u16,
        dt.minute() as u16,
        dt.second() as u16,
    ]
}
