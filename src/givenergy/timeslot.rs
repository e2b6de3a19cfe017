use crate::error::CommandError;

use chrono::{NaiveTime, Timelike};
use std::str::FromStr;

/// A charge or discharge window given as two clock times.
///
/// `end` may be earlier than `start`, in which case the window runs past midnight
/// (16:00-07:00 is a normal overnight discharge slot). Nothing here checks ordering.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Build a slot from the decimal-packed form the inverter stores, e.g. `(1600, 700)`.
    pub fn from_repr(start: u16, end: u16) -> Result<Self, CommandError> {
        Ok(Self {
            start: Self::time_from_repr(start)?,
            end: Self::time_from_repr(end)?,
        })
    }

    /// The default storage mode discharge window, 16:00 until 07:00 the next day.
    pub fn overnight() -> Self {
        Self {
            start: NaiveTime::default() + chrono::Duration::hours(16),
            end: NaiveTime::default() + chrono::Duration::hours(7),
        }
    }

    fn time_from_repr(value: u16) -> Result<NaiveTime, CommandError> {
        NaiveTime::from_hms_opt(u32::from(value / 100), u32::from(value % 100), 0)
            .ok_or_else(|| CommandError::invalid_time(format!("{:04}", value)))
    }

    fn parse_time(s: &str) -> Result<NaiveTime, CommandError> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| CommandError::invalid_time(s))
    }
}

impl Default for TimeSlot {
    fn default() -> Self {
        Self::overnight()
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start.hour(),
            self.start.minute(),
            self.end.hour(),
            self.end.minute()
        )
    }
}

/// Parses `HH:MM-HH:MM`.
impl FromStr for TimeSlot {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once('-').ok_or_else(|| CommandError::invalid_time(s))?;
        Ok(Self {
            start: Self::parse_time(start)?,
            end: Self::parse_time(end)?,
        })
    }
}
