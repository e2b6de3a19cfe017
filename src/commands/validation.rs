use crate::error::{CommandError, Result};

use std::ops::RangeInclusive;

/// Charge target, state of charge percentages.
pub const SOC_PERCENT: RangeInclusive<i32> = 4..=100;
/// Minimum state of charge to keep in the battery.
///
/// Assumed to match the charge target range; not yet confirmed against hardware.
pub const SOC_RESERVE_PERCENT: RangeInclusive<i32> = 4..=100;
/// Charge and discharge power limits. 50% (about 2.6kW) is the ceiling on most inverters.
pub const POWER_LIMIT_PERCENT: RangeInclusive<i32> = 0..=50;
pub const POWER_RESERVE_PERCENT: RangeInclusive<i32> = 4..=100;
pub const BATTERY_PAUSE_MODE: RangeInclusive<i32> = 0..=3;
/// The inverter stores the year as an offset from 2000.
pub const SYSTEM_TIME_YEAR: RangeInclusive<i32> = 2000..=2099;

/// Checks that a setting lies within its inclusive range.
///
/// # Arguments
/// * `name` - Human readable setting name, used in the error
/// * `value` - The value the caller asked for
/// * `range` - Inclusive range of accepted values
///
/// # Returns
/// * `Ok(value)` narrowed to the register width
/// * `Err(CommandError::InvalidParameter)` naming the setting, the value and the range
///
/// # Examples
/// ```
/// use givenergy_commands::commands::validation::{check_range, POWER_LIMIT_PERCENT};
///
/// assert_eq!(check_range("charge limit", 50, POWER_LIMIT_PERCENT).unwrap(), 50);
/// assert!(check_range("charge limit", 51, POWER_LIMIT_PERCENT).is_err());
/// ```
pub fn check_range(name: &'static str, value: i32, range: RangeInclusive<i32>) -> Result<u16> {
    if !range.contains(&value) {
        return Err(CommandError::invalid_parameter(
            name,
            value,
            *range.start(),
            *range.end(),
        ));
    }

    u16::try_from(value)
        .map_err(|_| CommandError::invalid_parameter(name, value, *range.start(), *range.end()))
}
