use super::CommandBuilder;
use crate::error::Result;
use crate::givenergy::{DischargeMode, Request, TimeSlot};

impl CommandBuilder {
    /// Dynamic / Eco mode.
    ///
    /// Maximises self-consumption of solar generation: the battery charges from surplus
    /// generation instead of exporting it, and discharges to cover load when generation
    /// falls short instead of importing. The inverter drives this from the SOC reserve, so
    /// explicit discharging is switched off.
    pub fn set_mode_dynamic() -> Result<Vec<Request>> {
        // r27=1 r110=4 r59=0
        let mut requests = Self::set_discharge_mode(DischargeMode::MatchDemand)?;
        requests.extend(Self::set_battery_soc_reserve(4)?);
        requests.extend(Self::set_enable_discharge(false)?);
        Ok(requests)
    }

    /// Storage mode with one or two discharge slots.
    ///
    /// Excess solar is stored during the day and held back until the discharge slots,
    /// 16:00-07:00 by default ([`TimeSlot::overnight`]). A missing second slot is cleared
    /// rather than left as it was.
    ///
    /// With `discharge_for_export` the battery discharges at full power and exports the
    /// excess, which suits variable export tariffs; otherwise it only matches demand.
    pub fn set_mode_storage(
        discharge_slot_1: TimeSlot,
        discharge_slot_2: Option<TimeSlot>,
        discharge_for_export: bool,
    ) -> Result<Vec<Request>> {
        let mode = if discharge_for_export {
            DischargeMode::MaxPower // r27=0
        } else {
            DischargeMode::MatchDemand // r27=1
        };

        let mut requests = Self::set_discharge_mode(mode)?;
        requests.extend(Self::set_battery_soc_reserve(100)?); // r110=100
        requests.extend(Self::set_enable_discharge(true)?); // r59=1
        requests.extend(Self::set_discharge_slot_1(Some(discharge_slot_1))?); // r56, r57
        requests.extend(Self::set_discharge_slot_2(discharge_slot_2)?); // r44, r45
        Ok(requests)
    }

    /// Storage mode over the default overnight slot, without export.
    pub fn set_mode_storage_default() -> Result<Vec<Request>> {
        Self::set_mode_storage(TimeSlot::default(), None, false)
    }
}
