use super::validation::check_range;
use super::CommandBuilder;
use crate::error::Result;
use crate::givenergy::model::BATTERY_BASE_SLAVE_ADDRESS;
use crate::givenergy::{Model, ReadHoldingRegistersRequest, ReadInputRegistersRequest, Request};

use log::debug;

/// Default ceiling on the number of battery units probed by a complete refresh.
pub const DEFAULT_MAX_BATTERIES: u8 = 5;

/// Most battery units that fit on the bus above the base address, 0x32 up to 0xff.
pub const MAX_BATTERIES: u8 = u8::MAX - BATTERY_BASE_SLAVE_ADDRESS + 1;

/// Base of the per-battery input register block on each battery slave.
const BATTERY_INPUT_BASE_REGISTER: u16 = 60;

/// What a refresh should fetch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefreshPlan {
    /// Also read the holding registers and the extended input block.
    pub complete: bool,
    pub number_batteries: u8,
    pub max_batteries: u8,
    /// Extra holding register blocks that only some devices have, in probe order.
    pub additional_holding_registers: Vec<u16>,
}

impl Default for RefreshPlan {
    fn default() -> Self {
        Self {
            complete: false,
            number_batteries: 1,
            max_batteries: DEFAULT_MAX_BATTERIES,
            additional_holding_registers: Vec::new(),
        }
    }
}

impl RefreshPlan {
    pub fn complete(number_batteries: u8) -> Self {
        Self {
            complete: true,
            number_batteries,
            ..Self::default()
        }
    }

    pub fn minimal(number_batteries: u8) -> Self {
        Self {
            number_batteries,
            ..Self::default()
        }
    }
}

impl CommandBuilder {
    /// One holding register block that may or may not exist, depending on the device.
    pub fn refresh_additional_holding_registers(&self, base_register: u16) -> Vec<Request> {
        vec![ReadHoldingRegistersRequest::block(self.main_slave_address, base_register).into()]
    }

    /// Reads needed to refresh the plant's observable state.
    ///
    /// Order: primary input block, the three extra blocks when `complete`, one block per
    /// battery by ascending index, then the additional holding blocks as given.
    ///
    /// Fails with `InvalidParameter` when the battery count, after any raise to the
    /// ceiling, would put a battery past slave address 0xff.
    pub fn refresh_plant_data(&self, plan: &RefreshPlan) -> Result<Vec<Request>> {
        let slave = self.main_slave_address;
        let mut requests: Vec<Request> = vec![ReadInputRegistersRequest::block(slave, 0).into()];
        let mut number_batteries = plan.number_batteries;

        if plan.complete {
            requests.push(ReadHoldingRegistersRequest::block(slave, 0).into());
            requests.push(ReadHoldingRegistersRequest::block(slave, 60).into());
            requests.push(ReadInputRegistersRequest::block(slave, 120).into());

            // a partial battery scan would leave the missing units timing out, so ask for
            // every possible one
            if Model::has_remote_batteries(self.model) && number_batteries != plan.max_batteries {
                debug!(
                    "complete refresh: probing {} batteries instead of {}",
                    plan.max_batteries, number_batteries
                );
                number_batteries = plan.max_batteries;
            }
        }

        check_range(
            "Number of batteries",
            i32::from(number_batteries),
            0..=i32::from(MAX_BATTERIES),
        )?;

        requests.extend((0..number_batteries).map(|i| {
            Request::from(ReadInputRegistersRequest::block(
                BATTERY_BASE_SLAVE_ADDRESS + i,
                BATTERY_INPUT_BASE_REGISTER,
            ))
        }));

        for base_register in &plan.additional_holding_registers {
            requests.extend(self.refresh_additional_holding_registers(*base_register));
        }

        Ok(requests)
    }
}
