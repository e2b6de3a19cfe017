pub mod model;
pub mod request;
pub mod timeslot;

pub use model::{BatteryPauseMode, DischargeMode, Model};
pub use request::{
    FunctionCode, ReadHoldingRegistersRequest, ReadInputRegistersRequest, Request, RequestCommon,
    WriteHoldingRegisterRequest,
};
pub use timeslot::TimeSlot;
