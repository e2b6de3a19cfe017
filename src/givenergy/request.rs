use crate::register::HoldingRegister;

use enum_dispatch::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use serde_with::{serde_as, FromInto};

/// Number of registers fetched by every block read.
pub const REGISTER_BLOCK_SIZE: u16 = 60;

// {{{ FunctionCode
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum FunctionCode {
    ReadHoldingRegisters = 3,
    ReadInputRegisters = 4,
    WriteHoldingRegister = 6,
}
// }}}

#[enum_dispatch]
pub trait RequestCommon {
    fn function_code(&self) -> FunctionCode;
    /// Target device on the bus. Writes always go to the primary device chosen by the
    /// transport, so they carry none.
    fn slave_address(&self) -> Option<u8>;
    fn base_register(&self) -> u16;
    fn register_count(&self) -> u16;

    fn is_write(&self) -> bool {
        self.function_code() == FunctionCode::WriteHoldingRegister
    }
}

/// A single register operation for the transport to serialise and send.
#[enum_dispatch(RequestCommon)]
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    ReadHoldingRegisters(ReadHoldingRegistersRequest),
    ReadInputRegisters(ReadInputRegistersRequest),
    WriteHoldingRegister(WriteHoldingRegisterRequest),
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadHoldingRegisters(r) => write!(
                f,
                "read holding {}+{} from {:#04x}",
                r.base_register, r.register_count, r.slave_address
            ),
            Self::ReadInputRegisters(r) => write!(
                f,
                "read input {}+{} from {:#04x}",
                r.base_register, r.register_count, r.slave_address
            ),
            Self::WriteHoldingRegister(r) => write!(f, "write {} = {}", r.register, r.value),
        }
    }
}

/////////////
//
// READS
//
/////////////

#[derive(Eq, PartialEq, Clone, Copy, Debug, Serialize)]
pub struct ReadHoldingRegistersRequest {
    pub slave_address: u8,
    pub base_register: u16,
    pub register_count: u16,
}

impl ReadHoldingRegistersRequest {
    pub fn new(slave_address: u8, base_register: u16, register_count: u16) -> Self {
        Self {
            slave_address,
            base_register,
            register_count,
        }
    }

    pub fn block(slave_address: u8, base_register: u16) -> Self {
        Self::new(slave_address, base_register, REGISTER_BLOCK_SIZE)
    }
}

impl RequestCommon for ReadHoldingRegistersRequest {
    fn function_code(&self) -> FunctionCode {
        FunctionCode::ReadHoldingRegisters
    }
    fn slave_address(&self) -> Option<u8> {
        Some(self.slave_address)
    }
    fn base_register(&self) -> u16 {
        self.base_register
    }
    fn register_count(&self) -> u16 {
        self.register_count
    }
}

#[derive(Eq, PartialEq, Clone, Copy, Debug, Serialize)]
pub struct ReadInputRegistersRequest {
    pub slave_address: u8,
    pub base_register: u16,
    pub register_count: u16,
}

impl ReadInputRegistersRequest {
    pub fn new(slave_address: u8, base_register: u16, register_count: u16) -> Self {
        Self {
            slave_address,
            base_register,
            register_count,
        }
    }

    pub fn block(slave_address: u8, base_register: u16) -> Self {
        Self::new(slave_address, base_register, REGISTER_BLOCK_SIZE)
    }
}

impl RequestCommon for ReadInputRegistersRequest {
    fn function_code(&self) -> FunctionCode {
        FunctionCode::ReadInputRegisters
    }
    fn slave_address(&self) -> Option<u8> {
        Some(self.slave_address)
    }
    fn base_register(&self) -> u16 {
        self.base_register
    }
    fn register_count(&self) -> u16 {
        self.register_count
    }
}

/////////////
//
// WRITES
//
/////////////

#[serde_as]
#[derive(Eq, PartialEq, Clone, Copy, Debug, Serialize)]
pub struct WriteHoldingRegisterRequest {
    #[serde_as(as = "FromInto<u16>")]
    pub register: HoldingRegister,
    pub value: u16,
}

impl WriteHoldingRegisterRequest {
    /// `value` may be a `bool`, which is written as 1 or 0.
    pub fn new<V>(register: HoldingRegister, value: V) -> Self
    where
        V: Into<u16>,
    {
        Self {
            register,
            value: value.into(),
        }
    }
}

impl RequestCommon for WriteHoldingRegisterRequest {
    fn function_code(&self) -> FunctionCode {
        FunctionCode::WriteHoldingRegister
    }
    fn slave_address(&self) -> Option<u8> {
        None
    }
    fn base_register(&self) -> u16 {
        self.register.address()
    }
    fn register_count(&self) -> u16 {
        1
    }
}
